//! Defines the endpoint for recording a new expense.
use axum::{
    Json,
    extract::{FromRef, State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::{
    AppState, Error,
    config::StorageConfig,
    expense::{Expense, NewExpense, create_expense},
    json_response::StatusMessage,
};

/// The state needed to create an expense.
#[derive(Debug, Clone)]
pub struct CreateExpenseState {
    /// Where the expense database lives.
    pub storage: StorageConfig,
}

impl FromRef<AppState> for CreateExpenseState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            storage: state.storage.clone(),
        }
    }
}

/// An amount as sent by the client, either a JSON number or a string such as "12.50".
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    Number(f64),
    Text(String),
}

/// The JSON body for creating an expense.
#[derive(Debug, Deserialize)]
pub struct ExpenseForm {
    pub amount: AmountInput,
    pub category: String,
    pub date: String,
    #[serde(default)]
    pub note: Option<String>,
}

/// A route handler for creating a new expense.
///
/// Responds with `{"success": true, ...}` on success, a 400 if the amount is
/// not positive and a 500 for anything else that goes wrong.
pub async fn create_expense_endpoint(
    State(state): State<CreateExpenseState>,
    form: Result<Json<ExpenseForm>, JsonRejection>,
) -> Response {
    let Json(form) = match form {
        Ok(form) => form,
        Err(rejection) => return Error::InvalidRequest(rejection.body_text()).into_response(),
    };

    match add_expense(form, &state.storage) {
        Ok(expense) => {
            tracing::info!("Created expense {} in {}", expense.id, expense.category);
            StatusMessage::success("Expense added successfully").into_response()
        }
        Err(error) => error.into_response(),
    }
}

fn add_expense(form: ExpenseForm, storage: &StorageConfig) -> Result<Expense, Error> {
    let amount = parse_amount(&form.amount)?;

    if amount <= 0.0 {
        return Err(Error::NonPositiveAmount);
    }

    let connection = storage.open_connection()?;

    create_expense(
        NewExpense {
            amount,
            category: form.category,
            date: form.date,
            note: form.note,
        },
        &connection,
    )
}

/// Convert `amount` to a finite number.
///
/// # Errors
/// Returns [Error::InvalidAmount] if `amount` is text that is not a number,
/// or if the number is NaN or infinite.
pub fn parse_amount(amount: &AmountInput) -> Result<f64, Error> {
    let (value, text) = match amount {
        AmountInput::Number(number) => (Some(*number), number.to_string()),
        AmountInput::Text(text) => (text.trim().parse::<f64>().ok(), text.clone()),
    };

    match value {
        Some(value) if value.is_finite() => Ok(value),
        _ => Err(Error::InvalidAmount(text)),
    }
}
