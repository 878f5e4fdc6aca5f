//! Defines the endpoint that lists expenses along with their per-category and monthly totals.
use axum::{
    Json,
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
    AppState, Error,
    config::StorageConfig,
    expense::{
        CategoryTotal, Expense, format_month_prefix, get_all_expenses, get_category_totals,
        get_monthly_total,
    },
    timezone::get_current_date,
};

/// The state needed to summarise expenses.
#[derive(Debug, Clone)]
pub struct ExpenseDataState {
    /// Where the expense database lives.
    pub storage: StorageConfig,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    ///
    /// `None` means the server's own local time.
    pub local_timezone: Option<String>,
}

impl FromRef<AppState> for ExpenseDataState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            storage: state.storage.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// The body returned by [get_expense_data_endpoint] on success.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseData {
    pub success: bool,
    /// All expenses, most recent date first.
    pub expenses: Vec<Expense>,
    /// The total per category.
    pub categories: Vec<CategoryTotal>,
    /// The total for the current calendar month.
    pub monthly_total: f64,
}

/// A route handler that returns every expense, the total per category and
/// the total for the current month.
pub async fn get_expense_data_endpoint(State(state): State<ExpenseDataState>) -> Response {
    let today = match get_current_date(state.local_timezone.as_deref()) {
        Ok(today) => today,
        Err(error) => return error.into_response(),
    };

    match get_expense_data(&state.storage, today) {
        Ok(data) => Json(data).into_response(),
        Err(error) => error.into_response(),
    }
}

/// Read the expense listing and totals, with the monthly total for the month containing `today`.
///
/// # Errors
/// Returns an [Error] if the database cannot be read.
pub fn get_expense_data(storage: &StorageConfig, today: Date) -> Result<ExpenseData, Error> {
    let connection = storage.open_connection()?;

    let expenses = get_all_expenses(&connection)?;
    let categories = get_category_totals(&connection)?;
    let monthly_total = get_monthly_total(&connection, &format_month_prefix(today)?)?;

    Ok(ExpenseData {
        success: true,
        expenses,
        categories,
        monthly_total,
    })
}
