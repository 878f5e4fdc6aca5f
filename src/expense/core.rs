use rusqlite::{Connection, params};
use serde::{Deserialize, Serialize};
use time::{Date, macros::format_description};

use crate::Error;

pub type ExpenseId = i64;

/// A single spending event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// The id for the expense, assigned by the database.
    pub id: ExpenseId,
    /// How much was spent, always greater than zero.
    pub amount: f64,
    /// A free-form label used for grouping, e.g. "Food".
    pub category: String,
    /// When the money was spent, expected to be in the form `YYYY-MM-DD`.
    ///
    /// The date is stored as text and is never validated.
    pub date: String,
    /// An optional description, never `Some("")`.
    ///
    /// An empty note and a missing note both export to the same empty CSV field,
    /// so they are stored and listed as `None`.
    pub note: Option<String>,
}

/// The data needed to record a new expense.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub amount: f64,
    pub category: String,
    pub date: String,
    pub note: Option<String>,
}

/// The total amount spent in one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

pub fn create_expense_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS expenses (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            amount REAL NOT NULL,
            category TEXT NOT NULL,
            date TEXT NOT NULL,
            note TEXT
        )",
        (),
    )?;

    Ok(())
}

pub fn map_row_to_expense(row: &rusqlite::Row) -> Result<Expense, rusqlite::Error> {
    let id = row.get(0)?;
    let amount = row.get(1)?;
    let category = row.get(2)?;
    let date = row.get(3)?;
    let note = non_empty_note(row.get(4)?);

    Ok(Expense {
        id,
        amount,
        category,
        date,
        note,
    })
}

/// Add `expense` to the database.
///
/// An empty note is stored as NULL.
/// The amount is not checked here, callers must make sure it is positive.
///
/// # Errors
/// Returns [Error::SqlError] if the insert fails.
pub fn create_expense(expense: NewExpense, connection: &Connection) -> Result<Expense, Error> {
    let note = non_empty_note(expense.note);

    connection.execute(
        "INSERT INTO expenses (amount, category, date, note) VALUES (?1, ?2, ?3, ?4)",
        params![expense.amount, expense.category, expense.date, note],
    )?;

    let id = connection.last_insert_rowid();

    Ok(Expense {
        id,
        amount: expense.amount,
        category: expense.category,
        date: expense.date,
        note,
    })
}

fn non_empty_note(note: Option<String>) -> Option<String> {
    note.filter(|note| !note.is_empty())
}

/// Get every expense, most recent date first.
///
/// Dates are compared as text, so "2024-2-1" is placed before "2024-10-1".
///
/// # Errors
/// Returns [Error::SqlError] if the query fails.
pub fn get_all_expenses(connection: &Connection) -> Result<Vec<Expense>, Error> {
    connection
        .prepare("SELECT id, amount, category, date, note FROM expenses ORDER BY date DESC")?
        .query_map([], map_row_to_expense)?
        .map(|maybe_expense| maybe_expense.map_err(Error::from))
        .collect()
}

/// Get the sum of expense amounts for each category, in no particular order.
///
/// # Errors
/// Returns [Error::SqlError] if the query fails.
pub fn get_category_totals(connection: &Connection) -> Result<Vec<CategoryTotal>, Error> {
    connection
        .prepare("SELECT category, SUM(amount) AS total FROM expenses GROUP BY category")?
        .query_map([], |row| {
            Ok(CategoryTotal {
                category: row.get(0)?,
                total: row.get(1)?,
            })
        })?
        .map(|maybe_total| maybe_total.map_err(Error::from))
        .collect()
}

/// Get the sum of amounts for expenses whose date starts with `month_prefix`.
///
/// `month_prefix` should look like "2024-03", see [format_month_prefix].
/// Returns zero if no expenses match.
///
/// # Errors
/// Returns [Error::SqlError] if the query fails.
pub fn get_monthly_total(connection: &Connection, month_prefix: &str) -> Result<f64, Error> {
    let mut stmt =
        connection.prepare("SELECT COALESCE(SUM(amount), 0) FROM expenses WHERE date LIKE ?1")?;

    let total: f64 = stmt.query_row([format!("{month_prefix}%")], |row| row.get(0))?;

    Ok(total)
}

/// Format the year and month of `date` as `YYYY-MM`.
pub fn format_month_prefix(date: Date) -> Result<String, Error> {
    Ok(date.format(format_description!("[year]-[month]"))?)
}
