//! The API endpoints URIs.

/// The page that hosts the expense tracker UI.
pub const ROOT: &str = "/";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route for recording a new expense.
pub const ADD_EXPENSE: &str = "/add";
/// The route for getting all expenses with their totals.
pub const EXPENSE_DATA: &str = "/data";
/// The route for downloading all expenses as CSV.
pub const EXPORT: &str = "/export";
