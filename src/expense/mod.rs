mod core;
mod create_endpoint;
mod data_endpoint;
mod export_endpoint;

pub use self::core::{
    CategoryTotal, Expense, NewExpense, create_expense, create_expense_table,
    format_month_prefix, get_all_expenses, get_category_totals, get_monthly_total,
};
pub use create_endpoint::create_expense_endpoint;
pub use data_endpoint::get_expense_data_endpoint;
pub use export_endpoint::{export_expenses_endpoint, export_file_name};
