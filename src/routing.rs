//! Application router configuration.

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::services::ServeDir;

use crate::{
    AppState, endpoints,
    expense::{create_expense_endpoint, export_expenses_endpoint, get_expense_data_endpoint},
    logging::logging_middleware,
    not_found::get_404_not_found,
    page::get_index_page,
};

/// The directory that static files are served from.
pub const STATIC_DIR: &str = "static/";

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::ADD_EXPENSE, post(create_expense_endpoint))
        .route(endpoints::EXPENSE_DATA, get(get_expense_data_endpoint))
        .route(endpoints::EXPORT, get(export_expenses_endpoint))
        .layer(middleware::from_fn(logging_middleware))
        .nest_service(endpoints::STATIC, ServeDir::new(STATIC_DIR))
        .fallback(get_404_not_found)
        .with_state(state)
}
