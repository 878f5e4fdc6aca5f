//! Defines the app level error type and its conversion to JSON failure responses.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::json_response::StatusMessage;

/// The errors that may occur in the application.
///
/// Every error is sent to the client as `{"success": false, "message": ...}`
/// where the message is the error's display text.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The amount for a new expense was zero or negative.
    #[error("Amount must be positive")]
    NonPositiveAmount,

    /// The amount for a new expense could not be parsed as a finite number.
    ///
    /// Callers should pass in the text that could not be parsed.
    #[error("could not convert \"{0}\" to a number")]
    InvalidAmount(String),

    /// The request body was not valid JSON or was missing a required field.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The data directory for the database could not be created.
    #[error("could not create the data directory: {0}")]
    DataDirectory(String),

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// The expenses could not be written as CSV.
    #[error("could not write CSV: {0}")]
    CsvError(String),

    /// A date could not be formatted, e.g. for the month prefix or export file name.
    #[error("could not format date: {0}")]
    DateFormat(String),

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),

    /// No timezone was configured and the server's local UTC offset could not be read.
    #[error("could not determine the server's local UTC offset")]
    IndeterminateLocalOffset,
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        tracing::error!("an unhandled SQL error occurred: {}", value);
        Error::SqlError(value)
    }
}

impl From<csv::Error> for Error {
    fn from(value: csv::Error) -> Self {
        Error::CsvError(value.to_string())
    }
}

impl From<time::error::Format> for Error {
    fn from(value: time::error::Format) -> Self {
        Error::DateFormat(value.to_string())
    }
}

impl Error {
    /// The status code the client receives for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::NonPositiveAmount => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        if status_code.is_server_error() {
            tracing::error!("An unexpected error occurred: {}", self);
        }

        (status_code, StatusMessage::failure(self.to_string())).into_response()
    }
}
