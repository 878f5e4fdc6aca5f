//! Defines the endpoint for downloading all expenses as a CSV file.
use axum::{
    extract::{FromRef, State},
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use time::{Date, macros::format_description};

use crate::{
    AppState, Error,
    config::StorageConfig,
    expense::{Expense, get_all_expenses},
    timezone::get_current_date,
};

/// The state needed to export expenses.
#[derive(Debug, Clone)]
pub struct ExportState {
    /// Where the expense database lives.
    pub storage: StorageConfig,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    ///
    /// `None` means the server's own local time.
    pub local_timezone: Option<String>,
}

impl FromRef<AppState> for ExportState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            storage: state.storage.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// A route handler that sends every expense as a CSV attachment named
/// `expenses_<YYYYMMDD>.csv`.
///
/// On failure the client receives a JSON error body instead of a file.
pub async fn export_expenses_endpoint(State(state): State<ExportState>) -> Response {
    match export_expenses(&state) {
        Ok((file_name, csv)) => (
            [
                (CONTENT_TYPE, "text/csv".to_owned()),
                (
                    CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{file_name}\""),
                ),
            ],
            csv,
        )
            .into_response(),
        Err(error) => error.into_response(),
    }
}

fn export_expenses(state: &ExportState) -> Result<(String, String), Error> {
    let today = get_current_date(state.local_timezone.as_deref())?;
    let file_name = export_file_name(today)?;

    let connection = state.storage.open_connection()?;
    let expenses = get_all_expenses(&connection)?;
    let csv = write_expenses_csv(&expenses)?;

    tracing::info!("Exporting {} expenses to {file_name}", expenses.len());

    Ok((file_name, csv))
}

/// The name of the file produced by an export on `date`.
pub fn export_file_name(date: Date) -> Result<String, Error> {
    let date = date.format(format_description!("[year][month][day]"))?;

    Ok(format!("expenses_{date}.csv"))
}

/// Write `expenses` as CSV text with the header `id,amount,category,date,note`.
///
/// A missing note is written as an empty field.
pub fn write_expenses_csv(expenses: &[Expense]) -> Result<String, Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    if expenses.is_empty() {
        writer.write_record(["id", "amount", "category", "date", "note"])?;
    }

    for expense in expenses {
        writer.serialize(expense)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|error| Error::CsvError(error.to_string()))?;

    String::from_utf8(bytes).map_err(|error| Error::CsvError(error.to_string()))
}


#[cfg(test)]
mod export_endpoint_tests {
    use axum::{Router, http::StatusCode, routing::get};
    use axum_test::TestServer;
    use serde_json::{Value, json};
    use tempfile::TempDir;

    use crate::{
        config::StorageConfig,
        endpoints,
        expense::{Expense, NewExpense, create_expense, export_file_name, get_all_expenses},
        test_utils::get_test_storage,
        timezone::{get_local_date, get_server_local_date},
    };

    use super::{ExportState, export_expenses_endpoint};

    fn get_test_server(storage: StorageConfig) -> TestServer {
        get_test_server_with_timezone(storage, Some("Etc/UTC"))
    }

    fn get_test_server_with_timezone(storage: StorageConfig, timezone: Option<&str>) -> TestServer {
        let state = ExportState {
            storage,
            local_timezone: timezone.map(str::to_owned),
        };
        let app = Router::new()
            .route(endpoints::EXPORT, get(export_expenses_endpoint))
            .with_state(state);

        TestServer::new(app).expect("Could not create test server.")
    }

    fn insert(
        storage: &StorageConfig,
        amount: f64,
        category: &str,
        date: &str,
        note: Option<&str>,
    ) {
        let connection = storage.open_connection().unwrap();
        create_expense(
            NewExpense {
                amount,
                category: category.to_owned(),
                date: date.to_owned(),
                note: note.map(str::to_owned),
            },
            &connection,
        )
        .unwrap();
    }

    #[tokio::test]
    async fn export_is_csv_attachment() {
        let (_temp_dir, storage) = get_test_storage();
        let server = get_test_server(storage);
        let want_file_name = export_file_name(get_local_date("Etc/UTC").unwrap()).unwrap();

        let response = server.get(endpoints::EXPORT).await;

        response.assert_status_ok();
        assert_eq!(response.header("content-type"), "text/csv");
        assert_eq!(
            response.header("content-disposition"),
            format!("attachment; filename=\"{want_file_name}\"").as_str()
        );
        assert_eq!(response.text(), "id,amount,category,date,note\n");
    }

    #[tokio::test]
    async fn file_name_uses_server_local_date_without_timezone() {
        let (_temp_dir, storage) = get_test_storage();
        let server = get_test_server_with_timezone(storage, None);
        let today = get_server_local_date().unwrap();

        let response = server.get(endpoints::EXPORT).await;

        response.assert_status_ok();
        let disposition = response.header("content-disposition");
        let disposition = disposition.to_str().unwrap();
        let accepted = [today, today.next_day().unwrap()].map(|date| {
            format!("attachment; filename=\"{}\"", export_file_name(date).unwrap())
        });
        assert!(accepted.iter().any(|want| want == disposition), "got {disposition}");
    }

    #[tokio::test]
    async fn export_round_trips_listed_expenses() {
        let (_temp_dir, storage) = get_test_storage();
        insert(&storage, 12.5, "Food", "2024-03-01", Some("lunch"));
        insert(&storage, 3.0, "Bus", "2024-03-15", None);
        insert(&storage, 40.0, "Books", "2023-12-24", Some("gift \"quoted\""));
        insert(&storage, 7.0, "Food", "2024-03-10", Some(""));
        let want = get_all_expenses(&storage.open_connection().unwrap()).unwrap();
        let server = get_test_server(storage);

        let text = server.get(endpoints::EXPORT).await.text();

        let mut reader = csv::Reader::from_reader(text.as_bytes());
        let headers: Vec<String> = reader
            .headers()
            .unwrap()
            .iter()
            .map(str::to_owned)
            .collect();
        assert_eq!(headers, ["id", "amount", "category", "date", "note"]);
        let got: Vec<Expense> = reader
            .deserialize()
            .collect::<Result<_, _>>()
            .expect("Could not parse exported CSV");
        assert_eq!(got, want);
        assert_eq!(got[0].date, "2024-03-15");
        assert_eq!(got[1].note, None);
    }

    #[tokio::test]
    async fn failure_returns_json_error() {
        // No tables are created, so the query fails.
        let temp_dir = TempDir::new().unwrap();
        let server = get_test_server(StorageConfig::new(temp_dir.path()));

        let response = server.get(endpoints::EXPORT).await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body = response.json::<Value>();
        assert_eq!(body["success"], json!(false));
        assert!(body["message"].is_string());
    }
}
