use std::{net::SocketAddr, process::exit};

use axum::{
    Router,
    extract::{MatchedPath, Request},
};
use axum_server::Handle;
use clap::Parser;
use tower_http::trace::TraceLayer;

#[cfg(debug_assertions)]
use tower_livereload::LiveReloadLayer;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use expense_tracker::{
    AppState, DEFAULT_DATA_DIR, StorageConfig, build_router, get_local_offset,
    get_server_local_date, graceful_shutdown,
};

/// The web server for the expense tracker.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory that holds the SQLite database, created if it does not exist.
    #[arg(long, default_value = DEFAULT_DATA_DIR)]
    data_dir: String,

    /// The port to serve the app from.
    #[arg(short, long, default_value_t = 5000)]
    port: u16,

    /// Canonical name of the local timezone, e.g. "Pacific/Auckland".
    ///
    /// Used to work out the current month and the date in export file names.
    /// Defaults to the server's local time.
    #[arg(long, env = "EXPENSE_TRACKER_TIMEZONE")]
    timezone: Option<String>,
}

#[tokio::main]
async fn main() {
    setup_logging();

    let args = Args::parse();

    match args.timezone.as_deref() {
        Some(timezone) if get_local_offset(timezone).is_none() => {
            tracing::error!(
                "Invalid timezone {timezone}. Use a canonical timezone name such as \"Pacific/Auckland\"."
            );
            exit(1);
        }
        Some(timezone) => tracing::info!("Using the timezone {timezone}"),
        None => {
            if let Err(error) = get_server_local_date() {
                tracing::error!("{error}. Set --timezone to a canonical timezone name.");
                exit(1);
            }
            tracing::info!("Using the server's local time");
        }
    }

    let state = match AppState::new(
        StorageConfig::new(&args.data_dir),
        args.timezone.as_deref(),
    ) {
        Ok(state) => state,
        Err(error) => {
            tracing::error!("Could not initialize the database in {}: {error}", args.data_dir);
            exit(1);
        }
    };

    let addr = SocketAddr::from(([127, 0, 0, 1], args.port));

    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    let router = add_tracing_layer(build_router(state));

    #[cfg(debug_assertions)]
    let router = router.layer(LiveReloadLayer::new());

    tracing::info!("HTTP server listening on {}", addr);
    if let Err(error) = axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await
    {
        tracing::error!("Server stopped with an error: {error}");
        exit(1);
    }
}

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().pretty())
        .init();
}

fn add_tracing_layer(router: Router) -> Router {
    let tracing_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request| {
            let method = req.method();
            let uri = req.uri();

            let matched_path = req
                .extensions()
                .get::<MatchedPath>()
                .map(|matched_path| matched_path.as_str());

            tracing::debug_span!("request", %method, %uri, matched_path)
        })
        // By default, `TraceLayer` will log 5xx responses but we're doing our specific
        // logging of errors so disable that
        .on_failure(());

    router.layer(tracing_layer)
}
