//! # Tenant Application Server
//!
//! Receives the finished application form and relays it to the property
//! manager as one HTML email.
//!
//! ## Routes
//!
//! - `POST /submit`: JSON application in, `{success, message, error?}` out
//! - `GET /`: landing page (`homepage.html`)
//! - `GET /tenant.html`, `GET /index.html`: fixed pages
//! - `GET /images/*`, `GET /signatures/*`: asset directories
//! - anything else: served from the template root, no directory index
//!
//! ## Status Codes
//!
//! | Case | Status |
//! |------|--------|
//! | Delivered | 200 |
//! | Malformed JSON, missing `fullName`, bad signature | 400 |
//! | Mail provider refused the message | 400 |
//! | Template unreadable, transport failure | 500 |
//!
//! ## Environment
//!
//! See [`config::Config::load`]. Secrets (`APP_PASSWORD`, `MAIL_API_KEY`) are
//! read from `/run/secrets` first.
//!
//! ```sh
//! SENDER_EMAIL=applications@example.com \
//! RECEIVER_EMAIL=manager@example.com \
//! APP_PASSWORD=... \
//! RUST_LOG=info cargo run -p tenant-backend
//! ```
use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::post,
};

#[cfg(unix)]
use tokio::signal::unix::{SignalKind, signal};
use tokio::{net::TcpListener, signal::ctrl_c};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

pub mod api;
pub mod config;
pub mod error;
pub mod mail;
pub mod routes;
pub mod signature;
pub mod smtp;
pub mod state;
pub mod template;

use config::Config;
use error::AppError;
use routes::submit_handler;
use state::AppState;

pub async fn start_server() -> Result<(), AppError> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Loading configuration...");
    let config = Config::load()?;

    info!("Initializing state...");
    let state = AppState::new(config)?;

    info!("Starting server...");
    let app = router(state.clone());

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutting down...");
    Ok(())
}

pub fn router(state: Arc<AppState>) -> Router {
    let root = state.config.template_dir.clone();

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/submit", post(submit_handler))
        .route_service("/", ServeFile::new(root.join("homepage.html")))
        .route_service("/tenant.html", ServeFile::new(root.join("tenant.html")))
        .route_service("/index.html", ServeFile::new(root.join("index.html")))
        .nest_service("/images", ServeDir::new(root.join("images")))
        .nest_service("/signatures", ServeDir::new(root.join("signatures")))
        .fallback_service(ServeDir::new(&root).append_index_html_on_directories(false))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
