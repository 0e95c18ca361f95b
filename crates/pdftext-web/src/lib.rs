//! HTTP surface for fetching remote PDFs and returning their text.
//!
//! [`router`] is public so a host that owns the listening socket can mount
//! it directly; the `pdftext-web` binary serves it on a local port.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod error;
pub mod handlers;
pub mod models;
pub mod settings;
pub mod state;
pub mod template;

pub use settings::Settings;
pub use state::AppState;

/// Build the application router with every route, permissive CORS and
/// per-request tracing.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index::index))
        .route("/api/pdf-text", get(handlers::extract::pdf_text))
        .route("/api/pdf-text-all", get(handlers::extract::pdf_text_all))
        .route("/api/health", get(handlers::health::health))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
