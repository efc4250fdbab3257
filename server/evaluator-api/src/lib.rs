//! Ad Evaluator API
//!
//! HTTP service that validates ad submissions, enforces a per-user daily
//! evaluation quota, and returns the engine's scores and report.

mod date;
mod error;
mod handlers;
mod state;
mod store;
mod types;

pub mod config;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use config::ServiceConfig;
pub use error::ApiError;
pub use handlers::{evaluate, health, usage};
pub use state::AppState;
pub use store::{StoreError, UsageStore};
pub use types::{EvaluateRequest, EvaluateResponse, UsageSummary};

/// All routes with tracing and permissive CORS.
pub fn router(state: Arc<AppState>) -> Router {
  Router::new()
    .route("/health", get(health))
    .route("/evaluate", post(evaluate))
    .route("/usage/:user_id", get(usage))
    .layer(TraceLayer::new_for_http())
    .layer(CorsLayer::permissive())
    .with_state(state)
}
