//! HTTP front for the newsdesk pipeline.
//!
//! Endpoints:
//! - `GET /news?symbol=&page=&source=`: one page of news translated to zh-TW.
//! - `GET /quote?symbol=A,B`: derived quote snapshots.
//! - `GET /health`: liveness.
//!
//! Request deadlines live in the handlers (see [`AppState::deadline`]) so that
//! an expired request still answers with the JSON error body.

pub mod error;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use error::{ApiError, ErrorBody};
pub use state::{AppState, DEFAULT_DEADLINE, request_deadline};

/// Full application router with tracing and CORS layers.
pub fn app(state: AppState) -> Router {
    routes::router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
