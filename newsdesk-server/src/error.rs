//! Error responses for every endpoint.
//!
//! The body is always `{"error": "<message>"}` with a fixed localized message;
//! the underlying cause is logged and never sent to the caller.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

/// Wire shape of an error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Localized, caller-facing message.
    pub error: String,
}

/// Failures a handler can report.
#[derive(Debug)]
pub enum ApiError {
    /// `symbol` was absent or blank on `/news`.
    MissingSymbol,
    /// The news pipeline itself faulted.
    News(String),
    /// The quote fan-out itself faulted.
    Quote(String),
}

impl ApiError {
    /// Status code for this failure.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::MissingSymbol => StatusCode::BAD_REQUEST,
            Self::News(_) | Self::Quote(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Localized message sent to the caller.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::MissingSymbol => "請提供股票代號",
            Self::News(_) => "無法取得新聞資訊",
            Self::Quote(_) => "無法取得股價",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::MissingSymbol => tracing::debug!("news request without symbol"),
            Self::News(cause) => tracing::error!(%cause, "news pipeline failed"),
            Self::Quote(cause) => tracing::error!(%cause, "quote fan-out failed"),
        }
        let body = ErrorBody {
            error: self.message().to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
