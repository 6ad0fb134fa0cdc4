use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the newsdesk workspace.
///
/// Upstream faults are carried as values up to the aggregator, which decides
/// whether they degrade to an empty page or a synthetic item. Only
/// orchestration faults ever reach the HTTP boundary.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NewsdeskError {
    /// The requested capability is not implemented by the target connector.
    #[error("unsupported capability: {capability}")]
    Unsupported {
        /// A capability string describing what was requested (e.g. "news").
        capability: String,
    },

    /// Issues with the returned or expected data (missing fields, bad JSON).
    #[error("data issue: {0}")]
    Data(String),

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// An individual connector returned an error.
    #[error("{connector} failed: {msg}")]
    Connector {
        /// Connector name that failed.
        connector: String,
        /// Human-readable error message.
        msg: String,
    },

    /// An upstream answered with a non-success HTTP status.
    #[error("{connector} returned HTTP {status}")]
    Http {
        /// Connector name that issued the request.
        connector: String,
        /// Status code returned by the upstream.
        status: u16,
    },

    /// A resource or symbol could not be found.
    #[error("not found: {what}")]
    NotFound {
        /// Description of missing resource, e.g. "quote for NVDA".
        what: String,
    },

    /// Configuration value could not be used.
    #[error("config: {0}")]
    Config(String),
}

impl NewsdeskError {
    /// Helper: build an `Unsupported` error for a capability string.
    #[must_use]
    pub fn unsupported(cap: impl Into<String>) -> Self {
        Self::Unsupported {
            capability: cap.into(),
        }
    }

    /// Helper: build a `Connector` error with the connector name and message.
    pub fn connector(connector: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Connector {
            connector: connector.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build an `Http` error for a non-success status.
    pub fn http(connector: impl Into<String>, status: u16) -> Self {
        Self::Http {
            connector: connector.into(),
            status,
        }
    }

    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Helper: build a `Data` error.
    pub fn data(msg: impl Into<String>) -> Self {
        Self::Data(msg.into())
    }
}
