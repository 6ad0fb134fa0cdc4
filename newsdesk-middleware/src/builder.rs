//! Builder for composing connectors with middleware layers.
//!
//! Layers are stored outermost-first (last added = outermost) and applied in
//! reverse during `build()`:
//!
//! ```text
//! builder.with_layer(A).with_layer(B)
//!
//! Storage: [B, A]
//! Result:  B(A(Raw))
//! ```

use std::sync::Arc;
use std::time::Duration;

use newsdesk_core::connector::NewsdeskConnector;
use newsdesk_core::{Clock, Middleware};

use crate::revalidate::RevalidateMiddleware;

/// Generic middleware builder for composing a connector with layered wrappers.
pub struct ConnectorBuilder {
    raw: Arc<dyn NewsdeskConnector>,
    layers: Vec<Box<dyn Middleware>>,
}

impl ConnectorBuilder {
    /// Create a new builder from a raw, unwrapped connector.
    #[must_use]
    pub fn new(raw: Arc<dyn NewsdeskConnector>) -> Self {
        Self {
            raw,
            layers: Vec::new(),
        }
    }

    /// Add an arbitrary layer as the new outermost wrapper.
    #[must_use]
    pub fn with_layer(mut self, layer: Box<dyn Middleware>) -> Self {
        self.layers.insert(0, layer);
        self
    }

    /// Add or replace the revalidation window. A zero window removes it.
    #[must_use]
    pub fn with_revalidation(mut self, window: Duration, clock: Arc<dyn Clock>) -> Self {
        self.layers.retain(|m| m.name() != "RevalidateMiddleware");
        if window.is_zero() {
            return self;
        }
        self.with_layer(Box::new(RevalidateMiddleware::new(window, clock)))
    }

    /// Names of the configured layers, outermost first.
    #[must_use]
    pub fn layer_names(&self) -> Vec<&'static str> {
        self.layers.iter().map(|m| m.name()).collect()
    }

    /// Wrap the raw connector with every configured layer.
    #[must_use]
    pub fn build(self) -> Arc<dyn NewsdeskConnector> {
        let Self { raw, layers } = self;
        layers
            .into_iter()
            .rev()
            .fold(raw, |inner, layer| layer.apply(inner))
    }
}
