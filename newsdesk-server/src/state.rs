//! State shared by every handler.

use std::sync::Arc;
use std::time::Duration;

use newsdesk::{Clock, Newsdesk, NewsdeskConfig, NewsdeskError, SystemClock};
use newsdesk_connectors::{Wiring, YahooFallback, http_client};

/// Deadline used when the state is built without configuration.
pub const DEFAULT_DEADLINE: Duration = Duration::from_secs(35);

const DEADLINE_SLACK: Duration = Duration::from_secs(5);

/// Upper bound on one request given the per-call HTTP timeout.
///
/// The slowest degraded `/news` path is two sequential provider calls followed
/// by one translation round, so the deadline sits above three HTTP timeouts.
#[must_use]
pub fn request_deadline(http_timeout: Duration) -> Duration {
    http_timeout.saturating_mul(3).saturating_add(DEADLINE_SLACK)
}

/// Application state injected through axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    /// The news and quote orchestrator.
    pub desk: Arc<Newsdesk>,
    /// Longest a handler waits on the pipeline before answering 500.
    pub deadline: Duration,
}

impl AppState {
    /// Wrap an already-built orchestrator.
    #[must_use]
    pub fn new(desk: Newsdesk) -> Self {
        Self {
            desk: Arc::new(desk),
            deadline: DEFAULT_DEADLINE,
        }
    }

    #[must_use]
    pub const fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = deadline;
        self
    }

    /// Wire the production connectors from configuration.
    ///
    /// News providers are registered first (Finnhub, then NewsAPI) followed by
    /// the Yahoo quote connector.
    ///
    /// # Errors
    /// Fails when the HTTP client or a connector cannot be constructed.
    pub fn from_config(cfg: &NewsdeskConfig) -> Result<Self, NewsdeskError> {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let wiring = Wiring::new(cfg, http_client(cfg.http_timeout)?, Arc::clone(&clock));

        let mut builder = Newsdesk::builder()
            .translator(Arc::new(wiring.translator()?))
            .fallback(Arc::new(YahooFallback::new(clock)));
        for c in wiring.news_chain()? {
            builder = builder.with_connector(c);
        }
        let desk = builder.with_connector(wiring.quotes()?).build()?;
        Ok(Self::new(desk).with_deadline(request_deadline(cfg.http_timeout)))
    }
}
