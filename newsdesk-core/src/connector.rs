use async_trait::async_trait;

use crate::NewsdeskError;
pub use newsdesk_types::ConnectorKey;
use newsdesk_types::{FailurePolicy, NewsItem, NewsRequest, Paging, QuoteSnapshot};

/// Focused role trait for connectors that provide news items.
#[async_trait]
pub trait NewsProvider: Send + Sync {
    /// Fetch news for the request's symbol.
    ///
    /// `Paging::Windowed` providers ignore `req.page` and return their whole
    /// window; `Paging::Native` providers return exactly the requested page.
    async fn news(&self, req: &NewsRequest) -> Result<Vec<NewsItem>, NewsdeskError>;

    /// How this provider paginates.
    fn paging(&self) -> Paging {
        Paging::Windowed
    }

    /// What the aggregator substitutes when [`NewsProvider::news`] fails.
    fn failure_policy(&self) -> FailurePolicy {
        FailurePolicy::Empty
    }
}

/// Focused role trait for connectors that provide quotes.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Fetch a derived quote for an upper-case symbol.
    async fn quote(&self, symbol: &str) -> Result<QuoteSnapshot, NewsdeskError>;
}

/// Main connector trait implemented by provider crates. Exposes capability discovery.
pub trait NewsdeskConnector: Send + Sync {
    /// A stable identifier, also the name accepted by source filters (e.g. "finnhub").
    fn name(&self) -> &'static str;

    /// Canonical connector key constructed from the static name.
    fn key(&self) -> ConnectorKey {
        ConnectorKey::new(self.name())
    }

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "Unknown"
    }

    /// Advertise news capability by returning a usable trait object reference when supported.
    fn as_news_provider(&self) -> Option<&dyn NewsProvider> {
        None
    }

    /// Advertise quote capability by returning a usable trait object reference when supported.
    fn as_quote_provider(&self) -> Option<&dyn QuoteProvider> {
        None
    }
}
