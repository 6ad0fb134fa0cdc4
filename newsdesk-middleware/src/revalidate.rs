use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use newsdesk_core::{
    CacheStore, Clock, FailurePolicy, Middleware, NewsItem, NewsProvider, NewsRequest,
    NewsdeskConnector, NewsdeskError, Paging, QuoteProvider, QuoteSnapshot,
};

use crate::cache::TtlStore;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct NewsKey {
    symbol: String,
    // 0 for windowed providers, whose response does not depend on the page
    page: u32,
    page_size: usize,
}

impl NewsKey {
    fn new(req: &NewsRequest, paging: Paging) -> Self {
        let page = match paging {
            Paging::Native => req.page.get(),
            _ => 0,
        };
        Self {
            symbol: req.symbol.clone(),
            page,
            page_size: req.page_size,
        }
    }
}

/// Declarative wrapper that serves upstream responses from a freshness window.
pub struct RevalidateMiddleware {
    window: Duration,
    clock: Arc<dyn Clock>,
}

impl RevalidateMiddleware {
    #[must_use]
    pub fn new(window: Duration, clock: Arc<dyn Clock>) -> Self {
        Self { window, clock }
    }
}

impl Middleware for RevalidateMiddleware {
    fn apply(self: Box<Self>, inner: Arc<dyn NewsdeskConnector>) -> Arc<dyn NewsdeskConnector> {
        let Self { window, clock } = *self;
        Arc::new(RevalidatingConnector::new(inner, window, clock))
    }

    fn name(&self) -> &'static str {
        "RevalidateMiddleware"
    }

    fn config_json(&self) -> serde_json::Value {
        serde_json::json!({
            "window_ms": u64::try_from(self.window.as_millis()).unwrap_or(u64::MAX),
        })
    }
}

/// Connector wrapper that reuses successful upstream responses for a while.
///
/// Only non-empty news pages and successful quotes are kept; errors and empty
/// results always go back upstream on the next call.
pub struct RevalidatingConnector {
    inner: Arc<dyn NewsdeskConnector>,
    news: TtlStore<NewsKey, Vec<NewsItem>>,
    quotes: TtlStore<String, QuoteSnapshot>,
}

impl RevalidatingConnector {
    #[must_use]
    pub fn new(inner: Arc<dyn NewsdeskConnector>, window: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            inner,
            news: TtlStore::new(window, Arc::clone(&clock)),
            quotes: TtlStore::new(window, clock),
        }
    }

    fn inner_news(&self) -> Result<&dyn NewsProvider, NewsdeskError> {
        self.inner
            .as_news_provider()
            .ok_or_else(|| NewsdeskError::unsupported("news"))
    }
}

impl NewsdeskConnector for RevalidatingConnector {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn vendor(&self) -> &'static str {
        self.inner.vendor()
    }

    fn as_news_provider(&self) -> Option<&dyn NewsProvider> {
        self.inner.as_news_provider().map(|_| self as &dyn NewsProvider)
    }

    fn as_quote_provider(&self) -> Option<&dyn QuoteProvider> {
        self.inner
            .as_quote_provider()
            .map(|_| self as &dyn QuoteProvider)
    }
}

#[async_trait]
impl NewsProvider for RevalidatingConnector {
    async fn news(&self, req: &NewsRequest) -> Result<Vec<NewsItem>, NewsdeskError> {
        let inner = self.inner_news()?;
        let key = NewsKey::new(req, inner.paging());
        if let Some(hit) = self.news.get(&key).await {
            #[cfg(feature = "tracing")]
            tracing::trace!(
                connector = self.inner.name(),
                symbol = %req.symbol,
                "news served from revalidation window"
            );
            return Ok(hit);
        }
        let items = inner.news(req).await?;
        if !items.is_empty() {
            self.news.put(key, items.clone()).await;
        }
        Ok(items)
    }

    fn paging(&self) -> Paging {
        self.inner
            .as_news_provider()
            .map_or(Paging::Windowed, NewsProvider::paging)
    }

    fn failure_policy(&self) -> FailurePolicy {
        self.inner
            .as_news_provider()
            .map_or(FailurePolicy::Empty, NewsProvider::failure_policy)
    }
}

#[async_trait]
impl QuoteProvider for RevalidatingConnector {
    async fn quote(&self, symbol: &str) -> Result<QuoteSnapshot, NewsdeskError> {
        let key = symbol.to_string();
        if let Some(hit) = self.quotes.get(&key).await {
            return Ok(hit);
        }
        let q = self
            .inner
            .as_quote_provider()
            .ok_or_else(|| NewsdeskError::unsupported("quote"))?
            .quote(symbol)
            .await?;
        self.quotes.put(key, q.clone()).await;
        Ok(q)
    }
}
