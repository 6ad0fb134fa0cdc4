use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use newsdesk_core::{
    FailurePolicy, NewsItem, NewsProvider, NewsRequest, NewsdeskConnector, NewsdeskError, Paging,
    QuoteProvider, QuoteSnapshot,
};

/// Instruction for how a method should behave for a given input.
#[derive(Clone)]
pub enum MockBehavior<T> {
    /// Return the provided value immediately.
    Return(T),
    /// Fail immediately with the provided error.
    Fail(NewsdeskError),
    /// Hang indefinitely.
    Hang,
}

type NewsFn = Arc<dyn Fn(&NewsRequest) -> MockBehavior<Vec<NewsItem>> + Send + Sync>;
type QuoteFn = Arc<dyn Fn(&str) -> MockBehavior<QuoteSnapshot> + Send + Sync>;

/// Scriptable connector used by integration tests.
///
/// Counts calls and records every news request it receives.
pub struct MockConnector {
    name: &'static str,
    paging: Paging,
    policy: FailurePolicy,
    delay: Duration,
    news_fn: Option<NewsFn>,
    quote_fn: Option<QuoteFn>,
    news_calls: Arc<AtomicUsize>,
    quote_calls: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<NewsRequest>>>,
}

impl MockConnector {
    #[must_use]
    pub fn builder() -> MockConnectorBuilder {
        MockConnectorBuilder::default()
    }

    /// Number of `news` calls received.
    #[must_use]
    pub fn news_calls(&self) -> usize {
        self.news_calls.load(Ordering::SeqCst)
    }

    /// Number of `quote` calls received.
    #[must_use]
    pub fn quote_calls(&self) -> usize {
        self.quote_calls.load(Ordering::SeqCst)
    }

    /// Every news request received, oldest first.
    #[must_use]
    pub fn requests(&self) -> Vec<NewsRequest> {
        match self.requests.lock() {
            Ok(g) => g.clone(),
            Err(p) => p.into_inner().clone(),
        }
    }

    async fn resolve<T>(&self, behavior: MockBehavior<T>) -> Result<T, NewsdeskError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        match behavior {
            MockBehavior::Return(v) => Ok(v),
            MockBehavior::Fail(e) => Err(e),
            MockBehavior::Hang => std::future::pending().await,
        }
    }
}

impl NewsdeskConnector for MockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn as_news_provider(&self) -> Option<&dyn NewsProvider> {
        self.news_fn.as_ref().map(|_| self as &dyn NewsProvider)
    }

    fn as_quote_provider(&self) -> Option<&dyn QuoteProvider> {
        self.quote_fn.as_ref().map(|_| self as &dyn QuoteProvider)
    }
}

#[async_trait]
impl NewsProvider for MockConnector {
    async fn news(&self, req: &NewsRequest) -> Result<Vec<NewsItem>, NewsdeskError> {
        self.news_calls.fetch_add(1, Ordering::SeqCst);
        match self.requests.lock() {
            Ok(mut g) => g.push(req.clone()),
            Err(p) => p.into_inner().push(req.clone()),
        }
        let behavior = self
            .news_fn
            .as_ref()
            .map_or(MockBehavior::Fail(NewsdeskError::unsupported("news")), |f| f(req));
        self.resolve(behavior).await
    }

    fn paging(&self) -> Paging {
        self.paging
    }

    fn failure_policy(&self) -> FailurePolicy {
        self.policy
    }
}

#[async_trait]
impl QuoteProvider for MockConnector {
    async fn quote(&self, symbol: &str) -> Result<QuoteSnapshot, NewsdeskError> {
        self.quote_calls.fetch_add(1, Ordering::SeqCst);
        let behavior = self
            .quote_fn
            .as_ref()
            .map_or(MockBehavior::Fail(NewsdeskError::unsupported("quote")), |f| {
                f(symbol)
            });
        self.resolve(behavior).await
    }
}

/// Builder for [`MockConnector`].
pub struct MockConnectorBuilder {
    name: &'static str,
    paging: Paging,
    policy: FailurePolicy,
    delay: Duration,
    news_fn: Option<NewsFn>,
    quote_fn: Option<QuoteFn>,
}

impl Default for MockConnectorBuilder {
    fn default() -> Self {
        Self {
            name: "mock",
            paging: Paging::Windowed,
            policy: FailurePolicy::Empty,
            delay: Duration::ZERO,
            news_fn: None,
            quote_fn: None,
        }
    }
}

impl MockConnectorBuilder {
    #[must_use]
    pub const fn name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    #[must_use]
    pub const fn paging(mut self, paging: Paging) -> Self {
        self.paging = paging;
        self
    }

    #[must_use]
    pub const fn failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sleep before answering any call.
    #[must_use]
    pub const fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    #[must_use]
    pub fn with_news_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&NewsRequest) -> MockBehavior<Vec<NewsItem>> + Send + Sync + 'static,
    {
        self.news_fn = Some(Arc::new(f));
        self
    }

    /// Always return `items`.
    #[must_use]
    pub fn returning(self, items: Vec<NewsItem>) -> Self {
        self.with_news_fn(move |_| MockBehavior::Return(items.clone()))
    }

    /// Always fail with `err`.
    #[must_use]
    pub fn failing(self, err: NewsdeskError) -> Self {
        self.with_news_fn(move |_| MockBehavior::Fail(err.clone()))
    }

    #[must_use]
    pub fn with_quote_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> MockBehavior<QuoteSnapshot> + Send + Sync + 'static,
    {
        self.quote_fn = Some(Arc::new(f));
        self
    }

    #[must_use]
    pub fn build(self) -> MockConnector {
        MockConnector {
            name: self.name,
            paging: self.paging,
            policy: self.policy,
            delay: self.delay,
            news_fn: self.news_fn,
            quote_fn: self.quote_fn,
            news_calls: Arc::new(AtomicUsize::new(0)),
            quote_calls: Arc::new(AtomicUsize::new(0)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }
}
