use std::sync::Arc;

use newsdesk_core::{FallbackNews, NewsdeskConnector, NewsdeskError, Translator};
use newsdesk_types::DEFAULT_PAGE_SIZE;

/// Orchestrator that routes news and quote requests across registered providers.
pub struct Newsdesk {
    pub(crate) connectors: Vec<Arc<dyn NewsdeskConnector>>,
    pub(crate) translator: Arc<dyn Translator>,
    pub(crate) fallback: Arc<dyn FallbackNews>,
    pub(crate) page_size: usize,
}

/// Builder for constructing a [`Newsdesk`].
pub struct NewsdeskBuilder {
    connectors: Vec<Arc<dyn NewsdeskConnector>>,
    translator: Option<Arc<dyn Translator>>,
    fallback: Option<Arc<dyn FallbackNews>>,
    page_size: usize,
}

impl Default for NewsdeskBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl NewsdeskBuilder {
    /// Start with no connectors and a page size of [`DEFAULT_PAGE_SIZE`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            connectors: vec![],
            translator: None,
            fallback: None,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Register a provider connector.
    ///
    /// Registration order is the fallback order for news: the first connector
    /// is the primary source and the last one also serves source filters that
    /// name no registered connector. Quote lookups try connectors in the same order.
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn NewsdeskConnector>) -> Self {
        self.connectors.push(c);
        self
    }

    /// Translator used to enrich every item.
    #[must_use]
    pub fn translator(mut self, t: Arc<dyn Translator>) -> Self {
        self.translator = Some(t);
        self
    }

    /// Generator used when a `Synthesize` provider fails.
    #[must_use]
    pub fn fallback(mut self, f: Arc<dyn FallbackNews>) -> Self {
        self.fallback = Some(f);
        self
    }

    /// Items per page. Zero is clamped to 1.
    #[must_use]
    pub const fn page_size(mut self, n: usize) -> Self {
        self.page_size = if n == 0 { 1 } else { n };
        self
    }

    /// Build the orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no connectors were registered or if the
    /// translator or fallback generator is missing.
    pub fn build(self) -> Result<Newsdesk, NewsdeskError> {
        if self.connectors.is_empty() {
            return Err(NewsdeskError::InvalidArg(
                "no connectors registered; add at least one via with_connector(...)".into(),
            ));
        }
        let translator = self.translator.ok_or_else(|| {
            NewsdeskError::InvalidArg(
                "no translator configured; set one via translator(...)".into(),
            )
        })?;
        let fallback = self.fallback.ok_or_else(|| {
            NewsdeskError::InvalidArg(
                "no fallback generator configured; set one via fallback(...)".into(),
            )
        })?;
        Ok(Newsdesk {
            connectors: self.connectors,
            translator,
            fallback,
            page_size: self.page_size,
        })
    }
}

impl Newsdesk {
    /// Start building a new orchestrator.
    #[must_use]
    pub fn builder() -> NewsdeskBuilder {
        NewsdeskBuilder::new()
    }

    /// Items per page.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Connectors that can serve news, in registration order.
    pub(crate) fn news_chain(&self) -> Vec<&Arc<dyn NewsdeskConnector>> {
        self.connectors
            .iter()
            .filter(|c| c.as_news_provider().is_some())
            .collect()
    }

    /// Connectors that can serve quotes, in registration order.
    pub(crate) fn quote_chain(&self) -> Vec<&Arc<dyn NewsdeskConnector>> {
        self.connectors
            .iter()
            .filter(|c| c.as_quote_provider().is_some())
            .collect()
    }
}
