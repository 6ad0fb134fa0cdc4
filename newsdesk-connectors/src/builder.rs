use std::sync::Arc;

use newsdesk_core::connector::NewsdeskConnector;
use newsdesk_core::{Clock, NewsdeskConfig, NewsdeskError, TranslationCache};
use newsdesk_middleware::{CachingTranslator, ConnectorBuilder, TtlStore};
use reqwest::Client;

use crate::{FinnhubConnector, MyMemoryBackend, NewsApiConnector, YahooChartConnector};

/// Builder type alias specialized for newsdesk connectors.
pub type NewsdeskConnectorBuilder = ConnectorBuilder;

impl FinnhubConnector {
    /// Wrap this connector for middleware composition.
    #[must_use]
    pub fn into_builder(self) -> NewsdeskConnectorBuilder {
        ConnectorBuilder::new(Arc::new(self))
    }
}

impl NewsApiConnector {
    /// Wrap this connector for middleware composition.
    #[must_use]
    pub fn into_builder(self) -> NewsdeskConnectorBuilder {
        ConnectorBuilder::new(Arc::new(self))
    }
}

impl YahooChartConnector {
    /// Wrap this connector for middleware composition.
    #[must_use]
    pub fn into_builder(self) -> NewsdeskConnectorBuilder {
        ConnectorBuilder::new(Arc::new(self))
    }
}

/// Production wiring of every upstream from one configuration.
pub struct Wiring<'a> {
    cfg: &'a NewsdeskConfig,
    http: Client,
    clock: Arc<dyn Clock>,
}

impl<'a> Wiring<'a> {
    /// Share one HTTP client and clock across all connectors.
    #[must_use]
    pub fn new(cfg: &'a NewsdeskConfig, http: Client, clock: Arc<dyn Clock>) -> Self {
        Self { cfg, http, clock }
    }

    /// News providers in priority order: Finnhub, then NewsAPI.
    ///
    /// # Errors
    /// Propagates connector construction failures.
    pub fn news_chain(&self) -> Result<Vec<Arc<dyn NewsdeskConnector>>, NewsdeskError> {
        let window = self.cfg.provider_revalidate;
        let finnhub = FinnhubConnector::new(
            self.http.clone(),
            self.cfg.finnhub_api_key.clone(),
            Arc::clone(&self.clock),
        )?
        .into_builder()
        .with_revalidation(window, Arc::clone(&self.clock))
        .build();
        let newsapi = NewsApiConnector::new(
            self.http.clone(),
            self.cfg.news_api_key.clone(),
            Arc::clone(&self.clock),
        )?
        .into_builder()
        .with_revalidation(window, Arc::clone(&self.clock))
        .build();
        Ok(vec![finnhub, newsapi])
    }

    /// Quote connector backed by Yahoo daily charts.
    ///
    /// # Errors
    /// Propagates connector construction failures.
    pub fn quotes(&self) -> Result<Arc<dyn NewsdeskConnector>, NewsdeskError> {
        Ok(YahooChartConnector::new(self.http.clone())?
            .into_builder()
            .with_revalidation(self.cfg.provider_revalidate, Arc::clone(&self.clock))
            .build())
    }

    /// MyMemory translator with a process-wide TTL cache.
    ///
    /// # Errors
    /// Propagates backend construction failures.
    pub fn translator(&self) -> Result<CachingTranslator, NewsdeskError> {
        let backend = Arc::new(MyMemoryBackend::new(self.http.clone())?);
        let cache: Arc<TranslationCache> = Arc::new(TtlStore::new(
            self.cfg.translation_ttl,
            Arc::clone(&self.clock),
        ));
        Ok(CachingTranslator::new(backend, cache))
    }
}
