use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use newsdesk_core::connector::ConnectorKey;
use newsdesk_core::{
    Clock, FailurePolicy, NewsItem, NewsProvider, NewsRequest, NewsdeskConnector, NewsdeskError,
    Paging,
};
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::http;

const DEFAULT_BASE: &str = "https://newsapi.org/";

#[derive(Deserialize)]
struct Envelope {
    #[serde(default)]
    articles: Vec<serde_json::Value>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Article {
    source: Option<Source>,
    title: Option<String>,
    description: Option<String>,
    url: Option<String>,
    url_to_image: Option<String>,
    published_at: Option<String>,
}

#[derive(Deserialize)]
struct Source {
    name: Option<String>,
}

/// Keyword-search connector for the secondary provider.
///
/// Searches titles and descriptions for the symbol, newest first, one native
/// page at a time. Failures are reported as errors; the aggregator replaces
/// them with the synthetic item.
pub struct NewsApiConnector {
    http: Client,
    base: Url,
    api_key: Option<String>,
    clock: Arc<dyn Clock>,
}

impl NewsApiConnector {
    /// Static connector key, also the `source` filter value.
    pub const KEY: ConnectorKey = ConnectorKey::new("newsapi");

    /// Build against the public endpoint.
    ///
    /// # Errors
    /// Never in practice; the default base URL is a constant.
    pub fn new(
        http: Client,
        api_key: Option<String>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, NewsdeskError> {
        Ok(Self {
            http,
            base: http::parse_base(Self::KEY.as_str(), DEFAULT_BASE)?,
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            clock,
        })
    }

    /// Point the connector at another host (tests, proxies).
    ///
    /// # Errors
    /// Returns a `Connector` error when `base` is not an absolute URL.
    pub fn with_base_url(mut self, base: &str) -> Result<Self, NewsdeskError> {
        self.base = http::parse_base(Self::KEY.as_str(), base)?;
        Ok(self)
    }

    fn map_article(&self, a: Article) -> Option<NewsItem> {
        let title = a.title.filter(|s| !s.is_empty())?;
        let url = a.url.filter(|s| !s.is_empty())?;
        let published_at = a
            .published_at
            .as_deref()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map_or_else(|| self.clock.now(), |d| d.with_timezone(&Utc));
        Some(NewsItem {
            title,
            description: a.description.unwrap_or_default(),
            url,
            source: a
                .source
                .and_then(|s| s.name)
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "Unknown".to_string()),
            published_at,
            image: a.url_to_image.filter(|s| !s.is_empty()),
        })
    }
}

impl NewsdeskConnector for NewsApiConnector {
    fn name(&self) -> &'static str {
        Self::KEY.as_str()
    }

    fn vendor(&self) -> &'static str {
        "NewsAPI"
    }

    fn as_news_provider(&self) -> Option<&dyn NewsProvider> {
        Some(self)
    }
}

#[async_trait]
impl NewsProvider for NewsApiConnector {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "newsdesk_connectors::newsapi::news",
            skip_all,
            fields(symbol = %req.symbol, page = req.page.get()),
        )
    )]
    async fn news(&self, req: &NewsRequest) -> Result<Vec<NewsItem>, NewsdeskError> {
        let key = self
            .api_key
            .as_deref()
            .ok_or_else(|| NewsdeskError::Config("NEWS_API_KEY is not set".into()))?;
        let mut url = http::endpoint(Self::KEY.as_str(), &self.base, "v2/everything")?;
        url.query_pairs_mut()
            .append_pair("q", &req.symbol)
            .append_pair("sortBy", "publishedAt")
            .append_pair("language", "en")
            .append_pair("pageSize", &req.page_size.to_string())
            .append_pair("page", &req.page.to_string())
            .append_pair("searchIn", "title,description");

        let envelope: Envelope = http::get_json(
            Self::KEY.as_str(),
            self.http.get(url).header(reqwest::header::AUTHORIZATION, key),
        )
        .await?;
        Ok(envelope
            .articles
            .into_iter()
            .filter_map(|v| serde_json::from_value::<Article>(v).ok())
            .filter_map(|a| self.map_article(a))
            .collect())
    }

    fn paging(&self) -> Paging {
        Paging::Native
    }

    fn failure_policy(&self) -> FailurePolicy {
        FailurePolicy::Synthesize
    }
}
