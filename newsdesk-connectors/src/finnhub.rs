use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Days, NaiveDate, Utc};
use newsdesk_core::connector::ConnectorKey;
use newsdesk_core::{
    Clock, FailurePolicy, NewsItem, NewsProvider, NewsRequest, NewsdeskConnector, NewsdeskError,
    Paging,
};
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::http;

const DEFAULT_BASE: &str = "https://finnhub.io/";
const WINDOW_DAYS: u64 = 7;

#[derive(Deserialize)]
struct Article {
    headline: Option<String>,
    summary: Option<String>,
    url: Option<String>,
    source: Option<String>,
    datetime: Option<i64>,
    image: Option<String>,
}

/// Company-news connector for the primary provider.
///
/// Returns the whole trailing week in one response and leaves paging to the
/// aggregator. Without a token it answers with an empty list and makes no request.
pub struct FinnhubConnector {
    http: Client,
    base: Url,
    token: Option<String>,
    clock: Arc<dyn Clock>,
}

impl FinnhubConnector {
    /// Static connector key, also the `source` filter value.
    pub const KEY: ConnectorKey = ConnectorKey::new("finnhub");

    /// Build against the public endpoint.
    ///
    /// # Errors
    /// Never in practice; the default base URL is a constant.
    pub fn new(
        http: Client,
        token: Option<String>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, NewsdeskError> {
        Ok(Self {
            http,
            base: http::parse_base(Self::KEY.as_str(), DEFAULT_BASE)?,
            token: token.filter(|t| !t.trim().is_empty()),
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

    fn window(&self) -> (NaiveDate, NaiveDate) {
        let to = self.clock.now().date_naive();
        let from = to.checked_sub_days(Days::new(WINDOW_DAYS)).unwrap_or(to);
        (from, to)
    }

    fn map_article(&self, a: Article) -> Option<NewsItem> {
        let title = a.headline.filter(|s| !s.is_empty())?;
        let url = a.url.filter(|s| !s.is_empty())?;
        let published_at = a
            .datetime
            .filter(|&t| t != 0)
            .and_then(|t| DateTime::<Utc>::from_timestamp(t, 0))
            .unwrap_or_else(|| self.clock.now());
        Some(NewsItem {
            title,
            description: a.summary.unwrap_or_default(),
            url,
            source: a
                .source
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "Finnhub".to_string()),
            published_at,
            image: a.image.filter(|s| !s.is_empty()),
        })
    }
}

impl NewsdeskConnector for FinnhubConnector {
    fn name(&self) -> &'static str {
        Self::KEY.as_str()
    }

    fn vendor(&self) -> &'static str {
        "Finnhub"
    }

    fn as_news_provider(&self) -> Option<&dyn NewsProvider> {
        Some(self)
    }
}

#[async_trait]
impl NewsProvider for FinnhubConnector {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "newsdesk_connectors::finnhub::news",
            skip_all,
            fields(symbol = %req.symbol),
        )
    )]
    async fn news(&self, req: &NewsRequest) -> Result<Vec<NewsItem>, NewsdeskError> {
        let Some(token) = self.token.as_deref() else {
            return Ok(vec![]);
        };
        let (from, to) = self.window();
        let mut url = http::endpoint(Self::KEY.as_str(), &self.base, "api/v1/company-news")?;
        url.query_pairs_mut()
            .append_pair("symbol", &req.symbol)
            .append_pair("from", &from.format("%Y-%m-%d").to_string())
            .append_pair("to", &to.format("%Y-%m-%d").to_string())
            .append_pair("token", token);

        // Parse element-wise so one odd record does not sink the page.
        let raw: Vec<serde_json::Value> =
            http::get_json(Self::KEY.as_str(), self.http.get(url)).await?;
        Ok(raw
            .into_iter()
            .filter_map(|v| serde_json::from_value::<Article>(v).ok())
            .filter_map(|a| self.map_article(a))
            .collect())
    }

    fn paging(&self) -> Paging {
        Paging::Windowed
    }

    fn failure_policy(&self) -> FailurePolicy {
        FailurePolicy::Empty
    }
}
