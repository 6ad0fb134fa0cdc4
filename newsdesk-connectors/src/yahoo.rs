use async_trait::async_trait;
use newsdesk_core::connector::ConnectorKey;
use newsdesk_core::{NewsdeskConnector, NewsdeskError, QuoteProvider, QuoteSnapshot};
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::http;

const DEFAULT_BASE: &str = "https://query1.finance.yahoo.com/";

#[derive(Deserialize)]
struct ChartEnvelope {
    chart: Chart,
}

#[derive(Deserialize)]
struct Chart {
    result: Option<Vec<ChartResult>>,
}

#[derive(Deserialize)]
struct ChartResult {
    meta: Meta,
    #[serde(default)]
    indicators: Indicators,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Meta {
    regular_market_price: Option<f64>,
    previous_close: Option<f64>,
    short_name: Option<String>,
}

#[derive(Deserialize, Default)]
struct Indicators {
    #[serde(default)]
    quote: Vec<QuoteBlock>,
}

#[derive(Deserialize, Default)]
struct QuoteBlock {
    #[serde(default)]
    close: Vec<Option<f64>>,
}

/// Daily chart connector used to derive quote snapshots.
pub struct YahooChartConnector {
    http: Client,
    base: Url,
}

impl YahooChartConnector {
    /// Static connector key.
    pub const KEY: ConnectorKey = ConnectorKey::new("yahoo-chart");

    /// Build against the public endpoint.
    ///
    /// # Errors
    /// Never in practice; the default base URL is a constant.
    pub fn new(http: Client) -> Result<Self, NewsdeskError> {
        Ok(Self {
            http,
            base: http::parse_base(Self::KEY.as_str(), DEFAULT_BASE)?,
        })
    }

    /// Point the connector at another host.
    ///
    /// # Errors
    /// Returns a `Connector` error when `base` is not an absolute URL.
    pub fn with_base_url(mut self, base: &str) -> Result<Self, NewsdeskError> {
        self.base = http::parse_base(Self::KEY.as_str(), base)?;
        Ok(self)
    }

    fn chart_url(&self, symbol: &str) -> Result<Url, NewsdeskError> {
        let mut url = http::endpoint(Self::KEY.as_str(), &self.base, "v8/finance/chart/")?;
        url.path_segments_mut()
            .map_err(|()| NewsdeskError::connector(Self::KEY.as_str(), "base cannot hold a path"))?
            .pop_if_empty()
            .push(symbol);
        url.query_pairs_mut()
            .append_pair("interval", "1d")
            .append_pair("range", "1d");
        Ok(url)
    }
}

impl NewsdeskConnector for YahooChartConnector {
    fn name(&self) -> &'static str {
        Self::KEY.as_str()
    }

    fn vendor(&self) -> &'static str {
        "Yahoo Finance"
    }

    fn as_quote_provider(&self) -> Option<&dyn QuoteProvider> {
        Some(self)
    }
}

#[async_trait]
impl QuoteProvider for YahooChartConnector {
    async fn quote(&self, symbol: &str) -> Result<QuoteSnapshot, NewsdeskError> {
        let req = self
            .http
            .get(self.chart_url(symbol)?)
            .header(reqwest::header::USER_AGENT, http::USER_AGENT);
        let envelope: ChartEnvelope = http::get_json(Self::KEY.as_str(), req).await?;

        let result = envelope
            .chart
            .result
            .and_then(|r| r.into_iter().next())
            .ok_or_else(|| NewsdeskError::not_found(format!("quote for {symbol}")))?;
        let last_close = result
            .indicators
            .quote
            .first()
            .and_then(|q| q.close.last().copied().flatten());

        let previous_close = result
            .meta
            .previous_close
            .or(last_close)
            .ok_or_else(|| NewsdeskError::data(format!("no previous close for {symbol}")))?;
        let current = result
            .meta
            .regular_market_price
            .or(last_close)
            .unwrap_or(previous_close);
        let name = result
            .meta
            .short_name
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| symbol.to_string());

        Ok(QuoteSnapshot::derive(
            symbol.to_string(),
            name,
            current,
            previous_close,
        ))
    }
}
