use std::sync::Arc;

use newsdesk_core::{Clock, FallbackNews, NewsItem};
use url::Url;

const QUOTE_PAGE: &str = "https://finance.yahoo.com/quote/";

/// Placeholder generator pointing readers at the Yahoo Finance quote page.
pub struct YahooFallback {
    clock: Arc<dyn Clock>,
}

impl YahooFallback {
    /// Build a generator stamping items with `clock`.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    fn quote_url(symbol: &str) -> Option<Url> {
        let mut url = Url::parse(QUOTE_PAGE).ok()?;
        url.path_segments_mut().ok()?.pop_if_empty().push(symbol);
        Some(url)
    }
}

impl FallbackNews for YahooFallback {
    fn synthesize(&self, symbol: &str) -> Vec<NewsItem> {
        let Some(url) = Self::quote_url(symbol) else {
            return vec![];
        };
        vec![NewsItem {
            title: format!("{symbol} 股票最新動向"),
            description: format!("了解 {symbol} 股票的最新市場動向和分析"),
            url: url.into(),
            source: "Yahoo Finance".to_string(),
            published_at: self.clock.now(),
            image: None,
        }]
    }
}
