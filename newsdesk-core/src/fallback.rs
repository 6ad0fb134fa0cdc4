use newsdesk_types::NewsItem;

/// Generator for the placeholder item served when no provider yields data.
pub trait FallbackNews: Send + Sync {
    /// Produce the placeholder list for `symbol`. Never fails; an internal
    /// problem yields an empty list.
    fn synthesize(&self, symbol: &str) -> Vec<NewsItem>;
}
