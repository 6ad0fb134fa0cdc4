use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A normalized news item as produced by any provider.
///
/// Items are transient: built per request and dropped after the response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    /// Headline. Never empty for items leaving a provider.
    pub title: String,
    /// Summary text; empty when the upstream had none.
    pub description: String,
    /// Link to the article. Never empty for items leaving a provider.
    pub url: String,
    /// Publisher label.
    pub source: String,
    /// Publication instant.
    pub published_at: DateTime<Utc>,
    /// Optional illustration URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl NewsItem {
    /// True when both required fields carry text.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        !self.title.trim().is_empty() && !self.url.trim().is_empty()
    }
}

/// A news item enriched with Traditional-Chinese renderings of its text fields.
///
/// `title_zh` and `description_zh` are always present. When translation
/// degrades fully they equal the source text after the keyword pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslatedNewsItem {
    /// The source item, flattened into the same JSON object.
    #[serde(flatten)]
    pub item: NewsItem,
    /// Translated headline.
    pub title_zh: String,
    /// Translated summary.
    pub description_zh: String,
}
