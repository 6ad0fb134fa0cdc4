use chrono::{DateTime, TimeDelta, Utc};
use newsdesk_core::NewsItem;

const BASE_TS: i64 = 1_735_689_600; // 2025-01-01T00:00:00Z

/// A deterministic item numbered `n`, newest first as `n` grows.
#[must_use]
pub fn item(n: usize, source: &str) -> NewsItem {
    let minutes = i64::try_from(n).unwrap_or(0);
    let published_at = DateTime::<Utc>::from_timestamp(BASE_TS, 0).unwrap_or_default()
        - TimeDelta::minutes(minutes);
    NewsItem {
        title: format!("Headline {n}"),
        description: format!("Summary {n}"),
        url: format!("https://news.example/{source}/{n}"),
        source: source.to_string(),
        published_at,
        image: None,
    }
}

/// Items `1..=count` from `source`.
#[must_use]
pub fn items(count: usize, source: &str) -> Vec<NewsItem> {
    (1..=count).map(|n| item(n, source)).collect()
}
