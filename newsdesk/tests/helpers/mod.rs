// Shared fixtures so tests can `use crate::helpers::*;`
#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use newsdesk::{
    FailurePolicy, NewsItem, Newsdesk, NewsdeskConnector, NewsdeskError, Paging, Translator,
};
use newsdesk_connectors::YahooFallback;
use newsdesk_mock::{LatencyTranslator, ManualClock, MockBehavior, MockConnector};

pub use newsdesk_mock::{item, items};

/// Fixed instant stamped on synthetic items.
pub fn now() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2025-03-10T12:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

/// A primary-style provider: whole window, errors degrade to empty.
pub fn primary() -> newsdesk_mock::MockConnectorBuilder {
    MockConnector::builder()
        .name("finnhub")
        .paging(Paging::Windowed)
        .failure_policy(FailurePolicy::Empty)
}

/// A secondary-style provider: native pages, errors degrade to the synthetic item.
pub fn secondary() -> newsdesk_mock::MockConnectorBuilder {
    MockConnector::builder()
        .name("newsapi")
        .paging(Paging::Native)
        .failure_policy(FailurePolicy::Synthesize)
}

/// Secondary provider that serves `total` items in native pages.
pub fn paged_secondary(total: usize) -> MockConnector {
    secondary()
        .with_news_fn(move |req| {
            let all = items(total, "newsapi");
            let start = req.page.offset(req.page_size).unwrap_or(usize::MAX);
            MockBehavior::Return(all.into_iter().skip(start).take(req.page_size).collect())
        })
        .build()
}

pub fn upstream_down() -> NewsdeskError {
    NewsdeskError::connector("mock", "connection refused")
}

pub fn instant_translator() -> Arc<dyn Translator> {
    Arc::new(LatencyTranslator::new(|_| Duration::ZERO))
}

/// Orchestrator over `connectors` in the given order.
pub fn desk(connectors: &[Arc<MockConnector>]) -> Newsdesk {
    desk_with(connectors, instant_translator())
}

pub fn desk_with(connectors: &[Arc<MockConnector>], translator: Arc<dyn Translator>) -> Newsdesk {
    let clock = Arc::new(ManualClock::new(now()));
    let mut b = Newsdesk::builder()
        .translator(translator)
        .fallback(Arc::new(YahooFallback::new(clock)));
    for c in connectors {
        b = b.with_connector(c.clone() as Arc<dyn NewsdeskConnector>);
    }
    b.build().unwrap()
}

pub fn titles(v: &[NewsItem]) -> Vec<String> {
    v.iter().map(|i| i.title.clone()).collect()
}
