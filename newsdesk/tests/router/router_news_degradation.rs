use std::sync::Arc;

use newsdesk::{NewsdeskError, Page, SourceFilter};

use crate::helpers::*;

#[tokio::test]
async fn secondary_failure_yields_one_synthetic_item() {
    let p = Arc::new(primary().returning(items(5, "finnhub")).build());
    let s = Arc::new(secondary().failing(upstream_down()).build());
    let desk = desk(&[p.clone(), s]);

    let out = desk
        .fetch_news("tsla", Page::FIRST, &SourceFilter::parse(Some("newsapi")))
        .await;
    assert_eq!(out.len(), 1);
    let it = &out[0];
    assert_eq!(it.title, "TSLA 股票最新動向");
    assert_eq!(it.url, "https://finance.yahoo.com/quote/TSLA");
    assert_eq!(it.source, "Yahoo Finance");
    assert_eq!(it.published_at, now());
    assert_eq!(p.news_calls(), 0);
}

#[tokio::test]
async fn primary_failure_degrades_to_empty_then_falls_through() {
    let p = Arc::new(primary().failing(NewsdeskError::http("finnhub", 429)).build());
    let s = Arc::new(paged_secondary(2));
    let desk = desk(&[p.clone(), s.clone()]);

    let out = desk.fetch_news("AMD", Page::FIRST, &SourceFilter::All).await;
    assert_eq!(out.len(), 2);
    assert_eq!(p.news_calls(), 1);
    assert_eq!(s.news_calls(), 1);
}

#[tokio::test]
async fn pinned_primary_failure_is_empty() {
    let p = Arc::new(primary().failing(upstream_down()).build());
    let s = Arc::new(paged_secondary(2));
    let desk = desk(&[p, s.clone()]);

    let out = desk
        .news("AMD", Page::FIRST, &SourceFilter::parse(Some("finnhub")))
        .await;
    assert!(out.is_empty());
    assert_eq!(s.news_calls(), 0);
}

#[tokio::test]
async fn both_down_under_all_yields_synthetic_item() {
    let p = Arc::new(primary().failing(upstream_down()).build());
    let s = Arc::new(secondary().failing(NewsdeskError::Config("no key".into())).build());
    let desk = desk(&[p, s]);

    let out = desk.news("INTC", Page::new(3), &SourceFilter::All).await;
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].item.title, "INTC 股票最新動向");
    assert_eq!(out[0].title_zh, "[zh] INTC 股票最新動向");
}

#[tokio::test]
async fn secondary_empty_answer_is_not_synthesized() {
    let p = Arc::new(primary().returning(vec![]).build());
    let s = Arc::new(secondary().returning(vec![]).build());
    let desk = desk(&[p, s]);

    let out = desk.fetch_news("NVDA", Page::FIRST, &SourceFilter::All).await;
    assert!(out.is_empty());
}
