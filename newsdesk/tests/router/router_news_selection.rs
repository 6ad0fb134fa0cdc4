use std::sync::Arc;

use newsdesk::{Page, SourceFilter};

use crate::helpers::*;

#[tokio::test]
async fn blank_symbol_calls_no_provider() {
    let p = Arc::new(primary().returning(items(3, "finnhub")).build());
    let s = Arc::new(paged_secondary(10));
    let desk = desk(&[p.clone(), s.clone()]);

    for symbol in ["", "   ", "\t"] {
        let out = desk.news(symbol, Page::FIRST, &SourceFilter::All).await;
        assert!(out.is_empty());
    }
    assert_eq!(p.news_calls(), 0);
    assert_eq!(s.news_calls(), 0);
}

#[tokio::test]
async fn all_prefers_primary_when_it_has_data() {
    let p = Arc::new(primary().returning(items(3, "finnhub")).build());
    let s = Arc::new(paged_secondary(10));
    let desk = desk(&[p.clone(), s.clone()]);

    let out = desk.fetch_news("nvda", Page::FIRST, &SourceFilter::All).await;
    assert_eq!(out.len(), 3);
    assert!(out.iter().all(|i| i.source == "finnhub"));
    assert_eq!(s.news_calls(), 0);
    assert_eq!(p.requests()[0].symbol, "NVDA");
}

#[tokio::test]
async fn all_falls_through_to_secondary_when_primary_empty() {
    let p = Arc::new(primary().returning(vec![]).build());
    let s = Arc::new(paged_secondary(12));
    let desk = desk(&[p.clone(), s.clone()]);

    let out = desk.fetch_news("AMD", Page::new(2), &SourceFilter::All).await;
    assert_eq!(
        titles(&out),
        ["Headline 6", "Headline 7", "Headline 8", "Headline 9", "Headline 10"]
    );
    assert_eq!(p.news_calls(), 1);
    let seen = s.requests();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].page, Page::new(2));
    assert_eq!(seen[0].page_size, 5);
}

#[tokio::test]
async fn primary_only_empty_does_not_fall_through() {
    let p = Arc::new(primary().returning(vec![]).build());
    let s = Arc::new(paged_secondary(10));
    let desk = desk(&[p.clone(), s.clone()]);

    let out = desk
        .news("TSLA", Page::FIRST, &SourceFilter::parse(Some("finnhub")))
        .await;
    assert!(out.is_empty());
    assert_eq!(p.news_calls(), 1);
    assert_eq!(s.news_calls(), 0);
}

#[tokio::test]
async fn secondary_only_skips_primary() {
    let p = Arc::new(primary().returning(items(8, "finnhub")).build());
    let s = Arc::new(paged_secondary(3));
    let desk = desk(&[p.clone(), s.clone()]);

    let out = desk
        .fetch_news("TSLA", Page::FIRST, &SourceFilter::parse(Some("NewsAPI")))
        .await;
    assert_eq!(out.len(), 3);
    assert!(out.iter().all(|i| i.source == "newsapi"));
    assert_eq!(p.news_calls(), 0);
}

#[tokio::test]
async fn unknown_source_routes_to_last_provider() {
    let p = Arc::new(primary().returning(items(8, "finnhub")).build());
    let s = Arc::new(paged_secondary(2));
    let desk = desk(&[p.clone(), s.clone()]);

    let out = desk
        .fetch_news("INTC", Page::FIRST, &SourceFilter::parse(Some("reuters")))
        .await;
    assert_eq!(out.len(), 2);
    assert_eq!(p.news_calls(), 0);
    assert_eq!(s.news_calls(), 1);
}

#[tokio::test]
async fn all_filter_spellings_walk_the_chain() {
    for raw in [None, Some(""), Some("all"), Some(" ALL ")] {
        let p = Arc::new(primary().returning(vec![]).build());
        let s = Arc::new(paged_secondary(1));
        let desk = desk(&[p.clone(), s.clone()]);
        let out = desk
            .fetch_news("NVDA", Page::FIRST, &SourceFilter::parse(raw))
            .await;
        assert_eq!(out.len(), 1, "filter {raw:?}");
        assert_eq!(p.news_calls(), 1);
        assert_eq!(s.news_calls(), 1);
    }
}

#[tokio::test]
async fn connectors_without_news_are_skipped() {
    let quotes_only = Arc::new(
        newsdesk_mock::MockConnector::builder()
            .name("quotes")
            .with_quote_fn(|_| newsdesk_mock::MockBehavior::Fail(upstream_down()))
            .build(),
    );
    let p = Arc::new(primary().returning(vec![]).build());
    let s = Arc::new(paged_secondary(4));
    let desk = desk(&[p, s, quotes_only.clone()]);

    // "last provider" means last news-capable one
    let out = desk
        .fetch_news("NVDA", Page::FIRST, &SourceFilter::parse(Some("nope")))
        .await;
    assert_eq!(out.len(), 4);
    assert_eq!(quotes_only.news_calls(), 0);
}
