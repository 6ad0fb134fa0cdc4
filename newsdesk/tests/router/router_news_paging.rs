use std::sync::Arc;

use newsdesk::{Page, SourceFilter};
use proptest::prelude::*;

use crate::helpers::*;

#[tokio::test]
async fn windowed_page_two_of_twelve_is_items_six_to_ten() {
    let p = Arc::new(primary().returning(items(12, "finnhub")).build());
    let s = Arc::new(secondary().failing(upstream_down()).build());
    let desk = desk(&[p.clone(), s.clone()]);

    let out = desk.fetch_news("NVDA", Page::new(2), &SourceFilter::All).await;
    assert_eq!(
        titles(&out),
        ["Headline 6", "Headline 7", "Headline 8", "Headline 9", "Headline 10"]
    );
    assert_eq!(s.news_calls(), 0);
}

#[tokio::test]
async fn raw_page_values_coerce_to_page_one() {
    let p = Arc::new(primary().returning(items(12, "finnhub")).build());
    let desk = desk(&[p]);

    for raw in [None, Some("0"), Some("-3"), Some("abc"), Some("NaN"), Some("inf"), Some("")] {
        let out = desk
            .fetch_news("NVDA", Page::parse(raw), &SourceFilter::All)
            .await;
        assert_eq!(
            titles(&out),
            ["Headline 1", "Headline 2", "Headline 3", "Headline 4", "Headline 5"],
            "raw page {raw:?}"
        );
    }
}

#[tokio::test]
async fn windowed_page_past_the_end_is_empty_without_fallthrough() {
    // the primary had data, so the walk stops even though this page is empty
    let p = Arc::new(primary().returning(items(4, "finnhub")).build());
    let s = Arc::new(paged_secondary(10));
    let desk = desk(&[p, s.clone()]);

    let out = desk.fetch_news("NVDA", Page::new(3), &SourceFilter::All).await;
    assert!(out.is_empty());
    assert_eq!(s.news_calls(), 0);
}

#[tokio::test]
async fn windowed_provider_sees_the_requested_page() {
    let p = Arc::new(primary().returning(items(7, "finnhub")).build());
    let desk = desk(&[p.clone()]);

    let out = desk.fetch_news("NVDA", Page::new(2), &SourceFilter::All).await;
    assert_eq!(titles(&out), ["Headline 6", "Headline 7"]);
    assert_eq!(p.requests()[0].page, Page::new(2));
}

#[tokio::test]
async fn custom_page_size_reaches_providers() {
    let s = Arc::new(paged_secondary(30));
    let desk = newsdesk::Newsdesk::builder()
        .with_connector(s.clone())
        .translator(instant_translator())
        .fallback(Arc::new(newsdesk_connectors::YahooFallback::new(Arc::new(
            newsdesk_mock::ManualClock::new(now()),
        ))))
        .page_size(10)
        .build()
        .unwrap();

    let out = desk.fetch_news("NVDA", Page::new(3), &SourceFilter::All).await;
    assert_eq!(out.len(), 10);
    assert_eq!(out[0].title, "Headline 21");
    assert_eq!(s.requests()[0].page_size, 10);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn windowed_pages_match_slice_arithmetic(total in 0usize..40, page in 1u32..10) {
        let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
        let out = rt.block_on(async {
            let p = Arc::new(primary().returning(items(total, "finnhub")).build());
            desk(&[p]).fetch_news("NVDA", Page::new(page), &SourceFilter::All).await
        });

        let start = (page as usize - 1) * 5;
        let expected: Vec<String> = (start + 1..=total.min(start + 5))
            .map(|n| format!("Headline {n}"))
            .collect();
        prop_assert_eq!(titles(&out), expected);
    }
}
