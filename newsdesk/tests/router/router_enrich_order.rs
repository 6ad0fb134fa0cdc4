use std::sync::Arc;
use std::time::Duration;

use newsdesk::{Page, SourceFilter};
use newsdesk_mock::LatencyTranslator;
use rand::Rng;

use crate::helpers::*;

fn number(text: &str) -> u64 {
    text.rsplit(' ')
        .next()
        .and_then(|n| n.parse().ok())
        .unwrap_or(0)
}

#[tokio::test(start_paused = true)]
async fn reversed_latency_keeps_provider_order() {
    // later items finish first
    let translator = Arc::new(LatencyTranslator::new(|text| {
        Duration::from_millis(100 - number(text) * 10)
    }));
    let p = Arc::new(primary().returning(items(5, "finnhub")).build());
    let desk = desk_with(&[p], translator.clone());

    let out = desk.news("NVDA", Page::FIRST, &SourceFilter::All).await;

    let got: Vec<_> = out.iter().map(|t| t.item.title.clone()).collect();
    assert_eq!(
        got,
        ["Headline 1", "Headline 2", "Headline 3", "Headline 4", "Headline 5"]
    );
    for t in &out {
        assert_eq!(t.title_zh, LatencyTranslator::render(&t.item.title));
        assert_eq!(t.description_zh, LatencyTranslator::render(&t.item.description));
    }

    let done = translator.completion_order();
    assert_eq!(done.len(), 10);
    assert!(done[0].ends_with(" 5"), "expected item 5 to finish first, got {done:?}");
}

#[tokio::test(start_paused = true)]
async fn randomized_latency_keeps_provider_order() {
    let delays: Vec<u64> = {
        let mut rng = rand::rng();
        (0..=10).map(|_| rng.random_range(1..500)).collect()
    };
    let translator = Arc::new(LatencyTranslator::new(move |text| {
        Duration::from_millis(delays[usize::try_from(number(text)).unwrap_or(0) % delays.len()])
    }));
    let s = Arc::new(paged_secondary(10));
    let desk = desk_with(&[s], translator);

    let out = desk.news("AMD", Page::new(2), &SourceFilter::All).await;
    let got: Vec<_> = out.iter().map(|t| t.item.title.clone()).collect();
    assert_eq!(
        got,
        ["Headline 6", "Headline 7", "Headline 8", "Headline 9", "Headline 10"]
    );
    assert!(out.iter().all(|t| t.title_zh.starts_with("[zh] ")));
}

#[tokio::test(start_paused = true)]
async fn translations_run_concurrently() {
    let translator = Arc::new(LatencyTranslator::new(|_| Duration::from_secs(1)));
    let p = Arc::new(primary().returning(items(5, "finnhub")).build());
    let desk = desk_with(&[p], translator);

    let started = tokio::time::Instant::now();
    let out = desk.news("NVDA", Page::FIRST, &SourceFilter::All).await;
    assert_eq!(out.len(), 5);
    // ten one-second translations in roughly one second of virtual time
    assert!(started.elapsed() < Duration::from_secs(2));
}

#[tokio::test]
async fn enrich_of_nothing_is_nothing() {
    let p = Arc::new(primary().returning(vec![]).build());
    let desk = desk(&[p]);
    assert!(desk.enrich(vec![]).await.is_empty());
}
