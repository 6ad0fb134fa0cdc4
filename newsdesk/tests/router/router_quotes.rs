use std::sync::Arc;
use std::time::Duration;

use newsdesk::{NewsdeskError, QuoteSnapshot};
use newsdesk_mock::{MockBehavior, MockConnector};

use crate::helpers::*;

fn snap(symbol: &str, price: f64) -> QuoteSnapshot {
    QuoteSnapshot::derive(symbol.to_string(), format!("{symbol} Corp"), price, 100.0)
}

fn symbols(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| (*s).to_string()).collect()
}

#[tokio::test]
async fn quotes_keep_input_order_and_drop_failures() {
    let yahoo = Arc::new(
        MockConnector::builder()
            .name("yahoo-chart")
            .with_quote_fn(|s| match s {
                "AMD" => MockBehavior::Fail(NewsdeskError::not_found("quote for AMD")),
                "NVDA" => MockBehavior::Return(snap(s, 120.0)),
                _ => MockBehavior::Return(snap(s, 95.0)),
            })
            .build(),
    );
    let desk = desk(&[yahoo.clone()]);

    let out = desk.quotes(&symbols(&["NVDA", "AMD", "TSLA", "INTC"])).await;
    let got: Vec<_> = out.iter().map(|q| q.symbol.as_str()).collect();
    assert_eq!(got, ["NVDA", "TSLA", "INTC"]);
    assert_eq!(out[0].change, 20.0);
    assert_eq!(out[1].change_percent, -5.0);
    assert_eq!(yahoo.quote_calls(), 4);
}

#[tokio::test(start_paused = true)]
async fn quotes_fan_out_concurrently() {
    let slow = Arc::new(
        MockConnector::builder()
            .delay(Duration::from_secs(1))
            .with_quote_fn(|s| MockBehavior::Return(snap(s, 101.0)))
            .build(),
    );
    let desk = desk(&[slow]);

    let started = tokio::time::Instant::now();
    let out = desk.quotes(&symbols(&["A", "B", "C", "D"])).await;
    assert_eq!(out.len(), 4);
    assert!(started.elapsed() < Duration::from_secs(2));
}

#[tokio::test]
async fn quote_falls_back_across_providers() {
    let first = Arc::new(
        MockConnector::builder()
            .name("first")
            .with_quote_fn(|_| MockBehavior::Fail(upstream_down()))
            .build(),
    );
    let second = Arc::new(
        MockConnector::builder()
            .name("second")
            .with_quote_fn(|s| MockBehavior::Return(snap(s, 110.0)))
            .build(),
    );
    let desk = desk(&[first.clone(), second.clone()]);

    let q = desk.quote(" nvda ").await.unwrap();
    assert_eq!(q.symbol, "NVDA");
    assert_eq!(q.price, 110.0);
    assert_eq!(first.quote_calls(), 1);
    assert_eq!(second.quote_calls(), 1);
}

#[tokio::test]
async fn quote_without_capable_connector_is_unsupported() {
    let p = Arc::new(primary().returning(vec![]).build());
    let desk = desk(&[p]);

    let err = desk.quote("NVDA").await.unwrap_err();
    assert!(matches!(err, NewsdeskError::Unsupported { .. }));
    assert!(desk.quotes(&symbols(&["NVDA"])).await.is_empty());
}

#[tokio::test]
async fn blank_quote_symbol_is_invalid() {
    let yahoo = Arc::new(
        MockConnector::builder()
            .with_quote_fn(|s| MockBehavior::Return(snap(s, 1.0)))
            .build(),
    );
    let desk = desk(&[yahoo.clone()]);
    assert!(matches!(
        desk.quote("  ").await,
        Err(NewsdeskError::InvalidArg(_))
    ));
    assert_eq!(yahoo.quote_calls(), 0);
}
