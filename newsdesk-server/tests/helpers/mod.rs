#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use newsdesk::{
    FailurePolicy, FallbackNews, NewsItem, Newsdesk, NewsdeskConnector, Paging, Translator,
};
use newsdesk_mock::{LatencyTranslator, MockConnector};
use newsdesk_server::{AppState, app};
use tower::ServiceExt;

pub use newsdesk_mock::{MockBehavior, items};

pub struct NoFallback;

impl FallbackNews for NoFallback {
    fn synthesize(&self, symbol: &str) -> Vec<NewsItem> {
        let mut it = newsdesk_mock::item(0, "fallback");
        it.title = format!("{symbol} placeholder");
        vec![it]
    }
}

/// Translator that panics, standing in for an orchestration fault.
pub struct Exploding;

#[async_trait]
impl Translator for Exploding {
    async fn translate(&self, _text: &str) -> String {
        panic!("translator exploded")
    }
}

pub fn primary(items: Vec<NewsItem>) -> Arc<MockConnector> {
    Arc::new(
        MockConnector::builder()
            .name("finnhub")
            .paging(Paging::Windowed)
            .failure_policy(FailurePolicy::Empty)
            .returning(items)
            .build(),
    )
}

pub fn secondary(items: Vec<NewsItem>) -> Arc<MockConnector> {
    Arc::new(
        MockConnector::builder()
            .name("newsapi")
            .paging(Paging::Native)
            .failure_policy(FailurePolicy::Synthesize)
            .returning(items)
            .build(),
    )
}

pub fn state_with(
    connectors: Vec<Arc<MockConnector>>,
    translator: Arc<dyn Translator>,
) -> AppState {
    let mut b = Newsdesk::builder()
        .translator(translator)
        .fallback(Arc::new(NoFallback));
    for c in connectors {
        b = b.with_connector(c as Arc<dyn NewsdeskConnector>);
    }
    AppState::new(b.build().unwrap())
}

pub fn router_with(
    connectors: Vec<Arc<MockConnector>>,
    translator: Arc<dyn Translator>,
) -> Router {
    app(state_with(connectors, translator))
}

pub fn instant() -> Arc<dyn Translator> {
    Arc::new(LatencyTranslator::new(|_| Duration::ZERO))
}

pub fn router(connectors: Vec<Arc<MockConnector>>) -> Router {
    router_with(connectors, instant())
}

/// Issue a GET and decode the JSON body.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let resp = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}
