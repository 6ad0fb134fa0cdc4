use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use newsdesk_core::{NewsdeskError, TranslationBackend, Translator};

use crate::connector::MockBehavior;

/// Translation backend with scripted answers and a call counter.
///
/// Unscripted texts are answered with `prefix + text`.
pub struct MockTranslationBackend {
    prefix: String,
    scripted: HashMap<String, MockBehavior<Option<String>>>,
    fallback: Option<MockBehavior<Option<String>>>,
    delay: Duration,
    calls: AtomicUsize,
    seen: Mutex<Vec<String>>,
}

impl MockTranslationBackend {
    /// Answer every text with `prefix + text`.
    #[must_use]
    pub fn echo(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            scripted: HashMap::new(),
            fallback: None,
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        }
    }

    /// Fail every unscripted call with a connector error.
    #[must_use]
    pub fn failing() -> Self {
        let mut me = Self::echo("");
        me.fallback = Some(MockBehavior::Fail(NewsdeskError::connector(
            "mock-translate",
            "unreachable",
        )));
        me
    }

    /// Script the answer for one exact input text.
    #[must_use]
    pub fn with_response(mut self, text: &str, behavior: MockBehavior<Option<String>>) -> Self {
        self.scripted.insert(text.to_string(), behavior);
        self
    }

    #[must_use]
    pub const fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Number of backend calls received.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Inputs received, oldest first.
    #[must_use]
    pub fn seen(&self) -> Vec<String> {
        match self.seen.lock() {
            Ok(g) => g.clone(),
            Err(p) => p.into_inner().clone(),
        }
    }
}

#[async_trait]
impl TranslationBackend for MockTranslationBackend {
    fn name(&self) -> &'static str {
        "mock-translate"
    }

    async fn fetch_translation(&self, text: &str) -> Result<Option<String>, NewsdeskError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.seen.lock() {
            Ok(mut g) => g.push(text.to_string()),
            Err(p) => p.into_inner().push(text.to_string()),
        }
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let behavior = self
            .scripted
            .get(text)
            .or(self.fallback.as_ref())
            .cloned()
            .unwrap_or_else(|| MockBehavior::Return(Some(format!("{}{text}", self.prefix))));
        match behavior {
            MockBehavior::Return(v) => Ok(v),
            MockBehavior::Fail(e) => Err(e),
            MockBehavior::Hang => std::future::pending().await,
        }
    }
}

type LatencyFn = Arc<dyn Fn(&str) -> Duration + Send + Sync>;

/// Translator that sleeps a text-dependent time, then answers `"[zh] " + text`.
///
/// Records the order in which calls complete.
pub struct LatencyTranslator {
    latency: LatencyFn,
    completed: Mutex<Vec<String>>,
}

impl LatencyTranslator {
    #[must_use]
    pub fn new<F>(latency: F) -> Self
    where
        F: Fn(&str) -> Duration + Send + Sync + 'static,
    {
        Self {
            latency: Arc::new(latency),
            completed: Mutex::new(Vec::new()),
        }
    }

    /// Rendering produced for `text`.
    #[must_use]
    pub fn render(text: &str) -> String {
        format!("[zh] {text}")
    }

    /// Inputs in completion order.
    #[must_use]
    pub fn completion_order(&self) -> Vec<String> {
        match self.completed.lock() {
            Ok(g) => g.clone(),
            Err(p) => p.into_inner().clone(),
        }
    }
}

#[async_trait]
impl Translator for LatencyTranslator {
    async fn translate(&self, text: &str) -> String {
        tokio::time::sleep((self.latency)(text)).await;
        match self.completed.lock() {
            Ok(mut g) => g.push(text.to_string()),
            Err(p) => p.into_inner().push(text.to_string()),
        }
        Self::render(text)
    }
}
