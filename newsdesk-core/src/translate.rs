use async_trait::async_trait;

use crate::NewsdeskError;

/// Text translator as seen by the aggregator.
///
/// Infallible: any upstream problem degrades to a best-effort rendering of the
/// input.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate one text.
    async fn translate(&self, text: &str) -> String;
}

/// A remote machine-translation service.
#[async_trait]
pub trait TranslationBackend: Send + Sync {
    /// Stable name for logs.
    fn name(&self) -> &'static str;

    /// Translate `text`.
    ///
    /// `Ok(None)` means the service answered but had nothing usable
    /// (non-success status or an empty translation).
    async fn fetch_translation(&self, text: &str) -> Result<Option<String>, NewsdeskError>;
}
