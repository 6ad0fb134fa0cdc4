use std::sync::Arc;

use async_trait::async_trait;
use newsdesk_core::{TranslationBackend, TranslationCache, Translator};

use crate::keywords::KeywordDictionary;

/// Translator that consults a cache, then a remote backend, then always
/// normalizes leftover finance jargon with a keyword dictionary.
///
/// Cached values are final: a hit skips both the backend and the keyword pass.
pub struct CachingTranslator {
    backend: Arc<dyn TranslationBackend>,
    cache: Arc<TranslationCache>,
    dictionary: &'static KeywordDictionary,
}

impl CachingTranslator {
    /// Build a translator over `backend`, storing results in `cache`.
    #[must_use]
    pub fn new(backend: Arc<dyn TranslationBackend>, cache: Arc<TranslationCache>) -> Self {
        Self {
            backend,
            cache,
            dictionary: KeywordDictionary::finance(),
        }
    }

    async fn remote(&self, key: &str) -> Option<String> {
        match self.backend.fetch_translation(key).await {
            Ok(Some(t)) if !t.is_empty() => Some(t),
            Ok(_) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(backend = self.backend.name(), "no usable translation");
                None
            }
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(backend = self.backend.name(), error = %_e, "translation failed");
                None
            }
        }
    }
}

#[async_trait]
impl Translator for CachingTranslator {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "newsdesk::translate", skip_all, fields(len = text.len()))
    )]
    async fn translate(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        let key = text.trim().to_string();
        if let Some(hit) = self.cache.get(&key).await {
            return hit;
        }

        let working = self
            .remote(&key)
            .await
            .unwrap_or_else(|| text.to_string());
        let out = self.dictionary.apply(&working);
        self.cache.put(key, out.clone()).await;
        out
    }
}
