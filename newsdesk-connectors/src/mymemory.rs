use async_trait::async_trait;
use newsdesk_core::{NewsdeskError, TranslationBackend};
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::http;

const NAME: &str = "mymemory";
const DEFAULT_BASE: &str = "https://api.mymemory.translated.net/";
const LANGPAIR: &str = "en|zh-TW";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Reply {
    response_data: Option<ReplyData>,
    // number on success, sometimes a string on quota errors
    response_status: Option<serde_json::Value>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReplyData {
    translated_text: Option<String>,
}

impl Reply {
    fn status(&self) -> Option<u64> {
        match self.response_status.as_ref()? {
            serde_json::Value::Number(n) => n.as_u64(),
            serde_json::Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

/// MyMemory machine-translation backend, English to Traditional Chinese.
pub struct MyMemoryBackend {
    http: Client,
    base: Url,
}

impl MyMemoryBackend {
    /// Build against the public endpoint.
    ///
    /// # Errors
    /// Never in practice; the default base URL is a constant.
    pub fn new(http: Client) -> Result<Self, NewsdeskError> {
        Ok(Self {
            http,
            base: http::parse_base(NAME, DEFAULT_BASE)?,
        })
    }

    /// Point the backend at another host.
    ///
    /// # Errors
    /// Returns a `Connector` error when `base` is not an absolute URL.
    pub fn with_base_url(mut self, base: &str) -> Result<Self, NewsdeskError> {
        self.base = http::parse_base(NAME, base)?;
        Ok(self)
    }
}

#[async_trait]
impl TranslationBackend for MyMemoryBackend {
    fn name(&self) -> &'static str {
        NAME
    }

    async fn fetch_translation(&self, text: &str) -> Result<Option<String>, NewsdeskError> {
        let mut url = http::endpoint(NAME, &self.base, "get")?;
        url.query_pairs_mut()
            .append_pair("q", text)
            .append_pair("langpair", LANGPAIR);

        let reply: Reply = http::get_json(NAME, self.http.get(url)).await?;
        if reply.status() != Some(200) {
            return Ok(None);
        }
        Ok(reply
            .response_data
            .and_then(|d| d.translated_text)
            .filter(|t| !t.is_empty()))
    }
}
