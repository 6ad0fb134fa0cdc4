//! Process configuration sourced from the environment.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Runtime configuration shared by the aggregator, its connectors and the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsdeskConfig {
    /// Lifetime of a translation cache entry.
    pub translation_ttl: Duration,
    /// Freshness window for upstream provider responses. Zero disables it.
    pub provider_revalidate: Duration,
    /// Token for the primary (company news) provider.
    pub finnhub_api_key: Option<String>,
    /// Credential for the secondary (search) provider.
    pub news_api_key: Option<String>,
    /// Timeout applied to every outbound HTTP request.
    pub http_timeout: Duration,
    /// Bind host for the HTTP server.
    pub host: String,
    /// Bind port for the HTTP server.
    pub port: u16,
}

impl Default for NewsdeskConfig {
    fn default() -> Self {
        Self {
            translation_ttl: Duration::from_secs(Self::DEFAULT_TRANSLATION_TTL_SECS),
            provider_revalidate: Duration::from_secs(Self::DEFAULT_REVALIDATE_SECS),
            finnhub_api_key: None,
            news_api_key: None,
            http_timeout: Duration::from_secs(10),
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl NewsdeskConfig {
    /// Default translation cache TTL in seconds (one day).
    pub const DEFAULT_TRANSLATION_TTL_SECS: u64 = 86_400;
    /// Default provider freshness window in seconds (one hour).
    pub const DEFAULT_REVALIDATE_SECS: u64 = 3_600;

    /// Read configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    /// Read configuration through an arbitrary key lookup.
    ///
    /// Unparseable numbers fall back to their defaults and blank credentials
    /// count as absent, so a bad value never prevents startup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let d = Self::default();
        let secs = |key: &str, default: Duration| {
            lookup(key)
                .and_then(|v| v.trim().parse::<u64>().ok())
                .map_or(default, Duration::from_secs)
        };
        let secret = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Self {
            translation_ttl: secs("TRANSLATION_TTL_SECONDS", d.translation_ttl),
            provider_revalidate: secs("PROVIDER_REVALIDATE_SECONDS", d.provider_revalidate),
            finnhub_api_key: secret("FINNHUB_API_KEY"),
            news_api_key: secret("NEWS_API_KEY"),
            http_timeout: secs("HTTP_TIMEOUT_SECONDS", d.http_timeout),
            host: lookup("NEWSDESK_HOST")
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(d.host),
            port: lookup("NEWSDESK_PORT")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(d.port),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = NewsdeskConfig::from_lookup(lookup(&[]));
        assert_eq!(cfg, NewsdeskConfig::default());
        assert_eq!(cfg.translation_ttl, Duration::from_secs(86_400));
    }

    #[test]
    fn reads_values_and_ignores_garbage() {
        let cfg = NewsdeskConfig::from_lookup(lookup(&[
            ("TRANSLATION_TTL_SECONDS", "60"),
            ("PROVIDER_REVALIDATE_SECONDS", "-1"),
            ("FINNHUB_API_KEY", " tok "),
            ("NEWS_API_KEY", "   "),
            ("NEWSDESK_PORT", "8080"),
        ]));
        assert_eq!(cfg.translation_ttl, Duration::from_secs(60));
        assert_eq!(cfg.provider_revalidate, Duration::from_secs(3_600));
        assert_eq!(cfg.finnhub_api_key.as_deref(), Some("tok"));
        assert_eq!(cfg.news_api_key, None);
        assert_eq!(cfg.port, 8080);
    }

    #[test]
    fn zero_ttl_is_allowed() {
        let cfg = NewsdeskConfig::from_lookup(lookup(&[("TRANSLATION_TTL_SECONDS", "0")]));
        assert_eq!(cfg.translation_ttl, Duration::ZERO);
    }
}
