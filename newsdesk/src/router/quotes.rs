use newsdesk_core::{NewsdeskError, QuoteSnapshot};

use crate::Newsdesk;

impl Newsdesk {
    /// Fetch a quote for one symbol.
    ///
    /// Quote-capable connectors are tried in registration order and the first
    /// success wins.
    ///
    /// # Errors
    /// Returns `Unsupported` when no connector serves quotes, `InvalidArg` for
    /// a blank symbol, otherwise the last provider error.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "newsdesk::quotes::quote", skip(self))
    )]
    pub async fn quote(&self, symbol: &str) -> Result<QuoteSnapshot, NewsdeskError> {
        let symbol = symbol.trim().to_ascii_uppercase();
        if symbol.is_empty() {
            return Err(NewsdeskError::InvalidArg("symbol must not be empty".into()));
        }

        let mut last_err = NewsdeskError::unsupported("quote");
        for c in self.quote_chain() {
            let Some(provider) = c.as_quote_provider() else {
                continue;
            };
            match provider.quote(&symbol).await {
                Ok(q) => return Ok(q),
                Err(e) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(connector = c.name(), error = %e, "quote provider failed");
                    last_err = e;
                }
            }
        }
        Err(last_err)
    }

    /// Fetch quotes for several symbols concurrently.
    ///
    /// Symbols that fail on every provider are dropped; the rest keep input order.
    pub async fn quotes(&self, symbols: &[String]) -> Vec<QuoteSnapshot> {
        if symbols.is_empty() {
            return vec![];
        }
        let tasks = symbols.iter().map(|s| self.quote(s));
        futures::future::join_all(tasks)
            .await
            .into_iter()
            .filter_map(Result::ok)
            .collect()
    }
}
