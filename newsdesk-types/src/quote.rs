use serde::{Deserialize, Serialize};

/// Derived point-in-time quote served by the quote endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSnapshot {
    /// Upper-case ticker.
    pub symbol: String,
    /// Display name, the ticker when the upstream has none.
    pub name: String,
    /// Last price, rounded to 2 decimals.
    pub price: f64,
    /// `price - previous_close`, rounded to 2 decimals.
    pub change: f64,
    /// Percent change against the previous close, rounded to 2 decimals.
    pub change_percent: f64,
    /// Previous close as reported upstream.
    pub previous_close: f64,
}

impl QuoteSnapshot {
    /// Derive a snapshot from a current price and a previous close.
    ///
    /// A zero previous close yields a zero percent change.
    #[must_use]
    pub fn derive(symbol: String, name: String, current: f64, previous_close: f64) -> Self {
        let change = current - previous_close;
        let change_percent = if previous_close == 0.0 {
            0.0
        } else {
            change / previous_close * 100.0
        };
        Self {
            symbol,
            name,
            price: round2(current),
            change: round2(change),
            change_percent: round2(change_percent),
            previous_close,
        }
    }
}

/// Two-decimal rounding with halves going toward positive infinity.
fn round2(v: f64) -> f64 {
    (v * 100.0 + 0.5).floor() / 100.0
}
