//! `GET /quote?symbol=A,B,...`

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use newsdesk::QuoteSnapshot;
use serde::Deserialize;

use super::run_bounded;
use crate::error::ApiError;
use crate::state::AppState;

/// Symbols served when the request names none.
pub const DEFAULT_SYMBOLS: [&str; 4] = ["NVDA", "AMD", "TSLA", "INTC"];

const MAX_SYMBOL_LEN: usize = 6;

#[derive(Debug, Default, Deserialize)]
pub struct QuoteQuery {
    pub symbol: Option<String>,
}

/// Split a comma-separated symbol list.
///
/// Entries are trimmed and upper-cased; blank ones and ones longer than six
/// characters are dropped. An empty result falls back to [`DEFAULT_SYMBOLS`].
#[must_use]
pub fn parse_symbols(raw: Option<&str>) -> Vec<String> {
    let list: Vec<String> = raw
        .unwrap_or_default()
        .split(',')
        .map(|s| s.trim().to_ascii_uppercase())
        .filter(|s| !s.is_empty() && s.chars().count() <= MAX_SYMBOL_LEN)
        .collect();
    if list.is_empty() {
        DEFAULT_SYMBOLS.iter().map(|s| (*s).to_string()).collect()
    } else {
        list
    }
}

/// Quotes for the requested symbols; unknown symbols are silently omitted.
pub async fn get_quotes(
    State(state): State<AppState>,
    Query(q): Query<QuoteQuery>,
) -> Result<Json<Vec<QuoteSnapshot>>, ApiError> {
    let symbols = parse_symbols(q.symbol.as_deref());
    let desk = Arc::clone(&state.desk);
    let quotes = run_bounded(state.deadline, async move { desk.quotes(&symbols).await })
        .await
        .map_err(ApiError::Quote)?;
    Ok(Json(quotes))
}
