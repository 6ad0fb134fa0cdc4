//! `GET /news?symbol=&page=&source=`

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use newsdesk::{Page, SourceFilter, TranslatedNewsItem};
use serde::Deserialize;

use super::run_bounded;
use crate::error::ApiError;
use crate::state::AppState;

/// Raw query string. Every field is kept as text so that odd values coerce
/// instead of being rejected.
#[derive(Debug, Default, Deserialize)]
pub struct NewsQuery {
    pub symbol: Option<String>,
    pub page: Option<String>,
    pub source: Option<String>,
}

/// One translated page of news for a symbol.
///
/// The pipeline runs on its own task under the state's deadline, so a panic
/// or a stall inside it surfaces as a 500 instead of tearing down the
/// connection.
pub async fn get_news(
    State(state): State<AppState>,
    Query(q): Query<NewsQuery>,
) -> Result<Json<Vec<TranslatedNewsItem>>, ApiError> {
    let symbol = q
        .symbol
        .as_deref()
        .map(str::trim)
        .unwrap_or_default()
        .to_ascii_uppercase();
    if symbol.is_empty() {
        return Err(ApiError::MissingSymbol);
    }
    let page = Page::parse(q.page.as_deref());
    let filter = SourceFilter::parse(q.source.as_deref());

    tracing::debug!(%symbol, %page, ?filter, "news request");
    let desk = Arc::clone(&state.desk);
    let items = run_bounded(state.deadline, async move {
        desk.news(&symbol, page, &filter).await
    })
    .await
    .map_err(ApiError::News)?;
    Ok(Json(items))
}
