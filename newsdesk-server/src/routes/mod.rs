pub mod health;
pub mod news;
pub mod quote;

use std::future::Future;
use std::time::Duration;

use axum::Router;
use axum::routing::get;

use crate::state::AppState;

/// Every endpoint, before layers are applied.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/news", get(news::get_news))
        .route("/quote", get(quote::get_quotes))
        .route("/health", get(health::health))
}

/// Run `fut` on its own task, bounded by `deadline`.
///
/// A panic or an elapsed deadline comes back as a message for the caller to
/// map into its error; the task is aborted when the deadline passes.
pub(crate) async fn run_bounded<T, F>(deadline: Duration, fut: F) -> Result<T, String>
where
    F: Future<Output = T> + Send + 'static,
    T: Send + 'static,
{
    let handle = tokio::spawn(fut);
    let abort = handle.abort_handle();
    match tokio::time::timeout(deadline, handle).await {
        Ok(Ok(v)) => Ok(v),
        Ok(Err(e)) => Err(e.to_string()),
        Err(_) => {
            abort.abort();
            Err(format!("no answer within {deadline:?}"))
        }
    }
}
