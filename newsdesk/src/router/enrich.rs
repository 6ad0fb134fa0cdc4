use futures::future::{join, join_all};
use newsdesk_core::{NewsItem, TranslatedNewsItem};

use crate::Newsdesk;

impl Newsdesk {
    /// Translate the title and description of every item concurrently.
    ///
    /// All translations run at once and the call waits for every one of them.
    /// Output position `i` always holds input item `i`, whatever order the
    /// translations finish in.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "newsdesk::news::enrich", skip_all, fields(items = items.len()))
    )]
    pub async fn enrich(&self, items: Vec<NewsItem>) -> Vec<TranslatedNewsItem> {
        let tasks = items.into_iter().map(|item| async move {
            let (title_zh, description_zh) = join(
                self.translator.translate(&item.title),
                self.translator.translate(&item.description),
            )
            .await;
            TranslatedNewsItem {
                item,
                title_zh,
                description_zh,
            }
        });
        join_all(tasks).await
    }
}
