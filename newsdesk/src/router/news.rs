use std::sync::Arc;

use newsdesk_core::{
    FailurePolicy, NewsItem, NewsRequest, NewsdeskConnector, Page, Paging, SourceFilter,
    TranslatedNewsItem,
};

use crate::Newsdesk;

/// What one provider produced for a request.
struct Fetched {
    /// The provider had data for the symbol, even if this page is past its end.
    had_data: bool,
    page: Vec<NewsItem>,
}

impl Newsdesk {
    /// Fetch one page of news for `symbol`, untranslated.
    ///
    /// Behavior:
    /// - A blank symbol yields `[]` without consulting any provider.
    /// - [`SourceFilter::All`] walks the news chain in registration order and
    ///   stops at the first provider that has data for the symbol. The last
    ///   provider's answer is returned as-is, even when empty.
    /// - A pinned filter consults only the connector whose key matches; no
    ///   fallthrough happens when it comes back empty. A name that matches no
    ///   connector goes to the last provider of the chain.
    /// - Provider errors never escape: an `Empty` provider degrades to `[]`,
    ///   a `Synthesize` provider to the fallback generator's item.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "newsdesk::news::fetch",
            skip(self, page, filter),
            fields(page = page.get(), source = filter.pinned().unwrap_or("all")),
        )
    )]
    pub async fn fetch_news(
        &self,
        symbol: &str,
        page: Page,
        filter: &SourceFilter,
    ) -> Vec<NewsItem> {
        let req = NewsRequest::new(symbol, page).with_page_size(self.page_size);
        if req.symbol.is_empty() {
            return vec![];
        }

        let chain = self.news_chain();
        let Some((last, _)) = chain.split_last() else {
            return vec![];
        };

        if let Some(name) = filter.pinned() {
            let pinned = chain.iter().find(|c| c.key().matches(name)).unwrap_or(last);
            return self.fetch_from(pinned, &req).await.page;
        }

        for c in &chain {
            let fetched = self.fetch_from(c, &req).await;
            if fetched.had_data {
                return fetched.page;
            }
        }
        vec![]
    }

    /// Fetch one page of news and translate every title and description.
    ///
    /// Same selection rules as [`Newsdesk::fetch_news`]; output order matches
    /// provider order.
    pub async fn news(
        &self,
        symbol: &str,
        page: Page,
        filter: &SourceFilter,
    ) -> Vec<TranslatedNewsItem> {
        let items = self.fetch_news(symbol, page, filter).await;
        self.enrich(items).await
    }

    async fn fetch_from(&self, c: &Arc<dyn NewsdeskConnector>, req: &NewsRequest) -> Fetched {
        let Some(provider) = c.as_news_provider() else {
            return Fetched {
                had_data: false,
                page: vec![],
            };
        };

        match provider.news(req).await {
            Ok(items) => match provider.paging() {
                Paging::Native => Fetched {
                    had_data: !items.is_empty(),
                    page: items,
                },
                _ => Fetched {
                    had_data: !items.is_empty(),
                    page: window(items, req.page, req.page_size),
                },
            },
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    connector = c.name(),
                    error = %_e,
                    "news provider failed; degrading"
                );
                let page = match provider.failure_policy() {
                    FailurePolicy::Synthesize => self.fallback.synthesize(&req.symbol),
                    _ => vec![],
                };
                Fetched {
                    had_data: !page.is_empty(),
                    page,
                }
            }
        }
    }
}

/// Slice `[(page-1)*size, page*size)` out of a provider's whole window.
fn window(items: Vec<NewsItem>, page: Page, size: usize) -> Vec<NewsItem> {
    let Some(start) = page.offset(size).filter(|&s| s < items.len()) else {
        return vec![];
    };
    items.into_iter().skip(start).take(size).collect()
}
