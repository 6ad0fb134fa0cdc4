//! Newsdesk aggregates stock news across registered providers and enriches it
//! with Traditional-Chinese renderings.
//!
//! Overview
//! - Walks an ordered chain of news connectors, short-circuiting on the first
//!   provider that has data for the symbol.
//! - A `source` filter pins a single provider and disables the walk.
//! - Providers declare how they page (`Windowed` or `Native`) and how their
//!   failures degrade (`Empty` or `Synthesize`); the orchestrator applies both.
//! - Every title and description on the page is translated concurrently and the
//!   output keeps provider order.
//! - Quotes fan out per symbol and silently drop failures.
//!
//! Nothing on the news path returns an error: upstream faults are absorbed at
//! the provider boundary and logged (with the `tracing` feature).
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use newsdesk::{Newsdesk, Page, SourceFilter};
//!
//! let desk = Newsdesk::builder()
//!     .with_connector(finnhub)
//!     .with_connector(newsapi)
//!     .translator(translator)
//!     .fallback(Arc::new(YahooFallback::new(clock)))
//!     .build()?;
//!
//! let page = desk.news("nvda", Page::new(2), &SourceFilter::All).await;
//! ```
#![warn(missing_docs)]

mod core;
mod router;

pub use crate::core::{Newsdesk, NewsdeskBuilder};
pub use newsdesk_core::{
    Clock, FallbackNews, NewsdeskConnector, SystemClock, TranslationBackend, Translator,
};
pub use newsdesk_middleware::{CachingTranslator, ConnectorBuilder, KeywordDictionary, TtlStore};
pub use newsdesk_types::{
    ConnectorKey, DEFAULT_PAGE_SIZE, FailurePolicy, NewsItem, NewsRequest, NewsdeskConfig,
    NewsdeskError, Page, Paging, QuoteSnapshot, SourceFilter, TranslatedNewsItem,
};
