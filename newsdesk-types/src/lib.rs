//! Newsdesk data transfer objects, request primitives and configuration.
#![warn(missing_docs)]

mod config;
mod connector;
mod error;
mod news;
mod quote;
mod request;

pub use config::NewsdeskConfig;
pub use connector::{ConnectorKey, FailurePolicy, Paging};
pub use error::NewsdeskError;
pub use news::{NewsItem, TranslatedNewsItem};
pub use quote::QuoteSnapshot;
pub use request::{DEFAULT_PAGE_SIZE, NewsRequest, Page, SourceFilter};
