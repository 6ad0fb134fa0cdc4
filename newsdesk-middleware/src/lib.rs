//! newsdesk-middleware
//!
//! Caching and normalization layers that sit between the aggregator and the
//! remote services it calls.

mod builder;
mod cache;
mod keywords;
mod revalidate;
mod translator;

pub use crate::builder::ConnectorBuilder;
pub use crate::cache::TtlStore;
pub use crate::keywords::{FINANCE_KEYWORDS, KeywordDictionary};
pub use crate::revalidate::{RevalidateMiddleware, RevalidatingConnector};
pub use crate::translator::CachingTranslator;
