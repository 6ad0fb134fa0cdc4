//! newsdesk-core
//!
//! Traits shared across the newsdesk workspace.
//!
//! - `connector`: the `NewsdeskConnector` trait and its capability provider traits.
//! - `translate`: the infallible `Translator` seen by the aggregator and the
//!   fallible `TranslationBackend` spoken by remote services.
//! - `cache`: the `CacheStore` capability used for translations and provider responses.
//! - `clock`: an injectable wall clock.
//! - `fallback`: the synthetic-item generator used when every provider comes back empty.
//!
//! Async runtime (Tokio)
//! ---------------------
//! Traits here are runtime-agnostic `async_trait` traits, but every implementation
//! in the workspace assumes a Tokio 1.x runtime.
#![warn(missing_docs)]

/// Key/value cache capability.
pub mod cache;
/// Wall clock abstraction.
pub mod clock;
/// Connector capability traits and the primary `NewsdeskConnector` interface.
pub mod connector;
/// Synthetic fallback news.
pub mod fallback;
/// Middleware trait implemented by connector wrappers.
pub mod middleware;
/// Translation traits.
pub mod translate;

pub use cache::{CacheStore, TranslationCache};
pub use clock::{Clock, SystemClock};
pub use connector::{NewsProvider, NewsdeskConnector, QuoteProvider};
pub use fallback::FallbackNews;
pub use middleware::Middleware;
pub use newsdesk_types::*;
pub use translate::{TranslationBackend, Translator};
