//! newsdesk-connectors
//!
//! Upstream clients for the newsdesk pipeline: company news (Finnhub), keyword
//! news search (NewsAPI), machine translation (MyMemory), daily charts for
//! quotes (Yahoo) and the synthetic placeholder item.
#![warn(missing_docs)]

mod builder;
mod fallback;
mod finnhub;
mod http;
mod mymemory;
mod newsapi;
mod yahoo;

pub use builder::{NewsdeskConnectorBuilder, Wiring};
pub use fallback::YahooFallback;
pub use finnhub::FinnhubConnector;
pub use http::client as http_client;
pub use mymemory::MyMemoryBackend;
pub use newsapi::NewsApiConnector;
pub use yahoo::YahooChartConnector;
