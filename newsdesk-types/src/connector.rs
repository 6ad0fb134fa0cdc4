//! Connector metadata types usable across crates.

use serde::{Deserialize, Serialize};

/// Typed key for identifying connectors in source filters and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectorKey(pub &'static str);

impl ConnectorKey {
    /// Construct a new typed connector key from a static name.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// Returns the inner static string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }

    /// True when a user-supplied source name refers to this connector.
    #[must_use]
    pub fn matches(self, source: &str) -> bool {
        self.0.eq_ignore_ascii_case(source.trim())
    }
}

/// How a news provider paginates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Paging {
    /// The provider returns its whole window; the aggregator slices pages in-process.
    #[default]
    Windowed,
    /// The provider accepts a page number and returns exactly that page.
    Native,
}

/// What the aggregator substitutes when a provider call fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum FailurePolicy {
    /// Treat the failure as an empty result.
    #[default]
    Empty,
    /// Replace the failure with the synthetic fallback item.
    Synthesize,
}
