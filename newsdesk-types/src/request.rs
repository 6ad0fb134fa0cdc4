use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of items per page for every provider.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// A 1-based page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Page(u32);

impl Page {
    /// The first page.
    pub const FIRST: Self = Self(1);

    /// Build a page, clamping zero up to 1.
    #[must_use]
    pub const fn new(n: u32) -> Self {
        if n == 0 { Self::FIRST } else { Self(n) }
    }

    /// Coerce a raw query value into a page.
    ///
    /// Missing, non-numeric, non-finite and sub-1 inputs become page 1.
    /// Fractional pages are truncated, never rounded, so `1.9` is page 1 and
    /// a page always starts on a multiple of the page size.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return Self::FIRST;
        };
        match raw.parse::<f64>() {
            Ok(n) if n.is_finite() && n >= 1.0 => {
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let page = n.trunc() as u32;
                Self::new(page)
            }
            _ => Self::FIRST,
        }
    }

    /// The raw 1-based number.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Start offset of this page for a page size, `None` on overflow.
    #[must_use]
    pub fn offset(self, page_size: usize) -> Option<usize> {
        usize::try_from(self.0.saturating_sub(1)).ok()?.checked_mul(page_size)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which providers a news request may consult.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SourceFilter {
    /// Walk the provider chain in order.
    #[default]
    All,
    /// Consult exactly one provider by name (lower-case).
    Only(String),
}

impl SourceFilter {
    /// Parse a raw `source` query value. Absent, empty and `all` mean [`SourceFilter::All`].
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => Self::All,
            Some(s) if s.eq_ignore_ascii_case("all") => Self::All,
            Some(s) => Self::Only(s.to_ascii_lowercase()),
        }
    }

    /// The requested provider name when the filter pins one.
    #[must_use]
    pub fn pinned(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Only(name) => Some(name),
        }
    }
}

/// A normalized news request handed to providers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NewsRequest {
    /// Upper-case, trimmed ticker symbol.
    pub symbol: String,
    /// Requested page.
    pub page: Page,
    /// Items per page.
    pub page_size: usize,
}

impl NewsRequest {
    /// Build a request, normalizing the symbol.
    #[must_use]
    pub fn new(symbol: &str, page: Page) -> Self {
        Self {
            symbol: symbol.trim().to_ascii_uppercase(),
            page,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Override the page size.
    #[must_use]
    pub const fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }
}
