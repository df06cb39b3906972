//! Sort orders for result lists
//!
//! Every order is applied with a stable sort, so tools that compare equal
//! keep their catalog order.

use crate::tool::Tool;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Named result ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOption {
    /// Verified tools first, then by descending score
    #[default]
    Relevance,
    /// Descending governance score
    Score,
    /// Descending review count
    Reviews,
    /// Most recently updated first
    Newest,
    /// Ascending by name, ignoring case
    Name,
}

impl SortOption {
    /// All sort options in menu order
    pub const ALL: [SortOption; 5] = [
        SortOption::Relevance,
        SortOption::Score,
        SortOption::Reviews,
        SortOption::Newest,
        SortOption::Name,
    ];

    /// Parse a sort key; unknown or blank keys fall back to `Relevance`.
    pub fn from_param(raw: &str) -> Self {
        Self::parse_known(raw).unwrap_or_else(|| {
            if !raw.trim().is_empty() {
                log::debug!("Unknown sort key '{}', using relevance", raw);
            }
            SortOption::Relevance
        })
    }

    /// Parse a sort key, returning `None` when it is not recognized.
    pub fn parse_known(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|opt| opt.key().eq_ignore_ascii_case(raw))
    }

    /// Parameter value for this option
    pub fn key(self) -> &'static str {
        match self {
            SortOption::Relevance => "relevance",
            SortOption::Score => "score",
            SortOption::Reviews => "reviews",
            SortOption::Newest => "newest",
            SortOption::Name => "name",
        }
    }

    /// Menu label for this option
    pub fn label(self) -> &'static str {
        match self {
            SortOption::Relevance => "Most relevant",
            SortOption::Score => "Highest score",
            SortOption::Reviews => "Most reviewed",
            SortOption::Newest => "Recently updated",
            SortOption::Name => "Name (A-Z)",
        }
    }

    /// Compare two tools under this order.
    pub fn compare(self, a: &Tool, b: &Tool) -> Ordering {
        match self {
            SortOption::Relevance => by_relevance(a, b),
            SortOption::Score => b.score.cmp(&a.score),
            SortOption::Reviews => b.reviews.cmp(&a.reviews),
            SortOption::Newest => b.last_updated.cmp(&a.last_updated),
            SortOption::Name => by_name(a, b),
        }
    }

    /// Sort a result list in place. Stable.
    pub fn sort(self, tools: &mut [&Tool]) {
        tools.sort_by(|a, b| self.compare(a, b));
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.key())
    }
}

/// Verified before unverified; within a group, higher score first.
fn by_relevance(a: &Tool, b: &Tool) -> Ordering {
    b.verified
        .cmp(&a.verified)
        .then_with(|| b.score.cmp(&a.score))
}

/// Case-insensitive name order, with the raw name breaking ties so that
/// "atlas" and "Atlas" still have a fixed relative order.
fn by_name(a: &Tool, b: &Tool) -> Ordering {
    a.name
        .to_lowercase()
        .cmp(&b.name.to_lowercase())
        .then_with(|| a.name.cmp(&b.name))
}

#[cfg(test)]
#[path = "sort_test.rs"]
mod tests;
