//! Query pipeline: search, filter, sort
//!
//! Each call is a full recompute over the catalog snapshot. Catalogs are in
//! the hundreds of tools, so nothing is cached or updated incrementally.

use crate::filter::{matches, FilterState};
use crate::sort::SortOption;
use crate::tool::Tool;
use serde::Serialize;

/// Narrow and order a catalog.
///
/// Deterministic: the same inputs always yield the same ordered output.
/// The catalog itself is never reordered.
pub fn query<'a>(
    catalog: &'a [Tool],
    search_text: &str,
    filters: &FilterState,
    sort: SortOption,
) -> Vec<&'a Tool> {
    let mut results: Vec<&Tool> = catalog
        .iter()
        .filter(|tool| matches(tool, filters, search_text))
        .collect();
    sort.sort(&mut results);
    results
}

/// [`query`] with a raw sort key; unknown keys sort by relevance.
pub fn query_with_key<'a>(
    catalog: &'a [Tool],
    search_text: &str,
    filters: &FilterState,
    sort_key: &str,
) -> Vec<&'a Tool> {
    query(catalog, search_text, filters, SortOption::from_param(sort_key))
}

/// Result list plus the size of the catalog it was drawn from
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryOutcome<'a> {
    pub results: Vec<&'a Tool>,
    pub total: usize,
    pub sort: SortOption,
}

impl<'a> QueryOutcome<'a> {
    /// Run [`query`] and record the catalog size alongside the results.
    pub fn run(
        catalog: &'a [Tool],
        search_text: &str,
        filters: &FilterState,
        sort: SortOption,
    ) -> Self {
        let results = query(catalog, search_text, filters, sort);
        log::debug!(
            "Query matched {} of {} tools (sort: {})",
            results.len(),
            catalog.len(),
            sort
        );
        Self {
            results,
            total: catalog.len(),
            sort,
        }
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// "Showing N of M tools"
    pub fn summary(&self) -> String {
        let noun = if self.total == 1 { "tool" } else { "tools" };
        format!("Showing {} of {} {}", self.results.len(), self.total, noun)
    }
}

#[cfg(test)]
#[path = "query_test.rs"]
mod tests;
