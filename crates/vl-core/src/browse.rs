//! Browse page state
//!
//! A [`BrowseSession`] owns the search text, filters and sort key for one
//! page and keeps the derived result list current: every mutation triggers a
//! synchronous full recompute, so `results()` never observes stale inputs.

use crate::catalog::Catalog;
use crate::filter::FilterState;
use crate::query::query;
use crate::sort::SortOption;
use crate::taxonomy::{Certification, DeploymentOption, Industry, PricingTier, UseCase};
use crate::tool::Tool;
use crate::url_params::{hydrate, to_query_string, BrowseParams};

/// Search, filter and sort state with its derived result list
#[derive(Debug)]
pub struct BrowseSession<'a> {
    catalog: &'a Catalog,
    params: BrowseParams,
    results: Vec<&'a Tool>,
    recomputes: usize,
}

impl<'a> BrowseSession<'a> {
    /// Start with default state: every tool, relevance order.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self::with_params(catalog, BrowseParams::default())
    }

    /// Start from hydrated URL parameters.
    pub fn from_query_string(catalog: &'a Catalog, query_string: &str) -> Self {
        Self::with_params(catalog, hydrate(query_string))
    }

    pub fn with_params(catalog: &'a Catalog, params: BrowseParams) -> Self {
        let mut session = Self {
            catalog,
            params,
            results: Vec::new(),
            recomputes: 0,
        };
        session.recompute();
        session
    }

    pub fn results(&self) -> &[&'a Tool] {
        &self.results
    }

    pub fn search(&self) -> &str {
        &self.params.search
    }

    pub fn filters(&self) -> &FilterState {
        &self.params.filters
    }

    pub fn sort(&self) -> SortOption {
        self.params.sort
    }

    pub fn params(&self) -> &BrowseParams {
        &self.params
    }

    /// Size of the catalog the results are drawn from
    pub fn total(&self) -> usize {
        self.catalog.len()
    }

    /// Number of recomputes so far, including the initial one
    pub fn recompute_count(&self) -> usize {
        self.recomputes
    }

    /// Shareable query string for the current state
    pub fn share_query(&self) -> String {
        to_query_string(&self.params)
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.params.search = text.into();
        self.recompute();
    }

    pub fn set_sort(&mut self, sort: SortOption) {
        self.params.sort = sort;
        self.recompute();
    }

    /// Set the sort from a raw key; unknown keys select relevance.
    pub fn set_sort_key(&mut self, key: &str) {
        self.set_sort(SortOption::from_param(key));
    }

    pub fn toggle_industry(&mut self, industry: Industry) {
        self.update_filters(|f| f.toggle_industry(industry));
    }

    pub fn toggle_use_case(&mut self, use_case: UseCase) {
        self.update_filters(|f| f.toggle_use_case(use_case));
    }

    pub fn toggle_certification(&mut self, certification: Certification) {
        self.update_filters(|f| f.toggle_certification(certification));
    }

    pub fn toggle_pricing(&mut self, pricing: PricingTier) {
        self.update_filters(|f| f.toggle_pricing(pricing));
    }

    pub fn toggle_deployment_option(&mut self, option: DeploymentOption) {
        self.update_filters(|f| f.toggle_deployment_option(option));
    }

    pub fn set_verified(&mut self, verified: bool) {
        self.update_filters(|f| f.set_verified(verified));
    }

    pub fn set_min_score(&mut self, min_score: u8) {
        self.update_filters(|f| f.set_min_score(min_score));
    }

    /// Reset filters to defaults. Search text and sort are kept.
    pub fn clear_filters(&mut self) {
        self.update_filters(FilterState::clear);
    }

    fn update_filters(&mut self, update: impl FnOnce(&mut FilterState)) {
        update(&mut self.params.filters);
        self.recompute();
    }

    fn recompute(&mut self) {
        self.results = query(
            self.catalog.tools(),
            &self.params.search,
            &self.params.filters,
            self.params.sort,
        );
        self.recomputes += 1;
        log::debug!(
            "Browse recompute #{}: {} of {} tools",
            self.recomputes,
            self.results.len(),
            self.catalog.len()
        );
    }
}

#[cfg(test)]
#[path = "browse_test.rs"]
mod tests;
