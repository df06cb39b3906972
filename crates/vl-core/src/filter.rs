//! Filter state and the tool predicate
//!
//! Matching is AND across categories and OR within a category. An empty
//! selection in a category means "no constraint", never "match nothing".

use crate::taxonomy::{Certification, DeploymentOption, Industry, PricingTier, Taxonomy, UseCase};
use crate::tool::{Tool, MAX_SCORE};
use serde::Serialize;
use std::collections::BTreeSet;

/// User-selected constraints on the catalog
///
/// Fields are private so every update goes through a method that keeps the
/// empty-means-unconstrained and score-range invariants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    industries: BTreeSet<Industry>,
    use_cases: BTreeSet<UseCase>,
    certifications: BTreeSet<Certification>,
    pricing: BTreeSet<PricingTier>,
    deployment_options: BTreeSet<DeploymentOption>,
    verified: bool,
    min_score: u8,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn industries(&self) -> &BTreeSet<Industry> {
        &self.industries
    }

    pub fn use_cases(&self) -> &BTreeSet<UseCase> {
        &self.use_cases
    }

    pub fn certifications(&self) -> &BTreeSet<Certification> {
        &self.certifications
    }

    pub fn pricing(&self) -> &BTreeSet<PricingTier> {
        &self.pricing
    }

    pub fn deployment_options(&self) -> &BTreeSet<DeploymentOption> {
        &self.deployment_options
    }

    pub fn verified(&self) -> bool {
        self.verified
    }

    pub fn min_score(&self) -> u8 {
        self.min_score
    }

    /// Add the industry if absent, remove it if present
    pub fn toggle_industry(&mut self, industry: Industry) {
        toggle(&mut self.industries, industry);
    }

    pub fn toggle_use_case(&mut self, use_case: UseCase) {
        toggle(&mut self.use_cases, use_case);
    }

    pub fn toggle_certification(&mut self, certification: Certification) {
        toggle(&mut self.certifications, certification);
    }

    pub fn toggle_pricing(&mut self, pricing: PricingTier) {
        toggle(&mut self.pricing, pricing);
    }

    pub fn toggle_deployment_option(&mut self, option: DeploymentOption) {
        toggle(&mut self.deployment_options, option);
    }

    pub fn with_industry(mut self, industry: Industry) -> Self {
        self.industries.insert(industry);
        self
    }

    pub fn with_use_case(mut self, use_case: UseCase) -> Self {
        self.use_cases.insert(use_case);
        self
    }

    pub fn with_certification(mut self, certification: Certification) -> Self {
        self.certifications.insert(certification);
        self
    }

    pub fn with_pricing(mut self, pricing: PricingTier) -> Self {
        self.pricing.insert(pricing);
        self
    }

    pub fn with_deployment_option(mut self, option: DeploymentOption) -> Self {
        self.deployment_options.insert(option);
        self
    }

    pub fn with_verified(mut self, verified: bool) -> Self {
        self.verified = verified;
        self
    }

    pub fn with_min_score(mut self, min_score: u8) -> Self {
        self.set_min_score(min_score);
        self
    }

    pub fn set_verified(&mut self, verified: bool) {
        self.verified = verified;
    }

    /// Set the score threshold, clamped to [`MAX_SCORE`]. Zero disables it.
    pub fn set_min_score(&mut self, min_score: u8) {
        self.min_score = min_score.min(MAX_SCORE);
    }

    /// Reset every constraint ("clear filters")
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True when no constraint is active
    pub fn is_default(&self) -> bool {
        self.active_filter_count() == 0
    }

    /// Number of active constraints, counting each selected value once
    pub fn active_filter_count(&self) -> usize {
        self.industries.len()
            + self.use_cases.len()
            + self.certifications.len()
            + self.pricing.len()
            + self.deployment_options.len()
            + usize::from(self.verified)
            + usize::from(self.min_score > 0)
    }

    /// Test a tool against the category and threshold constraints.
    pub fn admits(&self, tool: &Tool) -> bool {
        any_selected(&self.industries, &tool.industries)
            && any_selected(&self.use_cases, &tool.use_cases)
            && any_selected(&self.certifications, &tool.certifications)
            && any_selected(&self.pricing, std::slice::from_ref(&tool.pricing))
            && any_selected(&self.deployment_options, &tool.deployment_options)
            && (!self.verified || tool.verified)
            && (self.min_score == 0 || tool.score >= self.min_score)
    }
}

/// Full predicate: free-text search, then the filter constraints.
pub fn matches(tool: &Tool, filters: &FilterState, search_text: &str) -> bool {
    matches_search(tool, search_text) && filters.admits(tool)
}

/// Case-insensitive substring search over a tool's text and labels.
///
/// Blank search text matches everything.
pub fn matches_search(tool: &Tool, search_text: &str) -> bool {
    let needle = search_text.trim();
    if needle.is_empty() {
        return true;
    }
    let needle = needle.to_lowercase();
    tool.searchable_fields()
        .any(|field| field.to_lowercase().contains(&needle))
}

fn any_selected<T: Taxonomy>(selected: &BTreeSet<T>, values: &[T]) -> bool {
    selected.is_empty() || values.iter().any(|v| selected.contains(v))
}

fn toggle<T: Taxonomy>(set: &mut BTreeSet<T>, value: T) {
    if !set.remove(&value) {
        set.insert(value);
    }
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod tests;
