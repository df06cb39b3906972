//! Filter option lists derived from the catalog

use crate::taxonomy::{Certification, DeploymentOption, Industry, PricingTier, Taxonomy, UseCase};
use crate::tool::Tool;
use serde::Serialize;
use std::collections::BTreeMap;

/// A category value and the number of tools carrying it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FacetCount<T> {
    pub value: T,
    pub count: usize,
}

/// Distinct values present in a catalog, per category
///
/// Only values carried by at least one tool are listed, in vocabulary order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FacetOptions {
    pub industries: Vec<FacetCount<Industry>>,
    pub use_cases: Vec<FacetCount<UseCase>>,
    pub certifications: Vec<FacetCount<Certification>>,
    pub pricing: Vec<FacetCount<PricingTier>>,
    pub deployment_options: Vec<FacetCount<DeploymentOption>>,
}

impl FacetOptions {
    pub fn from_tools<'a, I>(tools: I) -> Self
    where
        I: IntoIterator<Item = &'a Tool>,
    {
        let mut industries = BTreeMap::new();
        let mut use_cases = BTreeMap::new();
        let mut certifications = BTreeMap::new();
        let mut pricing = BTreeMap::new();
        let mut deployment_options = BTreeMap::new();

        for tool in tools {
            tally(&mut industries, &tool.industries);
            tally(&mut use_cases, &tool.use_cases);
            tally(&mut certifications, &tool.certifications);
            tally(&mut pricing, std::slice::from_ref(&tool.pricing));
            tally(&mut deployment_options, &tool.deployment_options);
        }

        Self {
            industries: into_counts(industries),
            use_cases: into_counts(use_cases),
            certifications: into_counts(certifications),
            pricing: into_counts(pricing),
            deployment_options: into_counts(deployment_options),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.industries.is_empty()
            && self.use_cases.is_empty()
            && self.certifications.is_empty()
            && self.pricing.is_empty()
            && self.deployment_options.is_empty()
    }
}

/// Count each distinct value once per tool, even if the tool repeats it.
fn tally<T: Taxonomy>(counts: &mut BTreeMap<T, usize>, values: &[T]) {
    for (idx, value) in values.iter().enumerate() {
        if values[..idx].contains(value) {
            continue;
        }
        *counts.entry(*value).or_insert(0) += 1;
    }
}

fn into_counts<T: Taxonomy>(counts: BTreeMap<T, usize>) -> Vec<FacetCount<T>> {
    counts
        .into_iter()
        .map(|(value, count)| FacetCount { value, count })
        .collect()
}
