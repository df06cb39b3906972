//! vl-core - Core library for Vetline
//!
//! This crate provides the tool catalog model, taxonomy vocabularies, the
//! search/filter/sort query pipeline, the comparison selection store, URL
//! parameter hydration, and configuration parsing used across all Vetline
//! components.

pub mod browse;
pub mod catalog;
pub mod comparison;
pub mod config;
pub mod error;
pub mod facets;
pub mod filter;
mod newtype_string;
pub mod query;
pub mod sort;
pub mod taxonomy;
pub mod tool;
pub mod tool_id;
pub mod url_params;

#[cfg(test)]
pub(crate) mod test_utils;

pub use browse::BrowseSession;
pub use catalog::{Catalog, CatalogDocument};
pub use comparison::{
    AddOutcome, ComparisonEvent, ComparisonStore, ComparisonTable, ListenerId, MAX_COMPARE,
};
pub use config::{Config, SourceType};
pub use error::{CoreError, CoreResult};
pub use facets::{FacetCount, FacetOptions};
pub use filter::{matches, FilterState};
pub use query::{query, query_with_key, QueryOutcome};
pub use sort::SortOption;
pub use taxonomy::{
    join_labels, Certification, DeploymentOption, Industry, PricingTier, Taxonomy, UseCase,
};
pub use tool::{Tool, MAX_SCORE};
pub use tool_id::{ToolId, ToolSlug};
pub use url_params::{hydrate, to_query_string, BrowseParams};
