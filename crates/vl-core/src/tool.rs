//! Catalog tool records

use crate::error::{CoreError, CoreResult};
use crate::taxonomy::{Certification, DeploymentOption, Industry, PricingTier, Taxonomy, UseCase};
use crate::tool_id::{ToolId, ToolSlug};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Highest governance score a tool can carry
pub const MAX_SCORE: u8 = 100;

/// A listed third-party AI tool
///
/// Snapshots are immutable for the lifetime of a query; the catalog hands out
/// shared references and nothing in the pipeline mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    /// Opaque identifier from the backing store
    pub id: ToolId,

    /// Routing key, unique per catalog
    pub slug: ToolSlug,

    pub name: String,

    pub vendor: String,

    #[serde(default)]
    pub tagline: String,

    #[serde(default)]
    pub description: String,

    /// Display order is preserved; matching ignores it
    #[serde(default)]
    pub industries: Vec<Industry>,

    #[serde(default)]
    pub use_cases: Vec<UseCase>,

    #[serde(default)]
    pub certifications: Vec<Certification>,

    /// Governance score, 0-100
    #[serde(default)]
    pub score: u8,

    /// Review count
    #[serde(default)]
    pub reviews: u32,

    #[serde(default)]
    pub verified: bool,

    #[serde(default)]
    pub pricing: PricingTier,

    #[serde(default)]
    pub deployment_options: Vec<DeploymentOption>,

    /// Feature labels, in the order they appear as comparison rows
    #[serde(default)]
    pub features: Vec<String>,

    /// Used by the `newest` sort
    pub last_updated: DateTime<Utc>,

    /// Vendor website shown on the detail view
    #[serde(default)]
    pub website: Option<String>,
}

impl Tool {
    /// Check field constraints the type system does not carry.
    pub fn validate(&self) -> CoreResult<()> {
        if self.name.trim().is_empty() {
            return Err(self.invalid("name must not be empty"));
        }
        if self.score > MAX_SCORE {
            return Err(self.invalid(&format!(
                "score {} exceeds maximum of {}",
                self.score, MAX_SCORE
            )));
        }
        Ok(())
    }

    /// Text fields and classification labels consulted by free-text search.
    pub fn searchable_fields(&self) -> impl Iterator<Item = &str> {
        [
            self.name.as_str(),
            self.vendor.as_str(),
            self.tagline.as_str(),
            self.description.as_str(),
        ]
        .into_iter()
        .chain(self.industries.iter().map(|v| v.label()))
        .chain(self.use_cases.iter().map(|v| v.label()))
        .chain(self.certifications.iter().map(|v| v.label()))
    }

    /// Whether the tool lists a given feature label (exact match).
    pub fn has_feature(&self, feature: &str) -> bool {
        self.features.iter().any(|f| f == feature)
    }

    fn invalid(&self, reason: &str) -> CoreError {
        CoreError::InvalidTool {
            slug: self.slug.to_string(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
#[path = "tool_test.rs"]
mod tests;
