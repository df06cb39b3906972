//! Shared test utilities for vl-core

use crate::catalog::Catalog;
use crate::taxonomy::{Certification, DeploymentOption, Industry, PricingTier, UseCase};
use crate::tool::Tool;
use crate::tool_id::{ToolId, ToolSlug};
use chrono::{TimeZone, Utc};

/// Create a tool with neutral defaults; the slug doubles as id and name.
pub(crate) fn make_tool(slug: &str) -> Tool {
    Tool {
        id: ToolId::new(format!("id-{slug}")),
        slug: ToolSlug::new(slug),
        name: slug.to_string(),
        vendor: "Acme".to_string(),
        tagline: String::new(),
        description: String::new(),
        industries: vec![],
        use_cases: vec![],
        certifications: vec![],
        score: 50,
        reviews: 0,
        verified: false,
        pricing: PricingTier::Paid,
        deployment_options: vec![],
        features: vec![],
        last_updated: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        website: None,
    }
}

/// Chainable tweaks over [`make_tool`].
pub(crate) trait ToolExt {
    fn named(self, name: &str) -> Self;
    fn scored(self, score: u8) -> Self;
    fn reviewed(self, reviews: u32) -> Self;
    fn verified(self) -> Self;
    fn in_industries(self, industries: &[Industry]) -> Self;
    fn for_use_cases(self, use_cases: &[UseCase]) -> Self;
    fn certified(self, certs: &[Certification]) -> Self;
    fn priced(self, pricing: PricingTier) -> Self;
    fn deployed(self, options: &[DeploymentOption]) -> Self;
    fn with_features(self, features: &[&str]) -> Self;
    fn updated(self, year: i32, month: u32, day: u32) -> Self;
}

impl ToolExt for Tool {
    fn named(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    fn scored(mut self, score: u8) -> Self {
        self.score = score;
        self
    }

    fn reviewed(mut self, reviews: u32) -> Self {
        self.reviews = reviews;
        self
    }

    fn verified(mut self) -> Self {
        self.verified = true;
        self
    }

    fn in_industries(mut self, industries: &[Industry]) -> Self {
        self.industries = industries.to_vec();
        self
    }

    fn for_use_cases(mut self, use_cases: &[UseCase]) -> Self {
        self.use_cases = use_cases.to_vec();
        self
    }

    fn certified(mut self, certs: &[Certification]) -> Self {
        self.certifications = certs.to_vec();
        self
    }

    fn priced(mut self, pricing: PricingTier) -> Self {
        self.pricing = pricing;
        self
    }

    fn deployed(mut self, options: &[DeploymentOption]) -> Self {
        self.deployment_options = options.to_vec();
        self
    }

    fn with_features(mut self, features: &[&str]) -> Self {
        self.features = features.iter().map(|f| f.to_string()).collect();
        self
    }

    fn updated(mut self, year: i32, month: u32, day: u32) -> Self {
        self.last_updated = Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap();
        self
    }
}

/// Build a catalog, panicking on duplicate slugs.
pub(crate) fn make_catalog(tools: Vec<Tool>) -> Catalog {
    Catalog::new(tools).unwrap()
}

/// Slugs of a result list, in order.
pub(crate) fn slugs(tools: &[&Tool]) -> Vec<String> {
    tools.iter().map(|t| t.slug.to_string()).collect()
}
