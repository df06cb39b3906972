//! Classification vocabularies for catalog tools
//!
//! Every multi-valued tool field draws from a closed vocabulary. Each member
//! carries a display label (`SOC 2`) and a URL-safe key (`soc-2`); untrusted
//! input goes through [`Taxonomy::from_param`], which accepts either form and
//! returns `None` for anything else.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Shared behaviour of every classification vocabulary.
pub trait Taxonomy: Copy + Eq + Ord + std::hash::Hash + fmt::Debug + 'static {
    /// Category name used in facet listings and logs.
    const CATEGORY: &'static str;

    /// All members in canonical display order.
    fn all() -> &'static [Self];

    /// Human-readable label.
    fn label(self) -> &'static str;

    /// URL-safe key.
    fn key(self) -> &'static str;

    /// Parse a label or key, ignoring case and surrounding whitespace.
    ///
    /// Returns `None` for unrecognized values; callers treat that as "absent".
    fn from_param(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        Self::all()
            .iter()
            .copied()
            .find(|v| v.label().eq_ignore_ascii_case(raw) || v.key().eq_ignore_ascii_case(raw))
    }
}

macro_rules! define_taxonomy {
    (
        $(#[$meta:meta])*
        pub enum $Name:ident in $category:literal {
            $(
                $(#[$vmeta:meta])*
                $Variant:ident => ($label:literal, $key:literal),
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $Name {
            $(
                $(#[$vmeta])*
                $Variant,
            )+
        }

        impl Taxonomy for $Name {
            const CATEGORY: &'static str = $category;

            fn all() -> &'static [Self] {
                &[$($Name::$Variant),+]
            }

            fn label(self) -> &'static str {
                match self {
                    $($Name::$Variant => $label,)+
                }
            }

            fn key(self) -> &'static str {
                match self {
                    $($Name::$Variant => $key,)+
                }
            }
        }

        impl fmt::Display for $Name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(self.label())
            }
        }

        impl Serialize for $Name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.label())
            }
        }

        impl<'de> Deserialize<'de> for $Name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                <$Name as Taxonomy>::from_param(&raw).ok_or_else(|| {
                    let expected: Vec<&str> =
                        <$Name as Taxonomy>::all().iter().map(|v| v.label()).collect();
                    serde::de::Error::custom(format!(
                        "unknown {} '{}', expected one of: {}",
                        $category,
                        raw,
                        expected.join(", ")
                    ))
                })
            }
        }
    };
}

define_taxonomy! {
    /// Regulated industry a tool is built for
    pub enum Industry in "industry" {
        Healthcare => ("Healthcare", "healthcare"),
        Legal => ("Legal", "legal"),
        Finance => ("Finance", "finance"),
        Insurance => ("Insurance", "insurance"),
        Government => ("Government", "government"),
        Pharma => ("Pharma", "pharma"),
    }
}

define_taxonomy! {
    /// Job a tool performs
    pub enum UseCase in "use case" {
        ClinicalDocumentation => ("Clinical Documentation", "clinical-documentation"),
        ContractReview => ("Contract Review", "contract-review"),
        ComplianceMonitoring => ("Compliance Monitoring", "compliance-monitoring"),
        FraudDetection => ("Fraud Detection", "fraud-detection"),
        DocumentAnalysis => ("Document Analysis", "document-analysis"),
        RiskAssessment => ("Risk Assessment", "risk-assessment"),
        CustomerSupport => ("Customer Support", "customer-support"),
        Research => ("Research", "research"),
    }
}

define_taxonomy! {
    /// Compliance attestation held by the vendor
    pub enum Certification in "certification" {
        Hipaa => ("HIPAA", "hipaa"),
        Soc2 => ("SOC 2", "soc-2"),
        Iso27001 => ("ISO 27001", "iso-27001"),
        Gdpr => ("GDPR", "gdpr"),
        FedRamp => ("FedRAMP", "fedramp"),
        PciDss => ("PCI DSS", "pci-dss"),
        Hitrust => ("HITRUST", "hitrust"),
    }
}

define_taxonomy! {
    /// Commercial model of a listing
    pub enum PricingTier in "pricing" {
        Free => ("Free", "free"),
        Freemium => ("Freemium", "freemium"),
        /// Default for records that omit pricing
        Paid => ("Paid", "paid"),
        Enterprise => ("Enterprise", "enterprise"),
    }
}

define_taxonomy! {
    /// Where the tool can run
    pub enum DeploymentOption in "deployment" {
        Cloud => ("Cloud", "cloud"),
        OnPremise => ("On-Premise", "on-premise"),
        Hybrid => ("Hybrid", "hybrid"),
        Api => ("API", "api"),
    }
}

impl Default for PricingTier {
    fn default() -> Self {
        PricingTier::Paid
    }
}

/// Comma-separated labels in slice order, or `-` when empty.
pub fn join_labels<T: Taxonomy>(values: &[T]) -> String {
    if values.is_empty() {
        return "-".to_string();
    }
    values
        .iter()
        .map(|v| v.label())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
#[path = "taxonomy_test.rs"]
mod tests;
