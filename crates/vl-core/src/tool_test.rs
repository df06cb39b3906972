use super::*;
use crate::test_utils::{make_tool, ToolExt};

#[test]
fn test_validate_accepts_defaults() {
    assert!(make_tool("atlas").validate().is_ok());
}

#[test]
fn test_validate_rejects_score_over_100() {
    let err = make_tool("atlas").scored(101).validate().unwrap_err();
    assert!(err.to_string().contains("[E005]"));
    assert!(err.to_string().contains("exceeds maximum"));
}

#[test]
fn test_validate_rejects_blank_name() {
    let err = make_tool("atlas").named("  ").validate().unwrap_err();
    assert!(matches!(err, CoreError::InvalidTool { .. }));
}

#[test]
fn test_searchable_fields_include_labels() {
    let tool = make_tool("atlas")
        .in_industries(&[Industry::Legal])
        .certified(&[Certification::Soc2]);
    let fields: Vec<&str> = tool.searchable_fields().collect();
    assert!(fields.contains(&"Legal"));
    assert!(fields.contains(&"SOC 2"));
    assert!(fields.contains(&"Acme"));
}

#[test]
fn test_deserialize_applies_defaults() {
    let yaml = r#"
id: t1
slug: mesa
name: Mesa
vendor: Mesa Labs
lastUpdated: 2024-05-01T00:00:00Z
"#;
    let tool: Tool = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(tool.score, 0);
    assert_eq!(tool.reviews, 0);
    assert!(!tool.verified);
    assert_eq!(tool.pricing, PricingTier::Paid);
    assert!(tool.industries.is_empty());
}

#[test]
fn test_deserialize_rejects_unknown_industry() {
    let yaml = r#"
id: t1
slug: mesa
name: Mesa
vendor: Mesa Labs
industries: [Aerospace]
lastUpdated: 2024-05-01T00:00:00Z
"#;
    assert!(serde_yaml::from_str::<Tool>(yaml).is_err());
}

#[test]
fn test_has_feature_is_exact() {
    let tool = make_tool("atlas").with_features(&["Audit log", "SSO"]);
    assert!(tool.has_feature("SSO"));
    assert!(!tool.has_feature("sso"));
}
