use super::*;
use crate::traits::load_catalog;

const SCHEMA: &str = "CREATE TABLE tools (
    id VARCHAR, slug VARCHAR, name VARCHAR, vendor VARCHAR,
    tagline VARCHAR, description VARCHAR,
    industries VARCHAR[], use_cases VARCHAR[], certifications VARCHAR[],
    score INTEGER, reviews INTEGER, verified BOOLEAN, pricing VARCHAR,
    deployment_options VARCHAR[], features VARCHAR[],
    last_updated TIMESTAMP, website VARCHAR
);";

/// Extension autoloading is off so decoding must work with the bundled core alone.
fn offline_connection() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "SET autoinstall_known_extensions = false; SET autoload_known_extensions = false;",
    )
    .unwrap();
    conn
}

fn seeded(rows: &str) -> DuckDbSource {
    let conn = offline_connection();
    conn.execute_batch(SCHEMA).unwrap();
    conn.execute_batch(rows).unwrap();
    DuckDbSource::from_connection(conn, "tools")
}

const TWO_TOOLS: &str = "
INSERT INTO tools VALUES
  ('t1', 'scribe', 'Scribe', 'Scribe Health', 'Clinical notes', NULL,
   ['Healthcare'], ['clinical-documentation'], ['HIPAA', 'SOC 2'],
   88, 120, true, 'Enterprise', ['Cloud', 'API'], ['Audit log', 'SSO'],
   TIMESTAMP '2024-03-01 00:00:00', 'https://scribe.example'),
  ('t2', 'ledger', 'Ledger', 'Ledger AI', NULL, NULL,
   ['Finance', 'Healthcare'], [], NULL,
   61, 8, false, NULL, ['On-Premise'], NULL,
   TIMESTAMP '2023-09-15 12:00:00', NULL);
";

#[tokio::test]
async fn test_in_memory() {
    let source = DuckDbSource::in_memory("tools").unwrap();
    assert_eq!(source.source_type(), "duckdb");
    assert_eq!(source.table(), "tools");
}

#[tokio::test]
async fn test_fetch_tools_decodes_rows() {
    let source = seeded(TWO_TOOLS);
    let tools = source.fetch_tools().await.unwrap();
    assert_eq!(tools.len(), 2);

    let scribe = &tools[0];
    assert_eq!(scribe.slug, "scribe");
    assert_eq!(scribe.industries, vec![Industry::Healthcare]);
    assert_eq!(scribe.use_cases, vec![UseCase::ClinicalDocumentation]);
    assert_eq!(
        scribe.certifications,
        vec![Certification::Hipaa, Certification::Soc2]
    );
    assert_eq!(scribe.pricing, PricingTier::Enterprise);
    assert_eq!(scribe.features, vec!["Audit log", "SSO"]);
    assert_eq!(scribe.last_updated.to_rfc3339(), "2024-03-01T00:00:00+00:00");
    assert!(scribe.verified);

    let ledger = &tools[1];
    assert_eq!(ledger.tagline, "");
    assert!(ledger.certifications.is_empty());
    assert!(ledger.features.is_empty());
    assert_eq!(ledger.pricing, PricingTier::Paid);
    assert_eq!(ledger.deployment_options, vec![DeploymentOption::OnPremise]);
    assert_eq!(ledger.website, None);
}

#[tokio::test]
async fn test_unknown_taxonomy_value_is_decode_error() {
    let source = seeded(
        "INSERT INTO tools VALUES ('t1', 'odd', 'Odd', 'V', NULL, NULL, ['Mining'], NULL, NULL,
         10, 0, false, NULL, NULL, NULL, TIMESTAMP '2024-01-01 00:00:00', NULL);",
    );
    let err = source.fetch_tools().await.unwrap_err();
    assert!(err.to_string().contains("[C002]"));
    assert!(err.to_string().contains("odd"));
}

#[tokio::test]
async fn test_out_of_range_score_is_decode_error() {
    let source = seeded(
        "INSERT INTO tools VALUES ('t1', 'odd', 'Odd', 'V', NULL, NULL, NULL, NULL, NULL,
         300, 0, false, NULL, NULL, NULL, TIMESTAMP '2024-01-01 00:00:00', NULL);",
    );
    assert!(matches!(
        source.fetch_tools().await,
        Err(CatalogError::Decode { .. })
    ));
}

#[tokio::test]
async fn test_missing_table_is_unavailable() {
    let source = DuckDbSource::in_memory("tools").unwrap();
    let err = source.fetch_tools().await.unwrap_err();
    assert!(matches!(err, CatalogError::Unavailable(_)));
}

#[tokio::test]
async fn test_missing_file_is_unavailable() {
    let result = DuckDbSource::new("/nonexistent/catalog.duckdb", "tools");
    assert!(matches!(result, Err(CatalogError::Unavailable(_))));
}

#[tokio::test]
async fn test_fetch_facets_matches_derived_counts() {
    let source = seeded(TWO_TOOLS);
    let facets = source.fetch_facets().await.unwrap();
    let tools = source.fetch_tools().await.unwrap();
    assert_eq!(facets, FacetOptions::from_tools(&tools));

    let healthcare = facets
        .industries
        .iter()
        .find(|f| f.value == Industry::Healthcare)
        .unwrap();
    assert_eq!(healthcare.count, 2);
}

#[tokio::test]
async fn test_load_catalog_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.duckdb");
    {
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch(SCHEMA).unwrap();
        conn.execute_batch(TWO_TOOLS).unwrap();
    }

    let source = DuckDbSource::from_path(&path, "tools").unwrap();
    let catalog = load_catalog(&source).await.unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.require("ledger").unwrap().vendor, "Ledger AI");
}

const MIXED_SPELLINGS: &str = "
INSERT INTO tools VALUES
  ('t1', 'alpha', 'Alpha', 'V', NULL, NULL,
   ['Healthcare'], ['clinical-documentation'], ['soc-2'],
   70, 0, false, 'paid', ['cloud'], NULL,
   TIMESTAMP '2024-01-01 00:00:00', NULL),
  ('t2', 'beta', 'Beta', 'V', NULL, NULL,
   ['healthcare', 'HEALTHCARE', 'Legal'], ['Clinical Documentation'], ['SOC 2'],
   60, 0, false, 'Paid', ['Cloud'], NULL,
   TIMESTAMP '2024-01-02 00:00:00', NULL);
";

#[tokio::test]
async fn test_fetch_facets_merges_key_and_label_spellings() {
    let source = seeded(MIXED_SPELLINGS);
    let facets = source.fetch_facets().await.unwrap();

    let industries: Vec<(Industry, usize)> =
        facets.industries.iter().map(|f| (f.value, f.count)).collect();
    assert_eq!(
        industries,
        vec![(Industry::Healthcare, 2), (Industry::Legal, 1)]
    );
    assert_eq!(facets.use_cases.len(), 1);
    assert_eq!(facets.use_cases[0].count, 2);
    assert_eq!(facets.certifications.len(), 1);
    assert_eq!(facets.pricing.len(), 1);
    assert_eq!(facets.pricing[0].value, PricingTier::Paid);
    assert_eq!(facets.pricing[0].count, 2);
    assert_eq!(facets.deployment_options[0].count, 2);

    let tools = source.fetch_tools().await.unwrap();
    assert_eq!(facets, FacetOptions::from_tools(&tools));
}

#[tokio::test]
async fn test_fetch_facets_unknown_value_is_decode_error() {
    let source = seeded(
        "INSERT INTO tools VALUES ('t1', 'odd', 'Odd', 'V', NULL, NULL, NULL, NULL, ['ISO 9001'],
         10, 0, false, NULL, NULL, NULL, TIMESTAMP '2024-01-01 00:00:00', NULL);",
    );
    let err = source.fetch_facets().await.unwrap_err();
    assert!(matches!(err, CatalogError::Decode { .. }));
    assert!(err.to_string().contains("t1"));
}

#[tokio::test]
async fn test_list_columns_decode_without_extensions() {
    let source = seeded(TWO_TOOLS);
    let tools = source.fetch_tools().await.unwrap();
    assert_eq!(tools[0].features, vec!["Audit log", "SSO"]);
    assert_eq!(tools[1].industries, vec![Industry::Finance, Industry::Healthcare]);
}
