//! DuckDB catalog source implementation

use crate::error::{CatalogError, CatalogResult};
use crate::traits::CatalogSource;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use duckdb::types::Value;
use duckdb::Connection;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::sync::Mutex;
use vl_core::{
    Certification, DeploymentOption, FacetCount, FacetOptions, Industry, PricingTier, Taxonomy,
    Tool, ToolId, ToolSlug, UseCase,
};

/// Multi-valued `VARCHAR[]` columns, in `RawTool::lists` order
const LIST_COLUMNS: [&str; 5] = [
    "industries",
    "use_cases",
    "certifications",
    "deployment_options",
    "features",
];

/// Catalog read from a DuckDB table
pub struct DuckDbSource {
    conn: Mutex<Connection>,
    table: String,
}

/// One row as returned by DuckDB, before taxonomy decoding
struct RawTool {
    id: String,
    slug: String,
    name: String,
    vendor: String,
    tagline: String,
    description: String,
    lists: [Value; 5],
    score: i64,
    reviews: i64,
    verified: bool,
    pricing: Option<String>,
    last_updated_ms: i64,
    website: Option<String>,
}

impl DuckDbSource {
    /// Create a source over an empty in-memory database
    pub fn in_memory(table: impl Into<String>) -> CatalogResult<Self> {
        let conn =
            Connection::open_in_memory().map_err(|e| CatalogError::Unavailable(e.to_string()))?;
        Ok(Self::from_connection(conn, table))
    }

    /// Open a database file
    pub fn from_path(path: &Path, table: impl Into<String>) -> CatalogResult<Self> {
        if !path.exists() {
            return Err(CatalogError::Unavailable(format!(
                "database file not found: {}",
                path.display()
            )));
        }
        let conn = Connection::open(path)
            .map_err(|e| CatalogError::Unavailable(format!("{}: {}", path.display(), e)))?;
        Ok(Self::from_connection(conn, table))
    }

    /// Create from path string (handles :memory: special case)
    pub fn new(path: &str, table: impl Into<String>) -> CatalogResult<Self> {
        if path == ":memory:" {
            Self::in_memory(table)
        } else {
            Self::from_path(Path::new(path), table)
        }
    }

    /// Wrap an already-open connection
    pub fn from_connection(conn: Connection, table: impl Into<String>) -> Self {
        Self {
            conn: Mutex::new(conn),
            table: table.into(),
        }
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    fn quoted_table(&self) -> String {
        format!("\"{}\"", self.table.replace('"', "\"\""))
    }

    fn lock(&self) -> CatalogResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| CatalogError::MutexPoisoned(e.to_string()))
    }

    fn select_sql(&self) -> String {
        format!(
            "SELECT id, slug, name, vendor, COALESCE(tagline, ''), COALESCE(description, ''), \
             {}, COALESCE(score, 0)::BIGINT, COALESCE(reviews, 0)::BIGINT, \
             COALESCE(verified, false), pricing, \
             epoch_ms(CAST(last_updated AS TIMESTAMP))::BIGINT, website \
             FROM {} ORDER BY rowid",
            LIST_COLUMNS.join(", "),
            self.quoted_table()
        )
    }

    /// Fetch all rows synchronously
    fn fetch_sync(&self) -> CatalogResult<Vec<RawTool>> {
        let conn = self.lock()?;
        let sql = self.select_sql();
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map([], |row| {
            Ok(RawTool {
                id: row.get(0)?,
                slug: row.get(1)?,
                name: row.get(2)?,
                vendor: row.get(3)?,
                tagline: row.get(4)?,
                description: row.get(5)?,
                lists: [
                    row.get(6)?,
                    row.get(7)?,
                    row.get(8)?,
                    row.get(9)?,
                    row.get(10)?,
                ],
                score: row.get(11)?,
                reviews: row.get(12)?,
                verified: row.get(13)?,
                pricing: row.get(14)?,
                last_updated_ms: row.get(15)?,
                website: row.get(16)?,
            })
        })?;

        let mut raw = Vec::new();
        for row in rows {
            raw.push(row?);
        }
        Ok(raw)
    }

    /// Fetch the classification columns synchronously
    fn fetch_facet_rows_sync(&self) -> CatalogResult<Vec<FacetRow>> {
        let conn = self.lock()?;
        let sql = format!(
            "SELECT id, industries, use_cases, certifications, \
             COALESCE(pricing, '{}'), deployment_options FROM {}",
            PricingTier::default().label(),
            self.quoted_table()
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map([], |row| {
            Ok(FacetRow {
                id: row.get(0)?,
                industries: row.get(1)?,
                use_cases: row.get(2)?,
                certifications: row.get(3)?,
                pricing: row.get(4)?,
                deployment_options: row.get(5)?,
            })
        })?;

        let mut facet_rows = Vec::new();
        for row in rows {
            facet_rows.push(row?);
        }
        Ok(facet_rows)
    }
}

/// Classification columns of one row, for facet tallies
struct FacetRow {
    id: String,
    industries: Value,
    use_cases: Value,
    certifications: Value,
    pricing: String,
    deployment_options: Value,
}

/// Tool ids per decoded value; spelling variants of a value share one entry
struct Tally<T>(BTreeMap<T, BTreeSet<String>>);

impl<T: Taxonomy> Tally<T> {
    fn new() -> Self {
        Self(BTreeMap::new())
    }

    fn record(&mut self, id: &str, values: Vec<T>) {
        for value in values {
            self.0.entry(value).or_default().insert(id.to_string());
        }
    }

    fn into_counts(self) -> Vec<FacetCount<T>> {
        self.0
            .into_iter()
            .map(|(value, ids)| FacetCount {
                value,
                count: ids.len(),
            })
            .collect()
    }
}

impl RawTool {
    fn into_tool(self) -> CatalogResult<Tool> {
        let record = format!("slug '{}'", self.slug);
        let decode = |message: String| CatalogError::Decode {
            record: record.clone(),
            message,
        };

        let id = ToolId::try_new(self.id).ok_or_else(|| decode("blank id".to_string()))?;
        let slug = ToolSlug::try_new(self.slug.clone())
            .ok_or_else(|| decode("slug is not URL-safe".to_string()))?;
        let [industries, use_cases, certifications, deployment_options, features] = self.lists;

        let score = u8::try_from(self.score)
            .map_err(|_| decode(format!("score {} out of range", self.score)))?;
        let reviews = u32::try_from(self.reviews)
            .map_err(|_| decode(format!("reviews {} out of range", self.reviews)))?;
        let pricing = match self.pricing.as_deref() {
            None => PricingTier::default(),
            Some(raw) => PricingTier::from_param(raw)
                .ok_or_else(|| decode(format!("unknown pricing '{}'", raw)))?,
        };
        let last_updated: DateTime<Utc> = DateTime::from_timestamp_millis(self.last_updated_ms)
            .ok_or_else(|| decode(format!("timestamp {} out of range", self.last_updated_ms)))?;

        Ok(Tool {
            id,
            slug,
            name: self.name,
            vendor: self.vendor,
            tagline: self.tagline,
            description: self.description,
            industries: decode_taxonomy_list::<Industry>(industries).map_err(decode)?,
            use_cases: decode_taxonomy_list::<UseCase>(use_cases).map_err(decode)?,
            certifications: decode_taxonomy_list::<Certification>(certifications)
                .map_err(decode)?,
            score,
            reviews,
            verified: self.verified,
            pricing,
            deployment_options: decode_taxonomy_list::<DeploymentOption>(deployment_options)
                .map_err(decode)?,
            features: decode_string_list(features).map_err(decode)?,
            last_updated,
            website: self.website,
        })
    }
}

fn decode_string_list(value: Value) -> Result<Vec<String>, String> {
    let items = match value {
        Value::Null => return Ok(Vec::new()),
        Value::List(items) | Value::Array(items) => items,
        other => return Err(format!("expected a list, found {:?}", other)),
    };
    items
        .into_iter()
        .filter_map(|item| match item {
            Value::Null => None,
            Value::Text(text) | Value::Enum(text) => Some(Ok(text)),
            other => Some(Err(format!("expected text list item, found {:?}", other))),
        })
        .collect()
}

fn decode_taxonomy_list<T: Taxonomy>(value: Value) -> Result<Vec<T>, String> {
    decode_string_list(value)?
        .iter()
        .map(|raw| {
            T::from_param(raw).ok_or_else(|| format!("unknown {} '{}'", T::CATEGORY, raw))
        })
        .collect()
}

#[async_trait]
impl CatalogSource for DuckDbSource {
    async fn fetch_tools(&self) -> CatalogResult<Vec<Tool>> {
        self.fetch_sync()?
            .into_iter()
            .map(RawTool::into_tool)
            .collect()
    }

    async fn fetch_facets(&self) -> CatalogResult<FacetOptions> {
        let mut industries = Tally::new();
        let mut use_cases = Tally::new();
        let mut certifications = Tally::new();
        let mut pricing = Tally::new();
        let mut deployment_options = Tally::new();

        for row in self.fetch_facet_rows_sync()? {
            let decode = |message: String| CatalogError::Decode {
                record: format!("id '{}'", row.id),
                message,
            };
            industries.record(
                &row.id,
                decode_taxonomy_list::<Industry>(row.industries).map_err(decode)?,
            );
            use_cases.record(
                &row.id,
                decode_taxonomy_list::<UseCase>(row.use_cases).map_err(decode)?,
            );
            certifications.record(
                &row.id,
                decode_taxonomy_list::<Certification>(row.certifications).map_err(decode)?,
            );
            let tier = PricingTier::from_param(&row.pricing)
                .ok_or_else(|| decode(format!("unknown pricing '{}'", row.pricing)))?;
            pricing.record(&row.id, vec![tier]);
            deployment_options.record(
                &row.id,
                decode_taxonomy_list::<DeploymentOption>(row.deployment_options).map_err(decode)?,
            );
        }

        Ok(FacetOptions {
            industries: industries.into_counts(),
            use_cases: use_cases.into_counts(),
            certifications: certifications.into_counts(),
            pricing: pricing.into_counts(),
            deployment_options: deployment_options.into_counts(),
        })
    }

    fn source_type(&self) -> &'static str {
        "duckdb"
    }
}

#[cfg(test)]
#[path = "duckdb_test.rs"]
mod tests;
