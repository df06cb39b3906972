//! Error types for vl-catalog

use thiserror::Error;
use vl_core::CoreError;

/// Catalog source errors
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Source could not be opened or read (C001)
    #[error("[C001] Catalog source unavailable: {0}")]
    Unavailable(String),

    /// A record could not be decoded into a tool (C002)
    #[error("[C002] Failed to decode catalog record {record}: {message}")]
    Decode { record: String, message: String },

    /// File extension not recognized (C003)
    #[error("[C003] Unsupported catalog format '{extension}' for {path} (expected .yml, .yaml or .json)")]
    UnsupportedFormat { path: String, extension: String },

    /// Query execution error (C004)
    #[error("[C004] Catalog query failed: {0}")]
    Query(String),

    /// Mutex poisoned (C005)
    #[error("[C005] Catalog connection mutex poisoned: {0}")]
    MutexPoisoned(String),

    /// Records violate catalog invariants
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Result type alias for CatalogError
pub type CatalogResult<T> = Result<T, CatalogError>;

impl From<duckdb::Error> for CatalogError {
    fn from(err: duckdb::Error) -> Self {
        // duckdb::Error does not expose structured variants; a missing table
        // is the one case worth telling apart from a broken query.
        let msg = err.to_string();
        if msg.contains("Table with name") || msg.contains("does not exist") {
            CatalogError::Unavailable(msg)
        } else {
            CatalogError::Query(msg)
        }
    }
}
