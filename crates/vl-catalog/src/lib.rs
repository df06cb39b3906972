//! vl-catalog - Catalog data sources for Vetline
//!
//! This crate provides the `CatalogSource` trait and implementations
//! reading tool listings from YAML/JSON documents and DuckDB tables.

pub mod duckdb;
pub mod error;
pub mod file;
pub mod traits;

pub use duckdb::DuckDbSource;
pub use error::{CatalogError, CatalogResult};
pub use file::{DocumentFormat, FileSource};
pub use traits::{load_catalog, CatalogSource};
