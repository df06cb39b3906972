//! Catalog source trait definition

use crate::error::CatalogResult;
use async_trait::async_trait;
use vl_core::{Catalog, FacetOptions, Tool};

/// Read access to the backing store of listed tools
///
/// Implementations must be Send + Sync for async operation. The catalog is
/// fetched once per session; everything after the fetch is synchronous.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch every listed tool, in catalog order
    async fn fetch_tools(&self) -> CatalogResult<Vec<Tool>>;

    /// Distinct values per category, for building filter option lists
    async fn fetch_facets(&self) -> CatalogResult<FacetOptions> {
        let tools = self.fetch_tools().await?;
        Ok(FacetOptions::from_tools(&tools))
    }

    /// Source type identifier for logging
    fn source_type(&self) -> &'static str;
}

/// Fetch and index a catalog, enforcing slug and id uniqueness.
pub async fn load_catalog(source: &dyn CatalogSource) -> CatalogResult<Catalog> {
    let tools = source.fetch_tools().await?;
    log::debug!(
        "Fetched {} tools from {} source",
        tools.len(),
        source.source_type()
    );
    Ok(Catalog::new(tools)?)
}
