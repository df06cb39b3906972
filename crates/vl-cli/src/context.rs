//! Runtime context for CLI commands

use anyhow::{Context, Result};
use std::path::Path;
use vl_catalog::{load_catalog, CatalogSource, DuckDbSource, FileSource};
use vl_core::{Catalog, Config, FacetOptions, SourceType};

use crate::cli::GlobalArgs;

/// Runtime context containing loaded configuration and catalog
pub struct RuntimeContext {
    /// The loaded configuration
    pub config: Config,

    /// Every listed tool, fetched once
    pub catalog: Catalog,

    /// Source the catalog came from; `None` when running on the empty fallback
    source: Option<Box<dyn CatalogSource>>,

    /// Verbose output enabled
    pub verbose: bool,
}

impl RuntimeContext {
    /// Create a new runtime context from global arguments
    pub async fn new(args: &GlobalArgs) -> Result<Self> {
        let project_path = Path::new(&args.project_dir);

        // Load config from custom path or project directory
        let config = if let Some(config_path) = &args.config {
            Config::load(Path::new(config_path)).context("Failed to load configuration file")?
        } else {
            Config::load_from_dir(project_path).context("Failed to load project configuration")?
        };

        let catalog_path = config.resolve_catalog_path(project_path, args.catalog.as_deref());
        let ctx = Self {
            config,
            catalog: Catalog::empty(),
            source: None,
            verbose: args.verbose,
        };
        ctx.verbose(&format!(
            "Loading {} catalog from {}",
            ctx.config.catalog.source_type,
            catalog_path.display()
        ));

        let loaded = match ctx.open_source(&catalog_path) {
            Ok(source) => load_catalog(source.as_ref())
                .await
                .context("Failed to load catalog")
                .map(|catalog| (catalog, source)),
            Err(e) => Err(e),
        };
        let (catalog, source) = match loaded {
            Ok((catalog, source)) => (catalog, Some(source)),
            Err(e) if ctx.config.catalog.allow_empty_on_error => {
                log::warn!("Catalog unavailable, continuing with no tools: {:#}", e);
                eprintln!("Warning: catalog unavailable, showing no tools: {:#}", e);
                (Catalog::empty(), None)
            }
            Err(e) => return Err(e),
        };
        ctx.verbose(&format!("Loaded {} tools", catalog.len()));

        Ok(Self {
            catalog,
            source,
            ..ctx
        })
    }

    /// Distinct filter values with tool counts, as reported by the source
    pub async fn facets(&self) -> Result<FacetOptions> {
        match &self.source {
            Some(source) => {
                self.verbose(&format!("Fetching facets from {} source", source.source_type()));
                source
                    .fetch_facets()
                    .await
                    .context("Failed to load filter values")
            }
            None => Ok(FacetOptions::from_tools(&self.catalog)),
        }
    }

    /// Print verbose output if enabled
    pub fn verbose(&self, msg: &str) {
        if self.verbose {
            eprintln!("[verbose] {}", msg);
        }
    }

    fn open_source(&self, path: &Path) -> Result<Box<dyn CatalogSource>> {
        let source: Box<dyn CatalogSource> = match self.config.catalog.source_type {
            SourceType::File => Box::new(FileSource::new(path).context("Invalid catalog file")?),
            SourceType::DuckDb => Box::new(
                DuckDbSource::new(&path.to_string_lossy(), self.config.catalog.table.as_str())
                    .context("Failed to open catalog database")?,
            ),
        };
        Ok(source)
    }
}
