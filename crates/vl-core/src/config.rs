//! Configuration types and parsing for vetline.yml

use crate::error::{CoreError, CoreResult};
use crate::sort::SortOption;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable that overrides `catalog.path`
pub const CATALOG_PATH_ENV: &str = "VL_CATALOG";

/// Main project configuration from vetline.yml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Project name
    pub name: String,

    /// Where the tool catalog is read from
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Browse page defaults
    #[serde(default)]
    pub browse: BrowseConfig,
}

/// Catalog data source type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    /// YAML or JSON document (default)
    #[default]
    File,
    /// DuckDB database file
    DuckDb,
}

impl std::fmt::Display for SourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceType::File => write!(f, "file"),
            SourceType::DuckDb => write!(f, "duckdb"),
        }
    }
}

/// Catalog source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    /// Source type (file or duckdb)
    #[serde(rename = "type", default)]
    pub source_type: SourceType,

    /// Path to the catalog document or database, relative to the project root
    #[serde(default = "default_catalog_path")]
    pub path: String,

    /// Table holding tool rows (duckdb only)
    #[serde(default = "default_table")]
    pub table: String,

    /// Serve an empty catalog instead of failing when the source is unreadable
    #[serde(default)]
    pub allow_empty_on_error: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            source_type: SourceType::default(),
            path: default_catalog_path(),
            table: default_table(),
            allow_empty_on_error: false,
        }
    }
}

/// Browse page defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BrowseConfig {
    /// Sort applied when no shared query string is given
    #[serde(default)]
    pub default_sort: SortOption,
}

const DEFAULT_CATALOG_PATH: &str = "catalog.yml";

const DEFAULT_TABLE: &str = "tools";

fn default_catalog_path() -> String {
    DEFAULT_CATALOG_PATH.to_string()
}

fn default_table() -> String {
    DEFAULT_TABLE.to_string()
}

impl Config {
    /// Load configuration from a file path
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: Config =
            serde_yaml::from_str(&content).map_err(|e| CoreError::ConfigParseError {
                message: format!("{}: {}", path.display(), e),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a project directory
    /// Looks for vetline.yml or vetline.yaml
    pub fn load_from_dir(dir: &Path) -> CoreResult<Self> {
        let yml_path = dir.join("vetline.yml");
        let yaml_path = dir.join("vetline.yaml");

        if yml_path.exists() {
            Self::load(&yml_path)
        } else if yaml_path.exists() {
            Self::load(&yaml_path)
        } else {
            Err(CoreError::ConfigNotFound {
                path: dir.join("vetline.yml").display().to_string(),
            })
        }
    }

    /// Validate the configuration
    fn validate(&self) -> CoreResult<()> {
        if self.name.trim().is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "Project name cannot be empty".to_string(),
            });
        }

        if self.catalog.path.trim().is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "catalog.path cannot be empty".to_string(),
            });
        }

        if self.catalog.source_type == SourceType::DuckDb && !is_identifier(&self.catalog.table) {
            return Err(CoreError::ConfigInvalid {
                message: format!(
                    "catalog.table '{}' must be a plain identifier (letters, digits, underscores)",
                    self.catalog.table
                ),
            });
        }

        Ok(())
    }

    /// Get the absolute catalog path relative to a project root
    pub fn catalog_path_absolute(&self, root: &Path) -> PathBuf {
        root.join(&self.catalog.path)
    }

    /// Resolve the catalog path from a CLI flag, the VL_CATALOG environment
    /// variable, or the config file
    ///
    /// Priority: CLI flag > VL_CATALOG env var > `catalog.path`
    pub fn resolve_catalog_path(&self, root: &Path, cli_path: Option<&str>) -> PathBuf {
        cli_path
            .map(String::from)
            .or_else(|| std::env::var(CATALOG_PATH_ENV).ok())
            .map(|p| root.join(p))
            .unwrap_or_else(|| self.catalog_path_absolute(root))
    }
}

fn is_identifier(s: &str) -> bool {
    !s.is_empty()
        && !s.starts_with(|c: char| c.is_ascii_digit())
        && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
