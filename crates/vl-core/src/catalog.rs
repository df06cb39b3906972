//! In-memory tool catalog
//!
//! The catalog is fetched once per session and is read-only afterwards. It
//! owns the tool records and an index from slug to position, so other pages
//! can re-resolve a tool from its routing payload.

use crate::error::{CoreError, CoreResult};
use crate::tool::Tool;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Read-only collection of tools with unique ids and slugs
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tools: Vec<Tool>,
    by_slug: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, validating every record.
    ///
    /// Fails on the first duplicate id or slug, or on a record whose fields
    /// are out of range. Input order is kept as the catalog order, which is
    /// the tie-break order of every sort.
    pub fn new(tools: Vec<Tool>) -> CoreResult<Self> {
        let mut by_slug = HashMap::with_capacity(tools.len());
        let mut ids = HashSet::with_capacity(tools.len());

        for (idx, tool) in tools.iter().enumerate() {
            tool.validate()?;

            if !ids.insert(tool.id.as_str()) {
                return Err(CoreError::DuplicateTool {
                    field: "id",
                    value: tool.id.to_string(),
                });
            }
            if by_slug.insert(tool.slug.to_string(), idx).is_some() {
                return Err(CoreError::DuplicateTool {
                    field: "slug",
                    value: tool.slug.to_string(),
                });
            }
        }

        Ok(Self { tools, by_slug })
    }

    /// An empty catalog, used when the data source is unavailable.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Look up a tool by slug
    pub fn get(&self, slug: &str) -> Option<&Tool> {
        self.by_slug.get(slug).map(|&idx| &self.tools[idx])
    }

    /// Look up a tool by slug, failing with [`CoreError::ToolNotFound`].
    pub fn require(&self, slug: &str) -> CoreResult<&Tool> {
        self.get(slug).ok_or_else(|| CoreError::ToolNotFound {
            slug: slug.to_string(),
        })
    }

    /// All tools in catalog order
    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tool> {
        self.tools.iter()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Tool;
    type IntoIter = std::slice::Iter<'a, Tool>;

    fn into_iter(self) -> Self::IntoIter {
        self.tools.iter()
    }
}

/// Serialized form of a catalog: `{ tools: [...] }`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogDocument {
    #[serde(default)]
    pub tools: Vec<Tool>,
}

impl CatalogDocument {
    pub fn from_yaml_str(content: &str) -> CoreResult<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn to_json_string(&self) -> CoreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate and index the records.
    pub fn into_catalog(self) -> CoreResult<Catalog> {
        Catalog::new(self.tools)
    }
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
