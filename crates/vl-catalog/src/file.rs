//! YAML/JSON document catalog source

use crate::error::{CatalogError, CatalogResult};
use crate::traits::CatalogSource;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use vl_core::{CatalogDocument, Tool};

/// Document format, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Json,
}

impl DocumentFormat {
    /// Detect the format from a path's extension
    pub fn from_path(path: &Path) -> CatalogResult<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();
        match extension.as_str() {
            "yml" | "yaml" => Ok(DocumentFormat::Yaml),
            "json" => Ok(DocumentFormat::Json),
            _ => Err(CatalogError::UnsupportedFormat {
                path: path.display().to_string(),
                extension,
            }),
        }
    }
}

/// Catalog read from a `{ tools: [...] }` document on disk
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    format: DocumentFormat,
}

impl FileSource {
    /// Create a source for a document; fails on an unrecognized extension.
    pub fn new(path: impl Into<PathBuf>) -> CatalogResult<Self> {
        let path = path.into();
        let format = DocumentFormat::from_path(&path)?;
        Ok(Self { path, format })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> DocumentFormat {
        self.format
    }

    fn decode(&self, content: &str) -> CatalogResult<CatalogDocument> {
        let parsed = match self.format {
            DocumentFormat::Yaml => CatalogDocument::from_yaml_str(content),
            DocumentFormat::Json => CatalogDocument::from_json_str(content),
        };
        parsed.map_err(|e| CatalogError::Decode {
            record: self.path.display().to_string(),
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl CatalogSource for FileSource {
    async fn fetch_tools(&self) -> CatalogResult<Vec<Tool>> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| CatalogError::Unavailable(format!("{}: {}", self.path.display(), e)))?;
        Ok(self.decode(&content)?.tools)
    }

    fn source_type(&self) -> &'static str {
        "file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::load_catalog;
    use vl_core::{Industry, PricingTier};

    const YAML_DOC: &str = r#"
tools:
  - id: t1
    slug: atlas
    name: Atlas
    vendor: Atlas Co
    industries: [Legal]
    score: 77
    pricing: Freemium
    lastUpdated: 2024-02-10T00:00:00Z
  - id: t2
    slug: mesa
    name: Mesa
    vendor: Mesa Labs
    industries: [Healthcare, Pharma]
    lastUpdated: 2023-11-05T00:00:00Z
"#;

    #[test]
    fn test_format_detection() {
        assert_eq!(
            DocumentFormat::from_path(Path::new("catalog.YAML")).unwrap(),
            DocumentFormat::Yaml
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("dump.json")).unwrap(),
            DocumentFormat::Json
        );
        let err = DocumentFormat::from_path(Path::new("catalog.csv")).unwrap_err();
        assert!(err.to_string().contains("[C003]"));
    }

    #[tokio::test]
    async fn test_fetch_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.yml");
        std::fs::write(&path, YAML_DOC).unwrap();

        let source = FileSource::new(&path).unwrap();
        let tools = source.fetch_tools().await.unwrap();
        assert_eq!(tools.len(), 2);
        assert_eq!(tools[0].pricing, PricingTier::Freemium);
        assert_eq!(tools[1].industries, vec![Industry::Healthcare, Industry::Pharma]);
        assert_eq!(source.source_type(), "file");
    }

    #[tokio::test]
    async fn test_fetch_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(
            &path,
            r#"{"tools":[{"id":"t9","slug":"cipher","name":"Cipher","vendor":"Cipher Inc","lastUpdated":"2024-07-01T00:00:00Z"}]}"#,
        )
        .unwrap();

        let catalog = load_catalog(&FileSource::new(&path).unwrap()).await.unwrap();
        assert!(catalog.get("cipher").is_some());
    }

    #[tokio::test]
    async fn test_default_facets_from_tools() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.yaml");
        std::fs::write(&path, YAML_DOC).unwrap();

        let facets = FileSource::new(&path).unwrap().fetch_facets().await.unwrap();
        let industries: Vec<Industry> = facets.industries.iter().map(|f| f.value).collect();
        assert_eq!(
            industries,
            vec![Industry::Healthcare, Industry::Legal, Industry::Pharma]
        );
    }

    #[tokio::test]
    async fn test_missing_file_is_unavailable() {
        let source = FileSource::new("/nonexistent/catalog.yml").unwrap();
        let err = source.fetch_tools().await.unwrap_err();
        assert!(matches!(err, CatalogError::Unavailable(_)));
    }

    #[tokio::test]
    async fn test_bad_record_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.yml");
        std::fs::write(
            &path,
            "tools:\n  - {id: t1, slug: a, name: A, vendor: V, industries: [Mars], lastUpdated: 2024-01-01T00:00:00Z}\n",
        )
        .unwrap();
        let err = FileSource::new(&path).unwrap().fetch_tools().await.unwrap_err();
        assert!(matches!(err, CatalogError::Decode { .. }));
    }

    #[tokio::test]
    async fn test_duplicate_slug_rejected_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.yml");
        std::fs::write(
            &path,
            "tools:\n  - {id: t1, slug: a, name: A, vendor: V, lastUpdated: 2024-01-01T00:00:00Z}\n  - {id: t2, slug: a, name: B, vendor: V, lastUpdated: 2024-01-01T00:00:00Z}\n",
        )
        .unwrap();
        let err = load_catalog(&FileSource::new(&path).unwrap()).await.unwrap_err();
        assert!(err.to_string().contains("[E004]"));
    }
}
