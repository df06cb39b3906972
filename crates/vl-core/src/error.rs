//! Error types for vl-core

use thiserror::Error;

/// Core error type for Vetline
#[derive(Error, Debug)]
pub enum CoreError {
    /// E001: Configuration file not found
    #[error("[E001] Config file not found: {path}")]
    ConfigNotFound { path: String },

    /// E002: Failed to parse configuration file
    #[error("[E002] Failed to parse config: {message}")]
    ConfigParseError { message: String },

    /// E003: Invalid configuration value
    #[error("[E003] Invalid config: {message}")]
    ConfigInvalid { message: String },

    /// E004: Two catalog records share an id or slug
    #[error("[E004] Duplicate tool {field} '{value}'")]
    DuplicateTool { field: &'static str, value: String },

    /// E005: A catalog record violates a field constraint
    #[error("[E005] Invalid tool '{slug}': {reason}")]
    InvalidTool { slug: String, reason: String },

    /// E006: Slug does not resolve to a catalog entry
    #[error("[E006] Tool not found: {slug}")]
    ToolNotFound { slug: String },

    /// E007: IO error with file path context
    #[error("[E007] Failed to read '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },

    /// E008: YAML parse error
    #[error("[E008] YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// E009: JSON serialization/deserialization error
    #[error("[E009] JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
