//! Error types for bm-core

use thiserror::Error;

/// Core error type for Brickmesh
#[derive(Error, Debug)]
pub enum CoreError {
    /// E001: Failed to parse a discovered configuration file.
    ///
    /// A missing config file is a supported mode and never reaches this
    /// variant; a found-but-malformed one is a deployment misconfiguration
    /// that must surface loudly.
    #[error("[E001] Failed to parse config {path}: {message}")]
    ConfigParse { path: String, message: String },

    /// E002: IO error
    #[error("[E002] IO error: {0}")]
    Io(#[from] std::io::Error),

    /// E003: IO error with file path context
    #[error("[E003] Failed to read '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },

    /// E004: Deployment config is structurally unusable
    #[error("[E004] Invalid pipeline config: {message}")]
    PipelineConfigInvalid { message: String },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
