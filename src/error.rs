use std::path::PathBuf;

use thiserror::Error;

/// A toolbar name that matches no tool or action
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown tool: {0}")]
pub struct UnknownTool(pub String);

/// Errors that can occur while writing the canvas to disk
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to encode {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("Canvas has no pixels ({width}x{height})")]
    EmptyRaster { width: u32, height: u32 },
}

/// Errors that can occur while loading the canvas configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid config value for {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
}
