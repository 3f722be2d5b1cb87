//! Error types for tag extraction
//!
//! - Usage and load errors end the run with a JSON error object
//! - Field extraction errors are contained: logged, the field falls back to its default
//! - Anything else is reported as an unexpected failure at the outermost level

use std::path::PathBuf;
use thiserror::Error;

/// Shown in the usage error object
pub const USAGE: &str = "Usage: extract-tags <audio_file_path>";

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("{USAGE}")]
    Usage,

    #[error("Could not load audio file '{path}': {reason}")]
    Load { path: PathBuf, reason: String },

    #[error("Failed to extract {field}: {reason}")]
    FieldExtraction { field: &'static str, reason: String },

    #[error("{0}")]
    Unexpected(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ExtractError>;

impl ExtractError {
    pub fn load(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        ExtractError::Load {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub fn field(field: &'static str, reason: impl ToString) -> Self {
        ExtractError::FieldExtraction {
            field,
            reason: reason.to_string(),
        }
    }
}
