//! Error types for eos-intfname

use thiserror::Error;

/// Errors reported while turning input tokens into interface names
#[derive(Error, Debug)]
pub enum IntfNameError {
    /// Token is not a 32-bit integer
    #[error("Parse error: {0}")]
    Parse(#[from] eos_intf::ParseError),

    /// Reading input or writing output failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for eos-intfname operations
pub type Result<T> = std::result::Result<T, IntfNameError>;
