use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the inputs store.
#[derive(Error, Debug)]
pub enum InputsError {
    /// The document exists but is not a valid YAML string→string mapping.
    #[error("error parsing inputs file {path}: {message}")]
    Validation { path: PathBuf, message: String },

    /// The mapping could not be rendered back to YAML.
    #[error("error writing inputs file {path}: {message}")]
    Serialize { path: PathBuf, message: String },

    /// Lookup of a key that is not present in the document.
    #[error("input not found: {0}")]
    KeyNotFound(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, InputsError>;
