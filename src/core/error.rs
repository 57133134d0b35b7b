use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenkeiError {
    #[error("Data file not found: {0}")]
    DataFileNotFound(PathBuf),

    #[error("Malformed transition key '{0}': expected 'attr1+attr2'")]
    MalformedPatternKey(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RenkeiError>;
