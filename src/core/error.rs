use thiserror::Error;

#[derive(Error, Debug)]
pub enum MathhammerError {
    #[error("Unknown defender: {0}")]
    UnknownDefender(String),

    #[error("Duplicate defender in catalog: {0}")]
    DuplicateDefender(String),

    #[error("Invalid defender {name}: {reason}")]
    InvalidDefender { name: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Catalog parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MathhammerError>;
