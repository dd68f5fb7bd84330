use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdapterError {
    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid {source_id} product: {reason}")]
    InvalidProduct { source_id: String, reason: String },
}

pub type Result<T> = std::result::Result<T, AdapterError>;
