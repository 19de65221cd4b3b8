use thiserror::Error;

use crate::registry::Domain;

#[derive(Error, Debug)]
pub enum HudError {
    #[error("Unknown category domain: {0}")]
    UnknownDomain(String),

    #[error("Subcategory `{name}` is not registered for {domain:?}")]
    UnknownSubcategory { domain: Domain, name: String },

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, HudError>;
