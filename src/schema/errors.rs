use thiserror::Error;

use crate::registry::errors::RegistryError;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("File error: {0}.")]
    FileError(String),

    #[error("Unsupported schema format: {0}.")]
    UnsupportedFormat(String),

    #[error("Unknown type for option '{option}': {reason}.")]
    UnknownType { option: String, reason: String },

    #[error("Invalid default for option '{option}': {reason}.")]
    InvalidDefault { option: String, reason: String },

    #[error(transparent)]
    Registry(#[from] RegistryError),
}
