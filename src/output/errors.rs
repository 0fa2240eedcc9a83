use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Serialization error: {0}.")]
    SerializeError(String),
}
