use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccessError {
    #[error("Option not found: {0}.")]
    NotFound(String),

    #[error("Option '{name}' holds a {found} value, not {expected}.")]
    TypeMismatch {
        name: String,
        expected: &'static str,
        found: &'static str,
    },
}
