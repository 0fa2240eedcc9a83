use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Invalid option specification '{spec}': {reason}.")]
    InvalidSpecification { spec: String, reason: String },
}

impl RegistryError {
    pub(crate) fn invalid(spec: &str, reason: impl Into<String>) -> Self {
        RegistryError::InvalidSpecification {
            spec: spec.to_string(),
            reason: reason.into(),
        }
    }
}
