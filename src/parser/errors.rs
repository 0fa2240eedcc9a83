use thiserror::Error;

/// Fieldless discriminant of [`ParseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    HelpRequested,
    UnknownOption,
    DuplicateOption,
    MissingValue,
    InvalidValue,
    MissingRequiredOption,
}

/// Every variant carries the generated help text for display to the user.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Help requested.")]
    HelpRequested { help: String },

    #[error("Invalid option: {option}.")]
    UnknownOption { option: String, help: String },

    #[error("Option specified twice: {option}.")]
    DuplicateOption { option: String, help: String },

    #[error("Missing value for option: {option}.")]
    MissingValue { option: String, help: String },

    #[error("Illegal value '{value}' for option {option}: {reason}.")]
    InvalidValue {
        option: String,
        value: String,
        reason: String,
        help: String,
    },

    #[error("Required option missing: {option}.")]
    MissingRequiredOption { option: String, help: String },
}

impl ParseError {
    pub fn kind(&self) -> ParseErrorKind {
        match self {
            ParseError::HelpRequested { .. } => ParseErrorKind::HelpRequested,
            ParseError::UnknownOption { .. } => ParseErrorKind::UnknownOption,
            ParseError::DuplicateOption { .. } => ParseErrorKind::DuplicateOption,
            ParseError::MissingValue { .. } => ParseErrorKind::MissingValue,
            ParseError::InvalidValue { .. } => ParseErrorKind::InvalidValue,
            ParseError::MissingRequiredOption { .. } => ParseErrorKind::MissingRequiredOption,
        }
    }

    pub fn help(&self) -> &str {
        match self {
            ParseError::HelpRequested { help }
            | ParseError::UnknownOption { help, .. }
            | ParseError::DuplicateOption { help, .. }
            | ParseError::MissingValue { help, .. }
            | ParseError::InvalidValue { help, .. }
            | ParseError::MissingRequiredOption { help, .. } => help,
        }
    }

    /// The option the error is about; `None` only for a help request.
    pub fn option(&self) -> Option<&str> {
        match self {
            ParseError::HelpRequested { .. } => None,
            ParseError::UnknownOption { option, .. }
            | ParseError::DuplicateOption { option, .. }
            | ParseError::MissingValue { option, .. }
            | ParseError::InvalidValue { option, .. }
            | ParseError::MissingRequiredOption { option, .. } => Some(option),
        }
    }
}
