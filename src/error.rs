use thiserror::Error;

use crate::output::errors::OutputError;
use crate::parser::errors::ParseError;
use crate::registry::errors::RegistryError;
use crate::schema::errors::SchemaError;

#[derive(Debug, Error)]
pub enum CmdError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Output(#[from] OutputError),

    #[error("While parsing against schema '{schema_file}': {source}")]
    InSchema {
        schema_file: String,
        #[source]
        source: Box<CmdError>,
    },
}

impl CmdError {
    /// Help text attached to a parse failure, if any.
    pub fn help(&self) -> Option<&str> {
        match self {
            CmdError::Parse(e) => Some(e.help()),
            CmdError::InSchema { source, .. } => source.help(),
            _ => None,
        }
    }
}
