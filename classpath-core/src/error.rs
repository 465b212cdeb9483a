use std::{io, path::PathBuf};

use thiserror::Error;

/// Result type for classpath-core operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("could not create directory: {}", path.display())]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not write to {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid file name '{name}': {reason}")]
    InvalidFileName { name: String, reason: String },

    #[error("invalid artifact coordinate '{input}': {reason}")]
    InvalidCoordinate { input: String, reason: String },

    #[error("could not update resource registry {}", path.display())]
    Registry {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub(crate) fn invalid_coordinate(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidCoordinate {
            input: input.into(),
            reason: reason.into(),
        }
    }
}
