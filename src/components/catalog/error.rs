use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Rejected operator input. Always recovered by prompting again; the
/// `Display` text is the corrective message shown to the operator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Error, enter a number")]
    NotANumber,
    #[error("Value cannot be less than {0}")]
    BelowMin(String),
    #[error("Value cannot be greater than {0}")]
    AboveMax(String),
    #[error("Choose a valid value")]
    InvalidSelection,
}

/// Failures that end the running operation.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to access catalog file {path}: {source}")]
    Storage {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write catalog row: {0}")]
    Encode(#[from] csv::Error),
    #[error("console i/o failed: {0}")]
    Console(#[source] io::Error),
    #[error("console input closed")]
    InputClosed,
}

impl CatalogError {
    pub fn storage(path: impl Into<PathBuf>, source: io::Error) -> Self {
        CatalogError::Storage {
            path: path.into(),
            source,
        }
    }
}
