//! Error handling for the keytap crate.

use std::{io, path::PathBuf, result};

use thiserror::Error;

/// Convenient result type for keytap operations.
pub type Result<T> = result::Result<T, Error>;

/// Errors that can occur while running keytap.
#[derive(Debug, Error)]
pub enum Error {
    /// A script file could not be read.
    #[error("Failed to read {path}: {source}")]
    Read {
        /// File that failed to load.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },
    /// Errors surfaced by the input synthesizer.
    #[error(transparent)]
    SendKey(#[from] sendkey::Error),
}
