//! Error types and result alias for the sendkey crate.
use std::{convert::Infallible, result::Result as StdResult};

use thiserror::Error;

/// Crate-local `Result` alias using the sendkey error type.
pub type Result<T> = StdResult<T, Error>;

/// Errors surfaced by the sequencer and its setup.
///
/// Injection itself never fails from the caller's point of view; events the OS
/// drops are not reported.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A key argument was neither a known key nor a single character.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// The injection entry points could not be resolved on this system.
    #[error("Input injection unavailable: {0}")]
    Unavailable(&'static str),
    /// A script could not be parsed.
    #[error("Script error: {0}")]
    Script(String),
}

impl Error {
    /// Helper to build an invalid-argument error from an arbitrary message.
    pub fn invalid<M: Into<String>>(msg: M) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

impl From<Infallible> for Error {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}
