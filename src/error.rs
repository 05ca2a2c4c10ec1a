//! Error types for coordkit

use std::fmt;

/// Result type for coordkit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in coordkit operations
#[derive(Debug)]
pub enum Error {
    /// Unrecognized datum name
    UnknownDatum(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownDatum(name) => write!(f, "Unknown datum: {}", name),
        }
    }
}

impl std::error::Error for Error {}
