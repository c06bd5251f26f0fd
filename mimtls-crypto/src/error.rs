//! Error types for the cryptographic provider interface.

use core::fmt;

/// Result type for provider operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors surfaced by cryptographic providers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The entropy source failed or returned fewer bytes than requested.
    RandomSource(String),

    /// The requested algorithm is not available in this provider.
    UnsupportedAlgorithm(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::RandomSource(msg) => write!(f, "random source failure: {}", msg),
            Error::UnsupportedAlgorithm(msg) => write!(f, "unsupported algorithm: {}", msg),
        }
    }
}

impl std::error::Error for Error {}
