//! Error types for the MIMTLS core.

use core::fmt;

/// Result type for MIMTLS operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur while building or running a mimicked handshake.
///
/// Validation and entropy errors are always returned before any bytes reach
/// the wire. Handshake errors from the host TLS engine pass through
/// unchanged, after a best-effort flush of any pending alert record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid connection or client configuration
    InvalidConfig(String),

    /// Caller-supplied input failed validation
    InvalidInput(String),

    /// Short read or failure of the configured entropy source
    Entropy(String),

    /// Handshake failure reported by the host TLS engine
    Handshake(String),

    /// I/O error on the underlying transport
    Io(String),

    /// Cryptographic provider error
    Crypto(String),

    /// Internal invariant violation
    Internal(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidConfig(msg) => write!(f, "invalid configuration: {}", msg),
            Error::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
            Error::Entropy(msg) => write!(f, "entropy failure: {}", msg),
            Error::Handshake(msg) => write!(f, "handshake failure: {}", msg),
            Error::Io(msg) => write!(f, "i/o error: {}", msg),
            Error::Crypto(msg) => write!(f, "cryptographic error: {}", msg),
            Error::Internal(msg) => write!(f, "internal error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<mimtls_crypto::Error> for Error {
    fn from(e: mimtls_crypto::Error) -> Self {
        Error::Crypto(e.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_detail() {
        let err = Error::InvalidInput("client random must be 32 bytes, got 16".into());
        assert!(err.to_string().contains("32 bytes"));
    }

    #[test]
    fn test_crypto_error_conversion() {
        let err: Error = mimtls_crypto::Error::RandomSource("eof".into()).into();
        assert!(matches!(err, Error::Crypto(_)));
    }
}
