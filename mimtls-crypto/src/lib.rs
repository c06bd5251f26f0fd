//! # MIMTLS Cryptographic Provider Interface
//!
//! Trait-based cryptographic abstraction for MIMTLS. The protocol core only
//! consumes two primitives (a CSPRNG and SHA-2 digests), so this crate keeps
//! the interface deliberately small while preserving pluggability:
//!
//! ```text
//! Provider (main trait)
//! ├── Random (CSPRNG)
//! └── Hash (SHA-256, SHA-384, SHA-512)
//! ```
//!
//! The default backend is [`SystemProvider`], built on the operating system
//! entropy source and the `sha2` crate. Deterministic providers are useful in
//! tests that pin ClientHello bytes; see the `Random` docs.

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unused_qualifications
)]

pub mod error;
pub mod hash;
pub mod provider;
pub mod random;

pub use error::{Error, Result};
pub use hash::{Hash, HashAlgorithm};
pub use provider::SystemProvider;
pub use random::Random;

/// The cryptographic provider consumed by the protocol core.
///
/// Implementations must be `Send + Sync`; a provider is shared by every
/// connection built from the same configuration.
pub trait Provider: Send + Sync {
    /// Get the random number generator.
    fn random(&self) -> &dyn Random;

    /// Get a hash function instance.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedAlgorithm`] if the algorithm is not
    /// available in this provider.
    fn hash(&self, algorithm: HashAlgorithm) -> Result<Box<dyn Hash>>;
}
