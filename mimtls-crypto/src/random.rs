//! Cryptographically secure random number generator interface.

use crate::Result;

/// Random number generator trait.
///
/// Provides the CSPRNG used for ClientHello randoms and session ids.
///
/// # Security Requirements
///
/// - MUST be cryptographically secure and seeded from OS entropy
/// - MUST be thread-safe (`Send + Sync`)
///
/// Deterministic implementations are acceptable only in tests, where a fixed
/// byte stream pins handshake output for golden comparisons.
pub trait Random: Send + Sync {
    /// Fill a buffer with random bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if random generation fails or the source cannot
    /// deliver `dest.len()` bytes. Partial fills must be reported as errors,
    /// never silently truncated.
    fn fill(&self, dest: &mut [u8]) -> Result<()>;

    /// Generate a random byte vector of the specified length.
    fn generate(&self, len: usize) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; len];
        self.fill(&mut buf)?;
        Ok(buf)
    }
}
