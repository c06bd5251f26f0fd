//! Hash function interface.

/// Hash algorithm identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    /// SHA-256 (32-byte output)
    Sha256,

    /// SHA-384 (48-byte output)
    Sha384,

    /// SHA-512 (64-byte output)
    Sha512,
}

impl HashAlgorithm {
    /// Get the digest length in bytes.
    pub const fn output_len(self) -> usize {
        match self {
            HashAlgorithm::Sha256 => 32,
            HashAlgorithm::Sha384 => 48,
            HashAlgorithm::Sha512 => 64,
        }
    }

    /// Get the algorithm name.
    pub const fn name(self) -> &'static str {
        match self {
            HashAlgorithm::Sha256 => "SHA-256",
            HashAlgorithm::Sha384 => "SHA-384",
            HashAlgorithm::Sha512 => "SHA-512",
        }
    }
}

/// Incremental hash function instance.
pub trait Hash: Send {
    /// Absorb input bytes.
    fn update(&mut self, data: &[u8]);

    /// Produce the digest and reset the hasher for reuse.
    fn finish(&mut self) -> Vec<u8>;

    /// Digest length in bytes.
    fn output_len(&self) -> usize;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_lengths() {
        assert_eq!(HashAlgorithm::Sha256.output_len(), 32);
        assert_eq!(HashAlgorithm::Sha384.output_len(), 48);
        assert_eq!(HashAlgorithm::Sha512.output_len(), 64);
    }
}
