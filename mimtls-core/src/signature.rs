//! Signature/hash pair identifiers for the signature_algorithms extension.
//!
//! TLS 1.2 names each algorithm as a (hash, signature) byte pair, written to
//! the wire hash-first. Internal tables keep the same order so the wire
//! contract is visible at the type.

/// Hash algorithm identifiers (RFC 5246 Section 7.4.1.4.1).
pub mod hash_id {
    /// SHA-1
    pub const SHA1: u8 = 2;

    /// SHA-224 (never enabled by the host stack)
    pub const SHA224: u8 = 3;

    /// SHA-256
    pub const SHA256: u8 = 4;

    /// SHA-384
    pub const SHA384: u8 = 5;

    /// SHA-512 (implemented but disabled by default; profiles enable it)
    pub const SHA512: u8 = 6;

    /// Intrinsic-hash marker used by the RSA-PSS codepoints
    pub const INTRINSIC: u8 = 8;
}

/// Signature algorithm identifiers (RFC 5246 Section 7.4.1.4.1).
pub mod sig_id {
    /// RSA PKCS#1 v1.5
    pub const RSA: u8 = 1;

    /// ECDSA
    pub const ECDSA: u8 = 3;
}

/// A (hash, signature) pair as advertised in signature_algorithms.
///
/// Wire order is hash byte then signature byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SignatureAndHash {
    /// Hash algorithm id
    pub hash: u8,

    /// Signature algorithm id
    pub signature: u8,
}

impl SignatureAndHash {
    /// rsa_pss_rsae_sha256, advertised only; rides the (8, 4) codepoint
    pub const RSA_PSS_SHA256: SignatureAndHash = SignatureAndHash {
        hash: hash_id::INTRINSIC,
        signature: 0x04,
    };

    /// rsa_pss_rsae_sha384, advertised only; rides the (8, 5) codepoint
    pub const RSA_PSS_SHA384: SignatureAndHash = SignatureAndHash {
        hash: hash_id::INTRINSIC,
        signature: 0x05,
    };

    /// rsa_pss_rsae_sha512, advertised only; rides the (8, 6) codepoint
    pub const RSA_PSS_SHA512: SignatureAndHash = SignatureAndHash {
        hash: hash_id::INTRINSIC,
        signature: 0x06,
    };

    /// Shorthand constructor.
    pub const fn new(hash: u8, signature: u8) -> Self {
        Self { hash, signature }
    }
}

/// Pairs the host stack enables out of the box, preference-ordered.
pub fn default_signature_pairs() -> Vec<SignatureAndHash> {
    vec![
        SignatureAndHash::new(hash_id::SHA256, sig_id::RSA),
        SignatureAndHash::new(hash_id::SHA256, sig_id::ECDSA),
        SignatureAndHash::new(hash_id::SHA384, sig_id::RSA),
        SignatureAndHash::new(hash_id::SHA384, sig_id::ECDSA),
        SignatureAndHash::new(hash_id::SHA1, sig_id::RSA),
        SignatureAndHash::new(hash_id::SHA1, sig_id::ECDSA),
    ]
}

/// Pairs the host stack implements but ships disabled. Profiles that
/// advertise one of these get it enabled through the registry.
pub fn disabled_signature_pairs() -> Vec<SignatureAndHash> {
    vec![
        SignatureAndHash::new(hash_id::SHA512, sig_id::RSA),
        SignatureAndHash::new(hash_id::SHA512, sig_id::ECDSA),
    ]
}
