//! TLS 1.2 cipher suite codepoints and descriptors.
//!
//! Two groups of constants live here:
//!
//! - the modern codepoints the host stack implements out of the box, and
//! - legacy / pre-standard codepoints that reference browsers still offer
//!   (draft ChaCha20-Poly1305 ids, DHE suites, RC4-MD5, the renegotiation
//!   SCSV). Profiles place these on the wire verbatim; the implementable
//!   ones are registered with the cipher-suite registry so the stack's view
//!   stays consistent with what the bytes advertise.

/// TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256 (RFC 5289)
pub const TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256: u16 = 0xc02b;

/// TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256 (RFC 5289)
pub const TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256: u16 = 0xc02f;

/// TLS_ECDHE_ECDSA_WITH_AES_256_GCM_SHA384 (RFC 5289)
pub const TLS_ECDHE_ECDSA_WITH_AES_256_GCM_SHA384: u16 = 0xc02c;

/// TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384 (RFC 5289)
pub const TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384: u16 = 0xc030;

/// TLS_ECDHE_ECDSA_WITH_CHACHA20_POLY1305_SHA256 (RFC 7905)
pub const TLS_ECDHE_ECDSA_WITH_CHACHA20_POLY1305: u16 = 0xcca9;

/// TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305_SHA256 (RFC 7905)
pub const TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305: u16 = 0xcca8;

/// TLS_ECDHE_ECDSA_WITH_AES_128_CBC_SHA (RFC 4492)
pub const TLS_ECDHE_ECDSA_WITH_AES_128_CBC_SHA: u16 = 0xc009;

/// TLS_ECDHE_ECDSA_WITH_AES_256_CBC_SHA (RFC 4492)
pub const TLS_ECDHE_ECDSA_WITH_AES_256_CBC_SHA: u16 = 0xc00a;

/// TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA (RFC 4492)
pub const TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA: u16 = 0xc013;

/// TLS_ECDHE_RSA_WITH_AES_256_CBC_SHA (RFC 4492)
pub const TLS_ECDHE_RSA_WITH_AES_256_CBC_SHA: u16 = 0xc014;

/// TLS_ECDHE_ECDSA_WITH_RC4_128_SHA (RFC 4492)
pub const TLS_ECDHE_ECDSA_WITH_RC4_128_SHA: u16 = 0xc007;

/// TLS_ECDHE_RSA_WITH_RC4_128_SHA (RFC 4492)
pub const TLS_ECDHE_RSA_WITH_RC4_128_SHA: u16 = 0xc011;

/// TLS_RSA_WITH_AES_128_GCM_SHA256 (RFC 5288)
pub const TLS_RSA_WITH_AES_128_GCM_SHA256: u16 = 0x009c;

/// TLS_RSA_WITH_AES_256_GCM_SHA384 (RFC 5288)
pub const TLS_RSA_WITH_AES_256_GCM_SHA384: u16 = 0x009d;

/// TLS_RSA_WITH_AES_128_CBC_SHA (RFC 5246)
pub const TLS_RSA_WITH_AES_128_CBC_SHA: u16 = 0x002f;

/// TLS_RSA_WITH_AES_256_CBC_SHA (RFC 5246)
pub const TLS_RSA_WITH_AES_256_CBC_SHA: u16 = 0x0035;

/// TLS_RSA_WITH_RC4_128_SHA (RFC 5246)
pub const TLS_RSA_WITH_RC4_128_SHA: u16 = 0x0005;

/// TLS_RSA_WITH_3DES_EDE_CBC_SHA (RFC 5246)
pub const TLS_RSA_WITH_3DES_EDE_CBC_SHA: u16 = 0x000a;

// Legacy and advertisement-only codepoints offered by reference browsers.

/// Draft-era TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305_SHA256
pub const OLD_TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305_SHA256: u16 = 0xcc13;

/// Draft-era TLS_ECDHE_ECDSA_WITH_CHACHA20_POLY1305_SHA256
pub const OLD_TLS_ECDHE_ECDSA_WITH_CHACHA20_POLY1305_SHA256: u16 = 0xcc14;

/// Draft-era TLS_DHE_RSA_WITH_CHACHA20_POLY1305_SHA256 (advertised only)
pub const OLD_TLS_DHE_RSA_WITH_CHACHA20_POLY1305_SHA256: u16 = 0xcc15;

/// TLS_DHE_RSA_WITH_AES_128_GCM_SHA256 (advertised only)
pub const TLS_DHE_RSA_WITH_AES_128_GCM_SHA256: u16 = 0x009e;

/// TLS_DHE_RSA_WITH_AES_128_CBC_SHA (advertised only)
pub const TLS_DHE_RSA_WITH_AES_128_CBC_SHA: u16 = 0x0033;

/// TLS_DHE_RSA_WITH_AES_256_CBC_SHA (advertised only)
pub const TLS_DHE_RSA_WITH_AES_256_CBC_SHA: u16 = 0x0039;

/// TLS_RSA_WITH_RC4_128_MD5 (advertised only)
pub const TLS_RSA_WITH_RC4_128_MD5: u16 = 0x0004;

/// TLS_EMPTY_RENEGOTIATION_INFO_SCSV (RFC 5746 signaling value)
pub const TLS_EMPTY_RENEGOTIATION_INFO_SCSV: u16 = 0x00ff;

/// Key exchange mechanism of a cipher suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyExchange {
    /// Ephemeral ECDH, RSA-signed
    EcdheRsa,

    /// Ephemeral ECDH, ECDSA-signed
    EcdheEcdsa,

    /// RSA key transport
    Rsa,
}

/// Bulk encryption algorithm of a cipher suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BulkCipher {
    /// AES-128 in GCM mode
    Aes128Gcm,

    /// AES-256 in GCM mode
    Aes256Gcm,

    /// ChaCha20-Poly1305
    ChaCha20Poly1305,

    /// AES-128 in CBC mode with HMAC-SHA1
    Aes128CbcSha,

    /// AES-256 in CBC mode with HMAC-SHA1
    Aes256CbcSha,

    /// Triple-DES in CBC mode with HMAC-SHA1
    TripleDesCbcSha,

    /// RC4 stream cipher with HMAC-SHA1
    Rc4Sha,
}

/// Cipher suite descriptor held by the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CipherSuite {
    /// IANA (or draft-era) codepoint
    pub id: u16,

    /// Key exchange mechanism
    pub key_exchange: KeyExchange,

    /// Bulk encryption algorithm
    pub bulk: BulkCipher,

    /// Encryption key length in bytes
    pub key_len: usize,

    /// MAC key length in bytes (0 for AEAD suites)
    pub mac_len: usize,

    /// Implicit nonce / IV length in bytes
    pub iv_len: usize,
}

impl CipherSuite {
    /// Descriptor for a draft-era ChaCha20-Poly1305 codepoint.
    ///
    /// These reuse the standard ChaCha20 construction under the old id, so
    /// registering one makes the legacy codepoint fully negotiable.
    pub const fn old_chacha20(id: u16, key_exchange: KeyExchange) -> Self {
        Self {
            id,
            key_exchange,
            bulk: BulkCipher::ChaCha20Poly1305,
            key_len: 32,
            mac_len: 0,
            iv_len: 12,
        }
    }
}

/// The suites the host stack implements by default, preference-ordered.
pub fn default_cipher_suites() -> Vec<CipherSuite> {
    use BulkCipher::*;
    use KeyExchange::*;

    let table: [(u16, KeyExchange, BulkCipher, usize, usize, usize); 18] = [
        (TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256, EcdheEcdsa, Aes128Gcm, 16, 0, 4),
        (TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256, EcdheRsa, Aes128Gcm, 16, 0, 4),
        (TLS_ECDHE_ECDSA_WITH_AES_256_GCM_SHA384, EcdheEcdsa, Aes256Gcm, 32, 0, 4),
        (TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384, EcdheRsa, Aes256Gcm, 32, 0, 4),
        (TLS_ECDHE_ECDSA_WITH_CHACHA20_POLY1305, EcdheEcdsa, ChaCha20Poly1305, 32, 0, 12),
        (TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305, EcdheRsa, ChaCha20Poly1305, 32, 0, 12),
        (TLS_ECDHE_ECDSA_WITH_AES_128_CBC_SHA, EcdheEcdsa, Aes128CbcSha, 16, 20, 16),
        (TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA, EcdheRsa, Aes128CbcSha, 16, 20, 16),
        (TLS_ECDHE_ECDSA_WITH_AES_256_CBC_SHA, EcdheEcdsa, Aes256CbcSha, 32, 20, 16),
        (TLS_ECDHE_RSA_WITH_AES_256_CBC_SHA, EcdheRsa, Aes256CbcSha, 32, 20, 16),
        (TLS_ECDHE_ECDSA_WITH_RC4_128_SHA, EcdheEcdsa, Rc4Sha, 16, 20, 0),
        (TLS_ECDHE_RSA_WITH_RC4_128_SHA, EcdheRsa, Rc4Sha, 16, 20, 0),
        (TLS_RSA_WITH_AES_128_GCM_SHA256, Rsa, Aes128Gcm, 16, 0, 4),
        (TLS_RSA_WITH_AES_256_GCM_SHA384, Rsa, Aes256Gcm, 32, 0, 4),
        (TLS_RSA_WITH_AES_128_CBC_SHA, Rsa, Aes128CbcSha, 16, 20, 16),
        (TLS_RSA_WITH_AES_256_CBC_SHA, Rsa, Aes256CbcSha, 32, 20, 16),
        (TLS_RSA_WITH_RC4_128_SHA, Rsa, Rc4Sha, 16, 20, 0),
        (TLS_RSA_WITH_3DES_EDE_CBC_SHA, Rsa, TripleDesCbcSha, 24, 20, 8),
    ];

    table
        .iter()
        .map(|&(id, key_exchange, bulk, key_len, mac_len, iv_len)| CipherSuite {
            id,
            key_exchange,
            bulk,
            key_len,
            mac_len,
            iv_len,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_suite_ids_are_unique() {
        let suites = default_cipher_suites();
        for (i, a) in suites.iter().enumerate() {
            for b in &suites[i + 1..] {
                assert_ne!(a.id, b.id, "duplicate codepoint {:#06x}", a.id);
            }
        }
    }

    #[test]
    fn test_legacy_codepoints() {
        assert_eq!(OLD_TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305_SHA256, 0xcc13);
        assert_eq!(OLD_TLS_ECDHE_ECDSA_WITH_CHACHA20_POLY1305_SHA256, 0xcc14);
        assert_eq!(OLD_TLS_DHE_RSA_WITH_CHACHA20_POLY1305_SHA256, 0xcc15);
        assert_eq!(TLS_DHE_RSA_WITH_AES_128_GCM_SHA256, 0x009e);
        assert_eq!(TLS_DHE_RSA_WITH_AES_128_CBC_SHA, 0x0033);
        assert_eq!(TLS_DHE_RSA_WITH_AES_256_CBC_SHA, 0x0039);
        assert_eq!(TLS_RSA_WITH_RC4_128_MD5, 0x0004);
        assert_eq!(TLS_EMPTY_RENEGOTIATION_INFO_SCSV, 0x00ff);
    }

    #[test]
    fn test_old_chacha_descriptor() {
        let suite = CipherSuite::old_chacha20(
            OLD_TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305_SHA256,
            KeyExchange::EcdheRsa,
        );
        assert_eq!(suite.key_len, 32);
        assert_eq!(suite.mac_len, 0);
        assert_eq!(suite.iv_len, 12);
        assert_eq!(suite.bulk, BulkCipher::ChaCha20Poly1305);
    }
}
