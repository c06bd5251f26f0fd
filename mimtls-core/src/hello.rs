//! The ClientHello message model.
//!
//! `ClientHelloMsg` is the semantic record a profile populates and the
//! builder marshals. The marshaled bytes land in `raw`, which is write-once:
//! after a build, every read returns exactly the bytes that went (or will
//! go) on the wire.

use crate::error::Result;
use crate::protocol::{ProtocolVersion, COMPRESSION_NONE};
use crate::Config;

/// A ClientHello in semantic form plus, once built, its exact wire bytes.
#[derive(Debug, Clone, Default)]
pub struct ClientHelloMsg {
    /// Protocol version field (TLS 1.2 for every current profile)
    pub vers: Option<ProtocolVersion>,

    /// 32-byte client random; filled from the configured RNG when a profile
    /// is applied, unless the caller set it first
    pub random: Vec<u8>,

    /// Session id (0-32 bytes); derivation is profile-specific
    pub session_id: Vec<u8>,

    /// Offered cipher suite codepoints, order-significant
    pub cipher_suites: Vec<u16>,

    /// Compression methods; always `{null}` in current profiles
    pub compression_methods: Vec<u8>,

    /// Session ticket to offer, if any
    pub session_ticket: Vec<u8>,

    /// Whether the hello advertises session ticket support
    pub ticket_supported: bool,

    raw: Vec<u8>,
}

impl ClientHelloMsg {
    /// Create an empty hello, ready for a profile to populate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the hello shape the host stack would produce on its own:
    /// TLS 1.2, fresh random, registry-default cipher suites, no extensions
    /// decided yet (the default marshaler owns those).
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut hello = Self {
            vers: Some(ProtocolVersion::Tls12),
            random: vec![0u8; 32],
            cipher_suites: config.registry.cipher_suite_ids(),
            compression_methods: vec![COMPRESSION_NONE],
            ..Self::default()
        };
        config.fill_random(&mut hello.random)?;
        Ok(hello)
    }

    /// The marshaled wire bytes; empty until the builder has run.
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    /// Whether the hello has been marshaled.
    pub fn has_raw(&self) -> bool {
        !self.raw.is_empty()
    }

    pub(crate) fn set_raw(&mut self, raw: Vec<u8>) {
        self.raw = raw;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_hello_has_no_raw() {
        let hello = ClientHelloMsg::new();
        assert!(!hello.has_raw());
        assert!(hello.raw().is_empty());
    }

    #[test]
    fn test_from_config_fills_random_and_suites() {
        let config = Config::default();
        let hello = ClientHelloMsg::from_config(&config).unwrap();

        assert_eq!(hello.vers, Some(ProtocolVersion::Tls12));
        assert_eq!(hello.random.len(), 32);
        assert_ne!(hello.random, vec![0u8; 32]);
        assert!(!hello.cipher_suites.is_empty());
        assert_eq!(hello.compression_methods, vec![COMPRESSION_NONE]);
        assert!(hello.session_id.is_empty());
    }

    #[test]
    fn test_raw_reads_back_verbatim() {
        let mut hello = ClientHelloMsg::new();
        let bytes = vec![1, 0, 0, 2, 3, 3];
        hello.set_raw(bytes.clone());
        assert_eq!(hello.raw(), bytes.as_slice());
        assert_eq!(hello.raw(), bytes.as_slice());
    }
}
