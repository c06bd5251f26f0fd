//! The capability registry: which cipher suites and signature pairs the
//! stack will actually negotiate.
//!
//! Historically this state lived in module-level globals, which made
//! initialization order load-bearing and turned profile application into a
//! process-wide side effect. Here it is a value owned by the configuration
//! and shared between connections with `Arc`; extension hooks receive a
//! handle through their apply context. Mutations are append-only with
//! deduplication, so two racing identical appends are safe: one wins, the
//! other is a no-op.

use std::sync::Mutex;

use crate::cipher_suites::{default_cipher_suites, CipherSuite};
use crate::signature::{default_signature_pairs, disabled_signature_pairs, SignatureAndHash};

/// Cipher-suite and signature-algorithm registry.
#[derive(Debug)]
pub struct Registry {
    suites: Mutex<Vec<CipherSuite>>,
    enabled_pairs: Mutex<Vec<SignatureAndHash>>,
    supported_pairs: Vec<SignatureAndHash>,
}

impl Registry {
    /// Create a registry holding the host stack's defaults.
    pub fn new() -> Self {
        let mut supported = default_signature_pairs();
        supported.extend(disabled_signature_pairs());
        Self {
            suites: Mutex::new(default_cipher_suites()),
            enabled_pairs: Mutex::new(default_signature_pairs()),
            supported_pairs: supported,
        }
    }

    /// Register a cipher suite, appending it if its id is not present.
    ///
    /// Returns `true` if the suite was inserted.
    pub fn register_cipher_suite(&self, suite: CipherSuite) -> bool {
        let mut suites = self.suites.lock().expect("cipher suite registry poisoned");
        if suites.iter().any(|s| s.id == suite.id) {
            return false;
        }
        suites.push(suite);
        true
    }

    /// Whether a cipher suite id is negotiable.
    pub fn supports_cipher_suite(&self, id: u16) -> bool {
        self.suites
            .lock()
            .expect("cipher suite registry poisoned")
            .iter()
            .any(|s| s.id == id)
    }

    /// Number of registered cipher suites.
    pub fn cipher_suite_count(&self) -> usize {
        self.suites
            .lock()
            .expect("cipher suite registry poisoned")
            .len()
    }

    /// Ids of all registered cipher suites, registration-ordered.
    pub fn cipher_suite_ids(&self) -> Vec<u16> {
        self.suites
            .lock()
            .expect("cipher suite registry poisoned")
            .iter()
            .map(|s| s.id)
            .collect()
    }

    /// Enable a signature pair the stack implements but ships disabled.
    ///
    /// Pairs outside the implemented set are ignored: advertising them is
    /// fine, negotiating them is not possible. Returns `true` if the pair
    /// was appended to the enabled list.
    pub fn enable_signature_pair(&self, pair: SignatureAndHash) -> bool {
        if !self.supported_pairs.contains(&pair) {
            return false;
        }
        let mut enabled = self
            .enabled_pairs
            .lock()
            .expect("signature registry poisoned");
        if enabled.contains(&pair) {
            return false;
        }
        enabled.push(pair);
        true
    }

    /// Whether a signature pair is currently enabled.
    pub fn is_signature_pair_enabled(&self, pair: SignatureAndHash) -> bool {
        self.enabled_pairs
            .lock()
            .expect("signature registry poisoned")
            .contains(&pair)
    }

    /// The enabled signature pairs, preference-ordered.
    pub fn enabled_signature_pairs(&self) -> Vec<SignatureAndHash> {
        self.enabled_pairs
            .lock()
            .expect("signature registry poisoned")
            .clone()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher_suites::{KeyExchange, OLD_TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305_SHA256};
    use crate::signature::{hash_id, sig_id};

    #[test]
    fn test_register_is_idempotent() {
        let registry = Registry::new();
        let suite = CipherSuite::old_chacha20(
            OLD_TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305_SHA256,
            KeyExchange::EcdheRsa,
        );
        let before = registry.cipher_suite_count();

        assert!(registry.register_cipher_suite(suite));
        assert!(!registry.register_cipher_suite(suite));
        assert!(!registry.register_cipher_suite(suite));

        assert_eq!(registry.cipher_suite_count(), before + 1);
        assert!(registry.supports_cipher_suite(suite.id));
    }

    #[test]
    fn test_enable_disabled_pair() {
        let registry = Registry::new();
        let sha512_rsa = SignatureAndHash::new(hash_id::SHA512, sig_id::RSA);

        assert!(!registry.is_signature_pair_enabled(sha512_rsa));
        assert!(registry.enable_signature_pair(sha512_rsa));
        assert!(registry.is_signature_pair_enabled(sha512_rsa));
        assert!(!registry.enable_signature_pair(sha512_rsa));

        let enabled = registry.enabled_signature_pairs();
        assert_eq!(
            enabled.iter().filter(|p| **p == sha512_rsa).count(),
            1,
            "enable must dedup"
        );
    }

    #[test]
    fn test_unimplemented_pairs_rejected() {
        let registry = Registry::new();
        // RSA-PSS is advertisement-only.
        assert!(!registry.enable_signature_pair(SignatureAndHash::RSA_PSS_SHA256));
        // SHA-224 is implemented nowhere in the stack.
        assert!(!registry
            .enable_signature_pair(SignatureAndHash::new(hash_id::SHA224, sig_id::RSA)));
    }

    #[test]
    fn test_defaults_enabled_from_start() {
        let registry = Registry::new();
        assert!(registry
            .is_signature_pair_enabled(SignatureAndHash::new(hash_id::SHA256, sig_id::RSA)));
        assert!(registry.supports_cipher_suite(0xc02f));
    }
}
