//! Client session state and the resumption cache.

use core::fmt;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use zeroize::Zeroizing;

use crate::protocol::ProtocolVersion;

/// Opaque bundle of state needed to offer session resumption.
///
/// A state normally comes out of a prior successful handshake, but callers
/// may construct one from scratch, including a ticket the server never
/// issued. A server will reject such a ticket and fall back to a full
/// handshake; the offer itself is still well-formed on the wire.
#[derive(Clone)]
pub struct ClientSessionState {
    session_ticket: Vec<u8>,
    vers: ProtocolVersion,
    cipher_suite: u16,
    master_secret: Zeroizing<Vec<u8>>,
    server_certificates: Vec<Vec<u8>>,
}

impl ClientSessionState {
    /// Bundle session state for resumption offers.
    pub fn new(
        session_ticket: Vec<u8>,
        vers: ProtocolVersion,
        cipher_suite: u16,
        master_secret: Vec<u8>,
        server_certificates: Vec<Vec<u8>>,
    ) -> Self {
        Self {
            session_ticket,
            vers,
            cipher_suite,
            master_secret: Zeroizing::new(master_secret),
            server_certificates,
        }
    }

    /// The session ticket bytes (possibly empty).
    pub fn ticket(&self) -> &[u8] {
        &self.session_ticket
    }

    /// Protocol version the session was negotiated under.
    pub fn version(&self) -> ProtocolVersion {
        self.vers
    }

    /// Cipher suite the session was negotiated under.
    pub fn cipher_suite(&self) -> u16 {
        self.cipher_suite
    }

    /// The master secret.
    pub fn master_secret(&self) -> &[u8] {
        &self.master_secret
    }

    /// DER-encoded server certificate chain.
    pub fn server_certificates(&self) -> &[Vec<u8>] {
        &self.server_certificates
    }
}

impl fmt::Debug for ClientSessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientSessionState")
            .field("ticket_len", &self.session_ticket.len())
            .field("vers", &self.vers)
            .field("cipher_suite", &format_args!("{:#06x}", self.cipher_suite))
            .field("master_secret", &"<redacted>")
            .field("server_certificates", &self.server_certificates.len())
            .finish()
    }
}

/// Cache of client session state, keyed by server name or address.
///
/// Reuse the same cache across connections to the same server to get
/// resumption; the cache is consulted only on the first handshake of a
/// connection.
pub trait ClientSessionCache: Send + Sync {
    /// Look up the session for a cache key.
    fn get(&self, key: &str) -> Option<Arc<ClientSessionState>>;

    /// Store the session for a cache key, replacing any previous entry.
    fn put(&self, key: &str, state: Arc<ClientSessionState>);
}

/// Bounded in-memory session cache with least-recently-used eviction.
#[derive(Debug)]
pub struct InMemorySessionCache {
    capacity: usize,
    entries: Mutex<VecDeque<(String, Arc<ClientSessionState>)>>,
}

impl InMemorySessionCache {
    /// Default capacity, matching common client stacks.
    pub const DEFAULT_CAPACITY: usize = 64;

    /// Create a cache holding up to `capacity` sessions (minimum 1).
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: Mutex::new(VecDeque::new()),
        }
    }
}

impl Default for InMemorySessionCache {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

impl ClientSessionCache for InMemorySessionCache {
    fn get(&self, key: &str) -> Option<Arc<ClientSessionState>> {
        let mut entries = self.entries.lock().expect("session cache poisoned");
        let idx = entries.iter().position(|(k, _)| k == key)?;
        // Refresh recency.
        let entry = entries.remove(idx)?;
        let state = entry.1.clone();
        entries.push_back(entry);
        Some(state)
    }

    fn put(&self, key: &str, state: Arc<ClientSessionState>) {
        let mut entries = self.entries.lock().expect("session cache poisoned");
        if let Some(idx) = entries.iter().position(|(k, _)| k == key) {
            entries.remove(idx);
        } else if entries.len() >= self.capacity {
            entries.pop_front();
        }
        entries.push_back((key.to_string(), state));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dummy_session(tag: u8) -> Arc<ClientSessionState> {
        Arc::new(ClientSessionState::new(
            vec![tag; 8],
            ProtocolVersion::Tls12,
            0xc02b,
            vec![0u8; 48],
            Vec::new(),
        ))
    }

    #[test]
    fn test_put_get_round_trip() {
        let cache = InMemorySessionCache::new(4);
        let session = dummy_session(1);
        cache.put("example.com", session.clone());

        let found = cache.get("example.com").unwrap();
        assert!(Arc::ptr_eq(&found, &session));
        assert!(cache.get("other.example").is_none());
    }

    #[test]
    fn test_put_replaces_existing() {
        let cache = InMemorySessionCache::new(4);
        cache.put("example.com", dummy_session(1));
        let newer = dummy_session(2);
        cache.put("example.com", newer.clone());

        let found = cache.get("example.com").unwrap();
        assert!(Arc::ptr_eq(&found, &newer));
    }

    #[test]
    fn test_eviction_drops_oldest() {
        let cache = InMemorySessionCache::new(2);
        cache.put("a", dummy_session(1));
        cache.put("b", dummy_session(2));
        cache.put("c", dummy_session(3));

        assert!(cache.get("a").is_none());
        assert!(cache.get("b").is_some());
        assert!(cache.get("c").is_some());
    }

    #[test]
    fn test_get_refreshes_recency() {
        let cache = InMemorySessionCache::new(2);
        cache.put("a", dummy_session(1));
        cache.put("b", dummy_session(2));
        cache.get("a");
        cache.put("c", dummy_session(3));

        assert!(cache.get("a").is_some(), "recently used entry evicted");
        assert!(cache.get("b").is_none());
    }

    #[test]
    fn test_debug_redacts_master_secret() {
        let state = dummy_session(9);
        let rendered = format!("{:?}", state);
        assert!(rendered.contains("<redacted>"));
        assert!(!rendered.contains("[0, 0"));
    }
}
