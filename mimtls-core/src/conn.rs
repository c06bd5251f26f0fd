//! The TLS connection and the overridden client handshake entry point.
//!
//! A connection carries two nested locks plus a completion signal:
//!
//! - the **handshake status lock** guards completion state, the sticky
//!   handshake error, and the commit flag;
//! - the **inbound record lock** guards the inbound half and may be held
//!   across blocking transport reads.
//!
//! To run a handshake, the status lock is taken first to check whether one
//! is needed. If a read is hanging it holds the inbound lock, so taking the
//! inbound lock while still holding status would block every operation that
//! merely needs to check handshake state. The entry point therefore commits
//! under the status lock, releases it, takes the inbound lock, and retakes
//! status, in that order. Waiters park on the condition variable paired
//! with the status lock; it is always signalled on exit, success or not.

use std::io::{Read, Write};
use std::sync::{Arc, Condvar, Mutex, MutexGuard};

use crate::error::{Error, Result};
use crate::extended_config::ClientHandshakeState;
use crate::flight::HandshakeIo;
use crate::record::{RecordIn, RecordOut};
use crate::session::ClientSessionState;
use crate::Config;

/// Role of a connection endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionRole {
    /// Initiating side
    Client,

    /// Accepting side
    Server,
}

#[derive(Debug, Default)]
struct HandshakeStatus {
    err: Option<Error>,
    complete: bool,
    /// A thread has committed to running the handshake.
    in_progress: bool,
    handshakes: u32,
}

/// A TLS connection over an arbitrary transport.
///
/// All methods take `&self`; the connection is internally synchronized and
/// safe to share across threads, matching the concurrency discipline of the
/// host TLS engine.
pub struct Conn {
    role: ConnectionRole,
    config: Mutex<Config>,
    status: Mutex<HandshakeStatus>,
    committed: Condvar,
    inbound: Mutex<RecordIn>,
    outbound: Mutex<RecordOut>,
    peer: String,
}

impl std::fmt::Debug for Conn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Conn")
            .field("role", &self.role)
            .field("peer", &self.peer)
            .field("handshake_complete", &self.handshake_complete())
            .finish_non_exhaustive()
    }
}

impl Conn {
    /// Create a client-role connection over a reader/writer pair.
    pub fn client<R, W>(reader: R, writer: W, config: Config) -> Self
    where
        R: Read + Send + 'static,
        W: Write + Send + 'static,
    {
        Self::new(ConnectionRole::Client, reader, writer, config)
    }

    /// Create a server-role connection over a reader/writer pair.
    pub fn server<R, W>(reader: R, writer: W, config: Config) -> Self
    where
        R: Read + Send + 'static,
        W: Write + Send + 'static,
    {
        Self::new(ConnectionRole::Server, reader, writer, config)
    }

    fn new<R, W>(role: ConnectionRole, reader: R, writer: W, config: Config) -> Self
    where
        R: Read + Send + 'static,
        W: Write + Send + 'static,
    {
        Self {
            role,
            config: Mutex::new(config),
            status: Mutex::new(HandshakeStatus::default()),
            committed: Condvar::new(),
            inbound: Mutex::new(RecordIn::new(Box::new(reader))),
            outbound: Mutex::new(RecordOut::new(Box::new(writer))),
            peer: String::new(),
        }
    }

    /// Record the peer address, used as the session-cache key when no
    /// server name is configured.
    pub fn with_peer(mut self, peer: impl Into<String>) -> Self {
        self.peer = peer.into();
        self
    }

    /// This endpoint's role.
    pub fn role(&self) -> ConnectionRole {
        self.role
    }

    /// Whether a handshake has completed on this connection.
    pub fn handshake_complete(&self) -> bool {
        self.lock_status().complete
    }

    pub(crate) fn lock_config(&self) -> MutexGuard<'_, Config> {
        self.config.lock().expect("connection configuration lock poisoned")
    }

    fn lock_status(&self) -> MutexGuard<'_, HandshakeStatus> {
        self.status.lock().expect("handshake status lock poisoned")
    }

    /// Run the client handshake using a prebuilt state.
    ///
    /// Requires `state.hello` and, optionally, `state.session` to be set.
    /// The hello's raw bytes go on the wire verbatim as the first flight.
    /// Concurrent operations that need the handshake result park on the
    /// completion signal; the handshake error, if any, is sticky.
    ///
    /// # Panics
    ///
    /// Panics when called on a server-role connection. The role is checked
    /// before any lock is taken, so the connection stays usable for a
    /// correct server handshake afterwards.
    pub fn client_handshake_with_state(&self, state: &mut ClientHandshakeState) -> Result<()> {
        assert!(
            self.role == ConnectionRole::Client,
            "client_handshake_with_state called on a server-role connection"
        );

        let mut status = self.lock_status();
        loop {
            if let Some(err) = &status.err {
                return Err(err.clone());
            }
            if status.complete {
                return Ok(());
            }
            if !status.in_progress {
                break;
            }
            status = self
                .committed
                .wait(status)
                .expect("handshake status lock poisoned");
        }

        // Commit to running the handshake, then release status so state
        // checks keep working while we wait for the inbound lock.
        status.in_progress = true;
        drop(status);

        let mut inbound = self.inbound.lock().expect("inbound record lock poisoned");
        let mut status = self.lock_status();

        let result = if status.err.is_some() || status.complete {
            // Unreachable while the commit flag is held.
            Err(Error::Internal(
                "handshake completed while the commit flag was held".into(),
            ))
        } else {
            self.run_client_flight(&mut inbound, state, &mut status)
        };

        match &result {
            Ok(()) => {
                status.complete = true;
                status.handshakes += 1;
            }
            Err(err) => {
                // A failed flight may have left an alert buffered; flush it
                // best-effort and keep the primary error.
                tracing::debug!(error = %err, "client handshake failed, flushing pending alert");
                if let Ok(mut outbound) = self.outbound.lock() {
                    let _ = outbound.flush();
                }
                status.err = Some(err.clone());
            }
        }

        status.in_progress = false;
        self.committed.notify_all();
        result
    }

    fn run_client_flight(
        &self,
        inbound: &mut RecordIn,
        state: &mut ClientHandshakeState,
        status: &mut HandshakeStatus,
    ) -> Result<()> {
        // Snapshot the configuration; the registry handle stays shared.
        let config = self.lock_config().clone();

        if config.server_name.is_empty() && !config.insecure_skip_verify {
            return Err(Error::InvalidConfig(
                "either a server name or insecure_skip_verify must be configured".into(),
            ));
        }

        let mut next_protos_len = 0usize;
        for proto in &config.next_protos {
            if proto.is_empty() || proto.len() > 255 {
                return Err(Error::InvalidConfig(format!(
                    "invalid next_protos entry of length {}",
                    proto.len()
                )));
            }
            next_protos_len += 1 + proto.len();
        }
        if next_protos_len > 0xffff {
            return Err(Error::InvalidConfig("next_protos values too large".into()));
        }

        let cache = config.session_cache.clone();
        let cache_key = self.session_cache_key(&config);

        // The session selected from the cache for this handshake, if any;
        // used afterwards to decide whether the flight produced a new one.
        let mut offered: Option<Arc<ClientSessionState>> = None;
        if let Some(cache) = &cache {
            if state.session.is_some() {
                state.hello.ticket_supported = true;
                // Renegotiations never resume: a renegotiation exists to
                // send a client certificate, which resumption would skip.
                if status.handshakes == 0 {
                    if let Some(candidate) = cache.get(&cache_key) {
                        let suite_ok = state
                            .hello
                            .cipher_suites
                            .contains(&candidate.cipher_suite());
                        let vers_ok = candidate.version() >= config.min_version
                            && candidate.version() <= config.max_version;
                        if suite_ok && vers_ok {
                            state.hello.session_ticket = candidate.ticket().to_vec();
                            // A random session id detects when the server
                            // accepted the ticket and is resuming (RFC 5077).
                            let mut session_id = vec![0u8; 16];
                            config.fill_random(&mut session_id)?;
                            state.hello.session_id = session_id;
                            offered = Some(candidate.clone());
                            state.session = Some(candidate);
                        } else {
                            // The cached session no longer fits this hello:
                            // nothing is offered, and the stale state must
                            // not survive into the post-handshake cache
                            // update.
                            state.session = None;
                        }
                    }
                }
            }
        }

        let flight = config.client_flight.clone().ok_or_else(|| {
            Error::InvalidConfig("no client flight wired to this connection".into())
        })?;

        let mut io = HandshakeIo::new(inbound, &self.outbound);
        flight.run(&mut io, state, &config)?;

        // Cache the session the flight left behind when it is not the one
        // we offered (a fresh ticket, or a caller-forged state that
        // survived a full handshake).
        if let (Some(cache), Some(new_session)) = (&cache, &state.session) {
            let changed = match &offered {
                Some(old) => !Arc::ptr_eq(old, new_session),
                None => true,
            };
            if changed {
                cache.put(&cache_key, new_session.clone());
            }
        }
        Ok(())
    }

    fn session_cache_key(&self, config: &Config) -> String {
        if !config.server_name.is_empty() {
            config.server_name.clone()
        } else {
            self.peer.clone()
        }
    }

    fn wait_for_handshake(&self) -> Result<()> {
        let mut status = self.lock_status();
        loop {
            if let Some(err) = &status.err {
                return Err(err.clone());
            }
            if status.complete {
                return Ok(());
            }
            status = self
                .committed
                .wait(status)
                .expect("handshake status lock poisoned");
        }
    }

    /// Read from the connection, blocking until a handshake has completed.
    ///
    /// Record protection for application data is owned by the host engine's
    /// halves once the flight installs it.
    pub fn read(&self, buf: &mut [u8]) -> Result<usize> {
        self.wait_for_handshake()?;
        let mut inbound = self.inbound.lock().expect("inbound record lock poisoned");
        inbound.read(buf)
    }

    /// Write to the connection, blocking until a handshake has completed.
    pub fn write(&self, buf: &[u8]) -> Result<usize> {
        self.wait_for_handshake()?;
        let mut outbound = self.outbound.lock().expect("outbound record lock poisoned");
        outbound.write_record(
            crate::protocol::ContentType::ApplicationData,
            crate::protocol::ProtocolVersion::Tls12,
            buf,
        )?;
        outbound.flush()?;
        Ok(buf.len())
    }
}
