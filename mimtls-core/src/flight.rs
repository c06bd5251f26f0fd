//! The seam to the host TLS engine's handshake flight.
//!
//! Everything after the ClientHello (ServerHello parsing, key exchange,
//! certificate verification, Finished) belongs to the host TLS engine and
//! is reached through [`ClientFlight`]. The overridden handshake entry point
//! hands the flight a prebuilt [`ClientHandshakeState`] whose `hello.raw`
//! bytes must go on the wire verbatim as the first flight; the engine fills
//! in the rest of the state as the handshake progresses.

use core::fmt;
use std::sync::Mutex;

use crate::error::{Error, Result};
use crate::extended_config::ClientHandshakeState;
use crate::protocol::{ContentType, ProtocolVersion};
use crate::record::{RawRecord, RecordIn, RecordOut};
use crate::Config;

/// Record-layer access handed to a flight.
///
/// The inbound half is exclusively held for the duration of the handshake;
/// outbound writes are buffered and take the outbound lock per record, so a
/// pending alert can still be flushed after a failure.
pub struct HandshakeIo<'a> {
    inbound: &'a mut RecordIn,
    outbound: &'a Mutex<RecordOut>,
}

impl<'a> HandshakeIo<'a> {
    pub(crate) fn new(inbound: &'a mut RecordIn, outbound: &'a Mutex<RecordOut>) -> Self {
        Self { inbound, outbound }
    }

    /// Buffer a record for sending.
    pub fn write_record(
        &mut self,
        content_type: ContentType,
        version: ProtocolVersion,
        payload: &[u8],
    ) -> Result<()> {
        self.outbound
            .lock()
            .expect("outbound record lock poisoned")
            .write_record(content_type, version, payload)
    }

    /// Flush all buffered records to the transport.
    pub fn flush(&mut self) -> Result<()> {
        self.outbound
            .lock()
            .expect("outbound record lock poisoned")
            .flush()
    }

    /// Read the next record, blocking on the transport.
    pub fn read_record(&mut self) -> Result<RawRecord> {
        self.inbound.read_record()
    }
}

impl fmt::Debug for HandshakeIo<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandshakeIo").finish_non_exhaustive()
    }
}

/// ServerHello fields a flight reports back on the handshake state.
#[derive(Debug, Clone)]
pub struct ServerHelloSummary {
    /// 32-byte server random
    pub random: Vec<u8>,

    /// Session id echoed (or issued) by the server
    pub session_id: Vec<u8>,

    /// Cipher suite the server selected
    pub cipher_suite: u16,
}

/// The host TLS engine's client handshake flight.
///
/// Contract: send `state.hello.raw()` verbatim as the first flight, then
/// drive the TLS 1.2 handshake to completion, populating
/// `state.server_hello` and `state.master_secret`, and replacing
/// `state.session` when the server issues a new ticket. Returning `Ok(())` asserts the
/// handshake completed; errors pass through to the caller unchanged.
pub trait ClientFlight: Send + Sync {
    /// Run the flight over the given record-layer access.
    fn run(
        &self,
        io: &mut HandshakeIo<'_>,
        state: &mut ClientHandshakeState,
        config: &Config,
    ) -> Result<()>;
}

/// Convenience flight step shared by engine implementations: put the
/// prebuilt ClientHello on the wire exactly as marshaled.
pub fn send_client_hello(io: &mut HandshakeIo<'_>, state: &ClientHandshakeState) -> Result<()> {
    if !state.hello.has_raw() {
        return Err(Error::Internal(
            "client hello was not marshaled before the flight".into(),
        ));
    }
    // The first flight always rides a TLS 1.0 record version for
    // middlebox tolerance.
    io.write_record(
        ContentType::Handshake,
        ProtocolVersion::Tls10,
        state.hello.raw(),
    )?;
    io.flush()
}
