//! Behavior of the overridden client handshake entry point: lock
//! discipline, prebuilt-hello pass-through, resumption, failure handling,
//! and role misuse.
//!
//! Scripted [`ClientFlight`] implementations stand in for a live TLS 1.2
//! server; each one exercises a different contract of the override.

use std::io::{self, Read};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

use mimtls_core::flight::{send_client_hello, ClientFlight, HandshakeIo};
use mimtls_core::mimtls_crypto::{self, Hash, HashAlgorithm, Provider, Random, SystemProvider};
use mimtls_core::{
    ClientHandshakeState, ClientSessionCache, ClientSessionState, Config, Conn, Error,
    InMemorySessionCache, ProfileId, ProtocolVersion, Result,
};

/// Writer half that exposes everything the connection sent.
#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    fn contents(&self) -> Vec<u8> {
        self.0.lock().unwrap().clone()
    }
}

impl io::Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Reader half that blocks until bytes are pushed through a channel.
struct BlockingReader {
    rx: mpsc::Receiver<Vec<u8>>,
    pending: Vec<u8>,
}

impl Read for BlockingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.pending.is_empty() {
            match self.rx.recv() {
                Ok(data) => self.pending = data,
                Err(_) => return Ok(0),
            }
        }
        let n = buf.len().min(self.pending.len());
        buf[..n].copy_from_slice(&self.pending[..n]);
        self.pending.drain(..n);
        Ok(n)
    }
}

/// Sends the prebuilt hello and declares the handshake done.
struct SendHelloFlight;

impl ClientFlight for SendHelloFlight {
    fn run(
        &self,
        io: &mut HandshakeIo<'_>,
        state: &mut ClientHandshakeState,
        _config: &Config,
    ) -> Result<()> {
        send_client_hello(io, state)
    }
}

/// Buffers a fatal alert without flushing, then fails.
struct FailingFlight;

impl ClientFlight for FailingFlight {
    fn run(
        &self,
        io: &mut HandshakeIo<'_>,
        _state: &mut ClientHandshakeState,
        _config: &Config,
    ) -> Result<()> {
        // alert(2) handshake_failure(40), left in the outbound buffer for
        // the override to flush.
        io.write_record(
            mimtls_core::ContentType::Alert,
            ProtocolVersion::Tls12,
            &[2, 40],
        )?;
        Err(Error::Handshake("scripted server rejection".into()))
    }
}

/// Captures the hello fields the override hands to the engine.
#[derive(Default)]
struct CapturingFlight {
    random: Mutex<Option<Vec<u8>>>,
    session_ticket: Mutex<Option<Vec<u8>>>,
    session_id_len: AtomicUsize,
}

impl ClientFlight for CapturingFlight {
    fn run(
        &self,
        _io: &mut HandshakeIo<'_>,
        state: &mut ClientHandshakeState,
        _config: &Config,
    ) -> Result<()> {
        *self.random.lock().unwrap() = Some(state.hello.random.clone());
        *self.session_ticket.lock().unwrap() = Some(state.hello.session_ticket.clone());
        self.session_id_len
            .store(state.hello.session_id.len(), Ordering::SeqCst);
        Ok(())
    }
}

/// Completes the handshake and installs a fresh session, as if the server
/// had issued a new ticket.
struct TicketIssuingFlight {
    issued: Arc<ClientSessionState>,
}

impl ClientFlight for TicketIssuingFlight {
    fn run(
        &self,
        _io: &mut HandshakeIo<'_>,
        state: &mut ClientHandshakeState,
        _config: &Config,
    ) -> Result<()> {
        state.session = Some(self.issued.clone());
        Ok(())
    }
}

/// Session cache wrapper that counts stores.
struct CountingCache {
    inner: InMemorySessionCache,
    puts: AtomicUsize,
}

impl CountingCache {
    fn new() -> Self {
        Self {
            inner: InMemorySessionCache::default(),
            puts: AtomicUsize::new(0),
        }
    }
}

impl ClientSessionCache for CountingCache {
    fn get(&self, key: &str) -> Option<Arc<ClientSessionState>> {
        self.inner.get(key)
    }

    fn put(&self, key: &str, state: Arc<ClientSessionState>) {
        self.puts.fetch_add(1, Ordering::SeqCst);
        self.inner.put(key, state);
    }
}

fn forged_session(ticket: &[u8]) -> Arc<ClientSessionState> {
    session_with(ticket, ProtocolVersion::Tls12, 0xc02b)
}

fn session_with(
    ticket: &[u8],
    vers: ProtocolVersion,
    cipher_suite: u16,
) -> Arc<ClientSessionState> {
    Arc::new(ClientSessionState::new(
        ticket.to_vec(),
        vers,
        cipher_suite,
        vec![0u8; 48],
        Vec::new(),
    ))
}

fn client_conn(flight: Arc<dyn ClientFlight>, writer: SharedBuf) -> Conn {
    let config = Config::builder()
        .with_server_name("example.com")
        .with_client_flight(flight)
        .build()
        .unwrap();
    Conn::client(io::empty(), writer, config)
}

#[test]
fn prebuilt_hello_goes_on_the_wire_verbatim() {
    let writer = SharedBuf::default();
    let conn = client_conn(Arc::new(SendHelloFlight), writer.clone());

    let mut econf = conn
        .make_extended_config_parrot(ProfileId::CHROME_58)
        .unwrap();
    let mut state = econf.build_state().unwrap();
    let raw = state.hello.raw().to_vec();

    conn.client_handshake_with_state(&mut state).unwrap();
    assert!(conn.handshake_complete());

    let sent = writer.contents();
    // One handshake record: header then the marshaled hello, untouched.
    assert_eq!(sent[0], 22);
    assert_eq!(&sent[1..3], &[0x03, 0x01]);
    assert_eq!(u16::from_be_bytes([sent[3], sent[4]]) as usize, raw.len());
    assert_eq!(&sent[5..], raw.as_slice());
}

#[test]
fn default_marshal_path_keeps_caller_random() {
    let flight = Arc::new(CapturingFlight::default());
    let conn = client_conn(flight.clone(), SharedBuf::default());

    let mut econf = conn.make_extended_config().unwrap();
    econf.set_client_random(&[0x42; 32]).unwrap();
    let mut state = econf.build_state().unwrap();

    // Default marshaling is the engine's job: no raw bytes yet.
    assert!(!state.hello.has_raw());

    conn.client_handshake_with_state(&mut state).unwrap();
    assert_eq!(
        flight.random.lock().unwrap().as_deref(),
        Some(&[0x42u8; 32][..])
    );
}

#[test]
fn set_client_random_validates_length() {
    let conn = client_conn(Arc::new(SendHelloFlight), SharedBuf::default());
    let mut econf = conn.make_extended_config().unwrap();
    assert!(matches!(
        econf.set_client_random(&[0u8; 16]),
        Err(Error::InvalidInput(_))
    ));
}

#[test]
fn failed_handshake_flushes_pending_alert_and_sticks() {
    let writer = SharedBuf::default();
    let conn = client_conn(Arc::new(FailingFlight), writer.clone());

    let mut econf = conn
        .make_extended_config_parrot(ProfileId::ANDROID_5_1_BROWSER)
        .unwrap();
    let mut state = econf.build_state().unwrap();

    let err = conn.client_handshake_with_state(&mut state).unwrap_err();
    assert!(matches!(err, Error::Handshake(_)));
    assert!(!conn.handshake_complete());

    // The alert the flight buffered went out despite the failure.
    assert_eq!(writer.contents(), vec![21, 0x03, 0x03, 0x00, 0x02, 2, 40]);

    // The error is sticky for later attempts.
    let again = conn.client_handshake_with_state(&mut state).unwrap_err();
    assert_eq!(again, err);
}

#[test]
fn missing_flight_is_a_configuration_error() {
    let config = Config::builder()
        .with_server_name("example.com")
        .build()
        .unwrap();
    let conn = Conn::client(io::empty(), SharedBuf::default(), config);

    let mut econf = conn
        .make_extended_config_parrot(ProfileId::ANDROID_5_1_BROWSER)
        .unwrap();
    let mut state = econf.build_state().unwrap();
    assert!(matches!(
        conn.client_handshake_with_state(&mut state),
        Err(Error::InvalidConfig(_))
    ));
}

#[test]
fn missing_server_name_without_skip_verify_is_rejected() {
    let writer = SharedBuf::default();
    let config = Config::builder()
        .with_client_flight(Arc::new(SendHelloFlight))
        .build()
        .unwrap();
    let conn = Conn::client(io::empty(), writer.clone(), config);

    let mut econf = conn
        .make_extended_config_parrot(ProfileId::ANDROID_5_1_BROWSER)
        .unwrap();
    let mut state = econf.build_state().unwrap();
    let err = conn.client_handshake_with_state(&mut state).unwrap_err();
    assert!(matches!(err, Error::InvalidConfig(_)));
    // Validation failed before any bytes hit the wire.
    assert!(writer.contents().is_empty());
    assert!(!conn.handshake_complete());
}

#[test]
fn server_role_misuse_panics_without_poisoning() {
    let config = Config::builder()
        .with_server_name("example.com")
        .with_client_flight(Arc::new(SendHelloFlight))
        .build()
        .unwrap();
    let conn = Conn::server(io::empty(), SharedBuf::default(), config);

    let mut state = ClientHandshakeState::default();
    let result = catch_unwind(AssertUnwindSafe(|| {
        conn.client_handshake_with_state(&mut state)
    }));
    assert!(result.is_err(), "server-role call must panic");

    // No lock was taken before the check: the connection is still usable.
    assert!(!conn.handshake_complete());
    assert!(conn.make_extended_config().is_ok());
}

#[test]
fn short_read_rng_surfaces_as_entropy_error() {
    struct ShortRandom;

    impl Random for ShortRandom {
        fn fill(&self, dest: &mut [u8]) -> mimtls_crypto::Result<()> {
            if dest.len() <= 10 {
                dest.fill(0x51);
                return Ok(());
            }
            Err(mimtls_crypto::Error::RandomSource(
                "unexpected EOF after 10 bytes".into(),
            ))
        }
    }

    struct ShortProvider {
        system: SystemProvider,
    }

    impl Provider for ShortProvider {
        fn random(&self) -> &dyn Random {
            &ShortRandom
        }

        fn hash(&self, algorithm: HashAlgorithm) -> mimtls_crypto::Result<Box<dyn Hash>> {
            self.system.hash(algorithm)
        }
    }

    let writer = SharedBuf::default();
    let config = Config::builder()
        .with_server_name("example.com")
        .with_provider(Arc::new(ShortProvider {
            system: SystemProvider::new(),
        }))
        .with_client_flight(Arc::new(SendHelloFlight))
        .build()
        .unwrap();
    let conn = Conn::client(io::empty(), writer.clone(), config);

    let err = conn
        .make_extended_config_parrot(ProfileId::FIREFOX_53)
        .unwrap_err();
    assert!(matches!(err, Error::Entropy(_)));
    assert!(writer.contents().is_empty(), "no bytes may reach the wire");
}

#[test]
fn concurrent_read_blocks_until_handshake_completes() {
    let (tx, rx) = mpsc::channel();
    let reader = BlockingReader {
        rx,
        pending: Vec::new(),
    };
    let config = Config::builder()
        .with_server_name("example.com")
        .with_client_flight(Arc::new(SendHelloFlight))
        .build()
        .unwrap();
    let conn = Arc::new(Conn::client(reader, SharedBuf::default(), config));

    let read_returned = Arc::new(AtomicBool::new(false));
    let reader_conn = conn.clone();
    let reader_flag = read_returned.clone();
    let reader_thread = thread::spawn(move || {
        let mut buf = [0u8; 16];
        let n = reader_conn.read(&mut buf).unwrap();
        reader_flag.store(true, Ordering::SeqCst);
        (n, buf)
    });

    // The reader must park on the completion signal, not spin through.
    thread::sleep(Duration::from_millis(50));
    assert!(!read_returned.load(Ordering::SeqCst));

    let mut econf = conn
        .make_extended_config_parrot(ProfileId::ANDROID_5_1_BROWSER)
        .unwrap();
    let mut state = econf.build_state().unwrap();
    drop(econf);
    conn.client_handshake_with_state(&mut state).unwrap();

    // Feed the transport so the unblocked read has data to return.
    tx.send(vec![0xAA, 0xBB]).unwrap();
    let (n, buf) = reader_thread.join().unwrap();
    assert_eq!(n, 2);
    assert_eq!(&buf[..2], &[0xAA, 0xBB]);
    assert!(conn.handshake_complete());
}

#[test]
fn cached_session_is_offered_with_fresh_session_id() {
    let cache = Arc::new(CountingCache::new());
    let cached = forged_session(b"cached ticket bytes");
    cache.inner.put("example.com", cached.clone());

    let flight = Arc::new(CapturingFlight::default());
    let config = Config::builder()
        .with_server_name("example.com")
        .with_session_cache(cache.clone())
        .with_client_flight(flight.clone())
        .build()
        .unwrap();
    let conn = Conn::client(io::empty(), SharedBuf::default(), config);

    let mut econf = conn
        .make_extended_config_parrot(ProfileId::ANDROID_5_1_BROWSER)
        .unwrap();
    // The resumption path only engages when a session is offered.
    econf.set_session_state(Some(forged_session(b"caller ticket")));
    let mut state = econf.build_state().unwrap();
    drop(econf);

    conn.client_handshake_with_state(&mut state).unwrap();

    // The cache candidate replaced the caller's offer, with a fresh 16-byte
    // session id to detect ticket acceptance.
    assert_eq!(
        flight.session_ticket.lock().unwrap().as_deref(),
        Some(cached.ticket())
    );
    assert_eq!(flight.session_id_len.load(Ordering::SeqCst), 16);
    // The flight kept the offered session: nothing new to cache.
    assert_eq!(cache.puts.load(Ordering::SeqCst), 0);
}

#[test]
fn incompatible_cached_session_is_not_offered_or_cached() {
    // A cached candidate that fails the suite or version compatibility
    // check is discarded outright: the hello offers nothing, and the stale
    // state must not be re-stored by the post-handshake cache update.
    for candidate in [
        // TLS 1.3 suite, absent from every TLS 1.2 hello.
        session_with(b"stale ticket", ProtocolVersion::Tls12, 0x1301),
        // Negotiated under a version outside the acceptable range.
        session_with(b"stale ticket", ProtocolVersion::Tls13, 0xc02b),
    ] {
        let cache = Arc::new(CountingCache::new());
        cache.inner.put("example.com", candidate);

        let flight = Arc::new(CapturingFlight::default());
        let config = Config::builder()
            .with_server_name("example.com")
            .with_session_cache(cache.clone())
            .with_client_flight(flight.clone())
            .build()
            .unwrap();
        let conn = Conn::client(io::empty(), SharedBuf::default(), config);

        let mut econf = conn
            .make_extended_config_parrot(ProfileId::ANDROID_5_1_BROWSER)
            .unwrap();
        let caller_ticket = b"caller ticket".to_vec();
        econf.set_session_state(Some(forged_session(&caller_ticket)));
        let mut state = econf.build_state().unwrap();
        drop(econf);

        conn.client_handshake_with_state(&mut state).unwrap();

        // No resumption offer was made for the incompatible candidate.
        assert_eq!(
            flight.session_ticket.lock().unwrap().as_deref(),
            Some(caller_ticket.as_slice())
        );
        assert_eq!(flight.session_id_len.load(Ordering::SeqCst), 0);
        // The discarded state did not leak back into the cache.
        assert!(state.session.is_none());
        assert_eq!(cache.puts.load(Ordering::SeqCst), 0);
    }
}

#[test]
fn new_session_from_flight_updates_the_cache() {
    let cache = Arc::new(CountingCache::new());
    let issued = forged_session(b"fresh ticket from the server");

    let config = Config::builder()
        .with_server_name("example.com")
        .with_session_cache(cache.clone())
        .with_client_flight(Arc::new(TicketIssuingFlight {
            issued: issued.clone(),
        }))
        .build()
        .unwrap();
    let conn = Conn::client(io::empty(), SharedBuf::default(), config);

    let mut econf = conn
        .make_extended_config_parrot(ProfileId::ANDROID_5_1_BROWSER)
        .unwrap();
    let mut state = econf.build_state().unwrap();
    drop(econf);

    conn.client_handshake_with_state(&mut state).unwrap();

    assert_eq!(cache.puts.load(Ordering::SeqCst), 1);
    let stored = cache.get("example.com").unwrap();
    assert!(Arc::ptr_eq(&stored, &issued));
}

#[test]
fn forged_ticket_survives_full_handshake_fallback() {
    // A server that rejects the forged ticket just runs a full handshake;
    // the override must still complete and cache the surviving state.
    let cache = Arc::new(CountingCache::new());
    let forged = forged_session(b"phony session ticket, ascii range, standard length");

    let flight = Arc::new(CapturingFlight::default());
    let config = Config::builder()
        .with_server_name("example.com")
        .with_session_cache(cache.clone())
        .with_client_flight(flight.clone())
        .build()
        .unwrap();
    let conn = Conn::client(io::empty(), SharedBuf::default(), config);

    let mut econf = conn.make_extended_config().unwrap();
    econf.set_session_state(Some(forged.clone()));
    let mut state = econf.build_state().unwrap();
    drop(econf);

    conn.client_handshake_with_state(&mut state).unwrap();
    assert!(conn.handshake_complete());

    // The forged ticket rode the hello.
    assert_eq!(
        flight.session_ticket.lock().unwrap().as_deref(),
        Some(forged.ticket())
    );
    // No cache candidate was offered, so the surviving state was stored.
    assert_eq!(cache.puts.load(Ordering::SeqCst), 1);
}
