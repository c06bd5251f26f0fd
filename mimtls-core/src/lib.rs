//! # MIMTLS Core
//!
//! Protocol core for MIMTLS: a TLS 1.2 client stack extension whose
//! ClientHello is byte-for-byte identical to a chosen reference browser.
//!
//! Two pieces cooperate:
//!
//! - the **parrot engine**: a catalog of browser profiles (cipher order,
//!   extension order, curves, signature pairs, GREASE, padding) and a
//!   deterministic marshaler producing the exact bytes that browser would
//!   emit;
//! - the **handshake override**: an entry point that runs the standard
//!   client handshake but sends a prebuilt ClientHello verbatim, with
//!   optional pre-populated session state.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          Public API (mimtls)            │
//! └─────────────────┬───────────────────────┘
//!                   │
//! ┌─────────────────▼───────────────────────┐
//! │       mimtls-core (this crate)          │
//! │  ┌──────────────────────────────────┐   │
//! │  │   Parrot Catalog + Extensions    │   │
//! │  ├──────────────────────────────────┤   │
//! │  │   ClientHello Marshaler          │   │
//! │  ├──────────────────────────────────┤   │
//! │  │   Extended Config / State        │   │
//! │  ├──────────────────────────────────┤   │
//! │  │   Connection + Override          │   │
//! │  └──────────────────────────────────┘   │
//! └─────────────────┬───────────────────────┘
//!                   │
//! ┌─────────────────▼───────────────────────┐
//! │     mimtls-crypto (trait interface)     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use mimtls_core::{Config, Conn, ProfileId};
//!
//! fn connect(stream: std::net::TcpStream) -> mimtls_core::Result<()> {
//!     let config = Config::builder()
//!         .with_server_name("www.google.com")
//!         .build()?;
//!     let conn = Conn::client(stream.try_clone().unwrap(), stream, config);
//!     let mut econf = conn.make_extended_config_parrot(ProfileId::CHROME_58)?;
//!     let mut state = econf.build_state()?;
//!     conn.client_handshake_with_state(&mut state)
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub,
    unused_qualifications
)]

use std::sync::Arc;

use mimtls_crypto::{HashAlgorithm, Provider, SystemProvider};

pub mod cipher_suites;
pub mod conn;
pub mod error;
pub mod extended_config;
pub mod extensions;
pub mod flight;
pub mod grease;
pub mod hello;
pub mod parrots;
pub mod protocol;
pub mod record;
pub mod registry;
pub mod session;
pub mod signature;

// Re-export the crypto interface.
pub use mimtls_crypto;

pub use conn::{Conn, ConnectionRole};
pub use error::{Error, Result};
pub use extended_config::{ClientHandshakeState, ExtendedConfig};
pub use flight::ClientFlight;
pub use parrots::{BrowserFamily, ProfileId};
pub use protocol::{ContentType, CurveId, ProtocolVersion, RenegotiationSupport};
pub use registry::Registry;
pub use session::{ClientSessionCache, ClientSessionState, InMemorySessionCache};

/// Connection configuration.
///
/// Plays the role the host TLS engine's config normally does, extended with
/// the capability registry and the flight seam. Extensions' apply hooks
/// write into a configuration through their context, so fields set by hand
/// can be overwritten when a profile is applied.
#[derive(Clone)]
pub struct Config {
    /// Server name for SNI and certificate verification
    pub server_name: String,

    /// Skip server certificate verification
    pub insecure_skip_verify: bool,

    /// Application protocols to offer via ALPN
    pub next_protos: Vec<String>,

    /// Minimum acceptable protocol version
    pub min_version: ProtocolVersion,

    /// Maximum acceptable protocol version
    pub max_version: ProtocolVersion,

    /// Preferred curves, most preferred first
    pub curve_preferences: Vec<CurveId>,

    /// Renegotiation policy
    pub renegotiation: RenegotiationSupport,

    /// Session cache for resumption, shared across connections
    pub session_cache: Option<Arc<dyn ClientSessionCache>>,

    /// Capability registry: negotiable cipher suites and signature pairs
    pub registry: Arc<Registry>,

    /// Cryptographic provider
    pub provider: Arc<dyn Provider>,

    /// The host engine's post-ClientHello handshake flight
    pub client_flight: Option<Arc<dyn ClientFlight>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_name: String::new(),
            insecure_skip_verify: false,
            next_protos: Vec::new(),
            min_version: ProtocolVersion::Tls10,
            max_version: ProtocolVersion::Tls12,
            curve_preferences: vec![
                CurveId::X25519,
                CurveId::SECP256R1,
                CurveId::SECP384R1,
                CurveId::SECP521R1,
            ],
            renegotiation: RenegotiationSupport::Never,
            session_cache: None,
            registry: Arc::new(Registry::new()),
            provider: Arc::new(SystemProvider::new()),
            client_flight: None,
        }
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("server_name", &self.server_name)
            .field("insecure_skip_verify", &self.insecure_skip_verify)
            .field("next_protos", &self.next_protos)
            .field("min_version", &self.min_version)
            .field("max_version", &self.max_version)
            .field("curve_preferences", &self.curve_preferences)
            .field("renegotiation", &self.renegotiation)
            .field("session_cache", &self.session_cache.is_some())
            .field("client_flight", &self.client_flight.is_some())
            .finish_non_exhaustive()
    }
}

impl Config {
    /// Create a new configuration builder.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Fill `dest` from the configured entropy source.
    pub(crate) fn fill_random(&self, dest: &mut [u8]) -> Result<()> {
        self.provider
            .random()
            .fill(dest)
            .map_err(|e| Error::Entropy(format!("short read from entropy source: {}", e)))
    }

    /// SHA-256 digest via the configured provider.
    pub(crate) fn sha256(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut hash = self.provider.hash(HashAlgorithm::Sha256)?;
        hash.update(data);
        Ok(hash.finish())
    }
}

/// Configuration builder.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the server name (SNI).
    pub fn with_server_name(mut self, name: &str) -> Self {
        self.config.server_name = name.to_string();
        self
    }

    /// Skip server certificate verification.
    pub fn with_insecure_skip_verify(mut self, skip: bool) -> Self {
        self.config.insecure_skip_verify = skip;
        self
    }

    /// Set ALPN protocols.
    pub fn with_next_protos(mut self, protos: Vec<String>) -> Self {
        self.config.next_protos = protos;
        self
    }

    /// Set the acceptable protocol version range.
    pub fn with_version_range(mut self, min: ProtocolVersion, max: ProtocolVersion) -> Self {
        self.config.min_version = min;
        self.config.max_version = max;
        self
    }

    /// Wire a session cache.
    pub fn with_session_cache(mut self, cache: Arc<dyn ClientSessionCache>) -> Self {
        self.config.session_cache = Some(cache);
        self
    }

    /// Replace the cryptographic provider.
    pub fn with_provider(mut self, provider: Arc<dyn Provider>) -> Self {
        self.config.provider = provider;
        self
    }

    /// Wire the host engine's client handshake flight.
    pub fn with_client_flight(mut self, flight: Arc<dyn ClientFlight>) -> Self {
        self.config.client_flight = Some(flight);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> Result<Config> {
        if self.config.min_version > self.config.max_version {
            return Err(Error::InvalidConfig(
                "minimum protocol version exceeds maximum".into(),
            ));
        }
        for proto in &self.config.next_protos {
            if proto.is_empty() || proto.len() > 255 {
                return Err(Error::InvalidConfig(format!(
                    "invalid next_protos entry of length {}",
                    proto.len()
                )));
            }
        }
        Ok(self.config)
    }
}
