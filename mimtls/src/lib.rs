//! # MIMTLS
//!
//! Public API for MIMTLS: emit ClientHello records byte-for-byte identical
//! to a chosen reference browser while otherwise transacting a normal
//! TLS 1.2 session.
//!
//! ## Example
//!
//! ```rust,no_run
//! use mimtls::{ClientConfig, ProfileId, TlsStream};
//!
//! # fn main() -> mimtls::Result<()> {
//! let config = ClientConfig::builder()
//!     .with_server_name("www.google.com")
//!     .with_profile(ProfileId::CHROME_58)
//!     .build()?;
//! let stream = TlsStream::connect(config, "www.google.com:443")?;
//! # let _ = stream;
//! # Ok(())
//! # }
//! ```
//!
//! Lower-level control (overriding the hello random, installing a forged
//! session ticket, marshaling without a connection) lives in
//! [`mimtls_core`], re-exported here.

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unused_qualifications
)]

mod client;
mod stream;

pub use client::{ClientConfig, ClientConfigBuilder};
pub use stream::TlsStream;

// Re-export the protocol core.
pub use mimtls_core;

pub use mimtls_core::{
    BrowserFamily, ClientFlight, ClientHandshakeState, ClientSessionCache, ClientSessionState,
    Config, Conn, ConnectionRole, Error, ExtendedConfig, InMemorySessionCache, ProfileId,
    ProtocolVersion, Result,
};
