//! The caller-facing override surface: bind a hello profile to a
//! connection, mutate it, and build the state the overridden handshake
//! consumes.
//!
//! The pieces here are strongly coupled on purpose: extensions finalize
//! configuration state as late as possible, so `apply_config` runs every
//! extension's hook in list order, and the marshaler runs each hook once
//! more immediately before serializing that extension. Callers who poke
//! fields directly should re-run `apply_config` and check the result.

use core::fmt;
use std::sync::Arc;

use bytes::{BufMut, BytesMut};
use zeroize::Zeroizing;

use crate::conn::Conn;
use crate::error::{Error, Result};
use crate::extensions::{hostname_in_sni, ApplyContext, ClientHelloExtension};
use crate::flight::ServerHelloSummary;
use crate::hello::ClientHelloMsg;
use crate::parrots::ProfileId;
use crate::protocol::HandshakeType;
use crate::session::{ClientSessionCache, ClientSessionState};

/// The state handed across the boundary into the overridden handshake.
///
/// `hello` is finalized (including its raw bytes when a profile marshaled
/// it); the host TLS engine populates the remaining fields while the
/// handshake runs.
#[derive(Clone, Default)]
pub struct ClientHandshakeState {
    /// The finalized ClientHello
    pub hello: ClientHelloMsg,

    /// Session offered for resumption, if any
    pub session: Option<Arc<ClientSessionState>>,

    /// ServerHello summary, filled by the flight
    pub server_hello: Option<ServerHelloSummary>,

    /// Negotiated master secret, filled by the flight
    pub master_secret: Option<Zeroizing<Vec<u8>>>,
}

impl fmt::Debug for ClientHandshakeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientHandshakeState")
            .field("hello", &self.hello)
            .field("session", &self.session)
            .field("server_hello", &self.server_hello)
            .field(
                "master_secret",
                &self.master_secret.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

/// Mutable handle binding a hello profile to a connection.
///
/// Public fields may be set directly, but other operations can overwrite
/// them; `apply_config` and `marshal_client_hello` are the reconciliation
/// points.
pub struct ExtendedConfig<'c> {
    /// Ordered extension list; order is wire-visible
    pub extensions: Vec<ClientHelloExtension>,

    /// Let the host engine marshal the hello from configuration defaults.
    /// When set, `extensions` is ignored and `build_state` leaves
    /// `hello.raw` empty for the engine to fill.
    pub marshal_default: bool,

    pub(crate) conn: &'c Conn,

    /// The draft hello
    pub hello: ClientHelloMsg,

    /// Session offered for resumption
    pub session: Option<Arc<ClientSessionState>>,

    /// Profile this configuration was populated from
    pub profile: ProfileId,

    /// Session cache wired to the connection, if any
    pub session_cache: Option<Arc<dyn ClientSessionCache>>,
}

impl fmt::Debug for ExtendedConfig<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtendedConfig")
            .field("profile", &self.profile)
            .field("marshal_default", &self.marshal_default)
            .field("extensions", &self.extensions.len())
            .field("hello", &self.hello)
            .finish_non_exhaustive()
    }
}

impl Conn {
    /// Create an extended configuration that parrots nothing: the host
    /// engine marshals the hello from configuration defaults. The server
    /// name must already be configured.
    pub fn make_extended_config(&self) -> Result<ExtendedConfig<'_>> {
        let hello = {
            let config = self.lock_config();
            ClientHelloMsg::from_config(&config)?
        };
        Ok(ExtendedConfig {
            extensions: Vec::new(),
            marshal_default: true,
            conn: self,
            hello,
            session: None,
            profile: ProfileId::DEFAULT,
            session_cache: None,
        })
    }

    /// Create an extended configuration populated from the given profile.
    ///
    /// The only error currently produced is a short read from the entropy
    /// source. An unknown profile id leaves the hello unpopulated and logs
    /// a diagnostic.
    pub fn make_extended_config_parrot(&self, profile: ProfileId) -> Result<ExtendedConfig<'_>> {
        let mut econf = ExtendedConfig {
            extensions: Vec::new(),
            marshal_default: false,
            conn: self,
            hello: ClientHelloMsg::new(),
            session: None,
            profile: ProfileId::DEFAULT,
            session_cache: None,
        };
        econf.apply_profile(profile)?;
        Ok(econf)
    }
}

impl ExtendedConfig<'_> {
    /// Install (or clear) the session state offered for resumption.
    ///
    /// Updates the hello's ticket fields and any SessionTicket extension in
    /// place. For tickets to be reused across connections, wire the same
    /// cache with [`ExtendedConfig::use_session_cache`].
    pub fn set_session_state(&mut self, session: Option<Arc<ClientSessionState>>) {
        self.session = session.clone();
        if let Some(state) = &session {
            self.hello.session_ticket = state.ticket().to_vec();
        }
        self.hello.ticket_supported = true;
        for ext in &mut self.extensions {
            if let ClientHelloExtension::SessionTicket(st) = ext {
                st.session = session.clone();
            }
        }
    }

    /// Wire a session cache to the connection configuration and advertise
    /// ticket support.
    pub fn use_session_cache(&mut self, cache: Arc<dyn ClientSessionCache>) {
        self.session_cache = Some(cache.clone());
        self.conn.lock_config().session_cache = Some(cache);
        self.hello.ticket_supported = true;
    }

    /// Overwrite the hello random. `random` must be exactly 32 bytes.
    pub fn set_client_random(&mut self, random: &[u8]) -> Result<()> {
        if random.len() != 32 {
            return Err(Error::InvalidInput(format!(
                "client random must be 32 bytes, got {}",
                random.len()
            )));
        }
        self.hello.random = random.to_vec();
        Ok(())
    }

    /// Set the server name, normalizing it for SNI, and update both the
    /// connection configuration and any ServerName extension in place.
    pub fn set_sni(&mut self, name: &str) {
        let hostname = hostname_in_sni(name);
        self.conn.lock_config().server_name = hostname.clone();
        for ext in &mut self.extensions {
            if let ClientHelloExtension::ServerName(sni) = ext {
                sni.server_name = hostname.clone();
            }
        }
    }

    /// Run every extension's apply hook in list order, reconciling the
    /// configuration and registries with the wire content.
    ///
    /// Most callers just need [`ExtendedConfig::build_state`].
    pub fn apply_config(&mut self) -> Result<()> {
        let conn = self.conn;
        let mut config = conn.lock_config();
        let Self {
            extensions,
            hello,
            session,
            ..
        } = self;
        let mut ctx = ApplyContext {
            hello,
            config: &mut *config,
            session,
        };
        for ext in extensions.iter() {
            ext.apply(&mut ctx)?;
        }
        Ok(())
    }

    /// Marshal the hello to its exact wire bytes, landing them in
    /// `hello.raw`.
    ///
    /// Most callers just need [`ExtendedConfig::build_state`].
    pub fn marshal_client_hello(&mut self) -> Result<()> {
        let conn = self.conn;
        let mut config = conn.lock_config();
        let Self {
            extensions,
            hello,
            session,
            ..
        } = self;

        let vers = hello.vers.ok_or_else(|| {
            Error::InvalidConfig("client hello has no protocol version; no profile applied".into())
        })?;
        if hello.random.len() != 32 {
            return Err(Error::InvalidInput(format!(
                "client random must be 32 bytes, got {}",
                hello.random.len()
            )));
        }
        if hello.session_id.len() > 32 {
            return Err(Error::InvalidInput(format!(
                "session id must be at most 32 bytes, got {}",
                hello.session_id.len()
            )));
        }

        let fixed_len = 2
            + 32
            + 1
            + hello.session_id.len()
            + 2
            + 2 * hello.cipher_suites.len()
            + 1
            + hello.compression_methods.len();

        let mut padding_idx = None;
        let mut extensions_len = 0usize;
        for (idx, ext) in extensions.iter().enumerate() {
            if ext.is_padding() {
                if padding_idx.is_some() {
                    return Err(Error::InvalidInput(
                        "multiple padding extensions in client hello".into(),
                    ));
                }
                padding_idx = Some(idx);
            } else {
                extensions_len += ext.wire_len();
            }
        }

        if let Some(idx) = padding_idx {
            // Everything except the padding extension itself, including the
            // 4-byte handshake header and the extensions-length field.
            let unpadded = 4 + fixed_len + 2 + extensions_len;
            if let ClientHelloExtension::Padding(padding) = &mut extensions[idx] {
                padding.update(unpadded);
            }
            extensions_len += extensions[idx].wire_len();
        }

        if extensions_len > usize::from(u16::MAX) {
            return Err(Error::InvalidInput("extensions too large".into()));
        }
        let total = fixed_len + 2 + extensions_len;

        let mut buf = BytesMut::with_capacity(4 + total);
        buf.put_u8(HandshakeType::ClientHello.to_u8());
        buf.put_u8((total >> 16) as u8);
        buf.put_u8((total >> 8) as u8);
        buf.put_u8(total as u8);

        buf.put_u16(vers.to_u16());
        buf.put_slice(&hello.random);
        buf.put_u8(hello.session_id.len() as u8);
        buf.put_slice(&hello.session_id);
        buf.put_u16((2 * hello.cipher_suites.len()) as u16);
        for suite in &hello.cipher_suites {
            buf.put_u16(*suite);
        }
        buf.put_u8(hello.compression_methods.len() as u8);
        buf.put_slice(&hello.compression_methods);

        buf.put_u16(extensions_len as u16);
        {
            let mut ctx = ApplyContext {
                hello: &mut *hello,
                config: &mut *config,
                session: &mut *session,
            };
            // Extensions may finalize state as late as possible: re-run each
            // hook immediately before serializing it.
            for ext in extensions.iter() {
                ext.apply(&mut ctx)?;
                ext.marshal_into(&mut buf)?;
            }
        }

        debug_assert_eq!(buf.len(), 4 + total);
        hello.set_raw(buf.to_vec());
        Ok(())
    }

    /// Apply the current settings, marshal the hello, and package the
    /// result for [`Conn::client_handshake_with_state`].
    ///
    /// With `marshal_default` set, apply and marshal are skipped: the host
    /// engine owns the hello bytes.
    pub fn build_state(&mut self) -> Result<ClientHandshakeState> {
        if !self.marshal_default {
            self.apply_config()?;
            self.marshal_client_hello()?;
        }
        Ok(ClientHandshakeState {
            hello: self.hello.clone(),
            session: self.session.clone(),
            server_hello: None,
            master_secret: None,
        })
    }
}
