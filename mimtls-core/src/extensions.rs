//! ClientHello extension model.
//!
//! Every extension a profile can emit is one arm of
//! [`ClientHelloExtension`]. Each arm implements the same triad:
//!
//! - `wire_len`: serialized size including the 4-byte extension header,
//! - `marshal_into`: append the exact wire bytes,
//! - `apply`: write any side effects into the configuration so the stack's
//!   later behavior agrees with what the bytes advertise (hostnames, curve
//!   preferences, ALPN lists, ticket state, signature-registry fix-ups).
//!
//! Wire format, common to all: 2-byte type, 2-byte body length, body.

use std::net::IpAddr;
use std::sync::Arc;

use bytes::{BufMut, BytesMut};

use crate::error::{Error, Result};
use crate::hello::ClientHelloMsg;
use crate::protocol::{CurveId, RenegotiationSupport};
use crate::session::ClientSessionState;
use crate::signature::SignatureAndHash;
use crate::Config;

/// Extension type codes on the wire.
pub mod ext_type {
    /// server_name (RFC 6066)
    pub const SERVER_NAME: u16 = 0;

    /// status_request (RFC 6066)
    pub const STATUS_REQUEST: u16 = 5;

    /// supported_groups, née elliptic_curves (RFC 4492)
    pub const SUPPORTED_CURVES: u16 = 10;

    /// ec_point_formats (RFC 4492)
    pub const SUPPORTED_POINTS: u16 = 11;

    /// signature_algorithms (RFC 5246)
    pub const SIGNATURE_ALGORITHMS: u16 = 13;

    /// application_layer_protocol_negotiation (RFC 7301)
    pub const ALPN: u16 = 16;

    /// signed_certificate_timestamp (RFC 6962)
    pub const SCT: u16 = 18;

    /// padding (RFC 7685)
    pub const PADDING: u16 = 21;

    /// extended_master_secret (RFC 7627); advertised but never negotiated
    /// by this stack
    pub const EXTENDED_MASTER_SECRET: u16 = 23;

    /// session_ticket (RFC 5077)
    pub const SESSION_TICKET: u16 = 35;

    /// next_protocol_negotiation (never IANA-assigned)
    pub const NEXT_PROTO_NEG: u16 = 13172;

    /// channel_id (never IANA-assigned)
    pub const CHANNEL_ID: u16 = 30032;

    /// renegotiation_info (RFC 5746)
    pub const RENEGOTIATION_INFO: u16 = 0xff01;
}

/// Normalize a hostname for use in the SNI extension: strip any IPv6
/// brackets and zone, reject IP literals outright (empty result), strip
/// trailing dots, lowercase.
pub fn hostname_in_sni(name: &str) -> String {
    let mut host = name;
    if host.len() >= 2 && host.starts_with('[') && host.ends_with(']') {
        host = &host[1..host.len() - 1];
    }
    if let Some(i) = host.rfind('%') {
        if i > 0 {
            host = &host[..i];
        }
    }
    if host.parse::<IpAddr>().is_ok() {
        return String::new();
    }
    name.trim_end_matches('.').to_ascii_lowercase()
}

/// Mutable view handed to extension `apply` hooks.
///
/// The hooks run in extension-list order, first during `apply_config` and
/// again immediately before each extension serializes, so late state
/// changes still land in both the configuration and the wire bytes.
#[derive(Debug)]
pub struct ApplyContext<'a> {
    /// The draft hello being built
    pub hello: &'a mut ClientHelloMsg,

    /// The connection configuration, including the capability registry
    pub config: &'a mut Config,

    /// The session the handshake will offer for resumption
    pub session: &'a mut Option<Arc<ClientSessionState>>,
}

/// server_name
#[derive(Debug, Clone, Default)]
pub struct ServerNameExtension {
    /// DNS hostname, pre-normalized
    pub server_name: String,
}

impl ServerNameExtension {
    /// Build from a raw hostname, normalizing it for SNI.
    pub fn new(name: &str) -> Self {
        Self {
            server_name: hostname_in_sni(name),
        }
    }
}

/// renegotiation_info
#[derive(Debug, Clone, Copy, Default)]
pub struct RenegotiationInfoExtension {
    /// Renegotiation policy to record in the configuration
    pub renegotiation: RenegotiationSupport,
}

/// supported_groups
#[derive(Debug, Clone, Default)]
pub struct SupportedCurvesExtension {
    /// Offered curves, order-significant; may lead with a GREASE value
    pub curves: Vec<CurveId>,
}

/// ec_point_formats
#[derive(Debug, Clone, Default)]
pub struct SupportedPointsExtension {
    /// Offered point formats
    pub formats: Vec<u8>,
}

impl SupportedPointsExtension {
    /// The only format any profile offers.
    pub fn uncompressed() -> Self {
        Self {
            formats: vec![crate::protocol::POINT_FORMAT_UNCOMPRESSED],
        }
    }
}

/// session_ticket
#[derive(Debug, Clone, Default)]
pub struct SessionTicketExtension {
    /// Session whose ticket the hello offers; `None` emits an empty body
    pub session: Option<Arc<ClientSessionState>>,
}

/// application_layer_protocol_negotiation
#[derive(Debug, Clone, Default)]
pub struct AlpnExtension {
    /// Protocol names, preference-ordered
    pub protocols: Vec<String>,
}

/// signature_algorithms
#[derive(Debug, Clone, Default)]
pub struct SignatureAlgorithmsExtension {
    /// Advertised pairs, preference-ordered
    pub pairs: Vec<SignatureAndHash>,
}

/// A GREASE placeholder extension.
#[derive(Debug, Clone, Default)]
pub struct GreaseExtension {
    /// Runtime-derived reserved type code
    pub value: u16,

    /// Body bytes; empty in the leading slot, a single zero byte in the
    /// trailing slot
    pub body: Vec<u8>,
}

/// padding (RFC 7685), body length computed at build time.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddingExtension {
    /// Zero-byte body length; set by [`PaddingExtension::update`]
    pub padding_len: usize,
}

/// Compute the padding body length that rounds a ClientHello record up to
/// the next multiple of 512 bytes (minimum 512).
///
/// `unpadded_record_len` counts everything except the padding extension:
/// the 4-byte handshake header, the fixed fields, the extensions-length
/// field, and every other extension. When fewer than 4 bytes of room remain
/// below the boundary the body collapses to zero; the degenerate extension
/// is still emitted so the extension count matches the reference browser.
pub fn boring_padding_len(unpadded_record_len: usize) -> usize {
    let target = unpadded_record_len.div_ceil(512).max(1) * 512;
    let room = target - unpadded_record_len;
    if room < 4 {
        0
    } else {
        room - 4
    }
}

impl PaddingExtension {
    /// Recompute the body length for the given unpadded record size.
    pub fn update(&mut self, unpadded_record_len: usize) {
        self.padding_len = boring_padding_len(unpadded_record_len);
    }
}

/// A ClientHello extension, tagged by kind.
///
/// Order within the extension list is wire-visible and part of a profile's
/// fingerprint.
#[derive(Debug, Clone)]
pub enum ClientHelloExtension {
    /// server_name
    ServerName(ServerNameExtension),

    /// extended_master_secret; empty body, advertisement only
    ExtendedMasterSecret,

    /// renegotiation_info with an empty renegotiated_connection
    RenegotiationInfo(RenegotiationInfoExtension),

    /// supported_groups
    SupportedCurves(SupportedCurvesExtension),

    /// ec_point_formats
    SupportedPoints(SupportedPointsExtension),

    /// session_ticket
    SessionTicket(SessionTicketExtension),

    /// application_layer_protocol_negotiation
    Alpn(AlpnExtension),

    /// status_request asking for OCSP with no responder ids
    StatusRequest,

    /// signature_algorithms
    SignatureAlgorithms(SignatureAlgorithmsExtension),

    /// next_protocol_negotiation; empty body in a ClientHello
    NextProtoNegotiation,

    /// signed_certificate_timestamp; empty body
    SignedCertificateTimestamps,

    /// channel_id; empty body
    ChannelId,

    /// GREASE placeholder
    Grease(GreaseExtension),

    /// padding
    Padding(PaddingExtension),
}

impl ClientHelloExtension {
    /// The extension type code this arm puts on the wire.
    pub fn extension_type(&self) -> u16 {
        match self {
            ClientHelloExtension::ServerName(_) => ext_type::SERVER_NAME,
            ClientHelloExtension::ExtendedMasterSecret => ext_type::EXTENDED_MASTER_SECRET,
            ClientHelloExtension::RenegotiationInfo(_) => ext_type::RENEGOTIATION_INFO,
            ClientHelloExtension::SupportedCurves(_) => ext_type::SUPPORTED_CURVES,
            ClientHelloExtension::SupportedPoints(_) => ext_type::SUPPORTED_POINTS,
            ClientHelloExtension::SessionTicket(_) => ext_type::SESSION_TICKET,
            ClientHelloExtension::Alpn(_) => ext_type::ALPN,
            ClientHelloExtension::StatusRequest => ext_type::STATUS_REQUEST,
            ClientHelloExtension::SignatureAlgorithms(_) => ext_type::SIGNATURE_ALGORITHMS,
            ClientHelloExtension::NextProtoNegotiation => ext_type::NEXT_PROTO_NEG,
            ClientHelloExtension::SignedCertificateTimestamps => ext_type::SCT,
            ClientHelloExtension::ChannelId => ext_type::CHANNEL_ID,
            ClientHelloExtension::Grease(e) => e.value,
            ClientHelloExtension::Padding(_) => ext_type::PADDING,
        }
    }

    /// Serialized length including the 4-byte extension header.
    pub fn wire_len(&self) -> usize {
        4 + self.body_len()
    }

    fn body_len(&self) -> usize {
        match self {
            ClientHelloExtension::ServerName(e) => 5 + e.server_name.len(),
            ClientHelloExtension::ExtendedMasterSecret => 0,
            ClientHelloExtension::RenegotiationInfo(_) => 1,
            ClientHelloExtension::SupportedCurves(e) => 2 + 2 * e.curves.len(),
            ClientHelloExtension::SupportedPoints(e) => 1 + e.formats.len(),
            ClientHelloExtension::SessionTicket(e) => {
                e.session.as_ref().map_or(0, |s| s.ticket().len())
            }
            ClientHelloExtension::Alpn(e) => {
                2 + e.protocols.iter().map(|p| 1 + p.len()).sum::<usize>()
            }
            ClientHelloExtension::StatusRequest => 5,
            ClientHelloExtension::SignatureAlgorithms(e) => 2 + 2 * e.pairs.len(),
            ClientHelloExtension::NextProtoNegotiation => 0,
            ClientHelloExtension::SignedCertificateTimestamps => 0,
            ClientHelloExtension::ChannelId => 0,
            ClientHelloExtension::Grease(e) => e.body.len(),
            ClientHelloExtension::Padding(e) => e.padding_len,
        }
    }

    /// Whether this is the padding extension; at most one may appear in a
    /// hello.
    pub fn is_padding(&self) -> bool {
        matches!(self, ClientHelloExtension::Padding(_))
    }

    /// Append the extension's exact wire bytes.
    pub fn marshal_into(&self, buf: &mut BytesMut) -> Result<()> {
        let body_len = self.body_len();
        if body_len > usize::from(u16::MAX) {
            return Err(Error::InvalidInput(format!(
                "extension {} body too large: {} bytes",
                self.extension_type(),
                body_len
            )));
        }
        buf.put_u16(self.extension_type());
        buf.put_u16(body_len as u16);

        match self {
            ClientHelloExtension::ServerName(e) => {
                if e.server_name.len() > usize::from(u16::MAX) - 5 {
                    return Err(Error::InvalidInput("server name too long".into()));
                }
                // ServerNameList with a single host_name entry.
                buf.put_u16((3 + e.server_name.len()) as u16);
                buf.put_u8(0); // name_type = host_name
                buf.put_u16(e.server_name.len() as u16);
                buf.put_slice(e.server_name.as_bytes());
            }
            ClientHelloExtension::ExtendedMasterSecret
            | ClientHelloExtension::NextProtoNegotiation
            | ClientHelloExtension::SignedCertificateTimestamps
            | ClientHelloExtension::ChannelId => {}
            ClientHelloExtension::RenegotiationInfo(_) => {
                // Empty renegotiated_connection.
                buf.put_u8(0);
            }
            ClientHelloExtension::SupportedCurves(e) => {
                buf.put_u16((2 * e.curves.len()) as u16);
                for curve in &e.curves {
                    buf.put_u16(curve.to_u16());
                }
            }
            ClientHelloExtension::SupportedPoints(e) => {
                buf.put_u8(e.formats.len() as u8);
                buf.put_slice(&e.formats);
            }
            ClientHelloExtension::SessionTicket(e) => {
                if let Some(session) = &e.session {
                    buf.put_slice(session.ticket());
                }
            }
            ClientHelloExtension::Alpn(e) => {
                let list_len: usize = e.protocols.iter().map(|p| 1 + p.len()).sum();
                buf.put_u16(list_len as u16);
                for proto in &e.protocols {
                    if proto.is_empty() || proto.len() > 255 {
                        return Err(Error::InvalidInput(format!(
                            "invalid ALPN protocol length: {}",
                            proto.len()
                        )));
                    }
                    buf.put_u8(proto.len() as u8);
                    buf.put_slice(proto.as_bytes());
                }
            }
            ClientHelloExtension::StatusRequest => {
                buf.put_u8(1); // status_type = ocsp
                buf.put_u16(0); // responder_id_list
                buf.put_u16(0); // request_extensions
            }
            ClientHelloExtension::SignatureAlgorithms(e) => {
                buf.put_u16((2 * e.pairs.len()) as u16);
                for pair in &e.pairs {
                    // Wire order is hash then signature.
                    buf.put_u8(pair.hash);
                    buf.put_u8(pair.signature);
                }
            }
            ClientHelloExtension::Grease(e) => {
                buf.put_slice(&e.body);
            }
            ClientHelloExtension::Padding(e) => {
                buf.put_bytes(0, e.padding_len);
            }
        }
        Ok(())
    }

    /// Reconcile the configuration with what this extension's bytes will
    /// advertise.
    pub fn apply(&self, ctx: &mut ApplyContext<'_>) -> Result<()> {
        match self {
            ClientHelloExtension::ServerName(e) => {
                ctx.config.server_name = e.server_name.clone();
            }
            ClientHelloExtension::RenegotiationInfo(e) => {
                ctx.config.renegotiation = e.renegotiation;
            }
            ClientHelloExtension::SupportedCurves(e) => {
                ctx.config.curve_preferences = e.curves.clone();
            }
            ClientHelloExtension::SessionTicket(e) => {
                if let Some(session) = &e.session {
                    ctx.hello.session_ticket = session.ticket().to_vec();
                    *ctx.session = Some(session.clone());
                }
                ctx.hello.ticket_supported = true;
            }
            ClientHelloExtension::Alpn(e) => {
                ctx.config.next_protos = e.protocols.clone();
            }
            ClientHelloExtension::SignatureAlgorithms(e) => {
                // Advertised pairs the stack implements but ships disabled
                // get switched on; everything else is advertisement only.
                for pair in &e.pairs {
                    ctx.config.registry.enable_signature_pair(*pair);
                }
            }
            ClientHelloExtension::ExtendedMasterSecret
            | ClientHelloExtension::SupportedPoints(_)
            | ClientHelloExtension::StatusRequest
            | ClientHelloExtension::NextProtoNegotiation
            | ClientHelloExtension::SignedCertificateTimestamps
            | ClientHelloExtension::ChannelId
            | ClientHelloExtension::Grease(_)
            | ClientHelloExtension::Padding(_) => {}
        }
        Ok(())
    }
}
