//! TLS protocol constants and wire-level identifiers.

/// TLS protocol version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u16)]
pub enum ProtocolVersion {
    /// TLS 1.0 (RFC 2246) - Legacy
    Tls10 = 0x0301,

    /// TLS 1.1 (RFC 4346) - Legacy
    Tls11 = 0x0302,

    /// TLS 1.2 (RFC 5246)
    Tls12 = 0x0303,

    /// TLS 1.3 (RFC 8446) - Not produced by any current profile
    Tls13 = 0x0304,
}

impl ProtocolVersion {
    /// Create from wire format (u16 big-endian).
    pub const fn from_u16(value: u16) -> Option<Self> {
        match value {
            0x0301 => Some(ProtocolVersion::Tls10),
            0x0302 => Some(ProtocolVersion::Tls11),
            0x0303 => Some(ProtocolVersion::Tls12),
            0x0304 => Some(ProtocolVersion::Tls13),
            _ => None,
        }
    }

    /// Convert to wire format (u16 big-endian).
    pub const fn to_u16(self) -> u16 {
        self as u16
    }

    /// Get the protocol name.
    pub const fn name(self) -> &'static str {
        match self {
            ProtocolVersion::Tls10 => "TLS 1.0",
            ProtocolVersion::Tls11 => "TLS 1.1",
            ProtocolVersion::Tls12 => "TLS 1.2",
            ProtocolVersion::Tls13 => "TLS 1.3",
        }
    }
}

/// TLS record content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ContentType {
    /// Change cipher spec (20)
    ChangeCipherSpec = 20,

    /// Alert (21)
    Alert = 21,

    /// Handshake (22)
    Handshake = 22,

    /// Application data (23)
    ApplicationData = 23,
}

impl ContentType {
    /// Create from wire format (u8).
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            20 => Some(ContentType::ChangeCipherSpec),
            21 => Some(ContentType::Alert),
            22 => Some(ContentType::Handshake),
            23 => Some(ContentType::ApplicationData),
            _ => None,
        }
    }

    /// Convert to wire format (u8).
    pub const fn to_u8(self) -> u8 {
        self as u8
    }
}

/// Handshake message type (TLS 1.2 set).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum HandshakeType {
    /// ClientHello (1)
    ClientHello = 1,

    /// ServerHello (2)
    ServerHello = 2,

    /// NewSessionTicket (4)
    NewSessionTicket = 4,

    /// Certificate (11)
    Certificate = 11,

    /// ServerKeyExchange (12)
    ServerKeyExchange = 12,

    /// CertificateRequest (13)
    CertificateRequest = 13,

    /// ServerHelloDone (14)
    ServerHelloDone = 14,

    /// CertificateVerify (15)
    CertificateVerify = 15,

    /// ClientKeyExchange (16)
    ClientKeyExchange = 16,

    /// Finished (20)
    Finished = 20,
}

impl HandshakeType {
    /// Convert to wire format (u8).
    pub const fn to_u8(self) -> u8 {
        self as u8
    }
}

/// Elliptic curve identifier.
///
/// A plain u16 newtype rather than an enum: GREASE placeholders put
/// runtime-derived values into the curve list, so the set of valid ids is
/// open-ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CurveId(pub u16);

impl CurveId {
    /// X25519 (RFC 7748)
    pub const X25519: CurveId = CurveId(0x001d);

    /// secp256r1 / NIST P-256
    pub const SECP256R1: CurveId = CurveId(0x0017);

    /// secp384r1 / NIST P-384
    pub const SECP384R1: CurveId = CurveId(0x0018);

    /// secp521r1 / NIST P-521
    pub const SECP521R1: CurveId = CurveId(0x0019);

    /// Convert to wire format (u16 big-endian).
    pub const fn to_u16(self) -> u16 {
        self.0
    }
}

/// The only compression method any profile offers.
pub const COMPRESSION_NONE: u8 = 0;

/// The only EC point format any profile offers.
pub const POINT_FORMAT_UNCOMPRESSED: u8 = 0;

/// Client renegotiation policy advertised in the renegotiation_info
/// extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenegotiationSupport {
    /// Never renegotiate
    #[default]
    Never,

    /// Allow one renegotiation per connection, client role
    OnceAsClient,

    /// Allow unlimited renegotiation, client role
    FreelyAsClient,
}
