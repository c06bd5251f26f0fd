//! The parrot catalog: reference-browser ClientHello profiles.
//!
//! Each profile pins, exactly: the cipher-suite order, the extension order
//! and contents, the curve and point-format lists, signature pairs, GREASE
//! placement, and the padding style of one browser version. Together with a
//! fixed random and SNI, a profile yields byte-identical hellos on every
//! build.
//!
//! Session-id derivation differs by lineage: Android/Chrome stacks derive
//! it as SHA-256 of the offered ticket, Firefox draws 32 fresh random
//! bytes. Either way a non-empty session id lets the client detect whether
//! the server accepted the ticket (RFC 5077).

use core::fmt;

use crate::cipher_suites::{
    CipherSuite, KeyExchange, OLD_TLS_DHE_RSA_WITH_CHACHA20_POLY1305_SHA256,
    OLD_TLS_ECDHE_ECDSA_WITH_CHACHA20_POLY1305_SHA256,
    OLD_TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305_SHA256, TLS_DHE_RSA_WITH_AES_128_CBC_SHA,
    TLS_DHE_RSA_WITH_AES_128_GCM_SHA256, TLS_DHE_RSA_WITH_AES_256_CBC_SHA,
    TLS_ECDHE_ECDSA_WITH_AES_128_CBC_SHA, TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256,
    TLS_ECDHE_ECDSA_WITH_AES_256_CBC_SHA, TLS_ECDHE_ECDSA_WITH_AES_256_GCM_SHA384,
    TLS_ECDHE_ECDSA_WITH_CHACHA20_POLY1305, TLS_ECDHE_ECDSA_WITH_RC4_128_SHA,
    TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA, TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256,
    TLS_ECDHE_RSA_WITH_AES_256_CBC_SHA, TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384,
    TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305, TLS_ECDHE_RSA_WITH_RC4_128_SHA,
    TLS_EMPTY_RENEGOTIATION_INFO_SCSV, TLS_RSA_WITH_3DES_EDE_CBC_SHA,
    TLS_RSA_WITH_AES_128_CBC_SHA, TLS_RSA_WITH_AES_128_GCM_SHA256,
    TLS_RSA_WITH_AES_256_CBC_SHA, TLS_RSA_WITH_AES_256_GCM_SHA384, TLS_RSA_WITH_RC4_128_MD5,
    TLS_RSA_WITH_RC4_128_SHA,
};
use crate::error::Result;
use crate::extended_config::ExtendedConfig;
use crate::extensions::{
    AlpnExtension, ClientHelloExtension, GreaseExtension, PaddingExtension,
    RenegotiationInfoExtension, ServerNameExtension, SessionTicketExtension,
    SignatureAlgorithmsExtension, SupportedCurvesExtension, SupportedPointsExtension,
};
use crate::grease::{grease_extension_pair, grease_from_seed, GREASE_CIPHER, GREASE_GROUP};
use crate::protocol::{CurveId, ProtocolVersion, RenegotiationSupport, COMPRESSION_NONE};
use crate::signature::{hash_id, sig_id, SignatureAndHash};

/// Browser family of a parrot profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BrowserFamily {
    /// Sentinel family of the default profile
    Unspecified,

    /// Mozilla Firefox
    Firefox,

    /// Google Chrome
    Chrome,

    /// The Android stock browser / WebView stack
    Android,
}

impl BrowserFamily {
    /// Numeric family tag, stable across releases.
    pub const fn tag(self) -> u8 {
        match self {
            BrowserFamily::Unspecified => 0,
            BrowserFamily::Firefox => 6,
            BrowserFamily::Chrome => 8,
            BrowserFamily::Android => 1,
        }
    }
}

/// Identifier of a reference implementation to mimic.
///
/// Version 0 within a family means "latest supported". Android versions are
/// named by API level (23 = 6.0 Marshmallow, 22 = 5.1 Lollipop).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProfileId {
    /// Browser family
    pub family: BrowserFamily,

    /// Browser version (0 = latest)
    pub version: u16,
}

impl ProfileId {
    /// Sentinel resolved at apply time; see
    /// [`ExtendedConfig::apply_profile`].
    pub const DEFAULT: ProfileId = ProfileId {
        family: BrowserFamily::Unspecified,
        version: 0,
    };

    /// Latest supported Firefox profile
    pub const FIREFOX_LATEST: ProfileId = ProfileId {
        family: BrowserFamily::Firefox,
        version: 0,
    };

    /// Firefox 53. Preview quality; see the profile notes.
    pub const FIREFOX_53: ProfileId = ProfileId {
        family: BrowserFamily::Firefox,
        version: 53,
    };

    /// Latest supported Chrome profile
    pub const CHROME_LATEST: ProfileId = ProfileId {
        family: BrowserFamily::Chrome,
        version: 0,
    };

    /// Chrome 58
    pub const CHROME_58: ProfileId = ProfileId {
        family: BrowserFamily::Chrome,
        version: 58,
    };

    /// Latest supported Android stock browser profile
    pub const ANDROID_LATEST: ProfileId = ProfileId {
        family: BrowserFamily::Android,
        version: 0,
    };

    /// Android 6.0 stock browser
    pub const ANDROID_6_0_BROWSER: ProfileId = ProfileId {
        family: BrowserFamily::Android,
        version: 23,
    };

    /// Android 5.1 stock browser
    pub const ANDROID_5_1_BROWSER: ProfileId = ProfileId {
        family: BrowserFamily::Android,
        version: 22,
    };
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.family.tag(), self.version)
    }
}

fn android_signature_pairs() -> Vec<SignatureAndHash> {
    vec![
        SignatureAndHash::new(hash_id::SHA512, sig_id::RSA),
        SignatureAndHash::new(hash_id::SHA512, sig_id::ECDSA),
        SignatureAndHash::new(hash_id::SHA384, sig_id::RSA),
        SignatureAndHash::new(hash_id::SHA384, sig_id::ECDSA),
        SignatureAndHash::new(hash_id::SHA256, sig_id::RSA),
        SignatureAndHash::new(hash_id::SHA256, sig_id::ECDSA),
        SignatureAndHash::new(hash_id::SHA224, sig_id::RSA),
        SignatureAndHash::new(hash_id::SHA224, sig_id::ECDSA),
        SignatureAndHash::new(hash_id::SHA1, sig_id::RSA),
        SignatureAndHash::new(hash_id::SHA1, sig_id::ECDSA),
    ]
}

impl ExtendedConfig<'_> {
    /// Populate this configuration from the catalog entry for `profile`.
    ///
    /// Callers that install a session ticket after construction can re-run
    /// this to pick up the profile's session-id derivation.
    pub fn apply_profile(&mut self, profile: ProfileId) -> Result<()> {
        if profile == ProfileId::DEFAULT {
            return self.parrot_default();
        }
        self.parrot_by_id(profile)
    }

    /// Resolve the default profile.
    ///
    /// Deliberately a single fallback with no platform dispatch: every host
    /// OS gets the Android 5.1 browser hello.
    fn parrot_default(&mut self) -> Result<()> {
        self.parrot_by_id(ProfileId::ANDROID_5_1_BROWSER)
    }

    fn parrot_by_id(&mut self, profile: ProfileId) -> Result<()> {
        self.profile = profile;
        match (profile.family, profile.version) {
            (BrowserFamily::Firefox, 0) | (BrowserFamily::Firefox, 53) => self.parrot_firefox_53(),
            (BrowserFamily::Chrome, 0) | (BrowserFamily::Chrome, 58) => self.parrot_chrome_58(),
            (BrowserFamily::Android, 0) | (BrowserFamily::Android, 23) => {
                self.parrot_android_6_0()
            }
            (BrowserFamily::Android, 22) => self.parrot_android_5_1(),
            _ => {
                tracing::warn!(
                    profile = %profile,
                    "unknown parrot profile id, leaving hello unpopulated"
                );
                Ok(())
            }
        }
    }

    fn fill_hello_random(&mut self) -> Result<()> {
        if self.hello.random.len() != 32 {
            let mut random = vec![0u8; 32];
            self.conn.lock_config().fill_random(&mut random)?;
            self.hello.random = random;
        }
        Ok(())
    }

    /// Android/Chrome-style session id: SHA-256 of the offered ticket.
    fn ticket_session_id(&self) -> Result<Option<Vec<u8>>> {
        if let Some(session) = &self.session {
            if !session.ticket().is_empty() {
                return Ok(Some(self.conn.lock_config().sha256(session.ticket())?));
            }
        }
        Ok(None)
    }

    /// Firefox-style session id: 32 fresh random bytes.
    fn random_session_id(&self) -> Result<Option<Vec<u8>>> {
        if let Some(session) = &self.session {
            if !session.ticket().is_empty() {
                let mut id = vec![0u8; 32];
                self.conn.lock_config().fill_random(&mut id)?;
                return Ok(Some(id));
            }
        }
        Ok(None)
    }

    fn server_name_extension(&self) -> ServerNameExtension {
        ServerNameExtension::new(&self.conn.lock_config().server_name)
    }

    /// Firefox 53.
    ///
    /// Preview quality: the session-id rule is unverified against captures.
    // TODO: reproduce Firefox's padding flavor once a capture pins it down.
    fn parrot_firefox_53(&mut self) -> Result<()> {
        self.hello.vers = Some(ProtocolVersion::Tls12);
        self.fill_hello_random()?;
        self.hello.cipher_suites = vec![
            TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256,
            TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256,
            TLS_ECDHE_ECDSA_WITH_CHACHA20_POLY1305,
            TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305,
            TLS_ECDHE_ECDSA_WITH_AES_256_GCM_SHA384,
            TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384,
            TLS_ECDHE_ECDSA_WITH_AES_256_CBC_SHA,
            TLS_ECDHE_ECDSA_WITH_AES_128_CBC_SHA,
            TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA,
            TLS_ECDHE_RSA_WITH_AES_256_CBC_SHA,
            TLS_DHE_RSA_WITH_AES_128_CBC_SHA,
            TLS_DHE_RSA_WITH_AES_256_CBC_SHA,
            TLS_RSA_WITH_AES_128_CBC_SHA,
            TLS_RSA_WITH_AES_256_CBC_SHA,
            TLS_RSA_WITH_3DES_EDE_CBC_SHA,
        ];
        self.hello.compression_methods = vec![COMPRESSION_NONE];
        if let Some(id) = self.random_session_id()? {
            self.hello.session_id = id;
        }

        self.extensions = vec![
            ClientHelloExtension::ServerName(self.server_name_extension()),
            ClientHelloExtension::ExtendedMasterSecret,
            ClientHelloExtension::RenegotiationInfo(RenegotiationInfoExtension {
                renegotiation: RenegotiationSupport::OnceAsClient,
            }),
            ClientHelloExtension::SupportedCurves(SupportedCurvesExtension {
                curves: vec![
                    CurveId::X25519,
                    CurveId::SECP256R1,
                    CurveId::SECP384R1,
                    CurveId::SECP521R1,
                ],
            }),
            ClientHelloExtension::SupportedPoints(SupportedPointsExtension::uncompressed()),
            ClientHelloExtension::SessionTicket(SessionTicketExtension {
                session: self.session.clone(),
            }),
            ClientHelloExtension::Alpn(AlpnExtension {
                protocols: vec!["h2".into(), "http/1.1".into()],
            }),
            ClientHelloExtension::StatusRequest,
            ClientHelloExtension::SignatureAlgorithms(SignatureAlgorithmsExtension {
                pairs: vec![
                    SignatureAndHash::new(hash_id::SHA256, sig_id::ECDSA),
                    SignatureAndHash::new(hash_id::SHA384, sig_id::ECDSA),
                    SignatureAndHash::new(hash_id::SHA512, sig_id::ECDSA),
                    SignatureAndHash::RSA_PSS_SHA256,
                    SignatureAndHash::RSA_PSS_SHA384,
                    SignatureAndHash::RSA_PSS_SHA512,
                    SignatureAndHash::new(hash_id::SHA256, sig_id::RSA),
                    SignatureAndHash::new(hash_id::SHA384, sig_id::RSA),
                    SignatureAndHash::new(hash_id::SHA512, sig_id::RSA),
                    SignatureAndHash::new(hash_id::SHA1, sig_id::ECDSA),
                    SignatureAndHash::new(hash_id::SHA1, sig_id::RSA),
                ],
            }),
        ];
        Ok(())
    }

    /// Android 6.0 stock browser.
    fn parrot_android_6_0(&mut self) -> Result<()> {
        self.hello.vers = Some(ProtocolVersion::Tls12);
        self.fill_hello_random()?;
        {
            let config = self.conn.lock_config();
            config.registry.register_cipher_suite(CipherSuite::old_chacha20(
                OLD_TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305_SHA256,
                KeyExchange::EcdheRsa,
            ));
            config.registry.register_cipher_suite(CipherSuite::old_chacha20(
                OLD_TLS_ECDHE_ECDSA_WITH_CHACHA20_POLY1305_SHA256,
                KeyExchange::EcdheEcdsa,
            ));
            config
                .registry
                .enable_signature_pair(SignatureAndHash::new(hash_id::SHA512, sig_id::RSA));
            config
                .registry
                .enable_signature_pair(SignatureAndHash::new(hash_id::SHA512, sig_id::ECDSA));
        }
        self.hello.cipher_suites = vec![
            OLD_TLS_ECDHE_ECDSA_WITH_CHACHA20_POLY1305_SHA256,
            OLD_TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305_SHA256,
            OLD_TLS_DHE_RSA_WITH_CHACHA20_POLY1305_SHA256,
            TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256,
            TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256,
            TLS_DHE_RSA_WITH_AES_128_GCM_SHA256,
            TLS_ECDHE_ECDSA_WITH_AES_256_CBC_SHA,
            TLS_ECDHE_RSA_WITH_AES_256_CBC_SHA,
            TLS_DHE_RSA_WITH_AES_256_CBC_SHA,
            TLS_ECDHE_ECDSA_WITH_AES_128_CBC_SHA,
            TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA,
            TLS_DHE_RSA_WITH_AES_128_CBC_SHA,
            TLS_RSA_WITH_AES_128_GCM_SHA256,
            TLS_RSA_WITH_AES_256_CBC_SHA,
            TLS_RSA_WITH_AES_128_CBC_SHA,
            TLS_RSA_WITH_3DES_EDE_CBC_SHA,
            TLS_EMPTY_RENEGOTIATION_INFO_SCSV,
        ];
        self.hello.compression_methods = vec![COMPRESSION_NONE];
        if let Some(id) = self.ticket_session_id()? {
            self.hello.session_id = id;
        }

        self.extensions = vec![
            ClientHelloExtension::ServerName(self.server_name_extension()),
            ClientHelloExtension::ExtendedMasterSecret,
            ClientHelloExtension::SessionTicket(SessionTicketExtension {
                session: self.session.clone(),
            }),
            ClientHelloExtension::SignatureAlgorithms(SignatureAlgorithmsExtension {
                pairs: android_signature_pairs(),
            }),
            ClientHelloExtension::StatusRequest,
            ClientHelloExtension::NextProtoNegotiation,
            ClientHelloExtension::SignedCertificateTimestamps,
            ClientHelloExtension::Alpn(AlpnExtension {
                protocols: vec!["http/1.1".into(), "spdy/8.1".into()],
            }),
            ClientHelloExtension::SupportedPoints(SupportedPointsExtension::uncompressed()),
            ClientHelloExtension::SupportedCurves(SupportedCurvesExtension {
                curves: vec![CurveId::SECP256R1, CurveId::SECP384R1],
            }),
            ClientHelloExtension::Padding(PaddingExtension::default()),
        ];
        Ok(())
    }

    /// Android 5.1 stock browser; also the default profile.
    fn parrot_android_5_1(&mut self) -> Result<()> {
        self.hello.vers = Some(ProtocolVersion::Tls12);
        self.fill_hello_random()?;
        {
            let config = self.conn.lock_config();
            config.registry.register_cipher_suite(CipherSuite::old_chacha20(
                OLD_TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305_SHA256,
                KeyExchange::EcdheRsa,
            ));
            config.registry.register_cipher_suite(CipherSuite::old_chacha20(
                OLD_TLS_ECDHE_ECDSA_WITH_CHACHA20_POLY1305_SHA256,
                KeyExchange::EcdheEcdsa,
            ));
            config
                .registry
                .enable_signature_pair(SignatureAndHash::new(hash_id::SHA512, sig_id::RSA));
            config
                .registry
                .enable_signature_pair(SignatureAndHash::new(hash_id::SHA512, sig_id::ECDSA));
        }
        self.hello.cipher_suites = vec![
            OLD_TLS_ECDHE_ECDSA_WITH_CHACHA20_POLY1305_SHA256,
            OLD_TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305_SHA256,
            OLD_TLS_DHE_RSA_WITH_CHACHA20_POLY1305_SHA256,
            TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256,
            TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256,
            TLS_DHE_RSA_WITH_AES_128_GCM_SHA256,
            TLS_ECDHE_RSA_WITH_AES_256_CBC_SHA,
            TLS_ECDHE_ECDSA_WITH_AES_256_CBC_SHA,
            TLS_DHE_RSA_WITH_AES_256_CBC_SHA,
            TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA,
            TLS_ECDHE_ECDSA_WITH_AES_128_CBC_SHA,
            TLS_DHE_RSA_WITH_AES_128_CBC_SHA,
            TLS_ECDHE_RSA_WITH_RC4_128_SHA,
            TLS_ECDHE_ECDSA_WITH_RC4_128_SHA,
            TLS_RSA_WITH_AES_128_GCM_SHA256,
            TLS_RSA_WITH_AES_256_CBC_SHA,
            TLS_RSA_WITH_AES_128_CBC_SHA,
            TLS_RSA_WITH_RC4_128_SHA,
            TLS_RSA_WITH_RC4_128_MD5,
            TLS_RSA_WITH_3DES_EDE_CBC_SHA,
            TLS_EMPTY_RENEGOTIATION_INFO_SCSV,
        ];
        self.hello.compression_methods = vec![COMPRESSION_NONE];
        if let Some(id) = self.ticket_session_id()? {
            self.hello.session_id = id;
        }

        self.extensions = vec![
            ClientHelloExtension::ServerName(self.server_name_extension()),
            ClientHelloExtension::SessionTicket(SessionTicketExtension {
                session: self.session.clone(),
            }),
            ClientHelloExtension::SignatureAlgorithms(SignatureAlgorithmsExtension {
                pairs: android_signature_pairs(),
            }),
            ClientHelloExtension::StatusRequest,
            ClientHelloExtension::NextProtoNegotiation,
            ClientHelloExtension::SignedCertificateTimestamps,
            ClientHelloExtension::Alpn(AlpnExtension {
                protocols: vec!["http/1.1".into(), "spdy/3".into(), "spdy/3.1".into()],
            }),
            ClientHelloExtension::SupportedPoints(SupportedPointsExtension::uncompressed()),
            ClientHelloExtension::SupportedCurves(SupportedCurvesExtension {
                curves: vec![CurveId::SECP256R1, CurveId::SECP384R1, CurveId::SECP521R1],
            }),
            ClientHelloExtension::Padding(PaddingExtension::default()),
        ];
        Ok(())
    }

    /// Chrome 58.
    fn parrot_chrome_58(&mut self) -> Result<()> {
        self.hello.vers = Some(ProtocolVersion::Tls12);
        self.fill_hello_random()?;

        // GREASE is a pure function of the already-drawn random, so a
        // rebuilt hello keeps its placeholder values.
        let seed = self.hello.random.clone();
        let grease_cipher = grease_from_seed(&seed, GREASE_CIPHER);
        let grease_group = grease_from_seed(&seed, GREASE_GROUP);
        let (grease_ext1, grease_ext2) = grease_extension_pair(&seed);

        let mut cipher_suites = vec![grease_cipher];
        cipher_suites.extend_from_slice(&[
            TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256,
            TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256,
            TLS_ECDHE_ECDSA_WITH_AES_256_GCM_SHA384,
            TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384,
            TLS_ECDHE_ECDSA_WITH_CHACHA20_POLY1305,
            TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305,
            TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA,
            TLS_ECDHE_RSA_WITH_AES_256_CBC_SHA,
            TLS_RSA_WITH_AES_128_GCM_SHA256,
            TLS_RSA_WITH_AES_256_GCM_SHA384,
            TLS_RSA_WITH_AES_128_CBC_SHA,
            TLS_RSA_WITH_AES_256_CBC_SHA,
            TLS_RSA_WITH_3DES_EDE_CBC_SHA,
        ]);
        self.hello.cipher_suites = cipher_suites;
        self.hello.compression_methods = vec![COMPRESSION_NONE];
        if let Some(id) = self.ticket_session_id()? {
            self.hello.session_id = id;
        }

        self.extensions = vec![
            ClientHelloExtension::Grease(GreaseExtension {
                value: grease_ext1,
                body: Vec::new(),
            }),
            ClientHelloExtension::RenegotiationInfo(RenegotiationInfoExtension {
                renegotiation: RenegotiationSupport::OnceAsClient,
            }),
            ClientHelloExtension::ServerName(self.server_name_extension()),
            ClientHelloExtension::ExtendedMasterSecret,
            ClientHelloExtension::SessionTicket(SessionTicketExtension {
                session: self.session.clone(),
            }),
            ClientHelloExtension::SignatureAlgorithms(SignatureAlgorithmsExtension {
                pairs: vec![
                    SignatureAndHash::new(hash_id::SHA256, sig_id::ECDSA),
                    SignatureAndHash::RSA_PSS_SHA256,
                    SignatureAndHash::new(hash_id::SHA256, sig_id::RSA),
                    SignatureAndHash::new(hash_id::SHA384, sig_id::ECDSA),
                    SignatureAndHash::RSA_PSS_SHA384,
                    SignatureAndHash::new(hash_id::SHA384, sig_id::RSA),
                    SignatureAndHash::RSA_PSS_SHA512,
                    SignatureAndHash::new(hash_id::SHA512, sig_id::RSA),
                    SignatureAndHash::new(hash_id::SHA1, sig_id::RSA),
                ],
            }),
            ClientHelloExtension::StatusRequest,
            ClientHelloExtension::SignedCertificateTimestamps,
            ClientHelloExtension::Alpn(AlpnExtension {
                protocols: vec!["h2".into(), "http/1.1".into()],
            }),
            ClientHelloExtension::ChannelId,
            ClientHelloExtension::SupportedPoints(SupportedPointsExtension::uncompressed()),
            ClientHelloExtension::SupportedCurves(SupportedCurvesExtension {
                curves: vec![
                    CurveId(grease_group),
                    CurveId::X25519,
                    CurveId::SECP256R1,
                    CurveId::SECP384R1,
                ],
            }),
            ClientHelloExtension::Grease(GreaseExtension {
                value: grease_ext2,
                body: vec![0],
            }),
            ClientHelloExtension::Padding(PaddingExtension::default()),
        ];
        Ok(())
    }
}
