//! Client configuration: the core config plus a parrot profile choice.

use std::sync::Arc;

use mimtls_core::mimtls_crypto::Provider;
use mimtls_core::{ClientFlight, ClientSessionCache, Config, Error, ProfileId, Result};

/// Client-side configuration for mimicked TLS connections.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base connection configuration
    pub config: Config,

    /// Parrot profile applied when connecting
    pub profile: ProfileId,
}

impl ClientConfig {
    /// Create a new configuration builder.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }
}

/// Builder for client configuration.
#[derive(Debug)]
pub struct ClientConfigBuilder {
    config: Config,
    profile: ProfileId,
}

impl Default for ClientConfigBuilder {
    fn default() -> Self {
        Self {
            config: Config::default(),
            profile: ProfileId::DEFAULT,
        }
    }
}

impl ClientConfigBuilder {
    /// Set the server name (SNI and certificate verification).
    pub fn with_server_name(mut self, name: &str) -> Self {
        self.config.server_name = name.to_string();
        self
    }

    /// Choose the parrot profile; defaults to [`ProfileId::DEFAULT`].
    pub fn with_profile(mut self, profile: ProfileId) -> Self {
        self.profile = profile;
        self
    }

    /// Skip server certificate verification.
    pub fn with_insecure_skip_verify(mut self, skip: bool) -> Self {
        self.config.insecure_skip_verify = skip;
        self
    }

    /// Set ALPN protocols. A profile's ALPN extension overwrites these when
    /// applied.
    pub fn with_alpn_protocols(mut self, protocols: Vec<String>) -> Self {
        self.config.next_protos = protocols;
        self
    }

    /// Wire a session cache shared across connections.
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

    /// Build the client configuration.
    pub fn build(self) -> Result<ClientConfig> {
        if self.config.server_name.is_empty() && !self.config.insecure_skip_verify {
            return Err(Error::InvalidConfig(
                "either a server name or insecure_skip_verify must be set".into(),
            ));
        }
        for proto in &self.config.next_protos {
            if proto.is_empty() || proto.len() > 255 {
                return Err(Error::InvalidConfig(format!(
                    "invalid ALPN protocol of length {}",
                    proto.len()
                )));
            }
        }
        Ok(ClientConfig {
            config: self.config,
            profile: self.profile,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_name_or_skip_verify() {
        assert!(ClientConfig::builder().build().is_err());
        assert!(ClientConfig::builder()
            .with_insecure_skip_verify(true)
            .build()
            .is_ok());
        assert!(ClientConfig::builder()
            .with_server_name("example.com")
            .build()
            .is_ok());
    }

    #[test]
    fn test_builder_carries_profile() {
        let config = ClientConfig::builder()
            .with_server_name("example.com")
            .with_profile(ProfileId::CHROME_58)
            .build()
            .unwrap();
        assert_eq!(config.profile, ProfileId::CHROME_58);
    }

    #[test]
    fn test_builder_rejects_bad_alpn() {
        let result = ClientConfig::builder()
            .with_server_name("example.com")
            .with_alpn_protocols(vec!["x".repeat(256)])
            .build();
        assert!(result.is_err());
    }
}
