// ABOUTME: Static configuration handed to the SMPP service by the surrounding transport
// ABOUTME: Endpoint and bind credentials are opaque to the submission core and only passed through

use crate::service::types::BindCredentials;

/// Static configuration for an [`SmppService`](crate::service::SmppService)
///
/// The submission core never interprets these values. They travel with the
/// service so the reconnecting transport (which performs the TCP connect and
/// the bind) and the surrounding transport can read them back through
/// [`SmppService::config`](crate::service::SmppService::config).
///
/// # Example
///
/// ```rust
/// use smpp_service::service::{BindCredentials, ServiceConfig};
///
/// let config = ServiceConfig::new("localhost:2775")
///     .with_credentials(BindCredentials::transmitter("system_id", "password"))
///     .with_transport_name("sms_outbound");
///
/// assert_eq!(config.endpoint, "localhost:2775");
/// assert_eq!(config.transport_name, "sms_outbound");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Address of the SMSC (default: localhost:2775)
    pub endpoint: String,

    /// Credentials used when binding
    ///
    /// Defaults to a transceiver bind with empty system id and password.
    pub credentials: BindCredentials,

    /// Name of the surrounding transport, used in log output
    pub transport_name: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: "localhost:2775".to_string(),
            credentials: BindCredentials::transceiver("", ""),
            transport_name: "smpp".to_string(),
        }
    }
}

impl ServiceConfig {
    /// Create a configuration pointing at `endpoint`
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }

    /// Set the bind credentials
    pub fn with_credentials(mut self, credentials: BindCredentials) -> Self {
        self.credentials = credentials;
        self
    }

    /// Set the transport name
    pub fn with_transport_name(mut self, transport_name: impl Into<String>) -> Self {
        self.transport_name = transport_name.into();
        self
    }
}
