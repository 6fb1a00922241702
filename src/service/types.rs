// ABOUTME: Supporting types for SMPP submissions including bind credentials and submit_sm parameters
// ABOUTME: SubmitParams carries everything a caller may set on a submit_sm besides the destination

use crate::datatypes::OptionalParameters;
use bytes::Bytes;

/// SMPP bind operation credentials
///
/// Opaque to the submission service; carried in [`ServiceConfig`](crate::service::ServiceConfig)
/// for the reconnecting transport that performs the bind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindCredentials {
    /// System identifier for authentication
    pub system_id: String,
    /// Password for authentication
    pub password: String,
    /// System type (optional, defaults to empty string)
    pub system_type: Option<String>,
    /// Type of bind operation to perform
    pub bind_type: BindType,
}

impl BindCredentials {
    fn new(system_id: impl Into<String>, password: impl Into<String>, bind_type: BindType) -> Self {
        Self {
            system_id: system_id.into(),
            password: password.into(),
            system_type: None,
            bind_type,
        }
    }

    pub fn transmitter(system_id: impl Into<String>, password: impl Into<String>) -> Self {
        Self::new(system_id, password, BindType::Transmitter)
    }

    pub fn receiver(system_id: impl Into<String>, password: impl Into<String>) -> Self {
        Self::new(system_id, password, BindType::Receiver)
    }

    pub fn transceiver(system_id: impl Into<String>, password: impl Into<String>) -> Self {
        Self::new(system_id, password, BindType::Transceiver)
    }

    /// Set system type
    pub fn with_system_type(mut self, system_type: impl Into<String>) -> Self {
        self.system_type = Some(system_type.into());
        self
    }
}

/// Type of SMPP bind operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BindType {
    /// Bind as transmitter (can send submit_sm)
    Transmitter,
    /// Bind as receiver (can receive deliver_sm)
    Receiver,
    /// Bind as transceiver (both transmitter and receiver capabilities)
    #[default]
    Transceiver,
}

/// Parameters of one submit_sm apart from the destination address.
///
/// Every mandatory field is optional here; a field left as `None` is filled
/// with the protocol session's default when the PDU is built. The submission
/// service itself only reads or overrides `short_message`, `sm_length`,
/// `esm_class` and the optional parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitParams {
    pub service_type: Option<String>,
    pub source_addr: Option<String>,
    pub source_addr_ton: Option<u8>,
    pub source_addr_npi: Option<u8>,
    pub dest_addr_ton: Option<u8>,
    pub dest_addr_npi: Option<u8>,
    pub esm_class: Option<u8>,
    pub protocol_id: Option<u8>,
    pub priority_flag: Option<u8>,
    pub registered_delivery: Option<u8>,
    pub data_coding: Option<u8>,
    /// Message body. Up to 254 octets on the wire; longer bodies go through
    /// concatenation or the message_payload parameter.
    pub short_message: Option<Bytes>,
    /// Explicit sm_length; derived from `short_message` when `None`.
    pub sm_length: Option<u8>,
    pub optional_parameters: OptionalParameters,
}

impl SubmitParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_short_message(mut self, short_message: impl Into<Bytes>) -> Self {
        self.short_message = Some(short_message.into());
        self
    }

    pub fn with_source_addr(mut self, source_addr: impl Into<String>) -> Self {
        self.source_addr = Some(source_addr.into());
        self
    }

    pub fn with_source_numbering(mut self, ton: u8, npi: u8) -> Self {
        self.source_addr_ton = Some(ton);
        self.source_addr_npi = Some(npi);
        self
    }

    pub fn with_dest_numbering(mut self, ton: u8, npi: u8) -> Self {
        self.dest_addr_ton = Some(ton);
        self.dest_addr_npi = Some(npi);
        self
    }

    pub fn with_esm_class(mut self, esm_class: u8) -> Self {
        self.esm_class = Some(esm_class);
        self
    }

    pub fn with_data_coding(mut self, data_coding: u8) -> Self {
        self.data_coding = Some(data_coding);
        self
    }

    /// Request a delivery receipt
    pub fn with_delivery_receipt(mut self) -> Self {
        self.registered_delivery = Some(1);
        self
    }

    pub fn with_optional_parameters(mut self, optional_parameters: OptionalParameters) -> Self {
        self.optional_parameters = optional_parameters;
        self
    }

    /// The sm_length the PDU should carry.
    pub fn effective_sm_length(&self) -> usize {
        match (self.sm_length, &self.short_message) {
            (Some(len), _) => len as usize,
            (None, Some(message)) => message.len(),
            (None, None) => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datatypes::OptionalTag;

    #[test]
    fn credentials_constructors_set_bind_type() {
        let creds = BindCredentials::transmitter("id", "pw").with_system_type("VMA");
        assert_eq!(creds.bind_type, BindType::Transmitter);
        assert_eq!(creds.system_type.as_deref(), Some("VMA"));
        assert_eq!(BindCredentials::receiver("id", "pw").bind_type, BindType::Receiver);
        assert_eq!(
            BindCredentials::transceiver("id", "pw").bind_type,
            BindType::Transceiver
        );
    }

    #[test]
    fn builder_sets_fields() {
        let params = SubmitParams::new()
            .with_short_message(&b"hello"[..])
            .with_source_addr("1234")
            .with_data_coding(8)
            .with_delivery_receipt()
            .with_optional_parameters(
                OptionalParameters::new().with(OptionalTag::UserMessageReference, 7u32),
            );

        assert_eq!(params.short_message.as_deref(), Some(&b"hello"[..]));
        assert_eq!(params.source_addr.as_deref(), Some("1234"));
        assert_eq!(params.data_coding, Some(8));
        assert_eq!(params.registered_delivery, Some(1));
        assert!(params.optional_parameters.contains(OptionalTag::UserMessageReference));
        assert_eq!(params.esm_class, None);
    }

    #[test]
    fn sm_length_follows_message_unless_overridden() {
        let params = SubmitParams::new().with_short_message(&b"hello"[..]);
        assert_eq!(params.effective_sm_length(), 5);

        let mut params = params;
        params.sm_length = Some(0);
        assert_eq!(params.effective_sm_length(), 0);

        assert_eq!(SubmitParams::new().effective_sm_length(), 0);
    }
}
