use crate::service::error::{SmppError, SmppResult};
use bytes::{BufMut, Bytes, BytesMut};
use num_enum::TryFromPrimitive;
use std::collections::BTreeMap;

/// Optional parameter tags a submitting ESME sets on submit_sm.
///
/// Integer-valued tags have a fixed wire width, see [`OptionalTag::integer_width`].
#[derive(TryFromPrimitive)]
#[repr(u16)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OptionalTag {
    PayloadType = 0x0019,
    PrivacyIndicator = 0x0201,
    UserMessageReference = 0x0204,
    SourcePort = 0x020A,
    DestinationPort = 0x020B,
    /// Reference shared by every segment of one concatenated message.
    SarMsgRefNum = 0x020C,
    LanguageIndicator = 0x020D,
    SarTotalSegments = 0x020E,
    SarSegmentSeqnum = 0x020F,
    NumberOfMessages = 0x0304,
    CallbackNum = 0x0381,
    MessagePayload = 0x0424,
    MoreMessagesToSend = 0x0426,
    DisplayTime = 0x1201,
    SmsSignal = 0x1203,
    MsValidity = 0x1204,
}

impl OptionalTag {
    /// Width in octets of an integer value for this tag, `None` for octet
    /// string tags.
    pub fn integer_width(&self) -> Option<usize> {
        match self {
            OptionalTag::UserMessageReference
            | OptionalTag::SourcePort
            | OptionalTag::DestinationPort
            | OptionalTag::SarMsgRefNum
            | OptionalTag::SmsSignal => Some(2),
            OptionalTag::PayloadType
            | OptionalTag::PrivacyIndicator
            | OptionalTag::NumberOfMessages
            | OptionalTag::SarTotalSegments
            | OptionalTag::SarSegmentSeqnum
            | OptionalTag::LanguageIndicator
            | OptionalTag::MoreMessagesToSend
            | OptionalTag::MsValidity
            | OptionalTag::DisplayTime => Some(1),
            OptionalTag::CallbackNum | OptionalTag::MessagePayload => None,
        }
    }
}

/// Value of one optional parameter before it is put on the wire.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TlvValue {
    Integer(u32),
    Octets(Bytes),
}

impl TlvValue {
    pub fn as_integer(&self) -> Option<u32> {
        match self {
            TlvValue::Integer(value) => Some(*value),
            TlvValue::Octets(_) => None,
        }
    }

    pub fn as_octets(&self) -> Option<&Bytes> {
        match self {
            TlvValue::Octets(value) => Some(value),
            TlvValue::Integer(_) => None,
        }
    }
}

impl From<u32> for TlvValue {
    fn from(value: u32) -> Self {
        TlvValue::Integer(value)
    }
}

impl From<Bytes> for TlvValue {
    fn from(value: Bytes) -> Self {
        TlvValue::Octets(value)
    }
}

impl From<&str> for TlvValue {
    fn from(value: &str) -> Self {
        TlvValue::Octets(Bytes::copy_from_slice(value.as_bytes()))
    }
}

/// The optional parameters of one submit_sm, keyed by tag. Setting a tag that
/// is already present replaces its value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OptionalParameters(BTreeMap<OptionalTag, TlvValue>);

impl OptionalParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder style insert.
    pub fn with(mut self, tag: OptionalTag, value: impl Into<TlvValue>) -> Self {
        self.set(tag, value);
        self
    }

    pub fn set(&mut self, tag: OptionalTag, value: impl Into<TlvValue>) {
        self.0.insert(tag, value.into());
    }

    pub fn get(&self, tag: OptionalTag) -> Option<&TlvValue> {
        self.0.get(&tag)
    }

    pub fn contains(&self, tag: OptionalTag) -> bool {
        self.0.contains_key(&tag)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&OptionalTag, &TlvValue)> {
        self.0.iter()
    }

    /// Render every parameter as a wire TLV, in tag order.
    ///
    /// Integers are written big-endian using the width the tag declares and
    /// must fit that width; integer tags given octets are rejected too.
    pub fn to_tlvs(&self) -> SmppResult<Vec<Tlv>> {
        self.0
            .iter()
            .map(|(tag, value)| Tlv::from_parameter(*tag, value))
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tlv {
    /// The Tag field is used to uniquely identify the particular optional parameter in question.
    pub tag: u16,

    /// The Length field indicates the length of the Value field in octets.
    /// Note that this length does not include the length of the Tag and Length fields.
    pub length: u16,

    /// The Value field contains the actual data for the optional parameter in question.
    pub value: Bytes,
}

impl Tlv {
    fn from_parameter(tag: OptionalTag, value: &TlvValue) -> SmppResult<Self> {
        let value = match (tag.integer_width(), value) {
            (Some(width), TlvValue::Integer(n)) => {
                if width < 4 && u64::from(*n) >= 1u64 << (width * 8) {
                    return Err(SmppError::InvalidData(format!(
                        "{:?} value {} does not fit in {} octet(s)",
                        tag, n, width
                    )));
                }
                let mut buf = BytesMut::with_capacity(width);
                buf.put_uint(u64::from(*n), width);
                buf.freeze()
            }
            (None, TlvValue::Octets(octets)) => octets.clone(),
            (Some(_), TlvValue::Octets(_)) => {
                return Err(SmppError::InvalidData(format!(
                    "{:?} takes an integer value",
                    tag
                )));
            }
            (None, TlvValue::Integer(_)) => {
                return Err(SmppError::InvalidData(format!(
                    "{:?} takes an octet string value",
                    tag
                )));
            }
        };

        let length = u16::try_from(value.len()).map_err(|_| {
            SmppError::InvalidData(format!("{:?} value is longer than 65535 octets", tag))
        })?;

        Ok(Tlv {
            tag: tag as u16,
            length,
            value,
        })
    }

    pub fn encode(&self, buf: &mut BytesMut) {
        buf.put_u16(self.tag);
        buf.put_u16(self.length);
        buf.put_slice(&self.value);
    }

    pub fn to_bytes(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(4 + self.value.len());
        self.encode(&mut buf);
        buf.freeze()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sar_parameters_render_with_declared_widths() {
        let params = OptionalParameters::new()
            .with(OptionalTag::SarMsgRefNum, 0xBEEFu32)
            .with(OptionalTag::SarTotalSegments, 3u32)
            .with(OptionalTag::SarSegmentSeqnum, 2u32);

        let tlvs = params.to_tlvs().unwrap();
        assert_eq!(tlvs.len(), 3);
        assert_eq!(tlvs[0].to_bytes().as_ref(), &[0x02, 0x0C, 0x00, 0x02, 0xBE, 0xEF]);
        assert_eq!(tlvs[1].to_bytes().as_ref(), &[0x02, 0x0E, 0x00, 0x01, 0x03]);
        assert_eq!(tlvs[2].to_bytes().as_ref(), &[0x02, 0x0F, 0x00, 0x01, 0x02]);
    }

    #[test]
    fn message_payload_is_copied_as_octets() {
        let params = OptionalParameters::new().with(OptionalTag::MessagePayload, "6869");
        let tlvs = params.to_tlvs().unwrap();
        assert_eq!(tlvs[0].tag, 0x0424);
        assert_eq!(tlvs[0].length, 4);
        assert_eq!(tlvs[0].value.as_ref(), b"6869");
    }

    #[test]
    fn integer_too_wide_for_tag_is_rejected() {
        let params = OptionalParameters::new().with(OptionalTag::SarTotalSegments, 256u32);
        assert!(matches!(params.to_tlvs(), Err(SmppError::InvalidData(_))));
    }

    #[test]
    fn wrong_value_kind_is_rejected() {
        let params = OptionalParameters::new().with(OptionalTag::SourcePort, "80");
        assert!(params.to_tlvs().is_err());

        let params = OptionalParameters::new().with(OptionalTag::MessagePayload, 1u32);
        assert!(params.to_tlvs().is_err());
    }

    #[test]
    fn set_replaces_existing_value() {
        let mut params = OptionalParameters::new().with(OptionalTag::SarSegmentSeqnum, 1u32);
        params.set(OptionalTag::SarSegmentSeqnum, 2u32);
        assert_eq!(params.len(), 1);
        assert_eq!(
            params.get(OptionalTag::SarSegmentSeqnum).and_then(TlvValue::as_integer),
            Some(2)
        );
    }
}
