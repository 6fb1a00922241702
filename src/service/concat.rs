// ABOUTME: Concatenated SMS helpers: the single-PDU byte budget, chunking and per-segment headers
// ABOUTME: SAR references are reduced mod 0x10000 and UDH references mod 0x100, matching their field widths

use crate::datatypes::{OptionalParameters, OptionalTag};
use bytes::{BufMut, Bytes, BytesMut};

/// Octets available in the user data of one SMS.
pub const GSM_MAX_SMS_BYTES: usize = 140;

/// Septets available in one SMS when the GSM 7-bit default alphabet is used.
pub const GSM_MAX_SMS_7BIT_CHARS: usize = 160;

/// Chunk size when splitting, leaving room for a header the SMSC may add.
pub const CSM_PAYLOAD_LENGTH: usize = GSM_MAX_SMS_BYTES - 10;

/// Length of the concatenation User Data Header prepended to each segment.
pub const UDH_LENGTH: usize = 6;

/// Modulus for the 16 bit sar_msg_ref_num parameter.
pub const SAR_REFERENCE_MODULUS: u32 = 0x10000;

/// Modulus for the 8 bit reference byte of the UDH concatenation element.
pub const UDH_REFERENCE_MODULUS: u32 = 0x100;

/// Check whether `message` can go out as a single submit_sm.
///
/// Anything up to 140 octets fits. Up to 160 octets fits when every octet is
/// printable ASCII, on the assumption that those map one to one onto the GSM
/// 7-bit default alphabet. No real alphabet mapping is attempted.
pub fn fits_in_one_message(message: &[u8]) -> bool {
    if message.len() <= GSM_MAX_SMS_BYTES {
        return true;
    }

    message.len() <= GSM_MAX_SMS_7BIT_CHARS
        && message.iter().all(|byte| (0x20..=0x7F).contains(byte))
}

/// Split `message` into the segments it will be sent as.
///
/// A message that fits is returned whole. Otherwise it is cut into 130 octet
/// chunks, the last holding the remainder. Cuts ignore character boundaries:
/// the handset reassembles the octets before decoding them.
pub fn csm_split_message(message: &Bytes) -> Vec<Bytes> {
    if fits_in_one_message(message) {
        return vec![message.clone()];
    }

    (0..message.len())
        .step_by(CSM_PAYLOAD_LENGTH)
        .map(|start| message.slice(start..(start + CSM_PAYLOAD_LENGTH).min(message.len())))
        .collect()
}

/// Overwrite the three SAR parameters for segment `index` (1-based) of
/// `total`, keeping every other parameter the caller set.
pub fn apply_sar_parameters(
    optional_parameters: &mut OptionalParameters,
    reference: u32,
    total: u32,
    index: u32,
) {
    optional_parameters.set(OptionalTag::SarMsgRefNum, reference % SAR_REFERENCE_MODULUS);
    optional_parameters.set(OptionalTag::SarTotalSegments, total);
    optional_parameters.set(OptionalTag::SarSegmentSeqnum, index);
}

/// Prefix `chunk` with the concatenation User Data Header for segment
/// `index` (1-based) of `total`.
///
/// `total` and `index` must fit in a byte, which they do for any message that
/// fits in a PDU's message_payload.
pub fn udh_segment(chunk: &[u8], reference: u32, total: u8, index: u8) -> Bytes {
    let mut buf = BytesMut::with_capacity(UDH_LENGTH + chunk.len());
    buf.put_u8(0x05); // UDH length, excluding this byte
    buf.put_u8(0x00); // IEI: concatenated short message, 8 bit reference
    buf.put_u8(0x03); // IE data length
    buf.put_u8((reference % UDH_REFERENCE_MODULUS) as u8);
    buf.put_u8(total);
    buf.put_u8(index);
    buf.put_slice(chunk);
    buf.freeze()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ascii(len: usize) -> Bytes {
        Bytes::from(
            (0..len)
                .map(|i| b'a' + (i % 26) as u8)
                .collect::<Vec<u8>>(),
        )
    }

    #[test]
    fn up_to_140_bytes_always_fits() {
        assert!(fits_in_one_message(b""));
        assert!(fits_in_one_message(&[0xFF; 140]));
        assert!(!fits_in_one_message(&[0xFF; 141]));
    }

    #[test]
    fn printable_ascii_fits_up_to_160() {
        assert!(fits_in_one_message(&ascii(141)));
        assert!(fits_in_one_message(&ascii(160)));
        assert!(!fits_in_one_message(&ascii(161)));
    }

    #[test]
    fn printable_range_boundaries() {
        let mut message = vec![b' '; 150];
        assert!(fits_in_one_message(&message));

        message[10] = 0x7F;
        assert!(fits_in_one_message(&message));

        message[10] = 0x1F;
        assert!(!fits_in_one_message(&message));

        message[10] = 0x80;
        assert!(!fits_in_one_message(&message));

        message[10] = b'\n';
        assert!(!fits_in_one_message(&message));
    }

    #[test]
    fn short_message_is_not_split() {
        let message = ascii(140);
        assert_eq!(csm_split_message(&message), vec![message.clone()]);

        let message = ascii(160);
        assert_eq!(csm_split_message(&message), vec![message.clone()]);
    }

    #[test]
    fn split_161_ascii_bytes() {
        let message = ascii(161);
        let chunks = csm_split_message(&message);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].len(), 130);
        assert_eq!(chunks[1].len(), 31);
        assert_eq!(chunks[0], message.slice(..130));
        assert_eq!(chunks[1], message.slice(130..));
    }

    #[test]
    fn split_non_ascii_over_140() {
        let message = Bytes::from(vec![0xC3; 141]);
        let lengths: Vec<usize> = csm_split_message(&message).iter().map(Bytes::len).collect();
        assert_eq!(lengths, vec![130, 11]);
    }

    #[test]
    fn split_exact_multiple_has_no_empty_tail() {
        let message = ascii(260);
        let lengths: Vec<usize> = csm_split_message(&message).iter().map(Bytes::len).collect();
        assert_eq!(lengths, vec![130, 130]);
    }

    #[test]
    fn split_may_cut_multibyte_characters() {
        // 'é' is two octets in UTF-8, so 71 of them are 142 octets
        let message = Bytes::from("é".repeat(71));
        let chunks = csm_split_message(&message);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks.concat(), message.to_vec());
    }

    #[test]
    fn sar_parameters_overwrite_and_keep_others() {
        let mut params = OptionalParameters::new()
            .with(OptionalTag::SarTotalSegments, 9u32)
            .with(OptionalTag::UserMessageReference, 42u32);

        apply_sar_parameters(&mut params, 0x1_2345, 3, 2);

        assert_eq!(params.get(OptionalTag::SarMsgRefNum).and_then(|v| v.as_integer()), Some(0x2345));
        assert_eq!(params.get(OptionalTag::SarTotalSegments).and_then(|v| v.as_integer()), Some(3));
        assert_eq!(params.get(OptionalTag::SarSegmentSeqnum).and_then(|v| v.as_integer()), Some(2));
        assert_eq!(
            params.get(OptionalTag::UserMessageReference).and_then(|v| v.as_integer()),
            Some(42)
        );
    }

    #[test]
    fn sar_reference_wraps_at_0x10000() {
        let mut params = OptionalParameters::new();
        apply_sar_parameters(&mut params, 0xFFFF, 2, 1);
        assert_eq!(params.get(OptionalTag::SarMsgRefNum).and_then(|v| v.as_integer()), Some(0xFFFF));

        apply_sar_parameters(&mut params, 0x10000, 2, 1);
        assert_eq!(params.get(OptionalTag::SarMsgRefNum).and_then(|v| v.as_integer()), Some(0));
    }

    #[test]
    fn udh_header_layout() {
        let segment = udh_segment(b"abc", 0x1FF, 3, 2);
        assert_eq!(segment.as_ref(), &[0x05, 0x00, 0x03, 0xFF, 0x03, 0x02, b'a', b'b', b'c']);
    }

    #[test]
    fn udh_reference_wraps_at_0x100() {
        assert_eq!(udh_segment(b"", 0x100, 2, 1)[3], 0x00);
        assert_eq!(udh_segment(b"", 0xFF, 2, 1)[3], 0xFF);
        assert_eq!(udh_segment(b"", 0x101, 2, 1)[3], 0x01);
    }
}
