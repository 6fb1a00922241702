// ABOUTME: esm_class bit values used when submitting concatenated messages
// ABOUTME: Only the UDHI flag matters here; the remaining bits are left to the caller

/// Bit 6 of esm_class: the short_message starts with a User Data Header.
pub const UDHI_INDICATOR: u8 = 0x40;

/// True if `esm_class` has the UDHI bit set.
pub fn has_udhi(esm_class: u8) -> bool {
    esm_class & UDHI_INDICATOR != 0
}
