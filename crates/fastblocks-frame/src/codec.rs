use bytes::{BufMut, BytesMut};

/// Stop bit: set on the last byte of an encoded integer.
pub const STOP_BIT: u8 = 0x80;

/// Mask for the 7 payload bits of each encoded byte.
pub const DATA_BITS: u8 = 0x7F;

/// Payload bits carried per encoded byte.
pub const DATA_SHIFT: u32 = 7;

/// Number of bytes [`encode_uint`] produces for `value`.
///
/// `ceil(bit_length(value) / 7)`, minimum 1 — zero still occupies one
/// byte on the wire.
pub fn encoded_len(value: u64) -> usize {
    let bits = (u64::BITS - value.leading_zeros()).max(1);
    bits.div_ceil(DATA_SHIFT) as usize
}

/// Append the FAST stop-bit encoding of `value` to `dst`.
///
/// Wire format: consecutive 7-bit groups, most-significant group first,
/// high bit set on the final (least-significant) byte only. The
/// encoding is minimal — no leading zero groups.
///
/// ```
/// use bytes::BytesMut;
/// use fastblocks_frame::codec::encode_uint;
///
/// let mut buf = BytesMut::new();
/// encode_uint(200, &mut buf);
/// assert_eq!(&buf[..], &[0x01, 0xC8]);
/// ```
pub fn encode_uint(value: u64, dst: &mut BytesMut) {
    let len = encoded_len(value);
    dst.reserve(len);
    for group in (1..len as u32).rev() {
        dst.put_u8((value >> (group * DATA_SHIFT)) as u8 & DATA_BITS);
    }
    dst.put_u8((value as u8 & DATA_BITS) | STOP_BIT);
}
