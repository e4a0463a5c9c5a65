//! Bit-window extraction over byte buffers.
//!
//! Protocol fields in CDMA bearer data are laid out MSB-first and are not
//! byte aligned, so every decoder that accepts a `bit_offset` goes through
//! [`read`]. GSM 03.38 packing is the exception: septets fill each octet from
//! the least significant bit upward, which [`read_septet_lsb`] handles.
//!
//! A window that would run past the end of the buffer yields `None`. Decoders
//! treat that as truncated input.

/// Reads `width` bits starting at `bit_offset`, MSB-first, right-aligned.
///
/// `width` must be in `1..=32`.
///
/// ```
/// // 0b1011_0110 0b0100_0000, 5 bits starting at bit 3 -> 0b10110
/// assert_eq!(pdutext::bits::read(&[0xB6, 0x40], 3, 5), Some(0b10110));
/// ```
#[must_use]
pub fn read(buf: &[u8], bit_offset: usize, width: u32) -> Option<u32> {
    debug_assert!((1..=32).contains(&width), "width out of range: {width}");

    let end = bit_offset.checked_add(width as usize)?;
    if end > buf.len().checked_mul(8)? {
        return None;
    }

    let first = bit_offset / 8;
    let last = (end - 1) / 8;

    // At most five bytes are touched by a 32-bit window.
    let mut acc: u64 = 0;
    for &byte in &buf[first..=last] {
        acc = (acc << 8) | u64::from(byte);
    }

    let consumed = (last - first + 1) * 8;
    let skip_tail = consumed - (bit_offset % 8) - width as usize;
    let mask = (1u64 << width) - 1;
    u32::try_from((acc >> skip_tail) & mask).ok()
}

/// Reads one GSM 03.38 packed septet whose least significant bit sits at
/// `bit_offset`.
///
/// Bit `n` of the stream is bit `n % 8` (counting from the LSB) of byte
/// `n / 8`.
#[must_use]
pub fn read_septet_lsb(buf: &[u8], bit_offset: usize) -> Option<u8> {
    let index = bit_offset / 8;
    let shift = bit_offset % 8;

    let low = *buf.get(index)? >> shift;
    if shift <= 1 {
        return Some(low & 0x7F);
    }

    let high = *buf.get(index + 1)? << (8 - shift);
    Some((low | high) & 0x7F)
}

/// Number of whole `width`-bit units available in `buf` from `bit_offset`.
///
/// Decoders cap caller-supplied counts with this before sizing output.
#[must_use]
pub(crate) fn units_after(buf: &[u8], bit_offset: usize, width: usize) -> usize {
    buf.len().saturating_mul(8).saturating_sub(bit_offset) / width
}

/// Bit position of the `index`th `stride`-bit unit after `bit_offset`, or
/// `None` when it does not fit in a `usize`.
#[must_use]
pub(crate) fn unit_offset(bit_offset: usize, index: usize, stride: usize) -> Option<usize> {
    index.checked_mul(stride)?.checked_add(bit_offset)
}
