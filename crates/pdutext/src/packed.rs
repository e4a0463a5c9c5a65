//! Decoders for CDMA bearer-data fields that start at arbitrary bit offsets.

use alloc::{
    string::{String, ToString},
    vec::Vec,
};
use core::net::Ipv4Addr;

use crate::{Coding, DecodedText, Truncation, bits, buffer::TextBuffer, to_utf8};

/// Reads a 32-bit IPv4 address starting `bit_offset` bits into `pdu`, most
/// significant octet first. `None` when fewer than 32 bits remain.
#[must_use]
pub fn decode_ipv4(pdu: &[u8], bit_offset: usize) -> Option<Ipv4Addr> {
    bits::read(pdu, bit_offset, 32).map(Ipv4Addr::from)
}

/// [`decode_ipv4`] formatted in dotted-decimal notation.
///
/// ```
/// use pdutext::packed;
///
/// let addr = packed::decode_ip_addr(&[0xC0, 0xA8, 0x00, 0x01], 0);
/// assert_eq!(addr.as_deref(), Some("192.168.0.1"));
/// ```
#[must_use]
pub fn decode_ip_addr(pdu: &[u8], bit_offset: usize) -> Option<String> {
    decode_ipv4(pdu, bit_offset).map(|addr| addr.to_string())
}

/// Decodes `chars` big-endian UTF-16 units starting `bit_offset` bits into
/// `pdu`.
///
/// Surrogate pairs count as two units. Units missing from the end of `pdu`
/// mark the result [`Truncation::Input`].
#[must_use]
pub fn decode_unicode(pdu: &[u8], chars: usize, bit_offset: usize) -> DecodedText {
    // Never larger than `pdu`, so the doubling cannot overflow.
    let readable = chars.min(bits::units_after(pdu, bit_offset, 16));
    let mut units = Vec::new();
    if units.try_reserve_exact(readable * 2).is_err() {
        return DecodedText::truncated(String::new(), Truncation::Alloc);
    }
    units.extend(
        (0..readable)
            .map_while(|i| {
                bits::unit_offset(bit_offset, i, 16)
                    .and_then(|bit| bits::read(pdu, bit, 16))
                    .and_then(|v| u16::try_from(v).ok())
            })
            .flat_map(u16::to_be_bytes),
    );
    let short = units.len() / 2 < chars;

    let decoded = to_utf8(&units, Coding::Utf16Be);
    if !short {
        return decoded;
    }
    let mut out = TextBuffer::with_estimate(decoded.len());
    if out.append(decoded) {
        out.stop(Truncation::Input);
    }
    out.finish()
}

/// Decodes `chars` 7-bit IA5 characters packed MSB-first from `bit_offset`.
///
/// Characters outside printable ASCII become a space.
///
/// ```
/// use pdutext::packed;
///
/// // "Hi" as two septets: 1001000 1101001
/// assert_eq!(packed::decode_ascii7_packed(&[0x91, 0xA4], 2, 0), "Hi");
/// ```
#[must_use]
pub fn decode_ascii7_packed(pdu: &[u8], chars: usize, bit_offset: usize) -> DecodedText {
    decode_ascii7(pdu, chars, bit_offset, 7)
}

/// Decodes `chars` IA5 characters carried in 8-bit units from `bit_offset`.
///
/// The high bit of each unit is ignored and characters outside printable
/// ASCII become a space.
#[must_use]
pub fn decode_ascii7_unpacked(pdu: &[u8], chars: usize, bit_offset: usize) -> DecodedText {
    decode_ascii7(pdu, chars, bit_offset, 8)
}

fn decode_ascii7(pdu: &[u8], chars: usize, bit_offset: usize, width: u32) -> DecodedText {
    let stride = width as usize;
    let mut out = TextBuffer::with_estimate(chars.min(bits::units_after(pdu, bit_offset, stride)));
    for index in 0..chars {
        let unit = bits::unit_offset(bit_offset, index, stride)
            .and_then(|bit| bits::read(pdu, bit, width));
        let Some(unit) = unit else {
            out.stop(Truncation::Input);
            break;
        };
        if !out.push(printable(unit & 0x7F)) {
            break;
        }
    }
    out.finish()
}

fn printable(code: u32) -> char {
    match char::from_u32(code) {
        Some(ch) if ch == ' ' || ch.is_ascii_graphic() => ch,
        _ => {
            tracing::trace!(code, "non-printable IA5 character replaced");
            ' '
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use core::net::Ipv4Addr;

    use super::{
        decode_ascii7_packed, decode_ascii7_unpacked, decode_ip_addr, decode_ipv4, decode_unicode,
    };
    use crate::{Truncation, UtfError};

    #[test]
    fn ip_address_aligned() {
        assert_eq!(
            decode_ip_addr(&[0x0A, 0x00, 0x00, 0xFE], 0).as_deref(),
            Some("10.0.0.254")
        );
    }

    #[test]
    fn ip_address_unaligned() {
        // 192.168.0.1 behind a four-bit prefix of 0xF.
        let pdu = [0xFC, 0x0A, 0x80, 0x00, 0x10];
        assert_eq!(decode_ipv4(&pdu, 4), Some(Ipv4Addr::new(192, 168, 0, 1)));
        assert_eq!(decode_ip_addr(&pdu, 4).as_deref(), Some("192.168.0.1"));
    }

    #[test]
    fn ip_address_short_buffer() {
        assert_eq!(decode_ip_addr(&[0xC0, 0xA8, 0x00], 0), None);
        assert_eq!(decode_ip_addr(&[0xC0, 0xA8, 0x00, 0x01], 1), None);
    }

    #[test]
    fn unicode_at_bit_offset() {
        // "Aé" as UTF-16BE shifted right by four bits.
        let pdu = [0x00, 0x04, 0x10, 0x0E, 0x90];
        assert_eq!(decode_unicode(&pdu, 2, 4), "Aé");
        assert_eq!(decode_unicode(&[0x00, 0x41, 0x00, 0xE9], 2, 0), "Aé");
    }

    #[test]
    fn unicode_surrogate_pair() {
        let out = decode_unicode(&[0xD8, 0x3D, 0xDE, 0x00], 2, 0);
        assert_eq!(out, "😀");
    }

    #[test]
    fn unicode_short_buffer() {
        let out = decode_unicode(&[0x00, 0x41, 0x00], 2, 0);
        assert_eq!(out.as_str(), "A");
        assert_eq!(out.truncation(), Some(&Truncation::Input));
    }

    #[test]
    fn unicode_oversized_count() {
        let out = decode_unicode(&[0x00, 0x41], usize::MAX / 2 + 1, 0);
        assert_eq!(out.as_str(), "A");
        assert_eq!(out.truncation(), Some(&Truncation::Input));

        let out = decode_unicode(&[0x00, 0x41], usize::MAX, usize::MAX - 3);
        assert_eq!(out.as_str(), "");
        assert_eq!(out.truncation(), Some(&Truncation::Input));
    }

    #[test]
    fn unicode_lone_surrogate() {
        let out = decode_unicode(&[0x00, 0x41, 0xDC, 0x00], 2, 0);
        assert_eq!(out.as_str(), "A");
        assert_eq!(
            out.truncation(),
            Some(&Truncation::Coding(UtfError::BadCode))
        );
    }

    #[test]
    fn ascii7_packed_with_offset() {
        // Two fill bits, then "ok!" as septets.
        let pdu = [0x37, 0xEB, 0x42];
        assert_eq!(decode_ascii7_packed(&pdu, 3, 2), "ok!");
    }

    #[test]
    fn ascii7_non_printables_become_space() {
        assert_eq!(decode_ascii7_unpacked(&[0x41, 0x0A, 0x7F, 0xC2], 4, 0), "A  B");
    }

    #[test]
    fn ascii7_unpacked_unaligned() {
        let pdu = [0x04, 0x14, 0x20];
        assert_eq!(decode_ascii7_unpacked(&pdu, 2, 4), "AB");
    }

    #[test]
    fn ascii7_short_buffer() {
        let out = decode_ascii7_unpacked(b"abc", 5, 0);
        assert_eq!(out.as_str(), "abc");
        assert_eq!(out.truncation(), Some(&Truncation::Input));
        assert_eq!(out.to_string(), "abc");
    }

    #[test]
    fn ascii7_oversized_count() {
        let out = decode_ascii7_unpacked(b"abc", 1 << 62, 0);
        assert_eq!(out.as_str(), "abc");
        assert_eq!(out.truncation(), Some(&Truncation::Input));

        let out = decode_ascii7_packed(&[0x91, 0xA4], usize::MAX, 0);
        assert_eq!(out.as_str(), "Hi");
        assert_eq!(out.truncation(), Some(&Truncation::Input));

        let out = decode_ascii7_packed(&[0x91, 0xA4], 2, usize::MAX);
        assert_eq!(out.as_str(), "");
        assert_eq!(out.truncation(), Some(&Truncation::Input));
    }
}
