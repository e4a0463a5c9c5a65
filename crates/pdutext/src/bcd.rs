//! Binary-coded decimal digit strings.
//!
//! GSM address fields store one digit per nibble, low nibble first, with
//! `0xF` as filler after an odd digit count. CDMA stores digits high nibble
//! first and offsets every code by one, so `0x1` is `'1'` and `0xA` is `'0'`.

use alloc::{string::String, vec::Vec};

use crate::{DecodedText, Truncation, bits, buffer::TextBuffer};

/// GSM semi-octet symbols for nibbles `0x0..=0xE`.
const GSM_DIGITS: &[u8; 15] = b"0123456789*#abc";

/// CDMA DTMF symbols for nibbles `0x1..=0xC`.
const CDMA_DIGITS: &[u8; 12] = b"1234567890*#";

const FILLER: u8 = 0x0F;

/// Decodes up to `digits` GSM semi-octets.
///
/// A filler nibble ends the number early and is not an error. The result is
/// marked [`Truncation::Input`] when `pdu` holds fewer than `digits` nibbles.
///
/// ```
/// use pdutext::bcd;
///
/// assert_eq!(bcd::decode_number(&[0x21, 0x43, 0xF5], 6), "12345");
/// ```
#[must_use]
pub fn decode_number(pdu: &[u8], digits: usize) -> DecodedText {
    let mut out = TextBuffer::with_estimate(digits.min(pdu.len().saturating_mul(2)));
    for index in 0..digits {
        let Some(&byte) = pdu.get(index / 2) else {
            out.stop(Truncation::Input);
            break;
        };
        let nibble = if index % 2 == 0 { byte & 0x0F } else { byte >> 4 };
        if nibble == FILLER {
            break;
        }
        if !out.push(char::from(GSM_DIGITS[usize::from(nibble)])) {
            break;
        }
    }
    out.finish()
}

/// Decodes `digits` CDMA DTMF nibbles starting `bit_offset` bits into `pdu`.
///
/// Codes outside `0x1..=0xC` decode as `'x'`.
///
/// ```
/// use pdutext::bcd;
///
/// assert_eq!(bcd::decode_number_cdma(&[0x12, 0xAB, 0xC0], 5, 0), "120*#");
/// ```
#[must_use]
pub fn decode_number_cdma(pdu: &[u8], digits: usize, bit_offset: usize) -> DecodedText {
    let aligned: Vec<u8>;
    let (octets, short) = if bit_offset % 8 == 0 {
        let start = (bit_offset / 8).min(pdu.len());
        let octets = &pdu[start..];
        (octets, octets.len().saturating_mul(2) < digits)
    } else {
        let wanted = digits.div_ceil(2);
        let readable = wanted.min(bits::units_after(pdu, bit_offset, 8));
        let mut buf = Vec::new();
        if buf.try_reserve_exact(readable).is_err() {
            return DecodedText::truncated(String::new(), Truncation::Alloc);
        }
        buf.extend((0..readable).map_while(|i| {
            bits::unit_offset(bit_offset, i, 8)
                .and_then(|bit| bits::read(pdu, bit, 8))
                .and_then(|v| u8::try_from(v).ok())
        }));
        let short = buf.len() < wanted;
        aligned = buf;
        (aligned.as_slice(), short)
    };

    let available = digits.min(octets.len().saturating_mul(2));
    let mut out = TextBuffer::with_estimate(available);
    for index in 0..available {
        let byte = octets[index / 2];
        let nibble = if index % 2 == 0 { byte >> 4 } else { byte & 0x0F };
        let symbol = nibble
            .checked_sub(1)
            .and_then(|code| CDMA_DIGITS.get(usize::from(code)))
            .map_or('x', |&b| char::from(b));
        if !out.push(symbol) {
            break;
        }
    }
    if short {
        out.stop(Truncation::Input);
    }
    out.finish()
}

/// Two-digit value of a swapped semi-octet, as used by GSM timestamps: the low
/// nibble holds the tens. A nibble above 9 contributes nothing.
///
/// ```
/// assert_eq!(pdutext::bcd::decode_semi_octet(0x21), 12);
/// ```
#[must_use]
pub fn decode_semi_octet(byte: u8) -> u8 {
    decimal(byte & 0x0F) * 10 + decimal(byte >> 4)
}

/// Two-digit value of an unswapped semi-octet, as used by CDMA timestamps: the
/// high nibble holds the tens. A nibble above 9 contributes nothing.
#[must_use]
pub fn decode_semi_octet_cdma(byte: u8) -> u8 {
    decimal(byte >> 4) * 10 + decimal(byte & 0x0F)
}

fn decimal(nibble: u8) -> u8 {
    if nibble <= 9 { nibble } else { 0 }
}
