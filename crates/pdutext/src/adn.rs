//! SIM phonebook alpha identifiers.
//!
//! An abbreviated dialling number record names its entry in one of four
//! encodings, selected by the first byte:
//!
//! | tag    | layout                                   | encoding             |
//! |--------|------------------------------------------|----------------------|
//! | `0x80` | tag, units...                            | UCS-2 big-endian     |
//! | `0x81` | tag, count, base >> 7, bytes...          | mixed GSM / UCS-2    |
//! | `0x82` | tag, count, base (16 bits), bytes...     | mixed GSM / UCS-2    |
//! | other  | bytes...                                 | GSM 7-bit, unpacked  |
//!
//! Unused trailing space in a record is filled with `0xFF`.

use crate::{Coding, DecodedText, buffer::TextBuffer, gsm::decode_gsm8_unpacked, to_utf8};

const UCS2_TAG: u8 = 0x80;
const UCS2_SHIFTED_BASE_TAG: u8 = 0x81;
const UCS2_FULL_BASE_TAG: u8 = 0x82;
const FILLER: u8 = 0xFF;

/// Decodes UCS-2 big-endian units, ignoring trailing `0xFFFF` filler and a
/// dangling odd byte.
///
/// ```
/// use pdutext::adn;
///
/// assert_eq!(adn::decode_ucs16be(&[0x04, 0x10, 0x04, 0x3D, 0xFF, 0xFF]), "Ан");
/// ```
#[must_use]
pub fn decode_ucs16be(data: &[u8]) -> DecodedText {
    let mut units = &data[..data.len() & !1];
    while let [rest @ .., FILLER, FILLER] = units {
        units = rest;
    }
    to_utf8(units, Coding::Utf16Be)
}

/// Decodes the mixed alphabet of `0x81`/`0x82` records.
///
/// A byte with the high bit set is the character `base + (byte & 0x7F)`; a
/// value that is not a Unicode scalar becomes a space. Runs of bytes without
/// the high bit are GSM 7-bit default alphabet text.
///
/// ```
/// use pdutext::adn;
///
/// // Cyrillic page at 0x0400: "Б" then GSM "-1".
/// assert_eq!(adn::decode_ucs2(&[0x91, 0x2D, 0x31], 0x0400), "Б-1");
/// ```
#[must_use]
pub fn decode_ucs2(data: &[u8], base: u16) -> DecodedText {
    let mut out = TextBuffer::with_estimate(data.len());
    let mut rest = data;
    while let [first, tail @ ..] = rest {
        if first & 0x80 != 0 {
            let code = u32::from(base) + u32::from(first & 0x7F);
            let ch = char::from_u32(code).unwrap_or_else(|| {
                tracing::trace!(code, "UCS-2 unit is not a scalar value");
                ' '
            });
            if !out.push(ch) {
                break;
            }
            rest = tail;
            continue;
        }
        let run = rest.iter().position(|b| b & 0x80 != 0).unwrap_or(rest.len());
        if !out.append(decode_gsm8_unpacked(&rest[..run])) {
            break;
        }
        rest = &rest[run..];
    }
    out.finish()
}

/// Decodes an ADN alpha identifier, dispatching on its tag byte.
///
/// The character count of `0x81`/`0x82` records is clamped to the bytes
/// present. An empty record decodes to an empty string.
#[must_use]
pub fn decode_adn(pdu: &[u8]) -> DecodedText {
    match pdu {
        [] => DecodedText::default(),
        [UCS2_TAG, units @ ..] => decode_ucs16be(units),
        [UCS2_SHIFTED_BASE_TAG, count, page, data @ ..] => {
            decode_ucs2(take(data, *count), u16::from(*page) << 7)
        }
        [UCS2_FULL_BASE_TAG, count, hi, lo, data @ ..] => {
            decode_ucs2(take(data, *count), u16::from_be_bytes([*hi, *lo]))
        }
        _ => {
            let end = pdu.iter().rposition(|&b| b != FILLER).map_or(0, |i| i + 1);
            decode_gsm8_unpacked(&pdu[..end])
        }
    }
}

fn take(data: &[u8], count: u8) -> &[u8] {
    &data[..data.len().min(usize::from(count))]
}
