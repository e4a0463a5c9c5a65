//! GSM 7-bit text decoders.
//!
//! Both decoders share the same escape handling: the escape septet `0x1B`
//! produces no output and switches the *next* septet to the single-shift
//! table. An escape followed by an unassigned code becomes a space, and an
//! escape at the very end of the input is dropped. Neither case is an error.

use crate::{
    DecodedText, GsmOptions, Truncation,
    alphabet::{Alphabet, ESCAPE},
    bits,
    buffer::TextBuffer,
};

/// Feeds septets through the shift tables into a [`TextBuffer`].
struct SeptetDecoder {
    alphabet: Alphabet,
    escaped: bool,
    out: TextBuffer,
}

impl SeptetDecoder {
    fn new(options: &GsmOptions, estimate: usize) -> Self {
        Self {
            alphabet: options.alphabet(),
            escaped: false,
            out: TextBuffer::with_estimate(estimate),
        }
    }

    /// Returns `false` once the output can no longer grow.
    fn feed(&mut self, septet: u8) -> bool {
        if self.escaped {
            self.escaped = false;
            return self.out.push(self.alphabet.single(septet));
        }
        if septet & 0x7F == ESCAPE {
            self.escaped = true;
            return true;
        }
        self.out.push(self.alphabet.locking(septet))
    }

    fn finish(self) -> DecodedText {
        self.out.finish()
    }
}

/// Decodes `septets` GSM 7-bit septets packed LSB-first, skipping
/// `padding_bits` fill bits at the start of `pdu`.
///
/// When `pdu` is too short for the requested septet count, the septets that
/// are present are decoded and the result carries [`Truncation::Input`].
///
/// ```
/// use pdutext::{GsmOptions, gsm};
///
/// let text = gsm::decode_packed(&[0xE8, 0x32, 0x9B, 0xFD, 0x06], 5, 0, &GsmOptions::default());
/// assert_eq!(text, "hello");
/// ```
#[must_use]
pub fn decode_packed(
    pdu: &[u8],
    septets: usize,
    padding_bits: usize,
    options: &GsmOptions,
) -> DecodedText {
    let available = bits::units_after(pdu, padding_bits, 7);
    let mut decoder = SeptetDecoder::new(options, septets.min(available));
    for index in 0..septets {
        let septet = bits::unit_offset(padding_bits, index, 7)
            .and_then(|bit| bits::read_septet_lsb(pdu, bit));
        let Some(septet) = septet else {
            decoder.out.stop(Truncation::Input);
            break;
        };
        if !decoder.feed(septet) {
            break;
        }
    }
    decoder.finish()
}

/// Decodes GSM 7-bit text stored one septet per byte; the high bit of each
/// byte is ignored.
#[must_use]
pub fn decode_unpacked(pdu: &[u8], options: &GsmOptions) -> DecodedText {
    let mut decoder = SeptetDecoder::new(options, pdu.len());
    for &byte in pdu {
        if !decoder.feed(byte & 0x7F) {
            break;
        }
    }
    decoder.finish()
}

/// [`decode_packed`] with the default alphabet.
#[must_use]
pub fn decode_gsm7_packed(pdu: &[u8], septets: usize, padding_bits: usize) -> DecodedText {
    decode_packed(pdu, septets, padding_bits, &GsmOptions::default())
}

/// [`decode_unpacked`] with the default alphabet.
#[must_use]
pub fn decode_gsm8_unpacked(pdu: &[u8]) -> DecodedText {
    decode_unpacked(pdu, &GsmOptions::default())
}
