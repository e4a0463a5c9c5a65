//! Conversion between Unicode transfer encodings.

use alloc::{string::String, vec::Vec};
use core::mem;

use bstr::ByteSlice;

use crate::{Coding, DecodedText, Truncation, UtfError};

/// Converts code points from `from` to `to` until `input` is exhausted.
///
/// Both cursors advance in place: on return `input` holds the bytes not yet
/// consumed and `output` the space not yet written. On error they point at
/// the code point that failed, so a caller can grow the output after
/// [`UtfError::Size`] and call again to resume.
///
/// ```
/// use pdutext::{Coding, transcode};
///
/// let mut input: &[u8] = &[0x00, 0x48, 0x00, 0x69];
/// let mut buf = [0u8; 8];
/// let mut output: &mut [u8] = &mut buf;
/// transcode(Coding::Utf16Be, &mut input, Coding::Utf8, &mut output).unwrap();
/// let written = 8 - output.len();
/// assert_eq!(&buf[..written], b"Hi");
/// ```
///
/// # Errors
///
/// The first error from decoding the source or encoding the destination.
pub fn transcode(
    from: Coding,
    input: &mut &[u8],
    to: Coding,
    output: &mut &mut [u8],
) -> Result<(), UtfError> {
    while !input.is_empty() {
        let (code_point, read) = from.decode(input)?;
        let written = to.encode(code_point, output)?;
        *input = &input[read..];
        let rest = mem::take(output);
        *output = &mut rest[written..];
    }
    Ok(())
}

/// [`transcode`] with codings resolved by name.
///
/// # Errors
///
/// [`UtfError::BadArg`] or [`UtfError::NoSupport`] when a name does not
/// resolve, otherwise as [`transcode`].
pub fn transcode_by_name(
    from: &str,
    input: &mut &[u8],
    to: &str,
    output: &mut &mut [u8],
) -> Result<(), UtfError> {
    let from = Coding::from_name(from)?;
    let to = Coding::from_name(to)?;
    transcode(from, input, to, output)
}

/// Decodes `input` in `coding` into an owned UTF-8 string.
///
/// The output starts out the size of the input and grows by the input length
/// each time it fills up. Malformed input stops the conversion; the text
/// decoded before that point is returned with [`Truncation::Coding`].
///
/// ```
/// use pdutext::{Coding, to_utf8};
///
/// let text = to_utf8(&[0x4F, 0x60, 0x59, 0x7D], Coding::Utf16Be);
/// assert_eq!(text, "你好");
/// ```
#[must_use]
pub fn to_utf8(input: &[u8], coding: Coding) -> DecodedText {
    let step = input.len().max(4);

    let mut out: Vec<u8> = Vec::new();
    let mut truncation = None;
    let mut written = 0;
    let mut rest = input;
    let mut grow = input.len();

    loop {
        if out.try_reserve_exact(grow).is_err() {
            truncation = Some(Truncation::Alloc);
            break;
        }
        out.resize(out.len() + grow, 0);

        let mut dst = &mut out[written..];
        let before = dst.len();
        let result = transcode(coding, &mut rest, Coding::Utf8, &mut dst);
        written += before - dst.len();

        match result {
            Ok(()) => break,
            Err(UtfError::Size) => {
                grow = step;
                tracing::debug!(written, capacity = out.len() + grow, "growing UTF-8 output");
            }
            Err(err) => {
                truncation = Some(Truncation::Coding(err));
                break;
            }
        }
    }

    out.truncate(written);

    // The UTF-8 encoder only emits well-formed sequences.
    let text = String::from_utf8(out)
        .unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned());
    match truncation {
        None => DecodedText::complete(text),
        Some(reason) => {
            tracing::debug!(%reason, written, "UTF-8 conversion stopped early");
            DecodedText::truncated(text, reason)
        }
    }
}

/// [`to_utf8`] over input terminated by its first NUL unit: a zero byte for
/// UTF-8, an aligned zero 16-bit unit for UTF-16. Input without a NUL unit is
/// used whole.
#[must_use]
pub fn to_utf8_until_nul(input: &[u8], coding: Coding) -> DecodedText {
    let end = match coding {
        Coding::Utf8 => input.find_byte(0),
        Coding::Utf16Be | Coding::Utf16Le => input
            .chunks_exact(2)
            .position(|unit| unit == [0, 0])
            .map(|units| units * 2),
    };
    to_utf8(&input[..end.unwrap_or(input.len())], coding)
}
