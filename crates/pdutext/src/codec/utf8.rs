use super::{Codec, scalar};
use crate::UtfError;

/// UTF-8 codec.
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf8;

impl Codec for Utf8 {
    fn decode(input: &[u8]) -> Result<(u32, usize), UtfError> {
        let Some(&lead) = input.first() else {
            return Err(UtfError::Incomplete);
        };

        // (sequence length, payload bits of the lead byte, smallest value
        // that needs this length)
        let (len, mut code_point, min) = match lead {
            0x00..=0x7F => return Ok((u32::from(lead), 1)),
            0xC2..=0xDF => (2, u32::from(lead & 0x1F), 0x80),
            0xE0..=0xEF => (3, u32::from(lead & 0x0F), 0x800),
            0xF0..=0xF4 => (4, u32::from(lead & 0x07), 0x1_0000),
            // Stray continuation bytes, the always-overlong C0/C1, and leads
            // beyond U+10FFFF.
            _ => return Err(UtfError::BadCode),
        };

        if input.len() < len {
            return Err(UtfError::Incomplete);
        }

        for &byte in &input[1..len] {
            if byte & 0xC0 != 0x80 {
                return Err(UtfError::BadCode);
            }
            code_point = (code_point << 6) | u32::from(byte & 0x3F);
        }

        if code_point < min {
            return Err(UtfError::BadCode);
        }
        scalar(code_point)?;

        Ok((code_point, len))
    }

    fn encode(code_point: u32, out: &mut [u8]) -> Result<usize, UtfError> {
        let ch = scalar(code_point)?;
        let len = ch.len_utf8();
        let dst = out.get_mut(..len).ok_or(UtfError::Size)?;
        ch.encode_utf8(dst);
        Ok(len)
    }
}
