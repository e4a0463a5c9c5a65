use super::{Codec, scalar};
use crate::UtfError;

#[derive(Copy, Clone)]
enum Endianness {
    BigEndian,
    LittleEndian,
}

impl Endianness {
    #[inline]
    const fn read(self, bytes: [u8; 2]) -> u16 {
        match self {
            Endianness::BigEndian => u16::from_be_bytes(bytes),
            Endianness::LittleEndian => u16::from_le_bytes(bytes),
        }
    }

    #[inline]
    const fn write(self, unit: u16) -> [u8; 2] {
        match self {
            Endianness::BigEndian => unit.to_be_bytes(),
            Endianness::LittleEndian => unit.to_le_bytes(),
        }
    }
}

/// UTF-16 codec, big-endian byte order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf16Be;

/// UTF-16 codec, little-endian byte order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf16Le;

impl Codec for Utf16Be {
    fn decode(input: &[u8]) -> Result<(u32, usize), UtfError> {
        decode(Endianness::BigEndian, input)
    }

    fn encode(code_point: u32, out: &mut [u8]) -> Result<usize, UtfError> {
        encode(Endianness::BigEndian, code_point, out)
    }
}

impl Codec for Utf16Le {
    fn decode(input: &[u8]) -> Result<(u32, usize), UtfError> {
        decode(Endianness::LittleEndian, input)
    }

    fn encode(code_point: u32, out: &mut [u8]) -> Result<usize, UtfError> {
        encode(Endianness::LittleEndian, code_point, out)
    }
}

fn unit_at(order: Endianness, input: &[u8], index: usize) -> Option<u16> {
    match input.get(index..index + 2)? {
        &[a, b] => Some(order.read([a, b])),
        _ => None,
    }
}

fn decode(order: Endianness, input: &[u8]) -> Result<(u32, usize), UtfError> {
    let high = unit_at(order, input, 0).ok_or(UtfError::Incomplete)?;
    match high {
        0xD800..=0xDBFF => {
            let low = unit_at(order, input, 2).ok_or(UtfError::Incomplete)?;
            if !(0xDC00..=0xDFFF).contains(&low) {
                return Err(UtfError::BadCode);
            }
            let code_point =
                ((u32::from(high) - 0xD800) << 10) + (u32::from(low) - 0xDC00) + 0x1_0000;
            Ok((code_point, 4))
        }
        // A low surrogate may only follow a high one.
        0xDC00..=0xDFFF => Err(UtfError::BadCode),
        _ => Ok((u32::from(high), 2)),
    }
}

fn encode(order: Endianness, code_point: u32, out: &mut [u8]) -> Result<usize, UtfError> {
    let ch = scalar(code_point)?;
    let mut units = [0u16; 2];
    let units = ch.encode_utf16(&mut units);
    let len = units.len() * 2;
    let dst = out.get_mut(..len).ok_or(UtfError::Size)?;
    for (pair, &unit) in dst.chunks_exact_mut(2).zip(units.iter()) {
        pair.copy_from_slice(&order.write(unit));
    }
    Ok(len)
}
