#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use pdutext::{Coding, GsmOptions, adn, bcd, gsm, packed, to_utf8, transcode};

#[derive(Debug, Arbitrary)]
enum Target {
    GsmPacked { septets: u16, padding: u8, single: u8, locking: u8 },
    GsmUnpacked { single: u8, locking: u8 },
    Bcd { digits: u16 },
    BcdCdma { digits: u16, bit_offset: u8 },
    Ascii7 { chars: u16, bit_offset: u8, packed: bool },
    Unicode { chars: u16, bit_offset: u8 },
    IpAddr { bit_offset: u8 },
    Adn,
    Transcode { from: u8, to: u8, capacity: u16 },
}

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    target: Target,
    pdu: &'a [u8],
}

fn coding(id: u8) -> Coding {
    Coding::ALL[usize::from(id) % Coding::ALL.len()]
}

fuzz_target!(|input: Input<'_>| {
    let pdu = input.pdu;
    let decoded = match input.target {
        Target::GsmPacked { septets, padding, single, locking } => {
            let options = GsmOptions::from_ids(single, locking);
            let septets = usize::from(septets);
            let out = gsm::decode_packed(pdu, septets, usize::from(padding % 8), &options);
            assert!(out.chars().count() <= septets);
            out
        }
        Target::GsmUnpacked { single, locking } => {
            let out = gsm::decode_unpacked(pdu, &GsmOptions::from_ids(single, locking));
            assert!(out.is_complete());
            out
        }
        Target::Bcd { digits } => bcd::decode_number(pdu, usize::from(digits)),
        Target::BcdCdma { digits, bit_offset } => {
            bcd::decode_number_cdma(pdu, usize::from(digits), usize::from(bit_offset))
        }
        Target::Ascii7 { chars, bit_offset, packed: true } => {
            packed::decode_ascii7_packed(pdu, usize::from(chars), usize::from(bit_offset))
        }
        Target::Ascii7 { chars, bit_offset, packed: false } => {
            packed::decode_ascii7_unpacked(pdu, usize::from(chars), usize::from(bit_offset))
        }
        Target::Unicode { chars, bit_offset } => {
            packed::decode_unicode(pdu, usize::from(chars), usize::from(bit_offset))
        }
        Target::IpAddr { bit_offset } => {
            let addr = packed::decode_ip_addr(pdu, usize::from(bit_offset));
            assert_eq!(addr.is_some(), pdu.len() * 8 >= usize::from(bit_offset) + 32);
            return;
        }
        Target::Adn => adn::decode_adn(pdu),
        Target::Transcode { from, to, capacity } => {
            let (from, to) = (coding(from), coding(to));
            let mut buf = vec![0u8; usize::from(capacity)];
            let mut rest = pdu;
            let mut output = buf.as_mut_slice();
            if transcode(from, &mut rest, to, &mut output).is_ok() {
                // Whatever transcodes cleanly must decode cleanly.
                assert!(rest.is_empty());
                assert!(to_utf8(pdu, from).is_complete());
            }
            return;
        }
    };
    // The NUL-terminated form carries the text unchanged.
    let bytes = decoded.clone().into_bytes_with_nul();
    assert_eq!(&bytes[..bytes.len() - 1], decoded.as_bytes());
});
