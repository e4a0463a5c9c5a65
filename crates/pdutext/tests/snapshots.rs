#![expect(missing_docs)]
#![expect(clippy::needless_raw_string_hashes)]

use core::fmt::Write;

use pdutext::{
    Coding, DecodedText, GsmOptions, Language, alphabet::ESCAPE, gsm, to_utf8, to_utf8_until_nul,
};

/// Two lines of a Tang poem, UTF-16 big-endian.
const POEM_BE: &[u8] = &[
    0x7E, 0xDD, 0x98, 0x76, 0x4E, 0x00, 0x83, 0x05, 0x83, 0x28, 0xFF, 0x0C, //
    0x76, 0xF4, 0x4E, 0x0A, 0x4E, 0x09, 0x53, 0x41, 0x91, 0xCC, 0x30, 0x02, //
    0x00, 0x0A, 0x53, 0xE9, 0x51, 0x73, 0x65, 0xE0, 0x50, 0xEE, 0x4E, 0xC6, //
    0xFF, 0x0C, 0x7A, 0xA5, 0x5B, 0xA4, 0x60, 0xDF, 0x68, 0x48, 0x51, 0xE0, //
    0x30, 0x02, 0x00, 0x0A,
];

/// The same two lines, UTF-16 little-endian.
const POEM_LE: &[u8] = &[
    0xDD, 0x7E, 0x76, 0x98, 0x00, 0x4E, 0x05, 0x83, 0x28, 0x83, 0x0C, 0xFF, //
    0xF4, 0x76, 0x0A, 0x4E, 0x09, 0x4E, 0x41, 0x53, 0xCC, 0x91, 0x02, 0x30, //
    0x0A, 0x00, 0xE9, 0x53, 0x73, 0x51, 0xE0, 0x65, 0xEE, 0x50, 0xC6, 0x4E, //
    0x0C, 0xFF, 0xA5, 0x7A, 0xA4, 0x5B, 0xDF, 0x60, 0x48, 0x68, 0xE0, 0x51, //
    0x02, 0x30, 0x0A, 0x00,
];

fn render(text: &DecodedText) -> String {
    let mut out = String::from(text.trim_end());
    if let Some(reason) = text.truncation() {
        write!(out, "\n-- truncated: {reason}").unwrap();
    }
    out
}

#[test]
fn snapshot_utf16_poem() {
    insta::assert_snapshot!(render(&to_utf8(POEM_BE, Coding::Utf16Be)), @r#"
    绝顶一茅茨，直上三十里。
    叩关无僮仆，窥室惟案几。
    "#);
    insta::assert_snapshot!(render(&to_utf8(POEM_LE, Coding::Utf16Le)), @r#"
    绝顶一茅茨，直上三十里。
    叩关无僮仆，窥室惟案几。
    "#);
}

#[test]
fn snapshot_utf16_truncated_tail() {
    let cut = &POEM_BE[..POEM_BE.len() - 1];
    insta::assert_snapshot!(render(&to_utf8(cut, Coding::Utf16Be)), @r#"
    绝顶一茅茨，直上三十里。
    叩关无僮仆，窥室惟案几。
    -- truncated: transcoding stopped: incomplete code sequence
    "#);

    // A low surrogate with no high surrogate before it.
    let mut broken = vec![0x00, 0x41, 0xDC, 0x00];
    broken.extend_from_slice(POEM_BE);
    insta::assert_snapshot!(render(&to_utf8(&broken, Coding::Utf16Be)), @r#"
    A
    -- truncated: transcoding stopped: invalid code sequence
    "#);
}

#[test]
fn snapshot_utf16_until_nul() {
    let mut terminated = POEM_LE[..24].to_vec();
    terminated.extend_from_slice(&[0x00, 0x00, 0x41, 0x00]);
    insta::assert_snapshot!(render(&to_utf8_until_nul(&terminated, Coding::Utf16Le)), @"绝顶一茅茨，直上三十里。");
}

#[test]
fn snapshot_gsm_packed_with_escapes() {
    // "Price: 5€ {ok}" after one fill bit.
    let pdu = [
        0xA0, 0xF2, 0xF4, 0xB8, 0xAC, 0x03, 0xD5, 0x36, 0x65, 0xD0, 0x06, 0xF5, 0x5E, 0x6F, 0x52,
    ];
    let text = gsm::decode_packed(&pdu, 17, 1, &GsmOptions::default());
    insta::assert_snapshot!(render(&text), @"Price: 5€ {ok}");

    let text = gsm::decode_packed(&pdu, 30, 1, &GsmOptions::default());
    insta::assert_snapshot!(render(&text), @r#"
    Price: 5€ {ok}
    -- truncated: input shorter than declared length
    "#);
}

#[test]
fn snapshot_gsm_latin_glyphs() {
    let text = gsm::decode_gsm7_packed(&[0xE0, 0x60, 0xFF, 0xFD, 0x03], 5, 0);
    insta::assert_snapshot!(render(&text), @"¿Año?");
}

#[test]
fn snapshot_default_extension_table() {
    let options = GsmOptions::default();
    let mut out = String::new();
    for septet in 0u8..0x80 {
        if Language::Default.single_table()[usize::from(septet)].is_none() {
            continue;
        }
        let text = gsm::decode_unpacked(&[ESCAPE, septet], &options);
        writeln!(out, "{septet:#04x} {:?}", text.as_str()).unwrap();
    }
    insta::assert_snapshot!(out, @r#"
    0x0a "\u{c}"
    0x14 "^"
    0x28 "{"
    0x29 "}"
    0x2f "\\"
    0x3c "["
    0x3d "~"
    0x3e "]"
    0x40 "|"
    0x65 "€"
    "#);
}

#[test]
fn snapshot_turkish_locking_letters() {
    let options = GsmOptions {
        locking_shift: Language::Turkish,
        ..GsmOptions::default()
    };
    let septets: Vec<u8> = (0x40..0x80).collect();
    let mut out = String::new();
    for row in septets.chunks(16) {
        writeln!(out, "{}", gsm::decode_unpacked(row, &options)).unwrap();
    }
    insta::assert_snapshot!(out, @r#"
    İABCDEFGHIJKLMNO
    PQRSTUVWXYZÄÖÑÜ§
    çabcdefghijklmno
    pqrstuvwxyzäöñüà
    "#);
}
