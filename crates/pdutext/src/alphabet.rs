//! GSM 03.38 / 3GPP TS 23.038 alphabet tables.
//!
//! A septet is looked up in the *locking-shift* table unless it follows the
//! escape septet `0x1B`, in which case the *single-shift* table applies to
//! that one septet. National language identifiers select regional variants of
//! either table; a language that defines no table for a shift uses the default
//! one.

/// The escape septet that selects the single-shift table for the next septet.
pub const ESCAPE: u8 = 0x1B;

/// Locking-shift table: one glyph per septet. The entry at [`ESCAPE`] is never
/// emitted.
pub type LockingTable = [char; 128];

/// Single-shift table: `None` marks unassigned codes.
pub type SingleTable = [Option<char>; 128];

const ESC: char = '\u{1B}';
const FF: char = '\u{0C}';

/// The GSM 7-bit default alphabet.
pub static DEFAULT_LOCKING: LockingTable = [
    '@', '£', '$', '¥', 'è', 'é', 'ù', 'ì', 'ò', 'Ç', '\n', 'Ø', 'ø', '\r', 'Å', 'å', // 0x00
    'Δ', '_', 'Φ', 'Γ', 'Λ', 'Ω', 'Π', 'Ψ', 'Σ', 'Θ', 'Ξ', ESC, 'Æ', 'æ', 'ß', 'É', // 0x10
    ' ', '!', '"', '#', '¤', '%', '&', '\'', '(', ')', '*', '+', ',', '-', '.', '/', // 0x20
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', ':', ';', '<', '=', '>', '?', // 0x30
    '¡', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', // 0x40
    'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', 'Ä', 'Ö', 'Ñ', 'Ü', '§', // 0x50
    '¿', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', // 0x60
    'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z', 'ä', 'ö', 'ñ', 'ü', 'à', // 0x70
];

/// Turkish national locking-shift table.
pub static TURKISH_LOCKING: LockingTable = [
    '@', '£', '$', '¥', '€', 'é', 'ù', 'ı', 'ò', 'Ç', '\n', 'Ğ', 'ğ', '\r', 'Å', 'å', // 0x00
    'Δ', '_', 'Φ', 'Γ', 'Λ', 'Ω', 'Π', 'Ψ', 'Σ', 'Θ', 'Ξ', ESC, 'Ş', 'ş', 'ß', 'É', // 0x10
    ' ', '!', '"', '#', '¤', '%', '&', '\'', '(', ')', '*', '+', ',', '-', '.', '/', // 0x20
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', ':', ';', '<', '=', '>', '?', // 0x30
    'İ', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', // 0x40
    'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', 'Ä', 'Ö', 'Ñ', 'Ü', '§', // 0x50
    'ç', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', // 0x60
    'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z', 'ä', 'ö', 'ñ', 'ü', 'à', // 0x70
];

/// Portuguese national locking-shift table.
pub static PORTUGUESE_LOCKING: LockingTable = [
    '@', '£', '$', '¥', 'ê', 'é', 'ú', 'í', 'ó', 'ç', '\n', 'Ô', 'ô', '\r', 'Á', 'á', // 0x00
    'Δ', '_', 'ª', 'Ç', 'À', '∞', '^', '\\', '€', 'Ó', '|', ESC, 'Â', 'â', 'Ê', 'É', // 0x10
    ' ', '!', '"', '#', 'º', '%', '&', '\'', '(', ')', '*', '+', ',', '-', '.', '/', // 0x20
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', ':', ';', '<', '=', '>', '?', // 0x30
    'Í', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', // 0x40
    'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', 'Ã', 'Õ', 'Ú', 'Ü', '§', // 0x50
    '~', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', // 0x60
    'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z', 'ã', 'õ', '`', 'ü', 'à', // 0x70
];

const fn single_shift<const N: usize>(entries: [(u8, char); N]) -> SingleTable {
    let mut table = [None; 128];
    let mut i = 0;
    while i < N {
        let (code, ch) = entries[i];
        table[code as usize] = Some(ch);
        i += 1;
    }
    table
}

/// The GSM 7-bit default alphabet extension table.
pub static DEFAULT_SINGLE: SingleTable = single_shift([
    (0x0A, FF),
    (0x14, '^'),
    (0x28, '{'),
    (0x29, '}'),
    (0x2F, '\\'),
    (0x3C, '['),
    (0x3D, '~'),
    (0x3E, ']'),
    (0x40, '|'),
    (0x65, '€'),
]);

/// Turkish national single-shift table.
pub static TURKISH_SINGLE: SingleTable = single_shift([
    (0x0A, FF),
    (0x14, '^'),
    (0x28, '{'),
    (0x29, '}'),
    (0x2F, '\\'),
    (0x3C, '['),
    (0x3D, '~'),
    (0x3E, ']'),
    (0x40, '|'),
    (0x47, 'Ğ'),
    (0x49, 'İ'),
    (0x53, 'Ş'),
    (0x63, 'ç'),
    (0x65, '€'),
    (0x67, 'ğ'),
    (0x69, 'ı'),
    (0x73, 'ş'),
]);

/// Spanish national single-shift table.
pub static SPANISH_SINGLE: SingleTable = single_shift([
    (0x09, 'ç'),
    (0x0A, FF),
    (0x14, '^'),
    (0x28, '{'),
    (0x29, '}'),
    (0x2F, '\\'),
    (0x3C, '['),
    (0x3D, '~'),
    (0x3E, ']'),
    (0x40, '|'),
    (0x41, 'Á'),
    (0x49, 'Í'),
    (0x4F, 'Ó'),
    (0x55, 'Ú'),
    (0x61, 'á'),
    (0x65, '€'),
    (0x69, 'í'),
    (0x6F, 'ó'),
    (0x75, 'ú'),
]);

/// Portuguese national single-shift table.
pub static PORTUGUESE_SINGLE: SingleTable = single_shift([
    (0x05, 'ê'),
    (0x09, 'ç'),
    (0x0A, FF),
    (0x0B, 'Ô'),
    (0x0C, 'ô'),
    (0x0E, 'Á'),
    (0x0F, 'á'),
    (0x12, 'Φ'),
    (0x13, 'Γ'),
    (0x14, '^'),
    (0x15, 'Ω'),
    (0x16, 'Π'),
    (0x17, 'Ψ'),
    (0x18, 'Σ'),
    (0x19, 'Θ'),
    (0x1F, 'Ê'),
    (0x28, '{'),
    (0x29, '}'),
    (0x2F, '\\'),
    (0x3C, '['),
    (0x3D, '~'),
    (0x3E, ']'),
    (0x40, '|'),
    (0x41, 'À'),
    (0x49, 'Í'),
    (0x4F, 'Ó'),
    (0x55, 'Ú'),
    (0x5B, 'Ã'),
    (0x5C, 'Õ'),
    (0x61, 'Â'),
    (0x65, '€'),
    (0x69, 'í'),
    (0x6F, 'ó'),
    (0x75, 'ú'),
    (0x7B, 'ã'),
    (0x7C, 'õ'),
    (0x7F, 'â'),
]);

/// 3GPP TS 23.038 national language identifiers range over `0..=13`.
const MAX_LANGUAGE_ID: u8 = 13;

/// National language whose shift tables a decoder should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Language {
    /// The GSM 7-bit default alphabet.
    #[default]
    Default,
    /// Turkish, identifier `1`.
    Turkish,
    /// Spanish, identifier `2`. Defines a single-shift table only.
    Spanish,
    /// Portuguese, identifier `3`.
    Portuguese,
}

impl Language {
    /// Maps a national language identifier to a supported language.
    ///
    /// Identifiers outside the 3GPP range, and languages whose tables are not
    /// provided here, fall back to [`Language::Default`].
    #[must_use]
    pub fn from_id(id: u8) -> Self {
        match id {
            0 => Language::Default,
            1 => Language::Turkish,
            2 => Language::Spanish,
            3 => Language::Portuguese,
            4..=MAX_LANGUAGE_ID => {
                tracing::debug!(id, "no tables for national language, using default");
                Language::Default
            }
            _ => {
                tracing::debug!(id, "national language identifier out of range");
                Language::Default
            }
        }
    }

    /// The 3GPP national language identifier.
    #[must_use]
    pub const fn id(self) -> u8 {
        match self {
            Language::Default => 0,
            Language::Turkish => 1,
            Language::Spanish => 2,
            Language::Portuguese => 3,
        }
    }

    /// Locking-shift table of this language, or the default one.
    #[must_use]
    pub fn locking_table(self) -> &'static LockingTable {
        match self {
            Language::Turkish => &TURKISH_LOCKING,
            Language::Portuguese => &PORTUGUESE_LOCKING,
            Language::Default | Language::Spanish => &DEFAULT_LOCKING,
        }
    }

    /// Single-shift table of this language.
    #[must_use]
    pub fn single_table(self) -> &'static SingleTable {
        match self {
            Language::Default => &DEFAULT_SINGLE,
            Language::Turkish => &TURKISH_SINGLE,
            Language::Spanish => &SPANISH_SINGLE,
            Language::Portuguese => &PORTUGUESE_SINGLE,
        }
    }
}

/// A resolved pair of shift tables.
#[derive(Debug, Clone, Copy)]
pub struct Alphabet {
    locking: &'static LockingTable,
    single: &'static SingleTable,
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::new(Language::Default, Language::Default)
    }
}

impl Alphabet {
    /// Combines the single-shift table of one language with the locking-shift
    /// table of another.
    #[must_use]
    pub fn new(single_shift: Language, locking_shift: Language) -> Self {
        Self {
            locking: locking_shift.locking_table(),
            single: single_shift.single_table(),
        }
    }

    /// Glyph for a septet outside an escape. Only the low seven bits are used.
    #[inline]
    #[must_use]
    pub fn locking(&self, septet: u8) -> char {
        self.locking[usize::from(septet & 0x7F)]
    }

    /// Glyph for a septet following an escape; unassigned codes read as a
    /// space.
    #[inline]
    #[must_use]
    pub fn single(&self, septet: u8) -> char {
        match self.single[usize::from(septet & 0x7F)] {
            Some(ch) => ch,
            None => {
                tracing::trace!(septet, "unassigned escape sequence, substituting space");
                ' '
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{Alphabet, DEFAULT_LOCKING, ESCAPE, Language};

    #[test]
    fn default_table_spot_checks() {
        let abc = Alphabet::default();
        assert_eq!(abc.locking(0x00), '@');
        assert_eq!(abc.locking(0x41), 'A');
        assert_eq!(abc.locking(0x7F), 'à');
        assert_eq!(abc.locking(0x24), '¤');
        assert_eq!(abc.single(0x65), '€');
        assert_eq!(abc.single(0x3C), '[');
        assert_eq!(abc.single(0x0A), '\u{0C}');
    }

    #[test]
    fn unassigned_escape_is_space() {
        let abc = Alphabet::default();
        assert_eq!(abc.single(0x41), ' ');
        assert_eq!(abc.single(ESCAPE), ' ');
    }

    #[test]
    fn locking_table_is_ascii_for_letters_and_digits() {
        for ch in ('A'..='Z').chain('a'..='z').chain('0'..='9') {
            assert_eq!(DEFAULT_LOCKING[ch as usize], ch);
        }
    }

    #[rstest]
    #[case(0, Language::Default)]
    #[case(1, Language::Turkish)]
    #[case(2, Language::Spanish)]
    #[case(3, Language::Portuguese)]
    #[case(4, Language::Default)]
    #[case(13, Language::Default)]
    #[case(14, Language::Default)]
    #[case(255, Language::Default)]
    fn language_ids(#[case] id: u8, #[case] expected: Language) {
        assert_eq!(Language::from_id(id), expected);
    }

    #[rstest]
    #[case(Language::Turkish, 0x47, 'Ğ')]
    #[case(Language::Turkish, 0x69, 'ı')]
    #[case(Language::Spanish, 0x41, 'Á')]
    #[case(Language::Spanish, 0x09, 'ç')]
    #[case(Language::Portuguese, 0x5B, 'Ã')]
    #[case(Language::Portuguese, 0x7F, 'â')]
    fn regional_single_shift(#[case] lang: Language, #[case] septet: u8, #[case] expected: char) {
        let abc = Alphabet::new(lang, Language::Default);
        assert_eq!(abc.single(septet), expected);
        assert_eq!(abc.locking(septet), DEFAULT_LOCKING[usize::from(septet)]);
    }

    #[rstest]
    #[case(Language::Turkish, 0x07, 'ı')]
    #[case(Language::Turkish, 0x60, 'ç')]
    #[case(Language::Portuguese, 0x16, '^')]
    #[case(Language::Portuguese, 0x60, '~')]
    #[case(Language::Spanish, 0x60, '¿')]
    fn regional_locking_shift(#[case] lang: Language, #[case] septet: u8, #[case] expected: char) {
        let abc = Alphabet::new(Language::Default, lang);
        assert_eq!(abc.locking(septet), expected);
    }

    #[test]
    fn every_locking_table_keeps_escape_slot() {
        for lang in [Language::Default, Language::Turkish, Language::Spanish, Language::Portuguese] {
            assert_eq!(lang.locking_table()[usize::from(ESCAPE)], '\u{1B}');
            assert_eq!(Language::from_id(lang.id()), lang);
        }
    }
}
