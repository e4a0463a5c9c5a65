//! Code-point codecs for the Unicode transfer encodings.
//!
//! Each encoding is a zero-sized type implementing [`Codec`]. [`Coding`] is
//! the closed set of supported encodings and dispatches to them with a
//! `match`, so the transcoder never goes through a vtable.

mod utf16;
mod utf8;

use bstr::BString;

pub use utf8::Utf8;
pub use utf16::{Utf16Be, Utf16Le};

use crate::UtfError;

/// Converts single code points to and from one transfer encoding.
pub trait Codec {
    /// Decodes the code point at the start of `input`.
    ///
    /// Returns the code point and the number of bytes it occupied.
    ///
    /// # Errors
    ///
    /// [`UtfError::Incomplete`] when `input` ends inside the sequence,
    /// [`UtfError::BadCode`] when the bytes are malformed or name a value that
    /// is not a Unicode scalar.
    fn decode(input: &[u8]) -> Result<(u32, usize), UtfError>;

    /// Encodes `code_point` at the start of `out`, returning the number of
    /// bytes written. Nothing is written on error.
    ///
    /// # Errors
    ///
    /// [`UtfError::BadCode`] for surrogates and values above `0x10FFFF`,
    /// [`UtfError::Size`] when `out` is too short.
    fn encode(code_point: u32, out: &mut [u8]) -> Result<usize, UtfError>;
}

pub(crate) fn scalar(code_point: u32) -> Result<char, UtfError> {
    char::from_u32(code_point).ok_or(UtfError::BadCode)
}

/// A supported Unicode transfer encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Coding {
    /// UTF-8, identifier `0`.
    Utf8,
    /// UTF-16, big-endian, identifier `1`.
    Utf16Be,
    /// UTF-16, little-endian, identifier `2`.
    Utf16Le,
}

impl Coding {
    /// All supported codings, in identifier order.
    pub const ALL: [Coding; 3] = [Coding::Utf8, Coding::Utf16Be, Coding::Utf16Le];

    /// UTF-16 in the byte order of the target platform.
    #[cfg(target_endian = "big")]
    pub const UTF16_NATIVE: Coding = Coding::Utf16Be;
    /// UTF-16 in the byte order of the target platform.
    #[cfg(target_endian = "little")]
    pub const UTF16_NATIVE: Coding = Coding::Utf16Le;

    /// Numeric identifier of this coding.
    #[must_use]
    pub const fn id(self) -> i32 {
        match self {
            Coding::Utf8 => 0,
            Coding::Utf16Be => 1,
            Coding::Utf16Le => 2,
        }
    }

    /// Canonical display name, matched case-insensitively by
    /// [`Coding::from_name`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Coding::Utf8 => "UTF8",
            Coding::Utf16Be => "UTF16BE",
            Coding::Utf16Le => "UTF16LE",
        }
    }

    /// Looks a coding up by identifier.
    ///
    /// # Errors
    ///
    /// [`UtfError::NoSupport`] for unknown identifiers.
    pub fn from_id(id: i32) -> Result<Self, UtfError> {
        Self::ALL
            .into_iter()
            .find(|coding| coding.id() == id)
            .ok_or_else(|| UtfError::NoSupport(BString::from(alloc::format!("#{id}"))))
    }

    /// Looks a coding up by name, ignoring ASCII case.
    ///
    /// # Errors
    ///
    /// [`UtfError::BadArg`] for an empty name, [`UtfError::NoSupport`] when no
    /// coding has that name.
    pub fn from_name(name: impl AsRef<[u8]>) -> Result<Self, UtfError> {
        let name = name.as_ref();
        if name.is_empty() {
            return Err(UtfError::BadArg("empty coding name"));
        }
        Self::ALL
            .into_iter()
            .find(|coding| coding.name().as_bytes().eq_ignore_ascii_case(name))
            .ok_or_else(|| UtfError::NoSupport(BString::from(name)))
    }

    /// Resolves a coding from an identifier, a name, or both. The identifier
    /// wins when it names a known coding; otherwise the name is tried.
    ///
    /// # Errors
    ///
    /// [`UtfError::BadArg`] when neither is given, otherwise the error of the
    /// last lookup attempted.
    pub fn lookup(id: Option<i32>, name: Option<&[u8]>) -> Result<Self, UtfError> {
        let by_id = id.map(Self::from_id);
        match (by_id, name) {
            (Some(Ok(coding)), _) => Ok(coding),
            (_, Some(name)) => Self::from_name(name),
            (Some(Err(err)), None) => Err(err),
            (None, None) => Err(UtfError::BadArg("no coding identifier or name")),
        }
    }

    /// Decodes one code point with this coding. See [`Codec::decode`].
    ///
    /// # Errors
    ///
    /// As [`Codec::decode`].
    pub fn decode(self, input: &[u8]) -> Result<(u32, usize), UtfError> {
        match self {
            Coding::Utf8 => Utf8::decode(input),
            Coding::Utf16Be => Utf16Be::decode(input),
            Coding::Utf16Le => Utf16Le::decode(input),
        }
    }

    /// Encodes one code point with this coding. See [`Codec::encode`].
    ///
    /// # Errors
    ///
    /// As [`Codec::encode`].
    pub fn encode(self, code_point: u32, out: &mut [u8]) -> Result<usize, UtfError> {
        match self {
            Coding::Utf8 => Utf8::encode(code_point, out),
            Coding::Utf16Be => Utf16Be::encode(code_point, out),
            Coding::Utf16Le => Utf16Le::encode(code_point, out),
        }
    }
}

impl core::fmt::Display for Coding {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
