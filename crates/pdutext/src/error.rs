use bstr::BString;
use thiserror::Error;

/// Failure of a strict UTF transcoding step.
///
/// Alphabet-table decoders never produce these; they degrade to spaces
/// instead. See [`crate::Truncation`] for how a stopped conversion is reported
/// by the owning decoders.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UtfError {
    /// An argument was unusable, e.g. an empty coding name.
    #[error("bad argument: {0}")]
    BadArg(&'static str),
    /// The requested coding is not one of UTF-8, UTF-16BE, UTF-16LE.
    #[error("unsupported coding {0:?}")]
    NoSupport(BString),
    /// Malformed byte sequence or a code point that cannot be represented.
    #[error("invalid code sequence")]
    BadCode,
    /// The input ends in the middle of a multi-byte sequence.
    #[error("incomplete code sequence")]
    Incomplete,
    /// The output buffer cannot hold the next encoded code point.
    #[error("output buffer too small")]
    Size,
}
