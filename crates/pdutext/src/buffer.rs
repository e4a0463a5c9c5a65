//! Owned decoder output and its growth policy.
//!
//! Every decoder writes into a [`TextBuffer`], which is pre-sized from the
//! caller's length field and grows by that same estimate whenever it runs
//! low. Growth goes through `try_reserve`, so an allocation failure ends the
//! decode with whatever text was produced so far instead of aborting.

use alloc::{string::String, vec::Vec};
use core::{fmt, ops::Deref};

use crate::UtfError;

/// Room kept free before every push: the longest UTF-8 sequence.
const MAX_CHAR_BYTES: usize = 4;

/// Why a decoder stopped before consuming everything it was asked to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Truncation {
    /// The declared length ran past the end of the input buffer.
    Input,
    /// Growing the output buffer failed.
    Alloc,
    /// Strict UTF transcoding hit an error.
    Coding(UtfError),
}

impl fmt::Display for Truncation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Truncation::Input => f.write_str("input shorter than declared length"),
            Truncation::Alloc => f.write_str("out of memory growing output"),
            Truncation::Coding(err) => write!(f, "transcoding stopped: {err}"),
        }
    }
}

/// Text produced by a decoder.
///
/// Decoders are best-effort: when they stop early, the text decoded up to that
/// point is kept and [`DecodedText::truncation`] says why.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct DecodedText {
    text: String,
    truncation: Option<Truncation>,
}

impl DecodedText {
    /// Complete text.
    #[must_use]
    pub fn complete(text: String) -> Self {
        Self {
            text,
            truncation: None,
        }
    }

    pub(crate) fn truncated(text: String, reason: Truncation) -> Self {
        Self {
            text,
            truncation: Some(reason),
        }
    }

    /// The decoded text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Why decoding stopped early, if it did.
    #[must_use]
    pub fn truncation(&self) -> Option<&Truncation> {
        self.truncation.as_ref()
    }

    /// `true` when the whole input was decoded.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.truncation.is_none()
    }

    /// Takes the text, discarding the truncation signal.
    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }

    /// The text as a NUL-terminated byte vector for C-style consumers.
    #[must_use]
    pub fn into_bytes_with_nul(self) -> Vec<u8> {
        let mut bytes = self.text.into_bytes();
        bytes.push(0);
        bytes
    }
}

impl Deref for DecodedText {
    type Target = str;

    fn deref(&self) -> &str {
        &self.text
    }
}

impl AsRef<str> for DecodedText {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl PartialEq<str> for DecodedText {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

impl PartialEq<&str> for DecodedText {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

impl From<DecodedText> for String {
    fn from(value: DecodedText) -> Self {
        value.text
    }
}

impl fmt::Debug for DecodedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.truncation {
            None => fmt::Debug::fmt(&self.text, f),
            Some(reason) => write!(f, "{:?} (truncated: {reason})", self.text),
        }
    }
}

impl fmt::Display for DecodedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Growable output with a fixed, input-proportional growth step.
#[derive(Debug)]
pub(crate) struct TextBuffer {
    text: String,
    increment: usize,
    truncation: Option<Truncation>,
}

impl TextBuffer {
    /// Reserves room for `estimate` bytes; later growth adds the same amount.
    pub(crate) fn with_estimate(estimate: usize) -> Self {
        let increment = estimate.max(MAX_CHAR_BYTES);
        let mut text = String::new();
        let truncation = match text.try_reserve_exact(estimate) {
            Ok(()) => None,
            Err(_) => {
                tracing::debug!(estimate, "initial output reservation failed");
                Some(Truncation::Alloc)
            }
        };
        Self {
            text,
            increment,
            truncation,
        }
    }

    /// `false` once decoding must stop.
    #[inline]
    pub(crate) fn is_open(&self) -> bool {
        self.truncation.is_none()
    }

    fn ensure_room(&mut self, additional: usize) -> bool {
        if !self.is_open() {
            return false;
        }
        if self.text.capacity() - self.text.len() >= additional {
            return true;
        }
        let step = self.increment.max(additional);
        match self.text.try_reserve_exact(step) {
            Ok(()) => {
                tracing::debug!(
                    len = self.text.len(),
                    capacity = self.text.capacity(),
                    "grew output buffer"
                );
                true
            }
            Err(_) => {
                self.stop(Truncation::Alloc);
                false
            }
        }
    }

    /// Appends one character. Returns `false` when the buffer could not grow.
    pub(crate) fn push(&mut self, ch: char) -> bool {
        if !self.ensure_room(MAX_CHAR_BYTES) {
            return false;
        }
        self.text.push(ch);
        true
    }

    /// Appends a fragment. Returns `false` when the buffer could not grow.
    pub(crate) fn push_str(&mut self, fragment: &str) -> bool {
        if !self.ensure_room(fragment.len()) {
            return false;
        }
        self.text.push_str(fragment);
        true
    }

    /// Appends another decoder's output, inheriting its truncation.
    pub(crate) fn append(&mut self, other: DecodedText) -> bool {
        if !self.push_str(&other.text) {
            return false;
        }
        if let Some(reason) = other.truncation {
            self.stop(reason);
            return false;
        }
        true
    }

    /// Records why decoding stops. The first reason wins.
    pub(crate) fn stop(&mut self, reason: Truncation) {
        if self.truncation.is_none() {
            tracing::debug!(%reason, decoded = self.text.len(), "decoding stopped early");
            self.truncation = Some(reason);
        }
    }

    pub(crate) fn finish(self) -> DecodedText {
        DecodedText {
            text: self.text,
            truncation: self.truncation,
        }
    }
}
