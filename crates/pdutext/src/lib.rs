//! Text codecs for SMS and CDMA PDU fields.
//!
//! The crate converts the byte- and bit-packed text encodings found in
//! telephony payloads into UTF-8, and transcodes between UTF-8 and UTF-16:
//!
//! - [`gsm`]: GSM 7-bit text, packed or one septet per byte, with national
//!   language shift tables selected through [`GsmOptions`].
//! - [`bcd`]: semi-octet digit strings in GSM and CDMA layouts.
//! - [`packed`]: CDMA bearer-data fields at arbitrary bit offsets.
//! - [`adn`]: SIM phonebook alpha identifiers.
//! - [`transcode`] and [`to_utf8`]: strict conversion between [`Coding`]s.
//!
//! Decoders are lenient and return [`DecodedText`], which keeps whatever was
//! decoded before an early stop and reports why in
//! [`DecodedText::truncation`]. Only the strict transcoder returns errors.
//!
//! ```rust
//! use pdutext::{GsmOptions, gsm};
//!
//! let text = gsm::decode_packed(&[0xC8, 0x74, 0x08], 3, 0, &GsmOptions::default());
//! assert_eq!(text, "Hi!");
//! assert!(text.is_complete());
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod adn;
pub mod alphabet;
pub mod bcd;
pub mod bits;
pub mod codec;
pub mod gsm;
pub mod packed;

mod buffer;
mod error;
mod options;
mod transcode;

#[cfg(test)]
mod tests;

pub use alphabet::{Alphabet, Language};
pub use buffer::{DecodedText, Truncation};
pub use codec::{Codec, Coding};
pub use error::UtfError;
pub use options::GsmOptions;
pub use transcode::{to_utf8, to_utf8_until_nul, transcode, transcode_by_name};
