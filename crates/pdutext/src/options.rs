use crate::alphabet::{Alphabet, Language};

/// Table selection for the GSM 7-bit decoders.
///
/// The two shifts are chosen independently, as the user data header of an SMS
/// carries separate single-shift and locking-shift information elements.
///
/// # Examples
///
/// ```rust
/// use pdutext::{GsmOptions, Language, gsm};
///
/// let options = GsmOptions {
///     single_shift: Language::Turkish,
///     ..Default::default()
/// };
/// // ESC 0x47 is 'Ğ' in the Turkish single-shift table.
/// let text = gsm::decode_unpacked(&[0x1B, 0x47], &options);
/// assert_eq!(text, "Ğ");
/// ```
///
/// # Default
///
/// Both shifts default to [`Language::Default`], the GSM 7-bit default
/// alphabet and its extension table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GsmOptions {
    /// Language whose table applies to the septet after an escape.
    ///
    /// # Default
    ///
    /// [`Language::Default`]
    pub single_shift: Language,

    /// Language whose table applies to every other septet.
    ///
    /// # Default
    ///
    /// [`Language::Default`]
    pub locking_shift: Language,
}

impl GsmOptions {
    /// Options from raw national language identifiers, as found in a user data
    /// header. Unknown identifiers select the default tables.
    #[must_use]
    pub fn from_ids(single_shift: u8, locking_shift: u8) -> Self {
        Self {
            single_shift: Language::from_id(single_shift),
            locking_shift: Language::from_id(locking_shift),
        }
    }

    pub(crate) fn alphabet(&self) -> Alphabet {
        Alphabet::new(self.single_shift, self.locking_shift)
    }
}

#[cfg(test)]
mod tests {
    use super::GsmOptions;
    use crate::Language;

    #[test]
    fn from_ids_falls_back() {
        let options = GsmOptions::from_ids(2, 200);
        assert_eq!(options.single_shift, Language::Spanish);
        assert_eq!(options.locking_shift, Language::Default);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_defaults_missing_fields() {
        let options: GsmOptions = serde_json::from_str(r#"{"single_shift":"Turkish"}"#).unwrap();
        assert_eq!(options.single_shift, Language::Turkish);
        assert_eq!(options.locking_shift, Language::Default);
    }
}
