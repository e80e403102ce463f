//! Password generation settings.

/// Weak password length.
pub const LENGTH_WEAK: usize = 6;
/// Acceptable password length.
pub const LENGTH_OK: usize = 12;
/// Strong password length, and the default.
pub const LENGTH_STRONG: usize = 24;
/// Very strong password length.
pub const LENGTH_VERY_STRONG: usize = 36;

/// What kind of password to generate.
///
/// Built once by the caller and only read afterwards. A `length` of zero
/// means [`LENGTH_STRONG`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub length: usize,
    /// Explicit character set; when present the toggles below are not used
    /// to build the set.
    pub character_set: Option<String>,
    /// i.e. `!$%^&*`
    pub include_symbols: bool,
    pub include_numbers: bool,
    pub include_lowercase: bool,
    pub include_uppercase: bool,
    /// Drop look-alikes such as `i`, `l`, `O`, `0` and `1` from the letter
    /// and number classes.
    pub exclude_similar: bool,
    /// Drop hard-to-read punctuation such as `<>[]{}()/|\` from the symbol
    /// class.
    pub exclude_ambiguous: bool,
}

impl Config {
    /// The explicit character set, if one was given and is non-empty.
    pub fn explicit_set(&self) -> Option<&str> {
        self.character_set.as_deref().filter(|s| !s.is_empty())
    }

    pub fn includes_any(&self) -> bool {
        self.include_symbols
            || self.include_numbers
            || self.include_lowercase
            || self.include_uppercase
    }

    /// True when there is nothing to build a character set from.
    pub fn is_empty(&self) -> bool {
        self.explicit_set().is_none() && !self.includes_any()
    }

    pub fn effective_length(&self) -> usize {
        match self.length {
            0 => LENGTH_STRONG,
            n => n,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            length: LENGTH_STRONG,
            character_set: None,
            include_symbols: true,
            include_numbers: true,
            include_lowercase: true,
            include_uppercase: true,
            exclude_similar: true,
            exclude_ambiguous: true,
        }
    }
}
