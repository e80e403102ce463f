//! Password generation.

use zeroize::Zeroize;

use super::charset;
use crate::config::Config;
use crate::error::Error;
use crate::rand::{self, EntropySource, OsEntropy};

/// Draws passwords from a resolved character set.
///
/// Immutable once built and holds no RNG state, so a single generator can be
/// shared freely between threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generator {
    chars: Vec<char>,
    length: usize,
}

impl Generator {
    /// Resolve the character set for `config`.
    ///
    /// Fails with [`Error::EmptyConfiguration`] when the config names no
    /// character source at all.
    pub fn new(config: &Config) -> Result<Self, Error> {
        if config.is_empty() {
            return Err(Error::EmptyConfiguration);
        }

        let chars = charset::build(config);
        let length = config.effective_length();
        log::debug!(
            "resolved character set of {} chars, length {}",
            chars.len(),
            length
        );

        Ok(Self { chars, length })
    }

    pub fn with_defaults() -> Result<Self, Error> {
        Self::new(&Config::default())
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// The resolved character set as a string.
    pub fn character_set(&self) -> String {
        self.chars.iter().collect()
    }

    /// One password of the configured length.
    pub fn generate(&self) -> Result<String, Error> {
        self.generate_from(&mut OsEntropy, self.length)
    }

    /// `count` passwords of the configured length. Nothing is returned if any
    /// of them fails.
    pub fn generate_many(&self, count: usize) -> Result<Vec<String>, Error> {
        self.generate_many_from(&mut OsEntropy, count, self.length)
    }

    /// Like [`generate`](Self::generate) with a one-off length.
    pub fn generate_with_length(&self, length: usize) -> Result<String, Error> {
        self.generate_from(&mut OsEntropy, length)
    }

    pub fn generate_many_with_length(
        &self,
        count: usize,
        length: usize,
    ) -> Result<Vec<String>, Error> {
        self.generate_many_from(&mut OsEntropy, count, length)
    }

    /// One password drawn from `source`.
    pub fn generate_from<S: EntropySource + ?Sized>(
        &self,
        source: &mut S,
        length: usize,
    ) -> Result<String, Error> {
        // Grows with each draw; `length` is caller-controlled.
        let mut pass = String::new();

        for _ in 0..length {
            match rand::index(source, self.chars.len()) {
                Ok(i) => pass.push(self.chars[i]),
                Err(e) => {
                    pass.zeroize();
                    return Err(e.into());
                }
            }
        }

        Ok(pass)
    }

    /// `count` passwords drawn from `source`. On failure the passwords already
    /// produced are wiped before the error is returned.
    pub fn generate_many_from<S: EntropySource + ?Sized>(
        &self,
        source: &mut S,
        count: usize,
        length: usize,
    ) -> Result<Vec<String>, Error> {
        log::debug!("generating {count} password(s) from {}", source.name());
        let mut passwords = Vec::new();

        for _ in 0..count {
            match self.generate_from(source, length) {
                Ok(pass) => passwords.push(pass),
                Err(e) => {
                    passwords.zeroize();
                    return Err(e);
                }
            }
        }

        Ok(passwords)
    }
}
