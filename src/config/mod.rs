//! Configuration module
//!
//! Resolves the cipher tokens from the command line into an immutable `Config`
//! and loads the input data from file when none was given inline

pub mod input;
pub mod parse;

use crate::system::System;
use std::fmt;
use std::path::PathBuf;

/// Whether to encrypt or decrypt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Encrypt,
    Decrypt,
}

impl Mode {
    /// `"dec"` selects decryption; anything else encrypts
    #[must_use]
    #[inline]
    pub fn from_flag(value: &str) -> Self {
        if value == "dec" {
            Self::Decrypt
        } else {
            Self::Encrypt
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Encrypt => write!(f, "enc"),
            Self::Decrypt => write!(f, "dec"),
        }
    }
}

/// Which transform to apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Caesar rotation of ASCII letters
    #[default]
    Shift,
    /// Offset of every character's scalar value
    Codepoint,
}

impl Algorithm {
    /// `"unicode"` selects the codepoint transform; anything else shifts letters
    #[must_use]
    #[inline]
    pub fn from_flag(value: &str) -> Self {
        if value == "unicode" {
            Self::Codepoint
        } else {
            Self::Shift
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Shift => write!(f, "shift"),
            Self::Codepoint => write!(f, "unicode"),
        }
    }
}

/// Resolved settings for a single run
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    pub mode: Mode,
    pub algorithm: Algorithm,
    pub key: i32,
    /// Text to transform; empty when neither `-data` nor a readable `-in` was given
    pub data: String,
    pub input_path: Option<PathBuf>,
    pub output_path: Option<PathBuf>,
}

impl Config {
    /// Parse cipher tokens such as `["-mode", "dec", "-key", "3"]`
    ///
    /// # Errors
    ///
    /// Returns a parse error if `-key` is not a decimal integer
    #[inline]
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> anyhow::Result<Self> {
        parse::parse_tokens(tokens)
    }

    /// Fill in `data` from the input file when no inline data was given
    #[must_use]
    #[inline]
    pub fn with_input_data(self, system: &dyn System) -> Self {
        input::resolve_data(system, self)
    }
}
