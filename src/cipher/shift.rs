//! Caesar rotation over the ASCII alphabet

use super::Transform;
use anyhow::Result;

const ALPHABET_LEN: u8 = 26;

/// Rotates ASCII letters within their own case, leaving everything else alone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftCipher {
    /// Always in `0..26`
    key: u8,
}

impl ShiftCipher {
    /// Create a cipher, normalizing `key` into `0..26`
    ///
    /// Negative keys rotate left: `-1` is the same as `25`.
    #[must_use]
    #[inline]
    pub const fn new(key: i32) -> Self {
        Self {
            key: key.rem_euclid(ALPHABET_LEN as i32) as u8,
        }
    }

    /// The normalized key
    #[must_use]
    #[inline]
    pub const fn key(&self) -> u8 {
        self.key
    }

    fn rotate(text: &str, offset: u8) -> String {
        text.chars()
            .map(|c| match c {
                'a'..='z' => rotate_letter(c, b'a', offset),
                'A'..='Z' => rotate_letter(c, b'A', offset),
                _ => c,
            })
            .collect()
    }
}

// `c` must be an ASCII letter in the alphabet starting at `base`
fn rotate_letter(c: char, base: u8, offset: u8) -> char {
    let index = c as u8 - base;
    char::from(base + (index + offset) % ALPHABET_LEN)
}

impl Transform for ShiftCipher {
    fn encode(&self, text: &str) -> Result<String> {
        Ok(Self::rotate(text, self.key))
    }

    fn decode(&self, text: &str) -> Result<String> {
        Ok(Self::rotate(text, (ALPHABET_LEN - self.key) % ALPHABET_LEN))
    }
}
