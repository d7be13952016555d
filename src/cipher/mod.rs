//! Cipher module
//!
//! The two reversible character transforms and the selection between them

pub mod codepoint;
pub mod shift;

pub use codepoint::CodepointCipher;
pub use shift::ShiftCipher;

use crate::config::Algorithm;
use anyhow::Result;

/// A reversible text transform parameterized by a key at construction
pub trait Transform {
    /// Encrypt `text`
    ///
    /// # Errors
    ///
    /// Returns an error if a character cannot be represented after the shift
    fn encode(&self, text: &str) -> Result<String>;

    /// Decrypt `text`, undoing `encode` under the same key
    ///
    /// # Errors
    ///
    /// Returns an error if a character cannot be represented after the shift
    fn decode(&self, text: &str) -> Result<String>;
}

/// Build the transform for `algorithm`, keyed with `key`
#[must_use]
#[inline]
pub fn build_transform(algorithm: Algorithm, key: i32) -> Box<dyn Transform> {
    match algorithm {
        Algorithm::Shift => Box::new(ShiftCipher::new(key)),
        Algorithm::Codepoint => Box::new(CodepointCipher::new(key)),
    }
}
