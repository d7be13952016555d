//! Uniform offset over Unicode scalar values

use super::Transform;
use crate::error::CipherError;
use anyhow::Result;

/// Adds a fixed offset to every character's scalar value
///
/// The key is used as-is. A character whose shifted value is not a valid
/// `char` (negative, a surrogate, or above `char::MAX`) fails the whole
/// transform rather than wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodepointCipher {
    key: i32,
}

impl CodepointCipher {
    #[must_use]
    #[inline]
    pub const fn new(key: i32) -> Self {
        Self { key }
    }

    fn offset(text: &str, offset: i64) -> Result<String> {
        text.chars()
            .enumerate()
            .map(|(position, c)| {
                let shifted = i64::from(u32::from(c)) + offset;
                u32::try_from(shifted)
                    .ok()
                    .and_then(char::from_u32)
                    .ok_or_else(|| {
                        anyhow::Error::from(CipherError::transform(format!(
                            "Character {c:?} (U+{:04X}) at position {position} shifted by {offset} \
                             gives {shifted}, which is not a valid Unicode scalar value",
                            u32::from(c)
                        )))
                    })
            })
            .collect()
    }
}

impl Transform for CodepointCipher {
    fn encode(&self, text: &str) -> Result<String> {
        Self::offset(text, i64::from(self.key))
    }

    fn decode(&self, text: &str) -> Result<String> {
        Self::offset(text, -i64::from(self.key))
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use super::*;

    #[test]
    fn shifts_every_character() {
        let cipher = CodepointCipher::new(1);
        assert_eq!(cipher.encode("A z!").unwrap(), "B!{\"");
        assert_eq!(cipher.decode("B!{\"").unwrap(), "A z!");
    }

    #[test]
    fn key_is_not_reduced() {
        let cipher = CodepointCipher::new(26);
        assert_eq!(cipher.encode("a").unwrap(), "{");
    }

    #[test]
    fn rejects_values_below_zero() {
        let err = CodepointCipher::new(-100).encode("ab").unwrap_err();
        let cipher_err = err.downcast_ref::<CipherError>().unwrap();
        assert_eq!(cipher_err.exit_code(), 4);
        assert!(err.to_string().contains("position 0"));
    }

    #[test]
    fn rejects_surrogate_range() {
        let below = char::from_u32(0xD7FF).unwrap().to_string();
        assert!(CodepointCipher::new(1).encode(&below).is_err());
    }

    #[test]
    fn rejects_values_above_max() {
        assert!(CodepointCipher::new(1).encode("\u{10FFFF}").is_err());
        assert!(CodepointCipher::new(i32::MAX).encode("a").is_err());
    }
}
