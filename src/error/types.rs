//! Custom error types with exit codes

use thiserror::Error;

/// Main error type for shiftcrypt operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CipherError {
    /// Parse Error - an argument value could not be interpreted
    #[error("Parse error: {message}")]
    Parse { message: String },

    /// Input File Error - the input file is missing or unreadable
    #[error("Input file error: {message}")]
    InputFile { message: String },

    /// Output Write Error - the result could not be written to the output file
    #[error("Output write error: {message}")]
    OutputWrite { message: String },

    /// Transform Error - a shifted character falls outside the Unicode range
    #[error("Transform error: {message}")]
    Transform { message: String },
}

impl CipherError {
    /// Get the appropriate exit code for this error type
    #[must_use]
    #[inline]
    pub const fn exit_code(&self) -> i32 {
        match *self {
            Self::Parse { .. } => 1,
            Self::InputFile { .. } => 2,
            Self::OutputWrite { .. } => 3,
            Self::Transform { .. } => 4,
        }
    }

    /// Create a parse error
    #[inline]
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create an input file error
    #[inline]
    pub fn input_file<S: Into<String>>(message: S) -> Self {
        Self::InputFile {
            message: message.into(),
        }
    }

    /// Create an output write error
    #[inline]
    pub fn output_write<S: Into<String>>(message: S) -> Self {
        Self::OutputWrite {
            message: message.into(),
        }
    }

    /// Create a transform error
    #[inline]
    pub fn transform<S: Into<String>>(message: S) -> Self {
        Self::Transform {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct_per_kind() {
        assert_eq!(CipherError::parse("x").exit_code(), 1);
        assert_eq!(CipherError::input_file("x").exit_code(), 2);
        assert_eq!(CipherError::output_write("x").exit_code(), 3);
        assert_eq!(CipherError::transform("x").exit_code(), 4);
    }

    #[test]
    fn display_includes_message() {
        let err = CipherError::output_write("Unable to write to file: /nope/out.txt");
        assert_eq!(
            err.to_string(),
            "Output write error: Unable to write to file: /nope/out.txt"
        );
    }
}
