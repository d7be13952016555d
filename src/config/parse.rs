//! Cipher token parsing
//!
//! Tokens come in `-flag value` pairs. Unknown tokens are skipped one at a
//! time and a recognized flag without a following value is ignored.

use crate::config::{Algorithm, Config, Mode};
use crate::error::CipherError;
use anyhow::Result;
use std::path::PathBuf;
use tracing::debug;

/// Parse cipher tokens into a `Config` with `data` not yet loaded from file
///
/// # Errors
///
/// Returns a parse error if a `-key` value is not a decimal `i32`
pub fn parse_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<Config> {
    let mut config = Config::default();
    let mut index = 0;

    while index < tokens.len() {
        let flag = tokens[index].as_ref();

        if !is_known_flag(flag) {
            debug!("Ignoring unrecognized argument: {flag}");
            index += 1;
            continue;
        }

        let Some(value) = tokens.get(index + 1).map(AsRef::as_ref) else {
            debug!("Ignoring {flag}: no value follows it");
            break;
        };

        apply_flag(&mut config, flag, value)?;
        index += 2;
    }

    Ok(config)
}

fn is_known_flag(flag: &str) -> bool {
    matches!(flag, "-mode" | "-key" | "-data" | "-in" | "-out" | "-alg")
}

fn apply_flag(config: &mut Config, flag: &str, value: &str) -> Result<()> {
    match flag {
        "-mode" => config.mode = Mode::from_flag(value),
        "-alg" => config.algorithm = Algorithm::from_flag(value),
        "-key" => config.key = parse_key(value)?,
        "-data" => config.data = value.to_owned(),
        "-in" => config.input_path = non_empty_path(value),
        "-out" => config.output_path = non_empty_path(value),
        _ => debug!("Ignoring unrecognized argument: {flag}"),
    }
    Ok(())
}

/// Parse a `-key` value as a signed decimal integer
///
/// # Errors
///
/// Returns a parse error naming the value if it is not a decimal `i32`
pub fn parse_key(value: &str) -> Result<i32> {
    value.parse::<i32>().map_err(|e| {
        CipherError::parse(format!("Invalid key '{value}': {e}. Expected a decimal integer"))
            .into()
    })
}

fn non_empty_path(value: &str) -> Option<PathBuf> {
    if value.is_empty() {
        None
    } else {
        Some(PathBuf::from(value))
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use super::*;

    #[test]
    fn parses_signed_keys() {
        assert_eq!(parse_key("3").unwrap(), 3);
        assert_eq!(parse_key("-7").unwrap(), -7);
        assert_eq!(parse_key("+12").unwrap(), 12);
    }

    #[test]
    fn rejects_non_numeric_key() {
        let err = parse_key("abc").unwrap_err();
        assert!(err.to_string().contains("'abc'"));
        assert!(err.downcast_ref::<CipherError>().is_some());
    }

    #[test]
    fn rejects_out_of_range_key() {
        assert!(parse_key("2147483648").is_err());
    }

    #[test]
    fn empty_paths_count_as_absent() {
        let config = parse_tokens(&["-in", "", "-out", ""]).unwrap();
        assert_eq!(config.input_path, None);
        assert_eq!(config.output_path, None);
    }
}
