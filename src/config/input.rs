//! Input data loading

use crate::config::Config;
use crate::error::CipherError;
use crate::system::System;
use anyhow::Result;
use std::borrow::Cow;
use std::io;
use std::path::Path;
use tracing::{debug, warn};

/// Load `data` from the input file when no inline data was given
///
/// A missing or unreadable input file is reported on standard error and the
/// run continues with empty data. The report does not depend on the log
/// filter.
pub fn resolve_data(system: &dyn System, mut config: Config) -> Config {
    if !config.data.is_empty() {
        return config;
    }

    let Some(path) = config.input_path.as_deref() else {
        debug!("No -data or -in given, using empty input");
        return config;
    };

    match read_input_file(system, path) {
        Ok(contents) => {
            debug!("Read {} bytes from {}", contents.len(), path.display());
            config.data = contents;
        }
        Err(err) => {
            if let Err(e) = system.write_stderr(format!("{err}\n").as_bytes()) {
                debug!("Unable to report input file error: {e}");
            }
        }
    }

    config
}

/// Read the whole input file as text
///
/// Invalid UTF-8 sequences are replaced with U+FFFD rather than rejected.
///
/// # Errors
///
/// Returns an input file error naming the path if it cannot be read
pub fn read_input_file(system: &dyn System, path: &Path) -> Result<String> {
    let bytes = system.read(path).map_err(|e| {
        let message = if e.kind() == io::ErrorKind::NotFound {
            format!("Input file not found: {}", path.display())
        } else {
            format!("Unable to read input file {}: {e}", path.display())
        };
        anyhow::Error::from(CipherError::input_file(message))
    })?;

    let text = String::from_utf8_lossy(&bytes);
    if matches!(text, Cow::Owned(_)) {
        warn!("{} is not valid UTF-8, invalid bytes were replaced", path.display());
    }
    Ok(text.into_owned())
}
