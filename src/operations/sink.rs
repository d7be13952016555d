//! Output destinations for the transformed text

use crate::error::CipherError;
use crate::system::System;
use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Where the transformed text goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sink {
    /// Standard output, followed by a newline
    Stdout,
    /// A file, overwritten with exactly the text
    File(PathBuf),
}

impl Sink {
    /// Standard output unless an output path is configured
    #[must_use]
    #[inline]
    pub fn for_output(output_path: Option<&Path>) -> Self {
        output_path.map_or(Self::Stdout, |path| Self::File(path.to_path_buf()))
    }

    /// Deliver `text`
    ///
    /// # Errors
    ///
    /// Returns an output write error naming the destination if writing fails
    #[inline]
    pub fn send(&self, system: &dyn System, text: &str) -> Result<()> {
        match *self {
            Self::Stdout => {
                let mut line = String::with_capacity(text.len() + 1);
                line.push_str(text);
                line.push('\n');
                system.write_stdout(line.as_bytes()).map_err(|e| {
                    CipherError::output_write(format!("Unable to write to standard output: {e}"))
                        .into()
                })
            }
            Self::File(ref path) => {
                debug!("Writing {} bytes to {}", text.len(), path.display());
                system.write(path, text.as_bytes()).map_err(|e| {
                    CipherError::output_write(format!(
                        "Unable to write to file: {} ({e})",
                        path.display()
                    ))
                    .into()
                })
            }
        }
    }
}
