//! Real system implementation using `std::fs` and `std::io`

use super::System;
use std::fs;
use std::io::{self, Write as _};
use std::path::Path;

/// Production implementation of System trait
///
/// Delegates directly to the standard library. Every file handle is opened
/// and closed inside a single call.
#[derive(Debug, Clone, Copy)]
pub struct RealSystem;

impl RealSystem {
    /// Create a new `RealSystem` instance
    #[must_use]
    pub const fn new() -> Self {
        return Self;
    }
}

impl Default for RealSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl System for RealSystem {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        fs::write(path, contents)
    }

    fn write_stdout(&self, contents: &[u8]) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(contents)?;
        stdout.flush()
    }

    fn write_stderr(&self, contents: &[u8]) -> io::Result<()> {
        let mut stderr = io::stderr().lock();
        stderr.write_all(contents)?;
        stderr.flush()
    }
}
