//! Mock system implementation for testing

use super::System;
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// In-memory implementation of System trait for testing
///
/// `MockSystem` provides an in-memory filesystem and captured standard
/// streams, for fast, isolated unit tests without side effects.
///
/// # Example
/// ```
/// use shiftcrypt::system::{mock::MockSystem, System};
/// use std::path::Path;
///
/// let system = MockSystem::new()
///     .with_file("/test/plain.txt", b"Hello, world!").unwrap()
///     .with_dir("/out").unwrap();
///
/// assert_eq!(
///     system.read_to_string(Path::new("/test/plain.txt")).unwrap(),
///     "Hello, world!"
/// );
/// ```
#[derive(Clone)]
pub struct MockSystem {
    state: Arc<RwLock<MockSystemState>>,
}

struct MockSystemState {
    files: HashMap<PathBuf, Vec<u8>>,
    dirs: HashSet<PathBuf>,
    stdout: Vec<u8>,
    stderr: Vec<u8>,
}

impl MockSystem {
    /// Create a new `MockSystem` with default state
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(MockSystemState {
                files: HashMap::new(),
                dirs: HashSet::from([PathBuf::from("/"), PathBuf::new()]),
                stdout: Vec::new(),
                stderr: Vec::new(),
            })),
        }
    }

    /// Add a file with contents (builder pattern)
    ///
    /// # Errors
    ///
    /// Returns an error if the state lock is poisoned
    #[inline]
    pub fn with_file<P: AsRef<Path>>(self, path: P, contents: &[u8]) -> io::Result<Self> {
        let path_buf = path.as_ref().to_path_buf();
        let mut state = self
            .state
            .write()
            .map_err(|e| io::Error::other(e.to_string()))?;

        // Ensure parent directories exist
        if let Some(parent) = path_buf.parent() {
            Self::ensure_parent_dirs(&mut state.dirs, parent);
        }

        state.files.insert(path_buf, contents.to_vec());
        drop(state);
        Ok(self)
    }

    /// Add a directory (builder pattern)
    ///
    /// # Errors
    ///
    /// Returns an error if the state lock is poisoned
    #[inline]
    pub fn with_dir<P: AsRef<Path>>(self, path: P) -> io::Result<Self> {
        let path_buf = path.as_ref().to_path_buf();
        let mut state = self
            .state
            .write()
            .map_err(|e| io::Error::other(e.to_string()))?;
        Self::ensure_parent_dirs(&mut state.dirs, &path_buf);
        drop(state);
        Ok(self)
    }

    /// Everything written to standard output so far, as text
    ///
    /// # Errors
    ///
    /// Returns an error if the state lock is poisoned or the output is not UTF-8
    #[inline]
    pub fn stdout_contents(&self) -> io::Result<String> {
        let state = self
            .state
            .read()
            .map_err(|e| io::Error::other(e.to_string()))?;
        let bytes = state.stdout.clone();
        drop(state);
        String::from_utf8(bytes)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, format!("Invalid UTF-8: {e}")))
    }

    /// Everything written to standard error so far, as text
    ///
    /// # Errors
    ///
    /// Returns an error if the state lock is poisoned or the output is not UTF-8
    #[inline]
    pub fn stderr_contents(&self) -> io::Result<String> {
        let state = self
            .state
            .read()
            .map_err(|e| io::Error::other(e.to_string()))?;
        let bytes = state.stderr.clone();
        drop(state);
        String::from_utf8(bytes)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, format!("Invalid UTF-8: {e}")))
    }

    #[inline]
    fn ensure_parent_dirs(dirs: &mut HashSet<PathBuf>, path: &Path) {
        for ancestor in path.ancestors() {
            dirs.insert(ancestor.to_path_buf());
        }
    }
}

impl Default for MockSystem {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl System for MockSystem {
    #[inline]
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        let state = self
            .state
            .read()
            .map_err(|e| io::Error::other(e.to_string()))?;
        let bytes = state.files.get(path).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("File not found: {}", path.display()),
            )
        })?;
        let result = bytes.clone();
        drop(state);
        Ok(result)
    }

    #[inline]
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        String::from_utf8(self.read(path)?)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, format!("Invalid UTF-8: {e}")))
    }

    #[inline]
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        let mut state = self
            .state
            .write()
            .map_err(|e| io::Error::other(e.to_string()))?;

        // Parent directory must already exist
        if let Some(parent) = path.parent()
            && !state.dirs.contains(parent)
        {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Parent directory does not exist: {}", parent.display()),
            ));
        }

        if state.dirs.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::IsADirectory,
                format!("Is a directory: {}", path.display()),
            ));
        }

        state.files.insert(path.to_path_buf(), contents.to_vec());
        drop(state);
        Ok(())
    }

    #[inline]
    fn write_stdout(&self, contents: &[u8]) -> io::Result<()> {
        let mut state = self
            .state
            .write()
            .map_err(|e| io::Error::other(e.to_string()))?;
        state.stdout.extend_from_slice(contents);
        drop(state);
        Ok(())
    }

    #[inline]
    fn write_stderr(&self, contents: &[u8]) -> io::Result<()> {
        let mut state = self
            .state
            .write()
            .map_err(|e| io::Error::other(e.to_string()))?;
        state.stderr.extend_from_slice(contents);
        drop(state);
        Ok(())
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use super::*;

    #[test]
    fn write_requires_existing_parent() {
        let system = MockSystem::new();
        let result = system.write(Path::new("/missing/out.txt"), b"data");
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn write_overwrites_existing_file() {
        let system = MockSystem::new().with_file("/out.txt", b"old contents").unwrap();
        system.write(Path::new("/out.txt"), b"new").unwrap();
        assert_eq!(system.read_to_string(Path::new("/out.txt")).unwrap(), "new");
    }

    #[test]
    fn stdout_is_captured_in_order() {
        let system = MockSystem::new();
        system.write_stdout(b"first ").unwrap();
        system.write_stdout(b"second").unwrap();
        assert_eq!(system.stdout_contents().unwrap(), "first second");
        assert_eq!(system.stderr_contents().unwrap(), "");
    }

    #[test]
    fn read_returns_raw_bytes() {
        let system = MockSystem::new().with_file("/bin.dat", &[0x63, 0xE9]).unwrap();
        assert_eq!(system.read(Path::new("/bin.dat")).unwrap(), vec![0x63, 0xE9]);
        assert!(system.read_to_string(Path::new("/bin.dat")).is_err());
    }
}
