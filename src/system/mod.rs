//! System abstraction for filesystem and console operations
//!
//! This module provides a unified trait for all external system interactions,
//! allowing for easy testing with mock implementations.

use std::io;
use std::path::Path;

pub mod mock;
pub mod real;

pub use mock::MockSystem;
pub use real::RealSystem;

/// Unified trait for system operations (filesystem + standard streams)
///
/// # Implementations
/// - `RealSystem`: Production implementation using `std::fs` and `std::io`
/// - `MockSystem`: Test implementation using in-memory storage
pub trait System: Send + Sync {
    /// Read entire file contents as raw bytes
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Read entire file contents as a string
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Write bytes to a file, creating or truncating it
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;

    /// Write bytes to standard output and flush
    fn write_stdout(&self, contents: &[u8]) -> io::Result<()>;

    /// Write bytes to standard error and flush
    fn write_stderr(&self, contents: &[u8]) -> io::Result<()>;
}
