//! `ShiftCrypt` - A CLI tool for encrypting and decrypting text with classical shift ciphers
//!
//! This library resolves `-flag value` cipher arguments into a configuration,
//! applies either a Caesar letter rotation or a code point offset, and writes
//! the result to standard output or a file.

pub mod cipher;
pub mod cli;
pub mod config;
pub mod error;
pub mod operations;
pub mod system;

use anyhow::Result;
use cli::Args;
use config::Config;
use operations::CipherTask;
use system::{RealSystem, System};

/// Main entry point for the shiftcrypt library
///
/// # Errors
///
/// Returns an error if:
/// - The `-key` value is not an integer
/// - The transform cannot represent a shifted character
/// - The result cannot be written to the output file
pub fn run(args: &Args) -> Result<()> {
    run_with_system(&args.tokens, &RealSystem)
}

/// Run one cipher invocation against `system`
///
/// # Errors
///
/// See [`run`]
pub fn run_with_system<S: AsRef<str>>(tokens: &[S], system: &dyn System) -> Result<()> {
    let config = Config::from_tokens(tokens)?.with_input_data(system);
    CipherTask::new(config, system).execute()
}
