//! # `ShiftCrypt`
//!
//! `ShiftCrypt` encrypts and decrypts text with two classical ciphers: a Caesar
//! rotation over the ASCII alphabet and a uniform Unicode code point offset.
//!
//! ## Usage
//!
//! ```sh
//! shiftcrypt -mode enc -key 3 -data "Hello, World"
//! shiftcrypt -mode dec -alg unicode -key 5 -in secret.txt -out plain.txt
//! ```
//!
//! Exit codes: 0 success (a missing input file is reported but not fatal),
//! 1 invalid key, 3 output write failure, 4 code point out of range.

use clap::Parser as _;
use shiftcrypt::cli::Args;
use shiftcrypt::error::CipherError;
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt};

fn main() {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    // stdout carries the transformed text, so logs go to stderr
    fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    match shiftcrypt::run(&args) {
        Ok(()) => std::process::exit(0),
        Err(err) => {
            error!("{}", err);
            std::process::exit(
                err.downcast_ref::<CipherError>()
                    .map_or(1, CipherError::exit_code),
            );
        }
    }
}
