//! Command-line interface module
//!
//! Handles outer argument parsing; the cipher tokens are resolved by `config`

pub mod args;

pub use args::*;
