//! Operations module
//!
//! Coordinates a cipher run: transform selection, execution, and output delivery

pub mod process;
pub mod sink;

pub use process::*;
pub use sink::*;
