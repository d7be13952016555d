use clap::{ArgAction, Parser};

/// Command-line arguments for shiftcrypt
///
/// The outer options are long-only so that every single-dash cipher token
/// (`-mode`, `-key`, ...) is collected into `tokens` untouched.
#[derive(Parser, Debug, Clone)]
#[command(name = "shiftcrypt")]
#[command(about = "A CLI tool for encrypting and decrypting text with classical shift ciphers")]
#[command(
    long_about = "A CLI tool for encrypting and decrypting text with classical shift ciphers\n\n\
    Cipher arguments are given as -flag value pairs after any --options:\n  \
    -mode enc|dec        encrypt (default) or decrypt\n  \
    -alg shift|unicode   letter rotation (default) or code point offset\n  \
    -key N               integer key (default 0)\n  \
    -data TEXT           text to transform\n  \
    -in PATH             read the text from PATH when -data is absent\n  \
    -out PATH            write the result to PATH instead of standard output"
)]
#[command(disable_help_flag = true, disable_version_flag = true)]
#[command(version)]
pub struct Args {
    /// Enable verbose logging output
    #[arg(long)]
    pub verbose: bool,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    pub help: Option<bool>,

    /// Print version
    #[arg(long, action = ArgAction::Version)]
    pub version: Option<bool>,

    /// Cipher arguments, e.g. -mode enc -key 3 -data "hello"
    #[arg(
        value_name = "CIPHER_ARGS",
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub tokens: Vec<String>,
}
