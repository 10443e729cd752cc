use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Invocation form printed when no input file is given.
pub const USAGE: &str = concat!("Usage: ", env!("CARGO_PKG_NAME"), " <input_file>");

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Text file whose lines are emitted as quoted string literals
    pub input: Option<PathBuf>,
    /// Anything after the input file is accepted and ignored
    #[arg(hide = true, trailing_var_arg = true)]
    pub rest: Vec<OsString>,
    /// Log debug diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
