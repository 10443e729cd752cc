pub mod cli;
pub mod logging;
pub mod reader;
pub mod writer;

use anyhow::Context;
use clap::Parser;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use std::process::ExitCode;

use reader::Lines;
use writer::literal::{LiteralWriter, needs_escaping};

pub fn run() -> anyhow::Result<ExitCode> {
    let args = cli::Cli::parse();

    if let Err(e) = logging::init_tracing(args.verbose) {
        eprintln!("Warning: failed to initialize logging: {e}");
    }

    if !args.rest.is_empty() {
        tracing::debug!(ignored = args.rest.len(), "extra arguments ignored");
    }

    let Some(input) = args.input else {
        println!("{}", cli::USAGE);
        return Ok(ExitCode::from(1));
    };

    convert_file(&input)?;
    Ok(ExitCode::SUCCESS)
}

/// Transcode `path` to stdout. Returns the number of records written.
pub fn convert_file(path: &Path) -> anyhow::Result<usize> {
    // 1. ── Open ───────────────────────────────────────────────────────
    let file = File::open(path).with_context(|| format!("Opening {}", path.display()))?;
    tracing::debug!(path = %path.display(), "input opened");

    // 2. ── Transcode ──────────────────────────────────────────────────
    let stdout = io::stdout();
    let result = transcode(BufReader::new(file), stdout.lock())
        .with_context(|| format!("Reading {}", path.display()));

    match result {
        Ok(records) => {
            tracing::debug!(records, "done");
            Ok(records)
        }
        // nobody left to read the output
        Err(e) if is_broken_pipe(&e) => {
            tracing::debug!("stdout closed early");
            Ok(0)
        }
        Err(e) => Err(e),
    }
}

/// One record per input line, in input order.
pub fn transcode<R: BufRead, W: Write>(input: R, out: W) -> anyhow::Result<usize> {
    let mut writer = LiteralWriter::new(out);

    for (idx, line) in Lines::new(input).enumerate() {
        let line = line?;
        if needs_escaping(&line) {
            tracing::warn!(
                line = idx + 1,
                "unescaped quote or backslash; record is not a valid literal"
            );
        }
        writer.emit(&line)?;
    }

    Ok(writer.finish()?)
}

fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.downcast_ref::<io::Error>()
        .is_some_and(|e| e.kind() == io::ErrorKind::BrokenPipe)
}
