use std::io;

use clap::Parser;
use invec_cli::{Result, run_session};

/// Interactive numbered menu over a small-buffer integer vector.
///
/// The program takes no operands or options: the entire interaction happens
/// over the stdin/stdout line protocol, so the parser's only jobs are
/// `--help`/`--version` and rejecting stray arguments.
#[derive(Parser)]
#[command(
    name = "invec",
    version,
    about = "Maintain an integer vector through a numbered menu read from stdin"
)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(stdin.lock(), stdout.lock())?;
    Ok(())
}
