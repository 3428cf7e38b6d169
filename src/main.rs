//! `rover` command-line front end.
//!
//! Reads a mission from stdin (or `--input`), prints one final state per
//! rover to stdout. Validation errors are printed to stdout as a plain
//! message; logs go to stderr.

use clap::{ArgAction, Parser};
use plateau_rover::{CliError, OutputFormat, run_mission};
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::{fs, process};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "rover",
    author,
    version,
    about = "Drive rovers across a bounded plateau",
    long_about = "Reads the plateau size followed by a position line and an instruction line per rover, then prints each rover's final position.\n\nExample input:\n  5 5\n  1 2 N\n  LMLMLMLMM\n  3 3 E\n  MMRMMRMRRM"
)]
struct Cli {
    /// Read the mission from this file instead of stdin.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output format for rover results.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Increase log verbosity (-v debug, -vv trace). Logs go to stderr.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let input = match &cli.input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_mission(&input, cli.format, &mut out)?;
    out.flush()?;
    Ok(())
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
