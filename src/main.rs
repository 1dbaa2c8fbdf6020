//! Replay binary: feeds a CSV command stream to a single book.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use limitbook::OrderBook;
use limitbook::csv;

/// Replay a CSV command stream against a limit order book.
#[derive(Debug, Parser)]
#[command(name = "limitbook", version, about)]
struct Args {
    /// Command file to replay; reads stdin when omitted.
    input: Option<PathBuf>,

    /// Symbol label for the book.
    #[arg(long, default_value = "BOOK")]
    symbol: String,

    /// Suppress diagnostics (overrides RUST_LOG).
    #[arg(short, long)]
    quiet: bool,
}

fn run(args: &Args) -> io::Result<()> {
    let mut book = OrderBook::new(&args.symbol);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &args.input {
        Some(path) => {
            let reader = BufReader::new(File::open(path)?);
            csv::run(&mut book, reader, &mut out)?;
        }
        None => {
            let stdin = io::stdin();
            csv::run(&mut book, stdin.lock(), &mut out)?;
        }
    }
    out.flush()
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = if args.quiet {
        EnvFilter::new("off")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .compact()
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "replay failed");
            ExitCode::from(2)
        }
    }
}
