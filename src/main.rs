//! Prints the angle between every pair of vectors read from a file,
//! smallest angle first.
//!
//! ```text
//! pairangle                  # reads test.txt
//! pairangle vectors.txt
//! pairangle - < vectors.txt  # reads stdin
//! pairangle --precision 3 vectors.txt
//! ```

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pairangle::ingest::ingest_reader;
use pairangle::operations::ThetaSort;
use pairangle::output::{write_results, DEFAULT_PRECISION};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Whitespace-separated coordinates, two per vector. `-` reads stdin.
    #[arg(value_name = "INPUT", default_value = "test.txt")]
    input: PathBuf,

    /// Fractional digits printed for each angle.
    #[arg(long, default_value_t = DEFAULT_PRECISION)]
    precision: usize,
}

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for pairangle. RUST_LOG replaces both.
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,pairangle=info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let vecs = if args.input.as_os_str() == "-" {
        ingest_reader(io::stdin().lock()).context("reading stdin")?
    } else {
        let file = File::open(&args.input)
            .with_context(|| format!("no input file: {}", args.input.display()))?;
        ingest_reader(file).with_context(|| format!("reading {}", args.input.display()))?
    };
    info!(vectors = vecs.len(), "loaded input");

    let results = ThetaSort::new(&vecs).execute();
    write_results(BufWriter::new(io::stdout().lock()), &results, args.precision)
        .context("writing results")?;
    Ok(())
}
