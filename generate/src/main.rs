use anyhow::{Context, Result, bail};
use clap::Parser;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(long, default_value_t = 1_000_000)]
    rows: usize,

    #[arg(long, default_value_t = 42)]
    seed: u64,

    #[arg(long, default_value = "measurements.txt")]
    output: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.rows == 0 {
        bail!("--rows must be positive");
    }

    let file = File::create(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    let mut out = BufWriter::new(file);
    generate::write_measurements(&mut out, args.rows, args.seed)?;
    out.flush()?;

    eprintln!("wrote {} rows to {}", args.rows, args.output.display());
    Ok(())
}
