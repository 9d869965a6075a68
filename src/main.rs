use anyhow::{Context, Result, bail};
use clap::Parser;
use fastcalc::Config;
use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{Level, info};

#[derive(Parser, Debug)]
#[command(about = "Min/mean/max temperature per station")]
struct Args {
    /// Measurements file, one `station;temperature` record per line
    path: PathBuf,

    /// Number of chunks and worker threads [default: available parallelism]
    #[arg(long)]
    workers: Option<usize>,

    /// Compare station names on hash matches instead of trusting the hash
    #[arg(long)]
    verify_names: bool,

    /// Write a CPU flamegraph (SVG) of the run to this file
    #[arg(long)]
    cpuprofile: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose logging")]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    let mut cfg = Config::default().with_name_check(args.verify_names);
    if let Some(workers) = args.workers {
        if workers == 0 {
            bail!("--workers must be positive");
        }
        cfg = cfg.with_workers(workers);
    }

    let profiler = match &args.cpuprofile {
        Some(_) => Some(
            pprof::ProfilerGuardBuilder::default()
                .frequency(1000)
                .blocklist(&["libc", "libgcc", "pthread", "vdso"])
                .build()
                .context("starting profiler")?,
        ),
        None => None,
    };

    let started = Instant::now();
    let out = fastcalc::solve(&args.path, &cfg)
        .with_context(|| format!("processing {}", args.path.display()))?;
    info!(elapsed = ?started.elapsed(), workers = cfg.workers, "done");

    if let (Some(guard), Some(path)) = (profiler, &args.cpuprofile) {
        let report = guard.report().build().context("building profile")?;
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        report.flamegraph(file).context("writing flamegraph")?;
    }

    print!("{out}");
    Ok(())
}
