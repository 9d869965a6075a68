//! Per-station min/mean/max over `name;temperature` records.
//!
//! The input is split into newline-aligned chunks, one per worker. Each worker
//! folds its chunk into a table keyed by a hash of the station name, and the
//! tables are merged once every worker has finished.

mod aggregate;
mod config;
mod error;
mod merge;
mod parse;
mod partition;
mod report;
mod round;
mod stats;
mod table;

pub use aggregate::{parse_record, process_chunk};
pub use config::{Config, FNV_OFFSET64, FNV_PRIME64};
pub use error::{CalcError, Result};
pub use merge::{StationMap, merge};
pub use parse::{is_valid_number, load_u64_le, parse_number, parse_number_le};
pub use partition::{CHUNK_OVERLAP, Chunk, Partition, partition};
pub use report::Report;
pub use round::{Summary, round_half_up, round_tenths};
pub use stats::StationStats;
pub use table::MAX_STATIONS;

use memmap2::MmapOptions;
use rayon::prelude::*;
use std::fs::File;
use std::path::Path;
use tracing::debug;

/// Aggregates a whole input buffer.
pub fn process(data: &[u8], cfg: &Config) -> Result<Report> {
    let merged = match partition(data, cfg.workers)? {
        Partition::Single => parse_record(data, 0)?,
        Partition::Chunks { chunks, last } => {
            debug!(
                bytes = data.len(),
                workers = cfg.workers,
                chunks = chunks.len(),
                largest = chunks.iter().map(Chunk::len).max(),
                "partitioned input"
            );
            let tail = parse_record(&data[last.clone()], last.start)?;

            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(cfg.workers.min(chunks.len()))
                .build()?;
            let parts = pool.install(|| {
                chunks
                    .par_iter()
                    .map(|c| process_chunk(c.view(data), c.start, cfg))
                    .collect::<Result<Vec<_>>>()
            })?;

            merge(parts.into_iter().chain(std::iter::once(tail)))
        }
    };
    Report::new(merged)
}

/// Maps the file read-only and returns the formatted result line.
pub fn solve<P: AsRef<Path>>(path: P, cfg: &Config) -> Result<String> {
    let file = File::open(path)?;
    let size = file.metadata()?.len();
    if size == 0 || usize::try_from(size).is_err() {
        return Err(CalcError::InvalidSize(size));
    }
    let mapped_file = unsafe { MmapOptions::new().map(&file)? };

    let report = process(&mapped_file, cfg)?;
    debug!(stations = report.len(), rows = report.rows(), "aggregated");

    Ok(format!("{report}\n"))
}
