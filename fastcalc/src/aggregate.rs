use crate::config::{Config, fnv1a_step};
use crate::error::{CalcError, Result};
use crate::merge::StationMap;
use crate::parse::{is_valid_number, load_u64_le, parse_number, parse_number_le};
use crate::partition::CHUNK_OVERLAP;
use crate::stats::StationStats;
use crate::table::StationTable;
use memchr::memchr;
use tracing::debug;

/// Aggregates every record of a chunk view.
///
/// `view` must end with `CHUNK_OVERLAP` bytes that are not part of the chunk;
/// `base` is the offset of `view` in the whole input, used in error reports.
pub fn process_chunk<'a>(view: &'a [u8], base: usize, cfg: &Config) -> Result<StationMap<'a>> {
    let table = scan_chunk(view, base, cfg)?;
    debug!(
        offset = base,
        bytes = view.len().saturating_sub(CHUNK_OVERLAP),
        stations = table.len(),
        "chunk done"
    );
    Ok(table.into_map())
}

fn scan_chunk<'a>(view: &'a [u8], base: usize, cfg: &Config) -> Result<StationTable<'a>> {
    let mut table = StationTable::new(cfg.verify_names);
    let mut data = view;

    while data.len() > CHUNK_OVERLAP {
        let offset = base + view.len() - data.len();

        // FNV-1a of the name, folded in while looking for ';'.
        let mut hash = cfg.seed;
        let mut semi = None;
        for (i, &b) in data.iter().enumerate() {
            if b == b';' {
                semi = Some(i);
                break;
            }
            if b == b'\n' {
                break;
            }
            hash = fnv1a_step(hash, b);
        }
        let semi = semi.ok_or_else(|| CalcError::malformed(offset, "missing ';'"))?;

        let name = &data[..semi];
        data = &data[semi + 1..];

        let window = data
            .get(..8)
            .ok_or_else(|| CalcError::malformed(offset, "record truncated"))?;
        let (value, size) = parse_number_le(load_u64_le(window));
        if window[size] != b'\n' {
            return Err(CalcError::malformed(offset, "bad temperature"));
        }
        data = &data[size + 1..];

        table.record(hash, name, value)?;
    }
    Ok(table)
}

/// Parses a buffer holding exactly one record, with or without its trailing
/// newline.
pub fn parse_record(data: &[u8], base: usize) -> Result<StationMap<'_>> {
    let line = data.strip_suffix(b"\n").unwrap_or(data);
    let semi = memchr(b';', line).ok_or_else(|| CalcError::malformed(base, "missing ';'"))?;

    let name = &line[..semi];
    let number = &line[semi + 1..];
    if !is_valid_number(number) {
        return Err(CalcError::malformed(base, "bad temperature"));
    }

    let mut map = StationMap::with_capacity(1);
    map.insert(name, StationStats::new(parse_number(number)));
    Ok(map)
}
