//! Straightforward reference implementation: split on newlines, look names up
//! in a general-purpose map, parse numbers digit by digit.

use ahash::AHashMap;
use memchr::memchr;
use memmap2::MmapOptions;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::Write as FmtWrite;
use std::fs::File;
use std::ops::Range;

pub type BoxError = Box<dyn Error + Send + Sync>;

pub const NEWLINE: u8 = b'\n';
pub const SEMICOLON: u8 = b';';
pub const MINUS: u8 = b'-';
pub const PERIOD: u8 = b'.';
pub const NUM_STATIONS: usize = 413;

/// Aggregate of one station, in tenths of a degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    pub min: i64,
    pub max: i64,
    pub sum: i64,
    pub count: i64,
}

impl Default for Totals {
    fn default() -> Self {
        Self {
            min: i64::MAX,
            max: i64::MIN,
            sum: 0,
            count: 0,
        }
    }
}

impl Totals {
    fn add(&mut self, val: i64) {
        self.max = self.max.max(val);
        self.min = self.min.min(val);
        self.sum += val;
        self.count += 1;
    }

    fn merge(&mut self, other: &Totals) {
        self.max = self.max.max(other.max);
        self.min = self.min.min(other.min);
        self.sum += other.sum;
        self.count += other.count;
    }
}

fn chunk_by_newlines(data: &[u8], workers: usize) -> Vec<Range<usize>> {
    if workers == 0 {
        return vec![0..data.len()];
    }
    let mut ranges = Vec::new();
    let mut s = 0usize;
    let chunk_size = (data.len() / workers).max(1);

    while s < data.len() {
        let mut e = s + chunk_size;
        if e >= data.len() {
            ranges.push(s..data.len());
            break;
        }
        if let Some(nl_off) = memchr(NEWLINE, &data[e..]) {
            e += nl_off + 1;
            ranges.push(s..e);
            s = e;
        } else {
            ranges.push(s..data.len());
            break;
        }
    }

    ranges
}

/// Tenths of a degree from `-?d{1,2}.d`, or None for anything else.
fn parse_digits(buffer: &[u8]) -> Option<i64> {
    let (neg, digits) = match buffer.split_first() {
        Some((&MINUS, rest)) => (-1, rest),
        _ => (1, buffer),
    };
    if !(3..=4).contains(&digits.len()) || digits[digits.len() - 2] != PERIOD {
        return None;
    }

    let mut acc = 0;
    for &b in digits {
        match b {
            PERIOD => {}
            b'0'..=b'9' => acc = acc * 10 + (b - b'0') as i64,
            _ => return None,
        }
    }
    Some(acc * neg)
}

fn scan_chunk(buffer: &[u8], range: Range<usize>) -> Result<AHashMap<&[u8], Totals>, BoxError> {
    let mut res: AHashMap<&[u8], Totals> = AHashMap::with_capacity(NUM_STATIONS);

    for (i, line) in buffer[range.clone()].split(|&b| b == NEWLINE).enumerate() {
        if line.is_empty() {
            continue;
        }
        let semi = memchr(SEMICOLON, line)
            .ok_or_else(|| format!("line {} of chunk at {}: missing ';'", i + 1, range.start))?;
        let val = parse_digits(&line[semi + 1..]).ok_or_else(|| {
            format!("line {} of chunk at {}: bad temperature", i + 1, range.start)
        })?;
        res.entry(&line[..semi]).or_default().add(val);
    }

    Ok(res)
}

/// Per-station totals of `data`, scanned by `workers` scoped threads.
pub fn aggregate(data: &[u8], workers: usize) -> Result<BTreeMap<String, Totals>, BoxError> {
    let chunks = chunk_by_newlines(data, workers);

    let parts = std::thread::scope(|scope| {
        let handles: Vec<_> = chunks
            .iter()
            .cloned()
            .map(|r| scope.spawn(move || scan_chunk(data, r)))
            .collect();

        handles
            .into_iter()
            .map(|h| h.join().unwrap_or_else(|_| Err(BoxError::from("worker panicked"))))
            .collect::<Result<Vec<_>, BoxError>>()
    })?;

    let mut res: AHashMap<&[u8], Totals> = AHashMap::with_capacity(NUM_STATIONS);
    for part in parts {
        for (name, t) in part {
            res.entry(name).or_default().merge(&t);
        }
    }

    res.into_iter()
        .map(|(name, t)| Ok((String::from_utf8(name.to_vec())?, t)))
        .collect()
}

/// Nearest integer, halves toward positive infinity, no negative zero.
fn round_half_up(x: f64) -> f64 {
    let mut t = x.trunc();
    if !(x < 0.0 && t - x == 0.5) && (x - t).abs() >= 0.5 {
        t += 1f64.copysign(x);
    }
    if t == 0.0 { 0.0 } else { t }
}

fn round1(x: f64) -> f64 {
    round_half_up(x * 10.0) / 10.0
}

pub fn format(stations: &BTreeMap<String, Totals>) -> String {
    let mut out = String::with_capacity(stations.len().saturating_mul(32) + 3);
    out.push('{');

    for (idx, (name, v)) in stations.iter().enumerate() {
        if idx > 0 {
            out.push_str(", ");
        }
        let _ = FmtWrite::write_fmt(
            &mut out,
            format_args!(
                "{}={:.1}/{:.1}/{:.1}",
                name,
                round1(v.min as f64 / 10.0),
                round1(v.sum as f64 / 10.0 / v.count as f64),
                round1(v.max as f64 / 10.0)
            ),
        );
    }
    out.push('}');
    out.push('\n');

    out
}

pub fn solve(filename: &str) -> Result<String, BoxError> {
    let file = File::open(filename)?;
    if file.metadata()?.len() == 0 {
        return Err(format!("{filename} is empty").into());
    }
    let mapped_file = unsafe { MmapOptions::new().map(&file)? };
    let workers = rayon::current_num_threads().max(1);

    let stations = aggregate(&mapped_file, workers)?;
    Ok(format(&stations))
}

#[cfg(test)]
mod tests {
    use super::*;
    use findlib::{fixtures, read_file};
    use std::path::Path;

    #[test]
    fn test_solve() {
        let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("../test_cases");
        let cases = fixtures(&root).unwrap_or_else(|e| panic!("walking test_cases: {e}"));
        for case in cases {
            let got = solve(&case.input.to_string_lossy())
                .unwrap_or_else(|e| panic!("solve failed: {e}"));
            let want = read_file(&case.expected);
            assert_eq!(want, got, "mismatch for {}", case.name)
        }
    }

    #[test]
    fn parse_digits_forms() {
        assert_eq!(parse_digits(b"1.2"), Some(12));
        assert_eq!(parse_digits(b"-1.2"), Some(-12));
        assert_eq!(parse_digits(b"99.9"), Some(999));
        assert_eq!(parse_digits(b"-99.9"), Some(-999));
        assert_eq!(parse_digits(b"1.25"), None);
        assert_eq!(parse_digits(b"abc"), None);
    }

    #[test]
    fn worker_count_does_not_matter() {
        let data = generate::measurements(10_000, 3).unwrap();
        let one = aggregate(&data, 1).unwrap();
        for workers in [2, 7, 32] {
            assert_eq!(aggregate(&data, workers).unwrap(), one, "{workers} workers");
        }
        assert_eq!(one.values().map(|t| t.count).sum::<i64>(), 10_000);
    }

    #[test]
    fn last_line_without_newline() {
        let got = aggregate(b"a;1.0\nb;-2.5\na;3.0", 2).unwrap();
        assert_eq!(
            got["a"],
            Totals {
                min: 10,
                max: 30,
                sum: 40,
                count: 2
            }
        );
        assert_eq!(got["b"].sum, -25);
    }

    #[test]
    fn formats_like_reference() {
        let got = aggregate(b"StationA;12.3\nStationB;-4.5\nStationA;9.8\n", 3).unwrap();
        assert_eq!(
            format(&got),
            "{StationA=9.8/11.1/12.3, StationB=-4.5/-4.5/-4.5}\n"
        );
    }

    #[test]
    fn malformed_line() {
        assert!(aggregate(b"a;1.0\nnope\n", 1).is_err());
        assert!(aggregate(b"a;1.0\nb;1.2.3\n", 1).is_err());
    }
}
