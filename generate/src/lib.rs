//! Synthetic `name;temperature` measurement files.
//!
//! Each row picks a station uniformly and samples its temperature from a normal
//! distribution around the station's mean, clamped to the `-99.9..=99.9` range
//! and rounded to one decimal.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use std::io::{self, Write};

const STD_DEV: f64 = 10.0;
const MAX_TENTHS: i64 = 999;

/// Station names with their mean temperature.
pub const STATIONS: &[(&str, f64)] = &[
    ("Abha", 18.0),
    ("Abidjan", 26.0),
    ("Accra", 26.4),
    ("Addis Ababa", 16.0),
    ("Adelaide", 17.3),
    ("Anchorage", 2.8),
    ("Ashgabat", 17.1),
    ("Baghdad", 22.77),
    ("Bangkok", 28.6),
    ("Bulawayo", 18.9),
    ("Cabo San Lucas", 23.9),
    ("Chihuahua", 18.6),
    ("Dakar", 24.0),
    ("Dikson", -11.1),
    ("Dodoma", 22.7),
    ("Hamburg", 9.7),
    ("Honiara", 26.5),
    ("Istanbul", 13.9),
    ("Jakarta", 26.7),
    ("Kunming", 15.7),
    ("La Ceiba", 26.2),
    ("Ljubljana", 10.9),
    ("Mexicali", 23.1),
    ("Murmansk", 0.6),
    ("Nouakchott", 25.7),
    ("Palembang", 27.3),
    ("Petropavlovsk-Kamchatsky", 1.9),
    ("Reykjavík", 4.3),
    ("São Paulo", 19.8),
    ("St. John's", 5.0),
    ("Thessaloniki", 16.0),
    ("Ürümqi", 7.4),
    ("Vladivostok", 4.9),
    ("Yakutsk", -8.8),
    ("Yellowknife", -4.3),
    ("Zürich", 9.3),
];

/// Temperature in tenths of a degree for one sample.
fn tenths(sample: f64) -> i64 {
    ((sample * 10.0).round() as i64).clamp(-MAX_TENTHS, MAX_TENTHS)
}

fn write_row<W: Write>(out: &mut W, name: &str, t: i64) -> io::Result<()> {
    let sign = if t < 0 { "-" } else { "" };
    let abs = t.abs();
    writeln!(out, "{name};{sign}{}.{}", abs / 10, abs % 10)
}

/// Writes `rows` records; the same `seed` always produces the same bytes.
pub fn write_measurements<W: Write>(out: &mut W, rows: usize, seed: u64) -> io::Result<()> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dists: Vec<(&str, Normal<f64>)> = STATIONS
        .iter()
        .map(|&(name, mean)| {
            let normal = Normal::new(mean, STD_DEV)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;
            Ok((name, normal))
        })
        .collect::<io::Result<_>>()?;

    for _ in 0..rows {
        let (name, normal) = &dists[rng.random_range(0..dists.len())];
        write_row(out, name, tenths(normal.sample(&mut rng)))?;
    }
    Ok(())
}

/// In-memory variant of [`write_measurements`].
pub fn measurements(rows: usize, seed: u64) -> io::Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(rows * 16);
    write_measurements(&mut buf, rows, seed)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_match_record_format() {
        let data = measurements(5_000, 1).unwrap();
        let text = std::str::from_utf8(&data).unwrap();
        assert!(text.ends_with('\n'));
        let mut rows = 0;
        for line in text.lines() {
            let (name, value) = line.split_once(';').unwrap();
            assert!(STATIONS.iter().any(|(n, _)| *n == name), "{name}");
            let digits = value.strip_prefix('-').unwrap_or(value);
            let (int, frac) = digits.split_once('.').unwrap();
            assert!((1..=2).contains(&int.len()), "{value}");
            assert_eq!(frac.len(), 1, "{value}");
            assert!(int.bytes().chain(frac.bytes()).all(|b| b.is_ascii_digit()));
            rows += 1;
        }
        assert_eq!(rows, 5_000);
    }

    #[test]
    fn seeded_output_is_reproducible() {
        assert_eq!(measurements(1_000, 9).unwrap(), measurements(1_000, 9).unwrap());
        assert_ne!(measurements(1_000, 9).unwrap(), measurements(1_000, 10).unwrap());
    }

    struct Full;

    impl Write for Full {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::StorageFull, "full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_errors_are_returned() {
        let err = write_measurements(&mut Full, 10, 1).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::StorageFull);
        assert_eq!(measurements(0, 1).unwrap(), b"");
    }

    #[test]
    fn values_are_clamped() {
        assert_eq!(tenths(150.0), 999);
        assert_eq!(tenths(-123.45), -999);
        assert_eq!(tenths(-0.04), 0);
        assert_eq!(tenths(12.34), 123);
    }
}
