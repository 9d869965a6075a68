use crate::stats::StationStats;

/// Rounds to the nearest integer with halves going toward positive infinity,
/// so `-1.5` becomes `-1` and `1.5` becomes `2`. Zero results are always `+0.0`.
pub fn round_half_up(x: f64) -> f64 {
    let mut t = x.trunc();
    let negative_half = x < 0.0 && t - x == 0.5;
    if !negative_half && (x - t).abs() >= 0.5 {
        t += 1f64.copysign(x);
    }
    if t == 0.0 { 0.0 } else { t }
}

/// Rounds to one decimal place with [`round_half_up`].
pub fn round_tenths(x: f64) -> f64 {
    round_half_up(x * 10.0) / 10.0
}

/// Display values of one station, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub min: f64,
    pub mean: f64,
    pub max: f64,
}

impl From<&StationStats> for Summary {
    fn from(s: &StationStats) -> Self {
        Self {
            min: round_tenths(s.min as f64 / 10.0),
            mean: round_tenths(s.sum as f64 / 10.0 / s.count as f64),
            max: round_tenths(s.max as f64 / 10.0),
        }
    }
}
