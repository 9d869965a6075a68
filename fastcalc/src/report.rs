use crate::error::Result;
use crate::merge::StationMap;
use crate::round::Summary;
use crate::stats::StationStats;
use std::fmt;

/// Final per-station results, sorted by name bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    stations: Vec<(String, StationStats)>,
}

impl Report {
    /// Takes ownership of the names; fails if one is not UTF-8.
    pub fn new(map: StationMap<'_>) -> Result<Self> {
        let mut stations = map
            .into_iter()
            .map(|(name, stats)| Ok((String::from_utf8(name.to_vec())?, stats)))
            .collect::<Result<Vec<_>>>()?;
        stations.sort_unstable_by(|a, b| a.0.cmp(&b.0));
        Ok(Self { stations })
    }

    pub fn stations(&self) -> &[(String, StationStats)] {
        &self.stations
    }

    #[cfg(test)]
    pub(crate) fn get(&self, name: &str) -> Option<&StationStats> {
        self.stations
            .binary_search_by(|(n, _)| n.as_str().cmp(name))
            .ok()
            .map(|i| &self.stations[i].1)
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Total number of records aggregated.
    pub fn rows(&self) -> i64 {
        self.stations.iter().map(|(_, s)| s.count).sum()
    }
}

/// `{name=min/mean/max, ...}`, one decimal digit per value.
impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (name, stats)) in self.stations.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            let s = Summary::from(stats);
            write!(f, "{}={:.1}/{:.1}/{:.1}", name, s.min, s.mean, s.max)?;
        }
        f.write_str("}")
    }
}
