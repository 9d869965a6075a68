//! Per-chunk station table keyed by name fingerprint.
//!
//! Buckets hold indexes into dense arrays of hashes, names and stats. Probing is
//! linear and, unless name checking is enabled, stops at the first entry with an
//! equal hash: two names with the same 64-bit hash are counted as one station.

use crate::error::{CalcError, Result};
use crate::merge::StationMap;
use crate::stats::StationStats;

/// Most distinct stations one chunk may hold.
pub const MAX_STATIONS: usize = 10_000;
// Power of two, keeps the load factor of a full table near 0.6.
const BUCKETS: usize = 1 << 14;
const EMPTY: u32 = 0;
const INITIAL_STATIONS: usize = 512;

pub struct StationTable<'a> {
    // EMPTY or dense index + 1
    buckets: Box<[u32]>,
    hashes: Vec<u64>,
    names: Vec<&'a [u8]>,
    stats: Vec<StationStats>,
    verify_names: bool,
}

impl<'a> StationTable<'a> {
    pub fn new(verify_names: bool) -> Self {
        Self {
            buckets: vec![EMPTY; BUCKETS].into_boxed_slice(),
            hashes: Vec::with_capacity(INITIAL_STATIONS),
            names: Vec::with_capacity(INITIAL_STATIONS),
            stats: Vec::with_capacity(INITIAL_STATIONS),
            verify_names,
        }
    }

    pub fn len(&self) -> usize {
        self.stats.len()
    }

    /// Adds one observation of the station `name` whose hash is `hash`.
    #[inline]
    pub fn record(&mut self, hash: u64, name: &'a [u8], value: i64) -> Result<()> {
        let mask = BUCKETS - 1;
        let mut idx = hash as usize & mask;
        loop {
            let slot = self.buckets[idx];
            if slot == EMPTY {
                return self.insert(idx, hash, name, value);
            }
            let i = slot as usize - 1;
            if self.hashes[i] == hash && (!self.verify_names || self.names[i] == name) {
                self.stats[i].add(value);
                return Ok(());
            }
            idx = (idx + 1) & mask;
        }
    }

    #[cold]
    fn insert(&mut self, idx: usize, hash: u64, name: &'a [u8], value: i64) -> Result<()> {
        if self.stats.len() == MAX_STATIONS {
            return Err(CalcError::TooManyStations(MAX_STATIONS));
        }
        self.buckets[idx] = self.stats.len() as u32 + 1;
        self.hashes.push(hash);
        self.names.push(name);
        self.stats.push(StationStats::new(value));
        Ok(())
    }

    #[cfg(test)]
    pub fn get(&self, name: &[u8]) -> Option<&StationStats> {
        self.names
            .iter()
            .position(|n| *n == name)
            .map(|i| &self.stats[i])
    }

    #[cfg(test)]
    pub fn hash_of(&self, name: &[u8]) -> Option<u64> {
        self.names
            .iter()
            .position(|n| *n == name)
            .map(|i| self.hashes[i])
    }

    pub fn into_map(self) -> StationMap<'a> {
        self.names.into_iter().zip(self.stats).collect()
    }
}
