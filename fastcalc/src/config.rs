/// FNV-1a 64-bit offset basis, the default hash seed.
pub const FNV_OFFSET64: u64 = 14695981039346656037;
pub const FNV_PRIME64: u64 = 1099511628211;

/// Folds one name byte into a running FNV-1a hash.
#[inline(always)]
pub(crate) fn fnv1a_step(hash: u64, b: u8) -> u64 {
    (hash ^ b as u64).wrapping_mul(FNV_PRIME64)
}

/// Run settings shared read-only by every worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Number of chunks the input is split into, and threads in the pool.
    pub workers: usize,
    /// Start value of the rolling station-name hash.
    pub seed: u64,
    /// Compare name bytes on a hash match instead of trusting the fingerprint.
    pub verify_names: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workers: rayon::current_num_threads().max(1),
            seed: FNV_OFFSET64,
            verify_names: false,
        }
    }
}

impl Config {
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_name_check(mut self, verify_names: bool) -> Self {
        self.verify_names = verify_names;
        self
    }

    /// FNV-1a over `name`, starting from the configured seed.
    #[cfg(test)]
    pub(crate) fn hash(&self, name: &[u8]) -> u64 {
        name.iter().fold(self.seed, |h, &b| fnv1a_step(h, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_defaults() {
        let cfg = Config::default()
            .with_workers(3)
            .with_seed(7)
            .with_name_check(true);
        assert_eq!(cfg.workers, 3);
        assert_eq!(cfg.seed, 7);
        assert!(cfg.verify_names);
    }

    #[test]
    fn default_hash_is_fnv1a() {
        let cfg = Config::default();
        assert_eq!(cfg.hash(b""), FNV_OFFSET64);
        // Published FNV-1a 64 test vector.
        assert_eq!(cfg.hash(b"a"), 0xaf63dc4c8601ec8c);
    }

    #[test]
    fn seed_changes_hash() {
        let a = Config::default().hash(b"Hamburg");
        let b = Config::default().with_seed(1).hash(b"Hamburg");
        assert_ne!(a, b);
    }
}
