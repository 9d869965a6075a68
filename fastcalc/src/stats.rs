/// Running aggregate of one station, in tenths of a degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StationStats {
    pub min: i64,
    pub max: i64,
    pub sum: i64,
    pub count: i64,
}

impl StationStats {
    /// Stats after the first observation.
    #[inline]
    pub fn new(value: i64) -> Self {
        Self {
            min: value,
            max: value,
            sum: value,
            count: 1,
        }
    }

    #[inline]
    pub fn add(&mut self, value: i64) {
        self.min = self.min.min(value);
        self.max = self.max.max(value);
        self.sum += value;
        self.count += 1;
    }

    /// Folds another aggregate of the same station into this one.
    #[inline]
    pub fn merge(&mut self, other: &StationStats) {
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
        self.sum += other.sum;
        self.count += other.count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_tracks_extremes() {
        let mut s = StationStats::new(12);
        s.add(-40);
        s.add(99);
        assert_eq!(
            s,
            StationStats {
                min: -40,
                max: 99,
                sum: 71,
                count: 3
            }
        );
    }

    #[test]
    fn merge_equals_adding_everything() {
        let mut left = StationStats::new(5);
        left.add(-3);
        let mut right = StationStats::new(17);
        right.add(0);

        let mut whole = StationStats::new(5);
        for v in [-3, 17, 0] {
            whole.add(v);
        }

        left.merge(&right);
        assert_eq!(left, whole);
    }
}
