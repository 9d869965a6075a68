use crate::stats::StationStats;
use ahash::AHashMap;

/// Station name, borrowed from the input, to its aggregate.
pub type StationMap<'a> = AHashMap<&'a [u8], StationStats>;

/// Folds per-chunk results into one map.
///
/// min, max and sum are commutative and associative, so neither the order of
/// `parts` nor where the chunk boundaries fell changes the result.
pub fn merge<'a, I>(parts: I) -> StationMap<'a>
where
    I: IntoIterator<Item = StationMap<'a>>,
{
    let mut parts = parts.into_iter();
    let mut acc = parts.next().unwrap_or_default();
    for part in parts {
        for (name, stats) in part {
            acc.entry(name)
                .and_modify(|m| m.merge(&stats))
                .or_insert(stats);
        }
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn map<'a>(entries: Vec<(&'a str, Vec<i64>)>) -> StationMap<'a> {
        let mut m = StationMap::default();
        for (name, values) in entries {
            let mut s = StationStats::new(values[0]);
            for &v in &values[1..] {
                s.add(v);
            }
            m.insert(name.as_bytes(), s);
        }
        m
    }

    #[test]
    fn adopts_new_and_combines_existing() {
        let a = map(vec![("Oslo", vec![10, -5]), ("Kyiv", vec![3])]);
        let b = map(vec![("Oslo", vec![40]), ("Baku", vec![-120, 7])]);
        let merged = merge([a, b]);
        assert_eq!(
            merged,
            map(vec![("Oslo", vec![10, -5, 40]), ("Kyiv", vec![3]), ("Baku", vec![-120, 7])])
        );
    }

    #[test]
    fn order_independent() {
        let parts = || {
            vec![
                map(vec![("A", vec![1, 2]), ("B", vec![-3])]),
                map(vec![("B", vec![99]), ("C", vec![0])]),
                map(vec![("A", vec![-50]), ("C", vec![5, 6])]),
            ]
        };
        let forward = merge(parts());
        let backward = merge(parts().into_iter().rev());
        let rotated = {
            let mut p = parts();
            p.rotate_left(1);
            merge(p)
        };
        assert_eq!(forward, backward);
        assert_eq!(forward, rotated);
    }

    #[test]
    fn nothing_to_merge() {
        assert!(merge(Vec::new()).is_empty());
    }
}
