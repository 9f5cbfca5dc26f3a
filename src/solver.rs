use indexmap::IndexMap;
use tracing::{debug, trace, warn};

/// Complement -> the one combination kept for it at the current depth.
///
/// Complements are `i128` so that subtracting `i64` values at any depth
/// cannot overflow.
type Table = IndexMap<i128, Vec<usize>>;

/// K-Sum search over a memoized complement table.
///
/// Each depth keeps at most one combination per complement (the last one
/// written), so the search is `O(k * n^2)` but may miss a valid combination
/// whose complement collided with another at some depth.
#[derive(Debug, Clone, Copy, Default)]
pub struct Solver {
    budget: Option<u64>,
}

impl Solver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop after examining `steps` candidate extensions.
    pub fn with_budget(mut self, steps: u64) -> Self {
        self.budget = Some(steps);
        self
    }

    /// Finds `k` distinct indices into `values` whose values sum to `target`.
    pub fn solve(&self, values: &[i64], target: i64, k: usize) -> Option<Vec<usize>> {
        if k == 0 || k > values.len() {
            debug!(k, len = values.len(), "count out of range");
            return None;
        }

        let mut steps = 0u64;
        let mut table = Table::with_capacity(values.len());

        for (i, &v) in values.iter().enumerate() {
            let complement = i128::from(target) - i128::from(v);
            if k == 1 && complement == 0 {
                trace!(index = i, "hit at depth 1");
                return Some(vec![i]);
            }
            table.insert(complement, vec![i]);
        }

        for depth in 2..=k {
            debug!(depth, entries = table.len(), "expanding table");

            let mut next = Table::with_capacity(table.len());
            for (&complement, combo) in &table {
                for (i, &v) in values.iter().enumerate() {
                    if combo.contains(&i) {
                        continue;
                    }

                    steps += 1;
                    if self.budget.is_some_and(|budget| steps > budget) {
                        warn!(depth, steps, "work budget exhausted");
                        return None;
                    }

                    let remaining = complement - i128::from(v);
                    let mut extended = Vec::with_capacity(depth);
                    extended.extend_from_slice(combo);
                    extended.push(i);

                    if depth == k && remaining == 0 {
                        trace!(depth, ?extended, "hit");
                        return Some(extended);
                    }
                    next.insert(remaining, extended);
                }
            }

            if next.is_empty() {
                debug!(depth, "table exhausted");
                return None;
            }
            table = next;
        }

        None
    }
}

/// Finds `k` distinct indices into `values` whose values sum to `target`,
/// without a work budget.
pub fn solve(values: &[i64], target: i64, k: usize) -> Option<Vec<usize>> {
    Solver::new().solve(values, target, k)
}

/// Checks that `indices` is a valid answer: `k` distinct in-range positions
/// whose values sum to `target`.
pub fn verify(values: &[i64], target: i64, k: usize, indices: &[usize]) -> bool {
    if indices.len() != k || indices.iter().any(|&i| i >= values.len()) {
        return false;
    }

    let distinct = indices
        .iter()
        .enumerate()
        .all(|(n, i)| !indices[..n].contains(i));

    distinct && selected_sum(values, indices) == i128::from(target)
}

/// Sum of the values at `indices`.
pub fn selected_sum(values: &[i64], indices: &[usize]) -> i128 {
    indices.iter().map(|&i| i128::from(values[i])).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo;

    #[test]
    fn test_two_sum() {
        assert_eq!(solve(&[2, 7, 11, 15], 9, 2), Some(vec![0, 1]));
        assert_eq!(solve(&[1, 2, 3, 4, 5], 100, 2), None);
        // the later index wins the shared complement
        assert_eq!(solve(&[3, 3], 6, 2), Some(vec![1, 0]));
        assert_eq!(solve(&[3], 6, 2), None);
    }

    #[test]
    fn test_single_value() {
        assert_eq!(solve(&[4, -1, 9, 9], 9, 1), Some(vec![2]));
        assert_eq!(solve(&[4, -1, 9], -1, 1), Some(vec![1]));
        assert_eq!(solve(&[4, -1, 9], 5, 1), None);
    }

    #[test]
    fn test_count_out_of_range() {
        assert_eq!(solve(&[], 0, 0), None);
        assert_eq!(solve(&[], 0, 1), None);
        assert_eq!(solve(&[1, 2, 3], 6, 0), None);
        assert_eq!(solve(&[1, 2, 3], 6, 4), None);
        assert_eq!(solve(&[0, 0], 0, 3), None);
    }

    #[test]
    fn test_uses_every_index() {
        let values = [5, -2, 8, 1];
        let found = solve(&values, 12, 4).unwrap();
        assert!(verify(&values, 12, 4, &found));
    }

    #[test]
    fn test_negative_and_duplicate_values() {
        let values = [-4, -4, 10, 3, -4, 7];
        let found = solve(&values, -12, 3).unwrap();
        assert!(verify(&values, -12, 3, &found));

        let found = solve(&values, 6, 3).unwrap();
        assert!(verify(&values, 6, 3, &found));
    }

    #[test]
    fn test_extreme_values_do_not_overflow() {
        let values = [i64::MAX, i64::MAX, i64::MIN];
        assert_eq!(solve(&values, -1, 2), Some(vec![1, 2]));
        assert_eq!(solve(&values, i64::MIN, 2), None);
    }

    #[test]
    fn test_demo_problem() {
        let values = demo::VALUES;
        let found = solve(&values, demo::TARGET, demo::COUNT).unwrap();
        assert!(verify(&values, demo::TARGET, demo::COUNT, &found));
        assert_eq!(selected_sum(&values, &found), 50);
    }

    #[test]
    fn test_deterministic() {
        let values = demo::VALUES;
        let first = solve(&values, 17, 5);
        for _ in 0..3 {
            assert_eq!(solve(&values, 17, 5), first);
        }
    }

    #[test]
    fn test_results_are_valid() {
        let values = [1, 6, -3, 6, 2, 9, -7, 0, 4];
        for k in 1..=values.len() {
            for target in -15..=30 {
                if let Some(found) = solve(&values, target, k) {
                    assert!(verify(&values, target, k, &found), "{target} {k} {found:?}");
                }
            }
        }
    }

    #[test]
    fn test_budget() {
        let values = demo::VALUES;
        assert_eq!(Solver::new().with_budget(10).solve(&values, 50, 10), None);
        assert_eq!(
            Solver::new().with_budget(1_000).solve(&[2, 7, 11, 15], 9, 2),
            Some(vec![0, 1])
        );
    }

    #[test]
    fn test_verify() {
        let values = [2, 7, 11, 15];
        assert!(verify(&values, 9, 2, &[1, 0]));
        assert!(!verify(&values, 9, 2, &[0, 0]));
        assert!(!verify(&values, 9, 3, &[0, 1]));
        assert!(!verify(&values, 9, 2, &[0, 4]));
        assert!(!verify(&values, 10, 2, &[0, 1]));
    }
}
