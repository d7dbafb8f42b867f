//! Parallel execution helpers for the evaluators.
//!
//! The `cfg` logic for the `parallel` feature lives here in one place,
//! keeping the evaluator call sites clean. Each helper accepts a
//! `force_sequential` override so a run can be pinned to one thread at
//! runtime regardless of the compiled feature set.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Map a function over `0..count`, potentially in parallel.
///
/// Results keep the index order (parallel iteration preserves order).
#[inline]
pub fn map_counter<F, R>(count: usize, f: F, force_sequential: bool) -> Vec<R>
where
    F: Fn(usize) -> R + Sync + Send,
    R: Send,
{
    #[cfg(feature = "parallel")]
    {
        if force_sequential {
            (0..count).map(f).collect()
        } else {
            (0..count).into_par_iter().map(f).collect()
        }
    }

    #[cfg(not(feature = "parallel"))]
    {
        let _ = force_sequential; // Suppress unused warning
        (0..count).map(f).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_counter_preserves_order() {
        let doubled = map_counter(5, |i| i * 2, false);
        assert_eq!(doubled, vec![0, 2, 4, 6, 8]);
    }

    #[test]
    fn test_map_counter_sequential_override_matches() {
        let parallel = map_counter(100, |i| i + 1, false);
        let sequential = map_counter(100, |i| i + 1, true);
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_map_counter_empty_range() {
        let empty: Vec<usize> = map_counter(0, |i| i, false);
        assert!(empty.is_empty());
    }
}
