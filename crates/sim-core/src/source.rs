//! Flip sources: the random stream and its deterministic test double.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use types::Flip;

/// An unbounded stream of independent fair coin flips.
///
/// Each instance owns its own RNG, so two sources never share state and
/// repetitions that each build a fresh source are statistically independent.
pub struct RandomFlips {
    rng: StdRng,
}

impl RandomFlips {
    /// Create a source seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a source with a fixed seed (for reproducible runs and tests).
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomFlips {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for RandomFlips {
    type Item = Flip;

    fn next(&mut self) -> Option<Flip> {
        Some(if self.rng.random_bool(0.5) {
            Flip::Heads
        } else {
            Flip::Tails
        })
    }
}

/// A finite source replaying a fixed flip script.
///
/// The deterministic stand-in for [`RandomFlips`] in tests: yields the
/// scripted flips in order, then exhausts.
#[derive(Debug, Clone)]
pub struct ScriptedFlips {
    flips: std::vec::IntoIter<Flip>,
}

impl ScriptedFlips {
    /// Create a source that yields the given flips in order.
    pub fn new(flips: Vec<Flip>) -> Self {
        Self {
            flips: flips.into_iter(),
        }
    }
}

impl Iterator for ScriptedFlips {
    type Item = Flip;

    fn next(&mut self) -> Option<Flip> {
        self.flips.next()
    }
}

/// Collect up to `n` values from a source.
///
/// Returns exactly `n` values when the source has that many left, all
/// remaining values when it exhausts early, and an empty vec for `n == 0`.
pub fn take<I: IntoIterator>(source: I, n: usize) -> Vec<I::Item> {
    source.into_iter().take(n).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_one_gets_first_value() {
        assert_eq!(take(1..=10, 1), vec![1]);
    }

    #[test]
    fn test_take_five_gets_first_five_values() {
        assert_eq!(take(1..=10, 5), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_take_more_than_available_gets_all() {
        assert_eq!(take(1..=3, 5), vec![1, 2, 3]);
    }

    #[test]
    fn test_take_zero_gets_empty_vec() {
        assert_eq!(take(1..=3, 0), Vec::<i32>::new());
    }

    #[test]
    fn test_random_source_yields_requested_flips() {
        assert_eq!(take(RandomFlips::new(), 10).len(), 10);
    }

    #[test]
    fn test_seeded_sources_are_reproducible() {
        let a = take(RandomFlips::with_seed(42), 64);
        let b = take(RandomFlips::with_seed(42), 64);
        assert_eq!(a, b);
    }

    #[test]
    fn test_scripted_source_replays_then_exhausts() {
        let mut source = ScriptedFlips::new(vec![Flip::Heads, Flip::Tails]);
        assert_eq!(source.next(), Some(Flip::Heads));
        assert_eq!(source.next(), Some(Flip::Tails));
        assert_eq!(source.next(), None);
    }
}
