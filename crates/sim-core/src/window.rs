//! Rolling suffix window over a flip stream.

use std::collections::VecDeque;
use types::Flip;

/// A fixed-capacity rolling window holding the most recent flips of a scan.
///
/// The scanner only ever needs the last `pattern.len()` flips: a scan stops
/// at the first occurrence, so the occurrence is always seen as a suffix
/// match at the flip that completes it. Keeping just the suffix makes each
/// step O(pattern length) regardless of how long the scan runs.
#[derive(Debug, Clone)]
pub struct SuffixWindow {
    data: VecDeque<Flip>,
    capacity: usize,
}

impl SuffixWindow {
    /// Create a window holding at most `capacity` flips.
    ///
    /// # Panics
    /// Panics if capacity is 0.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "SuffixWindow capacity must be > 0");
        Self {
            data: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Push a flip into the window.
    ///
    /// If the window is full, the oldest flip is removed and returned.
    pub fn push(&mut self, flip: Flip) -> Option<Flip> {
        let evicted = if self.data.len() >= self.capacity {
            self.data.pop_front()
        } else {
            None
        };
        self.data.push_back(flip);
        evicted
    }

    /// Number of flips currently in the window.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the window is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The window's capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// True when the window currently ends with `pattern`.
    pub fn ends_with(&self, pattern: &[Flip]) -> bool {
        if pattern.len() > self.data.len() {
            return false;
        }
        self.data
            .iter()
            .rev()
            .zip(pattern.iter().rev())
            .all(|(a, b)| a == b)
    }
}
