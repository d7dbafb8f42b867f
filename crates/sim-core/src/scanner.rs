//! Pattern scanning over flip streams.
//!
//! Both operations share one algorithm: draw flips one at a time, keep the
//! rolling suffix of the history in a [`SuffixWindow`], and test the target
//! pattern(s) against that suffix after every draw.

use crate::error::{Result, SimCoreError};
use crate::window::SuffixWindow;
use types::{Flip, Pattern};

/// Optional guard rails for a single scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanLimits {
    /// Fail with [`SimCoreError::Divergence`] once this many flips have been
    /// drawn without a match. `None` scans without bound.
    pub max_flips: Option<u64>,
}

impl ScanLimits {
    /// Scan with no flip budget. A match is then only bounded statistically.
    pub const UNBOUNDED: ScanLimits = ScanLimits { max_flips: None };

    /// Scan with a hard flip budget.
    pub fn bounded(max_flips: u64) -> Self {
        Self {
            max_flips: Some(max_flips),
        }
    }

    #[inline]
    fn exhausted(&self, drawn: u64) -> bool {
        self.max_flips.is_some_and(|budget| drawn >= budget)
    }
}

/// Which contender of a [`race`] appeared first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RaceWinner {
    First,
    Second,
}

/// Count the flips drawn until `pattern` first appears in the stream.
///
/// The result is always >= `pattern.len()`: the pattern cannot complete
/// before that many flips exist. There is no intrinsic upper bound; pass a
/// bounded [`ScanLimits`] to guard against pathological runs.
pub fn dues<I>(pattern: &Pattern, flips: I, limits: ScanLimits) -> Result<u64>
where
    I: IntoIterator<Item = Flip>,
{
    let mut window = SuffixWindow::new(pattern.len());
    let mut drawn = 0u64;
    for flip in flips {
        window.push(flip);
        drawn += 1;
        if window.ends_with(pattern.flips()) {
            return Ok(drawn);
        }
        if limits.exhausted(drawn) {
            return Err(SimCoreError::Divergence { budget: drawn });
        }
    }
    Err(SimCoreError::SourceExhausted { drawn })
}

/// Race two distinct patterns against one shared stream, returning whichever
/// appears first. `first` is tested before `second` after each draw.
///
/// Requesting a race between identical patterns is a caller contract
/// violation and fails with [`SimCoreError::IdenticalPatterns`].
pub fn race<I>(first: &Pattern, second: &Pattern, flips: I, limits: ScanLimits) -> Result<RaceWinner>
where
    I: IntoIterator<Item = Flip>,
{
    if first == second {
        return Err(SimCoreError::IdenticalPatterns(first.clone()));
    }
    let mut window = SuffixWindow::new(first.len().max(second.len()));
    let mut drawn = 0u64;
    for flip in flips {
        window.push(flip);
        drawn += 1;
        if window.ends_with(first.flips()) {
            return Ok(RaceWinner::First);
        }
        if window.ends_with(second.flips()) {
            return Ok(RaceWinner::Second);
        }
        if limits.exhausted(drawn) {
            return Err(SimCoreError::Divergence { budget: drawn });
        }
    }
    Err(SimCoreError::SourceExhausted { drawn })
}
