//! Dues ranking: expected flips until each catalogue pattern first appears.

use sim_core::{dues, Result};
use tracing::{debug, info};
use types::{pattern_catalogue, Pattern};

use crate::config::SimulationConfig;
use crate::{parallel, stats};

/// Per-pattern dues summary.
#[derive(Debug, Clone)]
pub struct DuesSummary {
    pub pattern: Pattern,
    /// Mean flips drawn until the pattern first appeared.
    pub mean_flips: f64,
    /// Dues recorded at each repetition, in run order.
    pub samples: Vec<u64>,
}

/// Estimate the expected dues of every catalogue pattern, ranked ascending:
/// the pattern that tends to appear soonest comes first.
///
/// Each repetition scans a fresh flip source, so the samples for one pattern
/// are mutually independent and independent of every other pattern's.
pub fn rank_by_mean_dues(config: &SimulationConfig) -> Result<Vec<DuesSummary>> {
    let patterns = pattern_catalogue(config.pattern_length);
    let iterations = config.iterations;
    info!(
        iterations,
        patterns = patterns.len(),
        "ranking patterns by mean dues"
    );

    let mut summaries = parallel::map_counter(
        patterns.len(),
        |idx| {
            let pattern = &patterns[idx];
            let samples = (0..iterations)
                .map(|i| {
                    let stream = (idx * iterations + i) as u64;
                    dues(pattern, config.source(stream), config.limits())
                })
                .collect::<Result<Vec<u64>>>()?;
            let mean_flips = stats::mean_u64(&samples);
            debug!(pattern = %pattern, mean_flips, "dues mean estimated");
            Ok(DuesSummary {
                pattern: pattern.clone(),
                mean_flips,
                samples,
            })
        },
        config.force_sequential,
    )
    .into_iter()
    .collect::<Result<Vec<_>>>()?;

    summaries.sort_by(|a, b| a.mean_flips.total_cmp(&b.mean_flips));
    Ok(summaries)
}
