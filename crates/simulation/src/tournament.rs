//! Tournament win rates: every catalogue pattern raced against every other.

use sim_core::{race, RaceWinner, Result};
use tracing::{debug, info};
use types::{pattern_catalogue, Pattern};

use crate::config::SimulationConfig;
use crate::{parallel, stats};

/// Per-pattern tournament summary.
#[derive(Debug, Clone)]
pub struct TournamentSummary {
    pub pattern: Pattern,
    /// Mean win fraction across every opposing pattern.
    pub win_rate: f64,
}

/// Race every ordered pair of distinct catalogue patterns `iterations` times
/// and rank patterns by mean win rate, descending.
///
/// A pattern's win rate aggregates its win fraction over all opponents, each
/// opponent weighted equally.
pub fn tournament_win_rates(config: &SimulationConfig) -> Result<Vec<TournamentSummary>> {
    let patterns = pattern_catalogue(config.pattern_length);
    let iterations = config.iterations;
    let n = patterns.len();
    info!(iterations, patterns = n, "racing pattern tournament");

    let mut summaries = parallel::map_counter(
        n,
        |idx| {
            let contender = &patterns[idx];
            let mut opponent_rates = Vec::with_capacity(n - 1);
            for (opp_idx, opponent) in patterns.iter().enumerate() {
                if opp_idx == idx {
                    continue;
                }
                let mut wins = 0usize;
                for i in 0..iterations {
                    let stream = ((idx * n + opp_idx) * iterations + i) as u64;
                    let winner = race(contender, opponent, config.source(stream), config.limits())?;
                    if winner == RaceWinner::First {
                        wins += 1;
                    }
                }
                let fraction = if iterations == 0 {
                    0.0
                } else {
                    wins as f64 / iterations as f64
                };
                opponent_rates.push(fraction);
            }
            let win_rate = stats::mean(&opponent_rates);
            debug!(pattern = %contender, win_rate, "tournament win rate estimated");
            Ok(TournamentSummary {
                pattern: contender.clone(),
                win_rate,
            })
        },
        config.force_sequential,
    )
    .into_iter()
    .collect::<Result<Vec<_>>>()?;

    summaries.sort_by(|a, b| b.win_rate.total_cmp(&a.win_rate));
    Ok(summaries)
}
