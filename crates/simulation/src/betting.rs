//! Betting strategy: bet on exactly 50 heads in 100 flips, 1000 rounds a trial.

use sim_core::take;
use tracing::{debug, info};
use types::{Flip, Winnings};

use crate::config::SimulationConfig;
use crate::parallel;

/// Rounds played per trial.
pub const ROUNDS_PER_TRIAL: usize = 1000;
/// Flips drawn per round.
pub const FLIPS_PER_ROUND: usize = 100;
/// Head count that pays out.
pub const WINNING_HEAD_COUNT: usize = 50;
/// Payout on a winning round.
pub const ROUND_PAYOUT: Winnings = Winnings(19);
/// Stake lost on any other round.
pub const ROUND_STAKE: Winnings = Winnings(1);
/// Opening balance of a trial.
pub const OPENING_BALANCE: Winnings = Winnings(1);
/// A trial nets a profit when its final balance reaches this.
pub const PROFIT_THRESHOLD: Winnings = Winnings(1000);

/// Outcome of a betting simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BettingSummary {
    /// Trials that ended at or above [`PROFIT_THRESHOLD`].
    pub profitable: usize,
    /// Total trials played.
    pub trials: usize,
}

/// Play one round: draw 100 flips, pay out on exactly 50 heads.
fn round_result<I>(flips: I) -> Winnings
where
    I: IntoIterator<Item = Flip>,
{
    let heads = take(flips, FLIPS_PER_ROUND)
        .into_iter()
        .filter(|&flip| flip == Flip::Heads)
        .count();
    if heads == WINNING_HEAD_COUNT {
        ROUND_PAYOUT
    } else {
        -ROUND_STAKE
    }
}

/// Play a full trial, drawing each round's flips from its own fresh source.
fn trial_balance<S, F>(mut source_for_round: F) -> Winnings
where
    S: IntoIterator<Item = Flip>,
    F: FnMut(usize) -> S,
{
    let mut balance = OPENING_BALANCE;
    for round in 0..ROUNDS_PER_TRIAL {
        balance += round_result(source_for_round(round));
    }
    balance
}

/// Count how many of `config.iterations` independent trials net a profit.
pub fn betting_success(config: &SimulationConfig) -> BettingSummary {
    let trials = config.iterations;
    info!(trials, "running betting trials");

    let profitable = parallel::map_counter(
        trials,
        |trial| {
            let balance = trial_balance(|round| {
                let stream = (trial * ROUNDS_PER_TRIAL + round) as u64;
                config.source(stream)
            });
            debug!(trial, balance = %balance, "trial complete");
            balance >= PROFIT_THRESHOLD
        },
        config.force_sequential,
    )
    .into_iter()
    .filter(|&made_money| made_money)
    .count();

    BettingSummary { profitable, trials }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sim_core::ScriptedFlips;

    fn round_script(heads: usize) -> ScriptedFlips {
        let mut flips = vec![Flip::Heads; heads];
        flips.resize(FLIPS_PER_ROUND, Flip::Tails);
        ScriptedFlips::new(flips)
    }

    #[test]
    fn test_round_with_exactly_fifty_heads_pays_out() {
        assert_eq!(round_result(round_script(50)), ROUND_PAYOUT);
    }

    #[test]
    fn test_round_with_any_other_head_count_costs_the_stake() {
        assert_eq!(round_result(round_script(49)), -ROUND_STAKE);
        assert_eq!(round_result(round_script(51)), -ROUND_STAKE);
        assert_eq!(round_result(round_script(0)), -ROUND_STAKE);
    }

    #[test]
    fn test_trial_of_winning_rounds_is_profitable() {
        let balance = trial_balance(|_| round_script(50));
        assert_eq!(balance, Winnings(1 + 19 * 1000));
        assert!(balance >= PROFIT_THRESHOLD);
    }

    #[test]
    fn test_trial_of_losing_rounds_goes_negative() {
        let balance = trial_balance(|_| round_script(49));
        assert_eq!(balance, Winnings(1 - 1000));
        assert!(balance < PROFIT_THRESHOLD);
    }

    #[test]
    fn test_betting_summary_counts_trials() {
        let config = SimulationConfig::new(2).with_seed(3);
        let summary = betting_success(&config);
        assert_eq!(summary.trials, 2);
        assert!(summary.profitable <= summary.trials);
    }
}
