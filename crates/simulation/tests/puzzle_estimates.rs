//! Statistical regression tests for the simulation engine.
//!
//! These assert tolerance ranges around known analytic values, not exact
//! equality: the engine is a Monte Carlo estimator and its answers wander
//! within sampling error. Ranges are sized at many standard errors so a
//! correct engine effectively never trips them.

use sim_core::{dues, race, RaceWinner, RandomFlips, ScanLimits};
use simulation::{betting_success, rank_by_mean_dues, tournament_win_rates, SimulationConfig};
use types::Pattern;

fn pattern(s: &str) -> Pattern {
    s.parse().unwrap()
}

/// The analytic expectation for `HHHHH` is 62 flips. With 10,000 independent
/// trials the sample mean lands within a flip or two of that; the wide
/// bracket below only fails on a broken engine, not an unlucky run.
#[test]
fn mean_dues_for_all_heads_tracks_the_analytic_expectation() {
    let samples: Vec<u64> = (0..10_000)
        .map(|_| {
            dues(
                &pattern("HHHHH"),
                RandomFlips::new(),
                ScanLimits::UNBOUNDED,
            )
            .unwrap()
        })
        .collect();
    let mean = samples.iter().sum::<u64>() as f64 / samples.len() as f64;

    assert!(
        (56.0..=68.0).contains(&mean),
        "mean dues for HHHHH was {}, expected near 62",
        mean
    );
}

/// `HHHHH` and `TTTTT` are the slowest patterns to appear (mean 62 against
/// 42 for the runner-up), so the ascending ranking must end with one of them.
#[test]
fn uniform_patterns_rank_slowest_in_the_dues_ranking() {
    let config = SimulationConfig::new(500).with_seed(7);
    let ranking = rank_by_mean_dues(&config).unwrap();

    assert_eq!(ranking.len(), 32);
    let slowest = ranking.last().unwrap();
    assert!(
        slowest.pattern == pattern("HHHHH") || slowest.pattern == pattern("TTTTT"),
        "slowest pattern was {}",
        slowest.pattern
    );
    assert!(ranking[0].mean_flips < slowest.mean_flips);
    // No pattern can appear before 5 flips have been drawn.
    assert!(ranking[0].mean_flips >= 5.0);
}

/// `HHHHH` beats `THHHH` only when the stream opens with five heads
/// (probability 1/32): any later run of five heads is preceded by a tail,
/// completing `THHHH` first.
#[test]
fn trailing_head_run_loses_the_race_overwhelmingly() {
    let iterations = 2000;
    let first_wins = (0..iterations)
        .filter(|_| {
            race(
                &pattern("HHHHH"),
                &pattern("THHHH"),
                RandomFlips::new(),
                ScanLimits::UNBOUNDED,
            )
            .unwrap()
                == RaceWinner::First
        })
        .count();
    let rate = first_wins as f64 / iterations as f64;

    assert!(
        rate > 0.0 && rate < 0.1,
        "HHHHH won {} of {} races, expected near 1/32",
        first_wins,
        iterations
    );
}

/// Tournament sanity over the full catalogue at a modest repetition count.
#[test]
fn tournament_win_rates_are_fractions_over_the_full_catalogue() {
    let config = SimulationConfig::new(20).with_seed(13);
    let summaries = tournament_win_rates(&config).unwrap();

    assert_eq!(summaries.len(), 32);
    for summary in &summaries {
        assert!((0.0..=1.0).contains(&summary.win_rate));
    }
    for pair in summaries.windows(2) {
        assert!(pair[0].win_rate >= pair[1].win_rate);
    }
}

/// A round wins with probability ~0.08, so a 1000-round trial nets roughly
/// +590 on average against the 999 needed for a profit. Profitable trials
/// exist but are rare; most trials must lose.
#[test]
fn betting_profit_is_rare() {
    let config = SimulationConfig::new(50).with_seed(11);
    let summary = betting_success(&config);

    assert_eq!(summary.trials, 50);
    assert!(
        summary.profitable < 10,
        "{} of {} trials were profitable, expected well under half",
        summary.profitable,
        summary.trials
    );
}
