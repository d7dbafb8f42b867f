//! Strategy evaluators for the Coin Flip Gym.
//!
//! Three independent Monte Carlo aggregations over the `sim-core` scanner:
//!
//! - [`dues`] - expected flips until each catalogue pattern first appears, ranked
//! - [`tournament`] - pairwise first-appearance races across the catalogue
//! - [`betting`] - success rate of the 1000-round betting strategy
//!
//! Every repetition draws from a fresh flip source, so no state is shared
//! across repetitions beyond the final reduction. The evaluators fan out
//! across patterns, pairs, or trials via the `parallel` feature (rayon),
//! with a runtime override to pin a run to one thread.
//!
//! # Example
//!
//! ```
//! use simulation::{rank_by_mean_dues, SimulationConfig};
//!
//! let config = SimulationConfig::new(50).with_seed(7);
//! let ranking = rank_by_mean_dues(&config).unwrap();
//! assert_eq!(ranking.len(), 32);
//! // Lower mean dues = the pattern tends to appear sooner.
//! assert!(ranking[0].mean_flips <= ranking[31].mean_flips);
//! ```

pub mod betting;
pub mod config;
pub mod dues;
pub mod parallel;
pub mod stats;
pub mod tournament;

pub use betting::{betting_success, BettingSummary};
pub use config::SimulationConfig;
pub use dues::{rank_by_mean_dues, DuesSummary};
pub use tournament::{tournament_win_rates, TournamentSummary};
