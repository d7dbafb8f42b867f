//! Flip-stream machinery for the Coin Flip Gym.
//!
//! This crate provides the simulation engine that the strategy evaluators
//! build on:
//!
//! - [`source`] - lazy flip streams: the random source and a scripted test double
//! - [`window`] - rolling suffix window over the flips drawn so far
//! - [`scanner`] - pattern detection: dues counting and two-pattern races
//! - [`error`] - error types for scan failures and contract violations
//!
//! # Example
//!
//! ```
//! use sim_core::{dues, RandomFlips, ScanLimits};
//! use types::Pattern;
//!
//! let pattern: Pattern = "HHTHT".parse().unwrap();
//! let flips = dues(&pattern, RandomFlips::with_seed(7), ScanLimits::UNBOUNDED).unwrap();
//! assert!(flips >= 5);
//! ```

pub mod error;
pub mod scanner;
pub mod source;
pub mod window;

pub use error::{Result, SimCoreError};
pub use scanner::{dues, race, RaceWinner, ScanLimits};
pub use source::{take, RandomFlips, ScriptedFlips};
pub use window::SuffixWindow;
