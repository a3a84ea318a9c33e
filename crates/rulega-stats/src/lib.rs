//! Population statistics for the rule-set genetic algorithms.
//!
//! - [`descriptive`]: per-generation summary of integer fitness values
//!   (minimum, maximum, mean, spread and the mean-to-max ratio the adaptive
//!   controllers watch)
//! - [`history`]: the run-long record of generation summaries, with the
//!   look-back queries used for stagnation detection
//!
//! # Examples
//!
//! ```
//! use rulega_stats::{descriptive::FitnessStats, history::FitnessHistory};
//!
//! let stats = FitnessStats::new([2, 4, 6, 8]).unwrap();
//! assert_eq!(stats.max, 8);
//! assert_eq!(stats.mean, 5.0);
//! assert_eq!(stats.mean_to_max_ratio(), 0.625);
//!
//! let mut history = FitnessHistory::new();
//! history.push(&stats);
//! assert_eq!(history.len(), 1);
//! ```

pub mod descriptive;
pub mod history;
