//! Genetic algorithms that evolve classification rule sets.
//!
//! Two engines share the same generational shape but encode their rules
//! differently:
//!
//! - [`binary::BinaryGa`] evolves flat gene arrays of `0`, `1` and wildcard
//!   symbols, decoded into [`BinaryRule`](rulega_rules::BinaryRule)s.
//! - [`float::FloatGa`] evolves lists of interval rules
//!   ([`FloatRule`](rulega_rules::FloatRule)) and reports fitness on a
//!   training and a held-out evaluation partition.
//!
//! # Generational Loop
//!
//! Each generation runs the same pipeline:
//!
//! 1. **Selection** - tournament selection picks parents ([`selection`])
//! 2. **Crossover** - parents are recombined in pairs; every operator first
//!    makes one Bernoulli draw against the crossover rate and clones the
//!    parents unchanged when it fails
//! 3. **Mutation** - children are perturbed and returned as new individuals
//! 4. **Evaluation** - fitness is recomputed from the rules and cached on
//!    each individual
//! 5. **Elitism** - the previous best survives into the new generation
//! 6. **Adaptive update** - mutation parameters (and, for the float engine,
//!    tournament size) react to the population statistics ([`adaptive`])
//!
//! The loop ends as soon as the best individual reaches the required fitness,
//! returning a [`RunResult`]. When the generation budget runs out first, `run`
//! returns `None`; callers decide whether to retry or relax the target.
//!
//! # Fitness
//!
//! Fitness is the number of records whose first matching rule predicts the
//! record's label. See [`rulega_rules::score`] for the exact semantics.
//!
//! # Randomness
//!
//! Each engine owns one [`Pcg64Mcg`] generator, seeded from the configured
//! seed or from the operating system. All operators take the generator as an
//! explicit argument.
//!
//! # Example
//!
//! ```rust,no_run
//! use rulega_data::parse::parse_binary_records;
//! use rulega_training::{binary::BinaryGa, config::BinaryGaConfig};
//!
//! let records = parse_binary_records("0011 1\n0101 0\n1100 1\n").unwrap();
//! let config = BinaryGaConfig {
//!     rule_count: 4,
//!     population_size: Some(40),
//!     max_generations: 500,
//!     ..BinaryGaConfig::default()
//! };
//! let mut ga = BinaryGa::new(&records, config).unwrap();
//! match ga.run(3) {
//!     Some(result) => println!("solved in {} generations", result.generations),
//!     None => println!("no solution"),
//! }
//! ```

use rand::SeedableRng as _;
use rand_pcg::Pcg64Mcg;
use rulega_stats::descriptive::FitnessStats;

use crate::selection::Scored;

pub use self::result::{CreditedRule, RunResult, rank_rules};

pub mod adaptive;
pub mod binary;
pub mod config;
pub mod float;
mod result;
pub mod selection;

/// Creates the generator an engine draws all its random numbers from.
fn engine_rng(seed: Option<u64>) -> Pcg64Mcg {
    match seed {
        Some(seed) => Pcg64Mcg::seed_from_u64(seed),
        None => Pcg64Mcg::from_os_rng(),
    }
}

/// Fitness statistics of a population.
///
/// # Panics
///
/// Panics if `population` is empty. Engines never build an empty population.
fn population_stats<I>(population: &[I]) -> FitnessStats
where
    I: Scored,
{
    FitnessStats::new(population.iter().map(I::fitness)).expect("population is not empty")
}
