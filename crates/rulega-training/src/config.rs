//! Engine configuration.
//!
//! Both configurations are plain structs with public fields. Their
//! [`Default`] values are the reference settings the engines were tuned with.
//! Validation happens once, when an engine is built; a malformed
//! configuration is reported as a [`ConfigError`] before any individual is
//! created.

use rulega_data::{BinaryRecord, FloatRecord, Partition, Record};

/// Crossover strategy of the binary engine.
///
/// Parses case-insensitively from the variant name (`"ruleswap"`, `"Davisorder"`, ...).
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, derive_more::FromStr)]
pub enum BinaryCrossover {
    /// Swap every gene from one random cut point onwards.
    #[default]
    Bitwise,
    /// Swap each gene independently with probability 0.5.
    Uniform,
    /// Cross-exchange two rule slots between the parents.
    RuleSwap,
    /// Keep one rule block in place and fill the rest, wrapping around, from
    /// the other parent.
    DavisOrder,
}

/// Configuration of the binary engine.
#[derive(Debug, Clone)]
pub struct BinaryGaConfig {
    /// Rules per individual.
    pub rule_count: usize,
    /// Individuals per generation. `None` uses the number of records.
    pub population_size: Option<usize>,
    /// Generation budget.
    pub max_generations: usize,
    /// Probability that a parent pair is recombined.
    pub crossover_rate: f64,
    pub crossover: BinaryCrossover,
    /// Initial mutation rate. `None` uses `1 / gene count`.
    pub mutation_rate: Option<f64>,
    pub tournament_size: usize,
    /// Log progress every this many generations; `0` disables progress logs.
    pub progress_interval: usize,
    pub seed: Option<u64>,
}

impl Default for BinaryGaConfig {
    fn default() -> Self {
        Self {
            rule_count: 14,
            population_size: Some(120),
            max_generations: 150_000,
            crossover_rate: 0.7,
            crossover: BinaryCrossover::default(),
            mutation_rate: Some(0.4),
            tournament_size: 5,
            progress_interval: 1000,
            seed: None,
        }
    }
}

/// Configuration of the float engine.
#[derive(Debug, Clone)]
pub struct FloatGaConfig {
    /// Rules per individual.
    pub rule_count: usize,
    /// Individuals per generation. `None` uses the number of records.
    pub population_size: Option<usize>,
    /// Generation budget.
    pub max_generations: usize,
    /// Probability that a parent pair is recombined.
    pub crossover_rate: f64,
    /// Per-interval mutation probability.
    pub mutation_rate: f64,
    /// Standard deviation of the Gaussian bound perturbation.
    pub mutation_range: f32,
    pub tournament_size: usize,
    /// Records in each of the training and evaluation partitions.
    pub partition_size: usize,
    /// Log progress every this many generations; `0` disables progress logs.
    pub progress_interval: usize,
    pub seed: Option<u64>,
}

impl Default for FloatGaConfig {
    fn default() -> Self {
        Self {
            rule_count: 8,
            population_size: Some(150),
            max_generations: 10_000,
            crossover_rate: 0.8,
            mutation_rate: 0.005,
            mutation_range: 0.1,
            tournament_size: 15,
            partition_size: 1000,
            progress_interval: 10,
            seed: None,
        }
    }
}

/// Sizes an engine derives from its configuration and records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedSizes {
    /// Condition values per record.
    pub dimension: usize,
    pub population_size: usize,
}

impl BinaryGaConfig {
    /// Checks the configuration against `records`.
    pub fn validate(&self, records: &[BinaryRecord]) -> Result<ResolvedSizes, ConfigError> {
        let dimension = check_records(records)?;
        let population_size = check_population(self.population_size, records.len())?;
        check_nonzero(self.rule_count, ConfigError::ZeroRules)?;
        check_nonzero(self.max_generations, ConfigError::ZeroGenerations)?;
        check_nonzero(self.tournament_size, ConfigError::ZeroTournament)?;
        check_rate("crossover rate", self.crossover_rate)?;
        if let Some(rate) = self.mutation_rate {
            check_rate("mutation rate", rate)?;
        }
        Ok(ResolvedSizes {
            dimension,
            population_size,
        })
    }
}

impl FloatGaConfig {
    /// Checks the configuration against `records`.
    ///
    /// Both partitions must share one dimension; a missing population size
    /// resolves to the length of the training partition.
    pub fn validate(&self, records: &[FloatRecord]) -> Result<ResolvedSizes, ConfigError> {
        check_nonzero(self.partition_size, ConfigError::ZeroPartition)?;
        let partition = Partition::split(records, self.partition_size);
        let training = partition.training();
        let dimension = check_records(training)?;
        check_dimension(partition.evaluation(), dimension, training.len())?;
        let population_size = check_population(self.population_size, training.len())?;
        check_nonzero(self.rule_count, ConfigError::ZeroRules)?;
        check_nonzero(self.max_generations, ConfigError::ZeroGenerations)?;
        check_nonzero(self.tournament_size, ConfigError::ZeroTournament)?;
        check_rate("crossover rate", self.crossover_rate)?;
        check_rate("mutation rate", self.mutation_rate)?;
        if !(self.mutation_range.is_finite() && self.mutation_range >= 0.0) {
            return Err(ConfigError::InvalidMutationRange {
                value: self.mutation_range,
            });
        }
        Ok(ResolvedSizes {
            dimension,
            population_size,
        })
    }
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    #[display("no training records supplied")]
    NoRecords,
    #[display("records have no condition values")]
    ZeroDimension,
    #[display("record {index} has {found} condition values, expected {expected}")]
    InconsistentDimension {
        index: usize,
        expected: usize,
        found: usize,
    },
    #[display("population size must be at least 1")]
    ZeroPopulation,
    #[display("rule count must be at least 1")]
    ZeroRules,
    #[display("generation budget must be at least 1")]
    ZeroGenerations,
    #[display("tournament size must be at least 1")]
    ZeroTournament,
    #[display("{name} must be within [0, 1], got {value}")]
    RateOutOfRange { name: &'static str, value: f64 },
    #[display("mutation range must be finite and non-negative, got {value}")]
    InvalidMutationRange { value: f32 },
    #[display("partition size must be at least 1")]
    ZeroPartition,
}

/// Checks that `records` is non-empty with one consistent, non-zero dimension.
///
/// Returns the dimension.
fn check_records<T>(records: &[Record<T>]) -> Result<usize, ConfigError> {
    let first = records.first().ok_or(ConfigError::NoRecords)?;
    let expected = first.dimension();
    if expected == 0 {
        return Err(ConfigError::ZeroDimension);
    }
    check_dimension(records, expected, 0)?;
    Ok(expected)
}

/// Checks that every record has `expected` values; `offset` is the index of
/// `records[0]` in the full record list.
fn check_dimension<T>(
    records: &[Record<T>],
    expected: usize,
    offset: usize,
) -> Result<(), ConfigError> {
    match records
        .iter()
        .enumerate()
        .find(|(_, r)| r.dimension() != expected)
    {
        Some((index, record)) => Err(ConfigError::InconsistentDimension {
            index: offset + index,
            expected,
            found: record.dimension(),
        }),
        None => Ok(()),
    }
}

fn check_rate(name: &'static str, value: f64) -> Result<f64, ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(ConfigError::RateOutOfRange { name, value })
    }
}

fn check_population(
    population_size: Option<usize>,
    record_count: usize,
) -> Result<usize, ConfigError> {
    match population_size.unwrap_or(record_count) {
        0 => Err(ConfigError::ZeroPopulation),
        n => Ok(n),
    }
}

fn check_nonzero(value: usize, error: ConfigError) -> Result<usize, ConfigError> {
    if value == 0 { Err(error) } else { Ok(value) }
}
