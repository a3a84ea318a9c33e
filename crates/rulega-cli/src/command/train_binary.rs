use std::path::PathBuf;

use anyhow::{Context as _, bail};
use rulega_training::{
    binary::BinaryGa,
    config::{BinaryCrossover, BinaryGaConfig},
    rank_rules,
};

use crate::{
    schema::report::{Engine, TrainingReport},
    util,
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct TrainBinaryArg {
    /// Record file, one `<bits> <label>` record per line
    file: PathBuf,
    /// Rules per individual
    #[arg(long, default_value_t = 14)]
    rules: usize,
    /// Individuals per generation [default: number of records]
    #[arg(long)]
    population: Option<usize>,
    /// Generation budget of each trial
    #[arg(long, default_value_t = 150_000)]
    generations: usize,
    #[arg(long, default_value_t = 0.7)]
    crossover_rate: f64,
    /// Crossover strategy: bitwise, uniform, ruleswap or davisorder
    #[arg(long, default_value = "bitwise")]
    crossover: BinaryCrossover,
    /// Initial mutation rate [default: 1 / genes per individual]
    #[arg(long)]
    mutation_rate: Option<f64>,
    #[arg(long, default_value_t = 5)]
    tournament_size: usize,
    /// Fitness to reach [default: number of records]
    #[arg(long)]
    required_fitness: Option<u32>,
    /// Independent runs to average the generation count over
    #[arg(long, default_value_t = 1)]
    trials: usize,
    #[arg(long)]
    seed: Option<u64>,
    /// Log progress every N generations (0 disables)
    #[arg(long, default_value_t = 1000)]
    progress_interval: usize,
    /// Output file path for the JSON report
    #[arg(long)]
    output: Option<PathBuf>,
}

impl TrainBinaryArg {
    pub(crate) fn config(&self, trial: usize) -> BinaryGaConfig {
        BinaryGaConfig {
            rule_count: self.rules,
            population_size: self.population,
            max_generations: self.generations,
            crossover_rate: self.crossover_rate,
            crossover: self.crossover,
            mutation_rate: self.mutation_rate,
            tournament_size: self.tournament_size,
            progress_interval: self.progress_interval,
            seed: super::trial_seed(self.seed, trial),
        }
    }
}

pub(crate) fn run(arg: &TrainBinaryArg) -> anyhow::Result<()> {
    let records = util::read_binary_records_file(&arg.file)?;
    let required_fitness = match arg.required_fitness {
        Some(fitness) => fitness,
        None => u32::try_from(records.len()).context("Too many records")?,
    };
    eprintln!(
        "Loaded {} records of {} bits from {}",
        records.len(),
        records.first().map_or(0, |r| r.dimension()),
        arg.file.display()
    );

    let mut last = None;
    let mut pooled = Vec::new();
    let mut total_generations = 0;
    for trial in 0..arg.trials {
        let config = arg.config(trial);
        log::debug!("trial #{trial}: {config:?}");
        let mut ga = BinaryGa::new(&records, config).context("Invalid configuration")?;
        let Some(result) = ga.run(required_fitness) else {
            bail!(
                "Trial #{trial} did not reach fitness {required_fitness} within {} generations",
                arg.generations
            );
        };
        eprintln!(
            "Trial #{trial}: fitness {} after {} generations",
            result.training_fitness, result.generations
        );
        total_generations += result.generations;
        pooled.extend(result.rules.iter().cloned());
        last = Some(result);
    }
    let Some(result) = last else {
        bail!("At least one trial is required");
    };
    let average_generations = super::average(total_generations, arg.trials);

    eprintln!();
    eprintln!("Top rules of all trials:");
    for ranked in rank_rules(&pooled).into_iter().take(arg.rules) {
        eprintln!("  {}  ({})", ranked.rule, ranked.credit);
    }
    eprintln!(
        "  Fitness of the last trial: {}/{}",
        result.training_fitness,
        records.len()
    );
    eprintln!("  Average generations: {average_generations:.1}");

    let report = TrainingReport::new(
        util::dataset_name(&arg.file),
        Engine::Binary,
        required_fitness,
        arg.trials,
        average_generations,
        result,
    );
    util::save_json(&report, arg.output.as_deref())?;
    if let Some(path) = &arg.output {
        eprintln!("Report saved to {}", path.display());
    }

    Ok(())
}
