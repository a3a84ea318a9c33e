use std::path::PathBuf;

use anyhow::{Context as _, bail};
use rulega_training::{config::FloatGaConfig, float::FloatGa};

use crate::{
    schema::report::{Engine, TrainingReport},
    util,
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct TrainFloatArg {
    /// Record file, one record of values followed by a `0`/`1` label per line
    file: PathBuf,
    /// Rules per individual
    #[arg(long, default_value_t = 8)]
    rules: usize,
    /// Individuals per generation
    #[arg(long, default_value_t = 150)]
    population: usize,
    /// Generation budget of each trial
    #[arg(long, default_value_t = 10_000)]
    generations: usize,
    #[arg(long, default_value_t = 0.8)]
    crossover_rate: f64,
    /// Per-interval mutation probability
    #[arg(long, default_value_t = 0.005)]
    mutation_rate: f64,
    /// Standard deviation of a bound perturbation
    #[arg(long, default_value_t = 0.1)]
    mutation_range: f32,
    #[arg(long, default_value_t = 15)]
    tournament_size: usize,
    /// Records in each of the training and evaluation partitions
    #[arg(long, default_value_t = 1000)]
    partition_size: usize,
    /// Fitness to reach [default: size of the training partition]
    #[arg(long)]
    required_fitness: Option<u32>,
    /// Independent runs to average the generation count over
    #[arg(long, default_value_t = 1)]
    trials: usize,
    #[arg(long)]
    seed: Option<u64>,
    /// Log progress every N generations (0 disables)
    #[arg(long, default_value_t = 10)]
    progress_interval: usize,
    /// Output file path for the JSON report
    #[arg(long)]
    output: Option<PathBuf>,
}

impl TrainFloatArg {
    pub(crate) fn config(&self, trial: usize) -> FloatGaConfig {
        FloatGaConfig {
            rule_count: self.rules,
            population_size: Some(self.population),
            max_generations: self.generations,
            crossover_rate: self.crossover_rate,
            mutation_rate: self.mutation_rate,
            mutation_range: self.mutation_range,
            tournament_size: self.tournament_size,
            partition_size: self.partition_size,
            progress_interval: self.progress_interval,
            seed: super::trial_seed(self.seed, trial),
        }
    }
}

pub(crate) fn run(arg: &TrainFloatArg) -> anyhow::Result<()> {
    let records = util::read_float_records_file(&arg.file)?;
    let training_len = records.len().min(arg.partition_size);
    let evaluation_len = (records.len() - training_len).min(arg.partition_size);
    let required_fitness = match arg.required_fitness {
        Some(fitness) => fitness,
        None => u32::try_from(training_len).context("Training partition too large")?,
    };
    eprintln!(
        "Loaded {} records of {} values from {} ({training_len} training, {evaluation_len} evaluation)",
        records.len(),
        records.first().map_or(0, |r| r.dimension()),
        arg.file.display()
    );

    let mut last = None;
    let mut total_generations = 0;
    for trial in 0..arg.trials {
        let config = arg.config(trial);
        log::debug!("trial #{trial}: {config:?}");
        let mut ga = FloatGa::new(&records, config).context("Invalid configuration")?;
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
        last = Some(result);
    }
    let Some(result) = last else {
        bail!("At least one trial is required");
    };
    let average_generations = super::average(total_generations, arg.trials);

    eprintln!();
    eprintln!("Best rule set:");
    for ranked in result.ranked_rules() {
        eprintln!("  {}  ({})", ranked.rule, ranked.credit);
    }
    eprintln!("  Training fitness: {}/{training_len}", result.training_fitness);
    if let Some(fitness) = result.evaluation_fitness {
        eprintln!("  Evaluation fitness: {fitness}/{evaluation_len}");
    }
    eprintln!("  Average generations: {average_generations:.1}");

    let report = TrainingReport::new(
        util::dataset_name(&arg.file),
        Engine::Float,
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
