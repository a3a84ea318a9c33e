use rand::Rng as _;
use rand_pcg::Pcg64Mcg;
use rulega_data::{FloatRecord, Partition};
use rulega_rules::{FloatEvaluator, FloatRule};
use rulega_stats::history::FitnessHistory;

use super::{FloatIndividual, operators};
use crate::{
    adaptive::{FloatAdaptiveController, FloatParams},
    config::{ConfigError, FloatGaConfig},
    result::RunResult,
    selection::{Scored as _, best_index, tournament_select},
};

/// Probability that a stagnating generation uses uniform crossover.
const UNIFORM_CROSSOVER_PROBABILITY: f64 = 0.1;

/// Genetic algorithm over interval rule sets.
///
/// Records are split once into a training partition, which drives selection,
/// and an evaluation partition, which is only scored for the final result.
#[derive(Debug)]
pub struct FloatGa<'a> {
    config: FloatGaConfig,
    dimension: usize,
    evaluator: FloatEvaluator<'a>,
    population_size: usize,
    rng: Pcg64Mcg,
}

impl<'a> FloatGa<'a> {
    /// Builds an engine over `records`.
    ///
    /// The first `partition_size` records are used for training and the next
    /// `partition_size` for evaluation.
    pub fn new(records: &'a [FloatRecord], config: FloatGaConfig) -> Result<Self, ConfigError> {
        let sizes = config.validate(records)?;
        let partition = Partition::split(records, config.partition_size);
        if partition.evaluation().is_empty() {
            log::warn!("no records left for the evaluation partition");
        }
        let rng = crate::engine_rng(config.seed);
        Ok(Self {
            dimension: sizes.dimension,
            evaluator: FloatEvaluator::new(partition),
            population_size: sizes.population_size,
            config,
            rng,
        })
    }

    #[must_use]
    pub fn config(&self) -> &FloatGaConfig {
        &self.config
    }

    #[must_use]
    pub fn evaluator(&self) -> &FloatEvaluator<'a> {
        &self.evaluator
    }

    /// Evolves rule sets until one reaches `required_fitness` on the
    /// training partition.
    ///
    /// Returns `None` when the generation budget runs out first.
    pub fn run(&mut self, required_fitness: u32) -> Option<RunResult<FloatRule>> {
        let mut controller = FloatAdaptiveController::new(FloatParams {
            mutation_rate: self.config.mutation_rate,
            mutation_range: self.config.mutation_range,
            tournament_size: self.config.tournament_size,
        });
        let mut population = self.initial_population();
        let mut history = FitnessHistory::new();
        history.push(&crate::population_stats(&population));
        let mut best = population[best_index(&population)].clone();

        for generation in 1..=self.config.max_generations {
            let uniform = controller.is_stagnating()
                && self.rng.random_bool(UNIFORM_CROSSOVER_PROBABILITY);
            population = self.next_generation(&population, &best, controller.params(), uniform);
            best = population[best_index(&population)].clone();

            if best.fitness() >= required_fitness {
                let evaluation_fitness = best.evaluation_fitness(&self.evaluator);
                log::info!(
                    "reached fitness {} in generation {generation} (evaluation fitness {evaluation_fitness})",
                    best.fitness()
                );
                return Some(RunResult {
                    rules: best.credited_rules(),
                    generations: generation,
                    training_fitness: best.fitness(),
                    evaluation_fitness: Some(evaluation_fitness),
                    history,
                });
            }

            let stats = crate::population_stats(&population);
            let interval = self.config.progress_interval;
            if interval > 0 && generation % interval == 0 {
                let params = controller.params();
                log::info!(
                    "generation {generation}: max {}, mean {:.2}, mutation rate {:.4}, range {:.4}, tournament {}",
                    stats.max,
                    stats.mean,
                    params.mutation_rate,
                    params.mutation_range,
                    params.tournament_size
                );
            }
            controller.update(generation, &stats, &history, &mut self.rng);
            history.push(&stats);
        }

        log::info!(
            "generation budget of {} exhausted at fitness {}",
            self.config.max_generations,
            best.fitness()
        );
        None
    }

    fn initial_population(&mut self) -> Vec<FloatIndividual> {
        (0..self.population_size)
            .map(|_| {
                let mut individual =
                    FloatIndividual::random(self.dimension, self.config.rule_count, &mut self.rng);
                individual.evaluate(&self.evaluator);
                individual
            })
            .collect()
    }

    /// Breeds and evaluates the next population.
    ///
    /// Tournament winners are recombined in consecutive pairs (an odd last
    /// winner is copied as is) and mutated; `best` then overwrites one random
    /// slot.
    fn next_generation(
        &mut self,
        population: &[FloatIndividual],
        best: &FloatIndividual,
        params: FloatParams,
        uniform: bool,
    ) -> Vec<FloatIndividual> {
        let size = population.len();
        let offspring = (0..size)
            .map(|_| tournament_select(population, params.tournament_size, &mut self.rng).clone())
            .collect::<Vec<_>>();

        let rate = self.config.crossover_rate;
        let mut next = Vec::with_capacity(size);
        let mut pairs = offspring.chunks_exact(2);
        for pair in &mut pairs {
            let (c1, c2) = if uniform {
                operators::crossover_uniform(rate, &pair[0], &pair[1], &mut self.rng)
            } else {
                operators::crossover_single_point(rate, &pair[0], &pair[1], &mut self.rng)
            };
            next.push(c1);
            next.push(c2);
        }
        next.extend(pairs.remainder().iter().cloned());

        let mut next = next
            .iter()
            .map(|child| {
                operators::mutate(
                    params.mutation_rate,
                    params.mutation_range,
                    child,
                    &mut self.rng,
                )
            })
            .collect::<Vec<_>>();

        let slot = self.rng.random_range(0..size);
        next[slot] = best.clone();

        for individual in &mut next {
            individual.evaluate(&self.evaluator);
        }
        next
    }
}
