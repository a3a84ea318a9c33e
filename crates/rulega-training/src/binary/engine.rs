use rand::Rng as _;
use rand_pcg::Pcg64Mcg;
use rulega_data::BinaryRecord;
use rulega_rules::{BinaryEvaluator, BinaryRule, GeneLayout};
use rulega_stats::history::FitnessHistory;

use super::{BinaryIndividual, operators};
use crate::{
    adaptive::BinaryMutationControl,
    config::{BinaryGaConfig, ConfigError},
    result::RunResult,
    selection::{Scored as _, best_index, tournament_select, worst_index},
};

/// Genetic algorithm over binary rule sets.
///
/// The engine borrows its records for its whole lifetime. Each call to
/// [`run`](Self::run) starts from a fresh random population and keeps drawing
/// from the same generator, so repeated runs explore different searches.
#[derive(Debug)]
pub struct BinaryGa<'a> {
    config: BinaryGaConfig,
    layout: GeneLayout,
    evaluator: BinaryEvaluator<'a>,
    population_size: usize,
    rng: Pcg64Mcg,
}

impl<'a> BinaryGa<'a> {
    /// Builds an engine over `records`.
    ///
    /// The condition length is taken from the first record.
    pub fn new(records: &'a [BinaryRecord], config: BinaryGaConfig) -> Result<Self, ConfigError> {
        let sizes = config.validate(records)?;
        let layout = GeneLayout::new(sizes.dimension, config.rule_count);
        let rng = crate::engine_rng(config.seed);
        Ok(Self {
            layout,
            evaluator: BinaryEvaluator::new(layout, records),
            population_size: sizes.population_size,
            config,
            rng,
        })
    }

    #[must_use]
    pub fn layout(&self) -> GeneLayout {
        self.layout
    }

    #[must_use]
    pub fn config(&self) -> &BinaryGaConfig {
        &self.config
    }

    /// Evolves rule sets until one reaches `required_fitness`.
    ///
    /// Returns `None` when the generation budget runs out first.
    pub fn run(&mut self, required_fitness: u32) -> Option<RunResult<BinaryRule>> {
        let mut mutation = BinaryMutationControl::new(
            self.config
                .mutation_rate
                .unwrap_or_else(|| default_mutation_rate(self.layout)),
        );
        let mut population = self.initial_population();
        let mut history = FitnessHistory::new();
        history.push(&crate::population_stats(&population));

        let mut generation = 1;
        loop {
            let best = population[best_index(&population)].clone();
            if best.fitness() >= required_fitness {
                log::info!(
                    "reached fitness {} in generation {generation}",
                    best.fitness()
                );
                return Some(RunResult {
                    rules: best.credited_rules(self.layout),
                    generations: generation,
                    training_fitness: best.fitness(),
                    evaluation_fitness: None,
                    history,
                });
            }
            if generation >= self.config.max_generations {
                log::info!(
                    "generation budget of {} exhausted at fitness {}",
                    self.config.max_generations,
                    best.fitness()
                );
                return None;
            }

            population = self.next_generation(&population, &best, mutation.rate());
            let stats = crate::population_stats(&population);
            history.push(&stats);
            let interval = self.config.progress_interval;
            if interval > 0 && generation % interval == 0 {
                log::info!(
                    "generation {generation}: max {}, mean {:.2}, mutation rate {:.4}",
                    stats.max,
                    stats.mean,
                    mutation.rate()
                );
            }
            mutation.update(&stats);
            generation += 1;
        }
    }

    fn initial_population(&mut self) -> Vec<BinaryIndividual> {
        (0..self.population_size)
            .map(|_| {
                let mut individual = BinaryIndividual::random(self.layout, &mut self.rng);
                individual.evaluate(&self.evaluator);
                individual
            })
            .collect()
    }

    /// Breeds the next population.
    ///
    /// Half the population size in tournament winners forms the breeding
    /// stock. Pairs drawn from the stock are recombined, mutated and
    /// evaluated; further tournament winners fill the remaining places.
    /// `best` replaces the first worst individual when nothing in the new
    /// population matches it.
    fn next_generation(
        &mut self,
        population: &[BinaryIndividual],
        best: &BinaryIndividual,
        mutation_rate: f64,
    ) -> Vec<BinaryIndividual> {
        let size = population.len();
        let tournament_size = self.config.tournament_size;

        let stock = (0..size / 2)
            .map(|_| tournament_select(population, tournament_size, &mut self.rng).clone())
            .collect::<Vec<_>>();

        let mut next = Vec::with_capacity(size);
        for _ in 0..stock.len() / 2 {
            let p1 = &stock[self.rng.random_range(0..stock.len())];
            let p2 = &stock[self.rng.random_range(0..stock.len())];
            let (c1, c2) = operators::crossover(
                self.config.crossover,
                self.config.crossover_rate,
                self.layout,
                p1,
                p2,
                &mut self.rng,
            );
            for child in [c1, c2] {
                let mut child = operators::mutate(self.layout, mutation_rate, &child, &mut self.rng);
                child.evaluate(&self.evaluator);
                next.push(child);
            }
        }
        while next.len() < size {
            next.push(tournament_select(population, tournament_size, &mut self.rng).clone());
        }

        if best.fitness() > next[best_index(&next)].fitness() {
            let worst = worst_index(&next);
            next[worst] = best.clone();
        }
        next
    }
}

#[expect(clippy::cast_precision_loss)]
fn default_mutation_rate(layout: GeneLayout) -> f64 {
    1.0 / layout.gene_count() as f64
}
