use std::fmt::Display;

use chrono::{DateTime, Utc};
use rulega_training::RunResult;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Engine {
    Binary,
    Float,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrainingReport<R> {
    pub name: String,
    pub trained_at: DateTime<Utc>,
    pub engine: Engine,
    pub required_fitness: u32,
    pub trials: usize,
    pub average_generations: f64,
    pub generations: usize,
    pub training_fitness: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaluation_fitness: Option<u32>,
    /// Rules in classification order.
    pub rules: Vec<TrainedRule<R>>,
    /// Per-generation maximum fitness, initial population first.
    pub max_fitness: Vec<u32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrainedRule<R> {
    /// Human-readable form, as printed by the CLI.
    pub text: String,
    pub credit: u32,
    pub rule: R,
}

impl<R> TrainingReport<R>
where
    R: Display,
{
    pub fn new(
        name: String,
        engine: Engine,
        required_fitness: u32,
        trials: usize,
        average_generations: f64,
        result: RunResult<R>,
    ) -> Self {
        let max_fitness = result
            .history
            .generations()
            .iter()
            .map(|g| g.max)
            .collect();
        Self {
            name,
            trained_at: Utc::now(),
            engine,
            required_fitness,
            trials,
            average_generations,
            generations: result.generations,
            training_fitness: result.training_fitness,
            evaluation_fitness: result.evaluation_fitness,
            rules: result
                .rules
                .into_iter()
                .map(|r| TrainedRule {
                    text: r.rule.to_string(),
                    credit: r.credit,
                    rule: r.rule,
                })
                .collect(),
            max_fitness,
        }
    }
}
