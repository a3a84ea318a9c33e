use std::cmp::Reverse;

use rulega_stats::history::FitnessHistory;
use serde::Serialize;

/// A rule of the final rule set together with the credit it earned.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreditedRule<R> {
    pub rule: R,
    /// Training records this rule matched first and classified correctly.
    pub credit: u32,
}

/// Outcome of a run that reached the required fitness.
#[derive(Debug, Clone, Serialize)]
pub struct RunResult<R> {
    /// The best individual's rules in encoding (evaluation) order.
    pub rules: Vec<CreditedRule<R>>,
    /// Generations counted until the target was reached, starting at 1.
    pub generations: usize,
    pub training_fitness: u32,
    /// Fitness on the held-out partition, for engines that have one.
    pub evaluation_fitness: Option<u32>,
    /// Fitness summary of every generation, initial population first.
    pub history: FitnessHistory,
}

impl<R> RunResult<R> {
    /// The rules sorted by credit, highest first.
    ///
    /// Rules with equal credit keep their encoding order. The ranking is for
    /// reporting only: classification must use [`rules`](Self::rules), whose
    /// order decides which rule matches first.
    #[must_use]
    pub fn ranked_rules(&self) -> Vec<&CreditedRule<R>> {
        rank_rules(&self.rules)
    }
}

/// Sorts `rules` by credit, highest first, keeping the input order on ties.
///
/// Useful for pooling the rules of several runs.
#[must_use]
pub fn rank_rules<'a, R, I>(rules: I) -> Vec<&'a CreditedRule<R>>
where
    I: IntoIterator<Item = &'a CreditedRule<R>>,
    R: 'a,
{
    let mut ranked = rules.into_iter().collect::<Vec<_>>();
    ranked.sort_by_key(|r| Reverse(r.credit));
    ranked
}
