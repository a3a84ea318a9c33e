//! The float engine: rule sets of closed intervals.
//!
//! An individual is a list of [`FloatRule`]s with one [`Interval`] per record
//! dimension. Intervals stay inside `[0, 1]` with `low <= high`; the
//! operators repair any bound they move.

use rand::Rng;
use rulega_rules::{FloatEvaluator, FloatRule};

use crate::{result::CreditedRule, selection::Scored};

pub use self::engine::FloatGa;

mod engine;
pub mod operators;

/// A candidate rule set of the float engine.
///
/// The cached fitness and credits refer to the training partition.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatIndividual {
    rules: Vec<FloatRule>,
    fitness: u32,
    credits: Vec<u32>,
}

impl FloatIndividual {
    /// Creates an unevaluated individual.
    #[must_use]
    pub fn from_rules(rules: Vec<FloatRule>) -> Self {
        Self {
            rules,
            fitness: 0,
            credits: vec![],
        }
    }

    /// Creates `rule_count` random rules over `dimension` values.
    pub fn random<R>(dimension: usize, rule_count: usize, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let rules = (0..rule_count)
            .map(|_| operators::random_rule(dimension, rng))
            .collect();
        Self::from_rules(rules)
    }

    #[must_use]
    pub fn rules(&self) -> &[FloatRule] {
        &self.rules
    }

    pub(crate) fn rules_mut(&mut self) -> &mut [FloatRule] {
        &mut self.rules
    }

    #[must_use]
    pub fn credits(&self) -> &[u32] {
        &self.credits
    }

    /// Recomputes the training fitness and per-rule credits.
    pub fn evaluate(&mut self, evaluator: &FloatEvaluator<'_>) {
        let score = evaluator.training_score(&self.rules);
        self.fitness = score.total;
        self.credits = score.per_rule;
    }

    /// Fitness on the held-out evaluation partition.
    #[must_use]
    pub fn evaluation_fitness(&self, evaluator: &FloatEvaluator<'_>) -> u32 {
        evaluator.evaluation_score(&self.rules).total
    }

    #[must_use]
    pub fn credited_rules(&self) -> Vec<CreditedRule<FloatRule>> {
        self.rules
            .iter()
            .enumerate()
            .map(|(i, rule)| CreditedRule {
                rule: rule.clone(),
                credit: self.credits.get(i).copied().unwrap_or(0),
            })
            .collect()
    }
}

impl Scored for FloatIndividual {
    fn fitness(&self) -> u32 {
        self.fitness
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64Mcg;
    use rulega_data::{FloatRecord, Partition};
    use rulega_rules::Interval;

    use super::*;

    #[test]
    fn test_random_intervals_straddle_midpoint() {
        let mut rng = Pcg64Mcg::seed_from_u64(1);
        for _ in 0..50 {
            let individual = FloatIndividual::random(4, 6, &mut rng);
            assert_eq!(individual.rules().len(), 6);
            for rule in individual.rules() {
                assert_eq!(rule.intervals.len(), 4);
                for interval in &rule.intervals {
                    assert!((0.0..0.5).contains(&interval.low), "{interval}");
                    assert!((0.5..1.0).contains(&interval.high), "{interval}");
                }
            }
        }
    }

    #[test]
    fn test_evaluate_uses_both_partitions() {
        let records = [
            FloatRecord::new(vec![0.2], true),
            FloatRecord::new(vec![0.8], false),
            FloatRecord::new(vec![0.3], true),
            FloatRecord::new(vec![0.9], true),
        ];
        let evaluator = FloatEvaluator::new(Partition::split(&records, 2));
        let mut individual = FloatIndividual::from_rules(vec![
            FloatRule::new(vec![Interval::new(0.0, 0.5)], true),
            FloatRule::new(vec![Interval::new(0.5, 1.0)], false),
        ]);
        individual.evaluate(&evaluator);
        assert_eq!(individual.fitness(), 2);
        assert_eq!(individual.credits(), &[1, 1]);
        assert_eq!(individual.evaluation_fitness(&evaluator), 1);

        let credited = individual.credited_rules();
        assert_eq!(credited[1].rule, individual.rules()[1]);
        assert_eq!(credited[1].credit, 1);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut rng = Pcg64Mcg::seed_from_u64(2);
        let original = FloatIndividual::random(2, 3, &mut rng);
        let mut clone = original.clone();
        assert_eq!(clone, original);
        clone.rules_mut()[0].intervals[0].low = 0.0;
        clone.rules_mut()[0].intervals[0].high = 1.0;
        assert_ne!(clone.rules()[0], original.rules()[0]);
    }
}
