//! The binary engine: rule sets encoded as flat gene arrays.
//!
//! An individual is `rule_count` consecutive rules of `condition_length`
//! condition genes plus one output gene (see [`GeneLayout`]). Condition genes
//! are `0`, `1` or wildcard; output genes are never wildcards, which the
//! initializer and the mutation operator both guarantee and every crossover
//! operator preserves by exchanging genes only between equal positions or
//! whole rule-aligned blocks.

use rand::Rng;
use rulega_rules::{BinaryEvaluator, BinaryRule, Gene, GeneLayout};

use crate::{result::CreditedRule, selection::Scored};

pub use self::engine::BinaryGa;

mod engine;
pub mod operators;

/// A candidate rule set of the binary engine.
///
/// Fitness and per-rule credits are cached by [`evaluate`](Self::evaluate);
/// operators that produce new genes reset neither, so callers evaluate
/// children before comparing them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryIndividual {
    genes: Vec<Gene>,
    fitness: u32,
    credits: Vec<u32>,
}

impl BinaryIndividual {
    /// Creates an unevaluated individual from raw genes.
    #[must_use]
    pub fn from_genes(genes: Vec<Gene>) -> Self {
        Self {
            genes,
            fitness: 0,
            credits: vec![],
        }
    }

    /// Creates an individual with uniformly random genes.
    ///
    /// Output slots draw from `{0, 1}`, condition slots from `{0, 1, #}`.
    pub fn random<R>(layout: GeneLayout, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let genes = (0..layout.gene_count())
            .map(|index| operators::random_gene(layout, index, rng))
            .collect();
        Self::from_genes(genes)
    }

    #[must_use]
    pub fn genes(&self) -> &[Gene] {
        &self.genes
    }

    pub(crate) fn genes_mut(&mut self) -> &mut [Gene] {
        &mut self.genes
    }

    /// Per-rule credit from the last evaluation, in rule order.
    #[must_use]
    pub fn credits(&self) -> &[u32] {
        &self.credits
    }

    /// Recomputes fitness and per-rule credits from the current genes.
    pub fn evaluate(&mut self, evaluator: &BinaryEvaluator<'_>) {
        let score = evaluator.evaluate(&self.genes);
        self.fitness = score.total;
        self.credits = score.per_rule;
    }

    /// Decodes the rules, pairing each with its credit from the last evaluation.
    #[must_use]
    pub fn credited_rules(&self, layout: GeneLayout) -> Vec<CreditedRule<BinaryRule>> {
        layout
            .decode(&self.genes)
            .into_iter()
            .enumerate()
            .map(|(i, rule)| CreditedRule {
                rule,
                credit: self.credits.get(i).copied().unwrap_or(0),
            })
            .collect()
    }
}

impl Scored for BinaryIndividual {
    fn fitness(&self) -> u32 {
        self.fitness
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64Mcg;
    use rulega_data::BinaryRecord;

    use super::*;

    #[test]
    fn test_random_respects_output_slots() {
        let layout = GeneLayout::new(5, 6);
        let mut rng = Pcg64Mcg::seed_from_u64(1);
        for _ in 0..50 {
            let ind = BinaryIndividual::random(layout, &mut rng);
            assert_eq!(ind.genes().len(), layout.gene_count());
            for (i, gene) in ind.genes().iter().enumerate() {
                if layout.is_output_slot(i) {
                    assert!(!gene.is_wildcard(), "wildcard at output slot {i}");
                }
            }
        }
    }

    #[test]
    fn test_random_uses_all_condition_symbols() {
        let layout = GeneLayout::new(8, 10);
        let mut rng = Pcg64Mcg::seed_from_u64(2);
        let ind = BinaryIndividual::random(layout, &mut rng);
        for symbol in Gene::CONDITION_SYMBOLS {
            assert!(ind.genes().contains(&symbol));
        }
    }

    #[test]
    fn test_evaluate_caches_fitness_and_credits() {
        let records = [
            BinaryRecord::new(vec![true, false], true),
            BinaryRecord::new(vec![false, true], false),
        ];
        let layout = GeneLayout::new(2, 2);
        let evaluator = BinaryEvaluator::new(layout, &records);
        let mut ind = BinaryIndividual::from_genes(vec![
            Gene::Wildcard,
            Gene::Zero,
            Gene::One,
            Gene::Zero,
            Gene::One,
            Gene::Zero,
        ]);
        ind.evaluate(&evaluator);
        assert_eq!(ind.fitness(), 2);
        assert_eq!(ind.credits(), &[1, 1]);

        let fitness = ind.fitness();
        ind.evaluate(&evaluator);
        assert_eq!(ind.fitness(), fitness);

        let rules = ind.credited_rules(layout);
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].rule.condition(), &[Gene::Wildcard, Gene::Zero]);
        assert_eq!(rules[1].credit, 1);
    }

    #[test]
    fn test_clone_is_independent() {
        let layout = GeneLayout::new(3, 2);
        let mut rng = Pcg64Mcg::seed_from_u64(4);
        let original = BinaryIndividual::random(layout, &mut rng);
        let mut clone = original.clone();
        assert_eq!(clone, original);

        let flipped = match clone.genes()[0] {
            Gene::Zero => Gene::One,
            _ => Gene::Zero,
        };
        clone.genes_mut()[0] = flipped;
        assert_ne!(clone.genes()[0], original.genes()[0]);
    }
}
