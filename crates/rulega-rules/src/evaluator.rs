use rulega_data::{BinaryRecord, FloatRecord, Partition};

use crate::{FloatRule, Gene, GeneLayout, RuleSetScore, matching};

/// Scores binary gene arrays against a fixed record set.
///
/// The evaluator borrows its records for its whole lifetime and never
/// modifies them.
#[derive(Debug, Clone, Copy)]
pub struct BinaryEvaluator<'a> {
    layout: GeneLayout,
    records: &'a [BinaryRecord],
}

impl<'a> BinaryEvaluator<'a> {
    #[must_use]
    pub fn new(layout: GeneLayout, records: &'a [BinaryRecord]) -> Self {
        Self { layout, records }
    }

    #[must_use]
    pub fn layout(&self) -> GeneLayout {
        self.layout
    }

    #[must_use]
    pub fn records(&self) -> &'a [BinaryRecord] {
        self.records
    }

    /// Decodes `genes` and scores the resulting rules.
    #[must_use]
    pub fn evaluate(&self, genes: &[Gene]) -> RuleSetScore {
        let rules = self.layout.decode(genes);
        matching::score(&rules, self.records)
    }
}

/// Scores float rule sets against a training and a held-out partition.
#[derive(Debug, Clone, Copy)]
pub struct FloatEvaluator<'a> {
    partition: Partition<'a, FloatRecord>,
}

impl<'a> FloatEvaluator<'a> {
    #[must_use]
    pub fn new(partition: Partition<'a, FloatRecord>) -> Self {
        Self { partition }
    }

    #[must_use]
    pub fn partition(&self) -> Partition<'a, FloatRecord> {
        self.partition
    }

    /// Scores `rules` against the training partition.
    #[must_use]
    pub fn training_score(&self, rules: &[FloatRule]) -> RuleSetScore {
        matching::score(rules, self.partition.training())
    }

    /// Scores `rules` against the evaluation partition.
    #[must_use]
    pub fn evaluation_score(&self, rules: &[FloatRule]) -> RuleSetScore {
        matching::score(rules, self.partition.evaluation())
    }
}
