use std::{fmt, ops::Range};

use serde::{Deserialize, Serialize};

use crate::{Gene, matching::Rule};

/// A rule over binary records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinaryRule {
    condition: Vec<Gene>,
    output: bool,
}

impl BinaryRule {
    #[must_use]
    pub fn new(condition: Vec<Gene>, output: bool) -> Self {
        Self { condition, output }
    }

    #[must_use]
    pub fn condition(&self) -> &[Gene] {
        &self.condition
    }
}

impl Rule<bool> for BinaryRule {
    fn matches(&self, condition: &[bool]) -> bool {
        self.condition
            .iter()
            .zip(condition)
            .all(|(gene, bit)| gene.matches(*bit))
    }

    fn output(&self) -> bool {
        self.output
    }
}

impl fmt::Display for BinaryRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for gene in &self.condition {
            write!(f, "{gene}")?;
        }
        write!(f, " => {}", u8::from(self.output))
    }
}

/// Shape of a flat binary gene array.
///
/// The array is `rule_count` consecutive groups of `condition_length + 1`
/// genes: the condition symbols of a rule followed by its output gene.
///
/// ```
/// use rulega_rules::{BinaryRule, Gene, GeneLayout};
///
/// let layout = GeneLayout::new(2, 2);
/// assert_eq!(layout.gene_count(), 6);
/// assert!(layout.is_output_slot(2));
/// assert_eq!(layout.rule_range(1), 3..6);
///
/// let rules = vec![
///     BinaryRule::new(vec![Gene::One, Gene::Wildcard], true),
///     BinaryRule::new(vec![Gene::Zero, Gene::Zero], false),
/// ];
/// let genes = layout.encode(&rules);
/// assert_eq!(layout.decode(&genes), rules);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneLayout {
    condition_length: usize,
    rule_count: usize,
}

impl GeneLayout {
    #[must_use]
    pub fn new(condition_length: usize, rule_count: usize) -> Self {
        Self {
            condition_length,
            rule_count,
        }
    }

    #[must_use]
    pub fn condition_length(&self) -> usize {
        self.condition_length
    }

    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rule_count
    }

    /// Number of genes of one rule, output included.
    #[must_use]
    pub fn rule_length(&self) -> usize {
        self.condition_length + 1
    }

    #[must_use]
    pub fn gene_count(&self) -> usize {
        self.rule_length() * self.rule_count
    }

    /// Returns `true` if `index` holds the output gene of some rule.
    #[must_use]
    pub fn is_output_slot(&self, index: usize) -> bool {
        (index + 1) % self.rule_length() == 0
    }

    /// Gene positions occupied by rule `rule`.
    #[must_use]
    pub fn rule_range(&self, rule: usize) -> Range<usize> {
        let start = rule * self.rule_length();
        start..start + self.rule_length()
    }

    /// Decodes a gene array into its rules, in encoding order.
    #[must_use]
    pub fn decode(&self, genes: &[Gene]) -> Vec<BinaryRule> {
        assert_eq!(genes.len(), self.gene_count(), "gene array length mismatch");
        genes
            .chunks_exact(self.rule_length())
            .map(|chunk| {
                let (output, condition) = chunk
                    .split_last()
                    .expect("rule length is at least one");
                debug_assert!(!output.is_wildcard(), "wildcard in output slot");
                BinaryRule::new(condition.to_vec(), *output == Gene::One)
            })
            .collect()
    }

    /// Encodes rules into a flat gene array.
    #[must_use]
    pub fn encode(&self, rules: &[BinaryRule]) -> Vec<Gene> {
        assert_eq!(rules.len(), self.rule_count, "rule count mismatch");
        let mut genes = Vec::with_capacity(self.gene_count());
        for rule in rules {
            assert_eq!(rule.condition.len(), self.condition_length);
            genes.extend_from_slice(&rule.condition);
            genes.push(Gene::from_bit(rule.output));
        }
        genes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_slots() {
        let layout = GeneLayout::new(3, 3);
        let slots = (0..layout.gene_count())
            .filter(|&i| layout.is_output_slot(i))
            .collect::<Vec<_>>();
        assert_eq!(slots, vec![3, 7, 11]);
        for rule in 0..layout.rule_count() {
            assert_eq!(layout.rule_range(rule).end - 1, slots[rule]);
        }
    }

    #[test]
    fn test_decode_slices_in_order() {
        let layout = GeneLayout::new(2, 2);
        let genes = [
            Gene::Wildcard,
            Gene::One,
            Gene::Zero,
            Gene::One,
            Gene::Zero,
            Gene::One,
        ];
        let rules = layout.decode(&genes);
        assert_eq!(rules[0].condition(), &[Gene::Wildcard, Gene::One]);
        assert!(!rules[0].output());
        assert_eq!(rules[1].condition(), &[Gene::One, Gene::Zero]);
        assert!(rules[1].output());
        assert_eq!(layout.encode(&rules), genes);
    }

    #[test]
    fn test_round_trip() {
        let layout = GeneLayout::new(4, 3);
        let rules = vec![
            BinaryRule::new(vec![Gene::One, Gene::Zero, Gene::Wildcard, Gene::One], true),
            BinaryRule::new(vec![Gene::Wildcard; 4], false),
            BinaryRule::new(vec![Gene::Zero, Gene::Zero, Gene::One, Gene::Wildcard], true),
        ];
        assert_eq!(layout.decode(&layout.encode(&rules)), rules);
    }

    #[test]
    fn test_matches() {
        let rule = BinaryRule::new(vec![Gene::One, Gene::Wildcard, Gene::Zero], true);
        assert!(rule.matches(&[true, false, false]));
        assert!(rule.matches(&[true, true, false]));
        assert!(!rule.matches(&[false, true, false]));
        assert!(!rule.matches(&[true, true, true]));
    }

    #[test]
    fn test_display() {
        let rule = BinaryRule::new(vec![Gene::One, Gene::Wildcard, Gene::Zero], true);
        assert_eq!(rule.to_string(), "1#0 => 1");
    }

    #[test]
    fn test_serde() {
        let rule = BinaryRule::new(vec![Gene::Zero, Gene::Wildcard], false);
        let json = serde_json::to_string(&rule).unwrap();
        let back: BinaryRule = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rule);
    }
}
