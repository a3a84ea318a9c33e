use rulega_data::Record;

/// A classification rule over condition values of type `T`.
pub trait Rule<T> {
    /// Returns `true` if the rule's condition accepts `condition`.
    fn matches(&self, condition: &[T]) -> bool;

    /// The class the rule predicts when it matches.
    fn output(&self) -> bool;
}

/// Result of scoring a rule set against a set of records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSetScore {
    /// Number of records whose first matching rule predicts their label.
    pub total: u32,
    /// Credit of each rule, in rule order. Sums to `total`.
    pub per_rule: Vec<u32>,
}

/// Finds the first rule, in order, that matches `condition`.
pub fn first_match<'r, T, R>(rules: &'r [R], condition: &[T]) -> Option<(usize, &'r R)>
where
    R: Rule<T>,
{
    rules
        .iter()
        .enumerate()
        .find(|(_, rule)| rule.matches(condition))
}

/// Scores `rules` against `records` with first-match-wins semantics.
///
/// Each record is decided by the first matching rule only. If that rule's
/// output equals the label, the record adds one to the total and to the
/// rule's credit; otherwise the record contributes nothing, even if a later
/// rule would have classified it correctly.
pub fn score<T, R>(rules: &[R], records: &[Record<T>]) -> RuleSetScore
where
    R: Rule<T>,
{
    let mut result = RuleSetScore {
        total: 0,
        per_rule: vec![0; rules.len()],
    };
    for record in records {
        if let Some((index, rule)) = first_match(rules, record.condition())
            && rule.output() == record.output()
        {
            result.total += 1;
            result.per_rule[index] += 1;
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use rulega_data::BinaryRecord;

    use super::*;
    use crate::{BinaryRule, Gene};

    fn rule(condition: &str, output: bool) -> BinaryRule {
        let condition = condition
            .chars()
            .map(|c| match c {
                '0' => Gene::Zero,
                '1' => Gene::One,
                _ => Gene::Wildcard,
            })
            .collect();
        BinaryRule::new(condition, output)
    }

    fn record(condition: &str, output: bool) -> BinaryRecord {
        BinaryRecord::new(condition.chars().map(|c| c == '1').collect(), output)
    }

    #[test]
    fn test_wildcard_rule_scores_single_record() {
        let records = [record("10", true), record("01", false)];
        let result = score(&[rule("#0", true)], &records);
        assert_eq!(result.total, 1);
        assert_eq!(result.per_rule, vec![1]);
    }

    #[test]
    fn test_first_match_wins_even_when_wrong() {
        let records = [record("11", true)];
        // The first rule matches with the wrong output and shadows the second.
        let rules = [rule("1#", false), rule("11", true)];
        let result = score(&rules, &records);
        assert_eq!(result.total, 0);
        assert_eq!(result.per_rule, vec![0, 0]);

        let reordered = [rule("11", true), rule("1#", false)];
        assert_eq!(score(&reordered, &records).total, 1);
    }

    #[test]
    fn test_credit_goes_to_first_matching_rule() {
        let records = [
            record("000", false),
            record("001", false),
            record("111", true),
            record("110", true),
        ];
        let rules = [rule("00#", false), rule("#0#", true), rule("11#", true)];
        let result = score(&rules, &records);
        assert_eq!(result.total, 4);
        assert_eq!(result.per_rule, vec![2, 0, 2]);
    }

    #[test]
    fn test_unmatched_records_contribute_nothing() {
        let records = [record("01", true), record("10", false)];
        let result = score(&[rule("11", true)], &records);
        assert_eq!(result, RuleSetScore {
            total: 0,
            per_rule: vec![0],
        });
        assert!(first_match(&[rule("11", true)], records[0].condition()).is_none());
    }

    #[test]
    fn test_score_is_deterministic() {
        let records = [record("101", true), record("010", false), record("111", true)];
        let rules = [rule("1#1", true), rule("0##", false)];
        assert_eq!(score(&rules, &records), score(&rules, &records));
    }
}
