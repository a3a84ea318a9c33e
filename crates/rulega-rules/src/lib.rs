//! Classification rules and the first-match fitness semantics.
//!
//! A rule set is an ordered list of rules. To classify a record, the rules are
//! tried in order and the **first** rule whose condition matches decides the
//! output. A record is counted as correct only when that first match agrees
//! with the record's label; later rules are never consulted, even when the
//! first match is wrong.
//!
//! # Rule encodings
//!
//! - [`BinaryRule`]: one [`Gene`] (`0`, `1` or wildcard `#`) per dimension.
//!   Individuals of the binary engine store their rules as a flat gene array;
//!   [`GeneLayout`] converts between the flat form and the rules.
//! - [`FloatRule`]: one closed [`Interval`] per dimension.
//!
//! # Scoring
//!
//! [`score`] is the pure scoring function shared by both encodings. The
//! evaluators bind it to their data:
//!
//! - [`BinaryEvaluator`]: decodes gene arrays and scores them against all records
//! - [`FloatEvaluator`]: scores rule lists against a training and a held-out
//!   evaluation partition
//!
//! ```
//! use rulega_data::BinaryRecord;
//! use rulega_rules::{BinaryRule, Gene, score};
//!
//! let records = [
//!     BinaryRecord::new(vec![true, false], true),
//!     BinaryRecord::new(vec![false, true], false),
//! ];
//! let rules = [BinaryRule::new(vec![Gene::Wildcard, Gene::Zero], true)];
//! let result = score(&rules, &records);
//! assert_eq!(result.total, 1);
//! assert_eq!(result.per_rule, vec![1]);
//! ```

pub use self::{
    binary::{BinaryRule, GeneLayout},
    evaluator::{BinaryEvaluator, FloatEvaluator},
    float::{FloatRule, Interval},
    gene::Gene,
    matching::{Rule, RuleSetScore, first_match, score},
};

mod binary;
mod evaluator;
mod float;
mod gene;
mod matching;
