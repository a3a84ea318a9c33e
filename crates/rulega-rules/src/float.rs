use std::fmt;

use serde::{Deserialize, Serialize};

use crate::matching::Rule;

/// A closed interval `[low, high]` within `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub low: f32,
    pub high: f32,
}

impl Interval {
    #[must_use]
    pub fn new(low: f32, high: f32) -> Self {
        Self { low, high }
    }

    /// Returns `true` if `value` lies within the interval, bounds included.
    #[must_use]
    pub fn contains(&self, value: f32) -> bool {
        self.low <= value && value <= self.high
    }

    #[must_use]
    pub fn is_ordered(&self) -> bool {
        self.low <= self.high
    }

    /// Restores `low <= high` on an inverted interval.
    ///
    /// The new low is `max(high, 0)` and the new high is `min(low, 1)`.
    /// Ordered intervals are left unchanged.
    pub fn repair(&mut self) {
        if self.low > self.high {
            let low = self.high.max(0.0);
            let high = self.low.min(1.0);
            self.low = low;
            self.high = high;
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5}-{:.5}", self.low, self.high)
    }
}

/// A rule over real-valued records: one interval per dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloatRule {
    pub intervals: Vec<Interval>,
    pub output: bool,
}

impl FloatRule {
    #[must_use]
    pub fn new(intervals: Vec<Interval>, output: bool) -> Self {
        Self { intervals, output }
    }
}

impl Rule<f32> for FloatRule {
    fn matches(&self, condition: &[f32]) -> bool {
        self.intervals
            .iter()
            .zip(condition)
            .all(|(interval, value)| interval.contains(*value))
    }

    fn output(&self) -> bool {
        self.output
    }
}

impl fmt::Display for FloatRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for interval in &self.intervals {
            write!(f, "{interval}| ")?;
        }
        write!(f, "=> {}", u8::from(self.output))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_inclusive() {
        let interval = Interval::new(0.25, 0.75);
        assert!(interval.contains(0.25));
        assert!(interval.contains(0.5));
        assert!(interval.contains(0.75));
        assert!(!interval.contains(0.2));
        assert!(!interval.contains(0.8));
    }

    #[test]
    fn test_repair_swaps_inverted_bounds() {
        let mut interval = Interval::new(0.8, 0.3);
        interval.repair();
        assert_eq!(interval, Interval::new(0.3, 0.8));

        let mut ordered = Interval::new(0.1, 0.2);
        ordered.repair();
        assert_eq!(ordered, Interval::new(0.1, 0.2));
    }

    #[test]
    fn test_rule_matches_every_dimension() {
        let rule = FloatRule::new(
            vec![Interval::new(0.0, 0.5), Interval::new(0.4, 1.0)],
            true,
        );
        assert!(rule.matches(&[0.5, 0.4]));
        assert!(!rule.matches(&[0.6, 0.4]));
        assert!(!rule.matches(&[0.1, 0.3]));
    }

    #[test]
    fn test_inverted_interval_matches_nothing() {
        let interval = Interval::new(0.6, 0.4);
        assert!((0..=10_u8).all(|i| !interval.contains(f32::from(i) / 10.0)));
    }

    #[test]
    fn test_display() {
        let rule = FloatRule::new(vec![Interval::new(0.1, 0.9)], false);
        assert_eq!(rule.to_string(), "0.10000-0.90000| => 0");
    }
}
