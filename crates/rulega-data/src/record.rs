/// A labeled data record.
///
/// The condition vector holds one value per input dimension; the output is the
/// binary class label the classifier has to reproduce.
#[derive(Debug, Clone, PartialEq)]
pub struct Record<T> {
    condition: Vec<T>,
    output: bool,
}

/// A record whose conditions are single bits.
pub type BinaryRecord = Record<bool>;

/// A record whose conditions are real values, expected in `[0, 1]`.
pub type FloatRecord = Record<f32>;

impl<T> Record<T> {
    #[must_use]
    pub fn new(condition: Vec<T>, output: bool) -> Self {
        Self { condition, output }
    }

    #[must_use]
    pub fn condition(&self) -> &[T] {
        &self.condition
    }

    #[must_use]
    pub fn output(&self) -> bool {
        self.output
    }

    /// Number of input dimensions.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.condition.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let record = BinaryRecord::new(vec![true, false, true], false);
        assert_eq!(record.condition(), &[true, false, true]);
        assert!(!record.output());
        assert_eq!(record.dimension(), 3);
    }
}
