/// A training / evaluation split over a record slice.
///
/// The first `size` records form the training partition and the next `size`
/// records form the evaluation partition. Records past `2 * size` are ignored.
/// Either partition may be shorter than `size` when the input runs out.
#[derive(Debug)]
pub struct Partition<'a, T> {
    training: &'a [T],
    evaluation: &'a [T],
}

impl<T> Clone for Partition<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Partition<'_, T> {}

impl<'a, T> Partition<'a, T> {
    #[must_use]
    pub fn split(records: &'a [T], size: usize) -> Self {
        let (training, rest) = records.split_at(size.min(records.len()));
        let evaluation = &rest[..size.min(rest.len())];
        Self {
            training,
            evaluation,
        }
    }

    #[must_use]
    pub fn training(&self) -> &'a [T] {
        self.training
    }

    #[must_use]
    pub fn evaluation(&self) -> &'a [T] {
        self.evaluation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disjoint_halves() {
        let records = (0..10).collect::<Vec<_>>();
        let partition = Partition::split(&records, 4);
        assert_eq!(partition.training(), &[0, 1, 2, 3]);
        assert_eq!(partition.evaluation(), &[4, 5, 6, 7]);
    }

    #[test]
    fn test_short_input() {
        let records = (0..5).collect::<Vec<_>>();
        let partition = Partition::split(&records, 4);
        assert_eq!(partition.training(), &[0, 1, 2, 3]);
        assert_eq!(partition.evaluation(), &[4]);

        let partition = Partition::split(&records, 8);
        assert_eq!(partition.training().len(), 5);
        assert!(partition.evaluation().is_empty());
    }

    #[test]
    fn test_copy_without_copy_records() {
        let records = vec![vec![1.0_f32], vec![2.0], vec![3.0]];
        let partition = Partition::split(&records, 1);
        let copy = partition;
        assert_eq!(partition.training(), copy.training());
        assert_eq!(copy.evaluation(), &[vec![2.0_f32]]);
    }
}
