/// Summary of the fitness values of one population.
#[derive(Debug, Clone, PartialEq)]
pub struct FitnessStats {
    /// The lowest fitness in the population.
    pub min: u32,
    /// The highest fitness in the population.
    pub max: u32,
    /// The sum of all fitness values.
    pub total: u64,
    /// The arithmetic mean fitness.
    pub mean: f32,
    /// The median fitness (upper median for even counts).
    pub median: u32,
    /// The population standard deviation of the fitness values.
    pub std_dev: f32,
}

impl FitnessStats {
    /// Computes statistics from unsorted fitness values.
    ///
    /// # Returns
    ///
    /// * `Some(FitnessStats)` - if there is at least one value
    /// * `None` - if `values` is empty
    ///
    /// # Examples
    ///
    /// ```
    /// # use rulega_stats::descriptive::FitnessStats;
    /// let stats = FitnessStats::new([3, 1, 2]).unwrap();
    /// assert_eq!(stats.min, 1);
    /// assert_eq!(stats.max, 3);
    /// assert_eq!(stats.total, 6);
    /// assert_eq!(stats.median, 2);
    /// assert!(FitnessStats::new([]).is_none());
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = u32>,
    {
        let mut values = values.into_iter().collect::<Vec<_>>();
        values.sort_unstable();

        let min = *values.first()?;
        let max = *values.last()?;
        let total = values.iter().copied().map(u64::from).sum::<u64>();
        let n = values.len() as f32;
        let mean = total as f32 / n;
        let median = values[values.len() / 2];
        let variance = values
            .iter()
            .map(|&v| (v as f32 - mean).powi(2))
            .sum::<f32>()
            / n;

        Some(Self {
            min,
            max,
            total,
            mean,
            median,
            std_dev: variance.sqrt(),
        })
    }

    /// Ratio of mean to maximum fitness.
    ///
    /// Close to `1.0` when the population has converged on its best member.
    /// Returns `NaN` when the maximum fitness is zero, so any threshold
    /// comparison on it is false.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn mean_to_max_ratio(&self) -> f32 {
        if self.max == 0 {
            return f32::NAN;
        }
        self.mean / self.max as f32
    }
}
