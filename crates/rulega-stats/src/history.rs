//! Run-long fitness history.
//!
//! The float engine's adaptive controller looks back over this history in two
//! ways: the mean of the most recent mean-to-max ratios (plateau detection) and
//! the maximum fitness a fixed number of generations ago (progress detection).

use serde::Serialize;

use crate::descriptive::FitnessStats;

/// Fitness figures of one generation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GenerationSummary {
    pub max: u32,
    pub mean: f32,
    pub mean_to_max_ratio: f32,
}

impl From<&FitnessStats> for GenerationSummary {
    fn from(stats: &FitnessStats) -> Self {
        Self {
            max: stats.max,
            mean: stats.mean,
            mean_to_max_ratio: stats.mean_to_max_ratio(),
        }
    }
}

/// Generation summaries in generation order, index 0 being the initial population.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FitnessHistory {
    generations: Vec<GenerationSummary>,
}

impl FitnessHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, stats: &FitnessStats) {
        self.generations.push(stats.into());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.generations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.generations.is_empty()
    }

    #[must_use]
    pub fn generations(&self) -> &[GenerationSummary] {
        &self.generations
    }

    #[must_use]
    pub fn latest(&self) -> Option<&GenerationSummary> {
        self.generations.last()
    }

    /// Maximum fitness recorded for generation `index`.
    #[must_use]
    pub fn max_at(&self, index: usize) -> Option<u32> {
        self.generations.get(index).map(|g| g.max)
    }

    /// Mean of `current` and the last `window - 1` recorded mean-to-max ratios.
    ///
    /// Uses fewer recorded ratios when the history is shorter.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn mean_ratio_with(&self, current: f32, window: usize) -> f32 {
        let start = self.generations.len().saturating_sub(window.saturating_sub(1));
        let recent = &self.generations[start..];
        let sum = recent.iter().map(|g| g.mean_to_max_ratio).sum::<f32>() + current;
        sum / (recent.len() + 1) as f32
    }
}
