//! Adaptive parameter control.
//!
//! Both engines watch the ratio between the mean and the maximum fitness of a
//! generation. A ratio close to 1 means the population has converged around
//! its best individual, and the controllers respond by mutating harder.
//!
//! - [`BinaryMutationControl`] nudges the binary mutation rate up while the
//!   population is converged and back down towards its configured value
//!   otherwise.
//! - [`FloatAdaptiveController`] tracks two states. *Stagnation* is a plateau
//!   of the ratio at a high level; *super-stagnation* is a maximum fitness that
//!   has not moved for [`SUPER_STAGNATION_WINDOW`] generations. Under either
//!   state the tournament shrinks to 2 and the mutation parameters are
//!   perturbed; outside both, every parameter returns to its configured value.

use rand::Rng;
use rand_distr::StandardNormal;
use rulega_stats::{descriptive::FitnessStats, history::FitnessHistory};

const BINARY_CONVERGED_RATIO: f32 = 0.95;
const BINARY_RATE_STEP: f64 = 0.001;

/// Generations without a change of the maximum fitness that count as
/// super-stagnation.
pub const SUPER_STAGNATION_WINDOW: usize = 200;

/// Ratios that must be recorded before stagnation is detected.
const RATIO_WARMUP: usize = 60;
/// Ratios averaged for the plateau test, the current one included.
const RATIO_WINDOW: usize = 30;
const RATIO_TOLERANCE: f32 = 0.07;
const STAGNATION_RATIO: f32 = 0.96;
const SUPER_STAGNATION_RATIO: f32 = 0.90;

const FLOAT_RATE_STEP: f64 = 0.0016;
const STAGNATION_TOURNAMENT_SIZE: usize = 2;
/// Probability that a stagnating range grows by 10% while super-stagnating.
const RANGE_GROWTH_PROBABILITY: f64 = 0.95;
const RANGE_JUMP_SCALE: f32 = 0.3;
const FALLBACK_DIVISOR: f32 = 50.0;

/// Mutation rate control of the binary engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinaryMutationControl {
    original: f64,
    rate: f64,
}

impl BinaryMutationControl {
    #[must_use]
    pub fn new(rate: f64) -> Self {
        Self {
            original: rate,
            rate,
        }
    }

    /// The current mutation rate.
    #[must_use]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Adjusts the rate to the fitness of the generation just evaluated.
    ///
    /// The rate rises by 0.001 (up to 1) while the mean-to-max ratio exceeds
    /// 0.95, and falls by 0.001 otherwise, never below the configured rate.
    pub fn update(&mut self, stats: &FitnessStats) {
        if stats.mean_to_max_ratio() > BINARY_CONVERGED_RATIO {
            self.rate = (self.rate + BINARY_RATE_STEP).min(1.0);
        } else {
            self.rate = (self.rate - BINARY_RATE_STEP).max(self.original);
        }
    }
}

/// Parameters of the float engine that the controller adjusts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatParams {
    pub mutation_rate: f64,
    pub mutation_range: f32,
    pub tournament_size: usize,
}

/// Stagnation-driven control of the float engine's parameters.
#[derive(Debug, Clone)]
pub struct FloatAdaptiveController {
    original: FloatParams,
    current: FloatParams,
    stagnating: bool,
    super_stagnating: bool,
}

impl FloatAdaptiveController {
    #[must_use]
    pub fn new(params: FloatParams) -> Self {
        Self {
            original: params,
            current: params,
            stagnating: false,
            super_stagnating: false,
        }
    }

    #[must_use]
    pub fn params(&self) -> FloatParams {
        self.current
    }

    #[must_use]
    pub fn is_stagnating(&self) -> bool {
        self.stagnating
    }

    #[must_use]
    pub fn is_super_stagnating(&self) -> bool {
        self.super_stagnating
    }

    /// Adjusts the parameters to the fitness of generation `generation`.
    ///
    /// `history` holds the summaries of the earlier generations, index 0 being
    /// the initial population; `stats` is not part of it yet.
    pub fn update<R>(
        &mut self,
        generation: usize,
        stats: &FitnessStats,
        history: &FitnessHistory,
        rng: &mut R,
    ) where
        R: Rng + ?Sized,
    {
        let super_stagnating = generation > SUPER_STAGNATION_WINDOW
            && history.max_at(generation - SUPER_STAGNATION_WINDOW) == Some(stats.max);

        let ratio = stats.mean_to_max_ratio();
        let threshold = if super_stagnating {
            SUPER_STAGNATION_RATIO
        } else {
            STAGNATION_RATIO
        };
        let stagnating = history.len() > RATIO_WARMUP
            && ratio > threshold
            && (ratio - history.mean_ratio_with(ratio, RATIO_WINDOW)).abs() < RATIO_TOLERANCE;

        if stagnating != self.stagnating || super_stagnating != self.super_stagnating {
            log::debug!(
                "generation {generation}: stagnating={stagnating}, super_stagnating={super_stagnating}"
            );
        }
        self.stagnating = stagnating;
        self.super_stagnating = super_stagnating;

        let original = self.original;
        let current = &mut self.current;
        if stagnating {
            current.tournament_size = STAGNATION_TOURNAMENT_SIZE;
            current.mutation_rate += FLOAT_RATE_STEP;
            if !super_stagnating || rng.random_bool(RANGE_GROWTH_PROBABILITY) {
                current.mutation_range += current.mutation_range / 10.0;
            } else {
                let noise: f32 = rng.sample(StandardNormal);
                let jump = (noise * RANGE_JUMP_SCALE).abs();
                if rng.random_bool(0.5) {
                    current.mutation_range = original.mutation_range / FALLBACK_DIVISOR;
                } else {
                    current.mutation_rate = original.mutation_rate / 2.0;
                    current.mutation_range = jump;
                }
            }
            current.mutation_rate = current.mutation_rate.min(1.0);
            current.mutation_range = current.mutation_range.min(1.0);
        } else if super_stagnating {
            current.tournament_size = STAGNATION_TOURNAMENT_SIZE;
            current.mutation_range -= current.mutation_range / 10.0;
            current.mutation_rate -= FLOAT_RATE_STEP;
            if current.mutation_range < original.mutation_range {
                current.mutation_range = original.mutation_range / FALLBACK_DIVISOR;
            }
            if current.mutation_rate < original.mutation_rate {
                current.mutation_rate = original.mutation_rate / f64::from(FALLBACK_DIVISOR);
            }
        } else {
            *current = original;
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    fn stats(fitness: &[u32]) -> FitnessStats {
        FitnessStats::new(fitness.iter().copied()).unwrap()
    }

    fn history(len: usize, fitness: &[u32]) -> FitnessHistory {
        let mut history = FitnessHistory::new();
        for _ in 0..len {
            history.push(&stats(fitness));
        }
        history
    }

    fn params() -> FloatParams {
        FloatParams {
            mutation_rate: 0.005,
            mutation_range: 0.1,
            tournament_size: 15,
        }
    }

    #[test]
    fn test_binary_rate_rises_when_converged() {
        let mut control = BinaryMutationControl::new(0.4);
        control.update(&stats(&[10, 10, 10]));
        assert!((control.rate() - 0.401).abs() < 1e-9);
        control.update(&stats(&[10, 10, 10]));
        assert!((control.rate() - 0.402).abs() < 1e-9);
    }

    #[test]
    fn test_binary_rate_never_decays_below_original() {
        let mut control = BinaryMutationControl::new(0.4);
        control.update(&stats(&[10, 10]));
        control.update(&stats(&[0, 10]));
        control.update(&stats(&[0, 10]));
        control.update(&stats(&[0, 10]));
        assert!((control.rate() - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_binary_rate_is_capped() {
        let mut control = BinaryMutationControl::new(0.9995);
        for _ in 0..5 {
            control.update(&stats(&[3, 3]));
        }
        assert!(control.rate() <= 1.0);
    }

    #[test]
    fn test_float_no_stagnation_during_warmup() {
        let mut controller = FloatAdaptiveController::new(params());
        let mut rng = Pcg64Mcg::seed_from_u64(1);
        controller.update(10, &stats(&[5, 5]), &history(10, &[5, 5]), &mut rng);
        assert!(!controller.is_stagnating());
        assert_eq!(controller.params(), params());
    }

    #[test]
    fn test_float_stagnation_then_reset() {
        let mut controller = FloatAdaptiveController::new(params());
        let mut rng = Pcg64Mcg::seed_from_u64(2);

        controller.update(61, &stats(&[5, 5]), &history(61, &[5, 5]), &mut rng);
        assert!(controller.is_stagnating());
        assert!(!controller.is_super_stagnating());
        let current = controller.params();
        assert_eq!(current.tournament_size, 2);
        assert!((current.mutation_rate - 0.0066).abs() < 1e-9);
        assert!((current.mutation_range - 0.11).abs() < 1e-6);

        // ratio 0.5 ends the plateau
        controller.update(62, &stats(&[0, 10]), &history(62, &[5, 5]), &mut rng);
        assert!(!controller.is_stagnating());
        assert_eq!(controller.params(), params());
    }

    #[test]
    fn test_float_plateau_mean_includes_current_ratio() {
        let mut controller = FloatAdaptiveController::new(params());
        let mut rng = Pcg64Mcg::seed_from_u64(8);
        // ratio 0.9 for 61 generations, then 34/35: the mean over 29
        // recorded ratios and the current one is about 0.9024, within 0.07
        controller.update(61, &stats(&[33, 35]), &history(61, &[8, 10]), &mut rng);
        assert!(controller.is_stagnating());

        // a jump to 1.0 stays outside the tolerance
        let mut controller = FloatAdaptiveController::new(params());
        controller.update(61, &stats(&[7, 7]), &history(61, &[8, 10]), &mut rng);
        assert!(!controller.is_stagnating());
    }

    #[test]
    fn test_float_plateau_must_be_high() {
        let mut controller = FloatAdaptiveController::new(params());
        let mut rng = Pcg64Mcg::seed_from_u64(3);
        // a steady ratio of 0.5 is a plateau but not a converged one
        controller.update(80, &stats(&[0, 10]), &history(80, &[0, 10]), &mut rng);
        assert!(!controller.is_stagnating());
    }

    #[test]
    fn test_float_stagnation_caps_parameters() {
        let mut controller = FloatAdaptiveController::new(FloatParams {
            mutation_rate: 0.9995,
            mutation_range: 0.95,
            tournament_size: 4,
        });
        let mut rng = Pcg64Mcg::seed_from_u64(4);
        controller.update(70, &stats(&[7, 7]), &history(70, &[7, 7]), &mut rng);
        let current = controller.params();
        assert!(controller.is_stagnating());
        assert!((current.mutation_rate - 1.0).abs() < 1e-12);
        assert!((current.mutation_range - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_float_super_stagnation_with_plateau() {
        let mut controller = FloatAdaptiveController::new(params());
        let mut rng = Pcg64Mcg::seed_from_u64(5);
        let history = history(300, &[5, 5]);
        for generation in 250..300 {
            controller.update(generation, &stats(&[5, 5]), &history, &mut rng);
            assert!(controller.is_stagnating());
            assert!(controller.is_super_stagnating());
            let current = controller.params();
            assert_eq!(current.tournament_size, 2);
            assert!((0.0..=1.0).contains(&current.mutation_rate));
            assert!((0.0..=1.0).contains(&current.mutation_range));
        }
    }

    #[test]
    fn test_float_super_stagnation_without_plateau_shrinks() {
        let mut controller = FloatAdaptiveController::new(params());
        let mut rng = Pcg64Mcg::seed_from_u64(6);
        // same max as 200 generations ago, but a low ratio
        controller.update(250, &stats(&[0, 5]), &history(250, &[5, 5]), &mut rng);
        assert!(!controller.is_stagnating());
        assert!(controller.is_super_stagnating());
        let current = controller.params();
        assert_eq!(current.tournament_size, 2);
        assert!((current.mutation_range - 0.002).abs() < 1e-6);
        assert!((current.mutation_rate - 0.0001).abs() < 1e-9);
    }

    #[test]
    fn test_float_progress_is_not_super_stagnation() {
        let mut controller = FloatAdaptiveController::new(params());
        let mut rng = Pcg64Mcg::seed_from_u64(7);
        controller.update(250, &stats(&[0, 6]), &history(250, &[5, 5]), &mut rng);
        assert!(!controller.is_super_stagnating());
        assert_eq!(controller.params(), params());
    }
}
