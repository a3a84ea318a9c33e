//! Variation operators of the float engine.

use rand::Rng;
use rand_distr::StandardNormal;
use rulega_rules::{FloatRule, Interval};

use super::FloatIndividual;

/// Draws a rule whose intervals straddle the middle of `[0, 1]`.
///
/// Each low bound is uniform in `[0, 0.5)` and each high bound in `[0.5, 1)`.
pub fn random_rule<R>(dimension: usize, rng: &mut R) -> FloatRule
where
    R: Rng + ?Sized,
{
    let intervals = (0..dimension)
        .map(|_| Interval::new(rng.random_range(0.0..0.5), rng.random_range(0.5..1.0)))
        .collect();
    FloatRule::new(intervals, rng.random_bool(0.5))
}

/// Exchanges every rule from a random cut onwards.
///
/// With probability `1 - rate` the children are clones of the parents.
pub fn crossover_single_point<R>(
    rate: f64,
    p1: &FloatIndividual,
    p2: &FloatIndividual,
    rng: &mut R,
) -> (FloatIndividual, FloatIndividual)
where
    R: Rng + ?Sized,
{
    let mut c1 = p1.clone();
    let mut c2 = p2.clone();
    if rng.random_bool(rate) {
        let cut = rng.random_range(0..c1.rules().len());
        c1.rules_mut()[cut..].swap_with_slice(&mut c2.rules_mut()[cut..]);
    }
    (c1, c2)
}

/// Exchanges single bounds and outputs between matching rules.
///
/// For every dimension of every rule, one coin flip decides whether the
/// dimension takes part and a second whether its low or high bound is
/// exchanged. A further coin flip per rule exchanges the outputs. Touched
/// intervals are repaired, so both children stay ordered.
///
/// With probability `1 - rate` the children are clones of the parents.
pub fn crossover_uniform<R>(
    rate: f64,
    p1: &FloatIndividual,
    p2: &FloatIndividual,
    rng: &mut R,
) -> (FloatIndividual, FloatIndividual)
where
    R: Rng + ?Sized,
{
    let mut c1 = p1.clone();
    let mut c2 = p2.clone();
    if !rng.random_bool(rate) {
        return (c1, c2);
    }
    for (r1, r2) in c1.rules_mut().iter_mut().zip(c2.rules_mut()) {
        for (i1, i2) in r1.intervals.iter_mut().zip(&mut r2.intervals) {
            if !rng.random_bool(0.5) {
                continue;
            }
            if rng.random_bool(0.5) {
                std::mem::swap(&mut i1.high, &mut i2.high);
            } else {
                std::mem::swap(&mut i1.low, &mut i2.low);
            }
            i1.repair();
            i2.repair();
        }
        if rng.random_bool(0.5) {
            std::mem::swap(&mut r1.output, &mut r2.output);
        }
    }
    (c1, c2)
}

/// Returns a mutated copy of `individual`.
///
/// Each interval is perturbed with probability `rate`: a coin flip picks the
/// low or the high bound, which moves by `N(0, 1) * range`, is clamped into
/// `[0, 1]`, and the interval is repaired.
pub fn mutate<R>(
    rate: f64,
    range: f32,
    individual: &FloatIndividual,
    rng: &mut R,
) -> FloatIndividual
where
    R: Rng + ?Sized,
{
    let mut mutated = individual.clone();
    for rule in mutated.rules_mut() {
        for interval in &mut rule.intervals {
            if !rng.random_bool(rate) {
                continue;
            }
            let noise: f32 = rng.sample(StandardNormal);
            let bound = if rng.random_bool(0.5) {
                &mut interval.low
            } else {
                &mut interval.high
            };
            *bound = (*bound + noise * range).clamp(0.0, 1.0);
            interval.repair();
        }
    }
    mutated
}
