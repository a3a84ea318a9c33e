//! Tournament selection and population ranking helpers.
//!
//! A tournament draws `k` individuals uniformly at random, with replacement,
//! and keeps the fittest; ties go to the first one drawn. Larger `k` means
//! stronger selection pressure. A tournament at least as large as the
//! population is decided over the whole population, so it always yields the
//! global best.

use rand::Rng;

/// An individual with a cached integer fitness. Higher is better.
pub trait Scored {
    fn fitness(&self) -> u32;
}

/// Selects an individual by tournament.
///
/// # Panics
///
/// Panics if `population` is empty or `tournament_size` is zero.
pub fn tournament_select<'a, I, R>(population: &'a [I], tournament_size: usize, rng: &mut R) -> &'a I
where
    I: Scored,
    R: Rng + ?Sized,
{
    assert!(!population.is_empty(), "population must not be empty");
    assert!(tournament_size > 0, "tournament size must be positive");

    if tournament_size >= population.len() {
        return &population[best_index(population)];
    }

    let mut winner = &population[rng.random_range(0..population.len())];
    for _ in 1..tournament_size {
        let challenger = &population[rng.random_range(0..population.len())];
        if challenger.fitness() > winner.fitness() {
            winner = challenger;
        }
    }
    winner
}

/// Index of the fittest individual; the first one wins ties.
///
/// # Panics
///
/// Panics if `population` is empty.
pub fn best_index<I>(population: &[I]) -> usize
where
    I: Scored,
{
    assert!(!population.is_empty(), "population must not be empty");
    let mut best = 0;
    for (i, ind) in population.iter().enumerate().skip(1) {
        if ind.fitness() > population[best].fitness() {
            best = i;
        }
    }
    best
}

/// Index of the least fit individual; the first one wins ties.
///
/// # Panics
///
/// Panics if `population` is empty.
pub fn worst_index<I>(population: &[I]) -> usize
where
    I: Scored,
{
    assert!(!population.is_empty(), "population must not be empty");
    let mut worst = 0;
    for (i, ind) in population.iter().enumerate().skip(1) {
        if ind.fitness() < population[worst].fitness() {
            worst = i;
        }
    }
    worst
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Dummy {
        id: usize,
        fitness: u32,
    }

    impl Scored for Dummy {
        fn fitness(&self) -> u32 {
            self.fitness
        }
    }

    fn population(fitness: &[u32]) -> Vec<Dummy> {
        fitness
            .iter()
            .enumerate()
            .map(|(id, &fitness)| Dummy { id, fitness })
            .collect()
    }

    #[test]
    fn test_full_tournament_returns_global_best() {
        let population = population(&[3, 9, 1, 9, 4, 0]);
        let mut rng = Pcg64Mcg::seed_from_u64(7);
        for size in [population.len(), population.len() * 3] {
            for _ in 0..100 {
                let winner = tournament_select(&population, size, &mut rng);
                assert_eq!(winner.id, 1);
            }
        }
    }

    #[test]
    fn test_single_tournament_is_uniform() {
        let population = population(&[5, 1, 3, 2]);
        let mut rng = Pcg64Mcg::seed_from_u64(11);
        let mut counts = [0_usize; 4];
        for _ in 0..4000 {
            counts[tournament_select(&population, 1, &mut rng).id] += 1;
        }
        // every member is drawn roughly a quarter of the time
        assert!(counts.iter().all(|&c| (800..1200).contains(&c)), "{counts:?}");
    }

    #[test]
    fn test_selection_pressure() {
        let population = population(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
        let mut rng = Pcg64Mcg::seed_from_u64(3);
        let mean = |size: usize, rng: &mut Pcg64Mcg| {
            (0..2000)
                .map(|_| tournament_select(&population, size, rng).fitness)
                .sum::<u32>()
        };
        let weak = mean(1, &mut rng);
        let strong = mean(5, &mut rng);
        assert!(strong > weak, "size 5 ({strong}) should beat size 1 ({weak})");
    }

    #[test]
    fn test_winner_is_member() {
        let population = population(&[2, 2, 2]);
        let mut rng = Pcg64Mcg::seed_from_u64(5);
        for _ in 0..50 {
            let winner = tournament_select(&population, 2, &mut rng);
            assert!(population.contains(winner));
        }
    }

    #[test]
    fn test_best_and_worst_index_break_ties_first() {
        let population = population(&[4, 7, 1, 7, 1]);
        assert_eq!(best_index(&population), 1);
        assert_eq!(worst_index(&population), 2);
    }
}
