//! Variation operators of the binary engine.
//!
//! Every operator borrows its parents and returns new individuals. Children
//! keep the parents' cached fitness until they are evaluated again.

use rand::{Rng, seq::IndexedRandom as _};
use rulega_rules::{Gene, GeneLayout};

use super::BinaryIndividual;
use crate::config::BinaryCrossover;

/// Draws a random symbol for gene position `index`.
pub fn random_gene<R>(layout: GeneLayout, index: usize, rng: &mut R) -> Gene
where
    R: Rng + ?Sized,
{
    let symbols: &[Gene] = if layout.is_output_slot(index) {
        &Gene::OUTPUT_SYMBOLS
    } else {
        &Gene::CONDITION_SYMBOLS
    };
    *symbols
        .choose(rng)
        .expect("symbol tables are not empty")
}

/// Recombines two parents with the given strategy.
///
/// With probability `1 - rate` no crossover happens and the children are
/// clones of `p1` and `p2`.
pub fn crossover<R>(
    strategy: BinaryCrossover,
    rate: f64,
    layout: GeneLayout,
    p1: &BinaryIndividual,
    p2: &BinaryIndividual,
    rng: &mut R,
) -> (BinaryIndividual, BinaryIndividual)
where
    R: Rng + ?Sized,
{
    let mut c1 = p1.clone();
    let mut c2 = p2.clone();
    if !rng.random_bool(rate) {
        return (c1, c2);
    }
    match strategy {
        BinaryCrossover::Bitwise => swap_tail(&mut c1, &mut c2, rng),
        BinaryCrossover::Uniform => swap_uniform(&mut c1, &mut c2, rng),
        BinaryCrossover::RuleSwap => swap_rules(layout, p1, p2, &mut c1, &mut c2, rng),
        BinaryCrossover::DavisOrder => {
            let rule = rng.random_range(0..layout.rule_count());
            davis_order(layout, rule, p1, p2, &mut c1);
            davis_order(layout, rule, p2, p1, &mut c2);
        }
    }
    (c1, c2)
}

/// Swaps every gene from a random cut point onwards.
fn swap_tail<R>(c1: &mut BinaryIndividual, c2: &mut BinaryIndividual, rng: &mut R)
where
    R: Rng + ?Sized,
{
    let cut = rng.random_range(0..c1.genes().len());
    c1.genes_mut()[cut..].swap_with_slice(&mut c2.genes_mut()[cut..]);
}

fn swap_uniform<R>(c1: &mut BinaryIndividual, c2: &mut BinaryIndividual, rng: &mut R)
where
    R: Rng + ?Sized,
{
    for (g1, g2) in c1.genes_mut().iter_mut().zip(c2.genes_mut()) {
        if rng.random_bool(0.5) {
            std::mem::swap(g1, g2);
        }
    }
}

/// Cross-exchanges two rule slots: `c1` receives rule `a` of `p2` at slot `b`
/// and rule `b` of `p2` at slot `a`, `c2` the same from `p1`.
fn swap_rules<R>(
    layout: GeneLayout,
    p1: &BinaryIndividual,
    p2: &BinaryIndividual,
    c1: &mut BinaryIndividual,
    c2: &mut BinaryIndividual,
    rng: &mut R,
) where
    R: Rng + ?Sized,
{
    let rule_count = layout.rule_count();
    let a = rng.random_range(0..rule_count);
    let b = if rule_count > 1 {
        // uniform over every slot except `a`
        (a + rng.random_range(1..rule_count)) % rule_count
    } else {
        a
    };
    let (ra, rb) = (layout.rule_range(a), layout.rule_range(b));
    c1.genes_mut()[rb.clone()].copy_from_slice(&p2.genes()[ra.clone()]);
    c1.genes_mut()[ra.clone()].copy_from_slice(&p2.genes()[rb.clone()]);
    c2.genes_mut()[rb.clone()].copy_from_slice(&p1.genes()[ra.clone()]);
    c2.genes_mut()[ra].copy_from_slice(&p1.genes()[rb]);
}

/// Keeps `keep`'s block at `rule` in place and fills the remaining positions,
/// starting right after the block and wrapping around, with `fill`'s genes
/// read from position 0 onwards.
fn davis_order(
    layout: GeneLayout,
    rule: usize,
    keep: &BinaryIndividual,
    fill: &BinaryIndividual,
    child: &mut BinaryIndividual,
) {
    let block = layout.rule_range(rule);
    let len = layout.gene_count();
    let genes = child.genes_mut();
    genes[block.clone()].copy_from_slice(&keep.genes()[block.clone()]);
    let targets = (block.end..len).chain(0..block.start);
    for (target, &gene) in targets.zip(fill.genes()) {
        genes[target] = gene;
    }
}

/// Returns a mutated copy of `individual`.
///
/// Mutation events follow a geometric law: while a fresh uniform draw stays
/// below `rate`, one random position is redrawn from the symbols allowed
/// there. At most one event per gene happens in a single call.
pub fn mutate<R>(
    layout: GeneLayout,
    rate: f64,
    individual: &BinaryIndividual,
    rng: &mut R,
) -> BinaryIndividual
where
    R: Rng + ?Sized,
{
    let mut mutated = individual.clone();
    let len = layout.gene_count();
    let mut events = 0;
    while events < len && rng.random::<f64>() < rate {
        let index = rng.random_range(0..len);
        mutated.genes_mut()[index] = random_gene(layout, index, rng);
        events += 1;
    }
    mutated
}
