//! Dominance resolution from diploid genomes to observable traits.

use crate::genome::{common_alleles, NORMAL, SHINY};
use hatchery_data::{Genome, Locus, Phenotype};

/// Dominance rank of `allele` at `locus`: its position in the common pool.
///
/// Alleles outside the common pool (rare or bred-only values) rank 0, the
/// weakest. Repeated pool entries take their last position.
#[must_use]
pub fn dominance_rank(locus: Locus, allele: &str) -> usize {
    common_alleles(locus)
        .iter()
        .rposition(|&candidate| candidate == allele)
        .unwrap_or(0)
}

/// Resolves one allele pair to the expressed trait.
///
/// The shiny gene is expressed whenever either slot carries it. Elsewhere the
/// higher-ranked allele wins and equal ranks go to the lexicographically
/// smaller string.
#[must_use]
pub fn pick_dominant<'a>(locus: Locus, a: &'a str, b: &'a str) -> &'a str {
    if a == b {
        return a;
    }
    if locus == Locus::ShinyGene {
        return if a == SHINY || b == SHINY { SHINY } else { NORMAL };
    }

    let rank_a = dominance_rank(locus, a);
    let rank_b = dominance_rank(locus, b);
    match rank_a.cmp(&rank_b) {
        std::cmp::Ordering::Greater => a,
        std::cmp::Ordering::Less => b,
        std::cmp::Ordering::Equal => a.min(b),
    }
}

/// Resolves every locus of `genome`.
#[must_use]
pub fn genome_to_phenotype(genome: &Genome) -> Phenotype {
    Phenotype::from_fn(|locus| {
        let [a, b] = genome.pair(locus);
        pick_dominant(locus, a, b).to_string()
    })
}
