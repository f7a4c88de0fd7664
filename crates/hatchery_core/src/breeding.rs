//! Sexual inheritance with mutation.
//!
//! A child takes its species from a fixed cross table, two alleles per
//! remaining locus by weighted inheritance from both parents, and may be hit
//! by a rare whole-genome event that forces a homozygous rare allele.

use crate::config::BreedingConfig;
use crate::genome::{is_rare, mutation_allele, rare_alleles, PRISMATIC, RARE_LOCI, VOID};
use crate::phenotype::genome_to_phenotype;
use crate::weighted::{pick_band, pick_uniform};
use hatchery_data::{Allele, AllelePair, Genome, Locus, Phenotype};
use rand::Rng;
use std::collections::BTreeSet;

pub const HYBRID: &str = "Hybrid";
pub const MYTHIC: &str = "Mythic";

type CrossTable = [(&'static str, f64); 3];

const SLIME_SPIRIT: CrossTable = [("Slime", 0.70), ("Spirit", 0.25), (HYBRID, 0.05)];
const DRAGON_SPIRIT: CrossTable = [("Dragon", 0.60), ("Spirit", 0.30), (MYTHIC, 0.10)];

/// Chance that an ordinary cross keeps one of the parents' species.
const PARENT_SPECIES_CHANCE: f64 = 0.90;

/// Loci the rare whole-genome event may overwrite.
const RARE_EVENT_LOCI: [Locus; 3] = [Locus::Aura, Locus::Accessory, Locus::EyeColor];

const ELEMENT_CLASHES: [(&str, &str); 2] = [("Fire", "Water"), ("Wind", "Earth")];

fn unordered_eq(a: &str, b: &str, x: &str, y: &str) -> bool {
    (a == x && b == y) || (a == y && b == x)
}

fn cross_table(a: &str, b: &str) -> Option<&'static CrossTable> {
    if unordered_eq(a, b, "Slime", "Spirit") {
        Some(&SLIME_SPIRIT)
    } else if unordered_eq(a, b, "Dragon", "Spirit") {
        Some(&DRAGON_SPIRIT)
    } else {
        None
    }
}

/// Resolves the child's species. Identical parents never consume a roll.
pub fn choose_species<R: Rng>(a: &str, b: &str, rng: &mut R) -> String {
    if a == b {
        return a.to_string();
    }

    if let Some(table) = cross_table(a, b) {
        let roll = rng.gen::<f64>();
        // Rounding can leave the cumulative total a hair under 1.0.
        return pick_band(table, roll).unwrap_or(table[2].0).to_string();
    }

    if rng.gen::<f64>() < PARENT_SPECIES_CHANCE {
        pick_uniform(&[a, b], rng).to_string()
    } else {
        HYBRID.to_string()
    }
}

fn elements_clash(a: &str, b: &str) -> bool {
    ELEMENT_CLASHES
        .iter()
        .any(|&(x, y)| unordered_eq(a, b, x, y))
}

fn either(a: &Phenotype, b: &Phenotype, locus: Locus, value: &str) -> bool {
    a.is(locus, value) || b.is(locus, value)
}

/// Per-allele mutation probability for a pair of parents.
///
/// Opposed elements raise it; rare traits on either parent suppress it. The
/// result is scaled by the global multiplier and clamped to
/// `[0, max_mutation_chance]`.
#[must_use]
pub fn mutation_chance(config: &BreedingConfig, a: &Phenotype, b: &Phenotype) -> f64 {
    let mut chance = config.base_mutation_chance;

    if elements_clash(a.get(Locus::Element), b.get(Locus::Element)) {
        chance += config.element_clash_bonus;
    }

    let carries_rare = RARE_LOCI
        .iter()
        .any(|&locus| is_rare(locus, a.get(locus)) || is_rare(locus, b.get(locus)));
    if carries_rare {
        chance *= config.rare_stabilize_mult;
    }

    if either(a, b, Locus::Aura, PRISMATIC) {
        chance *= config.top_rare_stabilize_mult;
    }
    if either(a, b, Locus::EyeColor, VOID) {
        chance *= config.top_rare_stabilize_mult;
    }

    chance *= config.mutation_multiplier;
    chance.max(0.0).min(config.max_mutation_chance)
}

/// Draws one child allele at `locus`.
///
/// Parents that agree on a single allele pass it on without a roll. Otherwise
/// a mutation replaces the allele with a legal value neither parent carries,
/// and the remaining mass is split between the parents' pairs.
pub fn inherit_with_weight<R: Rng>(
    rng: &mut R,
    locus: Locus,
    a: &AllelePair,
    b: &AllelePair,
    mutation_chance: f64,
) -> Allele {
    let combined: BTreeSet<&str> = a.iter().chain(b.iter()).map(String::as_str).collect();
    if combined.len() == 1 {
        return a[0].clone();
    }

    if rng.gen::<f64>() < mutation_chance {
        let exclude: Vec<&str> = combined.into_iter().collect();
        let allele = mutation_allele(rng, locus, &exclude);
        tracing::trace!(%locus, %allele, "Allele mutated during inheritance");
        return allele;
    }

    let parent_share = (1.0 - mutation_chance) / 2.0;
    let source = if rng.gen::<f64>() < parent_share { a } else { b };
    pick_uniform(source, rng).clone()
}

/// Breeds a child genome from two parents and their phenotypes.
///
/// Returns the child and whether the rare whole-genome event fired.
pub fn breed<R: Rng>(
    config: &BreedingConfig,
    genome_a: &Genome,
    genome_b: &Genome,
    phenotype_a: &Phenotype,
    phenotype_b: &Phenotype,
    rng: &mut R,
) -> (Genome, bool) {
    let species = choose_species(
        phenotype_a.get(Locus::Species),
        phenotype_b.get(Locus::Species),
        rng,
    );
    let chance = mutation_chance(config, phenotype_a, phenotype_b);

    let mut child = Genome::from_fn(|locus| {
        if locus == Locus::Species {
            return [species.clone(), species.clone()];
        }
        let (pair_a, pair_b) = (genome_a.pair(locus), genome_b.pair(locus));
        let first = inherit_with_weight(rng, locus, pair_a, pair_b, chance);
        let second = inherit_with_weight(rng, locus, pair_a, pair_b, chance);
        [first, second]
    });

    let mut mutated = false;
    if rng.gen::<f64>() < config.rare_event_chance {
        mutated = true;
        let target = *pick_uniform(&RARE_EVENT_LOCI, rng);
        let rare = pick_uniform(rare_alleles(target), rng).to_string();
        tracing::debug!(locus = %target, allele = %rare, "Rare genome mutation");
        child.set_pair(target, [rare.clone(), rare]);
    }

    (child, mutated)
}

/// Like [`breed`], resolving both parents' phenotypes first.
pub fn breed_genomes<R: Rng>(
    config: &BreedingConfig,
    genome_a: &Genome,
    genome_b: &Genome,
    rng: &mut R,
) -> (Genome, bool) {
    let phenotype_a = genome_to_phenotype(genome_a);
    let phenotype_b = genome_to_phenotype(genome_b);
    breed(config, genome_a, genome_b, &phenotype_a, &phenotype_b, rng)
}
