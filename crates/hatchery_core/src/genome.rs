//! Locus vocabulary, allele pools and genome construction.
//!
//! Every locus has an ordered pool of four common alleles (the order is the
//! dominance order used by the phenotype resolver) and an optional disjoint
//! pool of rare alleles that only mutation or premium generation can reach.

use crate::config::PremiumConfig;
use crate::weighted::pick_uniform;
use hatchery_data::{Allele, Genome, Locus, LOCUS_COUNT};
use rand::Rng;
use std::collections::BTreeSet;

const COMMON_ALLELES: [[&str; 4]; LOCUS_COUNT] = [
    ["Slime", "Dragon", "Spirit", "Doll"],
    ["Round", "Lean", "Chubby", "Tiny"],
    ["Mint", "Ruby", "Azure", "Amber"],
    ["Plain", "Speckled", "Striped", "Swirl"],
    ["Dot", "Oval", "Star", "Crescent"],
    ["Black", "Brown", "Teal", "Gold"],
    ["Smile", "Fang", "Beak", "Whisker"],
    ["None", "Stub", "Spiral", "Blade"],
    ["None", "Leaf", "Feather", "Crystal"],
    ["None", "Fluff", "Spike", "Ribbon"],
    ["None", "Bell", "Cape", "Charm"],
    ["None", "Mist", "Spark", "Glitter"],
    ["Water", "Fire", "Wind", "Earth"],
    ["Gentle", "Bold", "Curious", "Calm"],
    ["Normal", "Normal", "Normal", "Shiny"],
    ["None", "None", "None", "None"],
];

/// Loci that carry a rare pool.
pub const RARE_LOCI: [Locus; 3] = [Locus::Accessory, Locus::Aura, Locus::EyeColor];

/// Loci whose true value may be withheld from casual display.
pub const HIDDEN_CANDIDATES: [Locus; 7] = [
    Locus::Aura,
    Locus::Accessory,
    Locus::EyeColor,
    Locus::Element,
    Locus::Personality,
    Locus::ShinyGene,
    Locus::MutationSlot,
];

pub const DEFAULT_HIDDEN_COUNT: usize = 3;

pub const SHINY: &str = "Shiny";
pub const NORMAL: &str = "Normal";
pub const NONE: &str = "None";
pub const PRISMATIC: &str = "Prismatic";
pub const RELIC: &str = "Relic";
pub const VOID: &str = "Void";

/// Ordered common pool for `locus`. Index position is dominance rank.
#[must_use]
pub fn common_alleles(locus: Locus) -> &'static [&'static str] {
    &COMMON_ALLELES[locus.index()]
}

/// Rare pool for `locus`; empty for loci without one.
#[must_use]
pub fn rare_alleles(locus: Locus) -> &'static [&'static str] {
    match locus {
        Locus::Aura => &[PRISMATIC],
        Locus::Accessory => &[RELIC],
        Locus::EyeColor => &[VOID],
        _ => &[],
    }
}

#[must_use]
pub fn is_rare(locus: Locus, value: &str) -> bool {
    rare_alleles(locus).contains(&value)
}

/// Sorted, duplicate-free union of the common and rare pools.
#[must_use]
pub fn legal_alleles(locus: Locus) -> Vec<&'static str> {
    common_alleles(locus)
        .iter()
        .chain(rare_alleles(locus))
        .copied()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Draws every allele uniformly from its locus's common pool.
pub fn random_genome<R: Rng>(rng: &mut R) -> Genome {
    Genome::from_fn(|locus| {
        let pool = common_alleles(locus);
        let first = pick_uniform(pool, rng).to_string();
        let second = pick_uniform(pool, rng).to_string();
        [first, second]
    })
}

/// Samples up to `count` distinct loci from [`HIDDEN_CANDIDATES`].
pub fn choose_hidden_loci<R: Rng>(rng: &mut R, count: usize) -> Vec<Locus> {
    let count = count.min(HIDDEN_CANDIDATES.len());
    rand::seq::index::sample(rng, HIDDEN_CANDIDATES.len(), count)
        .into_iter()
        .map(|i| HIDDEN_CANDIDATES[i])
        .collect()
}

/// Uniform legal allele not in `exclude`.
///
/// Falls back to the unfiltered legal set when the exclusion leaves nothing.
pub fn mutation_allele<R: Rng>(rng: &mut R, locus: Locus, exclude: &[&str]) -> Allele {
    let legal = legal_alleles(locus);
    let candidates: Vec<&str> = legal
        .iter()
        .copied()
        .filter(|allele| !exclude.contains(allele))
        .collect();
    let pool = if candidates.is_empty() {
        &legal
    } else {
        &candidates
    };
    pick_uniform(pool, rng).to_string()
}

/// Picks an allele for premium generation.
///
/// With `prefer_rare` and a rare pool present, returns a rare allele with
/// probability `rare_chance`; otherwise a uniform legal allele outside
/// `exclude` (or any legal allele if the exclusion is total).
pub fn pick_weighted_allele<R: Rng>(
    rng: &mut R,
    locus: Locus,
    prefer_rare: bool,
    exclude: &[&str],
    rare_chance: f64,
) -> Allele {
    let legal = legal_alleles(locus);
    let mut candidates: Vec<&str> = legal
        .iter()
        .copied()
        .filter(|allele| !exclude.contains(allele))
        .collect();
    if candidates.is_empty() {
        candidates = legal;
    }

    let rare = rare_alleles(locus);
    if prefer_rare && !rare.is_empty() && rng.gen::<f64>() < rare_chance {
        return pick_uniform(rare, rng).to_string();
    }
    pick_uniform(&candidates, rng).to_string()
}

/// Random genome with boosted odds of an active aura, rare accessories and
/// eyes, and the shiny gene.
pub fn premium_genome<R: Rng>(config: &PremiumConfig, rng: &mut R) -> Genome {
    let mut genome = random_genome(rng);

    if rng.gen::<f64>() < config.aura_active_chance {
        let aura = pick_weighted_allele(rng, Locus::Aura, true, &[NONE], config.rare_chance);
        genome.set_pair(Locus::Aura, [aura.clone(), aura]);
    }

    for locus in [Locus::Accessory, Locus::EyeColor] {
        if rng.gen::<f64>() < config.rare_chance {
            let allele = pick_weighted_allele(rng, locus, true, &[], config.rare_chance);
            genome.set_pair(locus, [allele.clone(), allele]);
        }
    }

    if rng.gen::<f64>() < config.shiny_chance {
        genome.set_pair(Locus::ShinyGene, [SHINY.to_string(), SHINY.to_string()]);
    }

    genome
}

/// Trait defining genome construction for the engine.
pub trait GenomeLogic {
    fn new_random() -> Self;
    fn new_random_with_rng<R: Rng>(rng: &mut R) -> Self;
    fn new_premium_with_rng<R: Rng>(config: &PremiumConfig, rng: &mut R) -> Self;
    fn to_phenotype(&self) -> hatchery_data::Phenotype;
}

impl GenomeLogic for Genome {
    fn new_random() -> Self {
        let mut rng = rand::thread_rng();
        Self::new_random_with_rng(&mut rng)
    }

    fn new_random_with_rng<R: Rng>(rng: &mut R) -> Self {
        random_genome(rng)
    }

    fn new_premium_with_rng<R: Rng>(config: &PremiumConfig, rng: &mut R) -> Self {
        premium_genome(config, rng)
    }

    fn to_phenotype(&self) -> hatchery_data::Phenotype {
        crate::phenotype::genome_to_phenotype(self)
    }
}
