//! Rarity scoring, synergy sets, and tier-based rewards.

use crate::breeding::MYTHIC;
use crate::config::{RarityConfig, SynergyRule};
use crate::genome::{is_rare, NONE, PRISMATIC, RARE_LOCI, SHINY, VOID};
use hatchery_data::{Locus, Phenotype, RarityProfile, Tier};
use std::collections::BTreeSet;

pub const AURA_ACTIVE: &str = "AURA_ACTIVE";
pub const ELEMENT_ACTIVE: &str = "ELEMENT_ACTIVE";
pub const PRISMATIC_AURA: &str = "PRISMATIC_AURA";
pub const VOID_EYES: &str = "VOID_EYES";
pub const CRYSTAL_WINGS: &str = "CRYSTAL_WINGS";
pub const SHINY_GENE: &str = "SHINY_GENE";
pub const MYTHIC_SPECIES: &str = "MYTHIC_SPECIES";

/// Tag emitted when `locus` shows its rare value, e.g. `EYECOLOR_RARE`.
#[must_use]
pub fn rare_tag(locus: Locus) -> String {
    format!("{}_RARE", locus.name().to_uppercase())
}

/// Whether every requirement of `rule` holds for `phenotype`.
#[must_use]
pub fn rule_matches(rule: &SynergyRule, phenotype: &Phenotype) -> bool {
    rule.requires
        .iter()
        .all(|req| phenotype.is(req.locus, &req.value))
}

/// Scores a phenotype and classifies it.
///
/// Base bonuses come first, then every synergy rule whose requirements all
/// match adds its bonus and tags. The tier follows the score thresholds and is
/// raised to the floor of each matched rule.
#[must_use]
pub fn rarity_profile(config: &RarityConfig, phenotype: &Phenotype) -> RarityProfile {
    let mut score = 0u32;
    let mut tags: BTreeSet<String> = BTreeSet::new();
    let mut tag = |name: &str| {
        tags.insert(name.to_string());
    };

    if !phenotype.is(Locus::Aura, NONE) {
        score = score.saturating_add(config.aura_active_bonus);
        tag(AURA_ACTIVE);
    }
    if !phenotype.is(Locus::Element, NONE) {
        tag(ELEMENT_ACTIVE);
    }

    for locus in RARE_LOCI {
        if is_rare(locus, phenotype.get(locus)) {
            score = score.saturating_add(config.rare_locus_bonus);
            tag(&rare_tag(locus));
        }
    }

    if phenotype.is(Locus::Aura, PRISMATIC) {
        score = score.saturating_add(config.prismatic_bonus);
        tag(PRISMATIC_AURA);
    }
    if phenotype.is(Locus::EyeColor, VOID) {
        tag(VOID_EYES);
    }
    if phenotype.is(Locus::Wing, "Crystal") {
        tag(CRYSTAL_WINGS);
    }
    if phenotype.is(Locus::ShinyGene, SHINY) {
        score = score.saturating_add(config.shiny_bonus);
        tag(SHINY_GENE);
    }
    if phenotype.is(Locus::Species, MYTHIC) {
        score = score.saturating_add(config.mythic_bonus);
        tag(MYTHIC_SPECIES);
    }

    let matched: Vec<&SynergyRule> = config
        .synergy
        .iter()
        .filter(|rule| rule_matches(rule, phenotype))
        .collect();
    for rule in &matched {
        score = score.saturating_add(rule.bonus);
        for name in &rule.tags {
            tag(name);
        }
    }

    let tier = matched
        .iter()
        .fold(config.thresholds.tier_for(score), |tier, rule| {
            tier.max(rule.min_tier)
        });

    RarityProfile {
        score,
        tier,
        tags: tags.into_iter().collect(),
    }
}

/// Coins granted when an egg hatches.
#[must_use]
pub fn hatch_reward(config: &RarityConfig, score: u32, tier: Tier) -> u32 {
    config
        .hatch_base_reward
        .saturating_add(score / config.score_per_reward)
        .saturating_add(config.tier_bonus.get(tier))
}

/// Coins paid when a pet of `tier` is sold back to the shop.
#[must_use]
pub fn sell_price(config: &RarityConfig, tier: Tier) -> u32 {
    config.sell_prices.get(tier)
}
