//! Configured entry point for collaborators.
//!
//! `GeneticsEngine` owns a validated [`GeneticsConfig`] and forwards to the
//! module-level functions with the configured constants applied. It holds no
//! other state; every call is a pure function of its inputs and the supplied
//! random source.

use crate::config::GeneticsConfig;
use crate::{breeding, emotion, genome, phenotype, rarity};
use chrono::{DateTime, Duration, Utc};
use hatchery_data::{Emotion, Genome, Locus, Phenotype, RarityProfile, Tier};
use rand::Rng;

#[derive(Debug, Clone, Default)]
pub struct GeneticsEngine {
    config: GeneticsConfig,
}

impl GeneticsEngine {
    /// Builds an engine after validating `config`.
    pub fn new(config: GeneticsConfig) -> anyhow::Result<Self> {
        config.validate()?;
        tracing::debug!(fingerprint = %config.fingerprint(), "Genetics engine configured");
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &GeneticsConfig {
        &self.config
    }

    pub fn random_genome<R: Rng>(&self, rng: &mut R) -> Genome {
        genome::random_genome(rng)
    }

    pub fn premium_genome<R: Rng>(&self, rng: &mut R) -> Genome {
        genome::premium_genome(&self.config.premium, rng)
    }

    #[must_use]
    pub fn legal_alleles(&self, locus: Locus) -> Vec<&'static str> {
        genome::legal_alleles(locus)
    }

    pub fn choose_hidden_loci<R: Rng>(&self, rng: &mut R, count: usize) -> Vec<Locus> {
        genome::choose_hidden_loci(rng, count)
    }

    pub fn choose_species<R: Rng>(&self, a: &str, b: &str, rng: &mut R) -> String {
        breeding::choose_species(a, b, rng)
    }

    #[must_use]
    pub fn mutation_chance(&self, a: &Phenotype, b: &Phenotype) -> f64 {
        breeding::mutation_chance(&self.config.breeding, a, b)
    }

    pub fn breed<R: Rng>(
        &self,
        genome_a: &Genome,
        genome_b: &Genome,
        phenotype_a: &Phenotype,
        phenotype_b: &Phenotype,
        rng: &mut R,
    ) -> (Genome, bool) {
        breeding::breed(
            &self.config.breeding,
            genome_a,
            genome_b,
            phenotype_a,
            phenotype_b,
            rng,
        )
    }

    pub fn breed_genomes<R: Rng>(
        &self,
        genome_a: &Genome,
        genome_b: &Genome,
        rng: &mut R,
    ) -> (Genome, bool) {
        breeding::breed_genomes(&self.config.breeding, genome_a, genome_b, rng)
    }

    #[must_use]
    pub fn genome_to_phenotype(&self, genome: &Genome) -> Phenotype {
        phenotype::genome_to_phenotype(genome)
    }

    #[must_use]
    pub fn rarity_profile(&self, phenotype: &Phenotype) -> RarityProfile {
        rarity::rarity_profile(&self.config.rarity, phenotype)
    }

    #[must_use]
    pub fn hatch_reward(&self, score: u32, tier: Tier) -> u32 {
        rarity::hatch_reward(&self.config.rarity, score, tier)
    }

    #[must_use]
    pub fn sell_price(&self, tier: Tier) -> u32 {
        rarity::sell_price(&self.config.rarity, tier)
    }

    pub fn pick_emotion<R: Rng>(&self, rng: &mut R, personality: &str) -> Emotion {
        emotion::pick_emotion(rng, personality)
    }

    #[must_use]
    pub fn should_update_emotion(&self, last_updated: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        let cooldown = Duration::seconds(self.config.emotion.cooldown_secs);
        emotion::should_update_emotion(last_updated, now, cooldown)
    }
}
