use chrono::{DateTime, Utc};
use hatchery_core::genome::DEFAULT_HIDDEN_COUNT;
use hatchery_core::GeneticsEngine;
use hatchery_data::{Emotion, Genome, Locus, Phenotype, RarityProfile};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A hatched pet: its genome plus everything derived from it at hatch time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    pub genome: Genome,
    pub dna: String,
    pub phenotype: Phenotype,
    pub rarity: RarityProfile,
    pub hidden_loci: Vec<Locus>,
    pub emotion: Emotion,
    pub emotion_updated_at: DateTime<Utc>,
    pub hatch_reward: u32,
    pub sell_price: u32,
}

impl Pet {
    /// Hatches `genome`: resolves traits, scores rarity, hides a few loci and
    /// rolls the first emotion.
    pub fn hatch<R: Rng>(
        engine: &GeneticsEngine,
        genome: Genome,
        rng: &mut R,
        now: DateTime<Utc>,
    ) -> Self {
        let phenotype = engine.genome_to_phenotype(&genome);
        let rarity = engine.rarity_profile(&phenotype);
        let hidden_loci = engine.choose_hidden_loci(rng, DEFAULT_HIDDEN_COUNT);
        let emotion = engine.pick_emotion(rng, phenotype.get(Locus::Personality));
        let hatch_reward = engine.hatch_reward(rarity.score, rarity.tier);
        let sell_price = engine.sell_price(rarity.tier);

        tracing::debug!(
            species = phenotype.get(Locus::Species),
            tier = %rarity.tier,
            score = rarity.score,
            "Pet hatched"
        );

        Self {
            dna: genome.to_hex(),
            genome,
            phenotype,
            rarity,
            hidden_loci,
            emotion,
            emotion_updated_at: now,
            hatch_reward,
            sell_price,
        }
    }

    /// Re-rolls the emotion once the cooldown has elapsed.
    ///
    /// Returns whether the emotion was refreshed.
    pub fn refresh_emotion<R: Rng>(
        &mut self,
        engine: &GeneticsEngine,
        rng: &mut R,
        now: DateTime<Utc>,
    ) -> bool {
        if !engine.should_update_emotion(self.emotion_updated_at, now) {
            return false;
        }
        self.emotion = engine.pick_emotion(rng, self.phenotype.get(Locus::Personality));
        self.emotion_updated_at = now;
        true
    }

    /// Whether `locus` is concealed from the owner.
    #[must_use]
    pub fn is_hidden(&self, locus: Locus) -> bool {
        self.hidden_loci.contains(&locus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use hatchery_core::genome::HIDDEN_CANDIDATES;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn hatched(seed: u64) -> (GeneticsEngine, Pet) {
        let engine = GeneticsEngine::default();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let genome = engine.random_genome(&mut rng);
        let pet = Pet::hatch(&engine, genome, &mut rng, Utc::now());
        (engine, pet)
    }

    #[test]
    fn test_hatch_fills_derived_fields() {
        let (_, pet) = hatched(5);
        assert_eq!(pet.hidden_loci.len(), DEFAULT_HIDDEN_COUNT);
        assert!(pet
            .hidden_loci
            .iter()
            .all(|locus| HIDDEN_CANDIDATES.contains(locus)));
        assert!(pet.hidden_loci.iter().all(|&locus| pet.is_hidden(locus)));
        assert!(!pet.is_hidden(Locus::Species));
        assert!(pet.hatch_reward >= 5);
        assert_eq!(Genome::from_hex(&pet.dna).unwrap(), pet.genome);
    }

    #[test]
    fn test_emotion_refresh_respects_cooldown() {
        let (engine, mut pet) = hatched(6);
        let mut rng = ChaCha8Rng::seed_from_u64(60);
        let hatched_at = pet.emotion_updated_at;

        assert!(!pet.refresh_emotion(&engine, &mut rng, hatched_at + Duration::seconds(10)));
        assert_eq!(pet.emotion_updated_at, hatched_at);

        let later = hatched_at + Duration::minutes(10);
        assert!(pet.refresh_emotion(&engine, &mut rng, later));
        assert_eq!(pet.emotion_updated_at, later);
    }

    #[test]
    fn test_pet_json_roundtrip() {
        let (_, pet) = hatched(7);
        let json = serde_json::to_string(&pet).unwrap();
        let restored: Pet = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, pet);
    }
}
