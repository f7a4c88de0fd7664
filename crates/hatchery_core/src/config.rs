//! Configuration management for the genetics engine.
//!
//! This module provides strongly-typed configuration structures that map to
//! a `genetics.toml` file. Every tunable constant of breeding, scoring,
//! premium generation and emotion refresh lives here.
//!
//! ## Configuration Hierarchy
//!
//! 1. Default values (hardcoded in `Default` impls)
//! 2. `genetics.toml` file (overrides defaults)
//! 3. Environment variables (see [`GeneticsConfig::with_env_overrides`])
//!
//! ## Example `genetics.toml`
//!
//! ```toml
//! [breeding]
//! base_mutation_chance = 0.10
//! mutation_multiplier = 1.5
//!
//! [rarity.thresholds]
//! uncommon = 10
//! rare = 20
//! epic = 40
//! legendary = 55
//!
//! [[rarity.synergy]]
//! tags = ["SYNERGY_LEGENDARY_1", "LEGENDARY_SET_A"]
//! requires = [
//!     { locus = "Aura", value = "Prismatic" },
//!     { locus = "EyeColor", value = "Void" },
//! ]
//! bonus = 30
//! min_tier = "Legendary"
//! ```

use hatchery_data::{Locus, Tier};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Mutation-rate model and rare-event odds used by breeding.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct BreedingConfig {
    pub base_mutation_chance: f64,
    /// Added when the parents' elements oppose each other.
    pub element_clash_bonus: f64,
    /// Applied once when either parent shows any known rare trait.
    pub rare_stabilize_mult: f64,
    /// Applied per top-rare trait (Prismatic aura, Void eyes) on either parent.
    pub top_rare_stabilize_mult: f64,
    pub mutation_multiplier: f64,
    pub max_mutation_chance: f64,
    pub rare_event_chance: f64,
}

impl Default for BreedingConfig {
    fn default() -> Self {
        Self {
            base_mutation_chance: 0.10,
            element_clash_bonus: 0.10,
            rare_stabilize_mult: 0.5,
            top_rare_stabilize_mult: 0.3,
            mutation_multiplier: 1.0,
            max_mutation_chance: 0.9,
            rare_event_chance: 0.002,
        }
    }
}

/// Minimum score for each tier above `Common`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierThresholds {
    pub uncommon: u32,
    pub rare: u32,
    pub epic: u32,
    pub legendary: u32,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            uncommon: 10,
            rare: 20,
            epic: 40,
            legendary: 55,
        }
    }
}

impl TierThresholds {
    /// Highest tier whose threshold `score` reaches.
    #[must_use]
    pub fn tier_for(&self, score: u32) -> Tier {
        if score >= self.legendary {
            Tier::Legendary
        } else if score >= self.epic {
            Tier::Epic
        } else if score >= self.rare {
            Tier::Rare
        } else if score >= self.uncommon {
            Tier::Uncommon
        } else {
            Tier::Common
        }
    }
}

/// One value per tier.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TierTable {
    pub common: u32,
    pub uncommon: u32,
    pub rare: u32,
    pub epic: u32,
    pub legendary: u32,
}

impl TierTable {
    #[must_use]
    pub fn get(&self, tier: Tier) -> u32 {
        match tier {
            Tier::Common => self.common,
            Tier::Uncommon => self.uncommon,
            Tier::Rare => self.rare,
            Tier::Epic => self.epic,
            Tier::Legendary => self.legendary,
        }
    }
}

/// A single `(locus, trait)` condition of a synergy rule.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TraitRequirement {
    pub locus: Locus,
    pub value: String,
}

impl TraitRequirement {
    pub fn new(locus: Locus, value: impl Into<String>) -> Self {
        Self {
            locus,
            value: value.into(),
        }
    }
}

/// Bonus granted when a phenotype matches every requirement of the rule.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SynergyRule {
    pub tags: Vec<String>,
    pub requires: Vec<TraitRequirement>,
    pub bonus: u32,
    pub min_tier: Tier,
}

/// Default synergy sets.
#[must_use]
pub fn default_synergy_rules() -> Vec<SynergyRule> {
    vec![
        SynergyRule {
            tags: vec!["SYNERGY_LEGENDARY_1".into(), "LEGENDARY_SET_A".into()],
            requires: vec![
                TraitRequirement::new(Locus::Aura, "Prismatic"),
                TraitRequirement::new(Locus::EyeColor, "Void"),
            ],
            bonus: 30,
            min_tier: Tier::Legendary,
        },
        SynergyRule {
            tags: vec!["SYNERGY_EPIC_1".into(), "RELIC_DRAGON".into()],
            requires: vec![
                TraitRequirement::new(Locus::Species, "Dragon"),
                TraitRequirement::new(Locus::Accessory, "Relic"),
            ],
            bonus: 15,
            min_tier: Tier::Epic,
        },
        SynergyRule {
            tags: vec!["SYNERGY_RARE_1".into(), "CRYSTAL_SPIRIT".into()],
            requires: vec![
                TraitRequirement::new(Locus::Species, "Spirit"),
                TraitRequirement::new(Locus::Wing, "Crystal"),
            ],
            bonus: 8,
            min_tier: Tier::Rare,
        },
    ]
}

/// Scoring weights, tier thresholds, rewards and synergy sets.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RarityConfig {
    pub aura_active_bonus: u32,
    pub rare_locus_bonus: u32,
    pub prismatic_bonus: u32,
    pub shiny_bonus: u32,
    pub mythic_bonus: u32,
    pub thresholds: TierThresholds,
    pub hatch_base_reward: u32,
    /// Score points per extra reward coin.
    pub score_per_reward: u32,
    pub tier_bonus: TierTable,
    pub sell_prices: TierTable,
    pub synergy: Vec<SynergyRule>,
}

impl Default for RarityConfig {
    fn default() -> Self {
        Self {
            aura_active_bonus: 10,
            rare_locus_bonus: 5,
            prismatic_bonus: 5,
            shiny_bonus: 15,
            mythic_bonus: 20,
            thresholds: TierThresholds::default(),
            hatch_base_reward: 5,
            score_per_reward: 5,
            tier_bonus: TierTable {
                common: 0,
                uncommon: 2,
                rare: 4,
                epic: 8,
                legendary: 15,
            },
            sell_prices: TierTable {
                common: 3,
                uncommon: 6,
                rare: 12,
                epic: 24,
                legendary: 50,
            },
            synergy: default_synergy_rules(),
        }
    }
}

/// Odds used when rolling a premium egg.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PremiumConfig {
    pub rare_chance: f64,
    pub aura_active_chance: f64,
    pub shiny_chance: f64,
}

impl Default for PremiumConfig {
    fn default() -> Self {
        Self {
            rare_chance: 0.25,
            aura_active_chance: 0.7,
            shiny_chance: 0.15,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct EmotionConfig {
    pub cooldown_secs: i64,
}

impl Default for EmotionConfig {
    fn default() -> Self {
        Self { cooldown_secs: 600 }
    }
}

/// Complete engine configuration.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct GeneticsConfig {
    pub breeding: BreedingConfig,
    pub rarity: RarityConfig,
    pub premium: PremiumConfig,
    pub emotion: EmotionConfig,
}

fn is_probability(value: f64) -> bool {
    (0.0..=1.0).contains(&value)
}

/// Largest cooldown `chrono::Duration::seconds` accepts.
pub const MAX_COOLDOWN_SECS: i64 = i64::MAX / 1000;

impl GeneticsConfig {
    /// Validates all configuration parameters.
    ///
    /// Returns `Ok(())` if all parameters are valid, or `Err` with a description
    /// of the first validation failure.
    pub fn validate(&self) -> anyhow::Result<()> {
        let b = &self.breeding;
        anyhow::ensure!(
            is_probability(b.base_mutation_chance),
            "Base mutation chance must be in [0.0, 1.0]"
        );
        anyhow::ensure!(
            b.element_clash_bonus >= 0.0,
            "Element clash bonus must be non-negative"
        );
        anyhow::ensure!(
            b.rare_stabilize_mult >= 0.0 && b.top_rare_stabilize_mult >= 0.0,
            "Stabilize multipliers must be non-negative"
        );
        anyhow::ensure!(
            b.mutation_multiplier >= 0.0,
            "Mutation multiplier must be non-negative"
        );
        anyhow::ensure!(
            is_probability(b.max_mutation_chance),
            "Max mutation chance must be in [0.0, 1.0]"
        );
        anyhow::ensure!(
            is_probability(b.rare_event_chance),
            "Rare event chance must be in [0.0, 1.0]"
        );

        let r = &self.rarity;
        let t = &r.thresholds;
        anyhow::ensure!(
            t.uncommon < t.rare && t.rare < t.epic && t.epic < t.legendary,
            "Tier thresholds must be strictly increasing"
        );
        anyhow::ensure!(r.score_per_reward > 0, "Score per reward must be positive");
        for rule in &r.synergy {
            anyhow::ensure!(!rule.tags.is_empty(), "Synergy rule must carry tags");
            anyhow::ensure!(
                !rule.requires.is_empty(),
                "Synergy rule {} must require at least one trait",
                rule.tags[0]
            );
        }

        let p = &self.premium;
        anyhow::ensure!(
            is_probability(p.rare_chance),
            "Premium rare chance must be in [0.0, 1.0]"
        );
        anyhow::ensure!(
            is_probability(p.aura_active_chance),
            "Premium aura chance must be in [0.0, 1.0]"
        );
        anyhow::ensure!(
            is_probability(p.shiny_chance),
            "Premium shiny chance must be in [0.0, 1.0]"
        );

        anyhow::ensure!(
            (0..=MAX_COOLDOWN_SECS).contains(&self.emotion.cooldown_secs),
            "Emotion cooldown must be in [0, {MAX_COOLDOWN_SECS}] seconds"
        );

        Ok(())
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from `path`, falling back to defaults when the file
    /// does not exist.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Applies overrides from the process environment:
    ///
    /// - `BREEDING_MUTATION_MULTIPLIER`
    /// - `ADOPT_PREMIUM_RARE_CHANCE`
    /// - `ADOPT_PREMIUM_AURA_ACTIVE_CHANCE`
    /// - `ADOPT_PREMIUM_SHINY_CHANCE`
    pub fn with_env_overrides(self) -> anyhow::Result<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides<F>(mut self, lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let targets: [(&str, &mut f64); 4] = [
            (
                "BREEDING_MUTATION_MULTIPLIER",
                &mut self.breeding.mutation_multiplier,
            ),
            ("ADOPT_PREMIUM_RARE_CHANCE", &mut self.premium.rare_chance),
            (
                "ADOPT_PREMIUM_AURA_ACTIVE_CHANCE",
                &mut self.premium.aura_active_chance,
            ),
            ("ADOPT_PREMIUM_SHINY_CHANCE", &mut self.premium.shiny_chance),
        ];
        for (key, slot) in targets {
            if let Some(raw) = lookup(key) {
                *slot = raw
                    .trim()
                    .parse()
                    .map_err(|e| anyhow::anyhow!("{key}={raw:?} is not a number: {e}"))?;
            }
        }
        self.validate()?;
        Ok(self)
    }

    /// SHA-256 of every tunable, hex encoded.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.breeding).as_bytes());
        hasher.update(format!("{:?}", self.rarity).as_bytes());
        hasher.update(format!("{:?}", self.premium).as_bytes());
        hasher.update(format!("{:?}", self.emotion).as_bytes());
        hex::encode(hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        let config = GeneticsConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cooldown_upper_bound() {
        let config = GeneticsConfig::from_toml("[emotion]\ncooldown_secs = 9223372036854775807");
        assert!(config.is_err());

        let mut config = GeneticsConfig::default();
        config.emotion.cooldown_secs = MAX_COOLDOWN_SECS;
        assert!(config.validate().is_ok());
        config.emotion.cooldown_secs = MAX_COOLDOWN_SECS + 1;
        assert!(config.validate().is_err());
        config.emotion.cooldown_secs = -1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_base_mutation_chance() {
        let config = GeneticsConfig {
            breeding: BreedingConfig {
                base_mutation_chance: 1.5,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_negative_multiplier() {
        let config = GeneticsConfig {
            breeding: BreedingConfig {
                mutation_multiplier: -0.1,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_thresholds_must_increase() {
        let config = GeneticsConfig {
            rarity: RarityConfig {
                thresholds: TierThresholds {
                    uncommon: 10,
                    rare: 10,
                    epic: 40,
                    legendary: 55,
                },
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_synergy_rule_rejected() {
        let mut config = GeneticsConfig::default();
        config.rarity.synergy.push(SynergyRule {
            tags: vec!["EMPTY".into()],
            requires: Vec::new(),
            bonus: 100,
            min_tier: Tier::Legendary,
        });
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_tier_for_score() {
        let t = TierThresholds::default();
        assert_eq!(t.tier_for(0), Tier::Common);
        assert_eq!(t.tier_for(9), Tier::Common);
        assert_eq!(t.tier_for(10), Tier::Uncommon);
        assert_eq!(t.tier_for(20), Tier::Rare);
        assert_eq!(t.tier_for(39), Tier::Rare);
        assert_eq!(t.tier_for(40), Tier::Epic);
        assert_eq!(t.tier_for(55), Tier::Legendary);
        assert_eq!(t.tier_for(500), Tier::Legendary);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = GeneticsConfig::from_toml(
            r#"
            [breeding]
            mutation_multiplier = 2.0

            [emotion]
            cooldown_secs = 60
            "#,
        )
        .expect("Partial config should parse");
        assert_eq!(config.breeding.mutation_multiplier, 2.0);
        assert_eq!(config.breeding.base_mutation_chance, 0.10);
        assert_eq!(config.emotion.cooldown_secs, 60);
        assert_eq!(config.rarity.synergy, default_synergy_rules());
    }

    #[test]
    fn test_toml_synergy_rules() {
        let config = GeneticsConfig::from_toml(
            r#"
            [[rarity.synergy]]
            tags = ["STORM_SET"]
            requires = [
                { locus = "Element", value = "Wind" },
                { locus = "Wing", value = "Feather" },
            ]
            bonus = 12
            min_tier = "Rare"
            "#,
        )
        .expect("Synergy config should parse");
        assert_eq!(config.rarity.synergy.len(), 1);
        assert_eq!(config.rarity.synergy[0].requires[0].locus, Locus::Element);
        assert_eq!(config.rarity.synergy[0].min_tier, Tier::Rare);
    }

    #[test]
    fn test_toml_roundtrip_preserves_fingerprint() {
        let config = GeneticsConfig::default();
        let text = toml::to_string(&config).expect("Should serialize");
        let restored = GeneticsConfig::from_toml(&text).expect("Should parse");
        assert_eq!(config.fingerprint(), restored.fingerprint());
    }

    #[test]
    fn test_fingerprint_tracks_tunables() {
        let base = GeneticsConfig::default();
        let mut tuned = base.clone();
        tuned.breeding.mutation_multiplier = 1.25;
        assert_ne!(base.fingerprint(), tuned.fingerprint());
    }

    #[test]
    fn test_env_style_overrides() {
        let config = GeneticsConfig::default()
            .with_overrides(|key| match key {
                "BREEDING_MUTATION_MULTIPLIER" => Some("0.5".to_string()),
                "ADOPT_PREMIUM_SHINY_CHANCE" => Some(" 1.0 ".to_string()),
                _ => None,
            })
            .expect("Overrides should apply");
        assert_eq!(config.breeding.mutation_multiplier, 0.5);
        assert_eq!(config.premium.shiny_chance, 1.0);
        assert_eq!(config.premium.rare_chance, 0.25);
    }

    #[test]
    fn test_bad_override_is_rejected() {
        let result = GeneticsConfig::default().with_overrides(|key| {
            (key == "ADOPT_PREMIUM_RARE_CHANCE").then(|| "lots".to_string())
        });
        assert!(result.is_err());

        let result = GeneticsConfig::default().with_overrides(|key| {
            (key == "ADOPT_PREMIUM_RARE_CHANCE").then(|| "2.0".to_string())
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let config = GeneticsConfig::load("definitely/not/here/genetics.toml")
            .expect("Missing file should fall back to defaults");
        assert_eq!(config, GeneticsConfig::default());
    }
}
