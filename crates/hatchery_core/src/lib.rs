//! # Hatchery Core
//!
//! The genetics engine for Hatchery pets.
//!
//! This crate contains the deterministic, side-effect free logic, including:
//! - Allele pools and random / premium genome construction
//! - Dominance resolution from genome to phenotype
//! - Breeding with weighted inheritance, mutation and rare events
//! - Rarity scoring with synergy sets, hatch rewards and sell prices
//! - Personality-weighted emotion rolls
//!
//! Randomness always comes from a caller-supplied `Rng`, so a seeded
//! generator reproduces every result.
//!
//! ## Example
//!
//! ```
//! use hatchery_core::GeneticsEngine;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let engine = GeneticsEngine::default();
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//!
//! let a = engine.random_genome(&mut rng);
//! let b = engine.random_genome(&mut rng);
//! let (child, _rare_event) = engine.breed_genomes(&a, &b, &mut rng);
//!
//! let phenotype = engine.genome_to_phenotype(&child);
//! let profile = engine.rarity_profile(&phenotype);
//! println!("{} ({} points)", profile.tier, profile.score);
//! ```

/// Breeding: species crosses, weighted inheritance and mutation
pub mod breeding;
/// Configuration management for every tunable constant
pub mod config;
/// Personality-weighted emotion rolls
pub mod emotion;
/// Configured facade over the engine functions
pub mod engine;
/// Allele pools and genome construction
pub mod genome;
/// Breeding counters and logging setup
pub mod metrics;
/// Dominance resolution
pub mod phenotype;
/// Rarity scoring, synergy sets and rewards
pub mod rarity;
/// Cumulative-band weighted selection
pub mod weighted;

pub use config::GeneticsConfig;
pub use engine::GeneticsEngine;
pub use genome::GenomeLogic;
pub use hatchery_data::{Emotion, Genome, Locus, Phenotype, RarityProfile, Tier};
pub use metrics::{init_logging, BreedingMetrics};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deterministic generator for `seed`, or an entropy-seeded one.
#[must_use]
pub fn seeded_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}
