//! # Hatchery Data
//!
//! Plain data structures shared by the Hatchery genetics engine and its
//! collaborators: the locus vocabulary, diploid genomes, resolved phenotypes,
//! rarity tiers and emotions.

pub mod data;

pub use data::error::{GeneticsError, Result};
pub use data::genome::{Allele, AllelePair, Genome, Locus, Phenotype, LOCUS_COUNT};
pub use data::mood::Emotion;
pub use data::rarity::{RarityProfile, Tier};
