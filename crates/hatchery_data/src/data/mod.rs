//! Core data structures for the Hatchery genetics engine.

pub mod error;
pub mod genome;
pub mod mood;
pub mod rarity;
