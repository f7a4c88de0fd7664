//! Hatchery: pet genetics with breeding, dominance and rarity scoring.
//!
//! The engine lives in `hatchery_core`; this crate wires it into hatched
//! [`model::pet::Pet`] records and the `hatchery` command line.

pub mod model;

pub use hatchery_core::{GeneticsConfig, GeneticsEngine};
pub use model::pet::Pet;
