pub use hatchery_core::GenomeLogic;
pub mod breeding {
    pub use hatchery_core::breeding::*;
}
pub mod config {
    pub use hatchery_core::config::*;
}
pub mod emotion {
    pub use hatchery_core::emotion::*;
}
pub mod genome {
    pub use hatchery_core::genome::*;
}
pub mod phenotype {
    pub use hatchery_core::phenotype::*;
}
pub mod rarity {
    pub use hatchery_core::rarity::*;
}

pub mod pet;

pub mod state {
    pub use hatchery_data::*;
}
