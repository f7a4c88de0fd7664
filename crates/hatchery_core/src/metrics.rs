//! Breeding statistics and logging setup.
//!
//! Provides structured logging and counters for monitoring long breeding
//! runs such as the simulation report tool.

use hatchery_data::{RarityProfile, Tier};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Counters for breeding runs.
pub struct BreedingMetrics {
    breeds: AtomicU64,
    rare_events: AtomicU64,
    tiers: [AtomicU64; 5],
    start_time: Instant,
}

impl Default for BreedingMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl BreedingMetrics {
    #[must_use]
    pub fn new() -> Self {
        Self {
            breeds: AtomicU64::new(0),
            rare_events: AtomicU64::new(0),
            tiers: Default::default(),
            start_time: Instant::now(),
        }
    }

    /// Records one bred child and its rarity.
    pub fn record_breed(&self, rare_event: bool, profile: &RarityProfile) {
        let count = self.breeds.fetch_add(1, Ordering::Relaxed) + 1;
        if rare_event {
            self.rare_events.fetch_add(1, Ordering::Relaxed);
        }
        self.tiers[profile.tier as usize].fetch_add(1, Ordering::Relaxed);

        if count.is_multiple_of(1000) {
            tracing::info!(
                breeds = count,
                rare_events = self.rare_events(),
                "Breeding progress"
            );
        }
    }

    #[must_use]
    pub fn breeds(&self) -> u64 {
        self.breeds.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn rare_events(&self) -> u64 {
        self.rare_events.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn tier_count(&self, tier: Tier) -> u64 {
        self.tiers[tier as usize].load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Logs the tier histogram at info level.
    pub fn log_summary(&self) {
        tracing::info!(
            breeds = self.breeds(),
            rare_events = self.rare_events(),
            common = self.tier_count(Tier::Common),
            uncommon = self.tier_count(Tier::Uncommon),
            rare = self.tier_count(Tier::Rare),
            epic = self.tier_count(Tier::Epic),
            legendary = self.tier_count(Tier::Legendary),
            elapsed_ms = self.elapsed().as_millis() as u64,
            "Breeding summary"
        );
    }
}

/// Initialize tracing subscriber for logging.
///
/// Honors `RUST_LOG`, defaulting to `info`.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .finish(),
    )
    .ok();
}
