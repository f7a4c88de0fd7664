//! Personality-weighted emotion rolls and the refresh cooldown.

use crate::weighted::{pick_uniform, roll_band};
use chrono::{DateTime, Duration, Utc};
use hatchery_data::Emotion;
use rand::Rng;

type EmotionWeights = [(Emotion, f64); 4];

const GENTLE: EmotionWeights = [
    (Emotion::Calm, 0.5),
    (Emotion::Happy, 0.3),
    (Emotion::Curious, 0.15),
    (Emotion::Fierce, 0.05),
];
const BOLD: EmotionWeights = [
    (Emotion::Calm, 0.15),
    (Emotion::Happy, 0.2),
    (Emotion::Curious, 0.2),
    (Emotion::Fierce, 0.45),
];
const CURIOUS: EmotionWeights = [
    (Emotion::Calm, 0.2),
    (Emotion::Happy, 0.2),
    (Emotion::Curious, 0.5),
    (Emotion::Fierce, 0.1),
];
const CALM: EmotionWeights = [
    (Emotion::Calm, 0.6),
    (Emotion::Happy, 0.25),
    (Emotion::Curious, 0.1),
    (Emotion::Fierce, 0.05),
];

/// Emotion distribution for a personality trait, if it is a known one.
#[must_use]
pub fn personality_weights(personality: &str) -> Option<&'static EmotionWeights> {
    match personality {
        "Gentle" => Some(&GENTLE),
        "Bold" => Some(&BOLD),
        "Curious" => Some(&CURIOUS),
        "Calm" => Some(&CALM),
        _ => None,
    }
}

/// Rolls an emotion for a pet with the given personality trait.
///
/// Unknown personalities, and rolls that land past the cumulative total, get
/// a uniform pick.
pub fn pick_emotion<R: Rng>(rng: &mut R, personality: &str) -> Emotion {
    let Some(weights) = personality_weights(personality) else {
        return *pick_uniform(&Emotion::ALL, rng);
    };
    match roll_band(weights, rng) {
        Some(emotion) => emotion,
        None => *pick_uniform(&Emotion::ALL, rng),
    }
}

/// Whether at least `cooldown` has passed since the last refresh.
#[must_use]
pub fn should_update_emotion(
    last_updated: DateTime<Utc>,
    now: DateTime<Utc>,
    cooldown: Duration,
) -> bool {
    now - last_updated >= cooldown
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashMap;

    fn frequencies(personality: &str, trials: usize) -> HashMap<Emotion, f64> {
        let mut rng = ChaCha8Rng::seed_from_u64(2024);
        let mut counts: HashMap<Emotion, usize> = HashMap::new();
        for _ in 0..trials {
            *counts.entry(pick_emotion(&mut rng, personality)).or_default() += 1;
        }
        counts
            .into_iter()
            .map(|(emotion, n)| (emotion, n as f64 / trials as f64))
            .collect()
    }

    #[test]
    fn test_weights_sum_to_one() {
        for personality in ["Gentle", "Bold", "Curious", "Calm"] {
            let weights = personality_weights(personality).expect("Known personality");
            let total: f64 = weights.iter().map(|(_, w)| w).sum();
            assert!((total - 1.0).abs() < 1e-9, "{personality} sums to {total}");
        }
    }

    #[test]
    fn test_bold_leans_fierce() {
        let freq = frequencies("Bold", 20_000);
        assert!((freq[&Emotion::Fierce] - 0.45).abs() < 0.02, "{freq:?}");
        assert!((freq[&Emotion::Calm] - 0.15).abs() < 0.02, "{freq:?}");
    }

    #[test]
    fn test_unknown_personality_is_uniform() {
        let freq = frequencies("Grumpy", 20_000);
        assert_eq!(freq.len(), 4);
        for emotion in Emotion::ALL {
            assert!((freq[&emotion] - 0.25).abs() < 0.02, "{freq:?}");
        }
    }

    #[test]
    fn test_emotion_cooldown() {
        let cooldown = Duration::minutes(10);
        let last = Utc::now();
        assert!(!should_update_emotion(last, last, cooldown));
        assert!(!should_update_emotion(
            last,
            last + Duration::seconds(599),
            cooldown
        ));
        assert!(should_update_emotion(last, last + Duration::minutes(10), cooldown));
        assert!(should_update_emotion(last, last + Duration::hours(3), cooldown));
    }
}
