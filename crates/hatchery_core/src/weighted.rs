//! Cumulative-band selection over ordered `(outcome, weight)` tables.
//!
//! Species crosses, emotion rolls and any other fixed-odds draw share this
//! routine: a uniform draw `roll` in `[0, 1)` selects the first entry whose
//! running cumulative weight is strictly greater than `roll`.

use rand::Rng;

/// Returns the first outcome whose cumulative upper bound exceeds `roll`,
/// or `None` when `roll` lies at or beyond the total weight.
#[must_use]
pub fn pick_band<T: Copy>(bands: &[(T, f64)], roll: f64) -> Option<T> {
    let mut cumulative = 0.0;
    for &(outcome, weight) in bands {
        cumulative += weight;
        if roll < cumulative {
            return Some(outcome);
        }
    }
    None
}

/// Draws a uniform roll and resolves it against `bands`.
pub fn roll_band<T: Copy, R: Rng>(bands: &[(T, f64)], rng: &mut R) -> Option<T> {
    pick_band(bands, rng.gen::<f64>())
}

/// Uniform choice from a non-empty slice.
///
/// # Panics
/// Panics if `items` is empty; every caller passes a fixed, non-empty pool.
pub fn pick_uniform<'a, T, R: Rng>(items: &'a [T], rng: &mut R) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}
