//! Raw score to trait level normalization.
//!
//! Each trait blends two raw scores, 1:1 over a nominal maximum of 200 or
//! 2:1 over a nominal maximum of 300, and floors the result onto six buckets.
//! Integer arithmetic gives the same floor as the real-valued formula for
//! non-negative inputs.

use crate::core::{RawScores, TraitLevels};

const EVEN_BLEND_MAX: u32 = 200;
const WEIGHTED_BLEND_MAX: u32 = 300;
const BUCKET_SCALE: u32 = 5;

fn bucket(weighted_sum: u32, nominal_max: u32) -> u32 {
    weighted_sum * BUCKET_SCALE / nominal_max
}

/// `floor((a + b) / 200 * 5)`
fn even_blend(a: u16, b: u16) -> u32 {
    bucket(u32::from(a) + u32::from(b), EVEN_BLEND_MAX)
}

/// `floor((2 * heavy + light) / 300 * 5)`
fn weighted_blend(heavy: u16, light: u16) -> u32 {
    bucket(u32::from(heavy) * 2 + u32::from(light), WEIGHTED_BLEND_MAX)
}

/// Map ten raw scores onto six bucketed trait levels.
///
/// Levels are not clamped; see [`TraitLevels::clamped`].
pub fn normalize(raw: &RawScores) -> TraitLevels {
    let r = raw.as_array();
    TraitLevels {
        power: even_blend(r[0], r[1]),
        speed: weighted_blend(r[2], r[3]),
        range: weighted_blend(r[4], r[3]),
        durability: even_blend(r[5], r[6]),
        precision: weighted_blend(r[7], r[8]),
        potential: weighted_blend(r[9], r[8]),
    }
}
