use serde::Serialize;
use tracing::debug;

use super::CatalogEntry;
use crate::core::{Error, Result, Trait, TraitLevels};

/// The catalog entry closest to a query, with its distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Match<'a> {
    pub entry: &'a CatalogEntry,
    pub distance: u64,
}

/// Sum of squared per-trait differences
pub fn squared_distance(a: &TraitLevels, b: &TraitLevels) -> u64 {
    Trait::ALL
        .iter()
        .map(|&t| {
            let diff = u64::from(a.get(t).abs_diff(b.get(t)));
            diff * diff
        })
        .sum()
}

/// Linear nearest-neighbor scan.
///
/// Only a strictly smaller distance replaces the incumbent, so the earliest
/// entry wins ties.
pub fn find_match<'a>(levels: &TraitLevels, catalog: &'a [CatalogEntry]) -> Result<Match<'a>> {
    let mut best: Option<Match<'a>> = None;

    for entry in catalog {
        let distance = squared_distance(levels, &entry.levels);
        if best.map_or(true, |b| distance < b.distance) {
            best = Some(Match { entry, distance });
        }
    }

    let best = best.ok_or(Error::EmptyCatalog)?;
    debug!(entry = %best.entry.name, distance = best.distance, "Matched catalog entry");
    Ok(best)
}
