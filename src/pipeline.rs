//! Parse, normalize and match in one pass.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::catalog::{Catalog, CatalogEntry};
use crate::core::{Error, RawScores, Result, TraitLevels};
use crate::normalize::normalize;
use crate::parser::UrlParser;

/// What to do with normalized levels above the top bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Saturate at the top bucket
    #[default]
    Clamp,
    /// Fail with a level-out-of-range error
    Reject,
}

impl OverflowPolicy {
    pub fn apply(&self, levels: TraitLevels) -> Result<TraitLevels> {
        match (self, levels.first_overflow()) {
            (_, None) => Ok(levels),
            (OverflowPolicy::Clamp, Some((t, level))) => {
                debug!(trait_name = t.as_str(), level, "Clamping overflowing level");
                Ok(levels.clamped())
            }
            (OverflowPolicy::Reject, Some((t, level))) => Err(Error::LevelOutOfRange {
                trait_name: t.as_str(),
                level,
            }),
        }
    }
}

/// Whose levels the chart shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ChartSubject {
    /// The matched catalog entry
    #[default]
    Match,
    /// The levels computed from the URL
    Query,
}

/// Outcome of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reveal {
    pub raw: RawScores,
    /// Normalized levels after the overflow policy
    pub levels: TraitLevels,
    pub entry: CatalogEntry,
    pub distance: u64,
}

impl Reveal {
    pub fn chart_levels(&self, subject: ChartSubject) -> &TraitLevels {
        match subject {
            ChartSubject::Match => &self.entry.levels,
            ChartSubject::Query => &self.levels,
        }
    }
}

/// The parse → normalize → match sequence over a fixed catalog.
#[derive(Debug, Clone)]
pub struct Pipeline<'a> {
    parser: UrlParser,
    catalog: &'a Catalog,
    overflow: OverflowPolicy,
}

impl<'a> Pipeline<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            parser: UrlParser::default(),
            catalog,
            overflow: OverflowPolicy::default(),
        }
    }

    pub fn with_parser(mut self, parser: UrlParser) -> Self {
        self.parser = parser;
        self
    }

    pub fn with_overflow(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;
        self
    }

    /// Run the whole pipeline. Nothing is produced unless every step succeeds.
    pub fn run(&self, url: &str) -> Result<Reveal> {
        let raw = self.parser.parse(url)?;
        let levels = self.overflow.apply(normalize(&raw))?;
        debug!(?levels, "Normalized raw scores");

        let found = self.catalog.find_match(&levels)?;
        info!(entry = %found.entry.name, distance = found.distance, "Revealed catalog entry");

        Ok(Reveal {
            raw,
            levels,
            entry: found.entry.clone(),
            distance: found.distance,
        })
    }
}

/// Run the default pipeline against `catalog`.
pub fn reveal(url: &str, catalog: &Catalog) -> Result<Reveal> {
    Pipeline::new(catalog).run(url)
}
