//! Reference catalog of named entries.
//!
//! The catalog is plain JSON: an array of flat records with a `name` and the
//! six trait levels. A default catalog is compiled into the binary; callers
//! can load their own from disk. Once built, a catalog is never mutated.

pub mod matcher;

pub use matcher::{find_match, squared_distance, Match};

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::core::{Error, Result, ResultExt, TraitLevels};

const BUNDLED_CATALOG: &str = include_str!("../../data/catalog.json");

/// A named reference point in trait space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    #[serde(flatten)]
    pub levels: TraitLevels,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>, levels: TraitLevels) -> Self {
        Self {
            name: name.into(),
            levels,
        }
    }
}

/// Ordered, read-only list of catalog entries.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Build a catalog, checking that every entry has a name and nominal
    /// levels. An empty list is allowed here; matching against it fails.
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self> {
        for (index, entry) in entries.iter().enumerate() {
            if entry.name.trim().is_empty() {
                return Err(Error::Catalog(format!("entry #{} has no name", index + 1)));
            }
            if let Some((t, level)) = entry.levels.first_overflow() {
                return Err(Error::Catalog(format!(
                    "entry {:?} has {} level {}, expected 0-5",
                    entry.name, t, level
                )));
            }
        }
        Ok(Self { entries })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<CatalogEntry> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(Error::from)
            .context(format!("Failed to read catalog {}", path.display()))?;
        let catalog =
            Self::from_json(&contents).context(format!("Invalid catalog {}", path.display()))?;
        debug!(path = %path.display(), entries = catalog.len(), "Loaded catalog");
        Ok(catalog)
    }

    /// The catalog shipped with the crate
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_CATALOG).context("Bundled catalog is corrupt")
    }

    /// Load `path` when given, otherwise the bundled catalog
    pub fn load_or_bundled(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Self::bundled(),
        }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Nearest entry to `levels`; see [`find_match`]
    pub fn find_match(&self, levels: &TraitLevels) -> Result<Match<'_>> {
        find_match(levels, &self.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_bundled_catalog_loads() {
        let catalog = Catalog::bundled().unwrap();
        assert!(!catalog.is_empty());
        assert_eq!(catalog.entries()[0].name, "Star Platinum");
    }

    #[test]
    fn test_from_json_reads_flat_records() {
        let catalog = Catalog::from_json(indoc! {r#"
            [
                {"name": "Alpha", "power": 1, "speed": 2, "range": 3,
                 "durability": 4, "precision": 5, "potential": 0}
            ]
        "#})
        .unwrap();
        assert_eq!(
            catalog.entries(),
            &[CatalogEntry::new(
                "Alpha",
                TraitLevels {
                    power: 1,
                    speed: 2,
                    range: 3,
                    durability: 4,
                    precision: 5,
                    potential: 0,
                }
            )]
        );
    }

    #[test]
    fn test_from_json_rejects_missing_trait() {
        let err = Catalog::from_json(r#"[{"name": "Alpha", "power": 1}]"#).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_new_rejects_out_of_range_level() {
        let entry = CatalogEntry::new(
            "Loud",
            TraitLevels {
                power: 6,
                ..TraitLevels::default()
            },
        );
        let err = Catalog::new(vec![entry]).unwrap_err();
        assert!(err.to_string().contains("power level 6"));
    }

    #[test]
    fn test_new_rejects_blank_name() {
        let entry = CatalogEntry::new(" ", TraitLevels::default());
        assert!(Catalog::new(vec![entry]).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"name": "Solo", "power": 0, "speed": 0, "range": 0, "durability": 0, "precision": 0, "potential": 0}}]"#
        )
        .unwrap();

        let catalog = Catalog::load(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_load_missing_file_names_path() {
        let err = Catalog::load(Path::new("/nonexistent/catalog.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/catalog.json"));
    }

    #[test]
    fn test_serializes_back_to_flat_array() {
        let catalog = Catalog::new(vec![CatalogEntry::new("Solo", TraitLevels::default())]).unwrap();
        let json = serde_json::to_value(&catalog).unwrap();
        assert_eq!(json[0]["name"], "Solo");
        assert_eq!(json[0]["potential"], 0);
    }
}
