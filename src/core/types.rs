use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::{Error, Result};

/// Number of raw scores carried by a chart URL
pub const RAW_SCORE_COUNT: usize = 10;

/// Largest raw score the URL grammar can express (three digits)
pub const MAX_RAW_SCORE: u16 = 999;

/// Number of buckets a trait level is divided into
pub const LEVEL_COUNT: usize = 6;

/// Highest nominal bucket index
pub const MAX_LEVEL: u32 = (LEVEL_COUNT - 1) as u32;

/// The ten untransformed scores read from a chart URL, in source order.
///
/// Construction is bounds-checked so every value is representable by the
/// URL grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[u16; RAW_SCORE_COUNT]", into = "[u16; RAW_SCORE_COUNT]")]
pub struct RawScores([u16; RAW_SCORE_COUNT]);

impl RawScores {
    pub fn new(values: [u16; RAW_SCORE_COUNT]) -> Result<Self> {
        if let Some((index, value)) = values
            .iter()
            .enumerate()
            .find(|&(_, &v)| v > MAX_RAW_SCORE)
        {
            return Err(Error::InvalidScores(format!(
                "score #{} is {}, above {}",
                index + 1,
                value,
                MAX_RAW_SCORE
            )));
        }
        Ok(Self(values))
    }

    pub fn as_array(&self) -> &[u16; RAW_SCORE_COUNT] {
        &self.0
    }
}

impl TryFrom<[u16; RAW_SCORE_COUNT]> for RawScores {
    type Error = Error;

    fn try_from(values: [u16; RAW_SCORE_COUNT]) -> Result<Self> {
        Self::new(values)
    }
}

impl From<RawScores> for [u16; RAW_SCORE_COUNT] {
    fn from(scores: RawScores) -> Self {
        scores.0
    }
}

/// The six derived traits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trait {
    Power,
    Speed,
    Range,
    Durability,
    Precision,
    Potential,
}

impl Trait {
    /// Declaration order, also the order traits are reported in
    pub const ALL: [Trait; LEVEL_COUNT] = [
        Trait::Power,
        Trait::Speed,
        Trait::Range,
        Trait::Durability,
        Trait::Precision,
        Trait::Potential,
    ];

    /// Axis order on the radar chart; axis `i` sits at `i * 60°`
    pub const CHART_ORDER: [Trait; LEVEL_COUNT] = [
        Trait::Speed,
        Trait::Range,
        Trait::Durability,
        Trait::Precision,
        Trait::Potential,
        Trait::Power,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Trait::Power => "power",
            Trait::Speed => "speed",
            Trait::Range => "range",
            Trait::Durability => "durability",
            Trait::Precision => "precision",
            Trait::Potential => "potential",
        }
    }

    /// Capitalized name for display
    pub fn title(&self) -> &'static str {
        match self {
            Trait::Power => "Power",
            Trait::Speed => "Speed",
            Trait::Range => "Range",
            Trait::Durability => "Durability",
            Trait::Precision => "Precision",
            Trait::Potential => "Potential",
        }
    }
}

impl fmt::Display for Trait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bucketed trait levels, nominally in `0..=5`.
///
/// The normalizer does not clamp, so a level may exceed [`MAX_LEVEL`] when
/// raw scores go past the formulas' nominal maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TraitLevels {
    pub power: u32,
    pub speed: u32,
    pub range: u32,
    pub durability: u32,
    pub precision: u32,
    pub potential: u32,
}

impl TraitLevels {
    pub fn get(&self, t: Trait) -> u32 {
        match t {
            Trait::Power => self.power,
            Trait::Speed => self.speed,
            Trait::Range => self.range,
            Trait::Durability => self.durability,
            Trait::Precision => self.precision,
            Trait::Potential => self.potential,
        }
    }

    /// `(trait, level)` pairs in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (Trait, u32)> + '_ {
        Trait::ALL.iter().map(move |&t| (t, self.get(t)))
    }

    /// First trait whose level is above the top bucket
    pub fn first_overflow(&self) -> Option<(Trait, u32)> {
        self.iter().find(|&(_, level)| level > MAX_LEVEL)
    }

    /// Copy with every level saturated at [`MAX_LEVEL`]
    pub fn clamped(&self) -> Self {
        Self {
            power: self.power.min(MAX_LEVEL),
            speed: self.speed.min(MAX_LEVEL),
            range: self.range.min(MAX_LEVEL),
            durability: self.durability.min(MAX_LEVEL),
            precision: self.precision.min(MAX_LEVEL),
            potential: self.potential.min(MAX_LEVEL),
        }
    }
}

/// Human-readable names for the six buckets, indexed by level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct LevelLabels(Vec<String>);

impl LevelLabels {
    pub fn new(labels: Vec<String>) -> Result<Self> {
        if labels.len() != LEVEL_COUNT {
            return Err(Error::Configuration(format!(
                "expected {} level labels, got {}",
                LEVEL_COUNT,
                labels.len()
            )));
        }
        if labels.iter().any(|l| l.trim().is_empty()) {
            return Err(Error::Configuration(
                "level labels must not be blank".to_string(),
            ));
        }
        Ok(Self(labels))
    }

    /// Label for a level; levels past the top bucket share the last label
    pub fn get(&self, level: u32) -> &str {
        let index = (level as usize).min(LEVEL_COUNT - 1);
        &self.0[index]
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl Default for LevelLabels {
    fn default() -> Self {
        Self(
            ["E", "D", "C", "B", "A", "Infinite"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
    }
}

impl TryFrom<Vec<String>> for LevelLabels {
    type Error = Error;

    fn try_from(labels: Vec<String>) -> Result<Self> {
        Self::new(labels)
    }
}

impl From<LevelLabels> for Vec<String> {
    fn from(labels: LevelLabels) -> Self {
        labels.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_raw_scores_reject_four_digit_values() {
        let err = RawScores::new([0, 0, 0, 1000, 0, 0, 0, 0, 0, 0]).unwrap_err();
        assert!(err.to_string().contains("score #4"));
    }

    #[test]
    fn test_raw_scores_accept_grammar_maximum() {
        let scores = RawScores::new([MAX_RAW_SCORE; RAW_SCORE_COUNT]).unwrap();
        assert_eq!(scores.as_array()[9], 999);
    }

    #[test]
    fn test_raw_scores_deserialize_checks_bounds() {
        let ok: RawScores = serde_json::from_str("[1,2,3,4,5,6,7,8,9,10]").unwrap();
        assert_eq!(ok.as_array()[0], 1);
        assert!(serde_json::from_str::<RawScores>("[1,2,3,4,5,6,7,8,9,1000]").is_err());
        assert!(serde_json::from_str::<RawScores>("[1,2,3]").is_err());
    }

    #[test]
    fn test_chart_order_puts_power_last() {
        assert_eq!(Trait::CHART_ORDER[0], Trait::Speed);
        assert_eq!(Trait::CHART_ORDER[5], Trait::Power);
    }

    #[test]
    fn test_clamped_saturates_only_overflowing_levels() {
        let levels = TraitLevels {
            power: 49,
            speed: 2,
            range: 6,
            durability: 0,
            precision: 5,
            potential: 1,
        };
        assert_eq!(levels.first_overflow(), Some((Trait::Power, 49)));
        assert_eq!(
            levels.clamped(),
            TraitLevels {
                power: 5,
                speed: 2,
                range: 5,
                durability: 0,
                precision: 5,
                potential: 1,
            }
        );
        assert_eq!(levels.clamped().first_overflow(), None);
    }

    #[test]
    fn test_labels_saturate_past_top_bucket() {
        let labels = LevelLabels::default();
        assert_eq!(labels.get(0), "E");
        assert_eq!(labels.get(4), "A");
        assert_eq!(labels.get(5), "Infinite");
        assert_eq!(labels.get(42), "Infinite");
    }

    #[test]
    fn test_labels_require_six_entries() {
        assert!(LevelLabels::new(vec!["a".into(); 5]).is_err());
        assert!(LevelLabels::new(vec!["a".into(); 6]).is_ok());
        assert!(LevelLabels::new(vec![" ".into(); 6]).is_err());
    }
}
