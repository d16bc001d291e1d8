use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::parser::DEFAULT_HOST;
use crate::pipeline::{ChartSubject, OverflowPolicy};

/// Root configuration structure for standchart
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct StandchartConfig {
    /// Catalog JSON to match against instead of the bundled one.
    /// Relative paths are resolved against the config file's directory.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    /// Chart appearance
    #[serde(default)]
    pub chart: Option<ChartConfig>,

    /// Names of the six level buckets
    #[serde(default)]
    pub labels: Option<LabelsConfig>,

    /// Accepted chart URL host
    #[serde(default)]
    pub parser: Option<ParserConfig>,

    /// Overflow handling and chart subject
    #[serde(default)]
    pub matching: Option<MatchingConfig>,
}

/// Chart appearance. Colors are `#rrggbb` or `#rrggbbaa`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ChartConfig {
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub background: Option<String>,
    #[serde(default)]
    pub line: Option<String>,
    #[serde(default)]
    pub fill: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub font_family: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LabelsConfig {
    /// Exactly six names, lowest bucket first
    pub levels: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParserConfig {
    #[serde(default = "default_host")]
    pub host: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
        }
    }
}

pub fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct MatchingConfig {
    #[serde(default)]
    pub overflow: OverflowPolicy,
    #[serde(default)]
    pub chart_subject: ChartSubject,
}
