//! Validation with error accumulation for configuration.
//!
//! Every section is checked and all problems are reported together, so a
//! user fixing a config file sees every issue in one run.

use super::core::{ChartConfig, LabelsConfig, ParserConfig, StandchartConfig};
use crate::chart::style::MIN_CANVAS_SIDE;
use crate::chart::Color;
use crate::core::{Error, Result, LEVEL_COUNT};
use crate::parser::UrlParser;

/// A single problem, tagged with the dotted field path it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub field: String,
    pub message: String,
}

impl ConfigIssue {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn validate_chart(chart: Option<&ChartConfig>) -> Vec<ConfigIssue> {
    let Some(chart) = chart else {
        return Vec::new();
    };
    let mut issues = Vec::new();

    for (field, side) in [("chart.width", chart.width), ("chart.height", chart.height)] {
        if let Some(side) = side.filter(|&s| s < MIN_CANVAS_SIDE) {
            issues.push(ConfigIssue::new(
                field,
                format!("{} is below the minimum of {}", side, MIN_CANVAS_SIDE),
            ));
        }
    }

    let colors = [
        ("chart.background", &chart.background),
        ("chart.line", &chart.line),
        ("chart.fill", &chart.fill),
        ("chart.text", &chart.text),
    ];
    for (field, value) in colors {
        if let Some(value) = value {
            if Color::parse_hex(value).is_err() {
                issues.push(ConfigIssue::new(
                    field,
                    format!("{:?} is not #rrggbb or #rrggbbaa", value),
                ));
            }
        }
    }

    if chart
        .font_family
        .as_deref()
        .is_some_and(|f| f.trim().is_empty())
    {
        issues.push(ConfigIssue::new("chart.font_family", "must not be blank"));
    }

    issues
}

fn validate_labels(labels: Option<&LabelsConfig>) -> Vec<ConfigIssue> {
    let Some(labels) = labels else {
        return Vec::new();
    };
    let mut issues = Vec::new();
    if labels.levels.len() != LEVEL_COUNT {
        issues.push(ConfigIssue::new(
            "labels.levels",
            format!("expected {} names, got {}", LEVEL_COUNT, labels.levels.len()),
        ));
    }
    for (i, label) in labels.levels.iter().enumerate() {
        if label.trim().is_empty() {
            issues.push(ConfigIssue::new(format!("labels.levels[{}]", i), "must not be blank"));
        }
    }
    issues
}

fn validate_parser(parser: Option<&ParserConfig>) -> Vec<ConfigIssue> {
    match parser.map(|p| UrlParser::with_host(&p.host)) {
        Some(Err(e)) => vec![ConfigIssue::new("parser.host", e.to_string())],
        _ => Vec::new(),
    }
}

/// Validate the entire config, collecting every issue.
pub fn validate_config(config: &StandchartConfig) -> Vec<ConfigIssue> {
    let mut issues = validate_chart(config.chart.as_ref());
    issues.extend(validate_labels(config.labels.as_ref()));
    issues.extend(validate_parser(config.parser.as_ref()));
    issues
}

/// [`validate_config`] folded into a single configuration error
pub fn validate_config_result(config: &StandchartConfig) -> Result<()> {
    let issues = validate_config(config);
    if issues.is_empty() {
        return Ok(());
    }
    let joined = issues
        .iter()
        .map(ConfigIssue::to_string)
        .collect::<Vec<_>>()
        .join("; ");
    Err(Error::Configuration(joined))
}
