use std::path::Path;

use super::core::StandchartConfig;
use crate::chart::{Canvas, ChartStyle, Color};
use crate::core::{LevelLabels, Result};
use crate::parser::UrlParser;
use crate::pipeline::{ChartSubject, OverflowPolicy};

fn color_or(value: Option<&String>, default: Color) -> Result<Color> {
    value.map_or(Ok(default), |s| Color::parse_hex(s))
}

impl StandchartConfig {
    /// Chart style with configured overrides applied to the defaults
    pub fn chart_style(&self) -> Result<ChartStyle> {
        let defaults = ChartStyle::default();
        let labels = match &self.labels {
            Some(labels) => LevelLabels::new(labels.levels.clone())?,
            None => defaults.labels.clone(),
        };

        let Some(chart) = &self.chart else {
            return Ok(ChartStyle { labels, ..defaults });
        };

        Ok(ChartStyle {
            canvas: Canvas::new(
                chart.width.unwrap_or(defaults.canvas.width),
                chart.height.unwrap_or(defaults.canvas.height),
            )?,
            background: color_or(chart.background.as_ref(), defaults.background)?,
            line: color_or(chart.line.as_ref(), defaults.line)?,
            fill: color_or(chart.fill.as_ref(), defaults.fill)?,
            text: color_or(chart.text.as_ref(), defaults.text)?,
            font_family: chart
                .font_family
                .clone()
                .unwrap_or_else(|| defaults.font_family.clone()),
            labels,
        })
    }

    /// Labels without the rest of the chart style
    pub fn level_labels(&self) -> Result<LevelLabels> {
        match &self.labels {
            Some(labels) => LevelLabels::new(labels.levels.clone()),
            None => Ok(LevelLabels::default()),
        }
    }

    pub fn url_parser(&self) -> Result<UrlParser> {
        match &self.parser {
            Some(parser) => UrlParser::with_host(&parser.host),
            None => Ok(UrlParser::default()),
        }
    }

    pub fn overflow_policy(&self) -> OverflowPolicy {
        self.matching.map(|m| m.overflow).unwrap_or_default()
    }

    pub fn chart_subject(&self) -> ChartSubject {
        self.matching.map(|m| m.chart_subject).unwrap_or_default()
    }

    pub fn catalog_path(&self) -> Option<&Path> {
        self.catalog_path.as_deref()
    }
}
