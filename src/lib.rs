// Export modules for library usage
pub mod catalog;
pub mod chart;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod formatting;
pub mod io;
pub mod normalize;
pub mod parser;
pub mod pipeline;

// Re-export commonly used types
pub use crate::core::{
    Error, LevelLabels, RawScores, Result, Trait, TraitLevels, LEVEL_COUNT, MAX_LEVEL,
    MAX_RAW_SCORE, RAW_SCORE_COUNT,
};

pub use crate::catalog::{find_match, squared_distance, Catalog, CatalogEntry, Match};

pub use crate::chart::{render, render_svg, ChartStyle, Surface, SvgSurface};

pub use crate::config::{load_config, StandchartConfig};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};

pub use crate::normalize::normalize;

pub use crate::parser::{parse, UrlParser};

pub use crate::pipeline::{reveal, ChartSubject, OverflowPolicy, Pipeline, Reveal};
