//! Configuration loaded from `.standchart.toml`.
//!
//! Every section is optional; a missing file or section means defaults.

mod accessors;
mod core;
mod loader;
pub mod validation;

pub use core::{
    default_host, ChartConfig, LabelsConfig, MatchingConfig, ParserConfig, StandchartConfig,
};
pub use loader::{
    directory_ancestors, load_config, load_config_from, load_config_in,
    parse_and_validate_config, user_config_path, CONFIG_FILE_NAME,
};
pub use validation::{validate_config, validate_config_result, ConfigIssue};
