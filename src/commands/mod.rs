//! CLI command implementations for standchart.
//!
//! Available commands:
//! - **reveal**: Parse a chart URL, match it against a catalog and optionally draw the chart
//! - **catalog**: List the stands in a catalog
//! - **init**: Initialize a new standchart configuration file

pub mod catalog;
pub mod init;
pub mod reveal;

pub use catalog::{list_catalog, CatalogConfig};
pub use init::init_config;
pub use reveal::{handle_reveal, RevealConfig};

use crate::config::{load_config, load_config_from, StandchartConfig};
use anyhow::{Context, Result};
use std::path::Path;

/// An explicit `--config` must load; otherwise search the usual locations.
pub(crate) fn resolve_config(explicit: Option<&Path>) -> Result<StandchartConfig> {
    match explicit {
        Some(path) => load_config_from(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(load_config()),
    }
}
