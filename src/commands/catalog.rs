use super::resolve_config;
use crate::catalog::Catalog;
use crate::formatting::FormattingConfig;
use crate::io::{create_writer, OutputFormat};
use anyhow::{Context, Result};
use std::io::Write;
use std::path::PathBuf;

pub struct CatalogConfig {
    pub catalog: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub format: OutputFormat,
    pub formatting_config: FormattingConfig,
}

/// List every stand in the configured catalog to `out`
pub fn list_catalog<W: Write>(config: CatalogConfig, out: W) -> Result<()> {
    let settings = resolve_config(config.config.as_deref())?;
    let catalog_path = config.catalog.as_deref().or(settings.catalog_path());
    let catalog = Catalog::load_or_bundled(catalog_path).context("Failed to load catalog")?;
    let labels = settings.level_labels()?;

    create_writer(config.format, out, labels, config.formatting_config).write_catalog(&catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config(catalog: Option<PathBuf>, format: OutputFormat) -> CatalogConfig {
        CatalogConfig {
            catalog,
            config: None,
            format,
            formatting_config: FormattingConfig::plain(),
        }
    }

    #[test]
    fn test_lists_bundled_catalog_as_json() {
        let mut out = Vec::new();
        list_catalog(config(None, OutputFormat::Json), &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let entries = value.as_array().unwrap();
        assert_eq!(entries.len(), Catalog::bundled().unwrap().len());
        assert_eq!(entries[0]["name"], "Star Platinum");
    }

    #[test]
    fn test_missing_catalog_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.json");
        let mut out = Vec::new();
        assert!(list_catalog(config(Some(missing), OutputFormat::Terminal), &mut out).is_err());
        assert!(out.is_empty());
    }
}
