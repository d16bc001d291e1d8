use super::resolve_config;
use crate::catalog::Catalog;
use crate::chart::render_svg;
use crate::formatting::FormattingConfig;
use crate::io::{self, create_writer, OutputFormat};
use crate::pipeline::{ChartSubject, Pipeline, Reveal};
use anyhow::{Context, Result};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

pub struct RevealConfig {
    pub url: String,
    pub catalog: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub svg: Option<PathBuf>,
    pub format: OutputFormat,
    pub chart_subject: Option<ChartSubject>,
    pub formatting_config: FormattingConfig,
}

/// Run the reveal pipeline, write the SVG if asked, then report to `out`.
///
/// Every fallible step runs before anything is written, so a failure leaves
/// no partial chart or report behind.
pub fn handle_reveal<W: Write>(config: RevealConfig, out: W) -> Result<Reveal> {
    let settings = resolve_config(config.config.as_deref())?;

    let catalog_path = config.catalog.as_deref().or(settings.catalog_path());
    let catalog = Catalog::load_or_bundled(catalog_path).context("Failed to load catalog")?;
    let style = settings.chart_style().context("Invalid chart settings")?;

    let pipeline = Pipeline::new(&catalog)
        .with_parser(settings.url_parser()?)
        .with_overflow(settings.overflow_policy());
    let reveal = pipeline.run(&config.url)?;

    let svg = config.svg.map(|path| {
        let subject = config.chart_subject.unwrap_or(settings.chart_subject());
        (path, render_svg(reveal.chart_levels(subject), &style))
    });
    if let Some((path, document)) = svg {
        io::write_file(&path, &document)?;
        info!(path = %path.display(), "Wrote radar chart");
    }

    create_writer(config.format, out, style.labels.clone(), config.formatting_config)
        .write_reveal(&reveal)?;
    Ok(reveal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Error;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    const URL: &str = "https://charts.idrlabs.com/graphic/autism-spectrum?1&p=100,100,50,50,50,100,100,50,50,50&l=EN";

    fn config(url: &str, svg: Option<PathBuf>) -> RevealConfig {
        RevealConfig {
            url: url.to_string(),
            catalog: None,
            config: None,
            svg,
            format: OutputFormat::Terminal,
            chart_subject: None,
            formatting_config: FormattingConfig::plain(),
        }
    }

    #[test]
    fn test_reveal_bundled_catalog() {
        let mut out = Vec::new();
        let reveal = handle_reveal(config(URL, None), &mut out).unwrap();

        assert_eq!(reveal.entry.name, "Stone Free");
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Your stand is Stone Free\n"));
    }

    #[test]
    fn test_svg_written_on_success() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("charts").join("stand.svg");
        let mut out = Vec::new();
        handle_reveal(config(URL, Some(path.clone())), &mut out).unwrap();

        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.starts_with("<svg"));
    }

    #[test]
    fn test_invalid_url_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("stand.svg");
        let mut out = Vec::new();
        let err = handle_reveal(config("https://example.com/", Some(path.clone())), &mut out)
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::InvalidFormat { .. })
        ));
        assert!(out.is_empty());
        assert!(!path.exists());
    }

    #[test]
    fn test_query_subject_charts_own_levels() {
        let dir = TempDir::new().unwrap();
        let matched = dir.path().join("match.svg");
        let query = dir.path().join("query.svg");

        handle_reveal(config(URL, Some(matched.clone())), &mut Vec::new()).unwrap();
        let mut query_config = config(URL, Some(query.clone()));
        query_config.chart_subject = Some(ChartSubject::Query);
        handle_reveal(query_config, &mut Vec::new()).unwrap();

        assert_ne!(
            std::fs::read_to_string(matched).unwrap(),
            std::fs::read_to_string(query).unwrap()
        );
    }
}
