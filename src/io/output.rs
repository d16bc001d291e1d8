use crate::catalog::{Catalog, CatalogEntry};
use crate::core::{LevelLabels, Trait, TraitLevels};
use crate::formatting::{formatter_for, FormattingConfig, OutputFormatter};
use crate::pipeline::Reveal;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

pub trait OutputWriter {
    fn write_reveal(&mut self, reveal: &Reveal) -> anyhow::Result<()>;
    fn write_catalog(&mut self, catalog: &Catalog) -> anyhow::Result<()>;
}

/// Build the writer for `format` over `writer`
pub fn create_writer<'a, W: Write + 'a>(
    format: OutputFormat,
    writer: W,
    labels: LevelLabels,
    formatting: FormattingConfig,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, labels, formatting)),
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_json<T: Serialize + ?Sized>(&mut self, value: &T) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(self.writer, "{json}")?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_reveal(&mut self, reveal: &Reveal) -> anyhow::Result<()> {
        self.write_json(reveal)
    }

    fn write_catalog(&mut self, catalog: &Catalog) -> anyhow::Result<()> {
        self.write_json(catalog.entries())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    labels: LevelLabels,
    formatter: Box<dyn OutputFormatter>,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, labels: LevelLabels, formatting: FormattingConfig) -> Self {
        Self {
            writer,
            labels,
            formatter: formatter_for(formatting),
        }
    }

    fn write_levels(&mut self, levels: &TraitLevels) -> anyhow::Result<()> {
        for (t, level) in levels.iter() {
            writeln!(
                self.writer,
                "  {:<12}{}",
                format!("{}:", t.title()),
                self.formatter.bold(self.labels.get(level))
            )?;
        }
        Ok(())
    }

    fn catalog_row(&self, entry: &CatalogEntry, name_width: usize) -> String {
        let cells: Vec<String> = Trait::ALL
            .iter()
            .map(|&t| format!("{:<12}", self.labels.get(entry.levels.get(t))))
            .collect();
        format!("{:<name_width$}  {}", entry.name, cells.join("").trim_end())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_reveal(&mut self, reveal: &Reveal) -> anyhow::Result<()> {
        let title = format!("Your stand is {}", reveal.entry.name);
        writeln!(self.writer, "{}", self.formatter.header(&title))?;
        writeln!(self.writer)?;
        self.write_levels(&reveal.entry.levels)?;
        writeln!(self.writer)?;

        let query: Vec<&str> = reveal
            .levels
            .iter()
            .map(|(_, level)| self.labels.get(level))
            .collect();
        let footer = format!(
            "Your levels: {} (distance {})",
            query.join(" "),
            reveal.distance
        );
        writeln!(self.writer, "{}", self.formatter.dim(&footer))?;
        Ok(())
    }

    fn write_catalog(&mut self, catalog: &Catalog) -> anyhow::Result<()> {
        let name_width = catalog
            .entries()
            .iter()
            .map(|e| e.name.chars().count())
            .max()
            .unwrap_or(0)
            .max("Stand".len());

        let headings: Vec<String> = Trait::ALL
            .iter()
            .map(|t| format!("{:<12}", t.title()))
            .collect();
        let header = format!(
            "{:<name_width$}  {}",
            "Stand",
            headings.join("").trim_end()
        );
        writeln!(self.writer, "{}", self.formatter.header(&header))?;

        for entry in catalog.entries() {
            let row = self.catalog_row(entry, name_width);
            writeln!(self.writer, "{row}")?;
        }

        let count = format!("{} stands", catalog.len());
        writeln!(self.writer, "{}", self.formatter.dim(&count))?;
        Ok(())
    }
}
