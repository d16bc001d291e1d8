use colored::*;
use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    #[default]
    Auto, // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "always" => Some(Self::Always),
            "never" => Some(Self::Never),
            _ => None,
        }
    }

    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormattingConfig {
    pub color: ColorMode,
}

impl FormattingConfig {
    pub fn new(color: ColorMode) -> Self {
        Self { color }
    }

    pub fn from_env() -> Self {
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Resolve color settings from an environment lookup
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        // Check NO_COLOR environment variable (per no-color.org standard)
        if lookup("NO_COLOR").is_some() {
            config.color = ColorMode::Never;
        }

        if lookup("CLICOLOR").as_deref() == Some("0") {
            config.color = ColorMode::Never;
        }

        if lookup("CLICOLOR_FORCE").as_deref() == Some("1") {
            config.color = ColorMode::Always;
        }

        config
    }

    /// Create a plain output configuration (no colors)
    pub fn plain() -> Self {
        Self {
            color: ColorMode::Never,
        }
    }
}

pub trait OutputFormatter {
    fn header(&self, text: &str) -> String;
    fn bold(&self, text: &str) -> String;
    fn dim(&self, text: &str) -> String;
}

pub struct ColoredFormatter {
    enabled: bool,
}

impl ColoredFormatter {
    pub fn new(config: FormattingConfig) -> Self {
        let enabled = config.color.should_use_color();
        colored::control::set_override(enabled);
        Self { enabled }
    }

    fn paint(&self, text: &str, style: impl Fn(&str) -> ColoredString) -> String {
        if self.enabled {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }
}

impl OutputFormatter for ColoredFormatter {
    fn header(&self, text: &str) -> String {
        self.paint(text, |t| t.blue().bold())
    }

    fn bold(&self, text: &str) -> String {
        self.paint(text, |t| t.bold())
    }

    fn dim(&self, text: &str) -> String {
        self.paint(text, |t| t.dimmed())
    }
}

pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn header(&self, text: &str) -> String {
        text.to_string()
    }

    fn bold(&self, text: &str) -> String {
        text.to_string()
    }

    fn dim(&self, text: &str) -> String {
        text.to_string()
    }
}

/// Pick a formatter for `config`
pub fn formatter_for(config: FormattingConfig) -> Box<dyn OutputFormatter> {
    match config.color {
        ColorMode::Never => Box::new(PlainFormatter),
        _ => Box::new(ColoredFormatter::new(config)),
    }
}

fn detect_color_support() -> bool {
    // Check if we're in a dumb terminal
    if env::var("TERM").is_ok_and(|term| term == "dumb") {
        return false;
    }

    std::io::stdout().is_terminal()
}
