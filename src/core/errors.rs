//! Shared error types for the library

use thiserror::Error;

/// Main error type for standchart operations
#[derive(Debug, Error)]
pub enum Error {
    /// The chart URL does not match the expected grammar
    #[error("Invalid chart URL: {input}")]
    InvalidFormat { input: String },

    /// The matcher was handed a catalog without entries
    #[error("Catalog is empty; nothing to match against")]
    EmptyCatalog,

    /// A normalized level exceeded the top bucket under the reject policy
    #[error("Trait {trait_name} normalized to level {level}, above the top bucket")]
    LevelOutOfRange { trait_name: &'static str, level: u32 },

    /// A score vector was built from values outside the grammar's range
    #[error("Invalid raw scores: {0}")]
    InvalidScores(String),

    /// Catalog loading errors
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Generic errors with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an invalid-format error carrying the rejected input
    pub fn invalid_format(input: impl Into<String>) -> Self {
        Self::InvalidFormat {
            input: input.into(),
        }
    }

    /// Whether the error was caused by what the user typed rather than by
    /// bundled data or local files
    pub fn is_user_input(&self) -> bool {
        matches!(self, Self::InvalidFormat { .. } | Self::LevelOutOfRange { .. })
    }

    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Self::WithContext {
            context: context.into(),
            message: self.to_string(),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}
