//! Munro Catalog Library
//!
//! A Rust library for loading the Database of British and Irish Hills
//! "munrotab" CSV tables into an in-memory, queryable collection of typed
//! summit records.
//!
//! This library provides tools for:
//! - Tolerant, header-name-driven decoding of heterogeneously labelled CSV rows
//! - Deriving WGS84 latitude/longitude from OS National Grid eastings/northings
//!   via the inverse Redfearn transverse Mercator projection
//! - Filtering the loaded collection on classification, height, section and
//!   name criteria
//! - Comprehensive error handling with a terminal vs. per-row failure taxonomy

pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod dataset;
        pub mod geodesy;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Classification, Munro};
pub use app::services::dataset::{Dataset, FilterCriteria, LoadStats};

/// Result type alias for the munro catalog
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for catalog loading operations
///
/// Only terminal failures surface here: a dataset that cannot be opened, a
/// header row that cannot be read, or a structural read failure mid-stream.
/// Per-row decode problems are handled by skipping the row, and per-field
/// coercion problems by defaulting the field, so neither appears as an error.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Backing dataset file does not exist
    #[error("Dataset not found at path: {path}")]
    DatasetNotFound { path: std::path::PathBuf },

    /// CSV open or read error
    #[error("CSV parsing error in file '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Header row could not be read
    #[error("Missing header row in file '{file}'")]
    MissingHeader { file: String },

    /// JSON serialization error (CLI output)
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Create a dataset-not-found error
    pub fn dataset_not_found(path: impl Into<std::path::PathBuf>) -> Self {
        Self::DatasetNotFound { path: path.into() }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a missing-header error
    pub fn missing_header(file: impl Into<String>) -> Self {
        Self::MissingHeader { file: file.into() }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}
