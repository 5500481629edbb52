//! Dashboard error types
//!
//! Defines all errors that can occur while binding embedded data to charts.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors that can occur while extracting series or binding charts
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Embedded payload is not valid JSON
    #[error("Malformed payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    /// Payload parsed but is not a JSON array
    #[error("Payload is not an array of records")]
    NotAnArray,

    /// An array element is not a JSON object
    #[error("Record {index} is not an object")]
    NotARecord { index: usize },

    /// A record lacks one of the selected fields
    #[error("Record {index} is missing field '{field}'")]
    MissingField { index: usize, field: String },

    /// A selected field holds a value of the wrong shape
    #[error("Record {index} field '{field}' is not a {expected}")]
    WrongFieldType {
        index: usize,
        field: String,
        expected: &'static str,
    },

    /// The rendering surface refused the configuration
    #[error("Render error: {0}")]
    Render(String),

    /// Attaching a handler to a control failed
    #[error("Binding error: {0}")]
    Binding(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type alias for dashboard operations
pub type DashboardResult<T> = Result<T, DashboardError>;
