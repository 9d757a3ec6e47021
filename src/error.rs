//! Error types for the timeline module
//!
//! Layout itself never fails: bad periods fall back to defaults and missing
//! bars are skipped. Only the dataset boundary and id lookups can error.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TimelineError {
    /// Dataset JSON could not be decoded
    #[error("Invalid dataset JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Dataset decoded but failed validation
    #[error("Dataset validation failed: {0}")]
    Validation(String),

    /// An interaction referenced a movement id that is not loaded
    #[error("Unknown movement id: {0}")]
    UnknownMovement(String),

    /// No dataset has been loaded into the session yet
    #[error("No dataset loaded")]
    NoDataset,

    /// Connections or export requested before the first render pass
    #[error("Timeline has not been rendered yet")]
    NotRendered,

    /// SVG template failed to compile or render
    #[error("Template error: {0}")]
    Template(#[from] mustache::Error),
}

pub type Result<T> = std::result::Result<T, TimelineError>;
