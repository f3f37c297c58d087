//! Error handling for SunPlan core types.
//!
//! Validation failures carry the offending field and value so that callers
//! can turn them into a user-facing notification with a recovery hint.

use thiserror::Error;

/// A building property that falls outside its allowed range.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Floor count outside the inclusive range.
    #[error("Floors must be between {min} and {max}, got {value}")]
    FloorsOutOfRange {
        /// The rejected value.
        value: u32,
        /// Lower bound.
        min: u32,
        /// Upper bound.
        max: u32,
    },

    /// Storey height outside the inclusive range.
    #[error("Floor height must be between {min} and {max} m, got {value}")]
    FloorHeightOutOfRange {
        /// The rejected value.
        value: f64,
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },

    /// A footprint with fewer than three vertices.
    #[error("Footprint needs at least 3 vertices, got {count}")]
    TooFewVertices {
        /// Number of vertices supplied.
        count: usize,
    },

    /// A coordinate that is NaN or infinite.
    #[error("Footprint contains a non-finite coordinate")]
    NonFiniteCoordinate,

    /// A building name that is empty after trimming.
    #[error("Building name cannot be empty")]
    EmptyName,
}

impl ValidationError {
    /// Short hint telling the user how to recover.
    pub fn hint(&self) -> &'static str {
        match self {
            Self::FloorsOutOfRange { .. } => "Enter a whole number of floors from 1 to 100",
            Self::FloorHeightOutOfRange { .. } => "Enter a floor height from 2 to 10 metres",
            Self::TooFewVertices { .. } => "Trace at least three corners",
            Self::NonFiniteCoordinate => "Re-draw the footprint",
            Self::EmptyName => "Give the building a name",
        }
    }
}

/// Main error type for the core crate.
#[derive(Error, Debug)]
pub enum Error {
    /// Property validation failed
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// JSON (de)serialisation failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a validation error
    pub fn is_validation_error(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;
