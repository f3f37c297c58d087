//! Error types for the footprint editor crate.
//!
//! Library operations return [`EditorResult`]; the orchestrator converts
//! failures into notifications or log entries instead of propagating them
//! to the host.

use sunplan_core::{BuildingId, ValidationError};
use thiserror::Error;

/// Errors that can occur during editor operations.
#[derive(Error, Debug)]
pub enum EditorError {
    /// Bad data supplied by the user, such as a malformed import document.
    #[error("{message}")]
    UserInput { message: String, hint: String },

    /// An operation referenced a building that is not (or is already) in the store.
    #[error("Building {id} is not in the expected state")]
    StateInconsistency { id: BuildingId },

    /// Geometry too small or sparse to become a building.
    #[error("Degenerate geometry: {0}")]
    GeometryDegenerate(String),

    /// Array parameters that cannot produce a tiling.
    #[error("Invalid array parameters: {0}")]
    InvalidArray(String),

    /// Property validation failed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// IO error when reading or writing a document.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialisation failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl EditorError {
    /// Create a user-input error with a recovery hint.
    pub fn user_input(message: impl Into<String>, hint: impl Into<String>) -> Self {
        Self::UserInput {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Recovery hint shown next to the message, if the error carries one.
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::UserInput { hint, .. } => Some(hint),
            Self::Validation(err) => Some(err.hint()),
            Self::Json(_) => Some("Check that the file is a SunPlan building export"),
            _ => None,
        }
    }
}

/// Errors raised while replaying the command log.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HistoryError {
    /// The undo stack is empty.
    #[error("Nothing to undo")]
    NothingToUndo,

    /// The redo stack is empty.
    #[error("Nothing to redo")]
    NothingToRedo,

    /// The action could not be applied and was dropped from the log.
    #[error("Dropped stale history action: {description}")]
    StaleAction {
        description: String,
        id: BuildingId,
    },
}

/// Result type alias for editor operations.
pub type EditorResult<T> = Result<T, EditorError>;

/// Result type alias for history replay.
pub type HistoryResult<T> = Result<T, HistoryError>;
