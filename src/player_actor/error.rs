//! Error types for the Player actor.

use thiserror::Error;

/// Errors that can occur during player operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PlayerError {
    /// The requested player was not found.
    #[error("Player not found: {0}")]
    NotFound(String),

    /// The player data provided is invalid.
    #[error("Player validation error: {0}")]
    ValidationError(String),

    /// Gold amounts must be finite and non-negative.
    #[error("Invalid gold amount: {0}")]
    InvalidAmount(f64),

    /// The balance cannot cover the requested debit.
    #[error("Insufficient gold: requested {requested}, available {available}")]
    InsufficientGold { requested: f64, available: f64 },

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for PlayerError {
    fn from(msg: String) -> Self {
        PlayerError::ActorCommunicationError(msg)
    }
}
