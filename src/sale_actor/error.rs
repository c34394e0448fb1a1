//! Error types for the Sale actor.

use thiserror::Error;

/// Errors that can occur while settling a sale.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SaleError {
    /// The requested sale was not found.
    #[error("Sale not found: {0}")]
    NotFound(String),

    /// A sale needs at least one line.
    #[error("Sale has no lines")]
    EmptySale,

    /// The broker fee must be a fraction in [0, 1].
    #[error("Invalid fee rate: {0}")]
    InvalidFeeRate(f64),

    /// The selling player is invalid or does not exist.
    #[error("Invalid player: {0}")]
    InvalidPlayer(String),

    /// A product on the sale is invalid or does not exist.
    #[error("Invalid product: {0}")]
    InvalidProduct(String),

    /// The warehouse does not hold enough units.
    #[error("Insufficient stock: {0}")]
    InsufficientStock(String),

    /// Proceeds could not be credited; stock was put back.
    #[error("Settlement failed: {0}")]
    SettlementFailed(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for SaleError {
    fn from(msg: String) -> Self {
        SaleError::ActorCommunicationError(msg)
    }
}
