//! Runtime orchestration and lifecycle management.
//!
//! - [`TradeSystem`] - starts the player, product and sale actors, wires them
//!   together and shuts them down
//! - [`setup_tracing`] - initializes the tracing/logging infrastructure

pub mod trade_system;
pub mod tracing;

pub use trade_system::*;
pub use self::tracing::*;
