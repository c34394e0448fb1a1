//! # Sale Actor
//!
//! Settles sales against the player and product actors and keeps the
//! resulting receipts. See [`entity`] for the settlement steps.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::SaleClient;
use crate::framework::ResourceActor;
use crate::model::Sale;

/// Creates a new Sale actor and its client.
///
/// The actor must be run with `(PlayerClient, ProductClient)` as context.
pub fn new(buffer_size: usize) -> (ResourceActor<Sale>, SaleClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, SaleClient::new(generic_client))
}
