//! # Player Actor
//!
//! Holds each player's gold and rent history.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Player`]
//! - [`error`] - [`PlayerError`]
//! - [`actions`] - [`PlayerAction`] and [`PlayerActionResult`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use tteok_trade::player_actor;
//! use tteok_trade::model::PlayerCreate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = player_actor::new(32);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client
//!         .create_player(PlayerCreate { nickname: "farmer".into(), starting_gold: 1000.0 })
//!         .await?;
//!     assert_eq!(client.credit(id, 250.0).await?, 1250.0);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::PlayerClient;
use crate::framework::ResourceActor;
use crate::model::Player;

/// Creates a new Player actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Player>, PlayerClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, PlayerClient::new(generic_client))
}
