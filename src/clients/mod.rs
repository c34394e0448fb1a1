//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).

pub mod actor_client;
pub mod player_client;
pub mod product_client;
pub mod sale_client;

pub use actor_client::ActorClient;
pub use player_client::*;
pub use product_client::*;
pub use sale_client::*;
