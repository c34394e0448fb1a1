//! Pure data structures managed by the resource actors.

pub mod player;
pub mod product;
pub mod sale;

pub use player::*;
pub use product::*;
pub use sale::*;
