//! # Tteok Trade
//!
//! Trading core of a turn-based market game: players sell warehouse stock,
//! the broker keeps a fee, and a newsletter is shown between turns.
//!
//! ## Module Tour
//!
//! ### 1. Pure calculations ([`receipt`], [`news`])
//! - [`SellReceipt`](receipt::SellReceipt) totals a list of
//!   [`SellableItem`](receipt::SellableItem)s, applies the broker fee and hands
//!   the net profit back through [`SaleCallbacks`](receipt::SaleCallbacks).
//! - [`NewsModal`](news::NewsModal) is the visibility flag for the newsletter
//!   overlay.
//!
//! ### 2. The engine ([`framework`])
//! A generic `ResourceActor<T>` processes CRUD requests and custom actions
//! for any [`ActorEntity`](framework::ActorEntity), one message at a time.
//! See [`framework::mock`] for testing actors in isolation.
//!
//! ### 3. The actors ([`player_actor`], [`product_actor`], [`sale_actor`])
//! Gold balances, warehouse stock, and sale settlement. A sale quotes its
//! lines, builds a receipt, withdraws stock and credits the player, all in
//! the sale's `on_create` hook.
//!
//! ### 4. The interface ([`clients`])
//! Domain wrappers such as [`SaleClient`](clients::SaleClient) over the
//! generic `ResourceClient`.
//!
//! ### 5. The orchestrator ([`lifecycle`], [`config`])
//! [`TradeSystem`](lifecycle::TradeSystem) spins up and wires the actors from
//! a [`TradeConfig`](config::TradeConfig).
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! TTEOK_CONFIG=trade.toml cargo run
//! ```

pub mod clients;
pub mod config;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod news;
pub mod player_actor;
pub mod product_actor;
pub mod receipt;
pub mod sale_actor;
