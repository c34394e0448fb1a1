//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter that
//! hides module paths (`with_target(false)`); actor logs carry an
//! `entity_type` field instead.
//!
//! The filter comes from `RUST_LOG` when set, otherwise from the configured
//! level:
//!
//! ```bash
//! RUST_LOG=debug cargo run
//! RUST_LOG=tteok_trade::sale_actor=debug cargo run
//! ```
//!
//! **With `RUST_LOG=info`** a sale looks like:
//!
//! ```text
//! INFO Created entity_type="Player" id=player_1 size=1
//! INFO Created entity_type="Product" id=product_1 size=1
//! INFO sell: Sending sale to actor player_id=player_1 lines=2
//! INFO Action ok entity_type="Product" id=product_1
//! INFO Sale settled sale_id=sale_1 total_cost=1500.0 total_fee=75.0 proceeds=1425.0
//! ```
use tracing_subscriber::EnvFilter;

/// Initializes the global subscriber.
///
/// `default_level` is used when `RUST_LOG` is unset or invalid. Calling this
/// twice is harmless; the second call leaves the first subscriber in place.
pub fn setup_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}
