//! # Sell Receipt
//!
//! Read-only breakdown of a pending sale: gross total, broker fee and net
//! profit over a list of [`SellableItem`]s.
//!
//! The receipt never mutates the items it is built from. Committing the sale
//! is delegated to the caller through [`SaleCallbacks`]:
//!
//! ```
//! use tteok_trade::receipt::{FeeRate, FnCallbacks, SellReceipt, SellableItem};
//!
//! let items = vec![
//!     SellableItem::new("rice", 2, 1000.0),
//!     SellableItem::new("barley", 0, 500.0),
//! ];
//! let receipt = SellReceipt::compute(&items, FeeRate::new(0.1));
//! assert_eq!(receipt.displayed_lines().count(), 1);
//!
//! let mut credited = Vec::new();
//! let mut callbacks = FnCallbacks::new(|_| {}, |profit| credited.push(profit));
//! receipt.confirm(&mut callbacks);
//! assert_eq!(credited, vec![1350.0]);
//! ```

mod calculator;

pub use calculator::*;
