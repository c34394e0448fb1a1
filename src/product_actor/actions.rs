//! Custom actions for the Product actor.
//!
//! Stock checks, sale quotes and withdrawals on a
//! [`Product`](crate::model::Product). Handled by
//! [`ActorEntity::handle_action`](crate::framework::ActorEntity::handle_action).

use crate::receipt::SellableItem;

/// Custom actions for Product entities.
#[derive(Debug, Clone)]
pub enum ProductAction {
    /// Checks the current stock level without modifying it.
    CheckStock,
    /// Prices a quantity at the current unit price without modifying stock.
    ///
    /// # Errors
    /// Fails if the quantity exceeds holdings.
    Quote(u32),
    /// Removes sold units from the warehouse.
    ///
    /// # Errors
    /// Fails if the quantity exceeds holdings.
    Withdraw(u32),
    /// Puts units back, e.g. when a sale is rolled back.
    Restock(u32),
}

/// Results from ProductActions - variants match 1:1 with ProductAction
#[derive(Debug, Clone, PartialEq)]
pub enum ProductActionResult {
    /// Units currently held.
    CheckStock(u32),
    /// The line as it would appear on a sell receipt.
    Quote(SellableItem),
    /// Units left after the withdrawal.
    Withdraw(u32),
    /// Units held after restocking.
    Restock(u32),
}
