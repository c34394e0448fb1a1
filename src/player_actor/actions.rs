//! Custom actions for the Player actor.
//!
//! Gold only moves through these actions; [`PlayerUpdate`](crate::model::PlayerUpdate)
//! covers profile fields.

use crate::model::RentReport;

#[derive(Debug, Clone)]
pub enum PlayerAction {
    /// Reads the current gold balance.
    Balance,
    /// Adds gold, e.g. the net profit of a confirmed sale.
    Credit(f64),
    /// Removes gold. Fails if the balance would go negative.
    Debit(f64),
    /// Pays warehouse rent for an in-game year.
    PayRent { year: u32, amount: f64 },
    /// Total rent paid in the given year.
    RentReport(u32),
}

/// Results from PlayerActions - variants match 1:1 with PlayerAction
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerActionResult {
    Balance(f64),
    /// Balance after the credit.
    Credit(f64),
    /// Balance after the debit.
    Debit(f64),
    /// Balance after the payment.
    PayRent(f64),
    RentReport(RentReport),
}
