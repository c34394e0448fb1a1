//! A settled sale.
//!
//! # Actor Framework
//! [`Sale`] implements the [`ActorEntity`](crate::framework::ActorEntity) trait.
//! All of the work happens in `on_create`, which prices the lines, takes the
//! stock out of the warehouse and credits the player.
use crate::model::{PlayerId, ProductId};
use crate::receipt::{FeeRate, SellReceipt};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Sales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SaleId(pub u32);

impl From<u32> for SaleId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for SaleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "sale_{}", self.0)
    }
}

/// One product and how many units of it to sell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleLine {
    pub product_id: ProductId,
    pub quantity: u32,
}

impl SaleLine {
    pub fn new(product_id: ProductId, quantity: u32) -> Self {
        Self { product_id, quantity }
    }
}

#[derive(Debug, Clone)]
pub struct Sale {
    pub id: SaleId,
    pub player_id: PlayerId,
    pub lines: Vec<SaleLine>,
    pub fee_rate: FeeRate,
    /// Filled in by `on_create` once the lines have been quoted.
    pub receipt: Option<SellReceipt>,
    /// Gold credited to the player when the sale was confirmed.
    pub proceeds: f64,
}

impl Sale {
    /// The unsettled sale as built from its create payload.
    pub fn new(id: SaleId, params: SaleCreate) -> Self {
        Self {
            id,
            player_id: params.player_id,
            lines: params.lines,
            fee_rate: params.fee_rate,
            receipt: None,
            proceeds: 0.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SaleCreate {
    pub player_id: PlayerId,
    pub lines: Vec<SaleLine>,
    pub fee_rate: FeeRate,
}
