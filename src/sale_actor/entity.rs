//! Entity trait implementation for the Sale domain type.
//!
//! A sale is settled entirely inside `on_create`:
//!
//! 1. The player must exist.
//! 2. Every line is quoted by the product actor, in line order.
//! 3. The quotes become a [`SellReceipt`].
//! 4. Stock is withdrawn for every line with a non-zero quantity.
//! 5. The receipt is confirmed and the net profit credited to the player.
//!
//! If a withdrawal or the credit fails, the units already withdrawn are put
//! back and the sale is not stored.

use super::error::SaleError;
use crate::clients::{ActorClient, PlayerClient, ProductClient};
use crate::framework::ActorEntity;
use crate::model::{PlayerId, Sale, SaleCreate, SaleId, SaleLine};
use crate::product_actor::ProductError;
use crate::receipt::{SaleCallbacks, SellReceipt, SellableItem};
use async_trait::async_trait;
use tracing::{debug, info, warn};

/// Collects what the receipt hands back on confirmation.
#[derive(Debug, Default)]
struct Settlement {
    confirmed_profit: Option<f64>,
    balance_delta: f64,
}

impl Settlement {
    fn payout(&self) -> f64 {
        self.confirmed_profit.unwrap_or(0.0) + self.balance_delta
    }
}

impl SaleCallbacks for Settlement {
    fn on_balance_change(&mut self, amount: f64) {
        self.balance_delta += amount;
    }

    fn on_confirm_sale(&mut self, profit: f64) {
        self.confirmed_profit = Some(profit);
    }
}

fn stock_error(line: &SaleLine, e: ProductError) -> SaleError {
    match e {
        ProductError::InsufficientStock { .. } => {
            SaleError::InsufficientStock(format!("{}: {}", line.product_id, e))
        }
        ProductError::NotFound(_) | ProductError::ValidationError(_) => {
            SaleError::InvalidProduct(format!("{}: {}", line.product_id, e))
        }
        ProductError::ActorCommunicationError(msg) => SaleError::ActorCommunicationError(msg),
    }
}

/// Puts back units taken for a sale that failed with `cause`.
///
/// If any restock fails, the returned error says so; the stock is then short.
async fn roll_back(products: &ProductClient, withdrawn: &[SaleLine], cause: SaleError) -> SaleError {
    let mut lost = Vec::new();
    for line in withdrawn {
        if let Err(e) = products.restock(line.product_id, line.quantity).await {
            warn!(product_id = %line.product_id, error = %e, "Restock after failed sale failed");
            lost.push(format!("{} x{}", line.product_id, line.quantity));
        }
    }
    if lost.is_empty() {
        cause
    } else {
        SaleError::SettlementFailed(format!("{}; rollback incomplete, not restocked: {}", cause, lost.join(", ")))
    }
}

impl Sale {
    async fn quote_lines(&self, products: &ProductClient) -> Result<Vec<SellableItem>, SaleError> {
        let mut items = Vec::with_capacity(self.lines.len());
        for line in &self.lines {
            let item = products
                .quote(line.product_id, line.quantity)
                .await
                .map_err(|e| stock_error(line, e))?;
            items.push(item);
        }
        Ok(items)
    }

    async fn withdraw_lines(&self, products: &ProductClient) -> Result<Vec<SaleLine>, SaleError> {
        let mut withdrawn = Vec::new();
        for line in self.lines.iter().filter(|l| l.quantity > 0) {
            if let Err(e) = products.withdraw(line.product_id, line.quantity).await {
                return Err(roll_back(products, &withdrawn, stock_error(line, e)).await);
            }
            withdrawn.push(*line);
        }
        Ok(withdrawn)
    }

    async fn ensure_player(&self, players: &PlayerClient) -> Result<(), SaleError> {
        match players.get(self.player_id).await {
            Ok(Some(_)) => Ok(()),
            Ok(None) => Err(SaleError::InvalidPlayer(self.player_id.to_string())),
            Err(e) => Err(SaleError::ActorCommunicationError(e.to_string())),
        }
    }
}

#[async_trait]
impl ActorEntity for Sale {
    type Id = SaleId;
    type Create = SaleCreate;
    type Update = ();
    type Action = ();
    type ActionResult = ();
    type Context = (PlayerClient, ProductClient);
    type Error = SaleError;

    fn from_create_params(id: SaleId, params: SaleCreate) -> Result<Self, Self::Error> {
        if params.lines.is_empty() {
            return Err(SaleError::EmptySale);
        }
        if !params.fee_rate.is_within_bounds() {
            return Err(SaleError::InvalidFeeRate(params.fee_rate.value()));
        }
        Ok(Self::new(id, params))
    }

    async fn on_create(&mut self, ctx: &Self::Context) -> Result<(), Self::Error> {
        let (players, products) = ctx;
        debug!(sale_id = %self.id, player_id = %self.player_id, lines = self.lines.len(), "Settling sale");

        self.ensure_player(players).await?;
        let items = self.quote_lines(products).await?;
        let receipt = SellReceipt::from_items(items, self.fee_rate);

        let withdrawn = self.withdraw_lines(products).await?;

        let mut settlement = Settlement::default();
        receipt.confirm(&mut settlement);
        let payout = settlement.payout();

        if let Err(e) = credit(players, self.player_id, payout).await {
            return Err(roll_back(products, &withdrawn, e).await);
        }

        info!(
            sale_id = %self.id,
            total_cost = receipt.total_cost(),
            total_fee = receipt.total_fee(),
            proceeds = payout,
            "Sale settled"
        );
        self.proceeds = payout;
        self.receipt = Some(receipt);
        Ok(())
    }

    async fn on_update(&mut self, _update: (), _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}

async fn credit(players: &PlayerClient, player_id: PlayerId, amount: f64) -> Result<f64, SaleError> {
    players
        .credit(player_id, amount)
        .await
        .map_err(|e| SaleError::SettlementFailed(e.to_string()))
}
