//! Entity trait implementation for the Product domain type.
//!
//! Includes support for custom actions like stock checks, quotes and
//! withdrawals.

use super::actions::{ProductAction, ProductActionResult};
use super::error::ProductError;
use crate::framework::ActorEntity;
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use crate::receipt::SellableItem;
use async_trait::async_trait;

fn checked_price(price: f64) -> Result<f64, ProductError> {
    if price.is_finite() && price >= 0.0 {
        Ok(price)
    } else {
        Err(ProductError::ValidationError(format!("invalid unit price {}", price)))
    }
}

impl Product {
    fn ensure_stock(&self, requested: u32) -> Result<(), ProductError> {
        if requested > self.quantity {
            return Err(ProductError::InsufficientStock {
                requested,
                available: self.quantity,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;
    type Context = ();
    type Error = ProductError;

    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, Self::Error> {
        if params.name.trim().is_empty() {
            return Err(ProductError::ValidationError("name must not be empty".into()));
        }
        let unit_price = checked_price(params.unit_price)?;
        Ok(Self::new(id, params.name, unit_price, params.quantity))
    }

    /// Handles updates to the Product entity.
    ///
    /// # Fields Updated
    /// - `unit_price`: market price for the new turn
    /// - `quantity`: units held
    async fn on_update(&mut self, update: ProductUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(price) = update.unit_price {
            self.unit_price = checked_price(price)?;
        }
        if let Some(quantity) = update.quantity {
            self.quantity = quantity;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: ProductAction,
        _ctx: &(),
    ) -> Result<ProductActionResult, Self::Error> {
        match action {
            ProductAction::CheckStock => Ok(ProductActionResult::CheckStock(self.quantity)),
            ProductAction::Quote(quantity) => {
                self.ensure_stock(quantity)?;
                Ok(ProductActionResult::Quote(SellableItem::new(
                    self.name.clone(),
                    quantity,
                    self.unit_price * f64::from(quantity),
                )))
            }
            ProductAction::Withdraw(quantity) => {
                self.ensure_stock(quantity)?;
                self.quantity -= quantity;
                Ok(ProductActionResult::Withdraw(self.quantity))
            }
            ProductAction::Restock(quantity) => {
                self.quantity = self.quantity.saturating_add(quantity);
                Ok(ProductActionResult::Restock(self.quantity))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rice(quantity: u32) -> Product {
        Product::new(ProductId(1), "rice", 500.0, quantity)
    }

    #[tokio::test]
    async fn test_quote_prices_without_taking_stock() {
        let mut product = rice(10);
        let quote = product.handle_action(ProductAction::Quote(2), &()).await.unwrap();
        assert_eq!(quote, ProductActionResult::Quote(SellableItem::new("rice", 2, 1000.0)));
        assert_eq!(product.quantity, 10);
    }

    #[tokio::test]
    async fn test_zero_quantity_quote_is_free() {
        let mut product = rice(0);
        let quote = product.handle_action(ProductAction::Quote(0), &()).await.unwrap();
        assert_eq!(quote, ProductActionResult::Quote(SellableItem::new("rice", 0, 0.0)));
    }

    #[tokio::test]
    async fn test_withdraw_beyond_holdings_fails() {
        let mut product = rice(3);
        let err = product.handle_action(ProductAction::Withdraw(4), &()).await.unwrap_err();
        assert_eq!(err, ProductError::InsufficientStock { requested: 4, available: 3 });

        let left = product.handle_action(ProductAction::Withdraw(3), &()).await.unwrap();
        assert_eq!(left, ProductActionResult::Withdraw(0));
    }

    #[tokio::test]
    async fn test_negative_reprice_is_rejected() {
        let mut product = rice(1);
        let update = ProductUpdate { unit_price: Some(-1.0), quantity: None };
        assert!(product.on_update(update, &()).await.is_err());
        assert_eq!(product.unit_price, 500.0);
    }
}
