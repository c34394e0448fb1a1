//! # Product Client
//!
//! Provides a high-level API for interacting with the `Product` actor.
//! It wraps a `ResourceClient<Product>` and exposes domain-specific methods.
use crate::clients::actor_client::{unwrap_entity_error, ActorClient};
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use crate::product_actor::{ProductAction, ProductActionResult, ProductError};
use crate::receipt::SellableItem;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match unwrap_entity_error::<ProductError>(e) {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => ProductError::NotFound(id),
            Err(other) => ProductError::ActorCommunicationError(other.to_string()),
        }
    }
}

fn unexpected(result: ProductActionResult) -> ProductError {
    ProductError::ActorCommunicationError(format!("unexpected action result {:?}", result))
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<ProductId, ProductError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Sets the market price for the coming turn.
    #[instrument(skip(self))]
    pub async fn reprice(&self, id: ProductId, unit_price: f64) -> Result<Product, ProductError> {
        let update = ProductUpdate {
            unit_price: Some(unit_price),
            ..Default::default()
        };
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    async fn act(&self, id: ProductId, action: ProductAction) -> Result<ProductActionResult, ProductError> {
        self.inner
            .perform_action(id, action)
            .await
            .map_err(Self::map_error)
    }

    /// Check the current stock level for a product.
    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: ProductId) -> Result<u32, ProductError> {
        debug!("Checking stock for product {}", id);
        match self.act(id, ProductAction::CheckStock).await? {
            ProductActionResult::CheckStock(level) => Ok(level),
            other => Err(unexpected(other)),
        }
    }

    /// Price `quantity` units at the current market price.
    #[instrument(skip(self))]
    pub async fn quote(&self, id: ProductId, quantity: u32) -> Result<SellableItem, ProductError> {
        debug!("Quoting {} units of product {}", quantity, id);
        match self.act(id, ProductAction::Quote(quantity)).await? {
            ProductActionResult::Quote(item) => Ok(item),
            other => Err(unexpected(other)),
        }
    }

    /// Remove sold units; returns what is left.
    #[instrument(skip(self))]
    pub async fn withdraw(&self, id: ProductId, quantity: u32) -> Result<u32, ProductError> {
        debug!("Withdrawing {} units of product {}", quantity, id);
        match self.act(id, ProductAction::Withdraw(quantity)).await? {
            ProductActionResult::Withdraw(left) => Ok(left),
            other => Err(unexpected(other)),
        }
    }

    /// Put units back; returns the new holding.
    #[instrument(skip(self))]
    pub async fn restock(&self, id: ProductId, quantity: u32) -> Result<u32, ProductError> {
        debug!("Restocking {} units of product {}", quantity, id);
        match self.act(id, ProductAction::Restock(quantity)).await? {
            ProductActionResult::Restock(held) => Ok(held),
            other => Err(unexpected(other)),
        }
    }
}
