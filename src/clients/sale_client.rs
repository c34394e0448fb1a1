//! # Sale Client
//!
//! Settlement (player check, quoting, stock withdrawal, payout) happens in
//! the Sale actor's `on_create` hook. This client only submits sales and
//! reads back their receipts.
use crate::clients::actor_client::{unwrap_entity_error, ActorClient};
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Sale, SaleCreate, SaleId};
use crate::receipt::SellReceipt;
use crate::sale_actor::SaleError;
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Sale actor.
#[derive(Clone)]
pub struct SaleClient {
    inner: ResourceClient<Sale>,
}

#[async_trait]
impl ActorClient<Sale> for SaleClient {
    type Error = SaleError;

    fn inner(&self) -> &ResourceClient<Sale> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match unwrap_entity_error::<SaleError>(e) {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => SaleError::NotFound(id),
            Err(other) => SaleError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl SaleClient {
    pub fn new(inner: ResourceClient<Sale>) -> Self {
        Self { inner }
    }

    /// Settles a sale and returns its id once the player has been paid.
    #[instrument(skip(self, sale))]
    pub async fn sell(&self, sale: SaleCreate) -> Result<SaleId, SaleError> {
        debug!(?sale, "sell called");
        info!(player_id = %sale.player_id, lines = sale.lines.len(), "Sending sale to actor");
        self.inner.create(sale).await.map_err(Self::map_error)
    }

    /// The receipt of a settled sale, or `None` if no such sale exists.
    #[instrument(skip(self))]
    pub async fn receipt(&self, id: SaleId) -> Result<Option<SellReceipt>, SaleError> {
        let sale = self.get(id).await?;
        Ok(sale.and_then(|s| s.receipt))
    }
}
