use crate::clients::{PlayerClient, ProductClient, SaleClient};
use crate::config::TradeConfig;
use crate::receipt::FeeRate;
use tracing::{error, info};

/// The main runtime orchestrator for the trading core.
///
/// # Architecture
///
/// - **Player Actor**: gold balances and rent ledger
/// - **Product Actor**: warehouse stock and prices
/// - **Sale Actor**: settles sales against the other two
///
/// # Example
///
/// ```ignore
/// let system = TradeSystem::new(&TradeConfig::default());
///
/// let player_id = system.player_client.create_player(player).await?;
/// let product_id = system.product_client.create_product(product).await?;
/// let sale_id = system.sale_client.sell(sale).await?;
///
/// system.shutdown().await?;
/// ```
pub struct TradeSystem {
    pub player_client: PlayerClient,
    pub product_client: ProductClient,
    pub sale_client: SaleClient,
    fee_rate: FeeRate,
    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl TradeSystem {
    /// Spawns every actor on the current Tokio runtime.
    ///
    /// Must be called from within a runtime.
    pub fn new(config: &TradeConfig) -> Self {
        let buffer = config.channel_buffer;

        // Create actors (no dependencies yet)
        let (player_actor, player_client) = crate::player_actor::new(buffer);
        let (product_actor, product_client) = crate::product_actor::new(buffer);
        let (sale_actor, sale_client) = crate::sale_actor::new(buffer);

        let player_handle = tokio::spawn(player_actor.run(()));
        let product_handle = tokio::spawn(product_actor.run(()));

        // Sale actor needs Player and Product clients
        let sale_handle = tokio::spawn(sale_actor.run((player_client.clone(), product_client.clone())));

        info!(fee_rate = %config.fee_rate, buffer, "Trade system started");

        Self {
            player_client,
            product_client,
            sale_client,
            fee_rate: config.fee_rate,
            handles: vec![player_handle, product_handle, sale_handle],
        }
    }

    /// The broker fee new sales should be created with.
    pub fn fee_rate(&self) -> FeeRate {
        self.fee_rate
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Dropping the clients closes the channels; each actor then drains and
    /// exits its loop. The sale actor holds clones of the player and product
    /// clients, so it has to finish before those two can.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any actor task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.sale_client);
        drop(self.player_client);
        drop(self.product_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
