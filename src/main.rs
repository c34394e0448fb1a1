//! Demo: one player sells two lines of produce and reads the newsletter.
//!
//! Set `TTEOK_CONFIG` to a TOML file to override the defaults in
//! [`TradeConfig`].

use tracing::{error, info, Instrument};
use tteok_trade::config::TradeConfig;
use tteok_trade::lifecycle::{setup_tracing, TradeSystem};
use tteok_trade::model::{PlayerCreate, ProductCreate, SaleCreate, SaleLine};
use tteok_trade::news::{NewsModal, Newsletter, Prominence};

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = match std::env::var("TTEOK_CONFIG") {
        Ok(path) => TradeConfig::load(&path).map_err(|e| format!("{}: {}", path, e))?,
        Err(_) => TradeConfig::default(),
    };
    setup_tracing(&config.log_level);

    info!("Starting trade system");
    let system = TradeSystem::new(&config);

    let player_id = system
        .player_client
        .create_player(PlayerCreate {
            nickname: "farmer".to_string(),
            starting_gold: 10_000.0,
        })
        .await
        .map_err(|e| e.to_string())?;

    let rice = system
        .product_client
        .create_product(ProductCreate {
            name: "rice".to_string(),
            unit_price: 500.0,
            quantity: 10,
        })
        .await
        .map_err(|e| e.to_string())?;
    let barley = system
        .product_client
        .create_product(ProductCreate {
            name: "barley".to_string(),
            unit_price: 250.0,
            quantity: 4,
        })
        .await
        .map_err(|e| e.to_string())?;

    let sale = SaleCreate {
        player_id,
        lines: vec![SaleLine::new(rice, 2), SaleLine::new(barley, 0)],
        fee_rate: system.fee_rate(),
    };

    let span = tracing::info_span!("sale_processing");
    let sale_result = async {
        let sale_id = system.sale_client.sell(sale).await?;
        system.sale_client.receipt(sale_id).await
    }
    .instrument(span)
    .await;

    match sale_result {
        Ok(Some(receipt)) => {
            for item in receipt.displayed_lines() {
                info!(
                    product = %item.product_name,
                    quantity = item.selling_info.product_quantity,
                    cost = item.selling_info.product_total_cost,
                    "Receipt line"
                );
            }
            info!(
                total = receipt.total_cost(),
                fee = receipt.total_fee(),
                fee_rate = %receipt.fee_rate(),
                profit = receipt.total_profit(),
                "Receipt"
            );
        }
        Ok(None) => error!("Sale settled but receipt missing"),
        Err(e) => error!(error = %e, "Sale failed"),
    }

    let balance = system
        .player_client
        .balance(player_id)
        .await
        .map_err(|e| e.to_string())?;
    info!(%player_id, balance, "Balance after sale");

    let issue = Newsletter::new("Turn 2")
        .with_headline("Rice prices hold steady", Prominence::Lead)
        .with_headline("Barley harvest delayed", Prominence::Sidebar);
    let mut modal = NewsModal::new();
    modal.open();
    if let Some(lead) = issue.lead() {
        info!(issue = %issue.issue, headline = %lead.title, "Newsletter");
    }
    modal.close();

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
