use tteok_trade::clients::{ActorClient, PlayerClient, ProductClient, SaleClient};
use tteok_trade::framework::{mock::MockClient, FrameworkError, ResourceActor};
use tteok_trade::model::{Player, PlayerId, Product, ProductId, Sale, SaleCreate, SaleId, SaleLine};
use tteok_trade::player_actor::{PlayerAction, PlayerActionResult, PlayerError};
use tteok_trade::product_actor::{ProductAction, ProductActionResult, ProductError};
use tteok_trade::receipt::{FeeRate, SellableItem};
use tteok_trade::sale_actor::SaleError;

/// Real Sale actor with mocked Player and Product dependencies.
struct Harness {
    players: MockClient<Player>,
    products: MockClient<Product>,
}

impl Harness {
    fn new() -> Self {
        Self {
            players: MockClient::new(),
            products: MockClient::new(),
        }
    }

    fn spawn(&self) -> (SaleClient, tokio::task::JoinHandle<()>) {
        let (actor, client): (ResourceActor<Sale>, SaleClient) = tteok_trade::sale_actor::new(8);
        let ctx = (
            PlayerClient::new(self.players.client()),
            ProductClient::new(self.products.client()),
        );
        (client, tokio::spawn(actor.run(ctx)))
    }

    fn verify(&self) {
        self.players.verify();
        self.products.verify();
    }
}

fn sale(lines: Vec<SaleLine>) -> SaleCreate {
    SaleCreate {
        player_id: PlayerId(1),
        lines,
        fee_rate: FeeRate::new(0.1),
    }
}

fn farmer() -> Option<Player> {
    Some(Player::new(PlayerId(1), "farmer", 0.0))
}

#[tokio::test]
async fn test_sale_quotes_withdraws_and_credits() {
    let mut h = Harness::new();
    h.players.expect_get(PlayerId(1)).return_ok(farmer());
    h.products
        .expect_action(ProductId(1))
        .matching(|a| matches!(a, ProductAction::Quote(2)))
        .return_ok(ProductActionResult::Quote(SellableItem::new("rice", 2, 1000.0)));
    h.products
        .expect_action(ProductId(2))
        .matching(|a| matches!(a, ProductAction::Quote(0)))
        .return_ok(ProductActionResult::Quote(SellableItem::new("barley", 0, 0.0)));
    // Only the non-empty line is withdrawn.
    h.products
        .expect_action(ProductId(1))
        .matching(|a| matches!(a, ProductAction::Withdraw(2)))
        .return_ok(ProductActionResult::Withdraw(8));
    h.players
        .expect_action(PlayerId(1))
        .matching(|a| matches!(a, PlayerAction::Credit(amount) if (*amount - 900.0).abs() < 1e-9))
        .return_ok(PlayerActionResult::Credit(900.0));

    let (client, handle) = h.spawn();
    let sale_id = client
        .sell(sale(vec![SaleLine::new(ProductId(1), 2), SaleLine::new(ProductId(2), 0)]))
        .await
        .expect("Sale failed");

    let stored = client.get(sale_id).await.unwrap().expect("Sale not stored");
    assert!((stored.proceeds - 900.0).abs() < 1e-9);
    let receipt = stored.receipt.expect("Receipt missing");
    assert_eq!(receipt.items().len(), 2);
    assert_eq!(receipt.displayed_lines().count(), 1);

    h.verify();
    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_failed_withdrawal_restocks_earlier_lines() {
    let mut h = Harness::new();
    h.players.expect_get(PlayerId(1)).return_ok(farmer());
    h.products
        .expect_action(ProductId(1))
        .matching(|a| matches!(a, ProductAction::Quote(2)))
        .return_ok(ProductActionResult::Quote(SellableItem::new("rice", 2, 1000.0)));
    h.products
        .expect_action(ProductId(2))
        .matching(|a| matches!(a, ProductAction::Quote(3)))
        .return_ok(ProductActionResult::Quote(SellableItem::new("barley", 3, 750.0)));
    h.products
        .expect_action(ProductId(1))
        .matching(|a| matches!(a, ProductAction::Withdraw(2)))
        .return_ok(ProductActionResult::Withdraw(8));
    h.products
        .expect_action(ProductId(2))
        .matching(|a| matches!(a, ProductAction::Withdraw(3)))
        .return_err(FrameworkError::EntityError(Box::new(ProductError::InsufficientStock {
            requested: 3,
            available: 1,
        })));
    h.products
        .expect_action(ProductId(1))
        .matching(|a| matches!(a, ProductAction::Restock(2)))
        .return_ok(ProductActionResult::Restock(10));

    let (client, handle) = h.spawn();
    let result = client
        .sell(sale(vec![SaleLine::new(ProductId(1), 2), SaleLine::new(ProductId(2), 3)]))
        .await;
    assert!(matches!(result, Err(SaleError::InsufficientStock(_))), "{:?}", result);
    assert!(client.get(SaleId(1)).await.unwrap().is_none());

    h.verify();
    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_failed_credit_restocks_and_reports_settlement_failure() {
    let mut h = Harness::new();
    h.players.expect_get(PlayerId(1)).return_ok(farmer());
    h.products
        .expect_action(ProductId(1))
        .matching(|a| matches!(a, ProductAction::Quote(2)))
        .return_ok(ProductActionResult::Quote(SellableItem::new("rice", 2, 1000.0)));
    h.products
        .expect_action(ProductId(1))
        .matching(|a| matches!(a, ProductAction::Withdraw(2)))
        .return_ok(ProductActionResult::Withdraw(8));
    h.players
        .expect_action(PlayerId(1))
        .matching(|a| matches!(a, PlayerAction::Credit(_)))
        .return_err(FrameworkError::EntityError(Box::new(PlayerError::InvalidAmount(f64::NAN))));
    h.products
        .expect_action(ProductId(1))
        .matching(|a| matches!(a, ProductAction::Restock(2)))
        .return_ok(ProductActionResult::Restock(10));

    let (client, handle) = h.spawn();
    let result = client.sell(sale(vec![SaleLine::new(ProductId(1), 2)])).await;
    assert!(matches!(result, Err(SaleError::SettlementFailed(_))), "{:?}", result);

    h.verify();
    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_unknown_player_stops_before_quoting() {
    let mut h = Harness::new();
    h.players.expect_get(PlayerId(1)).return_ok(None);

    let (client, handle) = h.spawn();
    let result = client.sell(sale(vec![SaleLine::new(ProductId(1), 2)])).await;
    assert_eq!(result.unwrap_err(), SaleError::InvalidPlayer("player_1".into()));

    h.verify();
    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_failed_restock_is_reported() {
    let mut h = Harness::new();
    h.players.expect_get(PlayerId(1)).return_ok(farmer());
    h.products
        .expect_action(ProductId(1))
        .matching(|a| matches!(a, ProductAction::Quote(2)))
        .return_ok(ProductActionResult::Quote(SellableItem::new("rice", 2, 1000.0)));
    h.products
        .expect_action(ProductId(1))
        .matching(|a| matches!(a, ProductAction::Withdraw(2)))
        .return_ok(ProductActionResult::Withdraw(8));
    h.players
        .expect_action(PlayerId(1))
        .matching(|a| matches!(a, PlayerAction::Credit(_)))
        .return_err(FrameworkError::ActorClosed);
    h.products
        .expect_action(ProductId(1))
        .matching(|a| matches!(a, ProductAction::Restock(2)))
        .return_err(FrameworkError::ActorClosed);

    let (client, handle) = h.spawn();
    let result = client.sell(sale(vec![SaleLine::new(ProductId(1), 2)])).await;
    match result {
        Err(SaleError::SettlementFailed(msg)) => {
            assert!(msg.contains("rollback incomplete"), "{}", msg);
            assert!(msg.contains("product_1 x2"), "{}", msg);
        }
        other => panic!("Expected SettlementFailed, got {:?}", other),
    }

    h.verify();
    drop(client);
    handle.await.unwrap();
}
