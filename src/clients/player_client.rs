//! # Player Client
//!
//! High-level API over a `ResourceClient<Player>`.
use crate::clients::actor_client::{unwrap_entity_error, ActorClient};
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Player, PlayerCreate, PlayerId, PlayerUpdate, RentReport};
use crate::player_actor::{PlayerAction, PlayerActionResult, PlayerError};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Player actor.
#[derive(Clone)]
pub struct PlayerClient {
    inner: ResourceClient<Player>,
}

#[async_trait]
impl ActorClient<Player> for PlayerClient {
    type Error = PlayerError;

    fn inner(&self) -> &ResourceClient<Player> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match unwrap_entity_error::<PlayerError>(e) {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => PlayerError::NotFound(id),
            Err(other) => PlayerError::ActorCommunicationError(other.to_string()),
        }
    }
}

fn unexpected(result: PlayerActionResult) -> PlayerError {
    PlayerError::ActorCommunicationError(format!("unexpected action result {:?}", result))
}

impl PlayerClient {
    pub fn new(inner: ResourceClient<Player>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_player(&self, params: PlayerCreate) -> Result<PlayerId, PlayerError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn rename(&self, id: PlayerId, nickname: String) -> Result<Player, PlayerError> {
        debug!("Sending request");
        let update = PlayerUpdate {
            nickname: Some(nickname),
        };
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    async fn act(&self, id: PlayerId, action: PlayerAction) -> Result<PlayerActionResult, PlayerError> {
        self.inner
            .perform_action(id, action)
            .await
            .map_err(Self::map_error)
    }

    /// Current gold.
    #[instrument(skip(self))]
    pub async fn balance(&self, id: PlayerId) -> Result<f64, PlayerError> {
        match self.act(id, PlayerAction::Balance).await? {
            PlayerActionResult::Balance(gold) => Ok(gold),
            other => Err(unexpected(other)),
        }
    }

    /// Adds gold and returns the new balance.
    #[instrument(skip(self))]
    pub async fn credit(&self, id: PlayerId, amount: f64) -> Result<f64, PlayerError> {
        debug!(amount, "Crediting player {}", id);
        match self.act(id, PlayerAction::Credit(amount)).await? {
            PlayerActionResult::Credit(gold) => Ok(gold),
            other => Err(unexpected(other)),
        }
    }

    /// Removes gold and returns the new balance.
    #[instrument(skip(self))]
    pub async fn debit(&self, id: PlayerId, amount: f64) -> Result<f64, PlayerError> {
        debug!(amount, "Debiting player {}", id);
        match self.act(id, PlayerAction::Debit(amount)).await? {
            PlayerActionResult::Debit(gold) => Ok(gold),
            other => Err(unexpected(other)),
        }
    }

    /// Pays rent for `year` and returns the new balance.
    #[instrument(skip(self))]
    pub async fn pay_rent(&self, id: PlayerId, year: u32, amount: f64) -> Result<f64, PlayerError> {
        match self.act(id, PlayerAction::PayRent { year, amount }).await? {
            PlayerActionResult::PayRent(gold) => Ok(gold),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn rent_report(&self, id: PlayerId, year: u32) -> Result<RentReport, PlayerError> {
        match self.act(id, PlayerAction::RentReport(year)).await? {
            PlayerActionResult::RentReport(report) => Ok(report),
            other => Err(unexpected(other)),
        }
    }
}
