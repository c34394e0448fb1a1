//! [`ActorEntity`] implementation for [`Player`].

use super::actions::{PlayerAction, PlayerActionResult};
use super::error::PlayerError;
use crate::framework::ActorEntity;
use crate::model::{Player, PlayerCreate, PlayerId, PlayerUpdate, RentReport};
use async_trait::async_trait;

fn checked_amount(amount: f64) -> Result<f64, PlayerError> {
    if amount.is_finite() && amount >= 0.0 {
        Ok(amount)
    } else {
        Err(PlayerError::InvalidAmount(amount))
    }
}

impl Player {
    fn debit(&mut self, amount: f64) -> Result<f64, PlayerError> {
        let amount = checked_amount(amount)?;
        if amount > self.gold {
            return Err(PlayerError::InsufficientGold {
                requested: amount,
                available: self.gold,
            });
        }
        self.gold -= amount;
        Ok(self.gold)
    }
}

#[async_trait]
impl ActorEntity for Player {
    type Id = PlayerId;
    type Create = PlayerCreate;
    type Update = PlayerUpdate;
    type Action = PlayerAction;
    type ActionResult = PlayerActionResult;
    type Context = ();
    type Error = PlayerError;

    fn from_create_params(id: PlayerId, params: PlayerCreate) -> Result<Self, Self::Error> {
        if params.nickname.trim().is_empty() {
            return Err(PlayerError::ValidationError("nickname must not be empty".into()));
        }
        let gold = checked_amount(params.starting_gold)?;
        Ok(Self::new(id, params.nickname, gold))
    }

    async fn on_update(&mut self, update: PlayerUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(nickname) = update.nickname {
            if nickname.trim().is_empty() {
                return Err(PlayerError::ValidationError("nickname must not be empty".into()));
            }
            self.nickname = nickname;
        }
        Ok(())
    }

    /// # Actions
    /// - `Balance`: current gold
    /// - `Credit`: adds gold, returns the new balance
    /// - `Debit`: removes gold if the balance covers it
    /// - `PayRent`: debits and records the payment against the year
    /// - `RentReport`: rent paid in a year, zero if none
    async fn handle_action(
        &mut self,
        action: PlayerAction,
        _ctx: &(),
    ) -> Result<PlayerActionResult, Self::Error> {
        match action {
            PlayerAction::Balance => Ok(PlayerActionResult::Balance(self.gold)),
            PlayerAction::Credit(amount) => {
                let gold = self.gold + checked_amount(amount)?;
                if !gold.is_finite() {
                    return Err(PlayerError::InvalidAmount(amount));
                }
                self.gold = gold;
                Ok(PlayerActionResult::Credit(self.gold))
            }
            PlayerAction::Debit(amount) => self.debit(amount).map(PlayerActionResult::Debit),
            PlayerAction::PayRent { year, amount } => {
                let balance = self.debit(amount)?;
                *self.rent_paid.entry(year).or_insert(0.0) += amount;
                Ok(PlayerActionResult::PayRent(balance))
            }
            PlayerAction::RentReport(year) => Ok(PlayerActionResult::RentReport(RentReport {
                year,
                total_rent_paid: self.rent_paid.get(&year).copied().unwrap_or(0.0),
            })),
        }
    }
}
