//! A player's in-game ledger.
//!
//! # Actor Framework
//! [`Player`] implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
//! allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
//!
//! See [`impl ActorEntity for Player`](Player) for details on:
//! - Creation parameters ([`PlayerCreate`])
//! - Update parameters ([`PlayerUpdate`])
//! - Custom actions ([`PlayerAction`](crate::player_actor::PlayerAction))
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Display;

/// Type-safe identifier for Players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl From<u32> for PlayerId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "player_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: PlayerId,
    pub nickname: String,
    pub gold: f64,
    /// Rent paid so far, keyed by in-game year.
    pub rent_paid: BTreeMap<u32, f64>,
}

impl Player {
    pub fn new(id: PlayerId, nickname: impl Into<String>, gold: f64) -> Self {
        Self {
            id,
            nickname: nickname.into(),
            gold,
            rent_paid: BTreeMap::new(),
        }
    }
}

/// Payload for registering a player.
#[derive(Debug, Clone)]
pub struct PlayerCreate {
    pub nickname: String,
    pub starting_gold: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerUpdate {
    pub nickname: Option<String>,
}

/// Accumulated rent for one in-game year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RentReport {
    pub year: u32,
    pub total_rent_paid: f64,
}
