//! Player identification and the seating roster.
//!
//! ## PlayerId
//!
//! Stable synthetic id, rendered and serialized as `p-<index>` where the
//! index is the player's seat. Seats never change once a game starts.
//!
//! ## Roster
//!
//! The fixed-order player list. Order is turn order. Players are never
//! removed, only flagged dead, so `PlayerId::index()` always addresses the
//! right seat.

use serde::{Deserialize, Serialize};
use std::ops::Index;
use std::str::FromStr;

use super::role::Role;
use crate::error::GameError;

/// Seat-based player identifier.
///
/// ```
/// use werewolf_engine::core::PlayerId;
///
/// let id: PlayerId = "p-3".parse().unwrap();
/// assert_eq!(id, PlayerId::new(3));
/// assert_eq!(id.to_string(), "p-3");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct PlayerId(pub u8);

impl PlayerId {
    #[must_use]
    pub const fn new(seat: u8) -> Self {
        Self(seat)
    }

    /// Seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// All ids for a table of `player_count` seats, at most `MAX_SEATS`.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..=u8::MAX).take(player_count).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "p-{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix("p-")
            .and_then(|seat| seat.parse::<u8>().ok())
            .map(PlayerId)
            .filter(|id| id.to_string() == s)
            .ok_or_else(|| GameError::MalformedPlayerId(s.to_string()))
    }
}

impl From<PlayerId> for String {
    fn from(id: PlayerId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for PlayerId {
    type Error = GameError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// One seat at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub role: Role,
    pub is_alive: bool,
    /// Carried for the data model only; every seat is a human.
    pub is_ai: bool,
    /// Set for witches at creation. Not consulted by any resolver.
    pub has_poison: bool,
}

impl Player {
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            name: name.into(),
            role,
            is_alive: true,
            is_ai: false,
            has_poison: role == Role::Witch,
        }
    }
}

/// What the table is allowed to render for a player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub id: PlayerId,
    pub name: String,
    pub role: Role,
    pub is_alive: bool,
}

impl From<&Player> for PlayerView {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id,
            name: player.name.clone(),
            role: player.role,
            is_alive: player.is_alive,
        }
    }
}

/// Seats a `PlayerId` can address.
pub const MAX_SEATS: usize = u8::MAX as usize + 1;

/// Fixed-order player list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    /// Build a roster. Seats are renumbered to match list order.
    ///
    /// Supports 1-256 seats; players past `MAX_SEATS` are not seated.
    #[must_use]
    pub fn new(players: impl IntoIterator<Item = Player>) -> Self {
        let players = players
            .into_iter()
            .zip(PlayerId::all(MAX_SEATS))
            .map(|(mut player, id)| {
                player.id = id;
                player
            })
            .collect();
        Self { players }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    /// Look up a player, failing on ids outside the table.
    pub fn player(&self, id: PlayerId) -> Result<&Player, GameError> {
        self.get(id).ok_or(GameError::UnknownPlayer(id))
    }

    #[must_use]
    pub fn is_alive(&self, id: PlayerId) -> bool {
        self.get(id).is_some_and(|p| p.is_alive)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    /// Living players in seat order.
    pub fn alive(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.is_alive)
    }

    /// Display name for an id, or the id itself for unknown seats.
    #[must_use]
    pub fn name_of(&self, id: PlayerId) -> String {
        self.get(id)
            .map_or_else(|| id.to_string(), |p| p.name.clone())
    }

    /// Flag every listed player dead. Repeated ids are harmless.
    #[must_use]
    pub fn with_deaths(&self, deaths: &[PlayerId]) -> Self {
        let mut next = self.clone();
        for id in deaths {
            if let Some(player) = next.players.get_mut(id.index()) {
                player.is_alive = false;
            }
        }
        next
    }

    /// Per-player render data.
    #[must_use]
    pub fn views(&self) -> Vec<PlayerView> {
        self.players.iter().map(PlayerView::from).collect()
    }
}

impl Index<PlayerId> for Roster {
    type Output = Player;

    fn index(&self, id: PlayerId) -> &Self::Output {
        &self.players[id.index()]
    }
}
