//! Error types.
//!
//! Two families:
//! - `SetupError`: the table configuration was rejected before a game started.
//! - `GameError`: an event could not be applied to the current snapshot.
//!
//! Neither is fatal. A rejected event leaves the caller's `GameState`
//! exactly as it was, since transitions never mutate their input.

use thiserror::Error;

use crate::core::{Phase, PlayerId, Role};

/// Rejected table configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    #[error("at least {min} named players are required, found {found}")]
    TooFewPlayers { found: usize, min: usize },

    #[error("at most {max} players can sit at the table, found {found}")]
    TooManyPlayers { found: usize, max: usize },

    #[error("{roles} special roles configured for only {players} players")]
    RoleOverflow { roles: usize, players: usize },

    #[error("at least one werewolf is required")]
    MissingWerewolf,

    #[error("at most {max} {role} allowed")]
    RoleLimit { role: Role, max: usize },
}

/// An event that cannot be applied to the current game state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("{event} is not allowed during {phase:?}")]
    PhaseMismatch { event: &'static str, phase: Phase },

    #[error("no player with id {0}")]
    UnknownPlayer(PlayerId),

    #[error("malformed player id {0:?}")]
    MalformedPlayerId(String),

    #[error("{target} cannot be targeted: {reason}")]
    InvalidTarget { target: PlayerId, reason: &'static str },

    #[error("the {0} has no night action")]
    NoNightAction(Role),

    #[error("{0} has already acted this turn")]
    AlreadyActed(PlayerId),

    #[error("no player holds the turn")]
    NoActivePlayer,

    #[error(transparent)]
    Setup(#[from] SetupError),
}

/// The external narrative service could not produce text.
///
/// Never surfaced to the table: `narrative::describe` falls back to the
/// engine's own summary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NarrativeError {
    #[error("narrative service unavailable: {0}")]
    Unavailable(String),

    #[error("narrative request could not be encoded: {0}")]
    Encode(String),
}
