//! Inputs to and outputs from the phase machine.

use serde::{Deserialize, Serialize};

use crate::core::{GameState, PlayerId, RoleCounts, Voter};
use crate::narrative::NarrativeRequest;

/// Something the table did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// Lobby: open the names screen.
    OpenSetup,
    /// Names screen: back to the lobby.
    BackToLobby,
    /// Names screen: on to role counts.
    ConfigureRoles,
    /// Roles screen: back to names.
    BackToNames,
    /// Roles screen: validate, deal, and begin the reveal.
    Start { names: Vec<String>, roles: RoleCounts },
    /// The "continue" button, meaning depends on the phase.
    Advance,
    /// The active night player's target.
    NightAction(PlayerId),
    CastVote { voter: Voter, target: PlayerId },
    /// Game over screen: back to an empty lobby.
    NewGame,
}

impl Event {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Event::OpenSetup => "OpenSetup",
            Event::BackToLobby => "BackToLobby",
            Event::ConfigureRoles => "ConfigureRoles",
            Event::BackToNames => "BackToNames",
            Event::Start { .. } => "Start",
            Event::Advance => "Advance",
            Event::NightAction(_) => "NightAction",
            Event::CastVote { .. } => "CastVote",
            Event::NewGame => "NewGame",
        }
    }
}

/// What the table should do once the new state is committed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Show this text as is.
    Announce(String),
    /// Ask the narrative service, falling back to the request's summary.
    Describe(NarrativeRequest),
}

impl Effect {
    /// The engine's own text for this effect.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Effect::None => None,
            Effect::Announce(text) => Some(text.as_str()),
            Effect::Describe(request) => Some(request.summary.as_str()),
        }
    }
}

/// A committed state plus its follow-up.
#[derive(Clone, Debug)]
pub struct Transition {
    pub state: GameState,
    pub effect: Effect,
}

impl Transition {
    #[must_use]
    pub fn new(state: GameState, effect: Effect) -> Self {
        Self { state, effect }
    }

    /// Transition with nothing to announce.
    #[must_use]
    pub fn quiet(state: GameState) -> Self {
        Self::new(state, Effect::None)
    }
}
