//! Game state snapshot.
//!
//! `GameState` is plain data. The phase machine reads one snapshot and
//! returns the next; nothing mutates a snapshot the caller still holds.
//! History uses `im::Vector` so the per-transition clone stays O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::NightActions;
use super::ballot::{Ballots, Voter};
use super::player::{Player, PlayerId, PlayerView, Roster};
use super::role::Winner;

/// One stage of the day/night cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    #[default]
    Lobby,
    SetupNames,
    SetupRoles,
    RoleReveal,
    NightStart,
    NightTurn,
    DayNarration,
    DayDiscussion,
    DayVoting,
    /// Declared for a retaliation step that nothing transitions into.
    AvengerRevenge,
    GameOver,
}

/// Complete snapshot of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Seats in turn order. Fixed once the game starts.
    pub players: Roster,

    pub phase: Phase,

    /// Starts at 1, bumped once per completed day.
    pub day_count: u32,

    /// Cursor over all seats during `RoleReveal`.
    pub reveal_index: Option<usize>,

    /// Cursor over living seats during `NightTurn`.
    pub night_turn_index: Option<usize>,

    /// Whether the player under the night cursor has already acted.
    pub turn_acted: bool,

    pub night_actions: NightActions,

    /// Last night's protection; the doctor may not pick it again.
    pub last_doctor_target: Option<PlayerId>,

    /// The avenger's standing mark, carried from night into day.
    pub avenger_mark: Option<PlayerId>,

    pub votes: Ballots<Voter>,

    pub winner: Option<Winner>,

    /// Advisory log.
    pub history: Vector<String>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            players: Roster::default(),
            phase: Phase::Lobby,
            day_count: 1,
            reveal_index: None,
            night_turn_index: None,
            turn_acted: false,
            night_actions: NightActions::default(),
            last_doctor_target: None,
            avenger_mark: None,
            votes: Ballots::default(),
            winner: None,
            history: Vector::new(),
        }
    }
}

impl GameState {
    /// Empty table in the lobby.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh game with a dealt roster, at the first role reveal.
    #[must_use]
    pub fn started(players: Roster) -> Self {
        let mut history = Vector::new();
        history.push_back("Local game started.".to_string());
        Self {
            players,
            phase: Phase::RoleReveal,
            reveal_index: Some(0),
            history,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Render data for every seat.
    #[must_use]
    pub fn player_views(&self) -> Vec<PlayerView> {
        self.players.views()
    }

    /// Living players in seat order. Night turns walk this list.
    #[must_use]
    pub fn alive_players(&self) -> Vec<&Player> {
        self.players.alive().collect()
    }

    /// The player currently looking at their role card.
    #[must_use]
    pub fn active_reveal_player(&self) -> Option<&Player> {
        if self.phase != Phase::RoleReveal {
            return None;
        }
        self.reveal_index
            .and_then(|i| self.players.iter().nth(i))
    }

    /// The player holding the device during the night.
    #[must_use]
    pub fn active_night_player(&self) -> Option<&Player> {
        if self.phase != Phase::NightTurn {
            return None;
        }
        self.night_turn_index
            .and_then(|i| self.players.alive().nth(i))
    }

    pub(crate) fn log(&mut self, entry: impl Into<String>) {
        self.history.push_back(entry.into());
    }
}
