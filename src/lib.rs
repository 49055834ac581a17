//! # werewolf-engine
//!
//! Game-state engine for a hot-seat werewolf party game: one device passed
//! around the table, every seat a human.
//!
//! ## Design Principles
//!
//! 1. **Snapshots, not shared state**: `GameState` is plain data. The phase
//!    machine reads one snapshot and returns the next; the caller decides
//!    which one is live.
//!
//! 2. **Injectable randomness**: the role shuffle and the werewolf tie-break
//!    draw from a `RandomSource`. `GameRng` replays a whole game from a seed.
//!
//! 3. **Narration is decoration**: transitions are final before any flavor
//!    text is requested, and a failed request falls back to the engine's own
//!    summary.
//!
//! ## Modules
//!
//! - `core`: players, roles, state, night actions, ballots, RNG, setup
//! - `roles`: dealing roles at game start
//! - `rules`: the win condition
//! - `night`: night turns and dawn resolution
//! - `day`: day votes and the lynch
//! - `phase`: the phase machine, its events and effects
//! - `narrative`: boundary to the external narrative service

pub mod core;
pub mod error;
pub mod roles;
pub mod rules;
pub mod night;
pub mod day;
pub mod phase;
pub mod narrative;

// Re-export commonly used types
pub use crate::core::{
    Ballots, GameRng, GameRngState, GameSetup, GameState, NightActions, Phase, Player,
    PlayerId, PlayerView, RandomSource, Role, RoleCounts, Roster, Voter, Winner,
};

pub use crate::error::{GameError, NarrativeError, SetupError};

pub use crate::roles::RoleAssigner;
pub use crate::rules::{Census, WinEvaluator};
pub use crate::night::{NightOutcome, NightResolver};
pub use crate::day::{VoteOutcome, VoteResolver};
pub use crate::phase::{Effect, Event, Game, PhaseMachine, Transition};
pub use crate::narrative::{describe, NarrativeRequest, Narrator, Silent};
