//! Core engine types: players, roles, state, night actions, ballots, RNG,
//! configuration.

pub mod player;
pub mod role;
pub mod rng;
pub mod config;
pub mod ballot;
pub mod action;
pub mod state;

pub use player::{Player, PlayerId, PlayerView, Roster, MAX_SEATS};
pub use role::{Role, Winner};
pub use rng::{GameRng, GameRngState, RandomSource};
pub use config::{GameSetup, RoleCounts, MAX_AVENGERS, MAX_PLAYERS, MIN_PLAYERS};
pub use ballot::{Ballots, Voter};
pub use action::NightActions;
pub use state::{GameState, Phase};
