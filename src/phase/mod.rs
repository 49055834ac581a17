//! Phase sequencing.
//!
//! - `event`: what the table sends and what comes back
//! - `machine`: the stateless reducer
//! - `game`: an owner for the live snapshot and RNG

pub mod event;
pub mod machine;
pub mod game;

pub use event::{Effect, Event, Transition};
pub use game::Game;
pub use machine::PhaseMachine;
