//! The night: per-player actions and their resolution at dawn.

pub mod actions;
pub mod resolver;

pub use resolver::{NightOutcome, NightResolver};
