//! The day: ballots and the lynch.

pub mod resolver;
pub mod votes;

pub use resolver::{VoteOutcome, VoteResolver};
