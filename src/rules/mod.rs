//! Game rules that hold regardless of phase.
//!
//! Currently the win condition. The resolvers call into `WinEvaluator`
//! after applying deaths; nothing else decides when the game ends.

pub mod win;

pub use win::{Census, WinEvaluator};
