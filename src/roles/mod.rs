//! Dealing roles at game start.

pub mod assigner;

pub use assigner::RoleAssigner;
