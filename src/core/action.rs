//! Night actions: the per-night scratch record.
//!
//! Filled one player at a time during `NightTurn`, consumed in one piece by
//! the night resolver, then reset. Every slot except the werewolf ballots
//! holds a single target; a later actor with the same role overwrites it.

use serde::{Deserialize, Serialize};

use super::ballot::Ballots;
use super::player::{Player, PlayerId};
use crate::error::GameError;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NightActions {
    /// Werewolf `voter -> target`.
    pub werewolf_votes: Ballots<PlayerId>,
    pub doctor_protect: Option<PlayerId>,
    pub seer_check: Option<PlayerId>,
    pub witch_kill: Option<PlayerId>,
    pub avenger_mark: Option<PlayerId>,
}

impl NightActions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `actor`'s choice in the slot for their role.
    ///
    /// Target legality is checked by the caller; this only routes.
    pub fn record(&mut self, actor: &Player, target: PlayerId) -> Result<(), GameError> {
        use super::role::Role;

        match actor.role {
            Role::Werewolf => self.werewolf_votes.cast(actor.id, target),
            Role::Doctor => self.doctor_protect = Some(target),
            Role::Seer => self.seer_check = Some(target),
            Role::Witch => self.witch_kill = Some(target),
            Role::Avenger => self.avenger_mark = Some(target),
            role @ (Role::Villager | Role::Hunter) => return Err(GameError::NoNightAction(role)),
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
