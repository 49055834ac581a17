//! Night turn: who may be targeted, recording a choice, and what the
//! active player gets to see afterwards.

use log::debug;

use crate::core::{GameState, Phase, Player, PlayerId, Role};
use crate::error::GameError;

impl GameState {
    /// Targets the active night player may pick, in seat order.
    ///
    /// Empty for roles without a night action and outside `NightTurn`.
    #[must_use]
    pub fn legal_night_targets(&self) -> Vec<PlayerId> {
        let Some(actor) = self.active_night_player() else {
            return Vec::new();
        };
        if !actor.role.has_night_action() {
            return Vec::new();
        }
        self.players
            .alive()
            .filter(|target| self.check_night_target(actor, target.id).is_ok())
            .map(|target| target.id)
            .collect()
    }

    /// The checked player's role, shown to the seer after they act.
    #[must_use]
    pub fn seer_result(&self) -> Option<Role> {
        let actor = self.active_night_player()?;
        if actor.role != Role::Seer || !self.turn_acted {
            return None;
        }
        self.night_actions
            .seer_check
            .and_then(|id| self.players.get(id))
            .map(|p| p.role)
    }

    /// Tonight's werewolf votes as `voter -> target`, for the next wolf.
    #[must_use]
    pub fn werewolf_vote_log(&self) -> Vec<String> {
        self.night_actions
            .werewolf_votes
            .iter()
            .map(|(&voter, target)| {
                format!("{} -> {}", self.players.name_of(voter), self.players.name_of(target))
            })
            .collect()
    }

    fn check_night_target(&self, actor: &Player, target: PlayerId) -> Result<(), GameError> {
        let victim = self.players.player(target)?;
        if !victim.is_alive {
            return Err(GameError::InvalidTarget {
                target,
                reason: "player is dead",
            });
        }
        if target == actor.id && !actor.role.may_target_self() {
            return Err(GameError::InvalidTarget {
                target,
                reason: "cannot target yourself",
            });
        }
        if actor.role == Role::Doctor && self.last_doctor_target == Some(target) {
            return Err(GameError::InvalidTarget {
                target,
                reason: "protected last night",
            });
        }
        Ok(())
    }
}

/// Record the active night player's choice on a copy of `state`.
pub(crate) fn record_night_action(state: &GameState, target: PlayerId) -> Result<GameState, GameError> {
    if state.phase != Phase::NightTurn {
        return Err(GameError::PhaseMismatch {
            event: "NightAction",
            phase: state.phase,
        });
    }
    let actor = state.active_night_player().ok_or(GameError::NoActivePlayer)?;
    if !actor.role.has_night_action() {
        return Err(GameError::NoNightAction(actor.role));
    }
    if state.turn_acted {
        return Err(GameError::AlreadyActed(actor.id));
    }
    state.check_night_target(actor, target)?;

    let mut next = state.clone();
    next.night_actions.record(actor, target)?;
    next.turn_acted = true;

    debug!("{} ({}) chose {}", actor.id, actor.role, target);
    Ok(next)
}
