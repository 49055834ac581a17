//! Casting day votes.

use log::debug;

use crate::core::{GameState, Phase, PlayerId, Voter};
use crate::error::GameError;

/// Record `voter`'s ballot on a copy of `state`. A repeat vote replaces the
/// earlier one.
pub(crate) fn cast_vote(state: &GameState, voter: Voter, target: PlayerId) -> Result<GameState, GameError> {
    if state.phase != Phase::DayVoting {
        return Err(GameError::PhaseMismatch {
            event: "CastVote",
            phase: state.phase,
        });
    }
    if !state.players.player(target)?.is_alive {
        return Err(GameError::InvalidTarget {
            target,
            reason: "player is dead",
        });
    }
    if let Voter::Player(id) = voter {
        if !state.players.player(id)?.is_alive {
            return Err(GameError::InvalidTarget {
                target: id,
                reason: "dead players cannot vote",
            });
        }
    }

    let mut next = state.clone();
    next.votes.cast(voter, target);
    debug!("{voter:?} votes for {target}");
    Ok(next)
}
