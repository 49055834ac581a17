//! The phase state machine.
//!
//! ```text
//! Lobby -> SetupNames -> SetupRoles -> RoleReveal -> NightStart -> NightTurn
//!   -> DayNarration -> DayDiscussion -> DayVoting -> NightStart (day + 1)
//!                                                 \-> GameOver
//! NightTurn -> GameOver when the night decides the game.
//! ```
//!
//! `PhaseMachine::apply` is a reducer: it reads a snapshot and an event and
//! returns the next snapshot plus an `Effect` for the table. The input is
//! never modified, so a rejected event costs nothing.

use log::{debug, info};

use super::event::{Effect, Event, Transition};
use crate::core::{GameSetup, GameState, NightActions, Phase, RandomSource, RoleCounts};
use crate::day::votes::cast_vote;
use crate::day::VoteResolver;
use crate::error::GameError;
use crate::narrative::NarrativeRequest;
use crate::night::actions::record_night_action;
use crate::night::NightResolver;
use crate::roles::RoleAssigner;

pub(crate) const REVEAL_DONE: &str =
    "Everyone has seen their own face. Now forget it and close your eyes.";
pub(crate) const DISCUSSION_OPENS: &str = "Speak. Dig into your neighbours' words.";
pub(crate) const VOTING_OPENS: &str = "The village demands a victim. Choose carefully.";

pub struct PhaseMachine;

impl PhaseMachine {
    /// Apply one event to `state`.
    pub fn apply<R: RandomSource>(
        state: &GameState,
        event: Event,
        rng: &mut R,
    ) -> Result<Transition, GameError> {
        match (state.phase, event) {
            (Phase::Lobby, Event::OpenSetup) => Ok(Self::goto(state, Phase::SetupNames)),
            (Phase::SetupNames, Event::BackToLobby) => Ok(Self::goto(state, Phase::Lobby)),
            (Phase::SetupNames, Event::ConfigureRoles) => Ok(Self::goto(state, Phase::SetupRoles)),
            (Phase::SetupRoles, Event::BackToNames) => Ok(Self::goto(state, Phase::SetupNames)),
            (Phase::SetupRoles, Event::Start { names, roles }) => Self::start(&names, roles, rng),
            (Phase::NightTurn, Event::NightAction(target)) => {
                record_night_action(state, target).map(Transition::quiet)
            }
            (Phase::DayVoting, Event::CastVote { voter, target }) => {
                cast_vote(state, voter, target).map(Transition::quiet)
            }
            (Phase::GameOver, Event::NewGame) => Ok(Transition::quiet(GameState::new())),
            (_, Event::Advance) => Self::advance(state, rng),
            (phase, event) => Err(GameError::PhaseMismatch {
                event: event.name(),
                phase,
            }),
        }
    }

    fn goto(state: &GameState, phase: Phase) -> Transition {
        debug!("{:?} -> {:?}", state.phase, phase);
        let mut next = state.clone();
        next.phase = phase;
        Transition::quiet(next)
    }

    fn start<R: RandomSource>(
        names: &[String],
        roles: RoleCounts,
        rng: &mut R,
    ) -> Result<Transition, GameError> {
        let setup = GameSetup::new(names, roles)?;
        let players = RoleAssigner::assign(&setup, rng);
        info!("game started with {} players", players.len());
        Ok(Transition::quiet(GameState::started(players)))
    }

    /// The table's "continue" button.
    fn advance<R: RandomSource>(state: &GameState, rng: &mut R) -> Result<Transition, GameError> {
        let mut next = state.clone();
        match state.phase {
            Phase::RoleReveal => {
                let index = state.reveal_index.unwrap_or(0) + 1;
                if index < state.player_count() {
                    next.reveal_index = Some(index);
                    Ok(Transition::quiet(next))
                } else {
                    next.reveal_index = None;
                    next.phase = Phase::NightStart;
                    info!("all roles revealed, night {} begins", next.day_count);
                    Ok(Transition::new(next, Effect::Announce(REVEAL_DONE.to_string())))
                }
            }
            Phase::NightStart => {
                next.phase = Phase::NightTurn;
                next.night_turn_index = Some(0);
                next.turn_acted = false;
                next.night_actions = NightActions::new();
                Ok(Transition::quiet(next))
            }
            Phase::NightTurn => {
                let index = state.night_turn_index.unwrap_or(0) + 1;
                if index < state.players.alive().count() {
                    next.night_turn_index = Some(index);
                    next.turn_acted = false;
                    debug!("night turn passes to seat cursor {index}");
                    Ok(Transition::quiet(next))
                } else {
                    Ok(Self::dawn(state, rng))
                }
            }
            Phase::DayNarration => {
                next.phase = Phase::DayDiscussion;
                Ok(Self::described(next, DISCUSSION_OPENS.to_string()))
            }
            Phase::DayDiscussion => {
                next.phase = Phase::DayVoting;
                Ok(Self::described(next, VOTING_OPENS.to_string()))
            }
            Phase::DayVoting => Ok(Self::verdict(state)),
            phase => Err(GameError::PhaseMismatch {
                event: "Advance",
                phase,
            }),
        }
    }

    /// End of the night: resolve actions and move to the day.
    fn dawn<R: RandomSource>(state: &GameState, rng: &mut R) -> Transition {
        let actions = &state.night_actions;
        let outcome = NightResolver::resolve(&state.players, actions, rng);

        let mut next = state.clone();
        next.players = outcome.players;
        next.last_doctor_target = actions.doctor_protect;
        next.avenger_mark = if outcome.avenger_victim.is_some() {
            None
        } else {
            actions.avenger_mark
        };
        next.night_actions = NightActions::new();
        next.night_turn_index = None;
        next.turn_acted = false;
        next.log(format!("Night {}: {}", state.day_count, outcome.summary));

        match outcome.winner {
            Some(winner) => {
                info!("game over after night {}: {winner}", state.day_count);
                next.phase = Phase::GameOver;
                next.winner = Some(winner);
            }
            None => next.phase = Phase::DayNarration,
        }
        Self::described(next, outcome.summary)
    }

    /// End of the day vote: lynch, then night or game over.
    fn verdict(state: &GameState) -> Transition {
        let outcome = VoteResolver::resolve(&state.players, &state.votes, state.avenger_mark);

        let mut next = state.clone();
        next.players = outcome.players;
        next.votes.clear();
        if outcome.avenger_victim.is_some() {
            next.avenger_mark = None;
        }
        next.log(format!("Day {}: {}", state.day_count, outcome.summary));

        match outcome.winner {
            Some(winner) => {
                info!("game over on day {}: {winner}", state.day_count);
                next.phase = Phase::GameOver;
                next.winner = Some(winner);
            }
            None => {
                next.phase = Phase::NightStart;
                next.day_count += 1;
            }
        }
        Self::described(next, outcome.summary)
    }

    fn described(next: GameState, summary: String) -> Transition {
        let request = NarrativeRequest::new(&next, summary);
        Transition::new(next, Effect::Describe(request))
    }
}
