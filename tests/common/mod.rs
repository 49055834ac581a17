//! Shared helpers for driving whole games through the phase machine.

#![allow(dead_code)]

use werewolf_engine::core::{GameState, Phase, Player, PlayerId, RandomSource, Role, Roster, Voter};
use werewolf_engine::phase::{Effect, Event, Game};

/// Deterministic source: identity shuffle, tie-breaks always take the
/// same slot.
#[derive(Clone, Debug)]
pub struct FixedPick(pub usize);

impl RandomSource for FixedPick {
    fn pick_index(&mut self, len: usize) -> usize {
        self.0 % len
    }

    fn shuffle<T>(&mut self, _slice: &mut [T]) {}
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn p(seat: u8) -> PlayerId {
    PlayerId::new(seat)
}

pub fn roster(seats: &[(&str, Role)]) -> Roster {
    Roster::new(
        seats
            .iter()
            .map(|&(name, role)| Player::new(p(0), name, role)),
    )
}

/// A dealt table, walked through the reveal and parked at `NightStart`.
pub fn table(seats: &[(&str, Role)]) -> Game<FixedPick> {
    init_logging();
    let mut game = Game::resume(GameState::started(roster(seats)), FixedPick(0));
    while game.state().phase == Phase::RoleReveal {
        game.send(Event::Advance).unwrap();
    }
    assert_eq!(game.state().phase, Phase::NightStart);
    game
}

/// Play one night from `NightStart`. `choices` maps actor seat to target
/// seat; everyone else just passes the device on.
pub fn play_night<R: RandomSource>(game: &mut Game<R>, choices: &[(u8, u8)]) -> Effect {
    assert_eq!(game.state().phase, Phase::NightStart);
    game.send(Event::Advance).unwrap();

    loop {
        let actor = game.state().active_night_player().map(|p| p.id);
        if let Some(&(_, target)) = choices.iter().find(|&&(seat, _)| Some(p(seat)) == actor) {
            game.send(Event::NightAction(p(target))).unwrap();
        }
        let effect = game.send(Event::Advance).unwrap();
        if game.state().phase != Phase::NightTurn {
            return effect;
        }
    }
}

/// Play one day from `DayNarration`, with an optional table vote.
pub fn play_day<R: RandomSource>(game: &mut Game<R>, vote: Option<u8>) -> Effect {
    assert_eq!(game.state().phase, Phase::DayNarration);
    game.send(Event::Advance).unwrap();
    game.send(Event::Advance).unwrap();
    assert_eq!(game.state().phase, Phase::DayVoting);

    if let Some(target) = vote {
        game.send(Event::CastVote {
            voter: Voter::Table,
            target: p(target),
        })
        .unwrap();
    }
    game.send(Event::Advance).unwrap()
}

pub fn alive_names(state: &GameState) -> Vec<String> {
    state.players.alive().map(|p| p.name.clone()).collect()
}
