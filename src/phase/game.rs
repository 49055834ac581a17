//! Owning wrapper for a table.
//!
//! `PhaseMachine` is stateless; `Game` is the one place that holds the live
//! snapshot and the RNG, swapping the snapshot wholesale on every accepted
//! event.

use super::event::{Effect, Event};
use super::machine::PhaseMachine;
use crate::core::{GameRng, GameState, RandomSource};
use crate::error::GameError;

/// A table's live game.
///
/// ```
/// use werewolf_engine::phase::{Event, Game};
/// use werewolf_engine::core::{Phase, RoleCounts};
///
/// let mut game = Game::new(42);
/// game.send(Event::OpenSetup).unwrap();
/// game.send(Event::ConfigureRoles).unwrap();
/// game.send(Event::Start {
///     names: vec!["Ada".into(), "Bea".into(), "Cid".into()],
///     roles: RoleCounts::default(),
/// })
/// .unwrap();
/// assert_eq!(game.state().phase, Phase::RoleReveal);
/// ```
#[derive(Clone, Debug)]
pub struct Game<R = GameRng> {
    state: GameState,
    rng: R,
}

impl Game<GameRng> {
    /// New lobby with a seeded RNG.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_rng(GameRng::new(seed))
    }

    /// New lobby with an entropy-seeded RNG.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::with_rng(GameRng::from_entropy())
    }
}

impl<R: RandomSource> Game<R> {
    #[must_use]
    pub fn with_rng(rng: R) -> Self {
        Self::resume(GameState::new(), rng)
    }

    /// Continue from an existing snapshot.
    #[must_use]
    pub fn resume(state: GameState, rng: R) -> Self {
        Self { state, rng }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Apply an event. On error the current snapshot is kept.
    pub fn send(&mut self, event: Event) -> Result<Effect, GameError> {
        let transition = PhaseMachine::apply(&self.state, event, &mut self.rng)?;
        self.state = transition.state;
        Ok(transition.effect)
    }

    /// Give up the snapshot and RNG.
    pub fn into_parts(self) -> (GameState, R) {
        (self.state, self.rng)
    }
}
