//! Win condition.

use crate::core::{Roster, Winner};

/// Living players split by faction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Census {
    pub wolves: usize,
    pub others: usize,
}

impl Census {
    #[must_use]
    pub fn of(roster: &Roster) -> Self {
        let (wolves, others) = roster
            .alive()
            .fold((0, 0), |(w, o), p| {
                if p.role.is_werewolf() {
                    (w + 1, o)
                } else {
                    (w, o + 1)
                }
            });
        Self { wolves, others }
    }
}

/// Pure win predicate over a roster.
///
/// Run after every event that kills someone, never speculatively.
pub struct WinEvaluator;

impl WinEvaluator {
    /// Villagers win when no wolf lives. Otherwise werewolves win once they
    /// match or outnumber everyone else.
    #[must_use]
    pub fn evaluate(roster: &Roster) -> Option<Winner> {
        let census = Census::of(roster);
        if census.wolves == 0 {
            Some(Winner::Villagers)
        } else if census.wolves >= census.others {
            Some(Winner::Werewolves)
        } else {
            None
        }
    }
}
