//! Night resolution.
//!
//! Order of operations:
//! 1. Werewolf kill: the single distinct target, or a uniform pick among
//!    the distinct targets when the pack split. No votes, no kill.
//! 2. The doctor's protection cancels the werewolf kill only.
//! 3. The witch's kill always lands.
//! 4. If the avenger (the first-seated one, should a hand-built roster hold
//!    more) was alive at dusk, is among the dead, and has a mark, the marked
//!    player dies too. At most once per night.
//! 5. Deaths are applied, then the win condition is checked.

use log::{debug, info};

use crate::core::{Ballots, NightActions, PlayerId, RandomSource, Role, Roster, Winner};
use crate::rules::WinEvaluator;

pub(crate) const QUIET_NIGHT: &str = "The sun rises on an untouched village. For now.";

/// Everything a night changed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NightOutcome {
    pub players: Roster,
    /// Victims in death order. May repeat an id.
    pub deaths: Vec<PlayerId>,
    /// Set when the avenger took their mark along.
    pub avenger_victim: Option<PlayerId>,
    pub winner: Option<Winner>,
    pub summary: String,
}

pub struct NightResolver;

impl NightResolver {
    /// Apply one night's actions to the roster.
    pub fn resolve<R: RandomSource>(
        players: &Roster,
        actions: &NightActions,
        rng: &mut R,
    ) -> NightOutcome {
        let mut deaths = Vec::new();

        match Self::werewolf_target(&actions.werewolf_votes, rng) {
            Some(target) if actions.doctor_protect == Some(target) => {
                debug!("doctor saved {target}");
            }
            Some(target) => deaths.push(target),
            None => {}
        }
        if let Some(target) = actions.witch_kill {
            deaths.push(target);
        }

        let avenger_falls = players
            .iter()
            .find(|p| p.role == Role::Avenger)
            .is_some_and(|p| p.is_alive && deaths.contains(&p.id));
        let avenger_victim = actions.avenger_mark.filter(|_| avenger_falls);
        if let Some(mark) = avenger_victim {
            deaths.push(mark);
        }

        let next = players.with_deaths(&deaths);
        let winner = WinEvaluator::evaluate(&next);
        let summary = Self::summary(players, &deaths, avenger_victim, winner);

        info!("night resolved: {} death(s), winner {:?}", deaths.len(), winner);

        NightOutcome {
            players: next,
            deaths,
            avenger_victim,
            winner,
            summary,
        }
    }

    /// The pack's kill. Each distinct target carries equal weight in a
    /// split, however many wolves picked it.
    pub fn werewolf_target<R: RandomSource>(
        votes: &Ballots<PlayerId>,
        rng: &mut R,
    ) -> Option<PlayerId> {
        let targets = votes.distinct_targets();
        match targets.len() {
            0 => None,
            1 => Some(targets[0]),
            n => {
                let pick = targets[rng.pick_index(n)];
                debug!("pack split across {n} targets, tie-break picked {pick}");
                Some(pick)
            }
        }
    }

    fn summary(
        players: &Roster,
        deaths: &[PlayerId],
        avenger_victim: Option<PlayerId>,
        winner: Option<Winner>,
    ) -> String {
        let mut msg = if deaths.is_empty() {
            QUIET_NIGHT.to_string()
        } else {
            let names: Vec<String> = deaths.iter().map(|&id| players.name_of(id)).collect();
            format!(
                "The morning is red: {} did not survive the darkness.",
                names.join(", ")
            )
        };
        if let Some(mark) = avenger_victim {
            msg.push_str(&format!(
                " The dying Avenger dragged {} into the abyss.",
                players.name_of(mark)
            ));
        }
        if let Some(winner) = winner {
            msg.push(' ');
            msg.push_str(&game_over_line(winner));
        }
        msg
    }
}

/// Closing sentence for a finished game.
pub(crate) fn game_over_line(winner: Winner) -> String {
    let verdict = match winner {
        Winner::Villagers => "The village breathes",
        Winner::Werewolves => "The werewolves have won",
    };
    format!("The last candle has gone out. {verdict}.")
}
