//! Day vote resolution.
//!
//! Plurality lynch. Unlike the werewolves' split at night, a tied day vote
//! is not randomized: the target that received its first vote earliest
//! wins the tie.

use log::info;

use crate::core::{Ballots, PlayerId, Role, Roster, Voter, Winner};
use crate::night::resolver::game_over_line;
use crate::rules::WinEvaluator;

pub(crate) const NO_VERDICT: &str = "No verdict. The crowd is undecided, but time runs on.";

/// Everything a day vote changed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoteOutcome {
    pub players: Roster,
    pub lynched: Option<PlayerId>,
    /// Set when a lynched avenger took their mark along.
    pub avenger_victim: Option<PlayerId>,
    pub winner: Option<Winner>,
    pub summary: String,
}

pub struct VoteResolver;

impl VoteResolver {
    /// Tally `votes` and lynch the plurality target, if any.
    ///
    /// `avenger_mark` is the standing mark carried over from the night.
    #[must_use]
    pub fn resolve(
        players: &Roster,
        votes: &Ballots<Voter>,
        avenger_mark: Option<PlayerId>,
    ) -> VoteOutcome {
        let Some(target) = Self::plurality(votes) else {
            info!("day vote: no ballots cast");
            return VoteOutcome {
                players: players.clone(),
                lynched: None,
                avenger_victim: None,
                winner: None,
                summary: NO_VERDICT.to_string(),
            };
        };

        let mut deaths = vec![target];
        let lynched_avenger = players.get(target).is_some_and(|p| p.role == Role::Avenger);
        let avenger_victim = avenger_mark.filter(|_| lynched_avenger);
        if let Some(mark) = avenger_victim {
            deaths.push(mark);
        }

        let next = players.with_deaths(&deaths);
        let winner = WinEvaluator::evaluate(&next);

        let mut summary = format!("The village has executed {}.", players.name_of(target));
        if let Some(mark) = avenger_victim {
            summary.push_str(&format!(" The Avenger took {} to the grave.", players.name_of(mark)));
        }
        if let Some(winner) = winner {
            summary.push(' ');
            summary.push_str(&game_over_line(winner));
        }

        info!("day vote: lynched {target}, winner {winner:?}");

        VoteOutcome {
            players: next,
            lynched: Some(target),
            avenger_victim,
            winner,
            summary,
        }
    }

    /// Most-voted target; ties go to the earliest first-voted target.
    #[must_use]
    pub fn plurality(votes: &Ballots<Voter>) -> Option<PlayerId> {
        let mut tally = votes.tally();
        // Stable: equal counts keep first-vote order.
        tally.sort_by(|a, b| b.1.cmp(&a.1));
        tally.first().map(|&(target, _)| target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Player;

    fn p(i: u8) -> PlayerId {
        PlayerId::new(i)
    }

    // 0 wolf, 1 avenger, 2 villager, 3 villager, 4 seer
    fn roster() -> Roster {
        Roster::new(
            [
                ("Ada", Role::Werewolf),
                ("Bea", Role::Avenger),
                ("Cid", Role::Villager),
                ("Dan", Role::Villager),
                ("Eve", Role::Seer),
            ]
            .into_iter()
            .map(|(name, role)| Player::new(p(0), name, role)),
        )
    }

    fn ballots(votes: &[(Voter, u8)]) -> Ballots<Voter> {
        let mut b = Ballots::new();
        for &(voter, target) in votes {
            b.cast(voter, p(target));
        }
        b
    }

    #[test]
    fn test_no_votes_no_lynch() {
        let out = VoteResolver::resolve(&roster(), &Ballots::new(), Some(p(2)));
        assert_eq!(out.lynched, None);
        assert_eq!(out.players, roster());
        assert_eq!(out.summary, NO_VERDICT);
    }

    #[test]
    fn test_table_vote_lynches() {
        let out = VoteResolver::resolve(&roster(), &ballots(&[(Voter::Table, 2)]), None);
        assert_eq!(out.lynched, Some(p(2)));
        assert!(!out.players.is_alive(p(2)));
        assert_eq!(out.summary, "The village has executed Cid.");
        assert_eq!(out.winner, None);
    }

    #[test]
    fn test_plurality_wins() {
        let votes = ballots(&[
            (Voter::Player(p(0)), 3),
            (Voter::Player(p(1)), 2),
            (Voter::Player(p(2)), 2),
        ]);
        assert_eq!(VoteResolver::plurality(&votes), Some(p(2)));
    }

    #[test]
    fn test_tie_goes_to_first_voted() {
        let votes = ballots(&[
            (Voter::Player(p(0)), 3),
            (Voter::Player(p(1)), 2),
            (Voter::Player(p(2)), 2),
            (Voter::Player(p(3)), 3),
        ]);
        // Deterministic: same answer every time.
        for _ in 0..10 {
            assert_eq!(VoteResolver::plurality(&votes), Some(p(3)));
        }
    }

    #[test]
    fn test_lynched_avenger_takes_mark() {
        let out = VoteResolver::resolve(&roster(), &ballots(&[(Voter::Table, 1)]), Some(p(2)));
        assert_eq!(out.avenger_victim, Some(p(2)));
        assert!(!out.players.is_alive(p(1)));
        assert!(!out.players.is_alive(p(2)));
        assert_eq!(
            out.summary,
            "The village has executed Bea. The Avenger took Cid to the grave."
        );
    }

    #[test]
    fn test_mark_ignored_when_someone_else_lynched() {
        let out = VoteResolver::resolve(&roster(), &ballots(&[(Voter::Table, 3)]), Some(p(2)));
        assert_eq!(out.avenger_victim, None);
        assert!(out.players.is_alive(p(2)));
    }

    #[test]
    fn test_lynching_last_wolf_ends_game() {
        let out = VoteResolver::resolve(&roster(), &ballots(&[(Voter::Table, 0)]), None);
        assert_eq!(out.winner, Some(Winner::Villagers));
        assert!(out.summary.ends_with("The last candle has gone out. The village breathes."));
    }
}
