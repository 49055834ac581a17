//! Property tests for dealing, night resolution, day votes and the win
//! condition.

mod common;

use common::{p, FixedPick};
use proptest::prelude::*;
use werewolf_engine::core::{
    Ballots, GameRng, GameSetup, NightActions, Player, PlayerId, Role, RoleCounts, Roster, Voter,
    Winner, MAX_AVENGERS, MAX_PLAYERS, MIN_PLAYERS,
};
use werewolf_engine::day::VoteResolver;
use werewolf_engine::night::NightResolver;
use werewolf_engine::roles::RoleAssigner;
use werewolf_engine::rules::WinEvaluator;

// =============================================================================
// Generators
// =============================================================================

/// A table size plus role counts that fit it, werewolf at least one.
fn valid_setup() -> impl Strategy<Value = GameSetup> {
    (MIN_PLAYERS..=MAX_PLAYERS, prop::array::uniform6(0usize..=MAX_PLAYERS)).prop_map(
        |(players, raw)| {
            let mut left = players;
            let mut take = |want: usize, floor: usize| {
                let n = want.max(floor).min(left);
                left -= n;
                n
            };
            let roles = RoleCounts {
                werewolf: take(raw[0], 1),
                seer: take(raw[1], 0),
                doctor: take(raw[2], 0),
                avenger: take(raw[3].min(MAX_AVENGERS), 0),
                witch: take(raw[4], 0),
                hunter: take(raw[5], 0),
            };
            let names: Vec<String> = (0..players).map(|i| format!("Player {i}")).collect();
            GameSetup::new(names, roles).unwrap()
        },
    )
}

fn any_role() -> impl Strategy<Value = Role> {
    prop::sample::select(vec![
        Role::Villager,
        Role::Werewolf,
        Role::Seer,
        Role::Doctor,
        Role::Avenger,
        Role::Witch,
        Role::Hunter,
    ])
}

/// Up to twelve seats with arbitrary roles and life.
fn any_roster() -> impl Strategy<Value = Roster> {
    prop::collection::vec((any_role(), any::<bool>()), 1..=MAX_PLAYERS).prop_map(|seats| {
        let dead: Vec<PlayerId> = seats
            .iter()
            .enumerate()
            .filter(|(_, (_, alive))| !alive)
            .map(|(i, _)| p(i as u8))
            .collect();
        let roster = Roster::new(
            seats
                .iter()
                .enumerate()
                .map(|(i, &(role, _))| Player::new(p(0), format!("P{i}"), role)),
        );
        roster.with_deaths(&dead)
    })
}

/// Everyone alive: seat 0 wolf, seat 1 doctor, seat 2 avenger, rest villagers.
fn village(size: usize) -> Roster {
    Roster::new((0..size).map(|i| {
        let role = match i {
            0 => Role::Werewolf,
            1 => Role::Doctor,
            2 => Role::Avenger,
            _ => Role::Villager,
        };
        Player::new(p(0), format!("P{i}"), role)
    }))
}

// =============================================================================
// Dealing
// =============================================================================

proptest! {
    /// Every seat gets exactly one role and the configured counts survive
    /// the shuffle.
    #[test]
    fn prop_assign_deals_configured_pool(setup in valid_setup(), seed in any::<u64>()) {
        let roster = RoleAssigner::assign(&setup, &mut GameRng::new(seed));

        prop_assert_eq!(roster.len(), setup.player_count());
        for &role in Role::SPECIAL.iter() {
            let dealt = roster.iter().filter(|p| p.role == role).count();
            prop_assert_eq!(dealt, setup.roles().get(role), "count of {}", role);
        }
        prop_assert!(roster.iter().any(|p| p.role.is_werewolf()));

        for (seat, player) in roster.iter().enumerate() {
            prop_assert_eq!(player.id, p(seat as u8));
            prop_assert_eq!(&player.name, &setup.names()[seat]);
            prop_assert!(player.is_alive);
            prop_assert_eq!(player.has_poison, player.role == Role::Witch);
        }
    }

    /// The same seed always deals the same table.
    #[test]
    fn prop_assign_is_replayable(setup in valid_setup(), seed in any::<u64>()) {
        let first = RoleAssigner::assign(&setup, &mut GameRng::new(seed));
        let second = RoleAssigner::assign(&setup, &mut GameRng::new(seed));
        prop_assert_eq!(first, second);
    }
}

// =============================================================================
// Win condition
// =============================================================================

proptest! {
    #[test]
    fn prop_win_matches_census(roster in any_roster()) {
        let wolves = roster.alive().filter(|p| p.role == Role::Werewolf).count();
        let others = roster.alive().count() - wolves;

        let expected = if wolves == 0 {
            Some(Winner::Villagers)
        } else if wolves >= others {
            Some(Winner::Werewolves)
        } else {
            None
        };
        prop_assert_eq!(WinEvaluator::evaluate(&roster), expected);
    }
}

// =============================================================================
// Night
// =============================================================================

proptest! {
    /// A split pack always lands on one of its own picks.
    #[test]
    fn prop_wolf_kill_is_a_voted_target(
        votes in prop::collection::vec((0u8..12, 0u8..12), 0..8),
        seed in any::<u64>(),
    ) {
        let mut ballots = Ballots::new();
        for &(voter, target) in &votes {
            ballots.cast(p(voter), p(target));
        }
        let distinct = ballots.distinct_targets();

        match NightResolver::werewolf_target(&ballots, &mut GameRng::new(seed)) {
            Some(target) => prop_assert!(distinct.contains(&target)),
            None => prop_assert!(ballots.is_empty()),
        }
    }

    /// The doctor guarding the pack's only target always saves them.
    #[test]
    fn prop_doctor_blocks_consensus_kill(size in 5usize..=MAX_PLAYERS, target in 1u8..5) {
        let players = village(size);
        let mut actions = NightActions::new();
        actions.werewolf_votes.cast(p(0), p(target));
        actions.doctor_protect = Some(p(target));

        let out = NightResolver::resolve(&players, &actions, &mut FixedPick(0));
        prop_assert!(out.deaths.is_empty());
        prop_assert_eq!(out.players, players);
    }

    /// An unguarded target always dies.
    #[test]
    fn prop_unguarded_target_dies(size in 5usize..=MAX_PLAYERS, target in 1u8..5, guard in 0u8..5) {
        prop_assume!(guard != target);
        let players = village(size);
        let mut actions = NightActions::new();
        actions.werewolf_votes.cast(p(0), p(target));
        actions.doctor_protect = Some(p(guard));

        let out = NightResolver::resolve(&players, &actions, &mut FixedPick(0));
        prop_assert!(!out.players.is_alive(p(target)));
    }

    /// The avenger's mark falls with them, and only with them.
    #[test]
    fn prop_avenger_chain(size in 5usize..=MAX_PLAYERS, victim in 1u8..5, mark in 0u8..5) {
        prop_assume!(mark != 2);
        let players = village(size);
        let mut actions = NightActions::new();
        actions.werewolf_votes.cast(p(0), p(victim));
        actions.avenger_mark = Some(p(mark));

        let out = NightResolver::resolve(&players, &actions, &mut FixedPick(0));
        if victim == 2 {
            prop_assert_eq!(out.avenger_victim, Some(p(mark)));
            prop_assert!(!out.players.is_alive(p(mark)));
        } else {
            prop_assert_eq!(out.avenger_victim, None);
            prop_assert_eq!(out.players.is_alive(p(mark)), mark != victim);
        }
    }
}

// =============================================================================
// Day
// =============================================================================

proptest! {
    /// The lynched player has the top count, and the earliest first vote
    /// among those tied with them.
    #[test]
    fn prop_plurality_is_stable(votes in prop::collection::vec((0u8..12, 0u8..6), 1..12)) {
        let mut ballots = Ballots::new();
        for &(voter, target) in &votes {
            ballots.cast(Voter::Player(p(voter)), p(target));
        }
        let tally = ballots.tally();
        let top = tally.iter().map(|&(_, n)| n).max().unwrap();
        let expected = tally.iter().find(|&&(_, n)| n == top).map(|&(t, _)| t);

        prop_assert_eq!(VoteResolver::plurality(&ballots), expected);
        prop_assert_eq!(VoteResolver::plurality(&ballots), VoteResolver::plurality(&ballots.clone()));
    }
}
