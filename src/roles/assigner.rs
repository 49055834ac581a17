//! Role assignment.

use log::{debug, info};

use crate::core::{GameSetup, Player, PlayerId, RandomSource, Role, Roster};

/// Deals roles to a validated table.
pub struct RoleAssigner;

impl RoleAssigner {
    /// Build the role pool, shuffle it, and seat players in name order.
    ///
    /// The pool holds every configured special role, padded with villagers
    /// up to the player count. Every `GameSetup`, built or deserialized, has
    /// passed validation, so the specials always fit.
    pub fn assign<R: RandomSource>(setup: &GameSetup, rng: &mut R) -> Roster {
        let player_count = setup.player_count();
        let mut pool = setup.roles().pool();
        let padding = player_count.saturating_sub(pool.len());
        pool.extend(std::iter::repeat(Role::Villager).take(padding));
        rng.shuffle(&mut pool);

        debug!("dealing {} roles to {} seats", pool.len(), player_count);

        let roster = Roster::new(
            setup
                .names()
                .iter()
                .zip(pool)
                // Seats are numbered by `Roster::new`
                .map(|(name, role)| Player::new(PlayerId::new(0), name.clone(), role)),
        );

        info!(
            "roles dealt: {} players, {} werewolves",
            roster.len(),
            roster.iter().filter(|p| p.role.is_werewolf()).count()
        );
        roster
    }
}
