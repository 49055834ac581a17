//! Roles and factions.

use serde::{Deserialize, Serialize};

/// A player's secret role.
///
/// `Hunter` can be dealt but has no behaviour attached: it acts as a plain
/// member of the village with no night action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Werewolf,
    Villager,
    Seer,
    Doctor,
    Hunter,
    Avenger,
    Witch,
}

impl Role {
    /// Roles the setup screen lets the table configure, in pool order.
    ///
    /// Villager is absent: villagers pad whatever the specials leave over.
    pub const SPECIAL: [Role; 6] = [
        Role::Werewolf,
        Role::Seer,
        Role::Doctor,
        Role::Avenger,
        Role::Witch,
        Role::Hunter,
    ];

    #[must_use]
    pub const fn is_werewolf(self) -> bool {
        matches!(self, Role::Werewolf)
    }

    /// Does this role pick a target during its night turn?
    #[must_use]
    pub const fn has_night_action(self) -> bool {
        matches!(
            self,
            Role::Werewolf | Role::Seer | Role::Doctor | Role::Witch | Role::Avenger
        )
    }

    /// May this role pick itself as its night target?
    #[must_use]
    pub const fn may_target_self(self) -> bool {
        matches!(self, Role::Doctor | Role::Witch)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Role::Werewolf => "Werewolf",
            Role::Villager => "Villager",
            Role::Seer => "Seer",
            Role::Doctor => "Doctor",
            Role::Hunter => "Hunter",
            Role::Avenger => "Avenger",
            Role::Witch => "Witch",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The faction that won the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Winner {
    Villagers,
    Werewolves,
}

impl std::fmt::Display for Winner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Winner::Villagers => f.write_str("VILLAGERS"),
            Winner::Werewolves => f.write_str("WEREWOLVES"),
        }
    }
}
