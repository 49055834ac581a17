//! Table configuration: who sits down and which roles are dealt.
//!
//! The setup screens edit a `RoleCounts` and a list of raw names. When the
//! table presses start, `GameSetup::new` validates both; only a validated
//! setup can reach the role assigner.
//!
//! ```
//! use werewolf_engine::core::{GameSetup, Role, RoleCounts};
//!
//! let roles = RoleCounts::default().with(Role::Doctor, 1);
//! let setup = GameSetup::new(["Ada", " Bea ", "", "Cid"], roles).unwrap();
//! assert_eq!(setup.names(), ["Ada", "Bea", "Cid"]);
//! ```

use serde::{Deserialize, Serialize};

use super::role::Role;
use crate::error::SetupError;

/// Fewest players a game can start with.
pub const MIN_PLAYERS: usize = 3;

/// Most seats the setup screen offers.
pub const MAX_PLAYERS: usize = 12;

/// The night record holds a single avenger mark.
pub const MAX_AVENGERS: usize = 1;

/// How many of each special role to deal.
///
/// Villagers are never counted here; they fill the remaining seats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleCounts {
    pub werewolf: usize,
    pub seer: usize,
    pub doctor: usize,
    pub avenger: usize,
    pub witch: usize,
    pub hunter: usize,
}

impl Default for RoleCounts {
    /// One werewolf and one seer.
    fn default() -> Self {
        Self {
            werewolf: 1,
            seer: 1,
            doctor: 0,
            avenger: 0,
            witch: 0,
            hunter: 0,
        }
    }
}

impl RoleCounts {
    #[must_use]
    pub fn get(&self, role: Role) -> usize {
        match role {
            Role::Werewolf => self.werewolf,
            Role::Seer => self.seer,
            Role::Doctor => self.doctor,
            Role::Avenger => self.avenger,
            Role::Witch => self.witch,
            Role::Hunter => self.hunter,
            Role::Villager => 0,
        }
    }

    fn slot(&mut self, role: Role) -> Option<&mut usize> {
        match role {
            Role::Werewolf => Some(&mut self.werewolf),
            Role::Seer => Some(&mut self.seer),
            Role::Doctor => Some(&mut self.doctor),
            Role::Avenger => Some(&mut self.avenger),
            Role::Witch => Some(&mut self.witch),
            Role::Hunter => Some(&mut self.hunter),
            Role::Villager => None,
        }
    }

    /// Set a role's count. Villager is ignored.
    #[must_use]
    pub fn with(mut self, role: Role, count: usize) -> Self {
        if let Some(slot) = self.slot(role) {
            *slot = count;
        }
        self
    }

    /// Total special roles configured.
    #[must_use]
    pub fn total(&self) -> usize {
        Role::SPECIAL.iter().map(|&r| self.get(r)).sum()
    }

    /// One `+`/`-` press on the setup screen.
    ///
    /// Increases are refused once the total reaches `player_count`, and
    /// never go past `MAX_AVENGERS` avengers.
    /// Decreases stop at 1 for werewolves and 0 for everything else.
    /// Returns whether the count changed.
    pub fn adjust(&mut self, role: Role, delta: i32, player_count: usize) -> bool {
        if delta > 0 && self.total() >= player_count {
            return false;
        }
        let floor = usize::from(role.is_werewolf());
        let ceiling = Self::limit(role);
        let Some(slot) = self.slot(role) else {
            return false;
        };
        let next = (*slot as i64 + i64::from(delta)).max(floor as i64) as usize;
        let next = next.min(ceiling.max(*slot));
        let changed = next != *slot;
        *slot = next;
        changed
    }

    /// Most copies of `role` a table may deal.
    #[must_use]
    pub const fn limit(role: Role) -> usize {
        match role {
            Role::Avenger => MAX_AVENGERS,
            _ => MAX_PLAYERS,
        }
    }

    /// Special roles in pool order, before padding.
    #[must_use]
    pub fn pool(&self) -> Vec<Role> {
        Role::SPECIAL
            .iter()
            .flat_map(|&role| std::iter::repeat(role).take(self.get(role)))
            .collect()
    }
}

/// Names and roles for one game, already validated.
///
/// Deserializing runs the same checks as `GameSetup::new`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameSetup")]
pub struct GameSetup {
    names: Vec<String>,
    roles: RoleCounts,
}

#[derive(Deserialize)]
struct RawGameSetup {
    names: Vec<String>,
    roles: RoleCounts,
}

impl TryFrom<RawGameSetup> for GameSetup {
    type Error = SetupError;

    fn try_from(raw: RawGameSetup) -> Result<Self, Self::Error> {
        Self::new(raw.names, raw.roles)
    }
}

impl GameSetup {
    /// Trim names, drop blanks, and validate against the role counts.
    ///
    /// Duplicate names are allowed.
    pub fn new<I, S>(names: I, roles: RoleCounts) -> Result<Self, SetupError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: Vec<String> = names
            .into_iter()
            .map(|n| n.as_ref().trim().to_string())
            .filter(|n| !n.is_empty())
            .collect();

        if names.len() < MIN_PLAYERS {
            return Err(SetupError::TooFewPlayers {
                found: names.len(),
                min: MIN_PLAYERS,
            });
        }
        if names.len() > MAX_PLAYERS {
            return Err(SetupError::TooManyPlayers {
                found: names.len(),
                max: MAX_PLAYERS,
            });
        }
        if roles.werewolf == 0 {
            return Err(SetupError::MissingWerewolf);
        }
        if let Some(&role) = Role::SPECIAL
            .iter()
            .find(|&&role| roles.get(role) > RoleCounts::limit(role))
        {
            return Err(SetupError::RoleLimit {
                role,
                max: RoleCounts::limit(role),
            });
        }
        if roles.total() > names.len() {
            return Err(SetupError::RoleOverflow {
                roles: roles.total(),
                players: names.len(),
            });
        }

        Ok(Self { names, roles })
    }

    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    #[must_use]
    pub fn roles(&self) -> &RoleCounts {
        &self.roles
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.names.len()
    }
}
