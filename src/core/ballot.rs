//! Insertion-ordered ballots.
//!
//! Both the werewolves' night votes and the day votes are `voter -> target`
//! maps where enumeration order matters: night votes list their distinct
//! targets in first-vote order before the tie-break, and the day tally keeps
//! first-vote order among equal counts. A voter who votes again keeps their
//! original position.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::PlayerId;

/// Who cast a day vote.
///
/// The hot-seat table votes as one `Table`; `Player` exists for tables that
/// collect one ballot per seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Voter {
    Table,
    Player(PlayerId),
}

/// `voter -> target` map in first-vote order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ballots<K> {
    entries: SmallVec<[(K, PlayerId); 8]>,
}

impl<K> Default for Ballots<K> {
    fn default() -> Self {
        Self {
            entries: SmallVec::new(),
        }
    }
}

impl<K: PartialEq> Ballots<K> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a vote, replacing the voter's previous choice in place.
    pub fn cast(&mut self, voter: K, target: PlayerId) {
        match self.entries.iter_mut().find(|(v, _)| *v == voter) {
            Some(entry) => entry.1 = target,
            None => self.entries.push((voter, target)),
        }
    }

    #[must_use]
    pub fn get(&self, voter: &K) -> Option<PlayerId> {
        self.entries
            .iter()
            .find(|(v, _)| v == voter)
            .map(|&(_, target)| target)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, PlayerId)> {
        self.entries.iter().map(|(v, t)| (v, *t))
    }

    /// Distinct targets in first-vote order.
    #[must_use]
    pub fn distinct_targets(&self) -> SmallVec<[PlayerId; 8]> {
        let mut targets = SmallVec::new();
        for &(_, target) in &self.entries {
            if !targets.contains(&target) {
                targets.push(target);
            }
        }
        targets
    }

    /// Votes per target, targets in first-vote order.
    #[must_use]
    pub fn tally(&self) -> Vec<(PlayerId, usize)> {
        let mut slots: FxHashMap<PlayerId, usize> = FxHashMap::default();
        let mut counts: Vec<(PlayerId, usize)> = Vec::new();
        for &(_, target) in &self.entries {
            let slot = *slots.entry(target).or_insert_with(|| {
                counts.push((target, 0));
                counts.len() - 1
            });
            counts[slot].1 += 1;
        }
        counts
    }
}
