//! Game leaderboard built on the ordered set
//!
//! Pairs a hash map (O(1) lookup of a player's current score by id) with a
//! `SortedSet` of ranking keys for O(log n) score updates and ordered
//! traversal. Descending rank order comes from keying the ascending set
//! with `(Reverse(score), id)`; the id tiebreak keeps keys unique when
//! players share a score.

use std::cmp::Reverse;

use ahash::AHashMap;
use tracing::trace;

use super::skiplist::SortedSet;

/// Ranking key: descending score, ascending id among ties.
type RankKey = (Reverse<i64>, String);

#[derive(Clone, Debug)]
struct Player {
    name: String,
    score: i64,
}

/// A player row as reported by [`Leaderboard::top`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RankedPlayer {
    /// 1-indexed position in descending score order.
    pub rank: usize,
    pub id: String,
    pub name: String,
    pub score: i64,
}

/// Players ranked by descending score.
#[derive(Clone, Debug)]
pub struct Leaderboard {
    /// Current score and display name per player id.
    players: AHashMap<String, Player>,
    /// Ranking keys in rank order.
    board: SortedSet<RankKey>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Leaderboard {
            players: AHashMap::new(),
            board: SortedSet::new(),
        }
    }

    /// Verify all invariants hold for this leaderboard
    #[cfg(debug_assertions)]
    fn verify_invariants(&self) {
        // Invariant 1: players map and ranking set must have same length
        debug_assert_eq!(
            self.players.len(),
            self.board.len(),
            "Invariant violated: players.len() ({}) != board.len() ({})",
            self.players.len(),
            self.board.len()
        );

        // Invariant 2: every player's current ranking key is in the set
        for (id, player) in &self.players {
            debug_assert!(
                self.board.contains(&(Reverse(player.score), id.clone())),
                "Invariant violated: player '{}' with score {} missing from ranking",
                id,
                player.score
            );
        }
    }

    #[cfg(not(debug_assertions))]
    #[inline(always)]
    fn verify_invariants(&self) {}

    /// Record a player's score, replacing any previous one. Returns true
    /// for a new player, false for an update.
    pub fn record_score(&mut self, id: &str, name: &str, score: i64) -> bool {
        use std::collections::hash_map::Entry;

        match self.players.entry(id.to_string()) {
            Entry::Occupied(mut entry) => {
                let old_score = entry.get().score;
                entry.get_mut().name = name.to_string();
                if old_score != score {
                    entry.get_mut().score = score;
                    let key_id = entry.key().clone();
                    // Reposition: drop the stale key, insert the new one
                    self.board.remove(&(Reverse(old_score), key_id.clone()));
                    self.board.insert((Reverse(score), key_id));
                }
                trace!(id, old_score, score, "updated player score");
                self.verify_invariants();
                false
            }
            Entry::Vacant(entry) => {
                let key_id = entry.key().clone();
                entry.insert(Player {
                    name: name.to_string(),
                    score,
                });
                self.board.insert((Reverse(score), key_id));
                trace!(id, score, "added player");
                self.verify_invariants();
                true
            }
        }
    }

    /// Remove a player. Returns true if the player existed.
    pub fn remove_player(&mut self, id: &str) -> bool {
        match self.players.remove(id) {
            Some(player) => {
                self.board.remove(&(Reverse(player.score), id.to_string()));
                trace!(id, "removed player");
                self.verify_invariants();
                true
            }
            None => false,
        }
    }

    /// Current score of a player. O(1)
    pub fn score_of(&self, id: &str) -> Option<i64> {
        self.players.get(id).map(|p| p.score)
    }

    /// 1-indexed rank of a player in descending score order. O(n)
    pub fn rank_of(&self, id: &str) -> Option<usize> {
        let score = self.players.get(id)?.score;
        self.board
            .iter()
            .position(|(Reverse(s), pid)| *s == score && pid.as_str() == id)
            .map(|pos| pos + 1)
    }

    /// The first `k` players in rank order. Returns fewer when the board
    /// holds fewer than `k` players.
    pub fn top(&self, k: usize) -> Vec<RankedPlayer> {
        self.board
            .iter()
            .take(k)
            .enumerate()
            .map(|(i, (Reverse(score), id))| {
                let player = self
                    .players
                    .get(id)
                    .expect("every ranking key tracks a stored player");
                RankedPlayer {
                    rank: i + 1,
                    id: id.clone(),
                    name: player.name.clone(),
                    score: *score,
                }
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

impl Default for Leaderboard {
    fn default() -> Self {
        Self::new()
    }
}
