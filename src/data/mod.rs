//! Core data structures
//!
//! This module provides the crate's types:
//! - `SortedSet`: probabilistic ordered set backed by a skip list
//! - `LevelRng`: injected randomness capability for level selection,
//!   with thread-local (`ThreadLevelRng`) and seeded
//!   (`DeterministicLevelRng`) implementations
//! - `Leaderboard`: players ranked by descending score on top of
//!   `SortedSet`

mod leaderboard;
mod rng;
mod skiplist;

// Re-export all public types
pub use leaderboard::{Leaderboard, RankedPlayer};
pub use rng::{DeterministicLevelRng, LevelRng, ThreadLevelRng};
pub use skiplist::{Iter, Range, SortedSet, DEFAULT_MAX_LEVEL, DEFAULT_P};
