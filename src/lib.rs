//! skipset: a probabilistic ordered set
//!
//! A skip list keeps a dynamic set of unique, totally ordered values with
//! expected O(log n) insert, remove, and search, and O(log n + k) range
//! queries, without any rebalancing. The crate also ships a leaderboard
//! built on the set and a deterministic simulation harness for it.
//!
//! ```
//! use skipset::SortedSet;
//!
//! let mut set = SortedSet::new();
//! set.insert(3);
//! set.insert(1);
//! set.insert(2);
//!
//! let values: Vec<i32> = set.iter().copied().collect();
//! assert_eq!(values, vec![1, 2, 3]);
//! assert_eq!(set.ceiling(&2), Some(&2));
//! ```

pub mod data;
pub mod sorted_set_dst;

pub use data::{
    DeterministicLevelRng, Leaderboard, LevelRng, RankedPlayer, SortedSet, ThreadLevelRng,
};
