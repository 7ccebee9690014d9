//! Deterministic Simulation Testing for the ordered set
//!
//! Seeded random operation sequences applied to a `SortedSet<i64>` and a
//! `BTreeSet<i64>` model in lockstep, with invariant and model-equivalence
//! checks after every operation:
//! - Deterministic operation generation and level selection
//! - Seed-based reproducibility for debugging
//! - Batch runners over seed ranges with a human-readable summary
//!
//! ## Usage
//!
//! ```rust,ignore
//! for seed in 0..100 {
//!     let mut harness = SortedSetDstHarness::with_seed(seed);
//!     harness.run(500);
//!     assert!(harness.result().is_success(), "Seed {} failed", seed);
//! }
//! ```

use std::collections::BTreeSet;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::data::{DeterministicLevelRng, SortedSet, DEFAULT_MAX_LEVEL, DEFAULT_P};

/// Configuration for ordered set DST
#[derive(Debug, Clone)]
pub struct SortedSetDstConfig {
    /// Random seed for reproducibility
    pub seed: u64,
    /// Values are drawn from `0..value_range` (smaller range = more
    /// duplicates and hits)
    pub value_range: i64,
    /// Probability of a remove operation
    pub remove_prob: f64,
    /// Probability of a read-only probe (contains/ceiling/floor/range)
    pub probe_prob: f64,
    /// Level ceiling handed to the set under test
    pub max_level: usize,
    /// Promotion probability handed to the set under test
    pub p: f64,
}

impl Default for SortedSetDstConfig {
    fn default() -> Self {
        SortedSetDstConfig {
            seed: 0,
            value_range: 1000,
            remove_prob: 0.2,
            probe_prob: 0.2,
            max_level: DEFAULT_MAX_LEVEL,
            p: DEFAULT_P,
        }
    }
}

impl SortedSetDstConfig {
    /// Standard configuration with given seed
    pub fn new(seed: u64) -> Self {
        SortedSetDstConfig {
            seed,
            ..Default::default()
        }
    }

    /// Small value range: frequent duplicates and remove hits
    pub fn small_range(seed: u64) -> Self {
        SortedSetDstConfig {
            seed,
            value_range: 50,
            remove_prob: 0.4,
            ..Default::default()
        }
    }

    /// Large value range: mostly fresh inserts
    pub fn large_range(seed: u64) -> Self {
        SortedSetDstConfig {
            seed,
            value_range: 100_000,
            remove_prob: 0.05,
            ..Default::default()
        }
    }

    /// Shallow structure: low level ceiling and promotion probability, so
    /// the level cap is hit constantly
    pub fn shallow(seed: u64) -> Self {
        SortedSetDstConfig {
            seed,
            max_level: 4,
            p: 0.25,
            ..Default::default()
        }
    }
}

/// Operation type for failure context
#[derive(Debug, Clone)]
pub enum SortedSetOp {
    Insert(i64),
    Remove(i64),
    Probe(i64),
}

/// Result of an ordered set DST run
#[derive(Debug, Clone)]
pub struct SortedSetDstResult {
    /// Seed used
    pub seed: u64,
    /// Total operations executed
    pub total_operations: u64,
    /// Inserts of fresh values
    pub inserts: u64,
    /// Inserts rejected as duplicates
    pub duplicates: u64,
    /// Remove operations
    pub removes: u64,
    /// Read-only probes
    pub probes: u64,
    /// Invariant violations found (with operation context)
    pub invariant_violations: Vec<String>,
    /// Last operation before failure (if any)
    pub last_op: Option<SortedSetOp>,
}

impl SortedSetDstResult {
    pub fn new(seed: u64) -> Self {
        SortedSetDstResult {
            seed,
            total_operations: 0,
            inserts: 0,
            duplicates: 0,
            removes: 0,
            probes: 0,
            invariant_violations: Vec::new(),
            last_op: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.invariant_violations.is_empty()
    }

    pub fn summary(&self) -> String {
        format!(
            "Seed {}: {} ops ({} inserts, {} duplicates, {} removes, {} probes), {} violations",
            self.seed,
            self.total_operations,
            self.inserts,
            self.duplicates,
            self.removes,
            self.probes,
            self.invariant_violations.len()
        )
    }
}

/// DST harness driving a `SortedSet<i64>` against a `BTreeSet<i64>` model
pub struct SortedSetDstHarness {
    config: SortedSetDstConfig,
    rng: ChaCha8Rng,
    set: SortedSet<i64, DeterministicLevelRng>,
    model: BTreeSet<i64>,
    result: SortedSetDstResult,
}

impl SortedSetDstHarness {
    pub fn new(config: SortedSetDstConfig) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        let set = SortedSet::with_rng(
            config.max_level,
            config.p,
            DeterministicLevelRng::new(config.seed),
        );
        SortedSetDstHarness {
            result: SortedSetDstResult::new(config.seed),
            rng,
            set,
            model: BTreeSet::new(),
            config,
        }
    }

    /// Create with just a seed (uses default config)
    pub fn with_seed(seed: u64) -> Self {
        Self::new(SortedSetDstConfig::new(seed))
    }

    fn random_value(&mut self) -> i64 {
        self.rng.gen_range(0..self.config.value_range)
    }

    /// Run a single random operation
    fn run_single_op(&mut self) {
        let roll: f64 = self.rng.gen();

        if roll < self.config.remove_prob {
            let value = self.random_value();
            self.result.last_op = Some(SortedSetOp::Remove(value));
            self.result.removes += 1;

            let ours = self.set.remove(&value);
            let models = self.model.remove(&value);
            if ours != models {
                self.result.invariant_violations.push(format!(
                    "remove({}) disagreed with model: set={}, model={}",
                    value, ours, models
                ));
            }
        } else if roll < self.config.remove_prob + self.config.probe_prob {
            let value = self.random_value();
            self.result.last_op = Some(SortedSetOp::Probe(value));
            self.result.probes += 1;
            self.probe(value);
        } else {
            let value = self.random_value();
            self.result.last_op = Some(SortedSetOp::Insert(value));

            let ours = self.set.insert(value);
            let models = self.model.insert(value);
            if ours {
                self.result.inserts += 1;
            } else {
                self.result.duplicates += 1;
            }
            if ours != models {
                self.result.invariant_violations.push(format!(
                    "insert({}) disagreed with model: set={}, model={}",
                    value, ours, models
                ));
            }
        }

        self.result.total_operations += 1;

        // Verify invariants after each operation
        if let Err(violation) = self.check_invariants() {
            self.result.invariant_violations.push(format!(
                "Op #{}: {:?} - {}",
                self.result.total_operations, self.result.last_op, violation
            ));
        }
    }

    /// Read-only agreement checks around one probe value
    fn probe(&mut self, value: i64) {
        if self.set.contains(&value) != self.model.contains(&value) {
            self.result
                .invariant_violations
                .push(format!("contains({}) disagreed with model", value));
            return;
        }

        let ceiling = self.set.ceiling(&value).copied();
        let model_ceiling = self.model.range(value..).next().copied();
        if ceiling != model_ceiling {
            self.result.invariant_violations.push(format!(
                "ceiling({}) disagreed: set={:?}, model={:?}",
                value, ceiling, model_ceiling
            ));
            return;
        }

        let floor = self.set.floor(&value).copied();
        let model_floor = self.model.range(..=value).next_back().copied();
        if floor != model_floor {
            self.result.invariant_violations.push(format!(
                "floor({}) disagreed: set={:?}, model={:?}",
                value, floor, model_floor
            ));
            return;
        }

        let hi = value + self.config.value_range / 10 + 1;
        let ours: Vec<i64> = self.set.range(&value, &hi).copied().collect();
        let models: Vec<i64> = self.model.range(value..=hi).copied().collect();
        if ours != models {
            self.result.invariant_violations.push(format!(
                "range({}, {}) disagreed: set has {} values, model {}",
                value,
                hi,
                ours.len(),
                models.len()
            ));
        }
    }

    /// Check all invariants against the model
    fn check_invariants(&self) -> Result<(), String> {
        // Invariant 1: lengths agree
        if self.set.len() != self.model.len() {
            return Err(format!(
                "Length mismatch: set={}, model={}",
                self.set.len(),
                self.model.len()
            ));
        }

        // Invariant 2: full ordered traversal agrees with the model
        let ours: Vec<i64> = self.set.iter().copied().collect();
        let models: Vec<i64> = self.model.iter().copied().collect();
        if ours != models {
            return Err(format!(
                "Traversal mismatch: set yielded {} values, model {}",
                ours.len(),
                models.len()
            ));
        }

        // Invariant 3: endpoints agree
        if self.set.first() != self.model.iter().next() {
            return Err("first() disagreed with model minimum".to_string());
        }
        if self.set.last() != self.model.iter().next_back() {
            return Err("last() disagreed with model maximum".to_string());
        }

        // Invariant 4: the active level never exceeds the ceiling
        if self.set.active_level() > self.config.max_level {
            return Err(format!(
                "Active level {} exceeds max_level {}",
                self.set.active_level(),
                self.config.max_level
            ));
        }

        Ok(())
    }

    /// Run specified number of operations
    pub fn run(&mut self, operations: usize) {
        for _ in 0..operations {
            self.run_single_op();

            // Stop early if we hit a violation
            if !self.result.invariant_violations.is_empty() {
                break;
            }
        }
    }

    /// Get the result
    pub fn result(&self) -> &SortedSetDstResult {
        &self.result
    }

    /// Get the set for inspection
    pub fn set(&self) -> &SortedSet<i64, DeterministicLevelRng> {
        &self.set
    }
}

/// Run a batch of DST tests with different seeds
pub fn run_batch(
    start_seed: u64,
    num_seeds: usize,
    ops_per_seed: usize,
    config_fn: fn(u64) -> SortedSetDstConfig,
) -> Vec<SortedSetDstResult> {
    (0..num_seeds)
        .map(|i| {
            let seed = start_seed + i as u64;
            let config = config_fn(seed);
            let mut harness = SortedSetDstHarness::new(config);
            harness.run(ops_per_seed);
            harness.result().clone()
        })
        .collect()
}

/// Summarize batch results
pub fn summarize(results: &[SortedSetDstResult]) -> String {
    let total = results.len();
    let passed = results.iter().filter(|r| r.is_success()).count();
    let failed = total - passed;
    let total_ops: u64 = results.iter().map(|r| r.total_operations).sum();

    let mut summary = format!(
        "Ordered Set DST Summary\n\
         =======================\n\
         Seeds: {} total, {} passed, {} failed\n\
         Total operations: {}\n",
        total, passed, failed, total_ops
    );

    if failed > 0 {
        summary.push_str("\nFailed seeds:\n");
        for result in results.iter().filter(|r| !r.is_success()) {
            summary.push_str(&format!("  Seed {}: {}\n", result.seed, result.summary()));
            for violation in &result.invariant_violations {
                summary.push_str(&format!("    - {}\n", violation));
            }
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_is_reproducible() {
        let mut a = SortedSetDstHarness::with_seed(42);
        let mut b = SortedSetDstHarness::with_seed(42);
        a.run(500);
        b.run(500);

        assert_eq!(a.result().inserts, b.result().inserts);
        assert_eq!(a.result().removes, b.result().removes);
        assert_eq!(a.result().probes, b.result().probes);

        let left: Vec<i64> = a.set().iter().copied().collect();
        let right: Vec<i64> = b.set().iter().copied().collect();
        assert_eq!(left, right);
    }

    #[test]
    fn test_quick_batch_passes() {
        let results = run_batch(0, 10, 200, SortedSetDstConfig::new);
        let summary = summarize(&results);
        println!("{}", summary);

        let passed = results.iter().filter(|r| r.is_success()).count();
        assert_eq!(passed, 10, "All 10 seeds should pass");
    }

    #[test]
    fn test_quick_small_range_batch_passes() {
        let results = run_batch(500, 10, 200, SortedSetDstConfig::small_range);
        let passed = results.iter().filter(|r| r.is_success()).count();
        assert_eq!(passed, 10, "All 10 small-range seeds should pass");
    }
}
