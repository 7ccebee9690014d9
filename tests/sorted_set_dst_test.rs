//! Ordered Set Deterministic Simulation Tests
//!
//! Seed-batch tests for SortedSet against a BTreeSet model. These verify
//! that set operations maintain invariants and model agreement under
//! random operation sequences across many seeds.

use skipset::sorted_set_dst::{run_batch, summarize, SortedSetDstConfig, SortedSetDstHarness};

// =============================================================================
// Standard Configuration Tests - 100+ Seeds
// =============================================================================

#[test]
fn test_sorted_set_dst_100_seeds_standard() {
    let results = run_batch(0, 100, 500, SortedSetDstConfig::new);
    let summary = summarize(&results);
    println!("{}", summary);

    let passed = results.iter().filter(|r| r.is_success()).count();
    assert_eq!(
        passed, 100,
        "All 100 seeds should pass with standard config"
    );
}

#[test]
fn test_sorted_set_dst_100_seeds_small_range() {
    // Small value range = constant duplicates and remove hits
    let results = run_batch(1000, 100, 500, SortedSetDstConfig::small_range);
    let summary = summarize(&results);
    println!("{}", summary);

    let passed = results.iter().filter(|r| r.is_success()).count();
    assert_eq!(passed, 100, "All 100 seeds should pass with small range");
}

#[test]
fn test_sorted_set_dst_100_seeds_large_range() {
    // Large value range = mostly fresh inserts, few collisions
    let results = run_batch(2000, 100, 500, SortedSetDstConfig::large_range);
    let summary = summarize(&results);
    println!("{}", summary);

    let passed = results.iter().filter(|r| r.is_success()).count();
    assert_eq!(passed, 100, "All 100 seeds should pass with large range");
}

#[test]
fn test_sorted_set_dst_100_seeds_shallow() {
    // Low level ceiling = the cap is exercised on nearly every insert
    let results = run_batch(3000, 100, 500, SortedSetDstConfig::shallow);
    let summary = summarize(&results);
    println!("{}", summary);

    let passed = results.iter().filter(|r| r.is_success()).count();
    assert_eq!(
        passed, 100,
        "All 100 seeds should pass with a shallow structure"
    );
}

// =============================================================================
// Stress Tests - High Operation Count
// =============================================================================

#[test]
fn test_sorted_set_dst_stress_1000_ops() {
    let mut harness = SortedSetDstHarness::with_seed(42);
    harness.run(1000);
    let result = harness.result();
    println!("Stress 1000 ops: {}", result.summary());
    assert!(result.is_success(), "1000 ops should maintain invariants");
}

#[test]
fn test_sorted_set_dst_stress_5000_ops() {
    let mut harness = SortedSetDstHarness::with_seed(12345);
    harness.run(5000);
    let result = harness.result();
    println!("Stress 5000 ops: {}", result.summary());
    assert!(result.is_success(), "5000 ops should maintain invariants");
}

#[test]
fn test_sorted_set_dst_stress_small_range_2000_ops() {
    // Many operations over few distinct values = heavy churn through the
    // arena free list
    let config = SortedSetDstConfig::small_range(99999);
    let mut harness = SortedSetDstHarness::new(config);
    harness.run(2000);
    let result = harness.result();
    println!("Stress small range 2000 ops: {}", result.summary());
    assert!(result.is_success(), "2000 ops should maintain invariants");
}
