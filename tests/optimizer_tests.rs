// tests/optimizer_tests.rs
//! Tests voor de DP-optimizer: vaste scenario's, randgevallen, de
//! correctheidscontracten en vergelijking met uitputtend zoeken.

extern crate adjsel;
use adjsel::brute::brute_force;
use adjsel::optimizer::{count_adjacent_ones, optimize, optimize_signed, optimize_within, table_cells};
use adjsel::selection::count_adjacent_pairs;
use adjsel::OptimizeError;
use approx::assert_relative_eq;
use bitvec::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

const SCENARIO_A: [i64; 4] = [100, 300, 400, 50];
const SCENARIO_B: [i64; 9] = [10, 100, 300, 400, 50, 4500, 200, 30, 90];

#[test]
fn test_empty_input() {
    let sel = optimize::<i64>(&[], 3).unwrap();
    assert_eq!(sel.value(), 0);
    assert!(sel.is_empty());
    assert!(sel.to_bits().is_empty());
}

#[test]
fn test_scenario_a() {
    let sel = optimize(&SCENARIO_A, 1).unwrap();
    assert_eq!(sel.value(), 700);
    assert_eq!(sel.to_bits(), vec![0, 1, 1, 0]);
    assert_eq!(sel.adjacent_pairs(), 1);
}

#[test]
fn test_scenario_a_without_adjacency() {
    // k = 0: geen twee opeenvolgende enen.
    let sel = optimize(&SCENARIO_A, 0).unwrap();
    assert_eq!(sel.value(), 500);
    assert_eq!(sel.to_bits(), vec![1, 0, 1, 0]);
}

#[test]
fn test_scenario_b() {
    let sel = optimize(&SCENARIO_B, 2).unwrap();
    assert_eq!(sel.value(), 5500);
    assert_eq!(sel.to_bits(), vec![1, 0, 1, 1, 0, 1, 1, 0, 1]);
    assert!(sel.is_feasible(2));
    assert_eq!(sel.value(), brute_force(&SCENARIO_B, 2).unwrap().value());
}

#[test]
fn test_scenario_b_all_bounds() {
    let expected = [5090, 5300, 5500, 5590, 5600, 5640, 5650, 5670, 5680];
    for (k, &want) in expected.iter().enumerate() {
        let sel = optimize(&SCENARIO_B, k).unwrap();
        assert_eq!(sel.value(), want, "k = {}", k);
        assert!(sel.adjacent_pairs() <= k);
        assert_eq!(sel.selected_sum(&SCENARIO_B), Some(want));
    }
}

#[test]
fn test_unbinding_bound_selects_everything() {
    let weights = [7i64, 1, 9, 3, 4];
    let total: i64 = weights.iter().sum();
    for k in [4, 5, 100, usize::MAX] {
        let sel = optimize(&weights, k).unwrap();
        assert_eq!(sel.value(), total);
        assert_eq!(sel.selected(), weights.len());
    }
}

#[test]
fn test_huge_bound_keeps_table_small() {
    // De grens wordt afgekapt op n - 1.
    assert_eq!(table_cells(5, usize::MAX), table_cells(5, 4));
    assert_eq!(table_cells(0, 10), 0);
    assert_eq!(table_cells(4, 1), 5 * 3 * 2);
}

#[test]
fn test_single_weight() {
    let sel = optimize(&[3u32], 0).unwrap();
    assert_eq!(sel.value(), 3);
    assert_eq!(sel.to_bits(), vec![1]);
}

#[test]
fn test_ties_are_deterministic() {
    let weights = [5i64, 5, 5, 5];
    let sel = optimize(&weights, 1).unwrap();
    assert_eq!(sel.value(), 15);
    assert_eq!(sel.to_bits(), vec![1, 0, 1, 1]);

    let sel = optimize(&[1i64, 1, 1], 0).unwrap();
    assert_eq!(sel.to_bits(), vec![1, 0, 1]);
}

#[test]
fn test_zero_weights() {
    let sel = optimize(&[0i64, 0, 0], 2).unwrap();
    assert_eq!(sel.value(), 0);
    assert!(sel.is_feasible(2));
}

#[test]
fn test_idempotent() {
    let first = optimize(&SCENARIO_B, 1).unwrap();
    let second = optimize(&SCENARIO_B, 1).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_negative_bound_rejected() {
    let err = optimize_signed(&SCENARIO_A, -1).unwrap_err();
    assert_eq!(err, OptimizeError::NegativeBound(-1));
    assert!(err.is_invalid_argument());
    assert_eq!(optimize_signed(&SCENARIO_A, 1).unwrap().value(), 700);
}

#[test]
fn test_non_finite_weights_rejected() {
    let err = optimize(&[1.0, f64::NAN, 2.0], 1).unwrap_err();
    assert_eq!(err, OptimizeError::NonFiniteWeight { index: 1 });
    assert!(err.is_invalid_argument());

    let err = optimize(&[f64::INFINITY], 0).unwrap_err();
    assert_eq!(err, OptimizeError::NonFiniteWeight { index: 0 });
}

#[test]
fn test_overflow_reported() {
    let err = optimize(&[i64::MAX, 1], 1).unwrap_err();
    assert_eq!(err, OptimizeError::Overflow { position: 1 });
    assert!(!err.is_invalid_argument());
}

#[test]
fn test_capacity_ceiling() {
    let err = optimize_within(&SCENARIO_B, 2, 10).unwrap_err();
    assert_eq!(
        err,
        OptimizeError::CapacityExceeded {
            cells: table_cells(9, 2),
            limit: 10
        }
    );
    assert!(err.is_resource_limit());
    let sel = optimize_within(&SCENARIO_B, 2, table_cells(9, 2)).unwrap();
    assert_eq!(sel.value(), 5500);
}

#[test]
fn test_float_weights_reconstruct() {
    let weights = [0.1f64, 0.2, 0.3];
    let sel = optimize(&weights, 0).unwrap();
    assert_eq!(sel.to_bits(), vec![1, 0, 1]);
    assert_relative_eq!(sel.value(), 0.4, epsilon = 1e-12);
    // Links-naar-rechts optellen geeft exact dezelfde float als de DP.
    assert_eq!(sel.selected_sum(&weights), Some(sel.value()));

    let sel = optimize(&weights, 1).unwrap();
    assert_eq!(sel.to_bits(), vec![0, 1, 1]);
    assert_relative_eq!(sel.value(), 0.5, epsilon = 1e-12);
}

#[test]
fn test_float_weights_random_fixtures() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let n = rng.gen_range(1..=12);
        let k = rng.gen_range(0..n);
        let weights: Vec<f64> = (0..n).map(|_| rng.gen_range(0.0..10.0)).collect();
        let sel = optimize(&weights, k).unwrap();
        let reference = brute_force(&weights, k).unwrap();
        assert!(sel.is_feasible(k));
        assert_eq!(sel.selected_sum(&weights), Some(sel.value()));
        assert_relative_eq!(sel.value(), reference.value(), max_relative = 1e-9);
    }
}

#[test]
fn test_matches_brute_force() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..500 {
        let n = rng.gen_range(0..=12);
        let k = rng.gen_range(0..=n + 1);
        let weights: Vec<i64> = (0..n).map(|_| rng.gen_range(1..=1000)).collect();
        let sel = optimize(&weights, k).unwrap();
        let reference = brute_force(&weights, k).unwrap();

        assert_eq!(sel.len(), n);
        assert!(sel.adjacent_pairs() <= k, "{:?} k={}", weights, k);
        assert_eq!(sel.selected_sum(&weights), Some(sel.value()));
        assert_eq!(sel.value(), reference.value(), "{:?} k={}", weights, k);
    }
}

#[test]
fn test_negative_weights_still_exact() {
    // Geen ondersteunde invoer, maar de recurrence blijft exact.
    let sel = optimize(&[-1i64, -2], 3).unwrap();
    assert_eq!(sel.value(), 0);
    assert_eq!(sel.to_bits(), vec![0, 0]);

    let weights = [-5i64, 4, -1, 3];
    let sel = optimize(&weights, 0).unwrap();
    assert_eq!(sel.value(), 7);
    assert_eq!(sel.value(), brute_force(&weights, 0).unwrap().value());
}

#[test]
fn test_adjacent_counters_agree() {
    let bits = [1u8, 1, 0, 1, 1, 1, 0];
    assert_eq!(count_adjacent_ones(&bits), 3);
    let mask = bitvec![1, 1, 0, 1, 1, 1, 0];
    assert_eq!(count_adjacent_pairs(&mask), 3);
    assert_eq!(count_adjacent_ones(&[]), 0);
    assert_eq!(count_adjacent_ones(&[1]), 0);
}

#[test]
fn test_state_table_relax_keeps_maximum() {
    use adjsel::table::StateTable;
    let mut t = StateTable::<i64>::new(2, 1);
    assert_eq!(t.cells(), 3 * 3 * 2);
    assert_eq!(StateTable::<i64>::cell_count(2, 1), Some(t.cells()));
    assert_eq!(StateTable::<i64>::cell_count(usize::MAX, 1), None);
    assert_eq!(t.get(0, 0, 0), Some(0));
    assert_eq!(t.get(0, 0, 1), None);

    t.relax(1, 1, 1, 5);
    t.relax(1, 1, 1, 3);
    assert_eq!(t.get(1, 1, 1), Some(5));
    t.relax(1, 1, 1, 9);
    assert_eq!(t.get(1, 1, 1), Some(9));
}
