//! Tests for prime tables and prime-count prefixes against trial division.

use prime_sieve::{PrimeCountPrefix, PrimeTable, sieve};
use proptest::prelude::*;

fn is_prime_by_trial_division(n: usize) -> bool {
    if n < 2 {
        return false;
    }
    let mut d = 2;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}

#[test]
fn test_table_matches_trial_division() {
    for limit in (0..=200).chain([997, 1_000, 4_096, 10_007]) {
        let table = PrimeTable::new(limit);
        assert_eq!(table.len(), limit + 1);
        for n in 0..=limit {
            assert_eq!(
                table.is_prime(n),
                is_prime_by_trial_division(n),
                "primality of {} with limit {}",
                n,
                limit
            );
        }
    }
}

#[test]
fn test_zero_and_one_never_prime() {
    for limit in 0..20 {
        let flags = sieve(limit);
        assert!(!flags[0]);
        if limit >= 1 {
            assert!(!flags[1]);
        }
    }
}

#[test]
fn test_prefix_is_monotonic_with_unit_steps() {
    for limit in [0, 1, 2, 3, 50, 1_000] {
        let counts = PrimeCountPrefix::new(limit);
        let slice = counts.as_slice();
        assert_eq!(slice.len(), limit + 1);
        assert_eq!(slice[0], 0);
        for window in slice.windows(2) {
            let step = window[1] - window[0];
            assert!(step <= 1, "step {} in prefix for limit {}", step, limit);
        }
    }
}

#[test]
fn test_prefix_agrees_with_table() {
    let table = PrimeTable::new(500);
    let counts = PrimeCountPrefix::from(&table);
    for n in 0..=500 {
        let expected = table.primes().take_while(|&p| p <= n).count();
        assert_eq!(counts.count_up_to(n), Some(expected));
    }
}

#[test]
fn test_known_prime_counts() {
    let counts = PrimeCountPrefix::new(10_000);
    assert_eq!(counts.count_up_to(10), Some(4));
    assert_eq!(counts.count_up_to(100), Some(25));
    assert_eq!(counts.count_up_to(1_000), Some(168));
    assert_eq!(counts.count_up_to(10_000), Some(1_229));
}

#[test]
fn test_tables_are_deterministic() {
    assert_eq!(PrimeTable::new(777), PrimeTable::new(777));
}

proptest! {
    #[test]
    fn test_table_matches_trial_division_for_any_limit(limit in 0usize..5_000) {
        let table = PrimeTable::new(limit);
        prop_assert_eq!(table.len(), limit + 1);
        for n in 0..=limit {
            prop_assert_eq!(table.is_prime(n), is_prime_by_trial_division(n));
        }
    }

    #[test]
    fn test_prefix_steps_by_primality(limit in 0usize..5_000) {
        let table = PrimeTable::new(limit);
        let counts = PrimeCountPrefix::from(&table);
        let slice = counts.as_slice();
        prop_assert_eq!(slice[0], 0);
        for n in 1..=limit {
            prop_assert_eq!(slice[n] - slice[n - 1], usize::from(table.is_prime(n)));
        }
    }
}
