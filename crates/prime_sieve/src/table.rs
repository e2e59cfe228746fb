//! Primality tables built with the sieve of Eratosthenes.

use serde::Serialize;
use tracing::{debug, instrument};

/// Computes primality for every integer in `0..=limit`.
///
/// Returns a vector of length `limit + 1` where entry `i` is `true` iff `i`
/// is prime. Each candidate `p` with `p * p <= limit` that is still marked
/// prime strikes out its multiples starting at `p * p`; smaller multiples
/// were already struck by a smaller factor.
#[instrument]
pub fn sieve(limit: usize) -> Vec<bool> {
    let mut table = vec![true; limit + 1];
    for slot in table.iter_mut().take(2) {
        *slot = false;
    }

    let mut p = 2;
    // `p <= limit / p` is `p * p <= limit` without overflow.
    while p <= limit / p {
        if table[p] {
            for multiple in (p * p..=limit).step_by(p) {
                table[multiple] = false;
            }
        }
        p += 1;
    }

    debug!(len = table.len(), "Sieve complete");
    table
}

/// Primality of every integer from `0` to a limit, inclusive.
///
/// Indices 0 and 1 are never prime. The table always holds exactly
/// `limit + 1` entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PrimeTable {
    /// `flags[i]` is `true` iff `i` is prime.
    flags: Vec<bool>,
}

impl PrimeTable {
    /// Builds the table for `0..=limit`.
    #[instrument]
    pub fn new(limit: usize) -> Self {
        Self {
            flags: sieve(limit),
        }
    }

    /// Inclusive upper bound of the table.
    pub fn limit(&self) -> usize {
        self.flags.len() - 1
    }

    /// Number of entries (`limit + 1`).
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Always `false`; a table covers at least the integer 0.
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Whether `n` is prime.
    ///
    /// Integers beyond [`limit`](Self::limit) were never sieved and report
    /// `false`.
    pub fn is_prime(&self, n: usize) -> bool {
        self.flags.get(n).copied().unwrap_or(false)
    }

    /// Iterates over the primes in the table, ascending.
    pub fn primes(&self) -> impl Iterator<Item = usize> + '_ {
        self.flags
            .iter()
            .enumerate()
            .filter_map(|(n, &prime)| prime.then_some(n))
    }

    /// Number of primes in `0..=limit`.
    pub fn count(&self) -> usize {
        self.flags.iter().filter(|&&prime| prime).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_zero() {
        assert_eq!(sieve(0), vec![false]);
    }

    #[test]
    fn test_limit_one() {
        assert_eq!(sieve(1), vec![false, false]);
    }

    #[test]
    fn test_limit_two() {
        assert_eq!(sieve(2), vec![false, false, true]);
    }

    #[test]
    fn test_small_table() {
        let expected = [
            false, false, true, true, false, true, false, true, false, false, false,
        ];
        assert_eq!(sieve(10), expected);
    }

    #[test]
    fn test_perfect_square_limit() {
        // 25 is only struck once p reaches 5, the last candidate.
        let table = PrimeTable::new(25);
        assert!(!table.is_prime(25));
        assert!(table.is_prime(23));
    }

    #[test]
    fn test_primes_iterator() {
        let table = PrimeTable::new(30);
        let primes: Vec<usize> = table.primes().collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
        assert_eq!(table.count(), 10);
    }

    #[test]
    fn test_out_of_range_is_not_prime() {
        let table = PrimeTable::new(5);
        assert_eq!(table.limit(), 5);
        assert_eq!(table.len(), 6);
        assert!(!table.is_prime(7));
    }
}
