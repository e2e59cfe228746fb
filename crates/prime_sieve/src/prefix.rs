//! Running prime counts derived from a [`PrimeTable`].

use crate::PrimeTable;
use serde::Serialize;
use tracing::{debug, instrument};

/// Prime-counting function `π(n)` tabulated for `0..=limit`.
///
/// Entry `n` is the number of primes in `1..=n`. Entry 0 is 0 and each
/// entry exceeds its predecessor by at most one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PrimeCountPrefix {
    counts: Vec<usize>,
}

impl PrimeCountPrefix {
    /// Sieves `0..=limit` and tabulates the running prime count.
    #[instrument]
    pub fn new(limit: usize) -> Self {
        Self::from(&PrimeTable::new(limit))
    }

    /// `π(n)`, or `None` if `n` is beyond the tabulated limit.
    pub fn count_up_to(&self, n: usize) -> Option<usize> {
        self.counts.get(n).copied()
    }

    /// Inclusive upper bound of the tabulation.
    pub fn limit(&self) -> usize {
        self.counts.len() - 1
    }

    /// The running counts, indexed by integer.
    pub fn as_slice(&self) -> &[usize] {
        &self.counts
    }
}

impl From<&PrimeTable> for PrimeCountPrefix {
    #[instrument(skip(table), fields(limit = table.limit()))]
    fn from(table: &PrimeTable) -> Self {
        let mut counts = vec![0; table.len()];
        for n in 1..counts.len() {
            counts[n] = counts[n - 1] + usize::from(table.is_prime(n));
        }
        debug!(total = counts.last().copied().unwrap_or(0), "Prime counts tabulated");
        Self { counts }
    }
}
