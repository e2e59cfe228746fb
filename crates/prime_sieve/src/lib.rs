//! Pure prime-table logic for the prime game.
//!
//! This crate knows nothing about players or rounds. It provides:
//!
//! - [`PrimeTable`]: primality of every integer in `0..=limit`, built with a
//!   sieve of Eratosthenes.
//! - [`PrimeCountPrefix`]: the running count of primes `π(n)` for every
//!   `n` in `0..=limit`.
//!
//! # Example
//!
//! ```
//! use prime_sieve::{PrimeCountPrefix, PrimeTable};
//!
//! let table = PrimeTable::new(10);
//! assert!(table.is_prime(7));
//! assert!(!table.is_prime(9));
//!
//! let counts = PrimeCountPrefix::from(&table);
//! assert_eq!(counts.count_up_to(10), Some(4));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod prefix;
mod table;

pub use prefix::PrimeCountPrefix;
pub use table::{PrimeTable, sieve};
