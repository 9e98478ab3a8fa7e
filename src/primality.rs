//! Probabilistic primality oracle.
//!
//! The search treats "is this probably prime" as an external service with a
//! stated error bound; false negatives within that bound are accepted and
//! never re-verified. The production oracle screens with trial division
//! before handing survivors to GMP's Miller-Rabin.

use num_bigint::BigInt;
use rug::integer::{IsPrime, Order};
use rug::Integer;

/// External probable-primality test. The sign of the input is ignored.
pub trait PrimalityOracle {
    fn is_probable_prime(&self, n: &BigInt) -> bool;
}

/// First 64 primes, used as a trial-division screen. Most composites fall
/// here, well before a Miller-Rabin round is paid for.
const SMALL_PRIMES: [u32; 64] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97,
    101, 103, 107, 109, 113, 127, 131, 137, 139, 149, 151, 157, 163, 167, 173, 179, 181, 191, 193,
    197, 199, 211, 223, 227, 229, 233, 239, 241, 251, 257, 263, 269, 271, 277, 281, 283, 293, 307,
    311,
];

/// GMP-backed oracle: trial division by [`SMALL_PRIMES`], then Miller-Rabin
/// with a configured number of repetitions.
#[derive(Debug, Clone, Copy)]
pub struct GmpOracle {
    reps: u32,
}

impl GmpOracle {
    /// Default repetition count; bounds the chance of accepting a composite
    /// by 4^-25 per query.
    pub const DEFAULT_REPS: u32 = 25;

    pub fn new(reps: u32) -> Self {
        GmpOracle { reps }
    }
}

impl Default for GmpOracle {
    fn default() -> Self {
        GmpOracle::new(GmpOracle::DEFAULT_REPS)
    }
}

impl PrimalityOracle for GmpOracle {
    fn is_probable_prime(&self, n: &BigInt) -> bool {
        let m = Integer::from_digits(&n.magnitude().to_u64_digits(), Order::Lsf);
        for &small in &SMALL_PRIMES {
            if m.is_divisible_u(small) {
                return m == small;
            }
        }
        m.is_probably_prime(self.reps) != IsPrime::No
    }
}
