//! Seed search for BLS12-family pairing-friendly curve parameters.
//!
//! Candidate seeds of the form `z = ±k·2^v − 1` are enumerated over a scan
//! window, expanded into the derived curve parameters (subgroup order,
//! embedded-curve order, base-field prime candidate, cofactors) by fixed
//! polynomial formulas, and pushed through a cascade of structural, size and
//! probabilistic-primality gates. Surviving seeds are reported together with
//! NAF/Hamming digit weights, the usual cost proxy for scalar multiplication
//! by the seed.

pub mod filter;
pub mod multicore;
pub mod naf;
pub mod params;
pub mod primality;
pub mod report;
pub mod search;

#[cfg(test)]
mod tests;

pub use filter::Outcome;
pub use naf::CostMetrics;
pub use params::DerivedParameters;
pub use primality::{GmpOracle, PrimalityOracle};
pub use report::{ReportSink, TextReporter};
pub use search::{Search, SearchConfig, SearchSummary};

use num_bigint::{BigInt, BigUint};
use thiserror::Error;

/// Violation of an identity that holds by construction for every admissible
/// seed. Unlike a failed primality gate this is never a property of the
/// candidate: it means the polynomial formulas or the digit encoder are
/// unsound for the offending input, so the run must stop rather than
/// continue in an inconsistent state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    /// An exact division left a remainder.
    #[error("seed {z}: {quantity} is not an exact multiple of {divisor}")]
    InexactDivision {
        z: BigInt,
        quantity: &'static str,
        divisor: u64,
    },
    /// `quantity − 1` lost the 2-adicity the seed shape guarantees.
    #[error("seed {z}: {quantity} - 1 is not divisible by 2^{two_adicity}")]
    TwoAdicity {
        z: BigInt,
        quantity: &'static str,
        two_adicity: u32,
    },
    /// The NAF recurrence produced an odd intermediate.
    #[error("non-adjacent form of {x}: odd intermediate after digit subtraction")]
    NafRemainder { x: BigUint },
}

/// Top-level failure of a search run. Expected rejections are not errors;
/// only defects and report I/O surface here.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Invariant(#[from] InvariantViolation),
    #[error("report sink: {0}")]
    Report(#[from] std::io::Error),
}
