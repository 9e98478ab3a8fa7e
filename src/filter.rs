//! Accept/reject/terminate cascade over a seed's derived parameters.
//!
//! Gates run cheapest and most discriminating first, the expensive
//! primality tests last, each stage short-circuiting on failure. Acceptance
//! is two-tiered: a candidate whose twist cofactor passes is already worth
//! surfacing even when the final, least likely target-cofactor gate fails.

use crate::naf::CostMetrics;
use crate::params::DerivedParameters;
use crate::primality::PrimalityOracle;
use crate::search::SearchConfig;
use crate::InvariantViolation;

/// Filter decision for one seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Failed a gate; an ordinary negative search result.
    Rejected,
    /// The base-field candidate outgrew the size bound. Seeds grow
    /// monotonically with the scan index, so no later seed can fit either.
    Terminate,
    /// Weaker acceptance tier: every gate up to and including the twist
    /// cofactor passed, the target-group cofactor did not.
    PartialAccept(DerivedParameters),
    /// All gates passed; carries the digit-weight metrics of `|z|`.
    FullAccept(DerivedParameters, CostMetrics),
}

/// Runs the cascade. `evaluation` is the evaluator's tagged output: `None`
/// marks a structural mismatch and rejects immediately.
pub fn assess<O: PrimalityOracle>(
    evaluation: Option<DerivedParameters>,
    config: &SearchConfig,
    oracle: &O,
) -> Result<Outcome, InvariantViolation> {
    let params = match evaluation {
        None => return Ok(Outcome::Rejected),
        Some(params) => params,
    };
    if params.q.bits() >= config.max_field_bits {
        return Ok(Outcome::Terminate);
    }
    for n in [&params.q, &params.r, &params.p, &params.re] {
        if !oracle.is_probable_prime(n) {
            return Ok(Outcome::Rejected);
        }
    }
    if !oracle.is_probable_prime(&params.h2) {
        return Ok(Outcome::Rejected);
    }
    // Partial tier reached. The 2-adicity identities hold by construction
    // for any seed that got this far; a failure is a formula defect and
    // aborts the run instead of demoting the candidate.
    params.check_two_adicity(config.two_adicity)?;
    if !oracle.is_probable_prime(&params.ht) {
        return Ok(Outcome::PartialAccept(params));
    }
    let metrics = CostMetrics::of(params.z.magnitude())?;
    Ok(Outcome::FullAccept(params, metrics))
}
