//! Derivation of curve parameters from a candidate seed.
//!
//! For a seed `z` the BLS12 family fixes
//!
//! ```text
//! r  = z^4 - z^2 + 1                      (target subgroup order)
//! re = z^4 - 3z^2 + 3                     (embedded-curve order)
//! q  = 3*e1^2*r + z,  e1 = |z - 1| / 3    (base-field prime candidate)
//! p  = e1 / 2                             (half residue, itself prime)
//! h2 = (deg-8 polynomial in z) / 9        (twist cofactor)
//! hT = (deg-20 polynomial in z) / 81      (target-group cofactor)
//! ```
//!
//! The only admissibility condition on `z` itself is `3 | (z - 1)`. Every
//! division above is then exact for seeds of the `±k·2^v − 1` shape, so a
//! remainder is reported as an [`InvariantViolation`], never as a rejection.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::InvariantViolation;

/// Numerator coefficients of the twist cofactor `h2`, highest degree first.
const H2_NUMERATOR: [i64; 9] = [1, -4, 5, 0, -4, 6, -4, -4, 13];

/// Numerator coefficients of the target-group cofactor `hT`, highest degree
/// first.
const HT_NUMERATOR: [i64; 21] = [
    1, -8, 25, -32, -8, 76, -93, 36, 51, -112, 86, -16, -24, 84, -90, 28, -14, -38, 70, -14, 73,
];

/// Curve parameters derived from one seed. Everything is a fixed polynomial
/// image of `z`; nothing outlives the seed's pass through the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedParameters {
    /// The seed itself.
    pub z: BigInt,
    /// Target subgroup order, `z^4 - z^2 + 1`.
    pub r: BigInt,
    /// Order of the associated embedded curve, `z^4 - 3z^2 + 3`.
    pub re: BigInt,
    /// Base-field prime candidate, `3*e1^2*r + z`.
    pub q: BigInt,
    /// Half residue `e1 / 2`, required prime in its own right.
    pub p: BigInt,
    /// Twist cofactor.
    pub h2: BigInt,
    /// Target-group cofactor.
    pub ht: BigInt,
}

impl DerivedParameters {
    /// Re-validates the 2-adicity the seed shape guarantees: `2^v` divides
    /// both `r − 1` and `re − 1`.
    pub fn check_two_adicity(&self, two_adicity: u32) -> Result<(), InvariantViolation> {
        let modulus = BigInt::one() << two_adicity;
        for (quantity, value) in [("r", &self.r), ("re", &self.re)] {
            if !((value - BigInt::one()) % &modulus).is_zero() {
                return Err(InvariantViolation::TwoAdicity {
                    z: self.z.clone(),
                    quantity,
                    two_adicity,
                });
            }
        }
        Ok(())
    }
}

/// Expands a seed into its derived parameters.
///
/// Returns `Ok(None)` when `3 ∤ (z − 1)`: the seed is not in the admissible
/// residue class, an ordinary rejection rather than a defect.
pub fn evaluate(z: &BigInt) -> Result<Option<DerivedParameters>, InvariantViolation> {
    let e = (z - BigInt::one()).abs();
    if !e.is_multiple_of(&BigInt::from(3)) {
        return Ok(None);
    }
    let e1 = e / 3;
    let p = exact_div(&e1, 2, "e1", z)?;
    let r = polynomial(z, &[1, 0, -1, 0, 1]);
    let re = polynomial(z, &[1, 0, -3, 0, 3]);
    let h1 = &e1 * &e1 * 3;
    let q = &h1 * &r + z;
    let h2 = exact_div(&polynomial(z, &H2_NUMERATOR), 9, "h2 numerator", z)?;
    let ht = exact_div(&polynomial(z, &HT_NUMERATOR), 81, "hT numerator", z)?;
    Ok(Some(DerivedParameters {
        z: z.clone(),
        r,
        re,
        q,
        p,
        h2,
        ht,
    }))
}

/// Exponent of the largest power of two dividing `n`; zero input reports 0.
pub fn two_adic_valuation(n: &BigInt) -> u64 {
    n.trailing_zeros().unwrap_or(0)
}

/// Horner evaluation with small signed coefficients, highest degree first.
fn polynomial(z: &BigInt, coefficients: &[i64]) -> BigInt {
    let mut acc = BigInt::zero();
    for &c in coefficients {
        acc = acc * z + c;
    }
    acc
}

fn exact_div(
    numerator: &BigInt,
    divisor: u64,
    quantity: &'static str,
    z: &BigInt,
) -> Result<BigInt, InvariantViolation> {
    let (quotient, remainder) = numerator.div_rem(&BigInt::from(divisor));
    if remainder.is_zero() {
        Ok(quotient)
    } else {
        Err(InvariantViolation::InexactDivision {
            z: z.clone(),
            quantity,
            divisor,
        })
    }
}
