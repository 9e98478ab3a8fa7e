//! Non-adjacent form encoding and digit-weight metrics.
//!
//! The NAF of an integer is the unique signed-binary expansion over
//! {-1, 0, 1} with no two adjacent non-zero digits. Its non-zero digit count
//! lower-bounds the additions of a signed double-and-add ladder, which is
//! what makes it the right cost proxy when ranking seeds of equal size.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::InvariantViolation;

/// Signed-digit NAF expansion of `x`, least-significant digit first.
///
/// A `b`-bit input expands to at most `b + 1` digits; zero expands to the
/// empty sequence.
pub fn encode(x: &BigUint) -> Result<Vec<i8>, InvariantViolation> {
    let mut digits = Vec::with_capacity(x.bits() as usize + 1);
    let mut rest = x.clone();
    while !rest.is_zero() {
        // Residue mod 4 picks the digit: 3 -> -1, otherwise the low bit.
        let digit: i8 = if !rest.bit(0) {
            0
        } else if rest.bit(1) {
            -1
        } else {
            1
        };
        match digit {
            1 => rest -= 1u32,
            -1 => rest += 1u32,
            _ => {}
        }
        // Subtracting the digit leaves an even value; an odd one here means
        // the encoder itself is broken, not the input.
        if rest.bit(0) {
            return Err(InvariantViolation::NafRemainder { x: x.clone() });
        }
        rest >>= 1u32;
        digits.push(digit);
    }
    Ok(digits)
}

/// Number of non-zero digits in a NAF expansion.
pub fn weight(digits: &[i8]) -> u64 {
    digits.iter().filter(|digit| **digit != 0).count() as u64
}

/// Number of set bits in the plain binary expansion of `x`.
pub fn hamming_weight(x: &BigUint) -> u64 {
    x.count_ones()
}

/// Digit-weight cost proxies for a seed magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CostMetrics {
    /// Non-zero digits of the NAF expansion.
    pub naf_weight: u64,
    /// Set bits of the binary expansion.
    pub hamming_weight: u64,
}

impl CostMetrics {
    pub fn of(x: &BigUint) -> Result<Self, InvariantViolation> {
        let digits = encode(x)?;
        Ok(CostMetrics {
            naf_weight: weight(&digits),
            hamming_weight: hamming_weight(x),
        })
    }
}
