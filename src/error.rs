//! Error type shared by every polynomial operation.

use thiserror::Error;

/// Failure of a polynomial operation.
///
/// Every variant is a local, synchronous refusal: the operation produced no
/// value and the operands are unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolyError {
    /// A negative exponent was supplied.
    #[error("exponent {0} is negative")]
    InvalidExponent(i64),
    /// A negative degree was requested.
    #[error("degree {0} is negative")]
    InvalidDegree(i64),
    /// The operands live over different coefficient rings.
    #[error("characteristics {left} and {right} don't match")]
    IncompatibleRing { left: u32, right: u32 },
    /// Division by the zero polynomial.
    #[error("division by the zero polynomial")]
    InvalidDivisor,
    /// Division over the integers would need a fractional coefficient.
    #[error("{dividend} is not divisible by {divisor} over the integers")]
    NonIntegralResult { dividend: i64, divisor: i64 },
    /// The operation needs a field but the characteristic is composite.
    #[error("Z/{0}Z is not a field")]
    UnsupportedRing(u32),
    /// Irreducibility testing over the integers.
    #[error("irreducibility testing needs a positive characteristic")]
    UnsupportedCharacteristic,
    /// The generator was asked for a characteristic below 2.
    #[error("characteristic {0} is smaller than 2")]
    InvalidCharacteristic(u32),
    /// An integer coefficient left the native `i64` range.
    #[error("coefficient overflow")]
    Overflow,
    /// A bounded irreducible search rejected every candidate.
    #[error("no irreducible polynomial found in {0} trials")]
    TrialLimitExceeded(u64),
}

/// Result alias with [`PolyError`] as the default error.
pub type Result<T, E = PolyError> = core::result::Result<T, E>;
