use core::fmt;

use crate::error::{PolyError, Result};
use crate::utils::{is_prime, mod_inverse};

/// The coefficient ring of a polynomial, resolved once from its characteristic.
///
/// - `Integers`: characteristic 0, coefficients are unrestricted `i64`s.
/// - `PrimeField(p)`: GF(p), every non-zero coefficient is invertible.
/// - `Residues(n)`: Z/nZ for composite `n` (or `n = 1`). Coefficients are
///   stored reduced, but division and everything built on it is refused.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RingKind {
    Integers,
    PrimeField(u32),
    Residues(u32),
}

impl RingKind {
    /// Classify a characteristic.
    ///
    /// ```
    /// use polyring::RingKind;
    ///
    /// assert_eq!(RingKind::from_characteristic(0), RingKind::Integers);
    /// assert_eq!(RingKind::from_characteristic(7), RingKind::PrimeField(7));
    /// assert_eq!(RingKind::from_characteristic(6), RingKind::Residues(6));
    /// ```
    pub const fn from_characteristic(characteristic: u32) -> Self {
        if characteristic == 0 {
            RingKind::Integers
        } else if is_prime(characteristic as u64) {
            RingKind::PrimeField(characteristic)
        } else {
            RingKind::Residues(characteristic)
        }
    }

    pub const fn characteristic(self) -> u32 {
        match self {
            RingKind::Integers => 0,
            RingKind::PrimeField(n) | RingKind::Residues(n) => n,
        }
    }

    #[inline]
    pub const fn is_field(self) -> bool {
        matches!(self, RingKind::PrimeField(_))
    }

    /// Reduce a native coefficient into the ring. Never fails.
    #[inline]
    pub fn normalize(self, value: i64) -> i64 {
        match self {
            RingKind::Integers => value,
            RingKind::PrimeField(n) | RingKind::Residues(n) => value.rem_euclid(i64::from(n)),
        }
    }

    /// Bring a wide intermediate value back into the ring.
    ///
    /// Positive characteristics reduce into `[0, n)`; the integers only check
    /// that the value still fits an `i64`.
    #[inline]
    pub fn reduce(self, value: i128) -> Result<i64> {
        match self {
            RingKind::Integers => i64::try_from(value).map_err(|_| PolyError::Overflow),
            RingKind::PrimeField(n) | RingKind::Residues(n) => {
                // the remainder is below n <= u32::MAX
                Ok(value.rem_euclid(i128::from(n)) as i64)
            }
        }
    }

    #[inline]
    pub fn add(self, a: i64, b: i64) -> Result<i64> {
        self.reduce(i128::from(a) + i128::from(b))
    }

    #[inline]
    pub fn mul(self, a: i64, b: i64) -> Result<i64> {
        self.reduce(i128::from(a) * i128::from(b))
    }

    /// The factor `c` with `c * divisor = dividend` used by one long-division step.
    ///
    /// The integers require exact divisibility, prime fields multiply by the
    /// inverse, and composite residue rings refuse.
    pub fn exact_quotient(self, dividend: i64, divisor: i64) -> Result<i64> {
        match self {
            RingKind::Integers => {
                if divisor == 0 {
                    return Err(PolyError::InvalidDivisor);
                }
                match dividend.checked_rem(divisor) {
                    Some(0) => dividend.checked_div(divisor).ok_or(PolyError::Overflow),
                    Some(_) => {
                        log::trace!("{} / {} leaves the integers", dividend, divisor);
                        Err(PolyError::NonIntegralResult { dividend, divisor })
                    }
                    None => Err(PolyError::Overflow),
                }
            }
            RingKind::PrimeField(p) => {
                let inv = mod_inverse(divisor, p).ok_or(PolyError::InvalidDivisor)?;
                self.mul(dividend, inv)
            }
            RingKind::Residues(n) => Err(PolyError::UnsupportedRing(n)),
        }
    }
}

impl fmt::Display for RingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RingKind::Integers => write!(f, "Z"),
            RingKind::PrimeField(p) => write!(f, "GF({})", p),
            RingKind::Residues(n) => write!(f, "Z/{}Z", n),
        }
    }
}
