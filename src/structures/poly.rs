use core::fmt;
use core::ops::{Add, Mul, Rem, Sub};

use crate::algebra::ring::RingKind;
use crate::error::{PolyError, Result};
use crate::structures::terms::{Iter, TermStore};
use crate::utils::pow_mod;

/// Single-variable polynomial over the integers or over Z/nZ.
///
/// Terms live in a sparse [`TermStore`]; the coefficient ring is fixed at
/// construction. For a positive characteristic `n` every stored coefficient
/// lies in `[0, n)`.
///
/// The zero polynomial is the empty store and has no degree.
///
/// # Example
///
/// ```
/// use polyring::Polynomial;
///
/// // 3x^2 + x + 2 over GF(5)
/// let mut p = Polynomial::new(5);
/// p.add_term(3, 2)?;
/// p.add_term(1, 1)?;
/// p.add_term(2, 0)?;
///
/// assert_eq!(p.to_string(), "3x^2 + x + 2");
/// assert_eq!(p.degree(), Some(2));
/// assert_eq!(p.leading_coefficient(), 3);
/// # Ok::<(), polyring::PolyError>(())
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Polynomial {
    ring: RingKind,
    terms: TermStore,
}

/// Quotient and remainder of one [`Polynomial::div_rem`] call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DivisionResult {
    pub quotient: Polynomial,
    pub remainder: Polynomial,
}

impl DivisionResult {
    pub fn into_parts(self) -> (Polynomial, Polynomial) {
        (self.quotient, self.remainder)
    }
}

impl Polynomial {
    /// Create the zero polynomial over the ring of the given characteristic.
    ///
    /// Characteristic 0 is the integers; `n > 0` is Z/nZ.
    pub fn new(characteristic: u32) -> Self {
        Self {
            ring: RingKind::from_characteristic(characteristic),
            terms: TermStore::new(),
        }
    }

    /// Alias of [`Polynomial::new`] for call sites that read better with it.
    pub fn zero(characteristic: u32) -> Self {
        Self::new(characteristic)
    }

    /// Create a constant polynomial.
    pub fn constant(characteristic: u32, c: i64) -> Self {
        Self::monomial(characteristic, c, 0)
    }

    /// Create the polynomial `x`.
    pub fn x(characteristic: u32) -> Self {
        Self::monomial(characteristic, 1, 1)
    }

    /// Create a monomial `c * x^n`.
    ///
    /// ```
    /// use polyring::Polynomial;
    ///
    /// let m = Polynomial::monomial(7, 10, 4); // 10 = 3 (mod 7)
    /// assert_eq!(m.to_string(), "3x^4");
    /// ```
    pub fn monomial(characteristic: u32, c: i64, n: u64) -> Self {
        let mut poly = Self::new(characteristic);
        let c = poly.ring.normalize(c);
        poly.terms.set(n, c);
        poly
    }

    /// Create a polynomial from coefficients in ascending order.
    ///
    /// `coeffs[i]` is the coefficient of `x^i`; each one is reduced into the ring.
    ///
    /// ```
    /// use polyring::Polynomial;
    ///
    /// // 2 - x + x^3 over the integers
    /// let p = Polynomial::from_coefficients(0, &[2, -1, 0, 1]);
    /// assert_eq!(p.to_string(), "x^3 - x + 2");
    /// assert_eq!(p.number_of_nonzero_coefficients(), 3);
    /// ```
    pub fn from_coefficients(characteristic: u32, coeffs: &[i64]) -> Self {
        let mut poly = Self::new(characteristic);
        for (exponent, &c) in (0u64..).zip(coeffs) {
            let c = poly.ring.normalize(c);
            poly.terms.set(exponent, c);
        }
        poly
    }

    #[inline]
    pub fn characteristic(&self) -> u32 {
        self.ring.characteristic()
    }

    #[inline]
    pub fn ring(&self) -> RingKind {
        self.ring
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Highest exponent with a non-zero coefficient, `None` for the zero polynomial.
    #[inline]
    pub fn degree(&self) -> Option<u64> {
        self.terms.leading().map(|(e, _)| e)
    }

    /// `(exponent, coefficient)` of the leading term.
    #[inline]
    pub fn leading_term(&self) -> Option<(u64, i64)> {
        self.terms.leading()
    }

    /// Coefficient of the leading term, 0 for the zero polynomial.
    pub fn leading_coefficient(&self) -> i64 {
        self.terms.leading().map_or(0, |(_, c)| c)
    }

    /// Coefficient of `x^degree`, zero when no such term is stored.
    ///
    /// # Errors
    ///
    /// [`PolyError::InvalidExponent`] if `degree` is negative.
    pub fn coefficient_at(&self, degree: i64) -> Result<i64> {
        let exponent = validate_exponent(degree)?;
        Ok(self.terms.get(exponent))
    }

    /// Coefficient of `x^exponent`.
    #[inline]
    pub fn coeff(&self, exponent: u64) -> i64 {
        self.terms.get(exponent)
    }

    pub fn number_of_nonzero_coefficients(&self) -> usize {
        self.terms.len()
    }

    /// Non-zero terms as `(exponent, coefficient)` in ascending order.
    ///
    /// Use `.rev()` for the descending order used by formatting.
    pub fn terms(&self) -> Iter<'_> {
        self.terms.iter()
    }

    /// Add `coefficient * x^exponent` to this polynomial in place.
    ///
    /// The new coefficient is reduced into the ring; a result of zero removes
    /// the term.
    ///
    /// # Errors
    ///
    /// - [`PolyError::InvalidExponent`] if `exponent` is negative.
    /// - [`PolyError::Overflow`] if an integer coefficient leaves the `i64` range.
    pub fn add_term(&mut self, coefficient: i64, exponent: i64) -> Result<()> {
        let exponent = validate_exponent(exponent)?;
        self.accumulate(exponent, i128::from(coefficient))
    }

    /// Remove the term at `exponent`. Absent terms are ignored.
    ///
    /// # Errors
    ///
    /// [`PolyError::InvalidExponent`] if `exponent` is negative.
    pub fn remove_term(&mut self, exponent: i64) -> Result<()> {
        let exponent = validate_exponent(exponent)?;
        self.terms.remove(exponent);
        Ok(())
    }

    fn accumulate(&mut self, exponent: u64, delta: i128) -> Result<()> {
        let current = i128::from(self.terms.get(exponent));
        let c = self.ring.reduce(current + delta)?;
        self.terms.set(exponent, c);
        Ok(())
    }

    /// Evaluate the polynomial at an integer point.
    ///
    /// Over Z/nZ the result is reduced into `[0, n)`. Over the integers the
    /// evaluation is exact or fails.
    ///
    /// # Errors
    ///
    /// [`PolyError::Overflow`] if an integer result leaves the `i64` range, or
    /// an intermediate Horner step leaves the `i128` range.
    ///
    /// ```
    /// use polyring::Polynomial;
    ///
    /// // x^2 + 1 over GF(5): 2^2 + 1 = 0 (mod 5)
    /// let p = Polynomial::from_coefficients(5, &[1, 0, 1]);
    /// assert_eq!(p.evaluate(2)?, 0);
    ///
    /// let q = Polynomial::from_coefficients(0, &[1, 0, 1]);
    /// assert_eq!(q.evaluate(-3)?, 10);
    /// # Ok::<(), polyring::PolyError>(())
    /// ```
    pub fn evaluate(&self, x: i64) -> Result<i64> {
        match self.ring {
            RingKind::Integers => self.evaluate_integer(x),
            RingKind::PrimeField(n) | RingKind::Residues(n) => Ok(self.evaluate_modular(x, n)),
        }
    }

    // Horner's method over the sparse terms in i128: the accumulator is
    // multiplied by x^gap between consecutive exponents and narrowed once.
    fn evaluate_integer(&self, x: i64) -> Result<i64> {
        let mut acc: i128 = 0;
        let mut last: Option<u64> = None;
        for (e, c) in self.terms.iter().rev() {
            if let Some(prev) = last {
                acc = scale_by_power(acc, x, prev - e)?;
            }
            acc = acc.checked_add(i128::from(c)).ok_or(PolyError::Overflow)?;
            last = Some(e);
        }
        if let Some(e) = last {
            acc = scale_by_power(acc, x, e)?;
        }
        i64::try_from(acc).map_err(|_| PolyError::Overflow)
    }

    fn evaluate_modular(&self, x: i64, n: u32) -> i64 {
        let m = i128::from(n);
        let mut acc: i128 = 0;
        let mut last: Option<u64> = None;
        for (e, c) in self.terms.iter().rev() {
            if let Some(prev) = last {
                acc = acc * i128::from(pow_mod(x, prev - e, n)) % m;
            }
            acc = (acc + i128::from(c)) % m;
            last = Some(e);
        }
        if let Some(e) = last {
            acc = acc * i128::from(pow_mod(x, e, n)) % m;
        }
        // acc < n <= u32::MAX
        acc as i64
    }

    fn check_compatible(&self, other: &Self) -> Result<()> {
        if self.ring != other.ring {
            return Err(PolyError::IncompatibleRing {
                left: self.characteristic(),
                right: other.characteristic(),
            });
        }
        Ok(())
    }

    /// Sum of two polynomials over the same ring.
    ///
    /// # Errors
    ///
    /// - [`PolyError::IncompatibleRing`] if the characteristics differ.
    /// - [`PolyError::Overflow`] on integer coefficient overflow.
    pub fn try_add(&self, other: &Self) -> Result<Self> {
        self.check_compatible(other)?;
        let mut sum = self.clone();
        for (e, c) in other.terms.iter() {
            sum.accumulate(e, i128::from(c))?;
        }
        Ok(sum)
    }

    /// Difference of two polynomials over the same ring.
    ///
    /// Same failure modes as [`Polynomial::try_add`].
    pub fn try_sub(&self, other: &Self) -> Result<Self> {
        self.check_compatible(other)?;
        let mut diff = self.clone();
        for (e, c) in other.terms.iter() {
            diff.accumulate(e, -i128::from(c))?;
        }
        Ok(diff)
    }

    /// Product of two polynomials over the same ring.
    ///
    /// Naive convolution: every pair of terms contributes one product.
    ///
    /// ```
    /// use polyring::Polynomial;
    ///
    /// // (x + 1)(x + 1) = x^2 + 1 over GF(2)
    /// let p = Polynomial::from_coefficients(2, &[1, 1]);
    /// assert_eq!(p.try_mul(&p)?.to_string(), "x^2 + 1");
    /// # Ok::<(), polyring::PolyError>(())
    /// ```
    pub fn try_mul(&self, other: &Self) -> Result<Self> {
        self.check_compatible(other)?;
        let mut product = Self::new(self.characteristic());
        for (e1, c1) in self.terms.iter() {
            for (e2, c2) in other.terms.iter() {
                let exponent = e1.checked_add(e2).ok_or(PolyError::Overflow)?;
                product.accumulate(exponent, i128::from(c1) * i128::from(c2))?;
            }
        }
        Ok(product)
    }

    /// Multiply every coefficient by a scalar.
    pub fn scale(&self, factor: i64) -> Result<Self> {
        let mut scaled = Self::new(self.characteristic());
        for (e, c) in self.terms.iter() {
            let c = self.ring.mul(c, factor)?;
            scaled.terms.set(e, c);
        }
        Ok(scaled)
    }

    /// Long division: compute quotient and remainder.
    ///
    /// Returns `q, r` with `self = q * divisor + r` and `deg(r) < deg(divisor)`.
    /// Each step eliminates the leading term of the running remainder:
    ///
    /// - over the integers the divisor's leading coefficient must divide the
    ///   remainder's leading coefficient exactly;
    /// - over GF(p) the divisor's leading coefficient is inverted;
    /// - over a composite Z/nZ division is refused.
    ///
    /// # Errors
    ///
    /// - [`PolyError::IncompatibleRing`] if the characteristics differ.
    /// - [`PolyError::InvalidDivisor`] if `divisor` is zero.
    /// - [`PolyError::UnsupportedRing`] for composite characteristic.
    /// - [`PolyError::NonIntegralResult`] if integer division is not exact.
    ///
    /// # Example
    ///
    /// ```
    /// use polyring::Polynomial;
    ///
    /// // (x^2 - 1) / (x - 1) = x + 1 over the integers
    /// let dividend = Polynomial::from_coefficients(0, &[-1, 0, 1]);
    /// let divisor = Polynomial::from_coefficients(0, &[-1, 1]);
    /// let result = dividend.div_rem(&divisor)?;
    ///
    /// assert_eq!(result.quotient, Polynomial::from_coefficients(0, &[1, 1]));
    /// assert!(result.remainder.is_zero());
    /// # Ok::<(), polyring::PolyError>(())
    /// ```
    pub fn div_rem(&self, divisor: &Self) -> Result<DivisionResult> {
        self.check_compatible(divisor)?;
        let (divisor_deg, divisor_lc) = divisor.leading_term().ok_or(PolyError::InvalidDivisor)?;
        if let RingKind::Residues(n) = self.ring {
            return Err(PolyError::UnsupportedRing(n));
        }

        let mut quotient = Self::new(self.characteristic());
        let mut remainder = self.clone();

        while let Some((rem_deg, rem_lc)) = remainder.leading_term() {
            if rem_deg < divisor_deg {
                break;
            }

            let coeff = self.ring.exact_quotient(rem_lc, divisor_lc)?;
            let deg_diff = rem_deg - divisor_deg;

            // each deg_diff is visited once, in decreasing order
            quotient.terms.set(deg_diff, coeff);

            // remainder -= coeff * x^deg_diff * divisor
            for (e, d_coeff) in divisor.terms.iter() {
                remainder.accumulate(e + deg_diff, -(i128::from(coeff) * i128::from(d_coeff)))?;
            }
        }

        Ok(DivisionResult {
            quotient,
            remainder,
        })
    }

    /// Remainder of division by `divisor`.
    pub fn rem(&self, divisor: &Self) -> Result<Self> {
        self.div_rem(divisor).map(|r| r.remainder)
    }

    /// Make the polynomial monic (leading coefficient = 1).
    ///
    /// The zero polynomial is returned unchanged.
    ///
    /// # Errors
    ///
    /// [`PolyError::UnsupportedRing`] unless the ring is a prime field.
    pub fn monic(&self) -> Result<Self> {
        if !self.ring.is_field() {
            return Err(PolyError::UnsupportedRing(self.characteristic()));
        }
        match self.leading_term() {
            None => Ok(self.clone()),
            Some((_, lc)) => {
                let inv = self.ring.exact_quotient(1, lc)?;
                self.scale(inv)
            }
        }
    }

    /// Compute `base^exp mod self` using repeated squaring.
    ///
    /// This is how the Rabin test reaches `x^(p^m) mod f` without building a
    /// polynomial of degree `p^m`.
    ///
    /// # Errors
    ///
    /// Every error of [`Polynomial::div_rem`] with `self` as the divisor.
    pub fn powmod(&self, base: &Self, exp: u64) -> Result<Self> {
        let mut result = Self::constant(self.characteristic(), 1).rem(self)?;
        if exp == 0 {
            return Ok(result);
        }

        let mut b = base.rem(self)?;
        let mut e = exp;

        while e > 0 {
            if e & 1 == 1 {
                result = result.try_mul(&b)?.rem(self)?;
            }
            e >>= 1;
            if e > 0 {
                b = b.try_mul(&b)?.rem(self)?;
            }
        }

        Ok(result)
    }
}

fn validate_exponent(exponent: i64) -> Result<u64> {
    u64::try_from(exponent).map_err(|_| PolyError::InvalidExponent(exponent))
}

/// `acc * x^exp` with overflow checks. A zero accumulator stays zero.
fn scale_by_power(acc: i128, x: i64, exp: u64) -> Result<i128> {
    if acc == 0 {
        return Ok(0);
    }
    let mut result = acc;
    let mut base = i128::from(x);
    let mut exp = exp;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result.checked_mul(base).ok_or(PolyError::Overflow)?;
        }
        exp >>= 1;
        if exp > 0 {
            base = base.checked_mul(base).ok_or(PolyError::Overflow)?;
        }
    }
    Ok(result)
}

/* ---- Arithmetic operators ---- */

impl Add for &Polynomial {
    type Output = Result<Polynomial>;

    fn add(self, rhs: Self) -> Self::Output {
        self.try_add(rhs)
    }
}

impl Sub for &Polynomial {
    type Output = Result<Polynomial>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.try_sub(rhs)
    }
}

impl Mul for &Polynomial {
    type Output = Result<Polynomial>;

    fn mul(self, rhs: Self) -> Self::Output {
        self.try_mul(rhs)
    }
}

impl Rem for &Polynomial {
    type Output = Result<Polynomial>;

    fn rem(self, rhs: Self) -> Self::Output {
        Polynomial::rem(self, rhs)
    }
}

impl fmt::Display for Polynomial {
    /// Descending terms, e.g. `x^7 - 2x^5 + 11x - 2`. The zero polynomial is empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (e, c)) in self.terms.iter().rev().enumerate() {
            if i == 0 {
                if c < 0 {
                    write!(f, "-")?;
                }
            } else if c < 0 {
                write!(f, " - ")?;
            } else {
                write!(f, " + ")?;
            }

            let magnitude = c.unsigned_abs();
            if magnitude != 1 || e == 0 {
                write!(f, "{}", magnitude)?;
            }
            match e {
                0 => {}
                1 => write!(f, "x")?,
                _ => write!(f, "x^{}", e)?,
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            write!(f, "0 over {}", self.ring)
        } else {
            write!(f, "{} over {}", self, self.ring)
        }
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct PolynomialRepr {
    characteristic: u32,
    terms: Vec<(u64, i64)>,
}

#[cfg(feature = "serde")]
impl serde::Serialize for Polynomial {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        // Serialize as the characteristic plus descending (exponent, coefficient) pairs
        let repr = PolynomialRepr {
            characteristic: self.characteristic(),
            terms: self.terms.iter().rev().collect(),
        };
        repr.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Polynomial {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let repr = PolynomialRepr::deserialize(deserializer)?;
        let mut poly = Self::new(repr.characteristic);
        for (e, c) in repr.terms {
            poly.accumulate(e, i128::from(c))
                .map_err(<D::Error as serde::de::Error>::custom)?;
        }
        Ok(poly)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(characteristic: u32, terms: &[(i64, i64)]) -> Polynomial {
        let mut p = Polynomial::new(characteristic);
        for &(c, e) in terms {
            p.add_term(c, e).unwrap();
        }
        p
    }

    #[test]
    fn new_is_zero() {
        let p = Polynomial::new(3);
        assert!(p.is_zero());
        assert_eq!(p.degree(), None);
        assert_eq!(p.characteristic(), 3);
        assert_eq!(p.leading_coefficient(), 0);
        assert_eq!(p.number_of_nonzero_coefficients(), 0);
    }

    #[test]
    fn ring_is_resolved_once() {
        assert_eq!(Polynomial::new(0).ring(), RingKind::Integers);
        assert_eq!(Polynomial::new(11).ring(), RingKind::PrimeField(11));
        assert_eq!(Polynomial::new(12).ring(), RingKind::Residues(12));
    }

    #[test]
    fn add_term_accumulates_mod_characteristic() {
        let mut p = Polynomial::new(5);
        p.add_term(2, 0).unwrap();
        p.add_term(3, 3).unwrap();
        assert_eq!(p.coefficient_at(0), Ok(2));
        assert_eq!(p.coefficient_at(3), Ok(3));

        p.add_term(3, 3).unwrap();
        assert_eq!(p.coefficient_at(3), Ok(1));
    }

    #[test]
    fn add_term_cancellation_removes_term() {
        let mut p = Polynomial::new(3);
        assert_eq!(p.coefficient_at(0), Ok(0));
        p.add_term(2, 0).unwrap();
        p.add_term(0, 0).unwrap();
        assert_eq!(p.coefficient_at(0), Ok(2));
        p.add_term(-2, 0).unwrap();
        assert_eq!(p.coefficient_at(0), Ok(0));
        assert!(p.is_zero());
    }

    #[test]
    fn add_term_reduces_negative_coefficients() {
        let p = build(7, &[(-1, 2)]);
        assert_eq!(p.coeff(2), 6);
    }

    #[test]
    fn negative_exponent_rejected() {
        let mut p = Polynomial::new(5);
        assert_eq!(p.add_term(4, -1), Err(PolyError::InvalidExponent(-1)));
        assert_eq!(p.remove_term(-1), Err(PolyError::InvalidExponent(-1)));
        assert_eq!(p.coefficient_at(-2), Err(PolyError::InvalidExponent(-2)));
    }

    #[test]
    fn remove_term() {
        let mut p = build(5, &[(2, 0), (1, 3)]);
        p.remove_term(1).unwrap();
        assert_eq!(p.number_of_nonzero_coefficients(), 2);
        p.remove_term(3).unwrap();
        assert_eq!(p.coefficient_at(0), Ok(2));
        assert_eq!(p.coefficient_at(3), Ok(0));
        assert_eq!(p.degree(), Some(0));
    }

    #[test]
    fn number_of_nonzero_coefficients() {
        let mut p = Polynomial::new(7);
        p.add_term(3, 2).unwrap();
        assert_eq!(p.number_of_nonzero_coefficients(), 1);
        p.add_term(3, 1).unwrap();
        assert_eq!(p.number_of_nonzero_coefficients(), 2);
        p.add_term(1, 1).unwrap();
        assert_eq!(p.number_of_nonzero_coefficients(), 2);
        p.add_term(3, 1).unwrap(); // 7 = 0
        assert_eq!(p.number_of_nonzero_coefficients(), 1);
    }

    #[test]
    fn degree_and_leading_term() {
        let mut p = Polynomial::new(7);
        p.add_term(3, 2).unwrap();
        assert_eq!(p.degree(), Some(2));
        p.add_term(6, 1).unwrap();
        assert_eq!(p.degree(), Some(2));
        assert_eq!(p.leading_term(), Some((2, 3)));
        p.add_term(4, 2).unwrap();
        assert_eq!(p.degree(), Some(1));
        assert_eq!(p.leading_coefficient(), 6);
    }

    #[test]
    fn constructors() {
        assert_eq!(Polynomial::constant(5, 7).to_string(), "2");
        assert!(Polynomial::constant(5, 10).is_zero());
        assert_eq!(Polynomial::x(3).degree(), Some(1));
        assert!(Polynomial::x(1).is_zero());
        assert!(Polynomial::monomial(0, 0, 9).is_zero());
        assert_eq!(
            Polynomial::from_coefficients(3, &[3, 4, 0, 0]),
            Polynomial::monomial(3, 1, 1)
        );
    }

    #[test]
    fn clone_is_deep() {
        let p = build(0, &[(1, 2), (4, 0)]);
        let mut copy = p.clone();
        copy.add_term(1, 5).unwrap();
        copy.remove_term(0).unwrap();
        assert_eq!(p.to_string(), "x^2 + 4");
        assert_eq!(copy.to_string(), "x^5 + x^2");
    }

    #[test]
    fn evaluate_integers() {
        // x^7 - 2x^5 + 2x^2 + 11x - 2 at x = 2: 128 - 64 + 8 + 22 - 2
        let p = build(0, &[(1, 7), (-2, 5), (2, 2), (11, 1), (-2, 0)]);
        assert_eq!(p.evaluate(2), Ok(92));
        assert_eq!(p.evaluate(0), Ok(-2));
        assert_eq!(Polynomial::new(0).evaluate(42), Ok(0));
    }

    #[test]
    fn evaluate_integer_overflow() {
        let p = Polynomial::monomial(0, 1, 70);
        assert_eq!(p.evaluate(2), Err(PolyError::Overflow));
        assert_eq!(p.evaluate(1), Ok(1));
        assert_eq!(p.evaluate(-1), Ok(1));
    }

    #[test]
    fn evaluate_integer_at_i64_bounds() {
        // x^63 - 1 at 2 is i64::MAX
        let p = build(0, &[(1, 63), (-1, 0)]);
        assert_eq!(p.evaluate(2), Ok(i64::MAX));
        // -x^63 at 2 is i64::MIN
        assert_eq!(Polynomial::monomial(0, -1, 63).evaluate(2), Ok(i64::MIN));
        assert_eq!(Polynomial::monomial(0, 1, 63).evaluate(2), Err(PolyError::Overflow));
        // x^64 - x^63 at 2 is 2^63, past i64::MAX
        let q = build(0, &[(1, 64), (-1, 63)]);
        assert_eq!(q.evaluate(2), Err(PolyError::Overflow));
    }

    #[test]
    fn evaluate_modular_is_reduced() {
        // 3x^2 + x + 2 at x = 4 over GF(5): 48 + 4 + 2 = 54 = 4
        let p = build(5, &[(3, 2), (1, 1), (2, 0)]);
        assert_eq!(p.evaluate(4), Ok(4));
        assert_eq!(p.evaluate(-1), Ok(4));
        // huge exponents are fine modulo n
        assert_eq!(Polynomial::monomial(7, 1, 1_000_000).evaluate(3), Ok(pow_mod(3, 1_000_000, 7)));
    }

    #[test]
    fn add_and_sub() {
        let a = build(5, &[(3, 2), (1, 0)]);
        let b = build(5, &[(2, 2), (4, 1)]);
        let sum = a.try_add(&b).unwrap();
        assert_eq!(sum.to_string(), "4x + 1");
        assert_eq!(sum.try_sub(&b).unwrap(), a);
        assert!(a.try_sub(&a).unwrap().is_zero());
        // operands untouched
        assert_eq!(a.to_string(), "3x^2 + 1");
    }

    #[test]
    fn operators_delegate() {
        let a = build(0, &[(1, 1), (1, 0)]);
        let b = build(0, &[(1, 1), (-1, 0)]);
        assert_eq!((&a * &b).unwrap().to_string(), "x^2 - 1");
        assert_eq!((&a + &b).unwrap().to_string(), "2x");
        assert_eq!((&a - &b).unwrap().to_string(), "2");
        let product = (&a * &b).unwrap();
        assert!((&product % &a).unwrap().is_zero());
    }

    #[test]
    fn incompatible_rings() {
        let a = Polynomial::x(5);
        let b = Polynomial::x(7);
        let err = PolyError::IncompatibleRing { left: 5, right: 7 };
        assert_eq!(a.try_add(&b), Err(err.clone()));
        assert_eq!(a.try_sub(&b), Err(err.clone()));
        assert_eq!(a.try_mul(&b), Err(err.clone()));
        assert_eq!(a.div_rem(&b), Err(err));
    }

    #[test]
    fn mul_convolution() {
        // (x^2 + 2x + 3)(2x + 1) = 2x^3 + 5x^2 + 8x + 3
        let a = Polynomial::from_coefficients(0, &[3, 2, 1]);
        let b = Polynomial::from_coefficients(0, &[1, 2]);
        assert_eq!(a.try_mul(&b).unwrap().to_string(), "2x^3 + 5x^2 + 8x + 3");
        // same product over GF(3): 2x^3 + 2x^2 + 2x
        let a3 = Polynomial::from_coefficients(3, &[3, 2, 1]);
        let b3 = Polynomial::from_coefficients(3, &[1, 2]);
        assert_eq!(a3.try_mul(&b3).unwrap().to_string(), "2x^3 + 2x^2 + 2x");
    }

    #[test]
    fn mul_by_zero_poly() {
        let a = Polynomial::from_coefficients(7, &[1, 2, 3]);
        assert!(a.try_mul(&Polynomial::zero(7)).unwrap().is_zero());
    }

    #[test]
    fn mul_integer_overflow() {
        let a = Polynomial::constant(0, i64::MAX);
        assert_eq!(a.try_mul(&a), Err(PolyError::Overflow));
    }

    #[test]
    fn div_rem_exact_integer() {
        let dividend = build(0, &[(1, 2), (-1, 0)]);
        let divisor = build(0, &[(1, 1), (-1, 0)]);
        let (q, r) = dividend.div_rem(&divisor).unwrap().into_parts();
        assert_eq!(q.to_string(), "x + 1");
        assert!(r.is_zero());
        assert_eq!(r.degree(), None);
    }

    #[test]
    fn div_rem_integer_with_remainder() {
        // x^3 + 2x + 5 = (x + 1)(x^2 - x + 3) + 2
        let dividend = Polynomial::from_coefficients(0, &[5, 2, 0, 1]);
        let divisor = Polynomial::from_coefficients(0, &[1, 1]);
        let result = dividend.div_rem(&divisor).unwrap();
        assert_eq!(result.quotient.to_string(), "x^2 - x + 3");
        assert_eq!(result.remainder.to_string(), "2");
    }

    #[test]
    fn div_rem_non_integral_refused() {
        let dividend = Polynomial::from_coefficients(0, &[1, 0, 1]);
        let divisor = Polynomial::from_coefficients(0, &[1, 2]);
        assert_eq!(
            dividend.div_rem(&divisor),
            Err(PolyError::NonIntegralResult {
                dividend: 1,
                divisor: 2
            })
        );
    }

    #[test]
    fn div_rem_field_inverts_leading_coefficient() {
        // over GF(7): (x^2 + 1) / (3x + 1)
        let dividend = Polynomial::from_coefficients(7, &[1, 0, 1]);
        let divisor = Polynomial::from_coefficients(7, &[1, 3]);
        let result = dividend.div_rem(&divisor).unwrap();
        assert_eq!(result.quotient.degree(), Some(1));
        assert!(result.remainder.degree().map_or(true, |d| d < 1));
        let back = divisor
            .try_mul(&result.quotient)
            .unwrap()
            .try_add(&result.remainder)
            .unwrap();
        assert_eq!(back, dividend);
    }

    #[test]
    fn div_rem_dividend_smaller() {
        let dividend = Polynomial::from_coefficients(5, &[1, 1]);
        let divisor = Polynomial::from_coefficients(5, &[1, 0, 1]);
        let result = dividend.div_rem(&divisor).unwrap();
        assert!(result.quotient.is_zero());
        assert_eq!(result.remainder, dividend);
    }

    #[test]
    fn div_rem_zero_dividend() {
        let result = Polynomial::zero(5).div_rem(&Polynomial::x(5)).unwrap();
        assert!(result.quotient.is_zero());
        assert!(result.remainder.is_zero());
    }

    #[test]
    fn div_rem_zero_divisor() {
        let a = Polynomial::x(5);
        assert_eq!(a.div_rem(&Polynomial::zero(5)), Err(PolyError::InvalidDivisor));
        assert_eq!(
            Polynomial::x(0).div_rem(&Polynomial::zero(0)),
            Err(PolyError::InvalidDivisor)
        );
    }

    #[test]
    fn div_rem_composite_refused() {
        let a = Polynomial::from_coefficients(6, &[1, 0, 1]);
        let b = Polynomial::from_coefficients(6, &[1, 1]);
        assert_eq!(a.div_rem(&b), Err(PolyError::UnsupportedRing(6)));
    }

    #[test]
    fn div_rem_by_constant() {
        let a = Polynomial::from_coefficients(0, &[4, 6, 2]);
        let two = Polynomial::constant(0, 2);
        let result = a.div_rem(&two).unwrap();
        assert_eq!(result.quotient.to_string(), "x^2 + 3x + 2");
        assert!(result.remainder.is_zero());
    }

    #[test]
    fn monic_over_field() {
        let p = Polynomial::from_coefficients(17, &[2, 4, 2]);
        let m = p.monic().unwrap();
        assert_eq!(m.leading_coefficient(), 1);
        assert_eq!(m, Polynomial::from_coefficients(17, &[1, 2, 1]));
        assert!(Polynomial::zero(17).monic().unwrap().is_zero());
        assert_eq!(
            Polynomial::x(0).monic(),
            Err(PolyError::UnsupportedRing(0))
        );
    }

    #[test]
    fn powmod_x() {
        // x^5 mod (x^2 + 1) over GF(3): x^4 = 1, so x^5 = x
        let f = Polynomial::from_coefficients(3, &[1, 0, 1]);
        let x = Polynomial::x(3);
        assert_eq!(f.powmod(&x, 5).unwrap(), x);
        assert_eq!(f.powmod(&x, 4).unwrap(), Polynomial::constant(3, 1));
        assert_eq!(f.powmod(&x, 0).unwrap(), Polynomial::constant(3, 1));
    }

    #[test]
    fn powmod_matches_long_division() {
        let f = Polynomial::from_coefficients(5, &[2, 1, 0, 1]);
        let x = Polynomial::x(5);
        let direct = Polynomial::monomial(5, 1, 25).rem(&f).unwrap();
        assert_eq!(f.powmod(&x, 25).unwrap(), direct);
    }

    #[test]
    fn display_format() {
        assert_eq!(build(5, &[(3, 2), (1, 1), (2, 0)]).to_string(), "3x^2 + x + 2");
        assert_eq!(
            build(0, &[(1, 7), (-2, 5), (2, 2), (11, 1), (-2, 0)]).to_string(),
            "x^7 - 2x^5 + 2x^2 + 11x - 2"
        );
        assert_eq!(build(0, &[(-1, 3), (-1, 0)]).to_string(), "-x^3 - 1");
        assert_eq!(build(0, &[(1, 0)]).to_string(), "1");
        assert_eq!(Polynomial::zero(0).to_string(), "");
    }

    #[test]
    fn debug_format() {
        assert_eq!(format!("{:?}", Polynomial::x(5)), "x over GF(5)");
        assert_eq!(format!("{:?}", Polynomial::zero(0)), "0 over Z");
    }
}
