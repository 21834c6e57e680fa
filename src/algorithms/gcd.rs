use crate::error::{PolyError, Result};
use crate::structures::poly::Polynomial;

/// Greatest common divisor by the Euclidean algorithm.
///
/// The operand of higher degree becomes the first dividend, then `(a, b)` is
/// replaced by `(b, a mod b)` until `b` is zero.
///
/// The result is not normalized: it is one representative of the gcd up to
/// a unit of the coefficient ring.
///
/// # Errors
///
/// - [`PolyError::IncompatibleRing`] if the characteristics differ.
/// - Any division failure: [`PolyError::UnsupportedRing`] for a composite
///   characteristic, [`PolyError::NonIntegralResult`] when a remainder over
///   the integers would need fractions.
///
/// # Example
///
/// ```
/// use polyring::{gcd, Polynomial};
///
/// // gcd(x + 1, x) over GF(2) is a unit
/// let p = Polynomial::from_coefficients(2, &[1, 1]);
/// let q = Polynomial::x(2);
/// assert_eq!(gcd(&p, &q)?.degree(), Some(0));
/// # Ok::<(), polyring::PolyError>(())
/// ```
pub fn gcd(a: &Polynomial, b: &Polynomial) -> Result<Polynomial> {
    if a.characteristic() != b.characteristic() {
        return Err(PolyError::IncompatibleRing {
            left: a.characteristic(),
            right: b.characteristic(),
        });
    }

    // None < Some(_), so the zero polynomial sorts lowest
    let (mut a, mut b) = if a.degree() < b.degree() {
        (b.clone(), a.clone())
    } else {
        (a.clone(), b.clone())
    };

    while !b.is_zero() {
        let r = a.rem(&b)?;
        a = b;
        b = r;
    }

    Ok(a)
}
