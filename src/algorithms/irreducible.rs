use crate::algebra::ring::RingKind;
use crate::algorithms::gcd::gcd;
use crate::error::{PolyError, Result};
use crate::structures::poly::Polynomial;
use crate::utils::{checked_pow, distinct_prime_factors};

/// Rabin's irreducibility test over GF(p).
///
/// A polynomial f of degree n over GF(p) is irreducible if and only if:
/// 1. `gcd(f, (x^(p^(n/r)) - x) mod f)` is a unit for each prime divisor r of n
/// 2. `x^(p^n) - x ≡ 0 (mod f)`
///
/// The gcd checks come first and can only reject; the last congruence is the
/// only step that confirms irreducibility.
///
/// `x^(p^m) mod f` is reached by raising `x` to the `p`-th power modulo `f`
/// `m` times, so the test polynomial of degree `p^m` is never built.
///
/// With `verbose` set, the polynomial under test and every test polynomial
/// are logged through the `log` facade. The flag never changes a result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RabinTest {
    verbose: bool,
}

impl RabinTest {
    pub const fn new() -> Self {
        Self { verbose: false }
    }

    pub const fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub const fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// `true` if `f` factors over its prime field.
    ///
    /// Polynomials of degree at most one are never reducible.
    ///
    /// # Errors
    ///
    /// - [`PolyError::UnsupportedCharacteristic`] for characteristic 0.
    /// - [`PolyError::UnsupportedRing`] for a composite characteristic when
    ///   the degree is at least two.
    pub fn is_reducible(&self, f: &Polynomial) -> Result<bool> {
        if f.ring() == RingKind::Integers {
            return Err(PolyError::UnsupportedCharacteristic);
        }

        let n = match f.degree() {
            Some(d) if d >= 2 => d,
            _ => return Ok(false),
        };

        let p = match f.ring() {
            RingKind::PrimeField(p) => p,
            ring => return Err(PolyError::UnsupportedRing(ring.characteristic())),
        };

        if self.verbose {
            log::info!("Checking if {} is irreducible over GF({})", f, p);
        }

        let prime_divisors = distinct_prime_factors(n);
        let x = Polynomial::x(p);

        // h = x^(p^i) mod f, starting with i = 0; deg f >= 2 so x is reduced
        let mut h = x.clone();

        for i in 1..=n {
            h = f.powmod(&h, u64::from(p))?;

            // at i = n/r for each prime divisor r of n
            for &r in &prime_divisors {
                if n / r != i {
                    continue;
                }
                if self.verbose {
                    log::debug!("    Checking polynomial {}", describe_test_polynomial(p, i));
                }
                // x has degree 1 < n, so h - x is already reduced modulo f
                let remainder = h.try_sub(&x)?;
                let g = gcd(f, &remainder)?;
                if g.degree() != Some(0) {
                    if self.verbose {
                        log::debug!("    gcd {} is not a unit, {} is reducible", g, f);
                    }
                    return Ok(true);
                }
            }
        }

        if self.verbose {
            log::debug!("    Checking polynomial {}", describe_test_polynomial(p, n));
        }
        let remainder = h.try_sub(&x)?;
        Ok(!remainder.is_zero())
    }

    /// `true` for a polynomial of degree at least one that is not reducible.
    ///
    /// Constants and the zero polynomial are neither.
    pub fn is_irreducible(&self, f: &Polynomial) -> Result<bool> {
        let reducible = self.is_reducible(f)?;
        Ok(matches!(f.degree(), Some(d) if d >= 1) && !reducible)
    }
}

/// Rabin's test with diagnostics off. See [`RabinTest::is_reducible`].
///
/// # Example
///
/// ```
/// use polyring::{is_reducible, Polynomial};
///
/// // x^2 + 1 has no root in GF(3), so it is irreducible
/// let f = Polynomial::from_coefficients(3, &[1, 0, 1]);
/// assert!(!is_reducible(&f)?);
///
/// // x^2 + 1 = (x + 2)(x + 3) over GF(5)
/// let g = Polynomial::from_coefficients(5, &[1, 0, 1]);
/// assert!(is_reducible(&g)?);
/// # Ok::<(), polyring::PolyError>(())
/// ```
pub fn is_reducible(f: &Polynomial) -> Result<bool> {
    RabinTest::new().is_reducible(f)
}

/// Irreducibility with diagnostics off. See [`RabinTest::is_irreducible`].
pub fn is_irreducible(f: &Polynomial) -> Result<bool> {
    RabinTest::new().is_irreducible(f)
}

/// Text of `x^(p^m) - x`, with the exponent expanded when it fits an `i64`.
fn describe_test_polynomial(p: u32, m: u64) -> String {
    match checked_pow(i64::from(p), m) {
        Some(e) => format!("x^{} - x", e),
        None => format!("x^({}^{}) - x", p, m),
    }
}
