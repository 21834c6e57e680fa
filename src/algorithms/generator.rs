use rand::Rng;

use crate::algorithms::irreducible::RabinTest;
use crate::error::{PolyError, Result};
use crate::structures::poly::Polynomial;

/// Knobs for [`IrreducibleSearch`].
///
/// The default is quiet and unbounded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchOptions {
    /// Log the trial counter and the Rabin test's progress.
    pub verbose: bool,
    /// Give up after this many rejected candidates. `None` searches forever.
    pub max_trials: Option<u64>,
}

/// Rejection sampling for irreducible polynomials over GF(p).
///
/// Candidates have exactly the requested degree and a non-zero constant
/// term; the first one that passes Rabin's test is returned. The expected
/// number of trials grows roughly linearly with the degree, so degrees much
/// above 20 are slow.
///
/// # Example
///
/// ```
/// use polyring::{is_reducible, IrreducibleSearch};
/// use rand::SeedableRng;
///
/// let rng = rand::rngs::StdRng::seed_from_u64(7);
/// let f = IrreducibleSearch::new(rng).find(2, 3)?;
///
/// assert_eq!(f.degree(), Some(3));
/// assert!(!is_reducible(&f)?);
/// # Ok::<(), polyring::PolyError>(())
/// ```
#[derive(Clone, Debug)]
pub struct IrreducibleSearch<R> {
    rng: R,
    options: SearchOptions,
}

impl<R: Rng> IrreducibleSearch<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            options: SearchOptions::default(),
        }
    }

    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Draw one candidate of exactly `degree` over Z/`characteristic`Z.
    ///
    /// The leading and constant coefficients are drawn from
    /// `[1, characteristic - 1]`, interior coefficients from
    /// `[0, characteristic - 1]`.
    ///
    /// # Errors
    ///
    /// - [`PolyError::InvalidCharacteristic`] if `characteristic < 2`.
    /// - [`PolyError::InvalidDegree`] if `degree` is negative.
    pub fn random_candidate(&mut self, characteristic: u32, degree: i64) -> Result<Polynomial> {
        validate(characteristic, degree)?;
        let c = i64::from(characteristic);
        let mut candidate = Polynomial::new(characteristic);

        let leading = self.rng.gen_range(1..c);
        candidate.add_term(leading, degree)?;
        if degree == 0 {
            return Ok(candidate);
        }

        for exponent in (1..degree).rev() {
            let coefficient = self.rng.gen_range(0..c);
            if coefficient != 0 {
                candidate.add_term(coefficient, exponent)?;
            }
        }

        let constant = self.rng.gen_range(1..c);
        candidate.add_term(constant, 0)?;
        Ok(candidate)
    }

    /// Search until a candidate passes Rabin's test.
    ///
    /// # Errors
    ///
    /// - [`PolyError::InvalidCharacteristic`] if `characteristic < 2`.
    /// - [`PolyError::InvalidDegree`] if `degree` is negative.
    /// - [`PolyError::UnsupportedRing`] for a composite characteristic and
    ///   degree at least two.
    /// - [`PolyError::TrialLimitExceeded`] when `max_trials` is reached.
    pub fn find(&mut self, characteristic: u32, degree: i64) -> Result<Polynomial> {
        validate(characteristic, degree)?;
        let tester = RabinTest::new().verbose(self.options.verbose);

        let mut tries: u64 = 0;
        loop {
            if let Some(max) = self.options.max_trials {
                if tries >= max {
                    log::debug!("giving up after {} trials", tries);
                    return Err(PolyError::TrialLimitExceeded(max));
                }
            }
            tries += 1;
            if self.options.verbose {
                log::info!("Try {}", tries);
            }

            let candidate = self.random_candidate(characteristic, degree)?;
            if !tester.is_reducible(&candidate)? {
                if self.options.verbose {
                    log::info!("Total amount of tries: {}", tries);
                }
                return Ok(candidate);
            }
        }
    }
}

fn validate(characteristic: u32, degree: i64) -> Result<()> {
    if characteristic < 2 {
        return Err(PolyError::InvalidCharacteristic(characteristic));
    }
    if degree < 0 {
        return Err(PolyError::InvalidDegree(degree));
    }
    Ok(())
}

/// Find an irreducible polynomial of `degree` over GF(`characteristic`)
/// using the thread-local random source.
///
/// See [`IrreducibleSearch::find`] for the failure modes.
pub fn find_irreducible_polynomial(characteristic: u32, degree: i64) -> Result<Polynomial> {
    IrreducibleSearch::new(rand::thread_rng()).find(characteristic, degree)
}
