//! Univariate polynomials over the integers and over Z/nZ.
//!
//! Exact long division, the Euclidean gcd, Rabin's irreducibility test over
//! GF(p), and a rejection-sampling search for irreducible polynomials.

pub mod algebra;
pub mod algorithms;
pub mod error;
pub mod structures;
pub mod utils;

pub use algebra::ring::RingKind;

pub use algorithms::gcd::gcd;
#[cfg(feature = "rand")]
pub use algorithms::generator::{find_irreducible_polynomial, IrreducibleSearch, SearchOptions};
pub use algorithms::irreducible::{is_irreducible, is_reducible, RabinTest};
pub use error::{PolyError, Result};
pub use structures::poly::{DivisionResult, Polynomial};
pub use structures::terms::TermStore;
pub use utils::{distinct_prime_factors, is_prime};
