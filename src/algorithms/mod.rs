pub mod gcd;
#[cfg(feature = "rand")]
pub mod generator;
pub mod irreducible;
