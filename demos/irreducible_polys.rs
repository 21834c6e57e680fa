//! Irreducible Polynomials
//!
//! This example demonstrates:
//! - Building polynomials term by term over Z and GF(p)
//! - Exact division and the Euclidean gcd
//! - Testing polynomials for irreducibility
//! - Finding irreducible polynomials of a given degree
//!
//! Run with: cargo run --example irreducible_polys

use polyring::{
    find_irreducible_polynomial, gcd, is_reducible, IrreducibleSearch, PolyError, Polynomial,
    SearchOptions,
};
use rand::SeedableRng;

fn main() -> Result<(), PolyError> {
    println!("=== Irreducible Polynomials ===\n");

    arithmetic()?;
    irreducibility_tests()?;
    finding_irreducibles()?;

    Ok(())
}

/// Division and gcd over the integers and over GF(p)
fn arithmetic() -> Result<(), PolyError> {
    println!("--- Arithmetic ---\n");

    let mut p = Polynomial::new(0);
    p.add_term(1, 2)?;
    p.add_term(-1, 0)?;
    let q = Polynomial::from_coefficients(0, &[-1, 1]);
    let result = p.div_rem(&q)?;
    println!("({}) / ({}) = {}, remainder {:?}", p, q, result.quotient, result.remainder);

    // 2x + 1 does not divide x^2 + 1 over the integers
    let r = Polynomial::from_coefficients(0, &[1, 2]);
    match Polynomial::from_coefficients(0, &[1, 0, 1]).div_rem(&r) {
        Ok(_) => println!("unexpected success"),
        Err(e) => println!("(x^2 + 1) / ({}) over Z: {}", r, e),
    }

    // over GF(7) the same division succeeds
    let a = Polynomial::from_coefficients(7, &[1, 0, 1]);
    let b = Polynomial::from_coefficients(7, &[1, 2]);
    let result = a.div_rem(&b)?;
    println!(
        "({}) / ({}) over GF(7) = {}, remainder {}",
        a, b, result.quotient, result.remainder
    );

    let g = gcd(&a.try_mul(&b)?, &b.try_mul(&b)?)?;
    println!("gcd = {} (monic: {})\n", g, g.monic()?);
    Ok(())
}

/// Test specific polynomials for irreducibility
fn irreducibility_tests() -> Result<(), PolyError> {
    println!("--- Irreducibility Tests ---\n");

    // x^2 + 1 has no root in GF(3)
    let f = Polynomial::from_coefficients(3, &[1, 0, 1]);
    println!("f(x) = {} over GF(3)", f);
    println!("  is_reducible: {}\n", is_reducible(&f)?);

    // x^2 + 1 = (x + 2)(x + 3) over GF(5)
    let g = Polynomial::from_coefficients(5, &[1, 0, 1]);
    println!("g(x) = {} over GF(5)", g);
    println!("  is_reducible: {}\n", is_reducible(&g)?);

    // (x^2 + x + 1)^2 has no root in GF(2) but still factors
    let h = Polynomial::from_coefficients(2, &[1, 0, 1, 0, 1]);
    println!("h(x) = {} over GF(2)", h);
    println!("  is_reducible: {}\n", is_reducible(&h)?);

    Ok(())
}

/// Search for irreducible polynomials
fn finding_irreducibles() -> Result<(), PolyError> {
    println!("--- Finding Irreducibles ---\n");

    for (p, n) in [(2, 3), (2, 8), (3, 5), (7, 4)] {
        let f = find_irreducible_polynomial(p, n)?;
        println!("degree {} over GF({}): {}", n, p, f);
    }

    // reproducible search with a bounded trial count
    let rng = rand::rngs::StdRng::seed_from_u64(2024);
    let mut search = IrreducibleSearch::new(rng).with_options(SearchOptions {
        verbose: true,
        max_trials: Some(1000),
    });
    let f = search.find(5, 6)?;
    println!("\nseeded degree 6 over GF(5): {}", f);

    Ok(())
}
