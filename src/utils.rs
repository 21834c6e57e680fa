//! Integer helpers used by the coefficient rings and the Rabin test.

/// Check if `n` is a prime number.
///
/// Uses trial division up to sqrt(n). Characteristics are validated once per
/// polynomial, so this is not on any hot path.
pub const fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    let mut i = 3;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

/// Distinct prime factors of `n` in ascending order.
///
/// Returns an empty vector for 0 and 1.
pub fn distinct_prime_factors(mut n: u64) -> Vec<u64> {
    let mut primes = Vec::new();
    if n < 2 {
        return primes;
    }
    let mut d: u64 = 2;

    while d <= n / d {
        if n % d == 0 {
            primes.push(d);
            while n % d == 0 {
                n /= d;
            }
        }
        d += 1;
    }

    if n > 1 {
        primes.push(n);
    }

    primes
}

/// `base^exp`, or `None` if the result leaves the `i64` range.
pub fn checked_pow(base: i64, exp: u64) -> Option<i64> {
    let mut base = base;
    let mut result: i64 = 1;
    let mut e = exp;

    while e > 0 {
        if e & 1 == 1 {
            result = result.checked_mul(base)?;
        }
        e >>= 1;
        if e > 0 {
            base = base.checked_mul(base)?;
        }
    }
    Some(result)
}

/// `base^exp mod m` for `m > 0`, result in `[0, m)`.
pub fn pow_mod(base: i64, exp: u64, m: u32) -> i64 {
    let m = i128::from(m);
    let mut base = i128::from(base).rem_euclid(m);
    let mut result: i128 = 1 % m;
    let mut e = exp;

    while e > 0 {
        if e & 1 == 1 {
            result = result * base % m;
        }
        base = base * base % m;
        e >>= 1;
    }
    // result < m <= u32::MAX
    result as i64
}

/// Multiplicative inverse of `a` modulo `m`, if `gcd(a, m) = 1`.
pub fn mod_inverse(a: i64, m: u32) -> Option<i64> {
    if m < 2 {
        return None;
    }
    let m = i64::from(m);
    let (mut old_r, mut r) = (a.rem_euclid(m), m);
    let (mut old_s, mut s) = (1i64, 0i64);

    while r != 0 {
        let q = old_r / r;
        (old_r, r) = (r, old_r - q * r);
        (old_s, s) = (s, old_s - q * s);
    }

    if old_r != 1 {
        return None;
    }
    Some(old_s.rem_euclid(m))
}
