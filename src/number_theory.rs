//! Integer helpers used to validate generator parameters.
//!
//! Everything here works on `u64` and widens to `u128` for products, so the
//! results stay exact for moduli as large as `2^64 - 1`.

use std::collections::BTreeSet;

/// Trial-division primality test.
///
/// Returns `false` for `n <= 1`. Runs in `O(sqrt(n))`.
pub fn is_prime(n: u64) -> bool {
    if n <= 1 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut divisor = 3;
    // divisor <= n / divisor  <=>  divisor * divisor <= n, without overflow
    while divisor <= n / divisor {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}

/// Distinct prime factors of `n`, smallest first.
///
/// `0` and `1` have no prime factors and yield an empty set.
pub fn prime_factors(mut n: u64) -> BTreeSet<u64> {
    let mut factors = BTreeSet::new();
    if n < 2 {
        return factors;
    }

    while n % 2 == 0 {
        factors.insert(2);
        n /= 2;
    }

    let mut divisor = 3;
    while divisor <= n / divisor {
        while n % divisor == 0 {
            factors.insert(divisor);
            n /= divisor;
        }
        divisor += 2;
    }

    // Whatever survives trial division up to its square root is prime
    if n > 1 {
        factors.insert(n);
    }
    factors
}

/// `base^exp mod modulus` by square-and-multiply.
///
/// `modulus` must be nonzero.
pub fn mod_pow(base: u64, mut exp: u64, modulus: u64) -> u64 {
    debug_assert!(modulus != 0, "mod_pow with zero modulus");
    if modulus == 1 {
        return 0;
    }
    let m = modulus as u128;
    let mut base = base as u128 % m;
    let mut result: u128 = 1;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result * base % m;
        }
        base = base * base % m;
        exp >>= 1;
    }
    result as u64
}

pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Checks whether `g` has multiplicative order `n - 1` modulo the prime `n`.
///
/// `prime_factors_of_phi` must be the distinct prime factors of `n - 1`. The
/// order of `g` divides `n - 1`, so it is maximal exactly when
/// `g^((n - 1) / q) != 1 (mod n)` for every such factor `q`.
pub fn multiplicative_order_is_maximal(
    g: u64,
    n: u64,
    prime_factors_of_phi: &BTreeSet<u64>,
) -> bool {
    if n < 2 || g % n == 0 {
        return false;
    }
    let phi = n - 1;
    prime_factors_of_phi
        .iter()
        .all(|&q| mod_pow(g, phi / q, n) != 1)
}

/// Checks whether `g` is a primitive root modulo the prime `p`.
///
/// Only meaningful for prime `p`, where `phi(p) = p - 1`.
pub fn is_primitive_root(g: u64, p: u64) -> bool {
    if p < 2 {
        return false;
    }
    multiplicative_order_is_maximal(g, p, &prime_factors(p - 1))
}

/// Hull–Dobell theorem: `X' = (aX + c) mod m` has period `m` for every seed iff
/// `gcd(c, m) = 1`, every prime factor of `m` divides `a - 1`, and `4 | a - 1`
/// whenever `4 | m`.
pub fn satisfies_hull_dobell(multiplier: u64, increment: u64, modulus: u64) -> bool {
    if modulus == 0 {
        return false;
    }
    let Some(a_minus_one) = multiplier.checked_sub(1) else {
        // a = 0 collapses to X' = c, full period only in the trivial ring
        return modulus == 1;
    };

    gcd(increment, modulus) == 1
        && prime_factors(modulus)
            .iter()
            .all(|&q| a_minus_one % q == 0)
        && (modulus % 4 != 0 || a_minus_one % 4 == 0)
}
