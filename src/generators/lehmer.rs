//! Lehmer / Park–Miller multiplicative generator.
//!
//! Xi+1 = a x Xi mod m
//!
//! With `m` prime and `a` a primitive root modulo `m`, every seed in
//! `1..m` lies on a single cycle of length `m - 1`.

use super::{Generator, InvalidParameterError};
use crate::configs::{MINSTD0_MULTIPLIER, MINSTD_MODULUS, MINSTD_MULTIPLIER};
use crate::number_theory::{gcd, is_prime, is_primitive_root};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lehmer {
    a: u64,
    m: u64,
    state: u64,
}

impl Lehmer {
    /// MINSTD (`minstd_rand`): a = 48271, m = 2^31 - 1.
    pub fn new(seed: u64) -> Result<Lehmer, InvalidParameterError> {
        Self::with_params(MINSTD_MULTIPLIER, seed, MINSTD_MODULUS)
    }

    /// The original 1988 Park–Miller parameters (`minstd_rand0`): a = 16807, m = 2^31 - 1.
    pub fn minstd_rand0(seed: u64) -> Result<Lehmer, InvalidParameterError> {
        Self::with_params(MINSTD0_MULTIPLIER, seed, MINSTD_MODULUS)
    }

    /// Validates, in order: `modulus` is prime, `multiplier` is a primitive
    /// root modulo `modulus`, and `seed` is a unit modulo `modulus`.
    ///
    /// Primality and the primitive-root check are both `O(sqrt(modulus))`.
    pub fn with_params(
        multiplier: u64,
        seed: u64,
        modulus: u64,
    ) -> Result<Lehmer, InvalidParameterError> {
        if !is_prime(modulus) {
            return Err(InvalidParameterError::ModulusNotPrime { modulus });
        }
        if multiplier == 0 || multiplier >= modulus {
            return Err(InvalidParameterError::MultiplierOutOfRange {
                multiplier,
                modulus,
            });
        }
        if !is_primitive_root(multiplier, modulus) {
            return Err(InvalidParameterError::NotPrimitiveRoot {
                multiplier,
                modulus,
            });
        }
        check_seed(seed, modulus)?;

        log::debug!(
            "Lehmer created: a={}, m={}, seed={}",
            multiplier,
            modulus,
            seed
        );
        Ok(Lehmer {
            a: multiplier,
            m: modulus,
            state: seed,
        })
    }

    pub fn multiplier(&self) -> u64 {
        self.a
    }
}

fn check_seed(seed: u64, modulus: u64) -> Result<(), InvalidParameterError> {
    if seed == 0 || seed >= modulus {
        return Err(InvalidParameterError::SeedOutOfRange { seed, modulus });
    }
    // Implied by the range check when the modulus is prime
    if gcd(seed, modulus) != 1 {
        return Err(InvalidParameterError::SeedNotCoprime { seed, modulus });
    }
    Ok(())
}

impl Generator for Lehmer {
    fn name(&self) -> &'static str {
        "Lehmer"
    }

    fn modulus(&self) -> u64 {
        self.m
    }

    fn seed(&mut self, value: u64) -> Result<(), InvalidParameterError> {
        check_seed(value, self.m)?;
        log::debug!("Lehmer reseeded: {}", value);
        self.state = value;
        Ok(())
    }

    fn next(&mut self) -> u64 {
        self.state = (self.a as u128 * self.state as u128 % self.m as u128) as u64;
        self.state
    }

    fn current_state(&self) -> u64 {
        self.state
    }
}
