//! RANDU, the multiplicative generator IBM shipped in the 1960s.
//!
//! Xi+1 = 65539 x Xi mod 2^31
//!
//! Because `65539 = 2^16 + 3`, squaring the multiplier gives
//! `65539^2 = 6 x 65539 - 9 (mod 2^31)`, so every three consecutive outputs
//! satisfy `x2 = 6 x1 - 9 x0 (mod 2^31)`. Plotted as points in the unit cube
//! they fall on at most 15 planes (and the general LCG bound on this modulus
//! caps the count at 2344). It is kept here as a bad example; the parameters
//! must stay as they are.

use super::{Generator, InvalidParameterError};
use crate::configs::{RANDU_MODULUS, RANDU_MULTIPLIER};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Randu {
    state: u64,
}

impl Randu {
    /// `seed` must satisfy 0 < seed < 2^31. Odd seeds are recommended: an even
    /// seed keeps its factors of two and reaches lower quality sooner.
    pub fn new(seed: u64) -> Result<Randu, InvalidParameterError> {
        check_seed(seed)?;
        log::debug!("RANDU created: seed={}", seed);
        Ok(Randu { state: seed })
    }

    /// Advance and return the new state as `state / 2^31`, in [0, 1).
    pub fn next_randu(&mut self) -> f64 {
        self.next_f64()
    }

    /// Three consecutive states.
    pub fn next_triplet(&mut self) -> [u64; 3] {
        [self.next(), self.next(), self.next()]
    }

    /// `(9 x0 - 6 x1 + x2) mod 2^31`, zero for every consecutive RANDU triple.
    pub fn plane_residue(x0: u64, x1: u64, x2: u64) -> u64 {
        let mask = RANDU_MODULUS - 1;
        9u64.wrapping_mul(x0)
            .wrapping_sub(6u64.wrapping_mul(x1))
            .wrapping_add(x2)
            & mask
    }
}

fn check_seed(seed: u64) -> Result<(), InvalidParameterError> {
    if seed == 0 || seed >= RANDU_MODULUS {
        return Err(InvalidParameterError::SeedOutOfRange {
            seed,
            modulus: RANDU_MODULUS,
        });
    }
    if seed % 2 == 0 {
        log::debug!("RANDU seed {} is even", seed);
    }
    Ok(())
}

impl Generator for Randu {
    fn name(&self) -> &'static str {
        "RANDU"
    }

    fn modulus(&self) -> u64 {
        RANDU_MODULUS
    }

    fn seed(&mut self, value: u64) -> Result<(), InvalidParameterError> {
        check_seed(value)?;
        log::debug!("RANDU reseeded: {}", value);
        self.state = value;
        Ok(())
    }

    fn next(&mut self) -> u64 {
        // state < 2^31 and the multiplier < 2^17, so the product fits in u64
        self.state = (RANDU_MULTIPLIER * self.state) % RANDU_MODULUS;
        self.state
    }

    fn current_state(&self) -> u64 {
        self.state
    }
}
