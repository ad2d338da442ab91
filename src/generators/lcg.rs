use super::{Generator, InvalidParameterError};
use crate::number_theory::satisfies_hull_dobell;

/// Linear Congruential Generator
///
/// Xi+1 = (a x Xi + c) mod m
///
/// here state is Xi, with 0 < a < m, c < m and Xi < m
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lcg {
    a: u64,
    c: u64,
    m: u64,
    state: u64,
}

impl Lcg {
    pub fn new(
        multiplier: u64,
        seed: u64,
        increment: u64,
        modulus: u64,
    ) -> Result<Lcg, InvalidParameterError> {
        if modulus == 0 {
            return Err(InvalidParameterError::ZeroModulus);
        }
        if multiplier == 0 || multiplier >= modulus {
            return Err(InvalidParameterError::MultiplierOutOfRange {
                multiplier,
                modulus,
            });
        }
        check_seed(seed, modulus)?;
        if increment >= modulus {
            return Err(InvalidParameterError::IncrementOutOfRange {
                increment,
                modulus,
            });
        }

        log::debug!(
            "LCG created: a={}, c={}, m={}, seed={}",
            multiplier,
            increment,
            modulus,
            seed
        );
        Ok(Lcg {
            a: multiplier,
            c: increment,
            m: modulus,
            state: seed,
        })
    }

    pub fn multiplier(&self) -> u64 {
        self.a
    }

    pub fn increment(&self) -> u64 {
        self.c
    }

    /// Whether the parameters meet the Hull–Dobell conditions, i.e. every
    /// seed leads to a cycle through all `m` residues. Informational only.
    pub fn has_full_period(&self) -> bool {
        satisfies_hull_dobell(self.a, self.c, self.m)
    }
}

fn check_seed(seed: u64, modulus: u64) -> Result<(), InvalidParameterError> {
    if seed >= modulus {
        return Err(InvalidParameterError::SeedOutOfRange { seed, modulus });
    }
    Ok(())
}

impl Generator for Lcg {
    fn name(&self) -> &'static str {
        "LCG"
    }

    fn modulus(&self) -> u64 {
        self.m
    }

    fn seed(&mut self, value: u64) -> Result<(), InvalidParameterError> {
        check_seed(value, self.m)?;
        log::debug!("LCG reseeded: {}", value);
        self.state = value;
        Ok(())
    }

    fn next(&mut self) -> u64 {
        let next = (self.a as u128 * self.state as u128 + self.c as u128) % self.m as u128;
        self.state = next as u64;
        self.state
    }

    fn current_state(&self) -> u64 {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_first_values() {
        let mut lcg = Lcg::new(5, 0, 2, 25).unwrap();
        assert_eq!(lcg.next(), 2);
        assert_eq!(lcg.next(), 12);
        // (5 * 12 + 2) mod 25 = 12, a fixed point
        assert_eq!(lcg.next(), 12);
        assert_eq!(lcg.current_state(), 12);
    }

    #[test]
    fn test_next_returns_new_state() {
        let mut lcg = Lcg::new(7, 3, 1, 10).unwrap();
        let value = lcg.next();
        assert_eq!(value, 2);
        assert_eq!(value, lcg.current_state());
    }

    #[test]
    fn test_current_state_has_no_side_effects() {
        let lcg = Lcg::new(5, 4, 2, 25).unwrap();
        assert_eq!(lcg.current_state(), 4);
        assert_eq!(lcg.current_state(), 4);
        assert_eq!((lcg.multiplier(), lcg.increment(), lcg.modulus()), (5, 2, 25));
    }

    #[test]
    fn test_rejects_zero_modulus() {
        assert_eq!(Lcg::new(1, 0, 0, 0), Err(InvalidParameterError::ZeroModulus));
    }

    #[test]
    fn test_rejects_multiplier_out_of_range() {
        assert!(matches!(
            Lcg::new(0, 0, 2, 25),
            Err(InvalidParameterError::MultiplierOutOfRange { .. })
        ));
        assert!(matches!(
            Lcg::new(25, 0, 2, 25),
            Err(InvalidParameterError::MultiplierOutOfRange { .. })
        ));
    }

    #[test]
    fn test_rejects_seed_out_of_range() {
        assert_eq!(
            Lcg::new(5, 25, 2, 25),
            Err(InvalidParameterError::SeedOutOfRange {
                seed: 25,
                modulus: 25
            })
        );
    }

    #[test]
    fn test_rejects_increment_out_of_range() {
        assert_eq!(
            Lcg::new(5, 0, 30, 25),
            Err(InvalidParameterError::IncrementOutOfRange {
                increment: 30,
                modulus: 25
            })
        );
    }

    #[test]
    fn test_zero_increment_allowed() {
        let mut lcg = Lcg::new(3, 1, 0, 7).unwrap();
        assert_eq!(lcg.next(), 3);
        assert_eq!(lcg.next(), 2);
    }

    #[test]
    fn test_reseed() {
        let mut lcg = Lcg::new(5, 0, 2, 25).unwrap();
        lcg.next();
        lcg.seed(0).unwrap();
        assert_eq!(lcg.current_state(), 0);
        assert_eq!(lcg.next(), 2);
    }

    #[test]
    fn test_reseed_rejected_keeps_state() {
        let mut lcg = Lcg::new(5, 0, 2, 25).unwrap();
        lcg.next();
        assert!(lcg.seed(100).is_err());
        assert_eq!(lcg.current_state(), 2);
    }

    #[test]
    fn test_full_period_visits_every_residue() {
        let mut lcg = Lcg::new(5, 0, 3, 16).unwrap();
        assert!(lcg.has_full_period());

        let seen: BTreeSet<u64> = lcg.sequence().take(16).collect();
        assert_eq!(seen.len(), 16);
        // Period 16 returns to the seed
        assert_eq!(lcg.current_state(), 0);
    }

    #[test]
    fn test_short_period_detected() {
        let lcg = Lcg::new(5, 0, 2, 25).unwrap();
        assert!(!lcg.has_full_period());
    }

    #[test]
    fn test_large_modulus_does_not_overflow() {
        let m = u64::MAX;
        let mut lcg = Lcg::new(m - 1, m - 1, m - 1, m).unwrap();
        // (m-1)^2 + (m-1) = m(m-1) = 0 mod m
        assert_eq!(lcg.next(), 0);
        assert_eq!(lcg.next(), m - 1);
    }
}
