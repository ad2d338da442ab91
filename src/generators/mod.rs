use thiserror::Error;

pub mod lcg;
pub mod lehmer;
pub mod randu;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidParameterError {
    /// Congruences modulo zero are undefined.
    #[error("Modulus must be greater than zero")]
    ZeroModulus,

    /// The multiplier must satisfy 0 < multiplier < modulus.
    #[error("Multiplier {multiplier} out of range, expected 0 < multiplier < {modulus}")]
    MultiplierOutOfRange { multiplier: u64, modulus: u64 },

    /// The seed lies outside the range the generator accepts.
    #[error("Seed {seed} out of range for modulus {modulus}")]
    SeedOutOfRange { seed: u64, modulus: u64 },

    /// The increment must satisfy increment < modulus.
    #[error("Increment {increment} out of range, expected increment < {modulus}")]
    IncrementOutOfRange { increment: u64, modulus: u64 },

    /// Lehmer generators need a prime modulus.
    #[error("Modulus {modulus} is not prime")]
    ModulusNotPrime { modulus: u64 },

    /// Lehmer generators need a multiplier of maximal multiplicative order.
    #[error("Multiplier {multiplier} is not a primitive root modulo {modulus}")]
    NotPrimitiveRoot { multiplier: u64, modulus: u64 },

    /// A Lehmer seed sharing a factor with the modulus never reaches the full cycle.
    #[error("Seed {seed} is not coprime to modulus {modulus}")]
    SeedNotCoprime { seed: u64, modulus: u64 },
}

pub trait Generator {
    /// Name of the generator (e.g., "LCG", "RANDU")
    fn name(&self) -> &'static str;

    /// Every state value is below this
    fn modulus(&self) -> u64;

    /// Replace the current state, validated the same way as at construction.
    /// On error the previous state is kept.
    fn seed(&mut self, value: u64) -> Result<(), InvalidParameterError>;

    /// Advance one step and return the new state
    fn next(&mut self) -> u64;

    /// Current state, without advancing
    fn current_state(&self) -> u64;

    /// Advance one step and return the new state scaled into [0, 1)
    fn next_f64(&mut self) -> f64 {
        self.next() as f64 / self.modulus() as f64
    }

    /// Endless iterator over successive states
    fn sequence(&mut self) -> Sequence<'_, Self>
    where
        Self: Sized,
    {
        Sequence { generator: self }
    }
}

/// Iterator returned by [`Generator::sequence`].
#[derive(Debug)]
pub struct Sequence<'a, G: Generator> {
    generator: &'a mut G,
}

impl<G: Generator> Iterator for Sequence<'_, G> {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        Some(self.generator.next())
    }
}

#[cfg(test)]
mod tests {
    use super::lcg::Lcg;
    use super::*;

    #[test]
    fn test_sequence_matches_repeated_next() {
        let mut a = Lcg::new(5, 3, 3, 16).unwrap();
        let mut b = a.clone();

        let from_sequence: Vec<u64> = a.sequence().take(20).collect();
        let from_next: Vec<u64> = (0..20).map(|_| b.next()).collect();

        assert_eq!(from_sequence, from_next);
        assert_eq!(a.current_state(), b.current_state());
    }

    #[test]
    fn test_next_f64_in_unit_interval() {
        let mut lcg = Lcg::new(5, 3, 3, 16).unwrap();
        for _ in 0..100 {
            let u = lcg.next_f64();
            assert!((0.0..1.0).contains(&u));
        }
    }

    #[test]
    fn test_error_messages_name_the_values() {
        let err = InvalidParameterError::NotPrimitiveRoot {
            multiplier: 2,
            modulus: 2147483647,
        };
        assert_eq!(
            err.to_string(),
            "Multiplier 2 is not a primitive root modulo 2147483647"
        );
    }

    #[test]
    fn test_trait_objects() {
        let mut generators: Vec<Box<dyn Generator>> = vec![
            Box::new(Lcg::new(5, 0, 2, 25).unwrap()),
            Box::new(super::randu::Randu::new(1).unwrap()),
            Box::new(super::lehmer::Lehmer::new(1).unwrap()),
        ];
        for generator in generators.iter_mut() {
            let state = generator.next();
            assert_eq!(state, generator.current_state());
            assert!(state < generator.modulus());
        }
    }
}
