//! Congruential pseudo-random generators: a general LCG, RANDU and the
//! Lehmer / Park–Miller MINSTD generator, behind one [`Generator`] trait.
//!
//! None of these are suitable for cryptography, and RANDU in particular is
//! included because its output is poor.

pub mod configs;
pub mod generators;
pub mod number_theory;

pub use generators::lcg::Lcg;
pub use generators::lehmer::Lehmer;
pub use generators::randu::Randu;
pub use generators::{Generator, InvalidParameterError, Sequence};
