/// RANDU multiplier, `2^16 + 3`.
pub const RANDU_MULTIPLIER: u64 = 65539;
/// RANDU modulus, `2^31`.
pub const RANDU_MODULUS: u64 = 1 << 31;

/// Park and Miller's revised multiplier (1993), used by `minstd_rand`.
pub const MINSTD_MULTIPLIER: u64 = 48271;
/// The original Park–Miller multiplier `7^5` (1988), used by `minstd_rand0`.
pub const MINSTD0_MULTIPLIER: u64 = 16807;
/// Mersenne prime `2^31 - 1`.
pub const MINSTD_MODULUS: u64 = (1 << 31) - 1;
