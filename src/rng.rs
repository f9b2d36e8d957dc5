//! Linear-congruential generator used for every random draw in maze generation.
//!
//! The generator has no hidden state: [`next_seed`] and [`random_in_range`] take the current
//! seed and hand back the next one. [`Lcg`] is a small convenience wrapper that threads the
//! seed for callers that draw many numbers in sequence.

use rand::{RngCore, SeedableRng};

/// Multiplier.
pub const A: i64 = 1103515245;
/// Increment.
pub const C: i64 = 12345;
/// Modulus, 2^31.
pub const M: i64 = 0x8000_0000;

/// Advances the seed by one LCG step: `(A * seed + C) mod M`.
///
/// The remainder is truncating, so a negative seed can yield a negative result.
/// [`random_in_range`] normalizes it with `abs()`.
pub fn next_seed(seed: i64) -> i64 {
    // i128 keeps A * seed exact for the whole i64 range
    ((A as i128 * seed as i128 + C as i128) % M as i128) as i64
}

/// Draws a number in `0..n` and returns it together with the next seed.
///
/// The returned seed is always non-negative. For `n <= 1` the value is always `0`.
pub fn random_in_range(seed: i64, n: u64) -> (i64, u64) {
    let seed = next_seed(seed).abs();
    if n <= 1 {
        return (seed, 0);
    }
    // floor(seed / M * n), exact in integer arithmetic
    let value = (seed as u128 * n as u128) >> 31;
    (seed, value as u64)
}

/// Stateful wrapper around [`random_in_range`].
///
/// The generators draw through [`Lcg::next_index`], which keeps the exact range scaling of
/// [`random_in_range`]. The `RngCore` and `SeedableRng` impls are for callers that want the
/// same seeded sequence behind the `rand` API, for example to shuffle or sample their own data
/// alongside a maze. `rand`'s range methods scale differently, so they do not reproduce
/// [`Lcg::next_index`] draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lcg {
    seed: i64,
}

impl Lcg {
    pub fn new(seed: i64) -> Self {
        Lcg { seed }
    }

    /// The seed the next draw will start from.
    pub fn seed(&self) -> i64 {
        self.seed
    }

    /// Draws an index in `0..len`, advancing the internal seed.
    pub fn next_index(&mut self, len: usize) -> usize {
        let (seed, value) = random_in_range(self.seed, len as u64);
        tracing::trace!("[rng] draw in 0..{} from seed {} -> {}", len, self.seed, value);
        self.seed = seed;
        value as usize
    }
}

impl RngCore for Lcg {
    fn next_u32(&mut self) -> u32 {
        self.seed = next_seed(self.seed).abs();
        // Only 31 bits are produced per step; the top bit comes from a second step
        let low = self.seed as u32;
        self.seed = next_seed(self.seed).abs();
        low | (((self.seed as u32) << 1) & 0x8000_0000)
    }

    fn next_u64(&mut self) -> u64 {
        let high = self.next_u32() as u64;
        let low = self.next_u32() as u64;
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

impl SeedableRng for Lcg {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Lcg::new(i64::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Lcg::new(state as i64)
    }
}
