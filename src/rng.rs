//! Deterministic seeded random stream (mulberry32).
//!
//! The same seed yields the same sequence on every platform: all mixing is
//! done with wrapping 32-bit arithmetic and fixed constants.

use rand::{Error, RngCore, SeedableRng};

/// Added to the state before every draw
const INCREMENT: u32 = 0x6D2B_79F5;
/// 2^32, maps a u32 draw onto [0, 1)
const U32_RANGE: f64 = 4_294_967_296.0;

/// Counter-based 32-bit generator with two xor-shift/multiply mixing rounds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Next raw 32-bit draw
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(INCREMENT);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Next float in [0, 1)
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / U32_RANGE
    }
}

impl RngCore for Mulberry32 {
    fn next_u32(&mut self) -> u32 {
        Mulberry32::next_u32(self)
    }

    fn next_u64(&mut self) -> u64 {
        let lo = u64::from(Mulberry32::next_u32(self));
        let hi = u64::from(Mulberry32::next_u32(self));
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = Mulberry32::next_u32(self).to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Mulberry32 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}
