//! Seeded pseudo-random source and per-chunk seed derivation
//!
//! Every generator owns its own `SeededRng` stream, so generation order of
//! unrelated chunks can never perturb results. The mixing functions use
//! exact wrapping 32-bit arithmetic: two streams built from the same seed
//! produce byte-identical sequences, which is the determinism contract the
//! whole crate rests on. Do not swap in a wider integer type.

/// Deterministic PRNG over a single 32-bit state word (mulberry32 mixing).
///
/// Produces `f32` values in `[0, 1)`. Not cryptographic, not intended to be -
/// it only has to be uniform enough for placement and naming decisions while
/// staying reproducible across platforms.
#[derive(Debug, Clone)]
pub struct SeededRng {
    state: u32,
}

impl SeededRng {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Re-seed in place, restarting the stream.
    pub fn reseed(&mut self, seed: u32) {
        self.state = seed;
    }

    /// Advance the stream and return the next value in `[0, 1)`.
    pub fn next(&mut self) -> f32 {
        self.state = self.state.wrapping_add(0x6D2B_79F5);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        let bits = t ^ (t >> 14);
        // Top 24 bits so the f32 mantissa is filled exactly once.
        (bits >> 8) as f32 / 16_777_216.0
    }

    /// Uniform value in `[min, max)`.
    pub fn next_range(&mut self, min: f32, max: f32) -> f32 {
        min + self.next() * (max - min)
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    pub fn next_index(&mut self, len: usize) -> usize {
        ((self.next() * len as f32) as usize).min(len - 1)
    }

    /// Uniform integer in `min..=max`.
    pub fn next_int(&mut self, min: u32, max: u32) -> u32 {
        min + (self.next() * (max - min + 1) as f32) as u32
    }

    /// True with probability `p`.
    pub fn chance(&mut self, p: f32) -> bool {
        self.next() < p
    }
}

/// Derive a per-chunk seed from chunk coordinates and the world seed.
///
/// Each coordinate is folded in with a distinct odd prime before an avalanche
/// finisher, so the result is never a function of `x + y` alone and mirrored
/// coordinates get unrelated seeds. All arithmetic wraps at 32 bits.
pub fn chunk_seed(chunk_x: i32, chunk_y: i32, world_seed: u32) -> u32 {
    let mut h = world_seed
        .wrapping_add((chunk_x as u32).wrapping_mul(0x9E37_79B1))
        .wrapping_add((chunk_y as u32).wrapping_mul(0x85EB_CA77));
    h ^= h >> 16;
    h = h.wrapping_mul(0x7FEB_352D);
    h ^= h >> 15;
    h = h.wrapping_mul(0x846C_A68B);
    h ^= h >> 16;
    h
}
