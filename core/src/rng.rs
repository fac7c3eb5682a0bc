//! Deterministic RNG for boss target selection.
//!
//! The engine itself is deterministic; the only randomness in a match is
//! which team unit the boss swings at, and that lives behind this trait so
//! tests can script it and replays can reproduce it from a seed.

/// Random source used by choosers
pub trait BattleRng {
    fn next_u32(&mut self) -> u32;

    /// Random index in `[0, len)`; returns 0 when `len` is 0
    fn pick_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        (self.next_u32() as usize) % len
    }
}

/// XorShift32: small, fast, and reproducible from a seed.
///
/// Cryptographic quality is irrelevant here; the same seed always yields the
/// same target sequence.
#[derive(Debug, Clone)]
pub struct XorShiftRng {
    state: u32,
}

impl XorShiftRng {
    /// Fold a u64 seed into the 32-bit state, keeping it non-zero
    pub fn seed_from_u64(seed: u64) -> Self {
        let state = ((seed as u32) ^ ((seed >> 32) as u32)).max(1);
        Self { state }
    }
}

impl BattleRng for XorShiftRng {
    fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }
}
