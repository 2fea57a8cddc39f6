//! RNG module - deterministic randomness for screens
//!
//! Every random decision a game makes (ball serve angle, AI jitter, food and
//! pipe placement) goes through [`SimpleRng`] so a console started from the
//! same seed and fed the same inputs replays identically.

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // A zero state would make the first output depend only on the increment.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Current internal state; feeding it to [`SimpleRng::new`] resumes the sequence.
    pub fn state(&self) -> u32 {
        self.state
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // (a * state + c) mod 2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        self.next_u32() % max
    }

    /// Uniform integer in `[lo, hi]` (inclusive).
    pub fn range_i32(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        let span = (hi - lo) as u32 + 1;
        lo + self.next_range(span) as i32
    }

    /// Uniform float in `[0, 1)`.
    pub fn next_f32(&mut self) -> f32 {
        // Top 24 bits give every representable step of an f32 mantissa.
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }

    /// Uniform float in `[lo, hi)`.
    pub fn range_f32(&mut self, lo: f32, hi: f32) -> f32 {
        lo + (hi - lo) * self.next_f32()
    }

    /// Fair coin flip.
    pub fn coin(&mut self) -> bool {
        self.next_u32() & 0x8000_0000 != 0
    }

    /// Derive an independent seed for a child generator.
    pub fn fork_seed(&mut self) -> u32 {
        self.next_u32() ^ 0x9E37_79B9
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_zero_seed_is_remapped() {
        let mut a = SimpleRng::new(0);
        let mut b = SimpleRng::new(1);
        assert_eq!(a.next_u32(), b.next_u32());
    }

    #[test]
    fn test_ranges_stay_in_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            let i = rng.range_i32(5, 13);
            assert!((5..=13).contains(&i));

            let f = rng.range_f32(-0.3, 0.3);
            assert!((-0.3..0.3).contains(&f));

            let u = rng.next_f32();
            assert!((0.0..1.0).contains(&u));
        }
    }

    #[test]
    fn test_degenerate_ranges() {
        let mut rng = SimpleRng::new(3);
        assert_eq!(rng.next_range(0), 0);
        assert_eq!(rng.range_i32(4, 4), 4);
        assert_eq!(rng.range_i32(9, 2), 9);
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut rng = SimpleRng::new(99);
        let mut values = [0, 1, 2, 3, 4, 5, 6];
        rng.shuffle(&mut values);
        let mut sorted = values;
        sorted.sort_unstable();
        assert_eq!(sorted, [0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_state_resumes_sequence() {
        let mut rng = SimpleRng::new(42);
        rng.next_u32();
        let mut resumed = SimpleRng::new(rng.state());
        assert_eq!(rng.next_u32(), resumed.next_u32());
    }
}
