//! Small seedable linear congruential generator for casual randomness (which
//! cat meows next, which line it says). Deterministic under a fixed seed.

pub struct Lcg {
    state: u64,
}

impl Lcg {
    pub fn new(seed: u64) -> Self {
        // Avoid the all-zero fixed point.
        Self { state: seed | 1 }
    }

    fn next(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        // Low bits of an LCG are weak; use the upper half.
        self.state >> 32
    }

    /// Uniform index into a slice of length `len`. Returns 0 for empty slices
    /// so callers can guard on emptiness themselves.
    pub fn pick(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        (self.next() % len as u64) as usize
    }

    pub fn coin(&mut self) -> bool {
        self.next() & 1 == 0
    }

    /// True with probability `p` (clamped to [0, 1]).
    pub fn chance(&mut self, p: f64) -> bool {
        let v = self.next() as f64 / (u32::MAX as u64 + 1) as f64;
        v < p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic_for_fixed_seed() {
        let mut a = Lcg::new(42);
        let mut b = Lcg::new(42);
        for _ in 0..100 {
            assert_eq!(a.pick(9), b.pick(9));
        }
    }

    #[test]
    fn pick_stays_in_bounds() {
        let mut rng = Lcg::new(7);
        for _ in 0..1000 {
            assert!(rng.pick(9) < 9);
        }
        assert_eq!(rng.pick(0), 0);
    }

    #[test]
    fn coin_lands_on_both_sides() {
        let mut rng = Lcg::new(3);
        let heads = (0..1000).filter(|_| rng.coin()).count();
        assert!(heads > 300 && heads < 700, "suspicious coin bias: {heads}");
    }

    #[test]
    fn chance_extremes() {
        let mut rng = Lcg::new(11);
        assert!((0..100).all(|_| !rng.chance(0.0)));
        assert!((0..100).all(|_| rng.chance(1.0)));
    }
}
