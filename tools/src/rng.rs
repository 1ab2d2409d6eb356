//! Deterministic random number generation for the shop floor.
//!
//! RULE: the runner never calls a platform RNG. Every run is fully
//! reproducible from its seed, which keeps day-by-day output
//! comparable across machines and reruns.

use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

/// The single RNG stream driving one run's customer traffic.
pub struct FloorRng {
    inner: Pcg64Mcg,
}

impl FloorRng {
    pub fn new(seed: u64) -> Self {
        Self {
            inner: Pcg64Mcg::seed_from_u64(seed),
        }
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        use rand::RngCore;
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Uniform float in [lo, hi).
    pub fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }

    /// Bernoulli trial: returns true with probability p.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}
