//! Injectable randomness.
//!
//! Handlers and the sampler draw through `RandomSource` so tests can pin
//! either branch of `/random` and the sampled values.

use rand::Rng;

pub trait RandomSource: Send + Sync {
    /// Uniform float in `[0, 1)`.
    fn unit(&self) -> f64;
    /// Uniform integer in `[0, bound)`. `bound` is at least 1.
    fn below(&self, bound: u32) -> u32;
}

/// Thread-local RNG from `rand`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn unit(&self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }

    fn below(&self, bound: u32) -> u32 {
        rand::thread_rng().gen_range(0..bound.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thread_random_stays_in_range() {
        let rng = ThreadRandom;
        for _ in 0..10_000 {
            let u = rng.unit();
            assert!((0.0..1.0).contains(&u));
            assert!(rng.below(100) < 100);
        }
        assert_eq!(rng.below(1), 0);
        assert_eq!(rng.below(0), 0);
    }
}
