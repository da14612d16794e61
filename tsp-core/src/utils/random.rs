#[cfg(test)]
#[path = "../../tests/unit/utils/random_test.rs"]
mod random_test;

use rand::prelude::*;
use std::cell::RefCell;

/// Provides the way to use randomized values in generic way.
pub trait Random {
    /// Produces integral random value, uniformly distributed on the closed interval [min, max]
    fn uniform_int(&self, min: i32, max: i32) -> i32;

    /// Produces real random value, uniformly distributed on the closed interval [min, max)
    fn uniform_real(&self, min: f64, max: f64) -> f64;

    /// Tests probability value in (0., 1.) range.
    fn is_hit(&self, probability: f64) -> bool {
        probability > 0. && self.uniform_real(0., 1.) < probability.min(1.)
    }

    /// Returns a random index for a collection of given non-zero length.
    fn index(&self, len: usize) -> usize {
        assert!(len > 0);
        self.uniform_int(0, len as i32 - 1) as usize
    }
}

/// A default random implementation which owns its generator. It is not meant to be shared
/// between threads: every trial creates its own instance from a seed.
pub struct DefaultRandom {
    rng: RefCell<SmallRng>,
}

impl DefaultRandom {
    /// Creates a new instance of `DefaultRandom` with given seed.
    pub fn new_with_seed(seed: u64) -> Self {
        Self { rng: RefCell::new(SmallRng::seed_from_u64(seed)) }
    }
}

impl Default for DefaultRandom {
    fn default() -> Self {
        Self { rng: RefCell::new(SmallRng::from_entropy()) }
    }
}

impl Random for DefaultRandom {
    fn uniform_int(&self, min: i32, max: i32) -> i32 {
        if min == max {
            return min;
        }

        assert!(min < max);
        self.rng.borrow_mut().gen_range(min..=max)
    }

    fn uniform_real(&self, min: f64, max: f64) -> f64 {
        if (min - max).abs() < f64::EPSILON {
            return min;
        }

        assert!(min < max);
        self.rng.borrow_mut().gen_range(min..max)
    }
}

/// Shuffles items in place using Fisher-Yates algorithm driven by given random source.
pub fn shuffle<T>(items: &mut [T], random: &dyn Random) {
    for idx in (1..items.len()).rev() {
        let other = random.uniform_int(0, idx as i32) as usize;
        items.swap(idx, other);
    }
}
