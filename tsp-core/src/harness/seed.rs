#[cfg(test)]
#[path = "../../tests/unit/harness/seed_test.rs"]
mod seed_test;

/// Produces seeds for trials. Seeds are derived from a base value and a monotonic counter mixed
/// with a bijective function, so all seeds produced by one sequence are distinct.
#[derive(Clone, Debug)]
pub struct SeedSequence {
    base: u64,
    counter: u64,
}

impl SeedSequence {
    /// Creates a new instance of `SeedSequence`.
    pub fn new(base: u64) -> Self {
        Self { base, counter: 0 }
    }

    /// Returns next seed.
    pub fn next_seed(&mut self) -> u64 {
        let seed = split_mix64(self.base.wrapping_add(self.counter));
        self.counter = self.counter.wrapping_add(1);

        seed
    }

    /// Returns a batch of seeds.
    pub fn next_batch(&mut self, size: usize) -> Vec<u64> {
        (0..size).map(|_| self.next_seed()).collect()
    }
}

/// SplitMix64 finalizer, see https://prng.di.unimi.it/splitmix64.c
fn split_mix64(value: u64) -> u64 {
    let mut z = value.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);

    z ^ (z >> 31)
}
