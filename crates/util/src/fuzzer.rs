use rand::seq::{index, SliceRandom};
use rand::{rngs::OsRng, Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

/// One step of a random container workload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Insert(i64),
    Remove(i64),
    Find(i64),
}

/// Random test-data generator.
///
/// Uses the xoshiro256** PRNG so a failing run can be replayed from
/// [`Fuzzer::seed`].
///
/// # Examples
///
/// ```
/// use containers_util::Fuzzer;
///
/// let mut fuzzer = Fuzzer::from_u64(7);
/// let values = fuzzer.distinct_ints(100, 0, 1_000);
/// assert_eq!(values.len(), 100);
/// assert!(values.iter().all(|v| (0..1_000).contains(v)));
/// ```
pub struct Fuzzer {
    /// The seed used to initialize the PRNG.
    pub seed: [u8; 32],
    rng: Xoshiro256StarStar,
}

impl Fuzzer {
    /// Create a new fuzzer with an optional seed.
    ///
    /// If no seed is provided, a random seed is drawn from `OsRng`.
    pub fn new(seed: Option<[u8; 32]>) -> Self {
        let seed = seed.unwrap_or_else(|| {
            let mut bytes = [0u8; 32];
            OsRng.fill_bytes(&mut bytes);
            bytes
        });
        Self {
            seed,
            rng: Xoshiro256StarStar::from_seed(seed),
        }
    }

    pub fn from_u64(seed: u64) -> Self {
        let mut bytes = [0u8; 32];
        bytes[..8].copy_from_slice(&seed.to_le_bytes());
        Self::new(Some(bytes))
    }

    /// Random integer in `[min, max]` (inclusive).
    pub fn random_int(&mut self, min: i64, max: i64) -> i64 {
        self.rng.gen_range(min..=max)
    }

    /// Pick a random element from a non-empty slice.
    pub fn pick<'a, T>(&mut self, elements: &'a [T]) -> &'a T {
        &elements[self.rng.gen_range(0..elements.len())]
    }

    pub fn shuffle<T>(&mut self, elements: &mut [T]) {
        elements.shuffle(&mut self.rng);
    }

    /// `n` distinct integers from `[min, max)`, in random order.
    ///
    /// Panics if the range holds fewer than `n` values.
    pub fn distinct_ints(&mut self, n: usize, min: i64, max: i64) -> Vec<i64> {
        let span = (max - min) as usize;
        index::sample(&mut self.rng, span, n)
            .into_iter()
            .map(|offset| min + offset as i64)
            .collect()
    }

    /// Random mix of inserts, removes and lookups over `[0, max_value)`.
    pub fn ops(&mut self, n: usize, max_value: i64) -> Vec<Op> {
        (0..n)
            .map(|_| {
                let v = self.rng.gen_range(0..max_value);
                match self.rng.gen_range(0..3) {
                    0 => Op::Insert(v),
                    1 => Op::Remove(v),
                    _ => Op::Find(v),
                }
            })
            .collect()
    }
}
