//! Counter-chained generator
//!
//! Output N is the digest of the ASCII string `"{N}-{seed}"`. Nothing from
//! earlier outputs feeds into later ones, so the counter alone is the
//! position in the stream and can be moved freely with [`CounterRandom::seek`].

use log::trace;
use sha2::{Digest, Sha256};
use std::any::type_name;
use std::fmt;
use std::marker::PhantomData;

use super::HashRandom;
use crate::seed::{ascii_encode, Seed};

/// SHA-256 counter-chained generator
pub type Sha256Random = CounterRandom<Sha256>;

/// Generator that hashes an incrementing counter together with the seed
///
/// # Example
/// ```
/// use hash_random_core::{HashRandom, Sha256Random};
///
/// let mut rng = Sha256Random::new(42);
/// let first = rng.next_long();
/// assert_eq!(rng.position(), 1);
///
/// // Jumping back replays the same digest
/// rng.seek(0);
/// assert_eq!(rng.next_long(), first);
/// ```
pub struct CounterRandom<D> {
    seed: Seed,
    /// Index of the next digest to compute
    counter: u64,
    _digest: PhantomData<fn() -> D>,
}

impl<D: Digest> CounterRandom<D> {
    /// Create a generator positioned at counter 0
    pub fn new(seed: impl Into<Seed>) -> Self {
        Self {
            seed: seed.into(),
            counter: 0,
            _digest: PhantomData,
        }
    }

    /// Create a generator from a floating-point seed
    pub fn from_f64(seed: f64) -> Self {
        Self::new(seed)
    }

    /// Create a generator from a 32-bit integer seed
    pub fn from_i32(seed: i32) -> Self {
        Self::new(seed)
    }

    /// Create a generator from a 64-bit integer seed
    pub fn from_i64(seed: i64) -> Self {
        Self::new(seed)
    }

    /// Counter value the next digest will use
    pub fn position(&self) -> u64 {
        self.counter
    }

    /// Move to an arbitrary position in the stream
    pub fn seek(&mut self, position: u64) {
        self.counter = position;
    }

    /// Digest at `position` without moving the generator
    pub fn digest_at(&self, position: u64) -> Vec<u8> {
        let input = ascii_encode(&format!("{}-{}", position, self.seed));
        D::digest(&input).to_vec()
    }
}

impl<D: Digest> HashRandom for CounterRandom<D> {
    fn seed(&self) -> &Seed {
        &self.seed
    }

    fn raw_digest(&mut self) -> Vec<u8> {
        let digest = self.digest_at(self.counter);
        trace!(
            "counter digest: digest={} position={} seed={} len={}",
            type_name::<D>(),
            self.counter,
            self.seed,
            digest.len()
        );
        self.counter = self.counter.wrapping_add(1);
        digest
    }
}

impl<D> Clone for CounterRandom<D> {
    fn clone(&self) -> Self {
        Self {
            seed: self.seed.clone(),
            counter: self.counter,
            _digest: PhantomData,
        }
    }
}

impl<D> fmt::Debug for CounterRandom<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CounterRandom")
            .field("digest", &type_name::<D>())
            .field("seed", &self.seed)
            .field("counter", &self.counter)
            .finish()
    }
}
