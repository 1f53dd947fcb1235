//! Feedback-chained generators
//!
//! Each digest input is the seed's ASCII bytes followed by the previous
//! digest. The first call hashes the seed alone. Because every step needs the
//! one before it, there is no way to jump ahead; reaching output N means
//! computing outputs 1..N-1.

use log::trace;
use md5::Md5;
use sha2::{Digest, Sha512};
use std::any::type_name;
use std::fmt;
use std::marker::PhantomData;

use super::HashRandom;
use crate::seed::Seed;

/// SHA-512 feedback-chained generator
pub type Sha512Random = FeedbackRandom<Sha512>;

/// MD5 feedback-chained generator
pub type Md5Random = FeedbackRandom<Md5>;

/// Generator that feeds each digest back into the next hash input
///
/// # Example
/// ```
/// use hash_random_core::{HashRandom, Sha512Random};
///
/// let mut rng = Sha512Random::new("42");
/// assert!(rng.state().is_empty());
///
/// let digest = rng.raw_digest();
/// assert_eq!(rng.state(), digest.as_slice());
/// ```
pub struct FeedbackRandom<D> {
    seed: Seed,
    /// ASCII form of the seed, hashed ahead of the state on every call
    seed_bytes: Vec<u8>,
    /// Previous digest, empty before the first call
    state: Vec<u8>,
    _digest: PhantomData<fn() -> D>,
}

impl<D: Digest> FeedbackRandom<D> {
    /// Create a generator with empty feedback state
    pub fn new(seed: impl Into<Seed>) -> Self {
        let seed = seed.into();
        let seed_bytes = seed.ascii_bytes();
        Self {
            seed,
            seed_bytes,
            state: Vec::new(),
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

    /// The digest most recently produced, or empty before the first call
    pub fn state(&self) -> &[u8] {
        &self.state
    }
}

impl<D: Digest> HashRandom for FeedbackRandom<D> {
    fn seed(&self) -> &Seed {
        &self.seed
    }

    fn raw_digest(&mut self) -> Vec<u8> {
        let mut hasher = D::new();
        hasher.update(&self.seed_bytes);
        hasher.update(&self.state);
        let digest = hasher.finalize().to_vec();
        trace!(
            "feedback digest: digest={} seed={} prior_state_len={} len={}",
            type_name::<D>(),
            self.seed,
            self.state.len(),
            digest.len()
        );
        self.state.clone_from(&digest);
        digest
    }
}

impl<D> Clone for FeedbackRandom<D> {
    fn clone(&self) -> Self {
        Self {
            seed: self.seed.clone(),
            seed_bytes: self.seed_bytes.clone(),
            state: self.state.clone(),
            _digest: PhantomData,
        }
    }
}

impl<D> fmt::Debug for FeedbackRandom<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FeedbackRandom")
            .field("digest", &type_name::<D>())
            .field("seed", &self.seed)
            .field("state_len", &self.state.len())
            .finish()
    }
}
