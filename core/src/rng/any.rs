//! Runtime-selected generator

use md5::Md5;
use sha2::{Digest, Sha256, Sha512};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{HashRandom, Md5Random, Sha256Random, Sha512Random};
use crate::seed::Seed;

/// Algorithm name that matches none of the supported digests
#[derive(Debug, Error, PartialEq)]
#[error("Unknown algorithm: {0} (expected sha256, sha512 or md5)")]
pub struct UnknownAlgorithm(pub String);

/// Digest primitive and state strategy of a generator
///
/// Serialized as its lowercase name. Deserialization goes through `FromStr`,
/// so `"SHA-256"` and `"sha256"` are both accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Algorithm {
    /// SHA-256, counter-chained
    Sha256,
    /// SHA-512, feedback-chained
    Sha512,
    /// MD5, feedback-chained
    Md5,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Sha256, Algorithm::Sha512, Algorithm::Md5];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Sha256 => "sha256",
            Algorithm::Sha512 => "sha512",
            Algorithm::Md5 => "md5",
        }
    }

    /// Digest length in bytes
    pub fn output_len(&self) -> usize {
        match self {
            Algorithm::Sha256 => Sha256::output_size(),
            Algorithm::Sha512 => Sha512::output_size(),
            Algorithm::Md5 => Md5::output_size(),
        }
    }

    /// Whether output N can be reached without computing 1..N-1
    pub fn is_seekable(&self) -> bool {
        matches!(self, Algorithm::Sha256)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "");
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == normalized)
            .ok_or_else(|| UnknownAlgorithm(s.to_string()))
    }
}

impl TryFrom<String> for Algorithm {
    type Error = UnknownAlgorithm;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

impl From<Algorithm> for String {
    fn from(algorithm: Algorithm) -> Self {
        algorithm.name().to_string()
    }
}

/// One of the three generators, chosen at runtime
///
/// # Example
/// ```
/// use hash_random_core::{Algorithm, AnyHashRandom, HashRandom};
///
/// let mut rng = AnyHashRandom::new(Algorithm::Md5, "42");
/// assert_eq!(rng.algorithm(), Algorithm::Md5);
/// let _ = rng.next_int_below(100);
/// ```
#[derive(Debug, Clone)]
pub enum AnyHashRandom {
    Sha256(Sha256Random),
    Sha512(Sha512Random),
    Md5(Md5Random),
}

impl AnyHashRandom {
    pub fn new(algorithm: Algorithm, seed: impl Into<Seed>) -> Self {
        match algorithm {
            Algorithm::Sha256 => AnyHashRandom::Sha256(Sha256Random::new(seed)),
            Algorithm::Sha512 => AnyHashRandom::Sha512(Sha512Random::new(seed)),
            Algorithm::Md5 => AnyHashRandom::Md5(Md5Random::new(seed)),
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        match self {
            AnyHashRandom::Sha256(_) => Algorithm::Sha256,
            AnyHashRandom::Sha512(_) => Algorithm::Sha512,
            AnyHashRandom::Md5(_) => Algorithm::Md5,
        }
    }
}

impl HashRandom for AnyHashRandom {
    fn seed(&self) -> &Seed {
        match self {
            AnyHashRandom::Sha256(rng) => rng.seed(),
            AnyHashRandom::Sha512(rng) => rng.seed(),
            AnyHashRandom::Md5(rng) => rng.seed(),
        }
    }

    fn raw_digest(&mut self) -> Vec<u8> {
        match self {
            AnyHashRandom::Sha256(rng) => rng.raw_digest(),
            AnyHashRandom::Sha512(rng) => rng.raw_digest(),
            AnyHashRandom::Md5(rng) => rng.raw_digest(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_parsing_is_lenient() {
        assert_eq!("SHA256".parse::<Algorithm>(), Ok(Algorithm::Sha256));
        assert_eq!("sha-512".parse::<Algorithm>(), Ok(Algorithm::Sha512));
        assert_eq!(" md5 ".parse::<Algorithm>(), Ok(Algorithm::Md5));
        assert_eq!(
            "crc32".parse::<Algorithm>(),
            Err(UnknownAlgorithm("crc32".to_string()))
        );
    }

    #[test]
    fn test_output_lengths() {
        assert_eq!(Algorithm::Sha256.output_len(), 32);
        assert_eq!(Algorithm::Sha512.output_len(), 64);
        assert_eq!(Algorithm::Md5.output_len(), 16);
    }

    #[test]
    fn test_any_matches_concrete_generator() {
        let mut any = AnyHashRandom::new(Algorithm::Sha512, "same");
        let mut concrete = Sha512Random::new("same");
        for _ in 0..5 {
            assert_eq!(any.next_long(), concrete.next_long());
        }
    }

    #[test]
    fn test_digest_len_matches_algorithm() {
        for algorithm in Algorithm::ALL {
            let mut rng = AnyHashRandom::new(algorithm, "len");
            assert_eq!(rng.raw_digest().len(), algorithm.output_len());
        }
    }
}
