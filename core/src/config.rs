//! Generator configuration
//!
//! Describes a generator as data so callers can pick the algorithm and seed
//! from a JSON document instead of code:
//!
//! ```json
//! { "algorithm": "sha256", "seed": "42", "start_position": 100 }
//! ```
//!
//! An omitted seed is resolved from the wall clock when the generator is
//! built, never earlier.

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::rng::{Algorithm, AnyHashRandom, HashRandom, UnknownAlgorithm};
use crate::seed::Seed;

/// Errors raised while reading or validating a generator configuration
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Unknown algorithm: {0} (expected sha256, sha512 or md5)")]
    UnknownAlgorithm(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Failed to serialize config: {0}")]
    Serialize(String),
}

impl From<UnknownAlgorithm> for ConfigError {
    fn from(err: UnknownAlgorithm) -> Self {
        ConfigError::UnknownAlgorithm(err.0)
    }
}

/// Wire shape read by [`GeneratorConfig::from_json`]
///
/// The algorithm stays a plain string here so an unrecognized name surfaces
/// as `ConfigError::UnknownAlgorithm` instead of a generic parse failure.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawGeneratorConfig {
    algorithm: String,
    #[serde(default)]
    seed: Option<String>,
    #[serde(default)]
    start_position: Option<u64>,
}

impl TryFrom<RawGeneratorConfig> for GeneratorConfig {
    type Error = ConfigError;

    fn try_from(raw: RawGeneratorConfig) -> Result<Self, Self::Error> {
        Ok(Self {
            algorithm: raw.algorithm.parse()?,
            seed: raw.seed,
            start_position: raw.start_position,
        })
    }
}

/// Serializable description of a generator
///
/// # Example
/// ```
/// use hash_random_core::{Algorithm, GeneratorConfig, HashRandom};
///
/// let config = GeneratorConfig::from_json(r#"{"algorithm": "sha512", "seed": "42"}"#).unwrap();
/// assert_eq!(config.algorithm, Algorithm::Sha512);
///
/// let mut rng = config.build().unwrap();
/// assert_eq!(rng.seed().as_str(), "42");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Digest primitive and state strategy
    pub algorithm: Algorithm,

    /// Seed string; `None` seeds from the current Unix time
    #[serde(default)]
    pub seed: Option<String>,

    /// Counter to start from (counter-chained algorithms only)
    #[serde(default)]
    pub start_position: Option<u64>,
}

impl GeneratorConfig {
    pub fn new(algorithm: Algorithm, seed: impl Into<String>) -> Self {
        Self {
            algorithm,
            seed: Some(seed.into()),
            start_position: None,
        }
    }

    /// Parse a JSON configuration document
    ///
    /// Algorithm names are matched like `Algorithm::from_str`: case and
    /// dashes are ignored.
    ///
    /// # Errors
    /// `ConfigError::Parse` for malformed JSON or unknown fields,
    /// `ConfigError::UnknownAlgorithm` for an unrecognized algorithm name.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let raw: RawGeneratorConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        Self::try_from(raw)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.start_position.is_some() && !self.algorithm.is_seekable() {
            return Err(ConfigError::InvalidConfig(format!(
                "start_position is not supported by {}: its stream can only be replayed from the start",
                self.algorithm
            )));
        }
        Ok(())
    }

    /// Build the configured generator
    ///
    /// # Errors
    /// `ConfigError::InvalidConfig` if validation fails.
    pub fn build(&self) -> Result<AnyHashRandom, ConfigError> {
        self.validate()?;

        let seed = match &self.seed {
            Some(seed) => Seed::new(seed.as_str()),
            None => {
                let seed = Seed::from_current_time();
                debug!("no seed configured for {}, using clock seed {}", self.algorithm, seed);
                seed
            }
        };

        let mut rng = AnyHashRandom::new(self.algorithm, seed);
        if let (Some(position), AnyHashRandom::Sha256(counter)) = (self.start_position, &mut rng) {
            counter.seek(position);
        }
        debug!("built {} generator seeded with {}", self.algorithm, rng.seed());
        Ok(rng)
    }
}
