//! Hash Random - hash-seeded deterministic number generators
//!
//! Reproducible streams of doubles, 32-bit and 64-bit integers where every
//! value is read out of a cryptographic digest of the seed and the
//! generator's state.
//!
//! # Architecture
//!
//! - **seed**: Seed strings and the explicit wall-clock seed
//! - **rng**: The `HashRandom` trait and the counter/feedback generators
//! - **config**: Serializable generator configuration
//!
//! # Variants
//!
//! | Type | Digest | State |
//! |---|---|---|
//! | `Sha256Random` | SHA-256 | counter, seekable |
//! | `Sha512Random` | SHA-512 | previous digest |
//! | `Md5Random` | MD5 | previous digest |
//!
//! # Critical Invariants
//!
//! 1. Same variant + same seed + same call sequence = same outputs
//! 2. Every `next_*` call costs exactly one digest, bounded forms included
//! 3. Not a CSPRNG: no resistance to seed recovery or prediction

// Module declarations
pub mod config;
pub mod rng;
pub mod seed;

// Re-exports for convenience
pub use config::{ConfigError, GeneratorConfig};
pub use rng::{
    Algorithm, AnyHashRandom, CounterRandom, FeedbackRandom, HashRandom, Md5Random, RangeError,
    Sha256Random, Sha512Random, UnknownAlgorithm,
};
pub use seed::Seed;

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn hash_random_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::generator::PyHashRandom>()?;
    Ok(())
}
