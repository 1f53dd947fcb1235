//! Generator seeds
//!
//! A seed is the string root of determinism for a generator. Numeric seeds
//! are converted to their decimal string form once, at construction, and the
//! string is what gets hashed from then on.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// Immutable seed string shared by every generator variant
///
/// # Example
/// ```
/// use hash_random_core::Seed;
///
/// assert_eq!(Seed::from(42).as_str(), "42");
/// assert_eq!(Seed::from(-7i64).as_str(), "-7");
/// assert_eq!(Seed::from(1.5).as_str(), "1.5");
/// assert_eq!(Seed::from("hello").as_str(), "hello");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Seed(String);

impl Seed {
    /// Create a seed from a string, used verbatim
    pub fn new(seed: impl Into<String>) -> Self {
        Self(seed.into())
    }

    /// Seed from the current Unix time in whole seconds
    ///
    /// Two generators seeded within the same wall-clock second share a seed
    /// and therefore produce the same stream.
    pub fn from_current_time() -> Self {
        // A clock set before 1970 seeds from "0" rather than failing.
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or(0);
        Self(secs.to_string())
    }

    /// The seed string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The ASCII bytes that get fed into the digest
    ///
    /// Each non-ASCII character is replaced with a single `?`.
    pub(crate) fn ascii_bytes(&self) -> Vec<u8> {
        ascii_encode(&self.0)
    }
}

/// Encode a string as ASCII, replacing anything outside 0..=127 with `?`
///
/// Replacement is per character, so a character outside the Basic
/// Multilingual Plane still becomes one `?`.
pub(crate) fn ascii_encode(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| if c.is_ascii() { c as u8 } else { b'?' })
        .collect()
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Seed {
    fn from(seed: &str) -> Self {
        Self(seed.to_string())
    }
}

impl From<String> for Seed {
    fn from(seed: String) -> Self {
        Self(seed)
    }
}

impl From<i32> for Seed {
    fn from(seed: i32) -> Self {
        Self(seed.to_string())
    }
}

impl From<i64> for Seed {
    fn from(seed: i64) -> Self {
        Self(seed.to_string())
    }
}

impl From<f64> for Seed {
    fn from(seed: f64) -> Self {
        Self(seed.to_string())
    }
}
