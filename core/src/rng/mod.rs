//! Hash-seeded random number generation
//!
//! Every generator turns `(seed, state)` into a digest and reads a number out
//! of the digest bytes. Two state strategies exist:
//!
//! - [`CounterRandom`]: hashes `"{counter}-{seed}"`, so output N depends only
//!   on `(N, seed)` and the stream is seekable.
//! - [`FeedbackRandom`]: hashes `seed ++ previous_digest`, so output N needs
//!   outputs 1..N-1 first.
//!
//! Both are generic over the digest primitive. The numeric surface lives on
//! the [`HashRandom`] trait and is shared by all variants.
//!
//! CRITICAL: `next_double` folds into `[0, 1)` but `next_long` and `next_int`
//! return the raw signed digest prefix. Existing streams depend on this.

mod any;
mod counter;
mod extract;
mod feedback;
mod interop;

pub use any::{Algorithm, AnyHashRandom, UnknownAlgorithm};
pub use counter::{CounterRandom, Sha256Random};
pub use feedback::{FeedbackRandom, Md5Random, Sha512Random};

use crate::seed::Seed;
use thiserror::Error;

/// Errors returned by the checked range methods
#[derive(Debug, Error, PartialEq)]
pub enum RangeError {
    #[error("Empty range: minimum {minimum} is not below exclusive bound {exclusive}")]
    EmptyRange { minimum: String, exclusive: String },

    #[error("Range bounds must be finite: minimum {minimum}, exclusive {exclusive}")]
    NonFinite { minimum: f64, exclusive: f64 },

    #[error("Range span overflows: {exclusive} - {minimum}")]
    SpanOverflow { minimum: String, exclusive: String },
}

/// Numeric surface shared by every hash-seeded generator
///
/// Implementors supply the digest step; everything else is derived from it.
/// Each unbounded call consumes exactly one digest. Each bounded call also
/// consumes exactly one, through [`HashRandom::next_double`], even for the
/// integer forms.
///
/// Bounded methods do not validate their bounds. Degenerate bounds give an
/// unspecified number and never panic: integer spans wrap and float-to-integer
/// casts saturate. Use the `try_*` methods to reject bad bounds up front.
///
/// # Example
/// ```
/// use hash_random_core::{HashRandom, Sha256Random};
///
/// let mut rng = Sha256Random::new("42");
/// let unit = rng.next_double();
/// assert!(unit >= 0.0 && unit < 1.0);
///
/// let die = rng.next_int_between(1, 7);
/// assert!((1..7).contains(&die));
/// ```
pub trait HashRandom {
    /// The seed this generator was built with
    fn seed(&self) -> &Seed;

    /// Compute the next digest and advance the state by one step
    fn raw_digest(&mut self) -> Vec<u8>;

    /// Next double in `[0.0, 1.0)`
    fn next_double(&mut self) -> f64 {
        extract::unit_double(&self.raw_digest())
    }

    /// Next double in `[0.0, exclusive)`
    fn next_double_below(&mut self, exclusive: f64) -> f64 {
        self.next_double() * exclusive
    }

    /// Next double in `[minimum, exclusive)`
    fn next_double_between(&mut self, minimum: f64, exclusive: f64) -> f64 {
        self.next_double_below(exclusive - minimum) + minimum
    }

    /// Next signed 64-bit value, full range
    fn next_long(&mut self) -> i64 {
        extract::le_i64(&self.raw_digest())
    }

    /// Next long in `[0, exclusive)`, scaled from a fresh [`HashRandom::next_double`]
    fn next_long_below(&mut self, exclusive: i64) -> i64 {
        extract::scale_i64(self.next_double(), exclusive)
    }

    /// Next long in `[minimum, exclusive)`
    fn next_long_between(&mut self, minimum: i64, exclusive: i64) -> i64 {
        self.next_long_below(exclusive.wrapping_sub(minimum))
            .wrapping_add(minimum)
    }

    /// Next signed 32-bit value, full range
    fn next_int(&mut self) -> i32 {
        extract::le_i32(&self.raw_digest())
    }

    /// Next int in `[0, exclusive)`, scaled from a fresh [`HashRandom::next_double`]
    fn next_int_below(&mut self, exclusive: i32) -> i32 {
        extract::scale_i32(self.next_double(), exclusive)
    }

    /// Next int in `[minimum, exclusive)`
    fn next_int_between(&mut self, minimum: i32, exclusive: i32) -> i32 {
        self.next_int_below(exclusive.wrapping_sub(minimum))
            .wrapping_add(minimum)
    }

    /// Checked [`HashRandom::next_double_between`]
    ///
    /// # Errors
    /// Rejects non-finite bounds, `exclusive <= minimum`, and spans that
    /// overflow to infinity. A rejected call leaves the state untouched.
    fn try_next_double_between(&mut self, minimum: f64, exclusive: f64) -> Result<f64, RangeError> {
        if !minimum.is_finite() || !exclusive.is_finite() {
            return Err(RangeError::NonFinite { minimum, exclusive });
        }
        if exclusive <= minimum {
            return Err(RangeError::EmptyRange {
                minimum: minimum.to_string(),
                exclusive: exclusive.to_string(),
            });
        }
        if !(exclusive - minimum).is_finite() {
            return Err(RangeError::SpanOverflow {
                minimum: minimum.to_string(),
                exclusive: exclusive.to_string(),
            });
        }
        Ok(self.next_double_between(minimum, exclusive))
    }

    /// Checked [`HashRandom::next_long_between`]
    ///
    /// # Errors
    /// Rejects `exclusive <= minimum` and spans that do not fit in an `i64`.
    fn try_next_long_between(&mut self, minimum: i64, exclusive: i64) -> Result<i64, RangeError> {
        if exclusive <= minimum {
            return Err(RangeError::EmptyRange {
                minimum: minimum.to_string(),
                exclusive: exclusive.to_string(),
            });
        }
        if exclusive.checked_sub(minimum).is_none() {
            return Err(RangeError::SpanOverflow {
                minimum: minimum.to_string(),
                exclusive: exclusive.to_string(),
            });
        }
        Ok(self.next_long_between(minimum, exclusive))
    }

    /// Checked [`HashRandom::next_int_between`]
    ///
    /// # Errors
    /// Rejects `exclusive <= minimum` and spans that do not fit in an `i32`.
    fn try_next_int_between(&mut self, minimum: i32, exclusive: i32) -> Result<i32, RangeError> {
        if exclusive <= minimum {
            return Err(RangeError::EmptyRange {
                minimum: minimum.to_string(),
                exclusive: exclusive.to_string(),
            });
        }
        if exclusive.checked_sub(minimum).is_none() {
            return Err(RangeError::SpanOverflow {
                minimum: minimum.to_string(),
                exclusive: exclusive.to_string(),
            });
        }
        Ok(self.next_int_between(minimum, exclusive))
    }
}
