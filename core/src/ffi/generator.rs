//! PyO3 wrapper for the hash generators

use std::borrow::Cow;

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::config::GeneratorConfig;
use crate::rng::{Algorithm, AnyHashRandom, HashRandom};

/// Python wrapper for a runtime-selected hash generator
///
/// # Example (from Python)
///
/// ```python
/// from hash_random_core import HashRandom
///
/// rng = HashRandom("sha256", "42")
/// print(rng.next_double(), rng.next_int_between(1, 7))
/// ```
#[pyclass(name = "HashRandom")]
pub struct PyHashRandom {
    inner: AnyHashRandom,
}

#[pymethods]
impl PyHashRandom {
    /// Create a generator
    ///
    /// `seed=None` seeds from the current Unix time in seconds.
    ///
    /// # Errors
    ///
    /// Raises ValueError for an unknown algorithm name.
    #[new]
    #[pyo3(signature = (algorithm, seed=None))]
    fn new(algorithm: &str, seed: Option<String>) -> PyResult<Self> {
        let algorithm: Algorithm = algorithm
            .parse()
            .map_err(|e| PyValueError::new_err(format!("{}", e)))?;
        let config = GeneratorConfig {
            algorithm,
            seed,
            start_position: None,
        };
        let inner = config
            .build()
            .map_err(|e| PyValueError::new_err(format!("{}", e)))?;
        Ok(PyHashRandom { inner })
    }

    #[getter]
    fn seed(&self) -> String {
        self.inner.seed().to_string()
    }

    #[getter]
    fn algorithm(&self) -> &'static str {
        self.inner.algorithm().name()
    }

    /// Next digest as Python `bytes`
    fn raw_digest(&mut self) -> Cow<'static, [u8]> {
        Cow::Owned(self.inner.raw_digest())
    }

    fn next_double(&mut self) -> f64 {
        self.inner.next_double()
    }

    fn next_double_below(&mut self, exclusive: f64) -> f64 {
        self.inner.next_double_below(exclusive)
    }

    fn next_double_between(&mut self, minimum: f64, exclusive: f64) -> f64 {
        self.inner.next_double_between(minimum, exclusive)
    }

    fn next_long(&mut self) -> i64 {
        self.inner.next_long()
    }

    fn next_long_below(&mut self, exclusive: i64) -> i64 {
        self.inner.next_long_below(exclusive)
    }

    fn next_long_between(&mut self, minimum: i64, exclusive: i64) -> i64 {
        self.inner.next_long_between(minimum, exclusive)
    }

    fn next_int(&mut self) -> i32 {
        self.inner.next_int()
    }

    fn next_int_below(&mut self, exclusive: i32) -> i32 {
        self.inner.next_int_below(exclusive)
    }

    fn next_int_between(&mut self, minimum: i32, exclusive: i32) -> i32 {
        self.inner.next_int_between(minimum, exclusive)
    }

    fn __repr__(&self) -> String {
        format!(
            "HashRandom(algorithm='{}', seed='{}')",
            self.inner.algorithm(),
            self.inner.seed()
        )
    }
}
