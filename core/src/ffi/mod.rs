//! Python bindings
//!
//! Exposes [`crate::AnyHashRandom`] to Python as the `HashRandom` class.

pub mod generator;
