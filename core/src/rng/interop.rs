//! `rand` integration
//!
//! Lets the hash generators drive `rand::Rng` helpers (`gen_range`,
//! `shuffle`, distributions). `next_u32`/`next_u64` are the raw unnormalized
//! digest prefixes. `fill_bytes` spends one digest per started 8-byte chunk,
//! reading a short tail through `next_u32`, which is the same little-endian
//! prefix `next_long` would give.
//!
//! `CryptoRng` is deliberately not implemented.

use rand::RngCore;
use rand_core::impls;
use sha2::Digest;

use super::{AnyHashRandom, CounterRandom, FeedbackRandom, HashRandom};

impl<D: Digest> RngCore for CounterRandom<D> {
    fn next_u32(&mut self) -> u32 {
        self.next_int() as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.next_long() as u64
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl<D: Digest> RngCore for FeedbackRandom<D> {
    fn next_u32(&mut self) -> u32 {
        self.next_int() as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.next_long() as u64
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl RngCore for AnyHashRandom {
    fn next_u32(&mut self) -> u32 {
        self.next_int() as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.next_long() as u64
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
