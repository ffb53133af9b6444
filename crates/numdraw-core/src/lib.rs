//! Numdraw Core: shared ports and error types.
//!
//! This crate defines the abstractions the draw engine depends on: the
//! random source, the clock, and the persistence gateway. It contains no
//! infrastructure code beyond the production RNG and clock.

pub mod clock;
pub mod error;
pub mod record;
pub mod rng;
