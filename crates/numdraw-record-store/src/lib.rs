//! Numdraw record store: persistence gateway implementations.

pub mod memory;
