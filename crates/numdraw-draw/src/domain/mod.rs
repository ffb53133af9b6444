//! Domain layer for the Draw context.

pub mod commands;
pub mod policy;
pub mod sampler;
pub mod session;
pub mod validation;
