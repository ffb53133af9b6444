//! Route modules.

pub mod health;
pub mod random;
pub mod sessions;
pub mod time;
