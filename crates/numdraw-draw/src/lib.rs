//! Numdraw: Draw bounded context.
//!
//! Responsible for validating draw requests, sampling integers from a
//! range with optional duplicate exclusion, and tracking per-session
//! history so later draws never repeat past results.

pub mod application;
pub mod domain;
