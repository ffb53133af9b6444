//! Application layer for the Draw context.

pub mod command_handlers;
pub mod query_handlers;
