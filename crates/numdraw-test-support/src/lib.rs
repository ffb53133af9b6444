//! Shared test doubles and utilities for the numdraw draw engine.

mod clock;
mod gateway;
mod rng;

pub use clock::FixedClock;
pub use gateway::{FailingDrawRecordGateway, RecordingDrawRecordGateway};
pub use rng::{MockRng, SequenceRng};
