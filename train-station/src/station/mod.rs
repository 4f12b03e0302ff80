//! The station registry.
//!
//! A `Station` owns a fixed row of platforms. Trains arrive at and depart
//! from platforms, cars are coupled, uncoupled and moved between trains, and
//! load queries look for express, overloaded and optimally loaded trains.

mod display;
mod queries;
mod registry;
mod snapshot;

#[cfg(test)]
mod proptests;

pub use queries::{FixOutcome, HeaviestSequence};
pub use registry::Station;
pub use snapshot::{StationSnapshot, TrainSnapshot};
