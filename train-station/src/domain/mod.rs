//! Domain types for the train station.
//!
//! This module contains the value types the station is built from: cars,
//! trains, and the errors station operations report. Trains own their cars
//! outright, so moving a car between trains is a transfer of ownership.

mod car;
mod error;
mod train;

pub use car::Car;
pub use error::StationError;
pub use train::Train;
