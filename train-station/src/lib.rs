//! Train station registry.
//!
//! Models a station with a fixed number of platforms, each holding at most
//! one train: a locomotive and an ordered sequence of cars. Trains arrive
//! and depart, cars are coupled, uncoupled and moved between trains, and
//! load queries find express, overloaded and optimally loaded trains.

pub mod domain;
pub mod script;
pub mod station;
