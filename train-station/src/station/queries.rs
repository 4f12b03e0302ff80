//! Load queries over the trains in a station.
//!
//! All queries scan platforms in index order, so ties always resolve to the
//! lowest platform.

use tracing::{debug, trace};

use super::Station;
use crate::domain::Car;

/// The heaviest run of consecutive cars found in a station.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaviestSequence<'a> {
    /// Platform of the train holding the run
    pub platform: usize,
    /// 0-based position of the first car of the run
    pub start: usize,
    /// Combined weight of the run
    pub weight: i128,
    /// The cars of the run, borrowed from the train
    pub cars: &'a [Car],
}

impl<'a> HeaviestSequence<'a> {
    /// Returns the first car of the run.
    pub fn first_car(&self) -> Option<&'a Car> {
        self.cars.first()
    }
}

/// Result of trying to relieve an overloaded train.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixOutcome {
    /// No train in the station is overloaded
    Balanced,
    /// One car was uncoupled from the first overloaded train
    Fixed {
        platform: usize,
        /// 0-based position the car was uncoupled from
        position: usize,
        car: Car,
    },
    /// No single car could be dropped to bring the train within its power
    Unfixable { platform: usize },
}

impl Station {
    /// Find the fastest train: the one with the most spare pulling capacity.
    ///
    /// Only trains with positive spare capacity count. Returns `None` if no
    /// train has any.
    pub fn find_express(&self) -> Option<usize> {
        let mut best = None;
        let mut max_excess: i128 = 0;

        for (platform, train) in self.trains() {
            let excess = train.excess();
            if excess > max_excess {
                max_excess = excess;
                best = Some(platform);
            }
        }

        best
    }

    /// Find the first train whose cars weigh more than its locomotive can pull.
    pub fn find_overload(&self) -> Option<usize> {
        self.trains()
            .find(|(_, train)| train.is_overloaded())
            .map(|(platform, _)| platform)
    }

    /// Find the train with the least spare pulling capacity.
    ///
    /// Overloaded trains have negative spare capacity and so win over any
    /// train that fits. Returns `None` only for a station with no trains.
    pub fn find_optimal(&self) -> Option<usize> {
        // min_by_key keeps the first of equal minima
        self.trains()
            .min_by_key(|(_, train)| train.excess())
            .map(|(platform, _)| platform)
    }

    /// Find the heaviest run of `count` consecutive cars in any train.
    ///
    /// Trains with fewer than `count` cars are skipped. Ties keep the first
    /// run found, scanning platforms in order and each train from the car
    /// nearest the locomotive to the tail. Returns `None` if `count` is zero
    /// or no train is long enough.
    pub fn find_heaviest_sequence(&self, count: usize) -> Option<HeaviestSequence<'_>> {
        let mut best: Option<HeaviestSequence<'_>> = None;

        for (platform, train) in self.trains() {
            let Some((start, weight)) = train.heaviest_window(count) else {
                continue;
            };
            if best.is_none_or(|b| weight > b.weight) {
                best = Some(HeaviestSequence {
                    platform,
                    start,
                    weight,
                    cars: &train.cars()[start..start + count],
                });
            }
        }

        best
    }

    /// Uncouple one car from the first overloaded train so that it fits.
    ///
    /// Picks the car whose removal leaves the train closest to its full
    /// power without exceeding it, earliest on ties. Only ever removes one
    /// car: if that is not enough, the train is left untouched.
    pub fn fix_overload(&mut self) -> FixOutcome {
        let Some((platform, train)) = self.first_overloaded_mut() else {
            trace!("no overloaded train");
            return FixOutcome::Balanced;
        };

        let removed = train
            .lightening_car()
            .and_then(|position| train.remove_at(position).map(|car| (position, car)));

        match removed {
            Some((position, car)) => {
                debug!(platform, position, weight = car.weight(), "overload fixed");
                FixOutcome::Fixed {
                    platform,
                    position,
                    car,
                }
            }
            None => {
                debug!(platform, "overload cannot be fixed by one car");
                FixOutcome::Unfixable { platform }
            }
        }
    }
}
