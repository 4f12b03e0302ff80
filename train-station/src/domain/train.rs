//! Train types.
//!
//! A `Train` is a locomotive with an ordered sequence of cars. The car
//! sequence is stored contiguously; position 0 is the car coupled directly
//! to the locomotive.

use std::collections::TryReserveError;

use super::Car;

/// A locomotive and the cars coupled behind it.
///
/// The locomotive's power is the total car weight it can pull. A train whose
/// cars weigh more than that is overloaded.
///
/// # Examples
///
/// ```
/// use train_station::domain::{Car, Train};
///
/// let mut train = Train::new(100);
/// train.push(Car::new(60)).unwrap();
/// train.push(Car::new(50)).unwrap();
///
/// assert_eq!(train.total_weight(), 110);
/// assert_eq!(train.excess(), -10);
/// assert!(train.is_overloaded());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Train {
    power: i64,
    cars: Vec<Car>,
}

impl Train {
    /// Create a locomotive with no cars.
    pub fn new(power: i64) -> Self {
        Self {
            power,
            cars: Vec::new(),
        }
    }

    /// Create a train with the given cars, in order.
    pub fn with_cars(power: i64, cars: impl IntoIterator<Item = Car>) -> Self {
        Self {
            power,
            cars: cars.into_iter().collect(),
        }
    }

    /// Returns the locomotive power.
    pub fn power(&self) -> i64 {
        self.power
    }

    /// Returns the cars in coupling order.
    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    /// Returns the number of cars.
    pub fn len(&self) -> usize {
        self.cars.len()
    }

    /// Returns true if the locomotive has no cars.
    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }

    /// Sum of all car weights.
    ///
    /// Load arithmetic is done in `i128` so that any mix of `i64` weights and
    /// powers is exact.
    pub fn total_weight(&self) -> i128 {
        self.cars.iter().map(|c| i128::from(c.weight())).sum()
    }

    /// Spare pulling capacity: power minus total car weight.
    ///
    /// Negative when the train is overloaded.
    pub fn excess(&self) -> i128 {
        i128::from(self.power) - self.total_weight()
    }

    /// Returns true if the cars weigh more than the locomotive can pull.
    pub fn is_overloaded(&self) -> bool {
        self.total_weight() > i128::from(self.power)
    }

    /// Couple a car at the tail.
    ///
    /// Storage is reserved before the car is added, so on failure the train
    /// is unchanged.
    pub fn push(&mut self, car: Car) -> Result<(), TryReserveError> {
        self.cars.try_reserve(1)?;
        self.cars.push(car);
        Ok(())
    }

    /// Remove every car with the given weight, keeping the order of the rest.
    ///
    /// Returns the number of cars removed.
    pub fn remove_weight(&mut self, weight: i64) -> usize {
        let before = self.cars.len();
        self.cars.retain(|c| c.weight() != weight);
        before - self.cars.len()
    }

    /// Remove the car at a 0-based position.
    ///
    /// Returns `None` if the position is past the last car.
    pub fn remove_at(&mut self, position: usize) -> Option<Car> {
        (position < self.cars.len()).then(|| self.cars.remove(position))
    }

    /// Sort the cars heaviest first.
    pub fn sort_descending(&mut self) {
        self.cars.sort_by(|a, b| b.weight().cmp(&a.weight()));
    }

    /// Find the window of `count` consecutive cars with the largest weight.
    ///
    /// Returns the 0-based start of the window and its weight. Ties keep the
    /// leftmost window. Returns `None` if `count` is zero or the train has
    /// fewer than `count` cars.
    pub fn heaviest_window(&self, count: usize) -> Option<(usize, i128)> {
        if count == 0 || self.cars.len() < count {
            return None;
        }

        let weight = |idx: usize| i128::from(self.cars[idx].weight());

        let mut sum: i128 = (0..count).map(weight).sum();
        let mut best = (0, sum);

        for start in 1..=self.cars.len() - count {
            sum += weight(start + count - 1) - weight(start - 1);
            if sum > best.1 {
                best = (start, sum);
            }
        }

        Some(best)
    }

    /// Find the car whose removal brings the train closest to full load
    /// without overloading it.
    ///
    /// For each car the weight left behind is `total - weight`; among the
    /// cars for which that fits under the power, the one leaving the least
    /// spare capacity wins, earliest first on ties. Returns `None` if no
    /// single car can be dropped to make the train fit.
    pub fn lightening_car(&self) -> Option<usize> {
        let total = self.total_weight();

        let mut best: Option<(usize, i128)> = None;
        for (idx, car) in self.cars.iter().enumerate() {
            let spare = i128::from(self.power) - (total - i128::from(car.weight()));
            if spare < 0 {
                continue;
            }
            if best.is_none_or(|(_, s)| spare < s) {
                best = Some((idx, spare));
            }
        }

        best.map(|(idx, _)| idx)
    }

    /// Reserve room for `additional` more cars.
    pub(crate) fn reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        self.cars.try_reserve(additional)
    }

    /// Uncouple `count` cars starting at a 0-based position.
    ///
    /// The caller has already checked the range and reserved `run`.
    pub(crate) fn take_run(&mut self, start: usize, count: usize, run: &mut Vec<Car>) {
        run.extend(self.cars.drain(start..start + count));
    }

    /// Couple a run of cars so the first of them lands at `position`.
    ///
    /// A position past the tail appends.
    pub(crate) fn insert_run(&mut self, position: usize, run: Vec<Car>) {
        let at = position.min(self.cars.len());
        self.cars.splice(at..at, run);
    }
}
