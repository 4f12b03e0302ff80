//! Train car type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single car coupled to a train.
///
/// A car carries nothing but its weight. Cars have no identity of their own:
/// two cars of equal weight are interchangeable, and a car is addressed only
/// by its position within its train.
///
/// # Examples
///
/// ```
/// use train_station::domain::Car;
///
/// let car = Car::new(40);
/// assert_eq!(car.weight(), 40);
/// assert_eq!(car.to_string(), "|40|");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Car {
    weight: i64,
}

impl Car {
    /// Create a car with the given weight.
    pub fn new(weight: i64) -> Self {
        Self { weight }
    }

    /// Returns the weight of the car.
    pub fn weight(self) -> i64 {
        self.weight
    }
}

impl From<i64> for Car {
    fn from(weight: i64) -> Self {
        Car::new(weight)
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "|{}|", self.weight)
    }
}
