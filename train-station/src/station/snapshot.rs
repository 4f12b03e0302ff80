//! Serializable snapshot of a station.
//!
//! The snapshot is a plain data view of every platform, suitable for JSON.
//! Restoring a snapshot yields an identical station.

use serde::{Deserialize, Serialize};

use super::Station;
use crate::domain::{Car, Train};

/// A train as plain data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainSnapshot {
    /// Locomotive power
    pub power: i64,
    /// Car weights in coupling order
    pub cars: Vec<Car>,
}

impl From<&Train> for TrainSnapshot {
    fn from(train: &Train) -> Self {
        Self {
            power: train.power(),
            cars: train.cars().to_vec(),
        }
    }
}

impl From<TrainSnapshot> for Train {
    fn from(snapshot: TrainSnapshot) -> Self {
        Train::with_cars(snapshot.power, snapshot.cars)
    }
}

/// Every platform of a station, `None` for an empty platform.
///
/// # Examples
///
/// ```
/// use train_station::station::Station;
///
/// let mut station = Station::new(2);
/// station.arrive(1, 100).unwrap();
/// station.append_car(1, 40).unwrap();
///
/// let json = serde_json::to_string(&station.snapshot()).unwrap();
/// assert_eq!(json, r#"{"platforms":[null,{"power":100,"cars":[40]}]}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationSnapshot {
    pub platforms: Vec<Option<TrainSnapshot>>,
}

impl Station {
    /// Capture the current state of every platform.
    pub fn snapshot(&self) -> StationSnapshot {
        StationSnapshot {
            platforms: self
                .platforms()
                .iter()
                .map(|slot| slot.as_ref().map(TrainSnapshot::from))
                .collect(),
        }
    }

    /// Rebuild a station from a snapshot.
    pub fn from_snapshot(snapshot: StationSnapshot) -> Self {
        Station::from_platforms(
            snapshot
                .platforms
                .into_iter()
                .map(|slot| slot.map(Train::from))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restore_gives_identical_station() {
        let mut station = Station::new(4);
        station.arrive(0, 100).unwrap();
        station.append_car(0, 10).unwrap();
        station.append_car(0, 20).unwrap();
        station.arrive(3, 7).unwrap();

        let json = serde_json::to_string(&station.snapshot()).unwrap();
        let snapshot: StationSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(Station::from_snapshot(snapshot), station);
    }

    #[test]
    fn parse_hand_written_snapshot() {
        let json = r#"{"platforms":[{"power":50,"cars":[5,6]},null]}"#;
        let snapshot: StationSnapshot = serde_json::from_str(json).unwrap();
        let station = Station::from_snapshot(snapshot);

        assert_eq!(station.platform_count(), 2);
        assert_eq!(station.to_string(), "0: (50)-|5|-|6|\n1: \n");
    }

    #[test]
    fn reject_malformed_snapshot() {
        let json = r#"{"platforms":[{"power":"fast","cars":[]}]}"#;
        assert!(serde_json::from_str::<StationSnapshot>(json).is_err());
    }
}
