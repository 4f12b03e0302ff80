//! Property tests for station operations.

use proptest::prelude::*;

use super::*;
use crate::domain::StationError;

const PLATFORMS: usize = 3;

fn weights(station: &Station, platform: usize) -> Vec<i64> {
    station
        .train(platform)
        .map(|t| t.cars().iter().map(|c| c.weight()).collect())
        .unwrap_or_default()
}

/// Strategy for a station where every platform holds a train
fn full_station() -> impl Strategy<Value = Station> {
    prop::collection::vec((0i64..500, prop::collection::vec(1i64..100, 0..8)), PLATFORMS)
        .prop_map(|trains| {
            let mut station = Station::new(PLATFORMS);
            for (platform, (power, cars)) in trains.into_iter().enumerate() {
                station.arrive(platform, power).unwrap();
                for w in cars {
                    station.append_car(platform, w).unwrap();
                }
            }
            station
        })
}

/// Strategy for arbitrary move arguments, mostly but not always in range
fn move_args() -> impl Strategy<Value = (usize, usize, usize, usize, usize)> {
    (
        0..PLATFORMS + 1,
        0usize..10,
        0usize..5,
        0..PLATFORMS + 1,
        0usize..12,
    )
}

proptest! {
    /// Arriving at an occupied platform never changes the station
    #[test]
    fn arrive_on_occupied_is_noop(station in full_station(), platform in 0..PLATFORMS, power in 0i64..1000) {
        let mut after = station.clone();
        prop_assert_eq!(after.arrive(platform, power), Err(StationError::PlatformOccupied(platform)));
        prop_assert_eq!(after, station);
    }

    /// Appending a fresh weight then removing it restores the train
    #[test]
    fn append_then_remove_restores(station in full_station(), platform in 0..PLATFORMS) {
        // Strategy weights are all below 100
        let mut after = station.clone();
        after.append_car(platform, 1000).unwrap();
        prop_assert_eq!(after.remove_cars_by_weight(platform, 1000), Ok(1));
        prop_assert_eq!(after, station);
    }

    /// A move either succeeds conserving cars and run order, or changes nothing
    #[test]
    fn move_conserves_or_rejects(station in full_station(), (pa, a, n, pb, b) in move_args()) {
        let mut after = station.clone();

        match after.move_cars(pa, a, n, pb, b) {
            Ok(()) => {
                let run = weights(&station, pa)[a - 1..a - 1 + n].to_vec();

                if pa == pb {
                    // Uncouple first, then count pos_b in the shortened train
                    let mut expected = weights(&station, pa);
                    expected.drain(a - 1..a - 1 + n);
                    let at = (b - 1).min(expected.len());
                    expected.splice(at..at, run.iter().copied());
                    prop_assert_eq!(weights(&after, pa), expected);
                } else {
                    let before = weights(&station, pa).len() + weights(&station, pb).len();
                    let now = weights(&after, pa).len() + weights(&after, pb).len();
                    prop_assert_eq!(before, now);

                    let dest = weights(&after, pb);
                    prop_assert_eq!(&dest[b - 1..b - 1 + n], run.as_slice());
                }
            }
            Err(_) => prop_assert_eq!(after, station),
        }
    }

    /// The fastest train really has the most spare capacity
    #[test]
    fn express_is_maximal(station in full_station()) {
        match station.find_express() {
            Some(p) => {
                let best = station.train(p).unwrap().excess();
                prop_assert!(best > 0);
                for (_, train) in station.trains() {
                    prop_assert!(train.excess() <= best);
                }
            }
            None => {
                for (_, train) in station.trains() {
                    prop_assert!(train.excess() <= 0);
                }
            }
        }
    }

    /// find_overload reports a platform exactly when one is overloaded
    #[test]
    fn overload_iff_overloaded(station in full_station()) {
        let any = station.trains().any(|(_, t)| t.is_overloaded());
        prop_assert_eq!(station.find_overload().is_some(), any);
    }

    /// A successful fix removes exactly one car and leaves that train fitting
    #[test]
    fn fix_removes_one_car(station in full_station()) {
        let mut after = station.clone();
        match after.fix_overload() {
            FixOutcome::Fixed { platform, .. } => {
                prop_assert_eq!(weights(&after, platform).len() + 1, weights(&station, platform).len());
                prop_assert!(!after.train(platform).unwrap().is_overloaded());
            }
            FixOutcome::Unfixable { .. } | FixOutcome::Balanced => prop_assert_eq!(after, station),
        }
    }
}
