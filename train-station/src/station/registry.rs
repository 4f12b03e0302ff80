//! The station: a fixed row of platforms and the trains standing at them.

use tracing::{debug, trace};

use crate::domain::{Car, StationError, Train};

/// A train station with a fixed number of platforms.
///
/// Each platform holds at most one train. Platforms are numbered from 0 and
/// the count never changes after the station is opened.
///
/// Every mutating operation validates its arguments before touching any
/// train. A rejected operation returns an error and leaves the station
/// exactly as it was, so callers may ignore errors to get "silently do
/// nothing" behavior.
///
/// # Examples
///
/// ```
/// use train_station::station::Station;
///
/// let mut station = Station::new(2);
/// station.arrive(0, 100).unwrap();
/// station.append_car(0, 40).unwrap();
/// station.append_car(0, 30).unwrap();
///
/// assert_eq!(station.to_string(), "0: (100)-|40|-|30|\n1: \n");
///
/// // Arriving at an occupied platform changes nothing
/// assert!(station.arrive(0, 500).is_err());
/// assert_eq!(station.train(0).unwrap().power(), 100);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    platforms: Vec<Option<Train>>,
}

impl Station {
    /// Open a station with `platform_count` empty platforms.
    pub fn new(platform_count: usize) -> Self {
        Self {
            platforms: std::iter::repeat_with(|| None)
                .take(platform_count)
                .collect(),
        }
    }

    /// Open a station, reporting allocation failure instead of aborting.
    pub fn try_new(platform_count: usize) -> Result<Self, StationError> {
        let mut platforms = Vec::new();
        platforms.try_reserve_exact(platform_count)?;
        platforms.resize_with(platform_count, || None);
        Ok(Self { platforms })
    }

    /// Build a station from pre-populated platform slots.
    pub(crate) fn from_platforms(platforms: Vec<Option<Train>>) -> Self {
        Self { platforms }
    }

    /// Close the station, releasing every train and car.
    pub fn close(self) {
        let trains = self.trains().count();
        let cars: usize = self.trains().map(|(_, t)| t.len()).sum();
        debug!(trains, cars, "closing station");
    }

    /// Returns the number of platforms.
    pub fn platform_count(&self) -> usize {
        self.platforms.len()
    }

    /// Returns the platform slots in index order.
    pub fn platforms(&self) -> &[Option<Train>] {
        &self.platforms
    }

    /// Iterate over occupied platforms and their trains, in index order.
    pub fn trains(&self) -> impl Iterator<Item = (usize, &Train)> {
        self.platforms
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| slot.as_ref().map(|t| (idx, t)))
    }

    /// Returns the train at a platform.
    pub fn train(&self, platform: usize) -> Result<&Train, StationError> {
        self.slot(platform)?
            .as_ref()
            .ok_or(StationError::EmptyPlatform(platform))
    }

    fn train_mut(&mut self, platform: usize) -> Result<&mut Train, StationError> {
        self.slot_mut(platform)?
            .as_mut()
            .ok_or(StationError::EmptyPlatform(platform))
    }

    /// Returns the first overloaded train and its platform, for mutation.
    pub(super) fn first_overloaded_mut(&mut self) -> Option<(usize, &mut Train)> {
        self.platforms
            .iter_mut()
            .enumerate()
            .filter_map(|(idx, slot)| slot.as_mut().map(|t| (idx, t)))
            .find(|(_, train)| train.is_overloaded())
    }

    fn slot(&self, platform: usize) -> Result<&Option<Train>, StationError> {
        let platforms = self.platforms.len();
        self.platforms
            .get(platform)
            .ok_or(StationError::InvalidPlatform {
                platform,
                platforms,
            })
    }

    fn slot_mut(&mut self, platform: usize) -> Result<&mut Option<Train>, StationError> {
        let platforms = self.platforms.len();
        self.platforms
            .get_mut(platform)
            .ok_or(StationError::InvalidPlatform {
                platform,
                platforms,
            })
    }

    /// A locomotive with the given power arrives at an empty platform.
    ///
    /// An occupied platform keeps its train and the arrival is rejected.
    pub fn arrive(&mut self, platform: usize, power: i64) -> Result<(), StationError> {
        let result = self.slot_mut(platform).and_then(|slot| {
            if slot.is_some() {
                return Err(StationError::PlatformOccupied(platform));
            }
            *slot = Some(Train::new(power));
            Ok(())
        });

        match &result {
            Ok(()) => trace!(platform, power, "train arrived"),
            Err(e) => debug!(platform, power, error = %e, "arrival rejected"),
        }
        result
    }

    /// The train at a platform leaves, taking its cars with it.
    ///
    /// Returns the departed train, or `None` if the platform was already
    /// empty.
    pub fn depart(&mut self, platform: usize) -> Result<Option<Train>, StationError> {
        let result = self.slot_mut(platform).map(Option::take);

        match &result {
            Ok(Some(train)) => trace!(platform, cars = train.len(), "train departed"),
            Ok(None) => trace!(platform, "departure from empty platform"),
            Err(e) => debug!(platform, error = %e, "departure rejected"),
        }
        result
    }

    /// Couple a new car at the tail of the train at a platform.
    pub fn append_car(&mut self, platform: usize, weight: i64) -> Result<(), StationError> {
        let result = self
            .train_mut(platform)
            .and_then(|train| train.push(Car::new(weight)).map_err(StationError::from));

        match &result {
            Ok(()) => trace!(platform, weight, "car appended"),
            Err(e) => debug!(platform, weight, error = %e, "append rejected"),
        }
        result
    }

    /// Uncouple every car of the given weight from the train at a platform.
    ///
    /// Returns the number of cars removed, which may be zero.
    pub fn remove_cars_by_weight(
        &mut self,
        platform: usize,
        weight: i64,
    ) -> Result<usize, StationError> {
        let result = self
            .train_mut(platform)
            .map(|train| train.remove_weight(weight));

        match &result {
            Ok(removed) => trace!(platform, weight, removed, "cars removed"),
            Err(e) => debug!(platform, weight, error = %e, "removal rejected"),
        }
        result
    }

    /// Move a run of cars from one train to another.
    ///
    /// Takes `count` cars starting at 1-based position `pos_a` of the train at
    /// `platform_a` and couples them, in the same order, so the first lands at
    /// 1-based position `pos_b` of the train at `platform_b`. `pos_b` may be
    /// one past the last car to append.
    ///
    /// Positions are checked against both trains as they stand before the
    /// move. When both platforms are the same, the run is uncoupled first and
    /// `pos_b` then counts cars in the shortened train, stopping at its tail.
    pub fn move_cars(
        &mut self,
        platform_a: usize,
        pos_a: usize,
        count: usize,
        platform_b: usize,
        pos_b: usize,
    ) -> Result<(), StationError> {
        let result = self.try_move_cars(platform_a, pos_a, count, platform_b, pos_b);

        match &result {
            Ok(()) => trace!(platform_a, pos_a, count, platform_b, pos_b, "cars moved"),
            Err(e) => debug!(
                platform_a,
                pos_a,
                count,
                platform_b,
                pos_b,
                error = %e,
                "move rejected"
            ),
        }
        result
    }

    fn try_move_cars(
        &mut self,
        platform_a: usize,
        pos_a: usize,
        count: usize,
        platform_b: usize,
        pos_b: usize,
    ) -> Result<(), StationError> {
        if count == 0 {
            return Err(StationError::ZeroCount);
        }
        self.slot(platform_a)?;
        self.slot(platform_b)?;

        let len_a = self.train(platform_a)?.len();
        if len_a == 0 {
            return Err(StationError::NoCars(platform_a));
        }
        let len_b = self.train(platform_b)?.len();

        if pos_a == 0 || pos_a > len_a {
            return Err(StationError::InvalidRange {
                platform: platform_a,
                reason: "source position is outside the train",
            });
        }
        if count > len_a - (pos_a - 1) {
            return Err(StationError::InvalidRange {
                platform: platform_a,
                reason: "source run extends past the last car",
            });
        }
        if pos_b == 0 || pos_b > len_b + 1 {
            return Err(StationError::InvalidRange {
                platform: platform_b,
                reason: "destination position is outside the train",
            });
        }

        // Reserve everything up front so nothing below can fail halfway.
        let mut run = Vec::new();
        run.try_reserve_exact(count)?;
        if platform_a != platform_b {
            self.train_mut(platform_b)?.reserve(count)?;
        }

        self.train_mut(platform_a)?
            .take_run(pos_a - 1, count, &mut run);
        self.train_mut(platform_b)?.insert_run(pos_b - 1, run);
        Ok(())
    }

    /// Sort the cars of the train at a platform, heaviest first.
    pub fn order_train(&mut self, platform: usize) -> Result<(), StationError> {
        let result = self.train_mut(platform).map(Train::sort_descending);

        match &result {
            Ok(()) => trace!(platform, "train ordered"),
            Err(e) => debug!(platform, error = %e, "ordering rejected"),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weights(station: &Station, platform: usize) -> Vec<i64> {
        station
            .train(platform)
            .unwrap()
            .cars()
            .iter()
            .map(|c| c.weight())
            .collect()
    }

    fn station_with(trains: &[(usize, i64, &[i64])]) -> Station {
        let mut station = Station::new(5);
        for &(platform, power, cars) in trains {
            station.arrive(platform, power).unwrap();
            for &w in cars {
                station.append_car(platform, w).unwrap();
            }
        }
        station
    }

    #[test]
    fn new_station_is_empty() {
        let station = Station::new(3);
        assert_eq!(station.platform_count(), 3);
        assert_eq!(station.trains().count(), 0);
        assert!(station.platforms().iter().all(Option::is_none));
    }

    #[test]
    fn try_new_matches_new() {
        assert_eq!(Station::try_new(4).unwrap(), Station::new(4));
    }

    #[test]
    fn try_new_reports_allocation_failure() {
        assert_eq!(
            Station::try_new(usize::MAX),
            Err(StationError::Allocation)
        );
    }

    #[test]
    fn arrive_on_empty_platform() {
        let mut station = Station::new(2);
        station.arrive(1, 75).unwrap();
        assert_eq!(station.train(1).unwrap(), &Train::new(75));
        assert_eq!(station.train(0), Err(StationError::EmptyPlatform(0)));
    }

    #[test]
    fn arrive_out_of_range() {
        let mut station = Station::new(2);
        assert_eq!(
            station.arrive(2, 10),
            Err(StationError::InvalidPlatform {
                platform: 2,
                platforms: 2
            })
        );
        assert_eq!(station, Station::new(2));
    }

    #[test]
    fn arrive_on_occupied_platform_keeps_train() {
        let mut station = station_with(&[(0, 100, &[10, 20])]);
        assert_eq!(
            station.arrive(0, 999),
            Err(StationError::PlatformOccupied(0))
        );
        assert_eq!(station.train(0).unwrap().power(), 100);
        assert_eq!(weights(&station, 0), vec![10, 20]);
    }

    #[test]
    fn depart_then_arrive_gives_fresh_train() {
        let mut station = station_with(&[(3, 100, &[10, 20])]);

        let departed = station.depart(3).unwrap().unwrap();
        assert_eq!(departed.len(), 2);

        station.arrive(3, 40).unwrap();
        assert_eq!(station.train(3).unwrap(), &Train::new(40));
    }

    #[test]
    fn depart_is_idempotent() {
        let mut station = Station::new(2);
        assert_eq!(station.depart(1), Ok(None));
        assert_eq!(station.depart(1), Ok(None));
        assert!(station.depart(5).is_err());
    }

    #[test]
    fn append_requires_train() {
        let mut station = Station::new(2);
        assert_eq!(
            station.append_car(0, 10),
            Err(StationError::EmptyPlatform(0))
        );
        assert!(station.append_car(9, 10).is_err());
    }

    #[test]
    fn append_then_remove_restores_sequence() {
        let mut station = station_with(&[(0, 100, &[1, 2, 3])]);
        station.append_car(0, 42).unwrap();
        assert_eq!(weights(&station, 0), vec![1, 2, 3, 42]);

        assert_eq!(station.remove_cars_by_weight(0, 42), Ok(1));
        assert_eq!(weights(&station, 0), vec![1, 2, 3]);
    }

    #[test]
    fn remove_keeps_order_of_remaining() {
        let mut station = station_with(&[(0, 100, &[4, 1, 4, 2, 4, 3])]);
        assert_eq!(station.remove_cars_by_weight(0, 4), Ok(3));
        assert_eq!(weights(&station, 0), vec![1, 2, 3]);
    }

    #[test]
    fn remove_with_no_match_is_silent() {
        let mut station = station_with(&[(0, 100, &[1, 2])]);
        assert_eq!(station.remove_cars_by_weight(0, 7), Ok(0));
        assert_eq!(weights(&station, 0), vec![1, 2]);
    }

    #[test]
    fn move_between_trains() {
        let mut station = station_with(&[(0, 100, &[1, 2, 3, 4]), (1, 100, &[10, 20])]);
        station.move_cars(0, 2, 2, 1, 2).unwrap();
        assert_eq!(weights(&station, 0), vec![1, 4]);
        assert_eq!(weights(&station, 1), vec![10, 2, 3, 20]);
    }

    #[test]
    fn move_to_head_and_tail() {
        let mut station = station_with(&[(0, 100, &[1, 2, 3]), (1, 100, &[10])]);
        station.move_cars(0, 1, 1, 1, 1).unwrap();
        assert_eq!(weights(&station, 1), vec![1, 10]);

        station.move_cars(0, 1, 2, 1, 3).unwrap();
        assert_eq!(weights(&station, 0), Vec::<i64>::new());
        assert_eq!(weights(&station, 1), vec![1, 10, 2, 3]);
    }

    #[test]
    fn move_into_empty_train() {
        let mut station = station_with(&[(0, 100, &[1, 2, 3]), (1, 100, &[])]);
        station.move_cars(0, 3, 1, 1, 1).unwrap();
        assert_eq!(weights(&station, 0), vec![1, 2]);
        assert_eq!(weights(&station, 1), vec![3]);
    }

    #[test]
    fn invalid_moves_change_nothing() {
        let original = station_with(&[(0, 100, &[1, 2, 3]), (1, 100, &[10, 20]), (2, 5, &[])]);

        let cases: &[((usize, usize, usize, usize, usize), StationError)] = &[
            ((0, 1, 0, 1, 1), StationError::ZeroCount),
            (
                (7, 1, 1, 1, 1),
                StationError::InvalidPlatform {
                    platform: 7,
                    platforms: 5,
                },
            ),
            (
                (0, 1, 1, 7, 1),
                StationError::InvalidPlatform {
                    platform: 7,
                    platforms: 5,
                },
            ),
            ((3, 1, 1, 1, 1), StationError::EmptyPlatform(3)),
            ((0, 1, 1, 3, 1), StationError::EmptyPlatform(3)),
            ((2, 1, 1, 1, 1), StationError::NoCars(2)),
            (
                (0, 0, 1, 1, 1),
                StationError::InvalidRange {
                    platform: 0,
                    reason: "source position is outside the train",
                },
            ),
            (
                (0, 4, 1, 1, 1),
                StationError::InvalidRange {
                    platform: 0,
                    reason: "source position is outside the train",
                },
            ),
            (
                (0, 2, 3, 1, 1),
                StationError::InvalidRange {
                    platform: 0,
                    reason: "source run extends past the last car",
                },
            ),
            (
                (0, 1, 1, 1, 0),
                StationError::InvalidRange {
                    platform: 1,
                    reason: "destination position is outside the train",
                },
            ),
            (
                (0, 1, 1, 1, 4),
                StationError::InvalidRange {
                    platform: 1,
                    reason: "destination position is outside the train",
                },
            ),
        ];

        for ((pa, a, n, pb, b), expected) in cases {
            let mut station = original.clone();
            assert_eq!(
                station.move_cars(*pa, *a, *n, *pb, *b),
                Err(expected.clone()),
                "move({pa}, {a}, {n}, {pb}, {b})"
            );
            assert_eq!(station, original, "move({pa}, {a}, {n}, {pb}, {b})");
        }
    }

    #[test]
    fn self_move_locates_after_uncoupling() {
        // Uncouple [2, 3] leaving [1, 4, 5], then insert before position 3 (the 5).
        let mut station = station_with(&[(0, 100, &[1, 2, 3, 4, 5])]);
        station.move_cars(0, 2, 2, 0, 3).unwrap();
        assert_eq!(weights(&station, 0), vec![1, 4, 2, 3, 5]);
    }

    #[test]
    fn self_move_past_shortened_tail_appends() {
        // pos_b 6 is valid against the original length 5, but the shortened
        // train has only 3 cars.
        let mut station = station_with(&[(0, 100, &[1, 2, 3, 4, 5])]);
        station.move_cars(0, 1, 2, 0, 6).unwrap();
        assert_eq!(weights(&station, 0), vec![3, 4, 5, 1, 2]);
    }

    #[test]
    fn order_train_sorts_descending() {
        let mut station = station_with(&[(1, 100, &[5, 20, 1, 9])]);
        station.order_train(1).unwrap();
        assert_eq!(weights(&station, 1), vec![20, 9, 5, 1]);
    }

    #[test]
    fn order_train_guards() {
        let mut station = Station::new(2);
        assert_eq!(station.order_train(0), Err(StationError::EmptyPlatform(0)));
        assert!(station.order_train(2).is_err());

        station.arrive(0, 10).unwrap();
        assert_eq!(station.order_train(0), Ok(()));
    }

    #[test]
    fn close_consumes_station() {
        let station = station_with(&[(0, 100, &[1, 2]), (4, 10, &[])]);
        station.close();
    }
}
