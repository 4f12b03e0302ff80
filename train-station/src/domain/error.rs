//! Station error types.
//!
//! Every rejected station operation reports one of these. A rejected
//! operation never changes the station, so callers that only care about the
//! happy path may ignore the error entirely.

/// Reasons a station operation was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StationError {
    /// Platform index is outside the station
    #[error("platform {platform} does not exist (station has {platforms} platforms)")]
    InvalidPlatform { platform: usize, platforms: usize },

    /// A train is already standing at the platform
    #[error("platform {0} is already occupied")]
    PlatformOccupied(usize),

    /// No train is standing at the platform
    #[error("no train at platform {0}")]
    EmptyPlatform(usize),

    /// The train has no cars to operate on
    #[error("train at platform {0} has no cars")]
    NoCars(usize),

    /// A car move was asked to move nothing
    #[error("car count must be non-zero")]
    ZeroCount,

    /// Position or length falls outside the train
    #[error("invalid range at platform {platform}: {reason}")]
    InvalidRange {
        platform: usize,
        reason: &'static str,
    },

    /// Reserving storage for cars or platforms failed
    #[error("allocation failed")]
    Allocation,
}

impl From<std::collections::TryReserveError> for StationError {
    fn from(_: std::collections::TryReserveError) -> Self {
        StationError::Allocation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = StationError::InvalidPlatform {
            platform: 7,
            platforms: 3,
        };
        assert_eq!(
            err.to_string(),
            "platform 7 does not exist (station has 3 platforms)"
        );

        let err = StationError::PlatformOccupied(2);
        assert_eq!(err.to_string(), "platform 2 is already occupied");

        let err = StationError::EmptyPlatform(0);
        assert_eq!(err.to_string(), "no train at platform 0");

        let err = StationError::NoCars(1);
        assert_eq!(err.to_string(), "train at platform 1 has no cars");

        let err = StationError::ZeroCount;
        assert_eq!(err.to_string(), "car count must be non-zero");

        let err = StationError::InvalidRange {
            platform: 4,
            reason: "source run extends past the last car",
        };
        assert_eq!(
            err.to_string(),
            "invalid range at platform 4: source run extends past the last car"
        );

        assert_eq!(StationError::Allocation.to_string(), "allocation failed");
    }

    #[test]
    fn reserve_failure_maps_to_allocation() {
        let mut v: Vec<u64> = Vec::new();
        let err = v.try_reserve(usize::MAX).unwrap_err();
        assert_eq!(StationError::from(err), StationError::Allocation);
    }
}
