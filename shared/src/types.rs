//! Common types used across the dashboard

use serde::{Deserialize, Serialize};

/// GPS coordinates in decimal degrees
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GpsCoordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl GpsCoordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Round to the nearest integer with ties going toward positive infinity.
///
/// This is the rounding the dashboard has always displayed (`-2.5` rounds to
/// `-2`, `2.5` rounds to `3`), which differs from [`f64::round`] for negative
/// ties.
pub fn round_half_up(value: f64) -> i64 {
    // Adding 0.5 first would round 0.49999999999999994 up to 1
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor as i64 + 1
    } else {
        floor as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(2.49), 2);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(-2.51), -3);
        assert_eq!(round_half_up(0.0), 0);
    }

    #[test]
    fn test_round_half_up_just_below_half() {
        assert_eq!(round_half_up(0.49999999999999994), 0);
        assert_eq!(round_half_up(-0.5000000000000001), -1);
        assert_eq!(round_half_up(4503599627370495.5), 4503599627370496);
    }
}
