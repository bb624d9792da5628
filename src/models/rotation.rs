//! Rotation handling with degree conversion and normalization.

// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]
// Allow intentional type casts for angle rounding
#![allow(clippy::cast_possible_truncation)]

use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use std::fmt;

/// Orientation of a floor-plan asset.
///
/// The value is stored in radians, normalized to `[0, 2π)`. Degrees are
/// used only at external boundaries (layout files, placement intents,
/// CLI output); the 3D scene exchanges radians directly. Keeping one
/// internal unit avoids the degree/radian mix-ups that creep in when
/// every call site converts for itself.
///
/// Serializes as degrees so layout files stay human-readable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Rotation {
    radians: f64,
}

impl Rotation {
    /// No rotation.
    pub const ZERO: Self = Self { radians: 0.0 };

    /// Creates a rotation from radians, normalized into `[0, 2π)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rackplan::models::Rotation;
    /// use std::f64::consts::{PI, TAU};
    ///
    /// let r = Rotation::from_radians(PI + TAU);
    /// assert!((r.as_radians() - PI).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn from_radians(radians: f64) -> Self {
        Self {
            radians: radians.rem_euclid(TAU),
        }
    }

    /// Creates a rotation from degrees, normalized into `[0°, 360°)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rackplan::models::Rotation;
    ///
    /// assert_eq!(Rotation::from_degrees(450.0).as_degrees_rounded(), 90);
    /// assert_eq!(Rotation::from_degrees(-90.0).as_degrees_rounded(), 270);
    /// ```
    #[must_use]
    pub fn from_degrees(degrees: f64) -> Self {
        Self::from_radians(degrees.to_radians())
    }

    /// Returns the angle in radians, in `[0, 2π)`.
    #[must_use]
    pub const fn as_radians(&self) -> f64 {
        self.radians
    }

    /// Returns the angle in degrees, in `[0°, 360°)`.
    #[must_use]
    pub fn as_degrees(&self) -> f64 {
        self.radians.to_degrees()
    }

    /// Returns the angle rounded to the nearest whole degree, in `[0, 360)`.
    ///
    /// This is the rounding applied whenever a rotation crosses the
    /// boundary to a consumer that expects integer degrees (placement
    /// intents, 2D overlay records).
    #[must_use]
    pub fn as_degrees_rounded(&self) -> i32 {
        (self.as_degrees().round() as i32).rem_euclid(360)
    }

    /// Returns this rotation advanced by `delta` degrees, re-normalized.
    #[must_use]
    pub fn plus_degrees(&self, delta: f64) -> Self {
        Self::from_radians(self.radians + delta.to_radians())
    }

    /// Returns this rotation advanced by `delta` radians, re-normalized.
    #[must_use]
    pub fn plus_radians(&self, delta: f64) -> Self {
        Self::from_radians(self.radians + delta)
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<f64> for Rotation {
    /// Degrees in, for serde and layout-file ergonomics.
    fn from(degrees: f64) -> Self {
        Self::from_degrees(degrees)
    }
}

impl From<Rotation> for f64 {
    /// Degrees out, for serde and layout-file ergonomics.
    fn from(rotation: Rotation) -> Self {
        rotation.as_degrees()
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.as_degrees_rounded())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_from_degrees_normalizes() {
        assert_eq!(Rotation::from_degrees(0.0).as_degrees_rounded(), 0);
        assert_eq!(Rotation::from_degrees(360.0).as_degrees_rounded(), 0);
        assert_eq!(Rotation::from_degrees(405.0).as_degrees_rounded(), 45);
        assert_eq!(Rotation::from_degrees(-45.0).as_degrees_rounded(), 315);
    }

    #[test]
    fn test_from_radians_normalizes() {
        let r = Rotation::from_radians(-FRAC_PI_2);
        assert!((r.as_radians() - 3.0 * FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_round_trip_through_degrees() {
        for deg in [0.0, 45.0, 90.0, 135.0, 180.0, 225.0, 270.0, 315.0] {
            let r = Rotation::from_degrees(deg);
            assert!((r.as_degrees() - deg).abs() < 1e-9);
        }
    }

    #[test]
    fn test_plus_degrees_wraps() {
        let r = Rotation::from_degrees(270.0).plus_degrees(180.0);
        assert_eq!(r.as_degrees_rounded(), 90);
    }

    #[test]
    fn test_four_quarter_turns_return_to_start() {
        let mut r = Rotation::from_degrees(45.0);
        for _ in 0..4 {
            r = r.plus_degrees(90.0);
        }
        assert_eq!(r.as_degrees_rounded(), 45);
    }

    #[test]
    fn test_rounding_at_boundary() {
        assert_eq!(Rotation::from_degrees(359.6).as_degrees_rounded(), 0);
        assert_eq!(Rotation::from_degrees(0.4).as_degrees_rounded(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Rotation::from_degrees(90.0).to_string(), "90°");
    }

    #[test]
    fn test_radian_degree_consistency() {
        let r = Rotation::from_radians(PI);
        assert_eq!(r.as_degrees_rounded(), 180);
    }
}
