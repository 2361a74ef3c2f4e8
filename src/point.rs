//! Plane geometry shared by the lazy pointer, the curve renderer and the
//! catenary connector.

#[cfg(test)]
#[path = "point_test.rs"]
mod point_test;

use serde::{Deserialize, Serialize};

/// A point in surface coordinates (canvas pixels, y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance between two points.
    #[must_use]
    pub fn distance_to(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// The point halfway between `self` and `other`.
    #[must_use]
    pub fn midpoint(self, other: Point) -> Point {
        Point {
            x: self.x + (other.x - self.x) / 2.0,
            y: self.y + (other.y - self.y) / 2.0,
        }
    }

    /// Angle in radians of the direction from `self` towards `other`.
    #[must_use]
    pub fn angle_to(self, other: Point) -> f64 {
        (other.y - self.y).atan2(other.x - self.x)
    }

    /// Translate by `distance` along `angle` (radians).
    #[must_use]
    pub fn move_by_angle(self, angle: f64, distance: f64) -> Point {
        Point {
            x: self.x + angle.cos() * distance,
            y: self.y + angle.sin() * distance,
        }
    }
}
