//! Geometric value types shared by the codec and the bots.
//!
//! Coordinates are world units; one map cell is [`crate::CELL_WIDTH`] units wide.

use serde::{Deserialize, Serialize};

/// 2D point - positions, destinations, collider vertices.
///
/// Serializes as `{"x": .., "y": ..}`, the shape the server expects in
/// outgoing `dest` and `shoot` actions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X component
    pub x: f64,
    /// Y component
    pub y: f64,
}

impl Point {
    /// Creates a new point
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Origin
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Distance squared (avoids sqrt)
    #[must_use]
    pub fn distance_squared(self, other: Self) -> f64 {
        let d = self - other;
        d.x * d.x + d.y * d.y
    }

    /// Distance to another point
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// Angle in radians of the vector from `self` to `other`.
    #[must_use]
    pub fn angle_to(self, other: Self) -> f64 {
        let d = other - self;
        d.y.atan2(d.x)
    }

    /// Grid cell containing this point, or `None` when outside the map.
    #[must_use]
    pub fn cell(self) -> Option<(usize, usize)> {
        let width = f64::from(crate::CELL_WIDTH);
        if self.x < 0.0 || self.y < 0.0 {
            return None;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let (cx, cy) = ((self.x / width) as usize, (self.y / width) as usize);
        (cx < crate::MAP_CELLS && cy < crate::MAP_CELLS).then_some((cx, cy))
    }
}

impl std::ops::Add for Point {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Point {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::Mul<f64> for Point {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}
