use crate::error::GeometryError;
use serde::{Deserialize, Serialize};

pub const FULL_TURN: f64 = 360.0;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at `radius` from `self`, `degrees` clockwise from the +x axis (y grows downward).
    pub fn polar(self, radius: f64, degrees: f64) -> Self {
        let rad = degrees.to_radians();
        Self::new(self.x + radius * rad.cos(), self.y + radius * rad.sin())
    }

    pub fn distance_to(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Direction of `other` as seen from `self`, in degrees within (-180, 180].
    pub fn angle_to(self, other: Point) -> f64 {
        (other.y - self.y).atan2(other.x - self.x).to_degrees()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Rejects zero, negative and non-finite sides.
    pub fn validate(self) -> Result<Self, GeometryError> {
        let valid = |side: f64| side.is_finite() && side > 0.0;
        if valid(self.width) && valid(self.height) {
            Ok(self)
        } else {
            Err(GeometryError::InvalidGeometry {
                width: self.width,
                height: self.height,
            })
        }
    }

    pub fn center(self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn min_side(self) -> f64 {
        self.width.min(self.height)
    }
}

/// Folds a rotation into (-360, 360), keeping its sign, so -90 stays -90 and 450 becomes 90.
pub fn normalize_rotation(degrees: f64) -> Result<f64, GeometryError> {
    if !degrees.is_finite() {
        return Err(GeometryError::InvalidRotation(degrees));
    }
    Ok(degrees % FULL_TURN)
}

/// Angle folded into [0, 360).
pub fn wrap_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(FULL_TURN);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= FULL_TURN { 0.0 } else { wrapped }
}
