use crate::error::GeometryError;
use crate::geometry::{FULL_TURN, Point, Size, normalize_rotation};
use crate::sector::Sector;
use serde::{Deserialize, Serialize};

pub const DEFAULT_OUTER_RATIO: f64 = 1.0 / 3.0; // of the shorter widget side
pub const DEFAULT_INNER_RATIO: f64 = 1.0 / 4.0; // of the outer radius
pub const DEFAULT_ROTATION: f64 = -90.0; // sector 0 starts at north

/// How the ring's radii follow the widget size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadiusPolicy {
    pub outer_ratio: f64,
    pub inner_ratio: f64,
}

impl Default for RadiusPolicy {
    fn default() -> Self {
        Self {
            outer_ratio: DEFAULT_OUTER_RATIO,
            inner_ratio: DEFAULT_INNER_RATIO,
        }
    }
}

impl RadiusPolicy {
    /// The ring must fit the widget and keep a hole in the middle.
    pub fn validate(self) -> Result<Self, GeometryError> {
        let outer_ok = self.outer_ratio > 0.0 && self.outer_ratio <= 0.5;
        let inner_ok = self.inner_ratio > 0.0 && self.inner_ratio < 1.0;
        if outer_ok && inner_ok {
            Ok(self)
        } else {
            Err(GeometryError::InvalidRadiusPolicy {
                inner_ratio: self.inner_ratio,
                outer_ratio: self.outer_ratio,
            })
        }
    }

    /// (inner, outer) radii for a widget of `size`.
    pub fn radii(&self, size: Size) -> (f64, f64) {
        let outer = size.min_side() * self.outer_ratio;
        (outer * self.inner_ratio, outer)
    }

    /// One sector per entry, in entry order, tiling the ring once.
    pub fn sectors(
        &self,
        entry_count: usize,
        size: Size,
        rotation: f64,
    ) -> Result<Vec<Sector>, GeometryError> {
        let size = size.validate()?;
        self.validate()?;
        let rotation = normalize_rotation(rotation)?;

        if entry_count == 0 {
            return Ok(Vec::new());
        }

        let center = size.center();
        let (inner_radius, outer_radius) = self.radii(size);
        let span = FULL_TURN / entry_count as f64;

        Ok((0..entry_count)
            .map(|i| Sector {
                center,
                start_angle: i as f64 * span + rotation,
                span,
                inner_radius,
                outer_radius,
            })
            .collect())
    }
}

/// Sectors for the default radius policy.
pub fn compute_sectors(
    entry_count: usize,
    size: Size,
    rotation: f64,
) -> Result<Vec<Sector>, GeometryError> {
    RadiusPolicy::default().sectors(entry_count, size, rotation)
}

/// Index of the first sector containing `point`. A point on a shared edge
/// belongs to the lower index.
pub fn sector_at(point: Point, sectors: &[Sector]) -> Option<usize> {
    sectors.iter().position(|s| s.contains(point))
}
