use crate::geometry::{FULL_TURN, Point, wrap_degrees};
use serde::{Deserialize, Serialize};

/// Slack applied to the angular bounds of a sector, in degrees.
pub const ANGLE_EPSILON: f64 = 1e-9;
/// Slack applied to the radial bounds of a sector, relative to the outer radius.
pub const RADIUS_EPSILON: f64 = 1e-9;

/// A closed annular wedge: the part of the ring between `inner_radius` and
/// `outer_radius` swept clockwise from `start_angle` over `span` degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sector {
    pub center: Point,
    pub start_angle: f64,
    pub span: f64,
    pub inner_radius: f64,
    pub outer_radius: f64,
}

/// Toolkit-neutral drawing step. Arcs sweep clockwise on screen when `sweep` is positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    Arc {
        center: Point,
        radius: f64,
        start: f64,
        sweep: f64,
    },
    Close,
}

impl PathCommand {
    /// Where the pen rests after this command, if it moves it.
    pub fn end_point(&self) -> Option<Point> {
        match *self {
            Self::MoveTo(p) | Self::LineTo(p) => Some(p),
            Self::Arc {
                center,
                radius,
                start,
                sweep,
            } => Some(center.polar(radius, start + sweep)),
            Self::Close => None,
        }
    }
}

impl Sector {
    pub fn end_angle(&self) -> f64 {
        self.start_angle + self.span
    }

    pub fn mid_angle(&self) -> f64 {
        self.start_angle + self.span / 2.0
    }

    pub fn point_at(&self, radius: f64, degrees: f64) -> Point {
        self.center.polar(radius, degrees)
    }

    /// Middle of the wedge, halfway between both radii; where a label goes.
    pub fn anchor(&self) -> Point {
        self.point_at(
            (self.inner_radius + self.outer_radius) / 2.0,
            self.mid_angle(),
        )
    }

    /// Closed-region containment. Both circles and both radial edges belong to the sector.
    pub fn contains(&self, point: Point) -> bool {
        let slack = self.outer_radius * RADIUS_EPSILON;
        let r = self.center.distance_to(point);
        if r < self.inner_radius - slack || r > self.outer_radius + slack {
            return false;
        }
        // inner_radius is positive, so the center itself never gets here
        let offset = wrap_degrees(self.center.angle_to(point) - self.start_angle);
        offset <= self.span + ANGLE_EPSILON || offset >= FULL_TURN - ANGLE_EPSILON
    }

    /// Outline of the wedge: out along the inner arc, across the end edge,
    /// back along the outer arc, then closed over the start edge.
    pub fn outline(&self) -> Vec<PathCommand> {
        vec![
            PathCommand::MoveTo(self.point_at(self.inner_radius, self.start_angle)),
            PathCommand::Arc {
                center: self.center,
                radius: self.inner_radius,
                start: self.start_angle,
                sweep: self.span,
            },
            PathCommand::LineTo(self.point_at(self.outer_radius, self.end_angle())),
            PathCommand::Arc {
                center: self.center,
                radius: self.outer_radius,
                start: self.end_angle(),
                sweep: -self.span,
            },
            PathCommand::Close,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quarter() -> Sector {
        Sector {
            center: Point::new(0.0, 0.0),
            start_angle: -90.0,
            span: 90.0,
            inner_radius: 10.0,
            outer_radius: 40.0,
        }
    }

    fn close(a: Point, b: Point) -> bool {
        a.distance_to(b) < 1e-9
    }

    #[test]
    fn test_contains_interior_and_edges() {
        let s = quarter();
        // between north and east, y grows downward
        assert!(s.contains(Point::new(15.0, -15.0)));
        assert!(s.contains(Point::new(0.0, -40.0)));
        assert!(s.contains(Point::new(40.0, 0.0)));
        assert!(s.contains(Point::new(0.0, -10.0)));
    }

    #[test]
    fn test_rejects_disks_and_other_quadrants() {
        let s = quarter();
        assert!(!s.contains(Point::new(0.0, 0.0)));
        assert!(!s.contains(Point::new(3.0, -3.0)));
        assert!(!s.contains(Point::new(40.0, -40.0)));
        assert!(!s.contains(Point::new(15.0, 15.0)));
        assert!(!s.contains(Point::new(-15.0, -15.0)));
    }

    #[test]
    fn test_full_circle_sector() {
        let s = Sector {
            span: FULL_TURN,
            ..quarter()
        };
        for deg in [-179.0, -90.0, 0.0, 45.5, 180.0] {
            assert!(s.contains(s.point_at(20.0, deg)));
        }
        assert!(!s.contains(s.point_at(5.0, 12.0)));
    }

    #[test]
    fn test_outline_shape() {
        let s = quarter();
        let path = s.outline();
        assert_eq!(path.len(), 5);
        assert!(matches!(path.last(), Some(PathCommand::Close)));

        let start = path[0].end_point().unwrap();
        assert!(close(start, Point::new(0.0, -10.0)));

        // inner arc ends at the inner radius, end angle
        assert!(close(path[1].end_point().unwrap(), Point::new(10.0, 0.0)));
        assert!(close(path[2].end_point().unwrap(), Point::new(40.0, 0.0)));
        // outer arc sweeps back to the start edge
        assert!(close(path[3].end_point().unwrap(), Point::new(0.0, -40.0)));
        assert!(matches!(path[3], PathCommand::Arc { sweep, .. } if sweep == -90.0));
    }

    #[test]
    fn test_anchor_lies_inside() {
        let s = quarter();
        let anchor = s.anchor();
        assert!(s.contains(anchor));
        assert!((s.center.distance_to(anchor) - 25.0).abs() < 1e-9);
    }
}
