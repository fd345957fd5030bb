use crate::geometry::Point;
use crate::layout::sector_at;
use crate::sector::Sector;

/// Result of feeding one pointer position through the hover tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HoverUpdate {
    pub hover: Option<usize>,
    pub changed: bool,
}

impl HoverUpdate {
    pub fn new(hover: Option<usize>, changed: bool) -> Self {
        Self { hover, changed }
    }

    /// Transition from `previous` to `hover`.
    pub fn between(previous: Option<usize>, hover: Option<usize>) -> Self {
        Self::new(hover, previous != hover)
    }
}

/// Pure hover transition. The caller stores `hover` and notifies when `changed`.
pub fn update_hover(point: Point, sectors: &[Sector], previous: Option<usize>) -> HoverUpdate {
    HoverUpdate::between(previous, sector_at(point, sectors))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Size;
    use crate::layout::compute_sectors;

    #[test]
    fn test_hover_transitions() {
        let sectors = compute_sectors(4, Size::new(300.0, 300.0), -90.0).unwrap();
        let c = sectors[0].center;
        let in_first = c.polar(60.0, -45.0);
        let also_first = c.polar(80.0, -30.0);
        let in_second = c.polar(60.0, 45.0);
        let outside = c.polar(140.0, 10.0);

        let steps = vec![
            (in_first, Some(0), true),
            (also_first, Some(0), false),
            (in_second, Some(1), true),
            (outside, None, true),
            (outside, None, false),
            (c, None, false),
            (in_second, Some(1), true),
        ];

        let mut hover = None;
        for (point, expected, changed) in steps {
            let update = update_hover(point, &sectors, hover);
            assert_eq!(update, HoverUpdate::new(expected, changed), "at {point:?}");
            hover = update.hover;
        }
    }

    #[test]
    fn test_empty_sectors_never_hover() {
        let update = update_hover(Point::new(10.0, 10.0), &[], None);
        assert_eq!(update, HoverUpdate::default());
        let update = update_hover(Point::new(10.0, 10.0), &[], Some(2));
        assert_eq!(update, HoverUpdate::new(None, true));
    }
}
