// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};

/// Whether `rect` contains `pt`, counting all four edges as inside.
///
/// [`Rect::contains`] excludes the far edges; frame hit-testing does not.
pub(crate) fn contains_point_inclusive(rect: Rect, pt: Point) -> bool {
    rect.min_x() <= pt.x && pt.x <= rect.max_x() && rect.min_y() <= pt.y && pt.y <= rect.max_y()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_are_inside() {
        let r = Rect::from_origin_size((10.0, 20.0), (30.0, 40.0));
        assert!(contains_point_inclusive(r, Point::new(10.0, 20.0)));
        assert!(contains_point_inclusive(r, Point::new(40.0, 60.0)));
        assert!(contains_point_inclusive(r, Point::new(40.0, 20.0)));
        assert!(contains_point_inclusive(r, Point::new(10.0, 60.0)));
        assert!(!contains_point_inclusive(r, Point::new(9.0, 19.0)));
        assert!(!contains_point_inclusive(r, Point::new(41.0, 61.0)));
        assert!(!contains_point_inclusive(r, Point::new(9.999, 30.0)));
    }

    #[test]
    fn zero_sized_rect_contains_its_origin() {
        let r = Rect::from_origin_size((5.0, 5.0), (0.0, 0.0));
        assert!(contains_point_inclusive(r, Point::new(5.0, 5.0)));
        assert!(!contains_point_inclusive(r, Point::new(5.0, 5.5)));
    }
}
