//! Normalized work-area coordinates and direction-to-edge projection.
//!
//! Positions are unit coordinates: origin at the upper left corner of the
//! work area, (1.0, 1.0) at the lower right, x increasing right and y
//! increasing down. Angles are degrees, clockwise from straight up.

use serde::Deserialize;
use serde::Serialize;

pub const ANGLE_UP: f64 = 0.0;
pub const ANGLE_RIGHT: f64 = 90.0;
pub const ANGLE_DOWN: f64 = 180.0;
pub const ANGLE_LEFT: f64 = 270.0;

/// A point in normalized work-area coordinates.
///
/// Values outside [0, 1] are legal and address points beyond the nominal
/// work area; whether such points are reachable is a backend concern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    /// Center of a unit-sized area, the default relative position.
    pub const CENTER: Position = Position::new(0.5, 0.5);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle given by its upper left and lower right corners.
///
/// Invariant: `upper_left.x <= lower_right.x` and
/// `upper_left.y <= lower_right.y`. Zero-width or zero-height boxes are
/// legal and represent point locations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub upper_left: Position,
    pub lower_right: Position,
}

impl BoundingBox {
    /// The full normalized work area.
    pub const UNIT: BoundingBox =
        BoundingBox::new(Position::new(0.0, 0.0), Position::new(1.0, 1.0));

    pub const fn new(upper_left: Position, lower_right: Position) -> Self {
        Self {
            upper_left,
            lower_right,
        }
    }

    pub fn width(&self) -> f64 {
        self.lower_right.x - self.upper_left.x
    }

    pub fn height(&self) -> f64 {
        self.lower_right.y - self.upper_left.y
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= self.upper_left.x
            && pos.x <= self.lower_right.x
            && pos.y >= self.upper_left.y
            && pos.y <= self.lower_right.y
    }
}

/// Linear interpolation within a bounding box.
///
/// `rel` (0, 0) maps to the upper left corner and (1, 1) to the lower
/// right. Values outside [0, 1] extrapolate beyond the box.
pub fn interpolate(bbox: BoundingBox, rel: Position) -> Position {
    Position::new(
        bbox.upper_left.x + rel.x * bbox.width(),
        bbox.upper_left.y + rel.y * bbox.height(),
    )
}

/// Maximum straight-line distance from `start` along `angle_degrees` before
/// crossing the boundary of `area`.
///
/// The angle is normalized into [0, 360). Axis-aligned directions take the
/// infinite branch for the motionless component, so no division by a zero
/// trigonometric term ever happens. For `start` inside `area` the result is
/// finite and non-negative, and traveling it lands on the boundary within
/// floating-point tolerance.
pub fn max_travel_distance(area: BoundingBox, start: Position, angle_degrees: f64) -> f64 {
    let angle = angle_degrees.rem_euclid(360.0);
    let rad = angle.to_radians();
    // 0 degrees is up and angles grow clockwise: x moves with sin, y
    // against cos.
    let dx = rad.sin();
    let dy = -rad.cos();

    let max_x = if angle > 0.0 && angle < 180.0 {
        (area.lower_right.x - start.x) / dx
    } else if angle > 180.0 {
        (area.upper_left.x - start.x) / dx
    } else {
        f64::INFINITY
    };

    let max_y = if angle > 90.0 && angle < 270.0 {
        (area.lower_right.y - start.y) / dy
    } else if angle < 90.0 || angle > 270.0 {
        (area.upper_left.y - start.y) / dy
    } else {
        f64::INFINITY
    };

    max_x.min(max_y)
}

/// The point reached by traveling `fraction` of the maximal in-area travel
/// from `start` along `angle_degrees`.
///
/// `fraction` 0.0 returns `start`, 1.0 lands on the boundary of `area`, and
/// values outside [0, 1] extrapolate without clamping.
pub fn project_along_angle(
    area: BoundingBox,
    start: Position,
    angle_degrees: f64,
    fraction: f64,
) -> Position {
    let travel = max_travel_distance(area, start, angle_degrees) * fraction;
    let rad = angle_degrees.rem_euclid(360.0).to_radians();
    Position::new(start.x + rad.sin() * travel, start.y - rad.cos() * travel)
}

/// Arc angle for a clockwise rotation; the sign carries the direction.
pub fn clockwise_arc_angle(arc_angle: f64) -> f64 {
    arc_angle.abs()
}

/// Arc angle for a counterclockwise rotation; the sign carries the direction.
pub fn counterclockwise_arc_angle(arc_angle: f64) -> f64 {
    -arc_angle.abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn assert_pos_eq(actual: Position, expected: Position) {
        assert!(
            (actual.x - expected.x).abs() < EPSILON && (actual.y - expected.y).abs() < EPSILON,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    #[test]
    fn test_interpolate_corners() {
        let bbox = BoundingBox::new(Position::new(0.2, 0.3), Position::new(0.8, 0.7));

        assert_pos_eq(interpolate(bbox, Position::new(0.0, 0.0)), bbox.upper_left);
        assert_pos_eq(interpolate(bbox, Position::new(1.0, 1.0)), bbox.lower_right);
    }

    #[test]
    fn test_interpolate_center_is_midpoint() {
        let bbox = BoundingBox::new(Position::new(0.2, 0.3), Position::new(0.8, 0.7));

        assert_pos_eq(interpolate(bbox, Position::CENTER), Position::new(0.5, 0.5));
    }

    #[test]
    fn test_interpolate_extrapolates_outside_unit_range() {
        let bbox = BoundingBox::new(Position::new(0.0, 0.0), Position::new(0.5, 0.5));

        assert_pos_eq(
            interpolate(bbox, Position::new(2.0, -1.0)),
            Position::new(1.0, -0.5),
        );
    }

    #[test]
    fn test_interpolate_degenerate_box_is_fixed_point() {
        let pos = Position::new(0.4, 0.6);
        let bbox = BoundingBox::new(pos, pos);

        assert_pos_eq(interpolate(bbox, Position::new(0.9, 0.1)), pos);
    }

    #[test]
    fn test_max_travel_axis_aligned() {
        let area = BoundingBox::UNIT;
        let start = Position::new(0.3, 0.4);

        assert!((max_travel_distance(area, start, ANGLE_UP) - 0.4).abs() < EPSILON);
        assert!((max_travel_distance(area, start, ANGLE_RIGHT) - 0.7).abs() < EPSILON);
        assert!((max_travel_distance(area, start, ANGLE_DOWN) - 0.6).abs() < EPSILON);
        assert!((max_travel_distance(area, start, ANGLE_LEFT) - 0.3).abs() < EPSILON);
    }

    #[test]
    fn test_max_travel_diagonal_reaches_corner() {
        let area = BoundingBox::UNIT;
        let start = Position::CENTER;

        // 45 degrees from center of the unit square hits the upper right
        // corner, sqrt(0.5^2 + 0.5^2) away.
        let expected = (0.5f64 * 0.5 * 2.0).sqrt();
        assert!((max_travel_distance(area, start, 45.0) - expected).abs() < EPSILON);
    }

    #[test]
    fn test_max_travel_normalizes_angle() {
        let area = BoundingBox::UNIT;
        let start = Position::new(0.3, 0.4);

        assert!(
            (max_travel_distance(area, start, ANGLE_RIGHT)
                - max_travel_distance(area, start, ANGLE_RIGHT + 360.0))
            .abs()
                < EPSILON
        );
        assert!(
            (max_travel_distance(area, start, ANGLE_LEFT)
                - max_travel_distance(area, start, -90.0))
            .abs()
                < EPSILON
        );
    }

    #[test]
    fn test_project_zero_fraction_returns_start() {
        let start = Position::new(0.3, 0.7);

        assert_pos_eq(
            project_along_angle(BoundingBox::UNIT, start, 123.0, 0.0),
            start,
        );
    }

    #[test]
    fn test_project_full_fraction_lands_on_edge() {
        let start = Position::new(0.3, 0.4);

        let up = project_along_angle(BoundingBox::UNIT, start, ANGLE_UP, 1.0);
        assert_pos_eq(up, Position::new(0.3, 0.0));

        let right = project_along_angle(BoundingBox::UNIT, start, ANGLE_RIGHT, 1.0);
        assert_pos_eq(right, Position::new(1.0, 0.4));

        let down = project_along_angle(BoundingBox::UNIT, start, ANGLE_DOWN, 1.0);
        assert_pos_eq(down, Position::new(0.3, 1.0));

        let left = project_along_angle(BoundingBox::UNIT, start, ANGLE_LEFT, 1.0);
        assert_pos_eq(left, Position::new(0.0, 0.4));
    }

    #[test]
    fn test_project_half_fraction_travels_halfway() {
        let start = Position::new(0.5, 0.8);

        let pos = project_along_angle(BoundingBox::UNIT, start, ANGLE_UP, 0.5);
        assert_pos_eq(pos, Position::new(0.5, 0.4));
    }

    #[test]
    fn test_project_fraction_above_one_extrapolates() {
        let start = Position::CENTER;

        let pos = project_along_angle(BoundingBox::UNIT, start, ANGLE_RIGHT, 2.0);
        assert_pos_eq(pos, Position::new(1.5, 0.5));
    }

    #[test]
    fn test_arc_angle_signs() {
        assert_eq!(clockwise_arc_angle(90.0), 90.0);
        assert_eq!(clockwise_arc_angle(-90.0), 90.0);
        assert_eq!(counterclockwise_arc_angle(90.0), -90.0);
        assert_eq!(counterclockwise_arc_angle(-90.0), -90.0);
    }

    mod prop_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_interior_position() -> impl Strategy<Value = Position> {
            (0.01f64..0.99, 0.01f64..0.99).prop_map(|(x, y)| Position::new(x, y))
        }

        proptest! {
            #[test]
            fn max_travel_is_finite_and_non_negative(
                start in arb_interior_position(),
                angle in -720.0f64..720.0,
            ) {
                let dist = max_travel_distance(BoundingBox::UNIT, start, angle);
                prop_assert!(dist.is_finite());
                prop_assert!(dist >= 0.0);
            }

            #[test]
            fn full_projection_lands_on_boundary(
                start in arb_interior_position(),
                angle in 0.0f64..360.0,
            ) {
                let end = project_along_angle(BoundingBox::UNIT, start, angle, 1.0);
                let on_vertical_edge = end.x.abs() < 1e-9 || (end.x - 1.0).abs() < 1e-9;
                let on_horizontal_edge = end.y.abs() < 1e-9 || (end.y - 1.0).abs() < 1e-9;
                prop_assert!(on_vertical_edge || on_horizontal_edge, "end = {:?}", end);
                prop_assert!(end.x >= -1e-9 && end.x <= 1.0 + 1e-9);
                prop_assert!(end.y >= -1e-9 && end.y <= 1.0 + 1e-9);
            }

            #[test]
            fn interpolate_stays_inside_for_unit_rel(
                rel_x in 0.0f64..=1.0,
                rel_y in 0.0f64..=1.0,
            ) {
                let bbox = BoundingBox::new(Position::new(0.25, 0.125), Position::new(0.75, 0.875));
                let pos = interpolate(bbox, Position::new(rel_x, rel_y));
                prop_assert!(bbox.contains(pos));
            }
        }
    }
}
