use serde::{Deserialize, Serialize};

use crate::core::types::{ChartSize, PixelPoint};

pub const CIRCLE_RADIANS: f64 = std::f64::consts::TAU;

/// The first axis must be at the circle's top.
pub const RADIANS_TO_ROTATE: f64 = -(CIRCLE_RADIANS / 4.0);

/// Pure polar-to-Cartesian conversion around a fixed chart center.
///
/// The center is derived once from the configured chart size; projection is
/// deterministic and side-effect free so both rendering and tests can consume
/// the exact same geometry output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolarProjector {
    center: PixelPoint,
}

impl PolarProjector {
    #[must_use]
    pub const fn new(center: PixelPoint) -> Self {
        Self { center }
    }

    #[must_use]
    pub fn from_size(size: ChartSize) -> Self {
        Self::new(size.center())
    }

    #[must_use]
    pub const fn center(self) -> PixelPoint {
        self.center
    }

    #[must_use]
    pub fn point_on(self, angle_radians: f64, distance: f64) -> PixelPoint {
        PixelPoint::new(
            self.center.x + distance * angle_radians.cos(),
            self.center.y + distance * angle_radians.sin(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{PolarProjector, RADIANS_TO_ROTATE};
    use crate::core::types::PixelPoint;
    use approx::assert_relative_eq;

    #[test]
    fn point_on_at_zero_distance_is_the_center() {
        let projector = PolarProjector::new(PixelPoint::new(100.0, 50.0));
        let point = projector.point_on(1.234, 0.0);
        assert_relative_eq!(point.x, 100.0);
        assert_relative_eq!(point.y, 50.0);
    }

    #[test]
    fn point_on_rotated_angle_points_straight_up() {
        let projector = PolarProjector::new(PixelPoint::new(0.0, 0.0));
        let point = projector.point_on(RADIANS_TO_ROTATE, 10.0);
        assert_relative_eq!(point.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(point.y, -10.0, epsilon = 1e-12);
    }

    #[test]
    fn point_on_zero_angle_points_right() {
        let projector = PolarProjector::new(PixelPoint::new(5.0, 5.0));
        let point = projector.point_on(0.0, 3.0);
        assert_relative_eq!(point.x, 8.0);
        assert_relative_eq!(point.y, 5.0, epsilon = 1e-12);
    }
}
