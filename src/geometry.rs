use glam::Vec2;
use rapier2d::prelude::{Point, Real, Vector};

/// Rotates `v` counter-clockwise by `angle` radians.
pub fn rotate_vector(v: Vec2, angle: f32) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// The four corners of a rectangle rotated around its center, counter-clockwise
/// starting with the corner that is bottom-left when `angle` is zero.
pub fn box_corners(center: Vec2, half_extents: Vec2, angle: f32) -> [Vec2; 4] {
    let Vec2 { x: hw, y: hh } = half_extents;
    [
        Vec2::new(-hw, -hh),
        Vec2::new(hw, -hh),
        Vec2::new(hw, hh),
        Vec2::new(-hw, hh),
    ]
    .map(|corner| center + rotate_vector(corner, angle))
}

/// Axis aligned rectangle in world coordinates (y pointing up).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    pub fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min: Vec2::new(min_x.min(max_x), min_y.min(max_y)),
            max: Vec2::new(min_x.max(max_x), min_y.max(max_y)),
        }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) / 2.0
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// Window size in pixels, one pixel per world unit.
    pub fn window_size(&self) -> (u32, u32) {
        (
            self.width().round().max(1.0) as u32,
            self.height().round().max(1.0) as u32,
        )
    }

    /// Projects a world point onto a window whose origin is the top-left corner.
    pub fn to_screen(&self, point: Vec2) -> Vec2 {
        Vec2::new(point.x - self.min.x, self.max.y - point.y)
    }
}

pub fn to_vector(v: Vec2) -> Vector<Real> {
    Vector::new(v.x, v.y)
}

pub fn to_point(v: Vec2) -> Point<Real> {
    Point::new(v.x, v.y)
}

pub fn from_vector(v: &Vector<Real>) -> Vec2 {
    Vec2::new(v.x, v.y)
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use super::*;

    fn assert_close(a: Vec2, b: Vec2) {
        assert!(a.abs_diff_eq(b, 1e-4), "{a} != {b}");
    }

    #[test]
    fn rotate_quarter_turn() {
        assert_close(rotate_vector(Vec2::X, FRAC_PI_2), Vec2::Y);
        assert_close(rotate_vector(Vec2::new(3.0, 4.0), PI), Vec2::new(-3.0, -4.0));
        assert_close(rotate_vector(Vec2::new(3.0, 4.0), 0.0), Vec2::new(3.0, 4.0));
    }

    #[test]
    fn unrotated_box_is_axis_aligned() {
        let corners = box_corners(Vec2::new(10.0, 20.0), Vec2::new(5.0, 2.0), 0.0);
        assert_close(corners[0], Vec2::new(5.0, 18.0));
        assert_close(corners[1], Vec2::new(15.0, 18.0));
        assert_close(corners[2], Vec2::new(15.0, 22.0));
        assert_close(corners[3], Vec2::new(5.0, 22.0));
    }

    #[test]
    fn quarter_turn_swaps_extents() {
        let corners = box_corners(Vec2::ZERO, Vec2::new(5.0, 2.0), FRAC_PI_2);
        let min = corners.iter().copied().reduce(Vec2::min).unwrap();
        let max = corners.iter().copied().reduce(Vec2::max).unwrap();
        assert_close(min, Vec2::new(-2.0, -5.0));
        assert_close(max, Vec2::new(2.0, 5.0));
    }

    #[test]
    fn screen_projection_flips_y() {
        let bounds = Bounds::new(0.0, 0.0, 1024.0, 1080.0);
        assert_close(bounds.to_screen(Vec2::new(0.0, 0.0)), Vec2::new(0.0, 1080.0));
        assert_close(bounds.to_screen(Vec2::new(100.0, 1080.0)), Vec2::new(100.0, 0.0));
        assert_eq!(bounds.window_size(), (1024, 1080));
    }

    #[test]
    fn bounds_normalize_corners() {
        let bounds = Bounds::new(10.0, 50.0, -10.0, 0.0);
        assert_eq!(bounds.min, Vec2::new(-10.0, 0.0));
        assert_eq!(bounds.width(), 20.0);
        assert_eq!(bounds.height(), 50.0);
        assert!(bounds.contains(Vec2::new(0.0, 25.0)));
        assert!(!bounds.contains(Vec2::new(0.0, -1.0)));
    }
}
