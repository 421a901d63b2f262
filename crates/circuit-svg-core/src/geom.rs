//! Geometry aliases over `euclid` plus the rotation helpers element shapes need.

pub type Unit = euclid::UnknownUnit;

pub type Point = euclid::Point2D<f64, Unit>;
pub type Vector = euclid::Vector2D<f64, Unit>;
pub type Size = euclid::Size2D<f64, Unit>;
pub type Transform = euclid::Transform2D<f64, Unit, Unit>;

pub fn point(x: f64, y: f64) -> Point {
    euclid::point2(x, y)
}

pub fn vector(x: f64, y: f64) -> Vector {
    euclid::vec2(x, y)
}

/// Rotates `p` counter-clockwise around `center` by `degrees` (real-world, Y up).
pub fn rotate_about(p: Point, center: Point, degrees: f64) -> Point {
    if degrees == 0.0 {
        return p;
    }
    let (sin, cos) = degrees.to_radians().sin_cos();
    let d = p - center;
    point(
        center.x + d.x * cos - d.y * sin,
        center.y + d.x * sin + d.y * cos,
    )
}

/// Corners of a `width` x `height` rectangle centered on `center` and rotated by `degrees`.
///
/// Order: bottom-left, bottom-right, top-right, top-left (before rotation).
pub fn rotated_rect_corners(center: Point, width: f64, height: f64, degrees: f64) -> [Point; 4] {
    let hw = width / 2.0;
    let hh = height / 2.0;
    [
        point(center.x - hw, center.y - hh),
        point(center.x + hw, center.y - hh),
        point(center.x + hw, center.y + hh),
        point(center.x - hw, center.y + hh),
    ]
    .map(|c| rotate_about(c, center, degrees))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotate_quarter_turn_is_counter_clockwise() {
        let p = rotate_about(point(1.0, 0.0), point(0.0, 0.0), 90.0);
        assert!((p.x - 0.0).abs() < 1e-12);
        assert!((p.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn unrotated_rect_corners_are_axis_aligned() {
        let c = rotated_rect_corners(point(1.0, 2.0), 4.0, 2.0, 0.0);
        assert_eq!(c[0], point(-1.0, 1.0));
        assert_eq!(c[2], point(3.0, 3.0));
    }
}
