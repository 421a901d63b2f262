//! Real-world to screen mapping.
//!
//! The viewport transform is solved from an anchor triangle: three bounding-box corners and the
//! three screen points they must land on. One affine solve yields the Y flip, the uniform scale
//! and the letterbox offset together.

use crate::bounds::{MIN_REAL_EXTENT, RealBounds};
use crate::{Error, Result};
use circuit_svg_core::geom::{self, Point, Transform, Vector};

/// Letterbox offsets in pixels, applied on both sides of one axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenPadding {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportTransform {
    matrix: Transform,
}

impl ViewportTransform {
    pub fn from_matrix(matrix: Transform) -> Self {
        Self { matrix }
    }

    /// `matrix(a,b,c,d,e,f)` in SVG terms: `x' = a·x + c·y + e`, `y' = b·x + d·y + f`.
    pub fn from_svg_coefficients(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self {
            matrix: Transform::new(a, b, c, d, e, f),
        }
    }

    /// Solves the affine map taking each `real[i]` to `screen[i]`.
    ///
    /// Returns `None` when the real triangle is degenerate (collinear points).
    pub fn from_triangles(real: [Point; 3], screen: [Point; 3]) -> Option<Self> {
        let rows = real.map(|p| [p.x, p.y, 1.0]);
        let [a, c, e] = solve3(rows, screen.map(|p| p.x))?;
        let [b, d, f] = solve3(rows, screen.map(|p| p.y))?;
        Some(Self::from_svg_coefficients(a, b, c, d, e, f))
    }

    pub fn matrix(&self) -> &Transform {
        &self.matrix
    }

    /// SVG coefficients `[a, b, c, d, e, f]`.
    pub fn coefficients(&self) -> [f64; 6] {
        let m = &self.matrix;
        [m.m11, m.m12, m.m21, m.m22, m.m31, m.m32]
    }

    pub fn apply(&self, p: Point) -> Point {
        self.matrix.transform_point(p)
    }

    pub fn apply_xy(&self, x: f64, y: f64) -> Point {
        self.apply(geom::point(x, y))
    }

    /// Linear part only (no translation); use for directions and offsets.
    pub fn apply_vector(&self, v: Vector) -> Vector {
        self.matrix.transform_vector(v)
    }

    /// Uniform scale factor of the linear part.
    pub fn scale(&self) -> f64 {
        self.matrix.determinant().abs().sqrt()
    }

    /// Maps a real-world length (radius, stroke width, font size) to pixels.
    pub fn scale_length(&self, length: f64) -> f64 {
        length * self.scale()
    }

    pub fn inverse(&self) -> Option<Self> {
        self.matrix.inverse().map(Self::from_matrix)
    }

    /// Serializes the transform as an SVG `matrix(a,b,c,d,e,f)` value.
    pub fn to_svg_matrix(&self) -> String {
        let mut buf = ryu_js::Buffer::new();
        let parts: Vec<String> = self
            .coefficients()
            .iter()
            .map(|v| crate::svg::js_number_to_string(snap(*v), &mut buf).to_string())
            .collect();
        format!("matrix({})", parts.join(","))
    }

    /// Parses the output of [`ViewportTransform::to_svg_matrix`].
    pub fn parse_svg_matrix(text: &str) -> Option<Self> {
        let inner = text
            .trim()
            .strip_prefix("matrix(")?
            .strip_suffix(')')?;
        let values: Vec<f64> = inner
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .map(|s| s.parse::<f64>())
            .collect::<std::result::Result<_, _>>()
            .ok()?;
        let [a, b, c, d, e, f] = <[f64; 6]>::try_from(values).ok()?;
        Some(Self::from_svg_coefficients(a, b, c, d, e, f))
    }
}

/// Drops solver noise such as `59.99999999999999`.
fn snap(v: f64) -> f64 {
    let nearest = v.round();
    if (v - nearest).abs() < 1e-9 { nearest } else { v }
}

/// Cramer's rule for a 3x3 system.
fn solve3(rows: [[f64; 3]; 3], rhs: [f64; 3]) -> Option<[f64; 3]> {
    fn det3(m: [[f64; 3]; 3]) -> f64 {
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    let det = det3(rows);
    if !det.is_finite() || det.abs() < 1e-12 {
        return None;
    }
    let mut out = [0.0; 3];
    for (col, slot) in out.iter_mut().enumerate() {
        let mut m = rows;
        for (row, value) in rhs.iter().enumerate() {
            m[row][col] = *value;
        }
        *slot = det3(m) / det;
    }
    Some(out)
}

/// Computes letterbox padding so the circuit keeps its aspect ratio inside the viewport.
pub fn screen_padding(bounds: &RealBounds, width: f64, height: f64) -> ScreenPadding {
    let circuit_aspect = bounds.width() / bounds.height();
    let container_aspect = width / height;
    if circuit_aspect > container_aspect {
        // Relatively wider circuit: full width, pad top and bottom.
        let new_height = width / circuit_aspect;
        ScreenPadding {
            x: 0.0,
            y: (height - new_height) / 2.0,
        }
    } else {
        let new_width = height * circuit_aspect;
        ScreenPadding {
            x: (width - new_width) / 2.0,
            y: 0.0,
        }
    }
}

/// Builds the real-to-screen transform for `bounds` inside a `width` x `height` viewport.
///
/// Bounds are clamped to [`MIN_REAL_EXTENT`] first. The real corners `(min_x, max_y)`,
/// `(max_x, max_y)` and `(max_x, min_y)` land on `(pad_x, pad_y)`, `(width - pad_x, pad_y)` and
/// `(width - pad_x, height - pad_y)`.
pub fn build_transform(
    bounds: &RealBounds,
    width: f64,
    height: f64,
) -> Result<(ViewportTransform, ScreenPadding)> {
    if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
        return Err(Error::InvalidViewport { width, height });
    }

    let bounds = bounds.clamped(MIN_REAL_EXTENT);
    let padding = screen_padding(&bounds, width, height);

    let real = [
        geom::point(bounds.min_x, bounds.max_y),
        geom::point(bounds.max_x, bounds.max_y),
        geom::point(bounds.max_x, bounds.min_y),
    ];
    let screen = [
        geom::point(padding.x, padding.y),
        geom::point(width - padding.x, padding.y),
        geom::point(width - padding.x, height - padding.y),
    ];
    let transform = ViewportTransform::from_triangles(real, screen).ok_or_else(|| {
        Error::InvalidOptions {
            message: format!("degenerate real bounds {bounds:?}"),
        }
    })?;

    tracing::debug!(
        min_x = bounds.min_x,
        max_x = bounds.max_x,
        min_y = bounds.min_y,
        max_y = bounds.max_y,
        pad_x = padding.x,
        pad_y = padding.y,
        scale = transform.scale(),
        "built viewport transform"
    );

    Ok((transform, padding))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: Point, b: Point) {
        assert!(
            (a.x - b.x).abs() < 1e-6 && (a.y - b.y).abs() < 1e-6,
            "{a:?} != {b:?}"
        );
    }

    fn square() -> RealBounds {
        RealBounds {
            min_x: -5.0,
            max_x: 5.0,
            min_y: -5.0,
            max_y: 5.0,
        }
    }

    #[test]
    fn square_circuit_in_wide_viewport_pads_horizontally() {
        let (t, pad) = build_transform(&square(), 1200.0, 600.0).unwrap();
        assert_eq!(pad, ScreenPadding { x: 300.0, y: 0.0 });
        assert_close(t.apply_xy(-5.0, 5.0), geom::point(300.0, 0.0));
        assert_close(t.apply_xy(5.0, 5.0), geom::point(900.0, 0.0));
        assert_close(t.apply_xy(5.0, -5.0), geom::point(900.0, 600.0));
        assert_close(t.apply_xy(0.0, 0.0), geom::point(600.0, 300.0));
        assert!((t.scale() - 60.0).abs() < 1e-9);
    }

    #[test]
    fn wide_circuit_pads_vertically_and_keeps_min_scale() {
        let bounds = RealBounds {
            min_x: 0.0,
            max_x: 40.0,
            min_y: 0.0,
            max_y: 10.0,
        };
        let (t, pad) = build_transform(&bounds, 1200.0, 600.0).unwrap();
        assert_eq!(pad.x, 0.0);
        assert!((pad.y - 150.0).abs() < 1e-9);
        let expected = (1200.0f64 / 40.0).min(600.0 / 10.0);
        assert!((t.scale() - expected).abs() < 1e-9);
    }

    #[test]
    fn y_axis_is_flipped() {
        let (t, _) = build_transform(&square(), 400.0, 400.0).unwrap();
        let up = t.apply_vector(geom::vector(0.0, 1.0));
        assert!(up.y < 0.0);
        assert!(up.x.abs() < 1e-9);
    }

    #[test]
    fn lengths_ignore_translation() {
        let (t, _) = build_transform(&square(), 1200.0, 600.0).unwrap();
        assert!((t.scale_length(0.5) - 30.0).abs() < 1e-9);
    }

    #[test]
    fn degenerate_bounds_are_clamped() {
        let point_bounds = RealBounds {
            min_x: 3.0,
            max_x: 3.0,
            min_y: 3.0,
            max_y: 3.0,
        };
        let (t, pad) = build_transform(&point_bounds, 1200.0, 600.0).unwrap();
        let [a, b, c, d, e, f] = t.coefficients();
        assert!([a, b, c, d, e, f].iter().all(|v| v.is_finite()));
        assert_eq!(pad.x, 300.0);
        assert_close(t.apply_xy(3.0, 3.0), geom::point(600.0, 300.0));
    }

    #[test]
    fn invalid_viewports_are_rejected() {
        assert!(build_transform(&square(), 0.0, 600.0).is_err());
        assert!(build_transform(&square(), f64::NAN, 600.0).is_err());
        assert!(build_transform(&square(), 100.0, -1.0).is_err());
    }

    #[test]
    fn collinear_triangle_has_no_solution() {
        let real = [
            geom::point(0.0, 0.0),
            geom::point(1.0, 1.0),
            geom::point(2.0, 2.0),
        ];
        let screen = [
            geom::point(0.0, 0.0),
            geom::point(1.0, 0.0),
            geom::point(0.0, 1.0),
        ];
        assert!(ViewportTransform::from_triangles(real, screen).is_none());
    }

    #[test]
    fn svg_matrix_round_trips_and_inverts() {
        let (t, _) = build_transform(&square(), 1200.0, 600.0).unwrap();
        assert_eq!(t.to_svg_matrix(), "matrix(60,0,0,-60,600,300)");
        let parsed = ViewportTransform::parse_svg_matrix(&t.to_svg_matrix()).unwrap();
        for (a, b) in parsed.coefficients().iter().zip(t.coefficients()) {
            assert!((a - b).abs() < 1e-9);
        }

        let inv = t.inverse().unwrap();
        assert_close(inv.apply_xy(900.0, 600.0), geom::point(5.0, -5.0));
        assert!(ViewportTransform::parse_svg_matrix("matrix(1,2,3)").is_none());
        assert!(ViewportTransform::parse_svg_matrix("scale(2)").is_none());
    }
}
