use circuit_svg_core::geom::{self, Point};
use serde::{Deserialize, Serialize};

/// Smallest real-world extent used on either axis when fitting a viewport.
///
/// Collinear or single-point circuits are expanded symmetrically to this size so the aspect
/// ratio and scale stay finite.
pub const MIN_REAL_EXTENT: f64 = 1.0;

/// Axis-aligned bounding box in real-world units (Y up).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RealBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl RealBounds {
    /// Bounds used when a collection has no coordinates at all.
    pub const UNIT: RealBounds = RealBounds {
        min_x: -0.5,
        max_x: 0.5,
        min_y: -0.5,
        max_y: 0.5,
    };

    pub fn from_points(points: impl IntoIterator<Item = (f64, f64)>) -> Option<Self> {
        let mut it = points
            .into_iter()
            .filter(|(x, y)| x.is_finite() && y.is_finite());
        let (x0, y0) = it.next()?;
        let mut b = Self {
            min_x: x0,
            max_x: x0,
            min_y: y0,
            max_y: y0,
        };
        for (x, y) in it {
            b.min_x = b.min_x.min(x);
            b.min_y = b.min_y.min(y);
            b.max_x = b.max_x.max(x);
            b.max_y = b.max_y.max(y);
        }
        Some(b)
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> Point {
        geom::point(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Expands each axis symmetrically around its center to at least `min_extent`.
    pub fn clamped(&self, min_extent: f64) -> Self {
        let mut out = *self;
        if out.width() < min_extent {
            let cx = (out.min_x + out.max_x) / 2.0;
            out.min_x = cx - min_extent / 2.0;
            out.max_x = cx + min_extent / 2.0;
        }
        if out.height() < min_extent {
            let cy = (out.min_y + out.max_y) / 2.0;
            out.min_y = cy - min_extent / 2.0;
            out.max_y = cy + min_extent / 2.0;
        }
        out
    }
}

/// Incremental bounds accumulator used by the per-view bounds calculators.
///
/// Non-finite coordinates are ignored.
#[derive(Debug, Clone, Default)]
pub struct BoundsBuilder {
    bounds: Option<RealBounds>,
}

impl BoundsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_xy(&mut self, x: f64, y: f64) {
        if !x.is_finite() || !y.is_finite() {
            return;
        }
        match &mut self.bounds {
            Some(b) => {
                b.min_x = b.min_x.min(x);
                b.min_y = b.min_y.min(y);
                b.max_x = b.max_x.max(x);
                b.max_y = b.max_y.max(y);
            }
            None => {
                self.bounds = Some(RealBounds {
                    min_x: x,
                    max_x: x,
                    min_y: y,
                    max_y: y,
                });
            }
        }
    }

    pub fn add_point(&mut self, p: Point) {
        self.add_xy(p.x, p.y);
    }

    pub fn add_points(&mut self, points: impl IntoIterator<Item = Point>) {
        for p in points {
            self.add_point(p);
        }
    }

    /// Adds an axis-aligned box of `width` x `height` centered on (`cx`, `cy`).
    pub fn add_centered_rect(&mut self, cx: f64, cy: f64, width: f64, height: f64) {
        let hw = width.abs() / 2.0;
        let hh = height.abs() / 2.0;
        self.add_xy(cx - hw, cy - hh);
        self.add_xy(cx + hw, cy + hh);
    }

    pub fn add_circle(&mut self, cx: f64, cy: f64, radius: f64) {
        self.add_centered_rect(cx, cy, radius * 2.0, radius * 2.0);
    }

    pub fn is_empty(&self) -> bool {
        self.bounds.is_none()
    }

    /// Returns the accumulated bounds, or [`RealBounds::UNIT`] when nothing was added.
    pub fn finish(self) -> RealBounds {
        self.bounds.unwrap_or(RealBounds::UNIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_builder_yields_unit_box() {
        let b = BoundsBuilder::new().finish();
        assert_eq!(b, RealBounds::UNIT);
        assert!(b.width() > 0.0 && b.height() > 0.0);
    }

    #[test]
    fn non_finite_coordinates_are_ignored() {
        let mut builder = BoundsBuilder::new();
        builder.add_xy(f64::NAN, 1.0);
        builder.add_xy(2.0, f64::INFINITY);
        assert!(builder.is_empty());
        builder.add_xy(1.0, 1.0);
        assert_eq!(
            builder.finish(),
            RealBounds {
                min_x: 1.0,
                max_x: 1.0,
                min_y: 1.0,
                max_y: 1.0
            }
        );
    }

    #[test]
    fn clamp_expands_degenerate_axes_symmetrically() {
        let b = RealBounds {
            min_x: 2.0,
            max_x: 2.0,
            min_y: -3.0,
            max_y: 7.0,
        }
        .clamped(MIN_REAL_EXTENT);
        assert_eq!(b.min_x, 1.5);
        assert_eq!(b.max_x, 2.5);
        assert_eq!(b.min_y, -3.0);
        assert_eq!(b.max_y, 7.0);
    }

    #[test]
    fn from_points_tracks_extremes() {
        let b = RealBounds::from_points([(1.0, 5.0), (-2.0, 0.0), (4.0, -1.0)]).unwrap();
        assert_eq!((b.min_x, b.max_x, b.min_y, b.max_y), (-2.0, 4.0, -1.0, 5.0));
        assert!(RealBounds::from_points(std::iter::empty()).is_none());
    }
}
