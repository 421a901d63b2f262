//! Extruded boxes and their projected faces.

use super::Camera;
use circuit_svg_core::geom::{self, Point};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum SolidKind {
    Board,
    Body,
}

/// A prism: a footprint polygon extruded from `z_bottom` to `z_top`.
#[derive(Debug, Clone)]
pub(super) struct Solid {
    pub kind: SolidKind,
    pub id: Option<String>,
    /// Counter-clockwise in real coordinates.
    pub footprint: Vec<Point>,
    pub z_bottom: f64,
    pub z_top: f64,
    /// Input position, the last tie breaker in paint order.
    pub order: usize,
}

/// One projected face, ready for the screen transform.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct Face {
    pub points: Vec<Point>,
    pub is_top: bool,
}

fn signed_area(points: &[Point]) -> f64 {
    let n = points.len();
    (0..n)
        .map(|i| {
            let a = points[i];
            let b = points[(i + 1) % n];
            a.x * b.y - b.x * a.y
        })
        .sum::<f64>()
        / 2.0
}

impl Solid {
    pub fn new(
        kind: SolidKind,
        id: Option<String>,
        mut footprint: Vec<Point>,
        z_bottom: f64,
        z_top: f64,
        order: usize,
    ) -> Self {
        if signed_area(&footprint) < 0.0 {
            footprint.reverse();
        }
        Self {
            kind,
            id,
            footprint,
            z_bottom,
            z_top,
            order,
        }
    }

    pub fn center(&self) -> Point {
        let n = self.footprint.len().max(1) as f64;
        let (sx, sy) = self
            .footprint
            .iter()
            .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
        geom::point(sx / n, sy / n)
    }

    /// Every projected vertex, for bounds.
    pub fn projected_vertices(&self, camera: &Camera) -> impl Iterator<Item = Point> + '_ {
        let camera = *camera;
        self.footprint.iter().flat_map(move |p| {
            [
                camera.project(p.x, p.y, self.z_bottom),
                camera.project(p.x, p.y, self.z_top),
            ]
        })
    }

    /// Visible side faces followed by the top face.
    ///
    /// A side is visible when its outward normal points against the camera skew; the top is
    /// always visible.
    pub fn faces(&self, camera: &Camera) -> Vec<Face> {
        let n = self.footprint.len();
        let mut faces = Vec::new();
        for i in 0..n {
            let a = self.footprint[i];
            let b = self.footprint[(i + 1) % n];
            let normal = geom::vector(b.y - a.y, a.x - b.x);
            if normal.x * camera.skew_x + normal.y * camera.skew_y >= 0.0 {
                continue;
            }
            faces.push(Face {
                points: vec![
                    camera.project(a.x, a.y, self.z_bottom),
                    camera.project(b.x, b.y, self.z_bottom),
                    camera.project(b.x, b.y, self.z_top),
                    camera.project(a.x, a.y, self.z_top),
                ],
                is_top: false,
            });
        }
        faces.push(Face {
            points: self
                .footprint
                .iter()
                .map(|p| camera.project(p.x, p.y, self.z_top))
                .collect(),
            is_top: true,
        });
        faces
    }
}

/// Far bodies first: larger `center · skew`, then lower tops, then input order.
pub(super) fn paint_order(a: &Solid, b: &Solid, camera: &Camera) -> std::cmp::Ordering {
    let depth = |s: &Solid| {
        let c = s.center();
        c.x * camera.skew_x + c.y * camera.skew_y
    };
    depth(b)
        .total_cmp(&depth(a))
        .then(a.z_top.total_cmp(&b.z_top))
        .then(a.order.cmp(&b.order))
}
