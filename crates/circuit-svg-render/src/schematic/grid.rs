use crate::node::SvgNode;
use crate::options::GridOptions;
use crate::primitives;
use crate::svg::fmt;
use crate::transform::ViewportTransform;
use circuit_svg_core::element::TextAnchor;
use circuit_svg_core::geom;

/// Coarser cells are used when a viewport would need more lines than this per axis.
const MAX_GRID_LINES: f64 = 200.0;
const LABEL_FONT_PX: f64 = 10.0;
const LABEL_INSET_PX: f64 = 2.0;

/// Grid lines covering the whole viewport, aligned to multiples of the cell size.
pub(super) fn grid_overlay(
    transform: &ViewportTransform,
    width: f64,
    height: f64,
    grid: &GridOptions,
) -> Option<SvgNode> {
    let inverse = transform.inverse()?;
    let a = inverse.apply_xy(0.0, 0.0);
    let b = inverse.apply_xy(width, height);
    let (min_x, max_x) = (a.x.min(b.x), a.x.max(b.x));
    let (min_y, max_y) = (a.y.min(b.y), a.y.max(b.y));

    let mut cell = grid.cell_size;
    while ((max_x - min_x) / cell).max((max_y - min_y) / cell) > MAX_GRID_LINES {
        cell *= 2.0;
    }
    if cell != grid.cell_size {
        tracing::debug!(
            requested = grid.cell_size,
            used = cell,
            "coarsened grid cell size"
        );
    }

    let mut group = SvgNode::new("g").attr("class", "grid");
    let mut labels = Vec::new();

    for i in cell_range(min_x, max_x, cell) {
        let x = i as f64 * cell;
        let top = transform.apply_xy(x, max_y);
        let bottom = transform.apply_xy(x, min_y);
        group.push(primitives::line("grid-line", top, bottom, 1.0));
        if grid.label_cells {
            labels.push(primitives::text(
                "grid-label",
                &fmt(x),
                geom::point(top.x + LABEL_INSET_PX, height - LABEL_INSET_PX),
                LABEL_FONT_PX,
                TextAnchor::BottomLeft,
                0.0,
            ));
        }
    }
    for i in cell_range(min_y, max_y, cell) {
        let y = i as f64 * cell;
        let left = transform.apply_xy(min_x, y);
        let right = transform.apply_xy(max_x, y);
        group.push(primitives::line("grid-line", left, right, 1.0));
        if grid.label_cells {
            labels.push(primitives::text(
                "grid-label",
                &fmt(y),
                geom::point(LABEL_INSET_PX, left.y - LABEL_INSET_PX),
                LABEL_FONT_PX,
                TextAnchor::BottomLeft,
                0.0,
            ));
        }
    }
    group.children.extend(labels);
    Some(group)
}

/// Indices of the cell lines inside `[min, max]`, tolerant of inverse-transform noise.
fn cell_range(min: f64, max: f64, cell: f64) -> std::ops::RangeInclusive<i64> {
    let first = (min / cell - 1e-9).ceil() as i64;
    let last = (max / cell + 1e-9).floor() as i64;
    first..=last
}
