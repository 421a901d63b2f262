use crate::node::SvgNode;
use crate::options::LabeledPoint;
use crate::primitives;
use crate::svg::{fmt, fmt_path};
use crate::transform::ViewportTransform;
use circuit_svg_core::element::TextAnchor;
use circuit_svg_core::geom;

const ARM_PX: f64 = 5.0;
const DOT_RADIUS_PX: f64 = 3.0;
const LABEL_OFFSET_PX: f64 = 6.0;
const LABEL_FONT_PX: f64 = 12.0;

pub(super) fn labeled_points_overlay(
    transform: &ViewportTransform,
    points: &[LabeledPoint],
) -> SvgNode {
    let mut group = SvgNode::new("g").attr("class", "labeled-points");
    for lp in points {
        let at = transform.apply_xy(lp.x, lp.y);
        let (x, y) = (at.x, at.y);
        let cross = format!(
            "M {} {} L {} {} M {} {} L {} {}",
            fmt_path(x - ARM_PX),
            fmt_path(y),
            fmt_path(x + ARM_PX),
            fmt_path(y),
            fmt_path(x),
            fmt_path(y - ARM_PX),
            fmt_path(x),
            fmt_path(y + ARM_PX),
        );
        group.push(
            SvgNode::new("g")
                .attr("class", "labeled-point")
                .child(
                    SvgNode::new("path")
                        .attr("class", "labeled-point-cross")
                        .attr("d", cross),
                )
                .child(primitives::circle("labeled-point-dot", at, DOT_RADIUS_PX))
                .child(primitives::text(
                    "labeled-point-text",
                    &format!("{} ({}, {})", lp.label, fmt(lp.x), fmt(lp.y)),
                    geom::point(x + LABEL_OFFSET_PX, y - LABEL_OFFSET_PX),
                    LABEL_FONT_PX,
                    TextAnchor::BottomLeft,
                    0.0,
                )),
        );
    }
    group
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_point_gets_cross_dot_and_coordinates() {
        let t = ViewportTransform::from_svg_coefficients(10.0, 0.0, 0.0, -10.0, 100.0, 100.0);
        let overlay = labeled_points_overlay(
            &t,
            &[LabeledPoint {
                x: 1.5,
                y: -2.0,
                label: "A".to_string(),
            }],
        );
        let point = &overlay.children[0];
        assert_eq!(point.children.len(), 3);
        assert_eq!(point.children[1].get_attr("cx"), Some("115"));
        assert_eq!(point.children[1].get_attr("cy"), Some("120"));
        assert_eq!(point.children[2].value, "A (1.5, -2)");
    }
}
