//! Screen-space node builders shared by the views. All inputs are already transformed.

use crate::node::SvgNode;
use crate::svg::{fmt, points_attr, polyline_path};
use circuit_svg_core::element::TextAnchor;
use circuit_svg_core::geom::Point;

/// `text-anchor` and `dominant-baseline` for an anchor position on the text box.
pub fn anchor_attributes(anchor: TextAnchor) -> (&'static str, &'static str) {
    let text_anchor = match anchor {
        TextAnchor::Left | TextAnchor::TopLeft | TextAnchor::BottomLeft => "start",
        TextAnchor::Right | TextAnchor::TopRight | TextAnchor::BottomRight => "end",
        TextAnchor::Center | TextAnchor::Top | TextAnchor::Bottom => "middle",
    };
    let baseline = match anchor {
        TextAnchor::Top | TextAnchor::TopLeft | TextAnchor::TopRight => "hanging",
        TextAnchor::Bottom | TextAnchor::BottomLeft | TextAnchor::BottomRight => "auto",
        TextAnchor::Center | TextAnchor::Left | TextAnchor::Right => "central",
    };
    (text_anchor, baseline)
}

/// `rotate(angle, x, y)`; returns `None` for a zero angle so callers can skip the attribute.
pub fn rotate_attr(screen_degrees: f64, at: Point) -> Option<String> {
    if screen_degrees == 0.0 || !screen_degrees.is_finite() {
        return None;
    }
    Some(format!(
        "rotate({}, {}, {})",
        fmt(screen_degrees),
        fmt(at.x),
        fmt(at.y)
    ))
}

/// A `<text>` node. `ccw_degrees` is a real-world counter-clockwise rotation; the screen Y flip
/// turns it into a negative SVG rotation.
pub fn text(
    class: &str,
    content: &str,
    at: Point,
    font_size_px: f64,
    anchor: TextAnchor,
    ccw_degrees: f64,
) -> SvgNode {
    let (text_anchor, baseline) = anchor_attributes(anchor);
    let mut node = SvgNode::new("text")
        .attr("class", class)
        .num("x", at.x)
        .num("y", at.y)
        .num("font-size", font_size_px)
        .attr("text-anchor", text_anchor)
        .attr("dominant-baseline", baseline);
    if let Some(rotate) = rotate_attr(-ccw_degrees, at) {
        node.set_attr("transform", rotate);
    }
    node.text(content)
}

pub fn polygon(class: &str, points: &[Point]) -> SvgNode {
    SvgNode::new("polygon")
        .attr("class", class)
        .attr("points", points_attr(points))
}

pub fn polyline(class: &str, points: &[Point], stroke_width_px: f64) -> SvgNode {
    SvgNode::new("path")
        .attr("class", class)
        .attr("d", polyline_path(points, false))
        .num("stroke-width", stroke_width_px)
}

pub fn line(class: &str, a: Point, b: Point, stroke_width_px: f64) -> SvgNode {
    SvgNode::new("line")
        .attr("class", class)
        .num("x1", a.x)
        .num("y1", a.y)
        .num("x2", b.x)
        .num("y2", b.y)
        .num("stroke-width", stroke_width_px)
}

pub fn circle(class: &str, center: Point, radius_px: f64) -> SvgNode {
    SvgNode::new("circle")
        .attr("class", class)
        .num("cx", center.x)
        .num("cy", center.y)
        .num("r", radius_px)
}

/// Axis-aligned screen rectangle spanning two opposite corners in any order.
pub fn rect_between(class: &str, a: Point, b: Point) -> SvgNode {
    SvgNode::new("rect")
        .attr("class", class)
        .num("x", a.x.min(b.x))
        .num("y", a.y.min(b.y))
        .num("width", (a.x - b.x).abs())
        .num("height", (a.y - b.y).abs())
}

#[cfg(test)]
mod tests {
    use super::*;
    use circuit_svg_core::geom;

    #[test]
    fn anchors_map_to_svg_alignment() {
        assert_eq!(anchor_attributes(TextAnchor::Center), ("middle", "central"));
        assert_eq!(anchor_attributes(TextAnchor::TopLeft), ("start", "hanging"));
        assert_eq!(anchor_attributes(TextAnchor::BottomRight), ("end", "auto"));
    }

    #[test]
    fn ccw_rotation_becomes_negative_screen_rotation() {
        let node = text(
            "t",
            "R1",
            geom::point(10.0, 20.0),
            12.0,
            TextAnchor::Center,
            90.0,
        );
        assert_eq!(node.get_attr("transform"), Some("rotate(-90, 10, 20)"));
        assert_eq!(node.value, "R1");

        let origin = geom::point(0.0, 0.0);
        let flat = text("t", "R1", origin, 12.0, TextAnchor::Left, 0.0);
        assert_eq!(flat.get_attr("transform"), None);
    }

    #[test]
    fn rect_between_normalizes_corners() {
        let r = rect_between("r", geom::point(10.0, 5.0), geom::point(2.0, 9.0));
        assert_eq!(r.get_attr("x"), Some("2"));
        assert_eq!(r.get_attr("y"), Some("5"));
        assert_eq!(r.get_attr("width"), Some("8"));
        assert_eq!(r.get_attr("height"), Some("4"));
    }
}
