use super::{PIN_FONT_SIZE, PORT_RADIUS, STROKE_WIDTH, SchematicDispatcher};
use crate::node::SvgNode;
use crate::primitives;
use crate::text::{TextMeasurer, anchored_text_box};
use circuit_svg_core::element::{DebugObject, TextAnchor};
use circuit_svg_core::geom::{self, Point};

/// Label text with its real-world anchor point and alignment.
fn label_placement(obj: &DebugObject) -> Option<(&str, Point, TextAnchor)> {
    match obj {
        DebugObject::Rect {
            center,
            size,
            label,
        } => {
            let at = geom::point(center.x - size.width / 2.0, center.y + size.height / 2.0);
            label.as_deref().map(|l| (l, at, TextAnchor::BottomLeft))
        }
        DebugObject::Line { start, end, label } => {
            let mid = geom::point((start.x + end.x) / 2.0, (start.y + end.y) / 2.0);
            label.as_deref().map(|l| (l, mid, TextAnchor::Bottom))
        }
        DebugObject::Point { center, label } => {
            let at = geom::point(center.x + PORT_RADIUS * 2.0, center.y);
            label.as_deref().map(|l| (l, at, TextAnchor::Left))
        }
    }
}

pub(super) fn extent_points(obj: &DebugObject, measurer: &dyn TextMeasurer) -> Vec<Point> {
    let mut points = match obj {
        DebugObject::Rect { center, size, .. } => vec![
            geom::point(center.x - size.width / 2.0, center.y - size.height / 2.0),
            geom::point(center.x + size.width / 2.0, center.y + size.height / 2.0),
        ],
        DebugObject::Line { start, end, .. } => vec![start.to_point(), end.to_point()],
        DebugObject::Point { center, .. } => vec![
            geom::point(center.x - PORT_RADIUS, center.y - PORT_RADIUS),
            geom::point(center.x + PORT_RADIUS, center.y + PORT_RADIUS),
        ],
    };
    if let Some((label, at, anchor)) = label_placement(obj) {
        points.extend(anchored_text_box(measurer, label, PIN_FONT_SIZE, at, anchor, 0.0));
    }
    points
}

pub(super) fn debug_object(d: &SchematicDispatcher<'_>, obj: &DebugObject) -> Vec<SvgNode> {
    let stroke = d.px(STROKE_WIDTH);
    let shape = match obj {
        DebugObject::Rect { center, size, .. } => {
            let (hw, hh) = (size.width / 2.0, size.height / 2.0);
            primitives::rect_between(
                "debug-object",
                d.screen_xy(center.x - hw, center.y - hh),
                d.screen_xy(center.x + hw, center.y + hh),
            )
            .num("stroke-width", stroke)
        }
        DebugObject::Line { start, end, .. } => primitives::line(
            "debug-object",
            d.screen(start.to_point()),
            d.screen(end.to_point()),
            stroke,
        ),
        DebugObject::Point { center, .. } => primitives::circle(
            "debug-object debug-point",
            d.screen(center.to_point()),
            d.px(PORT_RADIUS),
        )
        .num("stroke-width", stroke),
    };

    let mut out = vec![shape];
    if let Some((label, at, anchor)) = label_placement(obj) {
        out.push(primitives::text(
            "debug-label",
            label,
            d.screen(at),
            d.px(PIN_FONT_SIZE),
            anchor,
            0.0,
        ));
    }
    out
}
