use super::{STROKE_WIDTH, SchematicDispatcher};
use crate::node::SvgNode;
use crate::primitives;
use crate::svg::fmt;
use circuit_svg_core::element::{SchematicBox, SchematicLine};

const DASH: f64 = 0.1;
const GAP: f64 = 0.05;

pub(super) fn schematic_box(d: &SchematicDispatcher<'_>, b: &SchematicBox) -> Vec<SvgNode> {
    let mut node = primitives::rect_between(
        "schematic-box",
        d.screen_xy(b.x, b.y),
        d.screen_xy(b.x + b.width, b.y + b.height),
    )
    .num("stroke-width", d.px(STROKE_WIDTH));
    if b.is_dashed {
        node.set_attr(
            "stroke-dasharray",
            format!("{} {}", fmt(d.px(DASH)), fmt(d.px(GAP))),
        );
    }
    vec![node]
}

pub(super) fn schematic_line(d: &SchematicDispatcher<'_>, l: &SchematicLine) -> Vec<SvgNode> {
    vec![primitives::line(
        "schematic-line",
        d.screen_xy(l.x1, l.y1),
        d.screen_xy(l.x2, l.y2),
        d.px(STROKE_WIDTH),
    )]
}
