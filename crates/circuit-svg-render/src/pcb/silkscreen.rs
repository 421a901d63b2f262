use super::{PcbDispatcher, SILKSCREEN_FONT_SIZE, SILKSCREEN_STROKE, side_class};
use crate::node::SvgNode;
use crate::primitives;
use crate::svg::fmt;
use crate::text::{TextMeasurer, anchored_text_box};
use circuit_svg_core::element::{
    PcbLayer, PcbSilkscreenLine, PcbSilkscreenPath, PcbSilkscreenText,
};
use circuit_svg_core::geom::{self, Point};

fn class(kind: &str, layer: PcbLayer) -> String {
    format!("pcb-silkscreen {kind} pcb-silkscreen-{}", side_class(layer))
}

fn font_size(t: &PcbSilkscreenText) -> f64 {
    t.font_size
        .filter(|s| s.is_finite() && *s > 0.0)
        .unwrap_or(SILKSCREEN_FONT_SIZE)
}

/// Real-world text box; bottom-side text is mirrored about its anchor like the drawn node.
pub(super) fn text_box(t: &PcbSilkscreenText, measurer: &dyn TextMeasurer) -> [Point; 4] {
    let at = t.anchor_position.to_point();
    let corners = anchored_text_box(
        measurer,
        &t.text,
        font_size(t),
        at,
        t.anchor_alignment,
        t.ccw_rotation,
    );
    if t.layer == PcbLayer::Bottom {
        corners.map(|p| geom::point(2.0 * at.x - p.x, p.y))
    } else {
        corners
    }
}

pub(super) fn text(d: &PcbDispatcher<'_>, t: &PcbSilkscreenText) -> SvgNode {
    let at = d.screen(t.anchor_position.to_point());
    let mut node = primitives::text(
        &class("pcb-silkscreen-text", t.layer),
        &t.text,
        at,
        d.px(font_size(t)),
        t.anchor_alignment,
        t.ccw_rotation,
    );

    if t.layer == PcbLayer::Bottom {
        // Bottom silkscreen is read through the board: mirror about the anchor after rotating.
        let mirror = format!("matrix(-1, 0, 0, 1, {}, 0)", fmt(2.0 * at.x));
        let combined = match node.get_attr("transform") {
            Some(rotate) => format!("{mirror} {rotate}"),
            None => mirror,
        };
        node.set_attr("transform", combined);
    }
    node
}

pub(super) fn line(d: &PcbDispatcher<'_>, l: &PcbSilkscreenLine) -> SvgNode {
    primitives::line(
        &class("pcb-silkscreen-line", l.layer),
        d.screen_xy(l.x1, l.y1),
        d.screen_xy(l.x2, l.y2),
        d.px(l.stroke_width.unwrap_or(SILKSCREEN_STROKE)),
    )
}

pub(super) fn path(d: &PcbDispatcher<'_>, p: &PcbSilkscreenPath) -> Option<SvgNode> {
    if p.route.len() < 2 {
        return None;
    }
    let points: Vec<Point> = p.route.iter().map(|q| d.screen(q.to_point())).collect();
    Some(primitives::polyline(
        &class("pcb-silkscreen-path", p.layer),
        &points,
        d.px(p.stroke_width.unwrap_or(SILKSCREEN_STROKE)),
    ))
}
