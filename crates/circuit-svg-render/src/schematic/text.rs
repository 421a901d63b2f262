use super::{FONT_SIZE, SchematicDispatcher};
use crate::node::SvgNode;
use crate::primitives;
use crate::text::{TextMeasurer, anchored_text_box};
use circuit_svg_core::element::SchematicText;
use circuit_svg_core::geom::Point;

fn font_size(t: &SchematicText) -> f64 {
    t.font_size.filter(|s| s.is_finite() && *s > 0.0).unwrap_or(FONT_SIZE)
}

/// Estimated real-world text box, rotated with the text.
pub(super) fn text_box(t: &SchematicText, measurer: &dyn TextMeasurer) -> [Point; 4] {
    anchored_text_box(
        measurer,
        &t.text,
        font_size(t),
        t.position.to_point(),
        t.anchor,
        t.rotation,
    )
}

pub(super) fn text(d: &SchematicDispatcher<'_>, t: &SchematicText) -> Vec<SvgNode> {
    let mut node = primitives::text(
        "schematic-text",
        &t.text,
        d.screen(t.position.to_point()),
        d.px(font_size(t)),
        t.anchor,
        t.rotation,
    );
    if let Some(color) = &t.color {
        // Inline style so the per-text color beats the class rule.
        node.set_attr("style", format!("fill: {color}"));
    }
    vec![node]
}
