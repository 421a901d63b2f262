use super::{JUNCTION_RADIUS, STROKE_WIDTH, SchematicDispatcher};
use crate::node::SvgNode;
use crate::primitives;
use circuit_svg_core::element::{Position, SchematicTrace};
use circuit_svg_core::geom::Point;

pub(super) fn trace(d: &SchematicDispatcher<'_>, t: &SchematicTrace) -> Vec<SvgNode> {
    if t.edges.is_empty() && t.junctions.is_empty() {
        return Vec::new();
    }

    let stroke = d.px(STROKE_WIDTH);
    let mut group = SvgNode::new("g")
        .attr("class", "trace")
        .attr("data-schematic-trace-id", t.schematic_trace_id.as_str());

    for edge in &t.edges {
        let from = endpoint(d, edge.from, edge.from_schematic_port_id.as_deref());
        let to = endpoint(d, edge.to, edge.to_schematic_port_id.as_deref());
        group.push(primitives::polyline(
            "trace-line",
            &[d.screen(from), d.screen(to)],
            stroke,
        ));
    }
    for j in &t.junctions {
        group.push(primitives::circle(
            "trace-junction",
            d.screen(j.to_point()),
            d.px(JUNCTION_RADIUS),
        ));
    }
    vec![group]
}

/// A port reference wins over the stored coordinate so wires stay attached to moved pins.
fn endpoint(d: &SchematicDispatcher<'_>, stored: Position, port_id: Option<&str>) -> Point {
    port_id
        .and_then(|id| d.index.schematic_port(id))
        .map_or(stored, |port| port.center)
        .to_point()
}
