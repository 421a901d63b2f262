use super::PcbDispatcher;
use crate::node::SvgNode;
use crate::primitives;
use circuit_svg_core::element::{PcbHole, PcbPlatedHole, PcbVia};

fn ring_and_drill(
    d: &PcbDispatcher<'_>,
    class: &str,
    x: f64,
    y: f64,
    outer_diameter: f64,
    hole_diameter: f64,
) -> SvgNode {
    let at = d.screen_xy(x, y);
    SvgNode::new("g")
        .attr("class", class)
        .child(primitives::circle("pcb-ring", at, d.px(outer_diameter / 2.0)))
        .child(primitives::circle("pcb-drill", at, d.px(hole_diameter / 2.0)))
}

pub(super) fn plated_hole(d: &PcbDispatcher<'_>, h: &PcbPlatedHole) -> SvgNode {
    ring_and_drill(
        d,
        "pcb-plated-hole",
        h.x,
        h.y,
        h.outer_diameter,
        h.hole_diameter,
    )
}

pub(super) fn via(d: &PcbDispatcher<'_>, v: &PcbVia) -> SvgNode {
    ring_and_drill(d, "pcb-via", v.x, v.y, v.outer_diameter, v.hole_diameter)
}

pub(super) fn hole(d: &PcbDispatcher<'_>, h: &PcbHole) -> SvgNode {
    primitives::circle(
        "pcb-hole pcb-drill",
        d.screen_xy(h.x, h.y),
        d.px(h.hole_diameter / 2.0),
    )
}
