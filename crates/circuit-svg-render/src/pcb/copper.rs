use super::{BoardLayer, PcbDispatcher, side_class};
use crate::node::SvgNode;
use crate::primitives;
use circuit_svg_core::element::{PcbLayer, PcbRoutePoint, PcbSmtPad, PcbTrace};
use circuit_svg_core::geom::{self, Point};

pub(super) fn smt_pad(d: &PcbDispatcher<'_>, pad: &PcbSmtPad) -> Option<(BoardLayer, SvgNode)> {
    let layer = BoardLayer::copper(pad.layer())?;
    let class = format!("pcb-pad pcb-pad-{}", side_class(pad.layer()));
    let (node, id) = match pad {
        PcbSmtPad::Rect {
            pcb_smtpad_id,
            x,
            y,
            width,
            height,
            ..
        } => (
            primitives::rect_between(
                &class,
                d.screen_xy(x - width / 2.0, y - height / 2.0),
                d.screen_xy(x + width / 2.0, y + height / 2.0),
            ),
            pcb_smtpad_id,
        ),
        PcbSmtPad::Circle {
            pcb_smtpad_id,
            x,
            y,
            radius,
            ..
        } => (
            primitives::circle(&class, d.screen_xy(*x, *y), d.px(*radius)),
            pcb_smtpad_id,
        ),
    };
    let node = match id {
        Some(id) => node.attr("data-pcb-smtpad-id", id.as_str()),
        None => node,
    };
    Some((layer, node))
}

/// A run of consecutive wire points on one copper layer with one width.
#[derive(Debug, PartialEq)]
struct WireRun {
    layer: PcbLayer,
    width: f64,
    points: Vec<Point>,
}

/// Splits a route into drawable runs. Vias, layer changes and width changes end a run; runs
/// with fewer than two points are dropped.
fn wire_runs(route: &[PcbRoutePoint]) -> Vec<WireRun> {
    let mut runs = Vec::new();
    let mut current: Option<WireRun> = None;

    for point in route {
        match point {
            PcbRoutePoint::Wire { x, y, width, layer } => {
                let p = geom::point(*x, *y);
                if let Some(run) = current
                    .as_mut()
                    .filter(|r| r.layer == *layer && r.width == *width)
                {
                    run.points.push(p);
                    continue;
                }

                // A new run starts at the previous point so segments stay connected.
                let mut points = Vec::new();
                if let Some(done) = current.take() {
                    points.extend(done.points.last().copied());
                    runs.push(done);
                }
                points.push(p);
                current = Some(WireRun {
                    layer: *layer,
                    width: *width,
                    points,
                });
            }
            PcbRoutePoint::Via { .. } => {
                if let Some(done) = current.take() {
                    runs.push(done);
                }
            }
        }
    }
    runs.extend(current);
    runs.retain(|r| r.points.len() >= 2);
    runs
}

pub(super) fn trace(d: &PcbDispatcher<'_>, t: &PcbTrace) -> Vec<(BoardLayer, SvgNode)> {
    let mut out = Vec::new();
    for run in wire_runs(&t.route) {
        let Some(layer) = BoardLayer::copper(run.layer) else {
            tracing::trace!(layer = ?run.layer, "skipping inner-layer trace run");
            continue;
        };
        let points: Vec<Point> = run.points.iter().map(|p| d.screen(*p)).collect();
        let class = format!("pcb-trace pcb-trace-{}", side_class(run.layer));
        let mut node = primitives::polyline(&class, &points, d.px(run.width));
        if let Some(id) = &t.pcb_trace_id {
            node.set_attr("data-pcb-trace-id", id.as_str());
        }
        out.push((layer, node));
    }
    out
}
