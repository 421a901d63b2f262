use super::{FONT_SIZE, PROBE_LENGTH, STROKE_WIDTH, SchematicDispatcher};
use crate::node::SvgNode;
use crate::primitives;
use crate::svg::fmt;
use crate::text::{TextMeasurer, anchored_text_box};
use circuit_svg_core::element::{SchematicVoltageProbe, TextAnchor};
use circuit_svg_core::geom::{self, Point};

const HEAD_LENGTH: f64 = 0.08;
const LABEL_GAP: f64 = 0.03;

/// The probe is drawn as an arrow coming in from the upper right.
fn tail(p: &SchematicVoltageProbe) -> Point {
    let leg = PROBE_LENGTH * std::f64::consts::FRAC_1_SQRT_2;
    geom::point(p.position.x + leg, p.position.y + leg)
}

fn label_anchor(p: &SchematicVoltageProbe) -> Point {
    let tail = tail(p);
    geom::point(tail.x + LABEL_GAP, tail.y)
}

/// Arrow tip and tail plus the measured label box.
pub(super) fn extent_points(
    p: &SchematicVoltageProbe,
    measurer: &dyn TextMeasurer,
) -> Vec<Point> {
    let mut points = vec![p.position.to_point(), tail(p)];
    if let Some(label) = probe_label(p) {
        points.extend(anchored_text_box(
            measurer,
            &label,
            FONT_SIZE,
            label_anchor(p),
            TextAnchor::Left,
            0.0,
        ));
    }
    points
}

pub(super) fn probe_label(p: &SchematicVoltageProbe) -> Option<String> {
    let voltage = p.voltage.filter(|v| v.is_finite()).map(|v| format!("{}V", fmt(v)));
    match (p.name.as_deref(), voltage) {
        (Some(name), Some(v)) => Some(format!("{name}: {v}")),
        (None, Some(v)) => Some(v),
        (Some(name), None) => Some(name.to_string()),
        (None, None) => None,
    }
}

pub(super) fn voltage_probe(
    d: &SchematicDispatcher<'_>,
    p: &SchematicVoltageProbe,
) -> Vec<SvgNode> {
    let tip = d.screen(p.position.to_point());
    let tail = d.screen(tail(p));

    let dir = (tip - tail).normalize();
    let head = d.px(HEAD_LENGTH);
    let base = tip - dir * head;
    let side = geom::vector(-dir.y, dir.x) * (head * 0.3);

    let mut group = SvgNode::new("g").attr("class", "voltage-probe");
    if let Some(id) = &p.schematic_trace_id {
        group.set_attr("data-schematic-trace-id", id.as_str());
    }
    group.push(primitives::line("voltage-probe-line", tail, base, d.px(STROKE_WIDTH)));
    group.push(primitives::polygon(
        "voltage-probe-head",
        &[tip, base + side, base - side],
    ));
    if let Some(label) = probe_label(p) {
        group.push(primitives::text(
            "voltage-probe-text",
            &label,
            d.screen(label_anchor(p)),
            d.px(FONT_SIZE),
            TextAnchor::Left,
            0.0,
        ));
    }
    vec![group]
}

#[cfg(test)]
mod tests {
    use super::*;
    use circuit_svg_core::element::Position;

    fn probe(name: Option<&str>, voltage: Option<f64>) -> SchematicVoltageProbe {
        SchematicVoltageProbe {
            position: Position::new(0.0, 0.0),
            schematic_trace_id: None,
            name: name.map(str::to_string),
            voltage,
        }
    }

    #[test]
    fn label_combines_name_and_voltage() {
        assert_eq!(
            probe_label(&probe(Some("VOUT"), Some(3.3))).as_deref(),
            Some("VOUT: 3.3V")
        );
        assert_eq!(probe_label(&probe(None, Some(5.0))).as_deref(), Some("5V"));
        assert_eq!(probe_label(&probe(Some("N1"), None)).as_deref(), Some("N1"));
        assert_eq!(probe_label(&probe(None, None)), None);
    }

    #[test]
    fn extent_covers_the_label() {
        let measurer = crate::text::DeterministicTextMeasurer::default();
        let p = probe(Some("VOUT_MEASURED"), Some(3.3));
        let far_right = extent_points(&p, &measurer)
            .iter()
            .map(|q| q.x)
            .fold(f64::NEG_INFINITY, f64::max);
        // "VOUT_MEASURED: 3.3V" is 19 columns wide.
        let label_width = 19.0 * FONT_SIZE * 0.6;
        assert!(far_right >= tail(&p).x + LABEL_GAP + label_width - 1e-9);

        assert_eq!(extent_points(&probe(None, None), &measurer).len(), 2);
    }
}
