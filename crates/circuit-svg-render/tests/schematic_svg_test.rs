use circuit_svg_core::{CircuitElement, CircuitJson, LoadOptions};
use circuit_svg_render::{
    DeterministicTextMeasurer, Error, SvgRenderOptions, TextMeasurer, TextStyle,
    ViewportTransform, compute_schematic_bounds, convert_to_schematic_svg,
};
use serde_json::json;
use std::path::PathBuf;

fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
}

fn fixture(name: &str) -> Vec<CircuitElement> {
    let path = workspace_root().join("fixtures").join("circuits").join(name);
    let text = std::fs::read_to_string(&path).expect("fixture");
    CircuitJson::from_json_str(&text, LoadOptions::strict())
        .expect("fixture loads")
        .into_elements()
}

fn elements(value: serde_json::Value) -> Vec<CircuitElement> {
    CircuitJson::from_value(&value, LoadOptions::strict())
        .expect("circuit loads")
        .into_elements()
}

fn render(elements: &[CircuitElement]) -> String {
    convert_to_schematic_svg(elements, &SvgRenderOptions::default()).expect("render ok")
}

/// Classes of the root's drawn children, skipping `<style>` and the boundary rect.
fn layer_classes(svg: &str) -> Vec<String> {
    let doc = roxmltree::Document::parse(svg).expect("well-formed svg");
    doc.root_element()
        .children()
        .filter(|n| n.is_element())
        .skip(2)
        .map(|n| n.attribute("class").unwrap_or_default().to_string())
        .collect()
}

#[test]
fn single_component_fills_viewport_height() {
    let els = elements(json!([{
        "type": "schematic_component",
        "schematic_component_id": "c1",
        "center": { "x": 0, "y": 0 },
        "size": { "width": 10, "height": 10 }
    }]));
    let svg = render(&els);
    let doc = roxmltree::Document::parse(&svg).unwrap();
    let root = doc.root_element();
    assert_eq!(root.tag_name().name(), "svg");
    assert_eq!(root.attribute("width"), Some("1200"));
    assert_eq!(root.attribute("height"), Some("600"));
    assert_eq!(
        root.attribute("data-real-to-screen-transform"),
        Some("matrix(60,0,0,-60,600,300)")
    );

    let chip = doc
        .descendants()
        .find(|n| n.attribute("class") == Some("component chip"))
        .expect("component body");
    let points = chip.attribute("points").unwrap();
    for corner in ["300,600", "900,600", "900,0", "300,0"] {
        assert!(points.contains(corner), "{corner} missing from {points}");
    }
}

#[test]
fn empty_input_renders_background_only() {
    let svg = render(&[]);
    let doc = roxmltree::Document::parse(&svg).unwrap();
    let root = doc.root_element();
    let children: Vec<_> = root.children().filter(|n| n.is_element()).collect();
    assert_eq!(children.len(), 2);
    assert_eq!(children[0].tag_name().name(), "style");
    assert_eq!(children[1].attribute("class"), Some("boundary"));
    assert_eq!(
        root.attribute("data-real-to-screen-transform"),
        Some("matrix(600,0,0,-600,600,300)")
    );
}

#[test]
fn layers_stack_in_fixed_order_regardless_of_input_order() {
    let els = elements(json!([
        { "type": "schematic_text", "position": { "x": 0, "y": 2 }, "text": "note" },
        {
            "type": "schematic_net_label",
            "center": { "x": 2, "y": 0 },
            "anchor_side": "left",
            "text": "GND"
        },
        {
            "type": "schematic_trace",
            "schematic_trace_id": "t1",
            "edges": [{ "from": { "x": 0, "y": 0 }, "to": { "x": 2, "y": 0 } }]
        },
        {
            "type": "schematic_port",
            "schematic_port_id": "p1",
            "center": { "x": 0.5, "y": 0 }
        },
        {
            "type": "schematic_component",
            "schematic_component_id": "c1",
            "center": { "x": 0, "y": 0 },
            "size": { "width": 1, "height": 1 }
        }
    ]));
    assert_eq!(
        layer_classes(&render(&els)),
        [
            "schematic-component",
            "schematic-port",
            "trace",
            "net-label",
            "schematic-text"
        ]
    );
}

#[test]
fn unknown_elements_do_not_change_output() {
    let known = json!([{
        "type": "schematic_line",
        "x1": 0, "y1": 0, "x2": 3, "y2": 1
    }]);
    let mut with_unknown = known.clone();
    with_unknown
        .as_array_mut()
        .unwrap()
        .push(json!({ "type": "source_net", "name": "GND" }));

    assert_eq!(render(&elements(known)), render(&elements(with_unknown)));
}

#[test]
fn rendering_is_deterministic() {
    let els = fixture("schematic_basic.json");
    assert_eq!(render(&els), render(&els));
}

#[test]
fn fixture_draws_every_schematic_element() {
    let svg = render(&fixture("schematic_basic.json"));
    let doc = roxmltree::Document::parse(&svg).unwrap();

    let texts: Vec<_> = doc
        .descendants()
        .filter(|n| n.tag_name().name() == "text")
        .map(|n| n.text().unwrap_or_default().to_string())
        .collect();
    for expected in ["R1", "C1", "VOUT", "VOUT: 3.3V", "RC low-pass", "1", "2"] {
        assert!(texts.iter().any(|t| t == expected), "missing {expected:?}");
    }

    let junctions = doc
        .descendants()
        .filter(|n| n.attribute("class") == Some("trace-junction"))
        .count();
    assert_eq!(junctions, 1);

    let note = doc
        .descendants()
        .find(|n| n.is_element() && n.text() == Some("RC low-pass"))
        .unwrap();
    assert_eq!(note.attribute("style"), Some("fill: #336699"));

    let trace_lines = doc
        .descendants()
        .filter(|n| n.attribute("class") == Some("trace-line"))
        .count();
    assert_eq!(trace_lines, 2);
}

#[test]
fn drawn_geometry_stays_inside_the_viewport() {
    let svg = render(&fixture("schematic_basic.json"));
    let doc = roxmltree::Document::parse(&svg).unwrap();
    let transform = ViewportTransform::parse_svg_matrix(
        doc.root_element()
            .attribute("data-real-to-screen-transform")
            .unwrap(),
    )
    .unwrap();

    let bounds = compute_schematic_bounds(
        &fixture("schematic_basic.json"),
        &DeterministicTextMeasurer::default(),
    );
    for (x, y) in [
        (bounds.min_x, bounds.min_y),
        (bounds.max_x, bounds.max_y),
    ] {
        let p = transform.apply_xy(x, y);
        assert!((-1e-6..=1200.0 + 1e-6).contains(&p.x), "x {}", p.x);
        assert!((-1e-6..=600.0 + 1e-6).contains(&p.y), "y {}", p.y);
    }

    for chip in doc
        .descendants()
        .filter(|n| n.attribute("class") == Some("component chip"))
    {
        for pair in chip.attribute("points").unwrap().split(' ') {
            let (x, y) = pair.split_once(',').unwrap();
            let (x, y): (f64, f64) = (x.parse().unwrap(), y.parse().unwrap());
            assert!((0.0..=1200.0).contains(&x) && (0.0..=600.0).contains(&y));
        }
    }
}

/// Screen corners of a `<text>` node, measured the way the bounds calculator measures it and
/// turned by its `rotate(a, cx, cy)` transform, if any.
fn screen_text_corners(node: roxmltree::Node<'_, '_>) -> [(f64, f64); 4] {
    let num = |name: &str| -> f64 { node.attribute(name).unwrap().parse().unwrap() };
    let (x, y, size) = (num("x"), num("y"), num("font-size"));
    let metrics = DeterministicTextMeasurer::default()
        .measure(node.text().unwrap_or_default(), &TextStyle::sized(size));
    let (w, h) = (metrics.width, metrics.height.max(size));

    let (x0, x1) = match node.attribute("text-anchor") {
        Some("start") => (x, x + w),
        Some("end") => (x - w, x),
        _ => (x - w / 2.0, x + w / 2.0),
    };
    let (y0, y1) = match node.attribute("dominant-baseline") {
        Some("hanging") => (y, y + h),
        Some("auto") => (y - h, y),
        _ => (y - h / 2.0, y + h / 2.0),
    };
    let corners = [(x0, y0), (x1, y0), (x1, y1), (x0, y1)];

    let Some(args) = node
        .attribute("transform")
        .and_then(|t| t.strip_prefix("rotate("))
        .and_then(|t| t.strip_suffix(')'))
    else {
        return corners;
    };
    let args: Vec<f64> = args.split(',').map(|a| a.trim().parse().unwrap()).collect();
    let (sin, cos) = args[0].to_radians().sin_cos();
    corners.map(|(px, py)| {
        let (dx, dy) = (px - args[1], py - args[2]);
        (args[1] + dx * cos - dy * sin, args[2] + dx * sin + dy * cos)
    })
}

fn assert_texts_inside(svg: &str, width: f64, height: f64) -> usize {
    let doc = roxmltree::Document::parse(svg).unwrap();
    let mut checked = 0;
    for node in doc.descendants().filter(|n| n.tag_name().name() == "text") {
        let class = node.attribute("class").unwrap_or_default();
        for (x, y) in screen_text_corners(node) {
            assert!(
                (-1e-6..=width + 1e-6).contains(&x),
                "{class} x {x} outside 0..{width}"
            );
            assert!(
                (-1e-6..=height + 1e-6).contains(&y),
                "{class} y {y} outside 0..{height}"
            );
        }
        checked += 1;
    }
    checked
}

#[test]
fn labels_at_the_edges_stay_inside_the_viewport() {
    let els = elements(json!([
        { "type": "source_component", "source_component_id": "s1", "name": "A_VERY_LONG_NAME_R1" },
        {
            "type": "schematic_component",
            "schematic_component_id": "c1",
            "source_component_id": "s1",
            "center": { "x": 0, "y": 0 },
            "size": { "width": 1, "height": 1 }
        },
        {
            "type": "schematic_port",
            "schematic_port_id": "p1",
            "center": { "x": -0.5, "y": 0 },
            "facing_direction": "left",
            "pin_number": 12345
        },
        {
            "type": "schematic_voltage_probe",
            "position": { "x": 0.5, "y": 0 },
            "name": "VOUT_MEASURED",
            "voltage": 3.3
        },
        {
            "type": "schematic_debug_object",
            "shape": "point",
            "center": { "x": 0.5, "y": -0.5 },
            "label": "debug point far right"
        },
        {
            "type": "schematic_debug_object",
            "shape": "rect",
            "center": { "x": 0, "y": -0.5 },
            "size": { "width": 1, "height": 0.2 },
            "label": "DEBUG_RECT_WITH_A_WIDE_LABEL"
        }
    ]));
    let options = SvgRenderOptions {
        width: 400.0,
        height: 400.0,
        ..SvgRenderOptions::default()
    };
    let svg = convert_to_schematic_svg(&els, &options).unwrap();
    for class in ["component-name", "pin-number", "voltage-probe-text", "debug-label"] {
        let attr = format!(r#"class="{class}""#);
        assert!(svg.contains(&attr), "{class} not drawn");
    }
    assert_eq!(assert_texts_inside(&svg, 400.0, 400.0), 5);
}

#[test]
fn fixture_labels_stay_inside_the_viewport() {
    let svg = render(&fixture("schematic_basic.json"));
    assert!(assert_texts_inside(&svg, 1200.0, 600.0) >= 7);
}

#[test]
fn grid_renders_below_and_labeled_points_above() {
    let options = SvgRenderOptions::from_json(&json!({
        "grid": { "cellSize": 1, "labelCells": true },
        "labeledPoints": [{ "x": 1, "y": 1, "label": "A" }]
    }))
    .unwrap();
    let els = elements(json!([{
        "type": "schematic_component",
        "schematic_component_id": "c1",
        "center": { "x": 0, "y": 0 },
        "size": { "width": 2, "height": 2 }
    }]));
    let svg = convert_to_schematic_svg(&els, &options).unwrap();
    let classes = layer_classes(&svg);
    assert_eq!(classes.first().map(String::as_str), Some("grid"));
    assert_eq!(classes.last().map(String::as_str), Some("labeled-points"));
    assert!(svg.contains("grid-label"));
}

#[test]
fn invalid_viewport_is_rejected() {
    let options = SvgRenderOptions {
        width: 0.0,
        ..SvgRenderOptions::default()
    };
    let err = convert_to_schematic_svg(&[], &options).unwrap_err();
    assert!(matches!(err, Error::InvalidViewport { .. }));
}
