use crate::element::*;
use crate::*;
use serde::Deserialize;
use serde_json::json;

fn parse(value: serde_json::Value) -> CircuitElement {
    CircuitElement::deserialize(&value).unwrap()
}

#[test]
fn schematic_component_defaults_rotation_and_source() {
    let el = parse(json!({
        "type": "schematic_component",
        "schematic_component_id": "sc1",
        "center": { "x": 1.0, "y": 2.0 },
        "size": { "width": 3.0, "height": 4.0 }
    }));
    let CircuitElement::SchematicComponent(c) = el else {
        panic!("expected schematic_component");
    };
    assert_eq!(c.rotation, 0.0);
    assert_eq!(c.source_component_id, None);
    assert_eq!(c.center, Position::new(1.0, 2.0));
}

#[test]
fn debug_objects_are_tagged_by_shape() {
    let el = parse(json!({
        "type": "schematic_debug_object",
        "shape": "line",
        "start": { "x": 0, "y": 0 },
        "end": { "x": 1, "y": 1 },
        "label": "marker"
    }));
    let CircuitElement::SchematicDebugObject(DebugObject::Line { label, .. }) = el else {
        panic!("expected a debug line");
    };
    assert_eq!(label.as_deref(), Some("marker"));
}

#[test]
fn pcb_pads_and_routes_use_nested_tags() {
    let pad = parse(json!({
        "type": "pcb_smtpad",
        "shape": "circle",
        "x": 1, "y": 1, "radius": 0.5,
        "layer": "bottom"
    }));
    let CircuitElement::PcbSmtpad(pad) = pad else {
        panic!("expected pcb_smtpad");
    };
    assert_eq!(pad.layer(), PcbLayer::Bottom);

    let trace = parse(json!({
        "type": "pcb_trace",
        "route": [
            { "route_type": "wire", "x": 0, "y": 0, "width": 0.2, "layer": "inner1" },
            { "route_type": "via", "x": 1, "y": 0 }
        ]
    }));
    let CircuitElement::PcbTrace(trace) = trace else {
        panic!("expected pcb_trace");
    };
    assert!(matches!(
        trace.route[0],
        PcbRoutePoint::Wire { layer: PcbLayer::Inner, .. }
    ));
    assert_eq!(trace.route[1].position(), Position::new(1.0, 0.0));
}

#[test]
fn unknown_types_become_the_unknown_variant() {
    let el = parse(json!({ "type": "future_widget", "x": 3, "anything": [1, 2] }));
    assert_eq!(el, CircuitElement::Unknown);
    assert_eq!(el.element_type(), "unknown");
}

#[test]
fn board_thickness_has_a_default() {
    let el = parse(json!({
        "type": "pcb_board",
        "center": { "x": 0, "y": 0 },
        "width": 10, "height": 5
    }));
    let CircuitElement::PcbBoard(board) = el else {
        panic!("expected pcb_board");
    };
    assert_eq!(board.thickness, 1.4);
    assert!(board.outline.is_empty());
}

#[test]
fn index_resolves_ports_and_components_by_id() {
    let elements = vec![
        parse(json!({
            "type": "schematic_port",
            "schematic_port_id": "p1",
            "center": { "x": 5, "y": 6 }
        })),
        parse(json!({
            "type": "source_component",
            "source_component_id": "s1",
            "name": "R1"
        })),
        parse(json!({
            "type": "schematic_port",
            "schematic_port_id": "p1",
            "center": { "x": 9, "y": 9 }
        })),
    ];
    let index = ElementIndex::new(&elements);
    assert_eq!(
        index.schematic_port("p1").map(|p| p.center),
        Some(Position::new(5.0, 6.0))
    );
    assert_eq!(
        index.source_component("s1").map(|s| s.name.as_str()),
        Some("R1")
    );
    assert!(index.pcb_component("missing").is_none());
}
