use crate::*;
use serde_json::json;

#[test]
fn dotted_lookups_walk_nested_objects() {
    let cfg = CircuitSvgConfig::from_value(json!({
        "width": 800,
        "grid": { "cellSize": 0.5, "labelCells": true },
        "theme": { "schematic": { "background": "#fff" } }
    }));
    assert_eq!(cfg.get_f64("width"), Some(800.0));
    assert_eq!(cfg.get_f64("grid.cellSize"), Some(0.5));
    assert_eq!(cfg.get_bool("grid.labelCells"), Some(true));
    assert_eq!(cfg.get_str("theme.schematic.background"), Some("#fff"));
    assert_eq!(cfg.get("grid.missing"), None);
}

#[test]
fn set_value_creates_and_coerces_intermediate_objects() {
    let mut cfg = CircuitSvgConfig::from_value(json!({ "grid": true }));
    cfg.set_value("grid.cellSize", json!(2));
    assert_eq!(cfg.as_value(), &json!({ "grid": { "cellSize": 2 } }));

    let mut cfg = CircuitSvgConfig::from_value(json!(null));
    cfg.set_value("height", json!(300));
    assert_eq!(cfg.as_value(), &json!({ "height": 300 }));
}

#[test]
fn deep_merge_keeps_untouched_keys() {
    let mut cfg = CircuitSvgConfig::from_value(json!({ "a": { "b": 1, "c": 2 }, "d": [1] }));
    cfg.deep_merge(&json!({ "a": { "c": 3 }, "d": [2, 3] }));
    assert_eq!(
        cfg.as_value(),
        &json!({ "a": { "b": 1, "c": 3 }, "d": [2, 3] })
    );
}
