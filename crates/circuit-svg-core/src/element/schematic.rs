use super::{Extent, Position};
use serde::{Deserialize, Serialize};

/// Logical component; carries the display name schematic components refer to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceComponent {
    pub source_component_id: String,
    pub name: String,
    #[serde(default)]
    pub ftype: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchematicComponent {
    pub schematic_component_id: String,
    #[serde(default)]
    pub source_component_id: Option<String>,
    pub center: Position,
    pub size: Extent,
    /// Counter-clockwise rotation in degrees.
    #[serde(default)]
    pub rotation: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacingDirection {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchematicPort {
    pub schematic_port_id: String,
    #[serde(default)]
    pub schematic_component_id: Option<String>,
    pub center: Position,
    #[serde(default)]
    pub facing_direction: Option<FacingDirection>,
    #[serde(default)]
    pub pin_number: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchematicTraceEdge {
    pub from: Position,
    pub to: Position,
    #[serde(default)]
    pub from_schematic_port_id: Option<String>,
    #[serde(default)]
    pub to_schematic_port_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchematicTrace {
    pub schematic_trace_id: String,
    pub edges: Vec<SchematicTraceEdge>,
    #[serde(default)]
    pub junctions: Vec<Position>,
}

/// Side of the label box that touches the net.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnchorSide {
    #[default]
    Left,
    Right,
    Top,
    Bottom,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchematicNetLabel {
    #[serde(default)]
    pub schematic_net_label_id: Option<String>,
    pub center: Position,
    #[serde(default)]
    pub anchor_side: AnchorSide,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAnchor {
    #[default]
    Center,
    Left,
    Right,
    Top,
    Bottom,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchematicText {
    #[serde(default)]
    pub schematic_text_id: Option<String>,
    pub position: Position,
    pub text: String,
    #[serde(default)]
    pub anchor: TextAnchor,
    /// Counter-clockwise rotation in degrees.
    #[serde(default)]
    pub rotation: f64,
    #[serde(default)]
    pub font_size: Option<f64>,
    #[serde(default)]
    pub color: Option<String>,
}

/// Axis-aligned box; `x`/`y` is the lower-left corner in real-world units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchematicBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub is_dashed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchematicLine {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum DebugObject {
    Rect {
        center: Position,
        size: Extent,
        #[serde(default)]
        label: Option<String>,
    },
    Line {
        start: Position,
        end: Position,
        #[serde(default)]
        label: Option<String>,
    },
    Point {
        center: Position,
        #[serde(default)]
        label: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchematicVoltageProbe {
    pub position: Position,
    #[serde(default)]
    pub schematic_trace_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub voltage: Option<f64>,
}
