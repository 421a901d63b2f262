use super::Position;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PcbLayer {
    #[default]
    Top,
    Bottom,
    /// Inner copper layers (`inner1`, `inner2`, ...) are drawn like bottom copper.
    #[serde(other)]
    Inner,
}

fn default_board_thickness() -> f64 {
    1.4
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PcbBoard {
    #[serde(default)]
    pub pcb_board_id: Option<String>,
    pub center: Position,
    pub width: f64,
    pub height: f64,
    /// Optional polygon outline; replaces the centered rectangle when present.
    #[serde(default)]
    pub outline: Vec<Position>,
    #[serde(default = "default_board_thickness")]
    pub thickness: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PcbComponent {
    pub pcb_component_id: String,
    pub center: Position,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub rotation: f64,
    #[serde(default)]
    pub layer: PcbLayer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum PcbSmtPad {
    Rect {
        #[serde(default)]
        pcb_smtpad_id: Option<String>,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        #[serde(default)]
        layer: PcbLayer,
    },
    Circle {
        #[serde(default)]
        pcb_smtpad_id: Option<String>,
        x: f64,
        y: f64,
        radius: f64,
        #[serde(default)]
        layer: PcbLayer,
    },
}

impl PcbSmtPad {
    pub fn layer(&self) -> PcbLayer {
        match self {
            Self::Rect { layer, .. } | Self::Circle { layer, .. } => *layer,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PcbPlatedHole {
    pub x: f64,
    pub y: f64,
    pub outer_diameter: f64,
    pub hole_diameter: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PcbHole {
    pub x: f64,
    pub y: f64,
    pub hole_diameter: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PcbVia {
    pub x: f64,
    pub y: f64,
    pub outer_diameter: f64,
    pub hole_diameter: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "route_type", rename_all = "snake_case")]
pub enum PcbRoutePoint {
    Wire {
        x: f64,
        y: f64,
        width: f64,
        #[serde(default)]
        layer: PcbLayer,
    },
    Via {
        x: f64,
        y: f64,
        #[serde(default)]
        from_layer: Option<PcbLayer>,
        #[serde(default)]
        to_layer: Option<PcbLayer>,
    },
}

impl PcbRoutePoint {
    pub fn position(&self) -> Position {
        match self {
            Self::Wire { x, y, .. } | Self::Via { x, y, .. } => Position::new(*x, *y),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PcbTrace {
    #[serde(default)]
    pub pcb_trace_id: Option<String>,
    pub route: Vec<PcbRoutePoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PcbSilkscreenText {
    pub anchor_position: Position,
    pub text: String,
    #[serde(default)]
    pub font_size: Option<f64>,
    #[serde(default)]
    pub layer: PcbLayer,
    #[serde(default)]
    pub ccw_rotation: f64,
    #[serde(default)]
    pub anchor_alignment: super::TextAnchor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PcbSilkscreenLine {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    #[serde(default)]
    pub stroke_width: Option<f64>,
    #[serde(default)]
    pub layer: PcbLayer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PcbSilkscreenPath {
    pub route: Vec<Position>,
    #[serde(default)]
    pub stroke_width: Option<f64>,
    #[serde(default)]
    pub layer: PcbLayer,
}
