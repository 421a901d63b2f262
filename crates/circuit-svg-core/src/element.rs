//! Circuit element model.
//!
//! A circuit is a flat list of elements, each tagged by its JSON `"type"` field. Coordinates are
//! real-world units (usually millimeters) with Y pointing up.

mod cad;
mod pcb;
mod schematic;

pub use cad::{CadComponent, Vec3};
pub use pcb::{
    PcbBoard, PcbComponent, PcbHole, PcbLayer, PcbPlatedHole, PcbRoutePoint, PcbSilkscreenLine,
    PcbSilkscreenPath, PcbSilkscreenText, PcbSmtPad, PcbTrace, PcbVia,
};
pub use schematic::{
    AnchorSide, DebugObject, FacingDirection, SchematicBox, SchematicComponent, SchematicLine,
    SchematicNetLabel, SchematicPort, SchematicText, SchematicTrace, SchematicTraceEdge,
    SchematicVoltageProbe, SourceComponent, TextAnchor,
};

use crate::geom::{self, Point};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn to_point(self) -> Point {
        geom::point(self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Extent {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CircuitElement {
    SourceComponent(SourceComponent),

    SchematicComponent(SchematicComponent),
    SchematicPort(SchematicPort),
    SchematicTrace(SchematicTrace),
    SchematicNetLabel(SchematicNetLabel),
    SchematicText(SchematicText),
    SchematicBox(SchematicBox),
    SchematicLine(SchematicLine),
    SchematicDebugObject(DebugObject),
    SchematicVoltageProbe(SchematicVoltageProbe),

    PcbBoard(PcbBoard),
    PcbComponent(PcbComponent),
    PcbSmtpad(PcbSmtPad),
    PcbPlatedHole(PcbPlatedHole),
    PcbHole(PcbHole),
    PcbVia(PcbVia),
    PcbTrace(PcbTrace),
    PcbSilkscreenText(PcbSilkscreenText),
    PcbSilkscreenLine(PcbSilkscreenLine),
    PcbSilkscreenPath(PcbSilkscreenPath),

    CadComponent(CadComponent),

    /// Any element type this crate does not know about. Views render nothing for it.
    #[serde(other)]
    Unknown,
}

impl CircuitElement {
    pub fn element_type(&self) -> &'static str {
        match self {
            Self::SourceComponent(_) => "source_component",
            Self::SchematicComponent(_) => "schematic_component",
            Self::SchematicPort(_) => "schematic_port",
            Self::SchematicTrace(_) => "schematic_trace",
            Self::SchematicNetLabel(_) => "schematic_net_label",
            Self::SchematicText(_) => "schematic_text",
            Self::SchematicBox(_) => "schematic_box",
            Self::SchematicLine(_) => "schematic_line",
            Self::SchematicDebugObject(_) => "schematic_debug_object",
            Self::SchematicVoltageProbe(_) => "schematic_voltage_probe",
            Self::PcbBoard(_) => "pcb_board",
            Self::PcbComponent(_) => "pcb_component",
            Self::PcbSmtpad(_) => "pcb_smtpad",
            Self::PcbPlatedHole(_) => "pcb_plated_hole",
            Self::PcbHole(_) => "pcb_hole",
            Self::PcbVia(_) => "pcb_via",
            Self::PcbTrace(_) => "pcb_trace",
            Self::PcbSilkscreenText(_) => "pcb_silkscreen_text",
            Self::PcbSilkscreenLine(_) => "pcb_silkscreen_line",
            Self::PcbSilkscreenPath(_) => "pcb_silkscreen_path",
            Self::CadComponent(_) => "cad_component",
            Self::Unknown => "unknown",
        }
    }
}
