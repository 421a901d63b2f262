use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub z: f64,
}

/// 3-D placement of a component body. Rendered only by the topdown view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CadComponent {
    #[serde(default)]
    pub cad_component_id: Option<String>,
    /// When set and `size` is missing, the footprint of that pcb component is extruded.
    #[serde(default)]
    pub pcb_component_id: Option<String>,
    pub position: Vec3,
    #[serde(default)]
    pub size: Option<Vec3>,
    /// Euler rotation in degrees; only `z` is used by the topdown projection.
    #[serde(default)]
    pub rotation: Option<Vec3>,
}
