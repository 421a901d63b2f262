#![forbid(unsafe_code)]

//! Circuit element collections to layered SVG scenes.
//!
//! Every view runs the same pipeline: real-world bounds, one anchor-triangle viewport transform,
//! per-variant dispatch into layer buckets, composition under a root `<svg>`, serialization.

pub mod bounds;
pub mod compose;
pub mod node;
pub mod options;
pub mod pcb;
mod primitives;
pub mod schematic;
pub mod svg;
pub mod text;
pub mod topdown;
pub mod transform;

pub use bounds::{BoundsBuilder, MIN_REAL_EXTENT, RealBounds};
pub use compose::{LayerBuckets, Overlays, SceneFrame};
pub use node::SvgNode;
pub use options::{GridOptions, LabeledPoint, PcbSvgOptions, SvgRenderOptions, TopdownSvgOptions};
pub use pcb::{BoardLayer, compute_pcb_bounds, convert_to_pcb_svg, render_pcb_scene};
pub use schematic::{
    SchematicLayer, compute_schematic_bounds, convert_to_schematic_svg, render_schematic_scene,
};
pub use text::{DeterministicTextMeasurer, TextMeasurer, TextMetrics, TextStyle};
pub use topdown::{Camera, compute_topdown_bounds, convert_to_3d_svg, render_topdown_scene};
pub use transform::{ScreenPadding, ViewportTransform, build_transform};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] circuit_svg_core::Error),
    #[error("invalid viewport {width}x{height}: width and height must be finite and positive")]
    InvalidViewport { width: f64, height: f64 },
    #[error("invalid render options: {message}")]
    InvalidOptions { message: String },
    #[error("options JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
