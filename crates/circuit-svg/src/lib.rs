#![forbid(unsafe_code)]

//! `circuit-svg` converts circuit JSON into SVG documents without a browser or font stack.
//!
//! Three views are available: the schematic, the board (PCB) and an oblique topdown 3-D view.
//! Every output root carries `data-real-to-screen-transform`, which [`real_point_from_svg`] uses
//! to map screen positions back to circuit coordinates.
//!
//! # Features
//!
//! - `raster`: PNG output via pure-Rust SVG rasterization (`circuit_svg::raster`)

pub use circuit_svg_core::{
    CircuitElement, CircuitJson, CircuitSvgConfig, LoadOptions, Theme, element, geom, theme,
};
pub use circuit_svg_render as render;
pub use circuit_svg_render::{
    Camera, GridOptions, LabeledPoint, PcbSvgOptions, SvgRenderOptions, TopdownSvgOptions,
    ViewportTransform,
};

#[cfg(feature = "raster")]
pub mod raster;

use circuit_svg_core::geom::Point;

#[derive(Debug, thiserror::Error)]
pub enum CircuitSvgError {
    #[error(transparent)]
    Load(#[from] circuit_svg_core::Error),
    #[error(transparent)]
    Render(#[from] circuit_svg_render::Error),
    #[error("failed to parse SVG: {0}")]
    SvgParse(#[from] roxmltree::Error),
    #[error("SVG root has no usable data-real-to-screen-transform attribute")]
    MissingTransform,
    #[error("real-to-screen transform is not invertible")]
    SingularTransform,
}

pub type Result<T> = std::result::Result<T, CircuitSvgError>;

/// Loads circuit JSON leniently and renders the schematic view.
pub fn convert_circuit_json_to_schematic_svg(
    json: &str,
    options: &SvgRenderOptions,
) -> Result<String> {
    let circuit = CircuitJson::from_json_str(json, LoadOptions::default())?;
    Ok(render::convert_to_schematic_svg(circuit.elements(), options)?)
}

/// Loads circuit JSON leniently and renders the board view.
pub fn convert_circuit_json_to_pcb_svg(json: &str, options: &PcbSvgOptions) -> Result<String> {
    let circuit = CircuitJson::from_json_str(json, LoadOptions::default())?;
    Ok(render::convert_to_pcb_svg(circuit.elements(), options)?)
}

/// Loads circuit JSON leniently and renders the topdown 3-D view.
pub fn convert_circuit_json_to_3d_svg(json: &str, options: &TopdownSvgOptions) -> Result<String> {
    let circuit = CircuitJson::from_json_str(json, LoadOptions::default())?;
    Ok(render::convert_to_3d_svg(circuit.elements(), options)?)
}

/// Loader and per-view options bundled together.
///
/// Configured once (in code or from a JSON config) and reused across calls; it holds no state
/// between renders.
#[derive(Clone, Debug, Default)]
pub struct CircuitSvgRenderer {
    pub load: LoadOptions,
    pub schematic: SvgRenderOptions,
    pub pcb: PcbSvgOptions,
    pub topdown: TopdownSvgOptions,
}

impl CircuitSvgRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_load_options(mut self, load: LoadOptions) -> Self {
        self.load = load;
        self
    }

    pub fn with_schematic_options(mut self, options: SvgRenderOptions) -> Self {
        self.schematic = options;
        self
    }

    pub fn with_pcb_options(mut self, options: PcbSvgOptions) -> Self {
        self.pcb = options;
        self
    }

    pub fn with_topdown_options(mut self, options: TopdownSvgOptions) -> Self {
        self.topdown = options;
        self
    }

    /// Reads `{strict?, theme?, schematic?, pcb?, topdown?}`.
    ///
    /// A top-level `theme` applies to all three views; a view's own `theme` is merged on top.
    pub fn from_config(config: &CircuitSvgConfig) -> Result<Self> {
        let shared_theme = config.get("theme");
        let section = |name: &str| -> CircuitSvgConfig {
            let mut merged = CircuitSvgConfig::empty_object();
            if let Some(theme) = shared_theme {
                merged.set_value("theme", theme.clone());
            }
            if let Some(own) = config.get(name) {
                merged.deep_merge(own);
            }
            merged
        };

        let load = if config.get_bool("strict").unwrap_or(false) {
            LoadOptions::strict()
        } else {
            LoadOptions::lenient()
        };
        tracing::debug!(strict = load.strict, "configured circuit renderer");
        Ok(Self {
            load,
            schematic: SvgRenderOptions::from_config(&section("schematic"))?,
            pcb: PcbSvgOptions::from_config(&section("pcb"))?,
            topdown: TopdownSvgOptions::from_config(&section("topdown"))?,
        })
    }

    pub fn load(&self, json: &str) -> Result<CircuitJson> {
        Ok(CircuitJson::from_json_str(json, self.load)?)
    }

    pub fn schematic_svg(&self, json: &str) -> Result<String> {
        let circuit = self.load(json)?;
        Ok(render::convert_to_schematic_svg(circuit.elements(), &self.schematic)?)
    }

    pub fn pcb_svg(&self, json: &str) -> Result<String> {
        let circuit = self.load(json)?;
        Ok(render::convert_to_pcb_svg(circuit.elements(), &self.pcb)?)
    }

    pub fn topdown_svg(&self, json: &str) -> Result<String> {
        let circuit = self.load(json)?;
        Ok(render::convert_to_3d_svg(circuit.elements(), &self.topdown)?)
    }
}

/// Reads the real-to-screen transform stored on the root of an SVG produced by this crate.
pub fn transform_from_svg(svg: &str) -> Result<ViewportTransform> {
    let doc = roxmltree::Document::parse(svg)?;
    doc.root_element()
        .attribute("data-real-to-screen-transform")
        .and_then(ViewportTransform::parse_svg_matrix)
        .ok_or(CircuitSvgError::MissingTransform)
}

/// Maps a screen position in `svg` back to real circuit coordinates.
pub fn real_point_from_svg(svg: &str, screen_x: f64, screen_y: f64) -> Result<Point> {
    let inverse = transform_from_svg(svg)?
        .inverse()
        .ok_or(CircuitSvgError::SingularTransform)?;
    Ok(inverse.apply_xy(screen_x, screen_y))
}
