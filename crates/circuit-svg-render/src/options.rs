//! Render options for the three views, with their JSON forms.

use crate::text::{DeterministicTextMeasurer, TextMeasurer};
use crate::topdown::Camera;
use crate::{Error, Result};
use circuit_svg_core::{CircuitSvgConfig, Theme};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

pub const DEFAULT_WIDTH: f64 = 1200.0;
pub const DEFAULT_HEIGHT: f64 = 600.0;

#[derive(Debug, Clone, PartialEq)]
pub struct GridOptions {
    /// Grid spacing in real-world units.
    pub cell_size: f64,
    /// When true, each grid line is labeled with its real coordinate.
    pub label_cells: bool,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            cell_size: 1.0,
            label_cells: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LabeledPoint {
    pub x: f64,
    pub y: f64,
    pub label: String,
}

#[derive(Clone)]
pub struct SvgRenderOptions {
    pub width: f64,
    pub height: f64,
    /// `None` disables the grid overlay.
    pub grid: Option<GridOptions>,
    pub labeled_points: Vec<LabeledPoint>,
    pub theme: Arc<Theme>,
    pub text_measurer: Arc<dyn TextMeasurer + Send + Sync>,
}

impl Default for SvgRenderOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            grid: None,
            labeled_points: Vec::new(),
            theme: Arc::new(Theme::default()),
            text_measurer: Arc::new(DeterministicTextMeasurer::default()),
        }
    }
}

impl std::fmt::Debug for SvgRenderOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SvgRenderOptions")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("grid", &self.grid)
            .field("labeled_points", &self.labeled_points)
            .field("theme", &self.theme)
            .finish_non_exhaustive()
    }
}

impl SvgRenderOptions {
    /// Parses `{width?, height?, grid?: bool | {cellSize?, labelCells?}, labeledPoints?, theme?}`.
    pub fn from_json(value: &Value) -> Result<Self> {
        let raw = RawSchematicOptions::deserialize(value)?;
        let defaults = Self::default();
        let grid = match raw.grid {
            None | Some(RawGrid::Enabled(false)) => None,
            Some(RawGrid::Enabled(true)) => Some(GridOptions::default()),
            Some(RawGrid::Options(o)) => {
                let d = GridOptions::default();
                Some(GridOptions {
                    cell_size: o.cell_size.unwrap_or(d.cell_size),
                    label_cells: o.label_cells.unwrap_or(d.label_cells),
                })
            }
        };
        let options = Self {
            width: raw.width.unwrap_or(defaults.width),
            height: raw.height.unwrap_or(defaults.height),
            grid,
            labeled_points: raw.labeled_points,
            theme: theme_from(raw.theme.as_ref())?,
            text_measurer: defaults.text_measurer,
        };
        options.validate()?;
        Ok(options)
    }

    pub fn from_config(config: &CircuitSvgConfig) -> Result<Self> {
        Self::from_json(config.as_value())
    }

    pub fn validate(&self) -> Result<()> {
        validate_viewport(self.width, self.height)?;
        if let Some(grid) = &self.grid {
            if !(grid.cell_size.is_finite() && grid.cell_size > 0.0) {
                return Err(Error::InvalidOptions {
                    message: format!("grid cell size must be positive, got {}", grid.cell_size),
                });
            }
        }
        Ok(())
    }
}

#[derive(Clone)]
pub struct PcbSvgOptions {
    pub width: f64,
    pub height: f64,
    /// Derive the height from the board's aspect ratio, keeping `width`.
    pub match_board_aspect_ratio: bool,
    pub theme: Arc<Theme>,
    /// Sizes silkscreen text when fitting the viewport.
    pub text_measurer: Arc<dyn TextMeasurer + Send + Sync>,
}

impl Default for PcbSvgOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            match_board_aspect_ratio: false,
            theme: Arc::new(Theme::default()),
            text_measurer: Arc::new(DeterministicTextMeasurer::default()),
        }
    }
}

impl std::fmt::Debug for PcbSvgOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PcbSvgOptions")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("match_board_aspect_ratio", &self.match_board_aspect_ratio)
            .field("theme", &self.theme)
            .finish_non_exhaustive()
    }
}

impl PcbSvgOptions {
    pub fn from_json(value: &Value) -> Result<Self> {
        let raw = RawPcbOptions::deserialize(value)?;
        let options = Self {
            width: raw.width.unwrap_or(DEFAULT_WIDTH),
            height: raw.height.unwrap_or(DEFAULT_HEIGHT),
            match_board_aspect_ratio: raw.match_board_aspect_ratio,
            theme: theme_from(raw.theme.as_ref())?,
            text_measurer: Arc::new(DeterministicTextMeasurer::default()),
        };
        options.validate()?;
        Ok(options)
    }

    pub fn from_config(config: &CircuitSvgConfig) -> Result<Self> {
        Self::from_json(config.as_value())
    }

    pub fn validate(&self) -> Result<()> {
        validate_viewport(self.width, self.height)
    }
}

#[derive(Debug, Clone)]
pub struct TopdownSvgOptions {
    pub width: f64,
    pub height: f64,
    pub camera: Camera,
    pub theme: Arc<Theme>,
}

impl Default for TopdownSvgOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            camera: Camera::topdown(),
            theme: Arc::new(Theme::default()),
        }
    }
}

impl TopdownSvgOptions {
    pub fn from_json(value: &Value) -> Result<Self> {
        let raw = RawTopdownOptions::deserialize(value)?;
        let options = Self {
            width: raw.width.unwrap_or(DEFAULT_WIDTH),
            height: raw.height.unwrap_or(DEFAULT_HEIGHT),
            camera: raw.camera.unwrap_or_else(Camera::topdown),
            theme: theme_from(raw.theme.as_ref())?,
        };
        options.validate()?;
        Ok(options)
    }

    pub fn from_config(config: &CircuitSvgConfig) -> Result<Self> {
        Self::from_json(config.as_value())
    }

    pub fn validate(&self) -> Result<()> {
        validate_viewport(self.width, self.height)?;
        if !(self.camera.skew_x.is_finite() && self.camera.skew_y.is_finite()) {
            return Err(Error::InvalidOptions {
                message: "camera skew must be finite".to_string(),
            });
        }
        Ok(())
    }
}

pub(crate) fn validate_viewport(width: f64, height: f64) -> Result<()> {
    if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidViewport { width, height })
    }
}

fn theme_from(overrides: Option<&Value>) -> Result<Arc<Theme>> {
    let theme = match overrides {
        None | Some(Value::Null) => Theme::default(),
        Some(v) => Theme::default().with_overrides(v)?,
    };
    Ok(Arc::new(theme))
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawSchematicOptions {
    width: Option<f64>,
    height: Option<f64>,
    grid: Option<RawGrid>,
    labeled_points: Vec<LabeledPoint>,
    theme: Option<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawGrid {
    Enabled(bool),
    Options(RawGridOptions),
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawGridOptions {
    cell_size: Option<f64>,
    label_cells: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawPcbOptions {
    width: Option<f64>,
    height: Option<f64>,
    match_board_aspect_ratio: bool,
    theme: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawTopdownOptions {
    width: Option<f64>,
    height: Option<f64>,
    camera: Option<Camera>,
    theme: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_match_documented_viewport() {
        let o = SvgRenderOptions::default();
        assert_eq!((o.width, o.height), (1200.0, 600.0));
        assert!(o.grid.is_none());
        assert!(o.labeled_points.is_empty());
        assert!(o.validate().is_ok());
    }

    #[test]
    fn grid_accepts_bool_or_object() {
        let on = SvgRenderOptions::from_json(&json!({ "grid": true })).unwrap();
        assert_eq!(on.grid, Some(GridOptions::default()));

        let off = SvgRenderOptions::from_json(&json!({ "grid": false })).unwrap();
        assert!(off.grid.is_none());

        let custom =
            SvgRenderOptions::from_json(&json!({ "grid": { "cellSize": 0.5, "labelCells": true } }))
                .unwrap();
        assert_eq!(
            custom.grid,
            Some(GridOptions {
                cell_size: 0.5,
                label_cells: true
            })
        );
    }

    #[test]
    fn labeled_points_and_theme_overrides_parse() {
        let o = SvgRenderOptions::from_json(&json!({
            "width": 800,
            "labeledPoints": [{ "x": 1, "y": 2, "label": "A" }],
            "theme": { "schematic": { "background": "#000" } }
        }))
        .unwrap();
        assert_eq!(o.width, 800.0);
        assert_eq!(o.height, 600.0);
        assert_eq!(o.labeled_points[0].label, "A");
        assert_eq!(o.theme.schematic.background, "#000");
        assert_eq!(o.theme.schematic.wire, Theme::default().schematic.wire);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(matches!(
            SvgRenderOptions::from_json(&json!({ "width": 0 })),
            Err(Error::InvalidViewport { .. })
        ));
        assert!(matches!(
            SvgRenderOptions::from_json(&json!({ "grid": { "cellSize": -1 } })),
            Err(Error::InvalidOptions { .. })
        ));
        assert!(SvgRenderOptions::from_json(&json!({ "width": "wide" })).is_err());
        assert!(SvgRenderOptions::from_json(&json!({ "theme": 3 })).is_err());
    }

    #[test]
    fn board_and_topdown_options_parse() {
        let pcb = PcbSvgOptions::from_json(&json!({ "matchBoardAspectRatio": true })).unwrap();
        assert!(pcb.match_board_aspect_ratio);

        let top = TopdownSvgOptions::from_json(&json!({ "camera": { "skewX": 0.5 } })).unwrap();
        assert_eq!(top.camera.skew_x, 0.5);
        assert_eq!(top.camera.skew_y, Camera::topdown().skew_y);
        assert_eq!(TopdownSvgOptions::default().camera, Camera::topdown());
    }
}
