//! Color tables for the schematic, board and topdown views.
//!
//! A [`Theme`] is an immutable value handed to the renderer; nothing here is global. Partial
//! overrides are applied with [`Theme::with_overrides`], which deep-merges a JSON object onto the
//! serialized defaults.

use crate::config::deep_merge;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub font_family: String,
    pub schematic: SchematicColors,
    pub pcb: PcbColors,
    pub topdown: TopdownColors,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            font_family: "sans-serif".to_string(),
            schematic: SchematicColors::default(),
            pcb: PcbColors::default(),
            topdown: TopdownColors::default(),
        }
    }
}

impl Theme {
    /// Returns a copy of `self` with `overrides` merged in.
    ///
    /// `overrides` must be a JSON object mirroring the theme's shape; unknown keys are ignored.
    pub fn with_overrides(&self, overrides: &Value) -> Result<Self> {
        if !overrides.is_object() {
            return Err(Error::InvalidTheme {
                message: "theme overrides must be a JSON object".to_string(),
            });
        }
        let mut base = serde_json::to_value(self)?;
        deep_merge(&mut base, overrides);
        Theme::deserialize(&base).map_err(|err| Error::InvalidTheme {
            message: err.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchematicColors {
    pub background: String,
    pub grid: String,
    pub grid_label: String,
    pub wire: String,
    pub junction: String,
    pub component_outline: String,
    pub component_body: String,
    pub pin: String,
    pub pin_number: String,
    pub reference: String,
    pub net_label: String,
    pub net_label_text: String,
    pub text: String,
    pub debug: String,
    pub probe: String,
    pub labeled_point: String,
}

impl Default for SchematicColors {
    fn default() -> Self {
        Self {
            background: "#F5F1ED".to_string(),
            grid: "#d8d2cb".to_string(),
            grid_label: "#a39d96".to_string(),
            wire: "#008400".to_string(),
            junction: "#008400".to_string(),
            component_outline: "#840000".to_string(),
            component_body: "#FFFFC2".to_string(),
            pin: "#840000".to_string(),
            pin_number: "#A90000".to_string(),
            reference: "#006464".to_string(),
            net_label: "#840000".to_string(),
            net_label_text: "#000000".to_string(),
            text: "#000000".to_string(),
            debug: "#ff0000".to_string(),
            probe: "#c800c8".to_string(),
            labeled_point: "#2563eb".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PcbColors {
    pub background: String,
    pub board: String,
    pub board_outline: String,
    pub top_copper: String,
    pub bottom_copper: String,
    pub drill: String,
    pub silkscreen_top: String,
    pub silkscreen_bottom: String,
    pub component_outline: String,
}

impl Default for PcbColors {
    fn default() -> Self {
        Self {
            background: "#000000".to_string(),
            board: "#0f3d1f".to_string(),
            board_outline: "rgba(255, 255, 255, 0.5)".to_string(),
            top_copper: "rgb(200, 52, 52)".to_string(),
            bottom_copper: "rgb(77, 127, 196)".to_string(),
            drill: "#FF26E2".to_string(),
            silkscreen_top: "#f2eda1".to_string(),
            silkscreen_bottom: "#5da9e9".to_string(),
            component_outline: "rgba(255, 255, 255, 0.35)".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopdownColors {
    pub background: String,
    pub board: String,
    pub component_body: String,
    pub pad: String,
    pub hole: String,
    /// Multiplier applied to a face color for the visible side faces (0..1).
    pub side_shade: f64,
}

impl Default for TopdownColors {
    fn default() -> Self {
        Self {
            background: "#ffffff".to_string(),
            board: "#0a6e2f".to_string(),
            component_body: "#3b3b3b".to_string(),
            pad: "#c9a227".to_string(),
            hole: "#1a1a1a".to_string(),
            side_shade: 0.65,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Rgb01 {
    r: f64,
    g: f64,
    b: f64,
}

fn parse_hex_rgb01(s: &str) -> Option<Rgb01> {
    let s = s.trim();
    let hex = s.strip_prefix('#')?;
    let (r, g, b) = match hex.len() {
        3 => {
            let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
            (r, g, b)
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            (r, g, b)
        }
        _ => return None,
    };
    Some(Rgb01 {
        r: (r as f64) / 255.0,
        g: (g as f64) / 255.0,
        b: (b as f64) / 255.0,
    })
}

fn rgb01_to_hex(rgb: Rgb01) -> String {
    let r = (rgb.r.clamp(0.0, 1.0) * 255.0).round() as i64;
    let g = (rgb.g.clamp(0.0, 1.0) * 255.0).round() as i64;
    let b = (rgb.b.clamp(0.0, 1.0) * 255.0).round() as i64;
    format!(
        "#{:02x}{:02x}{:02x}",
        r.clamp(0, 255),
        g.clamp(0, 255),
        b.clamp(0, 255)
    )
}

/// Scales a `#rgb` / `#rrggbb` color by `factor`. Non-hex colors are returned unchanged.
pub fn shade_hex(color: &str, factor: f64) -> String {
    let Some(rgb) = parse_hex_rgb01(color) else {
        return color.to_string();
    };
    let factor = if factor.is_finite() { factor.max(0.0) } else { 1.0 };
    rgb01_to_hex(Rgb01 {
        r: rgb.r * factor,
        g: rgb.g * factor,
        b: rgb.b * factor,
    })
}
