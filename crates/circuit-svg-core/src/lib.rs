#![forbid(unsafe_code)]

//! Circuit element model (headless).
//!
//! Design goals:
//! - a closed, serde-tagged element model keyed by the JSON `"type"` field
//! - forward compatible loading: unknown element types are kept as a no-op variant
//! - explicit, immutable theme values instead of global color tables

pub mod config;
pub mod element;
pub mod error;
pub mod geom;
pub mod index;
pub mod load;
pub mod theme;

pub use config::CircuitSvgConfig;
pub use element::{CircuitElement, Extent, Position};
pub use error::{Error, Result};
pub use index::ElementIndex;
pub use load::{CircuitJson, LoadOptions};
pub use theme::Theme;

#[cfg(test)]
mod tests;
