//! Layered scene composition.
//!
//! Each view declares its layers as an ordered enum. Dispatch output is bucketed by layer and the
//! buckets are concatenated in enum order, so stacking never depends on input order.

use crate::node::SvgNode;
use crate::svg::SVG_NS;
use crate::transform::ViewportTransform;
use std::collections::BTreeMap;

/// A view's stacking category. `Ord` is the paint order, bottom first.
pub trait Layer: Copy + Ord + std::fmt::Debug {}

impl<T: Copy + Ord + std::fmt::Debug> Layer for T {}

#[derive(Debug, Clone)]
pub struct LayerBuckets<L: Layer> {
    buckets: BTreeMap<L, Vec<SvgNode>>,
}

impl<L: Layer> Default for LayerBuckets<L> {
    fn default() -> Self {
        Self {
            buckets: BTreeMap::new(),
        }
    }
}

impl<L: Layer> LayerBuckets<L> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, layer: L, node: SvgNode) {
        self.buckets.entry(layer).or_default().push(node);
    }

    pub fn extend(&mut self, layer: L, nodes: impl IntoIterator<Item = SvgNode>) {
        let mut nodes = nodes.into_iter().peekable();
        if nodes.peek().is_none() {
            return;
        }
        self.buckets.entry(layer).or_default().extend(nodes);
    }

    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All nodes, layer by layer in paint order.
    pub fn into_nodes(self) -> impl Iterator<Item = SvgNode> {
        self.buckets.into_values().flatten()
    }
}

/// Root-level attributes shared by every view.
#[derive(Debug, Clone)]
pub struct SceneFrame {
    pub width: f64,
    pub height: f64,
    pub background: String,
    pub style: String,
    pub transform: ViewportTransform,
}

/// Nodes drawn below (grid) and above (labeled points) the layer stack.
#[derive(Debug, Clone, Default)]
pub struct Overlays {
    pub below: Vec<SvgNode>,
    pub above: Vec<SvgNode>,
}

/// Builds the root `<svg>`: style block, background rect, lower overlays, layers in order, then
/// upper overlays.
pub fn compose<L: Layer>(
    frame: &SceneFrame,
    buckets: LayerBuckets<L>,
    overlays: Overlays,
) -> SvgNode {
    let mut root = SvgNode::new("svg")
        .attr("xmlns", SVG_NS)
        .num("width", frame.width)
        .num("height", frame.height)
        .attr("style", format!("background-color: {}", frame.background))
        .attr(
            "data-real-to-screen-transform",
            frame.transform.to_svg_matrix(),
        );

    root.push(SvgNode::new("style").text(frame.style.clone()));
    root.push(
        SvgNode::new("rect")
            .attr("class", "boundary")
            .num("x", 0.0)
            .num("y", 0.0)
            .num("width", frame.width)
            .num("height", frame.height)
            .attr("fill", frame.background.clone()),
    );

    if buckets.is_empty() {
        tracing::debug!("no drawable elements, emitting background only");
    }
    let Overlays { below, above } = overlays;
    root.children.extend(below);
    root.children.extend(buckets.into_nodes());
    root.children.extend(above);
    root
}
