//! Schematic view.
//!
//! Real-world sizes below are in schematic units and go through the transform's linear part, so
//! strokes and labels keep their proportions at any zoom.

mod component;
mod debug;
mod grid;
mod labeled_points;
mod net_label;
mod probe;
mod shapes;
mod style;
mod text;
mod trace;

use crate::Result;
use crate::bounds::{BoundsBuilder, RealBounds};
use crate::compose::{LayerBuckets, Overlays, SceneFrame, compose};
use crate::node::SvgNode;
use crate::options::SvgRenderOptions;
use crate::svg::to_svg_string;
use crate::text::TextMeasurer;
use crate::transform::{ViewportTransform, build_transform};
use circuit_svg_core::geom::Point;
use circuit_svg_core::{CircuitElement, ElementIndex, Theme};

pub(crate) const STROKE_WIDTH: f64 = 0.02;
pub(crate) const PORT_RADIUS: f64 = 0.05;
pub(crate) const JUNCTION_RADIUS: f64 = 0.05;
pub(crate) const FONT_SIZE: f64 = 0.18;
pub(crate) const PIN_FONT_SIZE: f64 = 0.1;
pub(crate) const LABEL_PADDING: f64 = 0.06;
pub(crate) const PROBE_LENGTH: f64 = 0.3;
const NAME_GAP: f64 = 0.05;

/// Stacking order of the schematic view, bottom first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SchematicLayer {
    DebugObjects,
    Components,
    Ports,
    Traces,
    NetLabels,
    Text,
    Probes,
}

impl SchematicLayer {
    /// The bucket an element is drawn in, or `None` if the schematic view ignores it.
    pub fn of(element: &CircuitElement) -> Option<Self> {
        use CircuitElement as E;
        match element {
            E::SchematicDebugObject(_) => Some(Self::DebugObjects),
            E::SchematicComponent(_) | E::SchematicBox(_) | E::SchematicLine(_) => {
                Some(Self::Components)
            }
            E::SchematicPort(_) => Some(Self::Ports),
            E::SchematicTrace(_) => Some(Self::Traces),
            E::SchematicNetLabel(_) => Some(Self::NetLabels),
            E::SchematicText(_) => Some(Self::Text),
            E::SchematicVoltageProbe(_) => Some(Self::Probes),
            E::SourceComponent(_)
            | E::PcbBoard(_)
            | E::PcbComponent(_)
            | E::PcbSmtpad(_)
            | E::PcbPlatedHole(_)
            | E::PcbHole(_)
            | E::PcbVia(_)
            | E::PcbTrace(_)
            | E::PcbSilkscreenText(_)
            | E::PcbSilkscreenLine(_)
            | E::PcbSilkscreenPath(_)
            | E::CadComponent(_)
            | E::Unknown => None,
        }
    }
}

/// Real-world bounds of everything the schematic view draws.
pub fn compute_schematic_bounds(
    elements: &[CircuitElement],
    measurer: &dyn TextMeasurer,
) -> RealBounds {
    bounds_builder(elements, measurer).finish()
}

fn bounds_builder(elements: &[CircuitElement], measurer: &dyn TextMeasurer) -> BoundsBuilder {
    use CircuitElement as E;

    let index = ElementIndex::new(elements);
    let mut b = BoundsBuilder::new();
    for element in elements {
        match element {
            E::SchematicComponent(c) => {
                let name = c
                    .source_component_id
                    .as_deref()
                    .and_then(|id| index.source_component(id))
                    .map(|s| s.name.as_str());
                b.add_points(component::component_extent(c, name, measurer));
            }
            E::SchematicPort(p) => b.add_points(component::port_extent(p, measurer)),
            E::SchematicTrace(t) => {
                for edge in &t.edges {
                    b.add_point(edge.from.to_point());
                    b.add_point(edge.to.to_point());
                }
                for j in &t.junctions {
                    b.add_circle(j.x, j.y, JUNCTION_RADIUS);
                }
            }
            E::SchematicNetLabel(l) => b.add_points(net_label::outline(l, measurer)),
            E::SchematicText(t) => b.add_points(text::text_box(t, measurer)),
            E::SchematicBox(bx) => {
                b.add_xy(bx.x, bx.y);
                b.add_xy(bx.x + bx.width, bx.y + bx.height);
            }
            E::SchematicLine(l) => {
                b.add_xy(l.x1, l.y1);
                b.add_xy(l.x2, l.y2);
            }
            E::SchematicDebugObject(d) => b.add_points(debug::extent_points(d, measurer)),
            E::SchematicVoltageProbe(p) => b.add_points(probe::extent_points(p, measurer)),
            E::SourceComponent(_)
            | E::PcbBoard(_)
            | E::PcbComponent(_)
            | E::PcbSmtpad(_)
            | E::PcbPlatedHole(_)
            | E::PcbHole(_)
            | E::PcbVia(_)
            | E::PcbTrace(_)
            | E::PcbSilkscreenText(_)
            | E::PcbSilkscreenLine(_)
            | E::PcbSilkscreenPath(_)
            | E::CadComponent(_)
            | E::Unknown => {}
        }
    }
    b
}

/// Converts one element at a time into screen-space nodes.
///
/// Holds the id index so traces can snap to port centers and components can show their source
/// name. Nothing here mutates the input.
pub struct SchematicDispatcher<'a> {
    index: ElementIndex<'a>,
    transform: &'a ViewportTransform,
    theme: &'a Theme,
    measurer: &'a dyn TextMeasurer,
}

impl<'a> SchematicDispatcher<'a> {
    pub fn new(
        elements: &'a [CircuitElement],
        transform: &'a ViewportTransform,
        theme: &'a Theme,
        measurer: &'a dyn TextMeasurer,
    ) -> Self {
        Self {
            index: ElementIndex::new(elements),
            transform,
            theme,
            measurer,
        }
    }

    /// Nodes for `element`; empty for variants the schematic view does not draw.
    pub fn dispatch(&self, element: &CircuitElement) -> Vec<SvgNode> {
        use CircuitElement as E;
        match element {
            E::SchematicComponent(c) => component::component(self, c),
            E::SchematicPort(p) => component::port(self, p),
            E::SchematicTrace(t) => trace::trace(self, t),
            E::SchematicNetLabel(l) => net_label::net_label(self, l),
            E::SchematicText(t) => text::text(self, t),
            E::SchematicBox(b) => shapes::schematic_box(self, b),
            E::SchematicLine(l) => shapes::schematic_line(self, l),
            E::SchematicDebugObject(d) => debug::debug_object(self, d),
            E::SchematicVoltageProbe(p) => probe::voltage_probe(self, p),
            E::SourceComponent(_)
            | E::PcbBoard(_)
            | E::PcbComponent(_)
            | E::PcbSmtpad(_)
            | E::PcbPlatedHole(_)
            | E::PcbHole(_)
            | E::PcbVia(_)
            | E::PcbTrace(_)
            | E::PcbSilkscreenText(_)
            | E::PcbSilkscreenLine(_)
            | E::PcbSilkscreenPath(_)
            | E::CadComponent(_)
            | E::Unknown => Vec::new(),
        }
    }

    pub fn theme(&self) -> &Theme {
        self.theme
    }

    fn screen(&self, p: Point) -> Point {
        self.transform.apply(p)
    }

    fn screen_xy(&self, x: f64, y: f64) -> Point {
        self.transform.apply_xy(x, y)
    }

    /// Real length to pixels.
    fn px(&self, length: f64) -> f64 {
        self.transform.scale_length(length)
    }
}

/// Runs the full schematic pipeline and returns the root `<svg>` node.
pub fn render_schematic_scene(
    elements: &[CircuitElement],
    options: &SvgRenderOptions,
) -> Result<SvgNode> {
    options.validate()?;
    let measurer: &dyn TextMeasurer = options.text_measurer.as_ref();
    let theme = options.theme.as_ref();

    let mut builder = bounds_builder(elements, measurer);
    for lp in &options.labeled_points {
        builder.add_xy(lp.x, lp.y);
    }
    let bounds = builder.finish();
    tracing::debug!(elements = elements.len(), ?bounds, "schematic bounds");

    let (transform, _padding) = build_transform(&bounds, options.width, options.height)?;

    let dispatcher = SchematicDispatcher::new(elements, &transform, theme, measurer);
    let mut buckets = LayerBuckets::new();
    for element in elements {
        match SchematicLayer::of(element) {
            Some(layer) => buckets.extend(layer, dispatcher.dispatch(element)),
            None => tracing::trace!(
                element_type = element.element_type(),
                "element not drawn in schematic view"
            ),
        }
    }

    let mut overlays = Overlays::default();
    if let Some(grid) = &options.grid {
        overlays
            .below
            .extend(grid::grid_overlay(&transform, options.width, options.height, grid));
    }
    if !options.labeled_points.is_empty() {
        overlays.above.push(labeled_points::labeled_points_overlay(
            &transform,
            &options.labeled_points,
        ));
    }

    let frame = SceneFrame {
        width: options.width,
        height: options.height,
        background: theme.schematic.background.clone(),
        style: style::schematic_css(theme),
        transform,
    };
    Ok(compose(&frame, buckets, overlays))
}

/// Renders `elements` as a schematic SVG document.
pub fn convert_to_schematic_svg(
    elements: &[CircuitElement],
    options: &SvgRenderOptions,
) -> Result<String> {
    let root = render_schematic_scene(elements, options)?;
    Ok(to_svg_string(&root))
}
