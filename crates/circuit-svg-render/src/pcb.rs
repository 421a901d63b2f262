//! Board (PCB) view.

mod board;
mod copper;
mod drills;
mod silkscreen;
mod style;

use crate::Result;
use crate::bounds::{BoundsBuilder, RealBounds};
use crate::compose::{LayerBuckets, Overlays, SceneFrame, compose};
use crate::node::SvgNode;
use crate::options::PcbSvgOptions;
use crate::svg::to_svg_string;
use crate::text::TextMeasurer;
use crate::transform::{ViewportTransform, build_transform};
use circuit_svg_core::element::{PcbLayer, PcbRoutePoint, PcbSmtPad};
use circuit_svg_core::geom::{self, Point};
use circuit_svg_core::{CircuitElement, Theme};

pub(crate) const SILKSCREEN_STROKE: f64 = 0.1;
pub(crate) const SILKSCREEN_FONT_SIZE: f64 = 1.0;
pub(crate) const OUTLINE_STROKE: f64 = 0.05;
pub(crate) const BOARD_STROKE: f64 = 0.1;

/// Stacking order of the board view, bottom first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BoardLayer {
    Board,
    BottomCopper,
    TopCopper,
    Drills,
    Silkscreen,
    ComponentOutlines,
}

impl BoardLayer {
    /// Copper layer for a pad or wire side; inner layers are not drawn.
    pub fn copper(layer: PcbLayer) -> Option<Self> {
        match layer {
            PcbLayer::Top => Some(Self::TopCopper),
            PcbLayer::Bottom => Some(Self::BottomCopper),
            PcbLayer::Inner => None,
        }
    }
}

fn side_class(layer: PcbLayer) -> &'static str {
    match layer {
        PcbLayer::Top => "top",
        PcbLayer::Bottom => "bottom",
        PcbLayer::Inner => "inner",
    }
}

/// Real-world bounds of everything the board view draws.
pub fn compute_pcb_bounds(
    elements: &[CircuitElement],
    measurer: &dyn TextMeasurer,
) -> RealBounds {
    use CircuitElement as E;

    let mut b = BoundsBuilder::new();
    for element in elements {
        match element {
            E::PcbBoard(board) => b.add_points(board::board_outline(board)),
            E::PcbComponent(c) => b.add_points(geom::rotated_rect_corners(
                c.center.to_point(),
                c.width,
                c.height,
                c.rotation,
            )),
            E::PcbSmtpad(PcbSmtPad::Rect {
                x, y, width, height, ..
            }) => b.add_centered_rect(*x, *y, *width, *height),
            E::PcbSmtpad(PcbSmtPad::Circle { x, y, radius, .. }) => b.add_circle(*x, *y, *radius),
            E::PcbPlatedHole(h) => b.add_circle(h.x, h.y, h.outer_diameter / 2.0),
            E::PcbHole(h) => b.add_circle(h.x, h.y, h.hole_diameter / 2.0),
            E::PcbVia(v) => b.add_circle(v.x, v.y, v.outer_diameter / 2.0),
            E::PcbTrace(t) => {
                for p in &t.route {
                    match p {
                        PcbRoutePoint::Wire { x, y, width, .. } => {
                            b.add_circle(*x, *y, width / 2.0)
                        }
                        PcbRoutePoint::Via { x, y, .. } => b.add_xy(*x, *y),
                    }
                }
            }
            E::PcbSilkscreenText(t) => b.add_points(silkscreen::text_box(t, measurer)),
            E::PcbSilkscreenLine(l) => {
                let r = l.stroke_width.unwrap_or(SILKSCREEN_STROKE) / 2.0;
                b.add_circle(l.x1, l.y1, r);
                b.add_circle(l.x2, l.y2, r);
            }
            E::PcbSilkscreenPath(p) => {
                let r = p.stroke_width.unwrap_or(SILKSCREEN_STROKE) / 2.0;
                for q in &p.route {
                    b.add_circle(q.x, q.y, r);
                }
            }
            E::SourceComponent(_)
            | E::SchematicComponent(_)
            | E::SchematicPort(_)
            | E::SchematicTrace(_)
            | E::SchematicNetLabel(_)
            | E::SchematicText(_)
            | E::SchematicBox(_)
            | E::SchematicLine(_)
            | E::SchematicDebugObject(_)
            | E::SchematicVoltageProbe(_)
            | E::CadComponent(_)
            | E::Unknown => {}
        }
    }
    b.finish()
}

/// Per-element conversion for the board view.
///
/// Unlike the schematic view, one element can land on several layers (a trace that changes
/// sides, a plated hole's ring and drill), so output nodes carry their layer.
pub struct PcbDispatcher<'a> {
    transform: &'a ViewportTransform,
}

impl<'a> PcbDispatcher<'a> {
    pub fn new(transform: &'a ViewportTransform) -> Self {
        Self { transform }
    }

    pub fn dispatch(&self, element: &CircuitElement) -> Vec<(BoardLayer, SvgNode)> {
        use CircuitElement as E;
        match element {
            E::PcbBoard(b) => vec![(BoardLayer::Board, board::board(self, b))],
            E::PcbComponent(c) => vec![(
                BoardLayer::ComponentOutlines,
                board::component_outline(self, c),
            )],
            E::PcbSmtpad(p) => copper::smt_pad(self, p).into_iter().collect(),
            E::PcbTrace(t) => copper::trace(self, t),
            E::PcbPlatedHole(h) => vec![(BoardLayer::Drills, drills::plated_hole(self, h))],
            E::PcbHole(h) => vec![(BoardLayer::Drills, drills::hole(self, h))],
            E::PcbVia(v) => vec![(BoardLayer::Drills, drills::via(self, v))],
            E::PcbSilkscreenText(t) => vec![(BoardLayer::Silkscreen, silkscreen::text(self, t))],
            E::PcbSilkscreenLine(l) => vec![(BoardLayer::Silkscreen, silkscreen::line(self, l))],
            E::PcbSilkscreenPath(p) => silkscreen::path(self, p)
                .map(|n| (BoardLayer::Silkscreen, n))
                .into_iter()
                .collect(),
            E::SourceComponent(_)
            | E::SchematicComponent(_)
            | E::SchematicPort(_)
            | E::SchematicTrace(_)
            | E::SchematicNetLabel(_)
            | E::SchematicText(_)
            | E::SchematicBox(_)
            | E::SchematicLine(_)
            | E::SchematicDebugObject(_)
            | E::SchematicVoltageProbe(_)
            | E::CadComponent(_)
            | E::Unknown => Vec::new(),
        }
    }

    fn screen(&self, p: Point) -> Point {
        self.transform.apply(p)
    }

    fn screen_xy(&self, x: f64, y: f64) -> Point {
        self.transform.apply_xy(x, y)
    }

    fn px(&self, length: f64) -> f64 {
        self.transform.scale_length(length)
    }
}

/// Viewport height matching the first board's aspect ratio at `width`, if there is a board.
fn board_matched_height(elements: &[CircuitElement], width: f64) -> Option<f64> {
    let board = elements.iter().find_map(|e| match e {
        CircuitElement::PcbBoard(b) => Some(b),
        _ => None,
    })?;
    let extent = RealBounds::from_points(board::board_outline(board).iter().map(|p| (p.x, p.y)))?;
    if extent.width() <= 0.0 || extent.height() <= 0.0 {
        return None;
    }
    Some(width * extent.height() / extent.width())
}

/// Runs the full board pipeline and returns the root `<svg>` node.
pub fn render_pcb_scene(elements: &[CircuitElement], options: &PcbSvgOptions) -> Result<SvgNode> {
    options.validate()?;
    let theme: &Theme = options.theme.as_ref();

    let width = options.width;
    let mut height = options.height;
    if options.match_board_aspect_ratio {
        if let Some(h) = board_matched_height(elements, width) {
            tracing::debug!(width, height = h, "matched viewport to board aspect ratio");
            height = h;
        }
    }

    let bounds = compute_pcb_bounds(elements, options.text_measurer.as_ref());
    tracing::debug!(elements = elements.len(), ?bounds, "pcb bounds");
    let (transform, _padding) = build_transform(&bounds, width, height)?;

    let dispatcher = PcbDispatcher::new(&transform);
    let mut buckets = LayerBuckets::new();
    for element in elements {
        let nodes = dispatcher.dispatch(element);
        if nodes.is_empty() {
            tracing::trace!(
                element_type = element.element_type(),
                "element not drawn in pcb view"
            );
        }
        for (layer, node) in nodes {
            buckets.push(layer, node);
        }
    }

    let frame = SceneFrame {
        width,
        height,
        background: theme.pcb.background.clone(),
        style: style::pcb_css(theme),
        transform,
    };
    Ok(compose(&frame, buckets, Overlays::default()))
}

/// Renders `elements` as a board SVG document.
pub fn convert_to_pcb_svg(elements: &[CircuitElement], options: &PcbSvgOptions) -> Result<String> {
    let root = render_pcb_scene(elements, options)?;
    Ok(to_svg_string(&root))
}
