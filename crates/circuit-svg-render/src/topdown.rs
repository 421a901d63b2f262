//! Topdown 3-D view.
//!
//! Board and component bodies are extruded boxes drawn with an oblique projection: a point at
//! height `z` moves by `z * skew` in the board plane before the viewport transform. Faces are
//! painted far to near, so no depth buffer is needed.

mod solid;

use crate::Result;
use crate::bounds::{BoundsBuilder, RealBounds};
use crate::compose::{LayerBuckets, Overlays, SceneFrame, compose};
use crate::node::SvgNode;
use crate::options::TopdownSvgOptions;
use crate::primitives;
use crate::svg::to_svg_string;
use crate::transform::{ViewportTransform, build_transform};
use circuit_svg_core::element::{PcbLayer, PcbSmtPad};
use circuit_svg_core::geom::{self, Point};
use circuit_svg_core::theme::shade_hex;
use circuit_svg_core::{CircuitElement, ElementIndex, Theme};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use solid::{Face, Solid, SolidKind, paint_order};

/// Body height used when only a board footprint is known.
pub const DEFAULT_BODY_HEIGHT: f64 = 1.0;
const STROKE_PX: f64 = 0.5;

/// Oblique camera. `(0, 0)` looks straight down and shows only top faces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Camera {
    pub skew_x: f64,
    pub skew_y: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self::topdown()
    }
}

impl Camera {
    pub fn topdown() -> Self {
        Self {
            skew_x: 0.25,
            skew_y: 0.25,
        }
    }

    pub fn project(&self, x: f64, y: f64, z: f64) -> Point {
        geom::point(x + z * self.skew_x, y + z * self.skew_y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TopdownLayer {
    Board,
    Surface,
    Bodies,
}

/// Flat features on the board's top face (z = 0).
#[derive(Debug, Clone)]
enum SurfaceFeature {
    Pad { center: Point, width: f64, height: f64 },
    RoundPad { center: Point, radius: f64 },
    Hole { center: Point, radius: f64 },
}

#[derive(Debug, Clone, Default)]
struct TopdownScene {
    boards: Vec<Solid>,
    surface: Vec<SurfaceFeature>,
    bodies: Vec<Solid>,
}

fn rect_footprint(center: Point, width: f64, height: f64, degrees: f64) -> Vec<Point> {
    geom::rotated_rect_corners(center, width, height, degrees).to_vec()
}

fn build_scene(elements: &[CircuitElement]) -> TopdownScene {
    use CircuitElement as E;

    let index = ElementIndex::new(elements);
    let modeled: FxHashSet<&str> = elements
        .iter()
        .filter_map(|e| match e {
            E::CadComponent(c) => c.pcb_component_id.as_deref(),
            _ => None,
        })
        .collect();

    let mut scene = TopdownScene::default();
    for (order, element) in elements.iter().enumerate() {
        match element {
            E::PcbBoard(b) => {
                let footprint = if b.outline.len() >= 3 {
                    b.outline.iter().map(|p| p.to_point()).collect()
                } else {
                    rect_footprint(b.center.to_point(), b.width, b.height, 0.0)
                };
                scene.boards.push(Solid::new(
                    SolidKind::Board,
                    b.pcb_board_id.clone(),
                    footprint,
                    -b.thickness.max(0.0),
                    0.0,
                    order,
                ));
            }
            E::PcbSmtpad(pad) if pad.layer() == PcbLayer::Top => match pad {
                PcbSmtPad::Rect {
                    x, y, width, height, ..
                } => scene.surface.push(SurfaceFeature::Pad {
                    center: geom::point(*x, *y),
                    width: *width,
                    height: *height,
                }),
                PcbSmtPad::Circle { x, y, radius, .. } => {
                    scene.surface.push(SurfaceFeature::RoundPad {
                        center: geom::point(*x, *y),
                        radius: *radius,
                    })
                }
            },
            E::PcbPlatedHole(h) => {
                let center = geom::point(h.x, h.y);
                scene.surface.push(SurfaceFeature::RoundPad {
                    center,
                    radius: h.outer_diameter / 2.0,
                });
                scene.surface.push(SurfaceFeature::Hole {
                    center,
                    radius: h.hole_diameter / 2.0,
                });
            }
            E::PcbHole(h) => scene.surface.push(SurfaceFeature::Hole {
                center: geom::point(h.x, h.y),
                radius: h.hole_diameter / 2.0,
            }),
            E::PcbVia(v) => scene.surface.push(SurfaceFeature::Hole {
                center: geom::point(v.x, v.y),
                radius: v.hole_diameter / 2.0,
            }),
            E::CadComponent(c) => {
                let footprint_source = c
                    .pcb_component_id
                    .as_deref()
                    .and_then(|id| index.pcb_component(id));
                let rotation = c.rotation.map(|r| r.z);
                let body = match (c.size, footprint_source) {
                    (Some(size), _) => Some((
                        rect_footprint(
                            geom::point(c.position.x, c.position.y),
                            size.x,
                            size.y,
                            rotation.unwrap_or(0.0),
                        ),
                        size.z,
                    )),
                    (None, Some(pc)) => Some((
                        rect_footprint(
                            pc.center.to_point(),
                            pc.width,
                            pc.height,
                            rotation.unwrap_or(pc.rotation),
                        ),
                        DEFAULT_BODY_HEIGHT,
                    )),
                    (None, None) => None,
                };
                match body {
                    Some((footprint, height)) => scene.bodies.push(Solid::new(
                        SolidKind::Body,
                        c.cad_component_id.clone(),
                        footprint,
                        0.0,
                        height.max(0.0),
                        order,
                    )),
                    None => tracing::trace!(
                        cad_component_id = ?c.cad_component_id,
                        "cad component has neither size nor footprint"
                    ),
                }
            }
            E::PcbComponent(pc) if !modeled.contains(pc.pcb_component_id.as_str()) => {
                if pc.layer == PcbLayer::Top {
                    scene.bodies.push(Solid::new(
                        SolidKind::Body,
                        Some(pc.pcb_component_id.clone()),
                        rect_footprint(pc.center.to_point(), pc.width, pc.height, pc.rotation),
                        0.0,
                        DEFAULT_BODY_HEIGHT,
                        order,
                    ));
                }
            }
            _ => tracing::trace!(
                element_type = element.element_type(),
                "element not drawn in topdown view"
            ),
        }
    }
    scene
}

fn add_scene_bounds(b: &mut BoundsBuilder, scene: &TopdownScene, camera: &Camera) {
    for solid in scene.boards.iter().chain(&scene.bodies) {
        b.add_points(solid.projected_vertices(camera));
    }
    for feature in &scene.surface {
        match feature {
            SurfaceFeature::Pad {
                center,
                width,
                height,
            } => b.add_centered_rect(center.x, center.y, *width, *height),
            SurfaceFeature::RoundPad { center, radius }
            | SurfaceFeature::Hole { center, radius } => b.add_circle(center.x, center.y, *radius),
        }
    }
}

/// Bounds over every projected vertex the topdown view draws.
pub fn compute_topdown_bounds(elements: &[CircuitElement], camera: &Camera) -> RealBounds {
    let mut b = BoundsBuilder::new();
    add_scene_bounds(&mut b, &build_scene(elements), camera);
    b.finish()
}

fn solid_nodes(
    solid: &Solid,
    camera: &Camera,
    transform: &ViewportTransform,
    color: &str,
    side_shade: f64,
) -> SvgNode {
    let (class, top_class, side_class) = match solid.kind {
        SolidKind::Board => ("topdown-board", "topdown-board-top", "topdown-board-side"),
        SolidKind::Body => ("topdown-body", "topdown-body-top", "topdown-body-side"),
    };
    let side_color = shade_hex(color, side_shade);
    let mut group = SvgNode::new("g").attr("class", class);
    if let Some(id) = &solid.id {
        group.set_attr("data-id", id.as_str());
    }
    for Face { points, is_top } in solid.faces(camera) {
        let screen: Vec<Point> = points.iter().map(|p| transform.apply(*p)).collect();
        let (face_class, fill) = if is_top {
            (top_class, color)
        } else {
            (side_class, side_color.as_str())
        };
        group.push(
            primitives::polygon(face_class, &screen)
                .attr("fill", fill)
                .num("stroke-width", STROKE_PX),
        );
    }
    group
}

fn surface_node(feature: &SurfaceFeature, transform: &ViewportTransform, theme: &Theme) -> SvgNode {
    let colors = &theme.topdown;
    match feature {
        SurfaceFeature::Pad {
            center,
            width,
            height,
        } => primitives::rect_between(
            "topdown-pad",
            transform.apply_xy(center.x - width / 2.0, center.y - height / 2.0),
            transform.apply_xy(center.x + width / 2.0, center.y + height / 2.0),
        )
        .attr("fill", colors.pad.as_str()),
        SurfaceFeature::RoundPad { center, radius } => primitives::circle(
            "topdown-pad",
            transform.apply(*center),
            transform.scale_length(*radius),
        )
        .attr("fill", colors.pad.as_str()),
        SurfaceFeature::Hole { center, radius } => primitives::circle(
            "topdown-hole",
            transform.apply(*center),
            transform.scale_length(*radius),
        )
        .attr("fill", colors.hole.as_str()),
    }
}

fn topdown_css(theme: &Theme) -> String {
    format!(
        "svg {{ font-family: {}; }}\
.boundary {{ fill: {}; }}\
.topdown-board-top, .topdown-board-side, .topdown-body-top, .topdown-body-side \
{{ stroke: rgba(0, 0, 0, 0.35); stroke-linejoin: round; }}\
.topdown-body:hover .topdown-body-top {{ fill-opacity: 0.85; }}",
        theme.font_family, theme.topdown.background,
    )
}

/// Runs the full topdown pipeline and returns the root `<svg>` node.
pub fn render_topdown_scene(
    elements: &[CircuitElement],
    options: &TopdownSvgOptions,
) -> Result<SvgNode> {
    options.validate()?;
    let theme = options.theme.as_ref();
    let camera = options.camera;

    let mut scene = build_scene(elements);
    let mut builder = BoundsBuilder::new();
    add_scene_bounds(&mut builder, &scene, &camera);
    let bounds = builder.finish();
    tracing::debug!(
        boards = scene.boards.len(),
        bodies = scene.bodies.len(),
        ?bounds,
        "topdown bounds"
    );
    let (transform, _padding) = build_transform(&bounds, options.width, options.height)?;

    scene.bodies.sort_by(|a, b| paint_order(a, b, &camera));

    let colors = &theme.topdown;
    let mut buckets = LayerBuckets::new();
    for board in &scene.boards {
        buckets.push(
            TopdownLayer::Board,
            solid_nodes(board, &camera, &transform, &colors.board, colors.side_shade),
        );
    }
    buckets.extend(
        TopdownLayer::Surface,
        scene.surface.iter().map(|f| surface_node(f, &transform, theme)),
    );
    for body in &scene.bodies {
        buckets.push(
            TopdownLayer::Bodies,
            solid_nodes(
                body,
                &camera,
                &transform,
                &colors.component_body,
                colors.side_shade,
            ),
        );
    }

    let frame = SceneFrame {
        width: options.width,
        height: options.height,
        background: colors.background.clone(),
        style: topdown_css(theme),
        transform,
    };
    Ok(compose(&frame, buckets, Overlays::default()))
}

/// Renders `elements` as a topdown 3-D SVG document.
pub fn convert_to_3d_svg(
    elements: &[CircuitElement],
    options: &TopdownSvgOptions,
) -> Result<String> {
    let root = render_topdown_scene(elements, options)?;
    Ok(to_svg_string(&root))
}
