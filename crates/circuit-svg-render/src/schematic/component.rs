use super::{FONT_SIZE, NAME_GAP, PIN_FONT_SIZE, PORT_RADIUS, STROKE_WIDTH, SchematicDispatcher};
use crate::node::SvgNode;
use crate::primitives;
use crate::text::{TextMeasurer, anchored_text_box};
use circuit_svg_core::element::{FacingDirection, SchematicComponent, SchematicPort, TextAnchor};
use circuit_svg_core::geom::{self, Point};

const PIN_LABEL_OFFSET: f64 = 0.08;

fn body_corners(c: &SchematicComponent) -> [Point; 4] {
    geom::rotated_rect_corners(c.center.to_point(), c.size.width, c.size.height, c.rotation)
}

/// The source name sits centered just above the body's highest corner.
fn name_anchor(c: &SchematicComponent, corners: &[Point]) -> Point {
    let top = corners.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
    geom::point(c.center.x, top + NAME_GAP)
}

/// Body corners plus the box of `name`, when the component shows one.
pub(super) fn component_extent(
    c: &SchematicComponent,
    name: Option<&str>,
    measurer: &dyn TextMeasurer,
) -> Vec<Point> {
    let corners = body_corners(c);
    let mut points = corners.to_vec();
    if let Some(name) = name {
        let at = name_anchor(c, &corners);
        points.extend(anchored_text_box(measurer, name, FONT_SIZE, at, TextAnchor::Bottom, 0.0));
    }
    points
}

pub(super) fn component(d: &SchematicDispatcher<'_>, c: &SchematicComponent) -> Vec<SvgNode> {
    let corners = body_corners(c);
    let screen: Vec<Point> = corners.iter().map(|p| d.screen(*p)).collect();

    let mut group = SvgNode::new("g")
        .attr("class", "schematic-component")
        .attr(
            "data-schematic-component-id",
            c.schematic_component_id.as_str(),
        );
    group.push(
        primitives::polygon("component chip", &screen).num("stroke-width", d.px(STROKE_WIDTH)),
    );

    let source = c
        .source_component_id
        .as_deref()
        .and_then(|id| d.index.source_component(id));
    if let Some(source) = source {
        group.push(primitives::text(
            "component-name",
            &source.name,
            d.screen(name_anchor(c, &corners)),
            d.px(FONT_SIZE),
            TextAnchor::Bottom,
            0.0,
        ));
    }
    vec![group]
}

/// Pin number text with its real-world anchor, offset toward the side the port faces.
fn pin_label(p: &SchematicPort) -> Option<(String, Point, TextAnchor)> {
    let pin = p.pin_number?;
    let o = PIN_LABEL_OFFSET;
    let (dx, dy, anchor) = match p.facing_direction {
        Some(FacingDirection::Up) => (o, o, TextAnchor::BottomLeft),
        Some(FacingDirection::Down) => (o, -o, TextAnchor::TopLeft),
        Some(FacingDirection::Left) => (-o, o, TextAnchor::BottomRight),
        Some(FacingDirection::Right) => (o, o, TextAnchor::BottomLeft),
        None => (0.0, o, TextAnchor::Bottom),
    };
    let at = geom::point(p.center.x + dx, p.center.y + dy);
    Some((pin.to_string(), at, anchor))
}

pub(super) fn port_extent(p: &SchematicPort, measurer: &dyn TextMeasurer) -> Vec<Point> {
    let r = PORT_RADIUS;
    let mut points = vec![
        geom::point(p.center.x - r, p.center.y - r),
        geom::point(p.center.x + r, p.center.y + r),
    ];
    if let Some((text, at, anchor)) = pin_label(p) {
        points.extend(anchored_text_box(measurer, &text, PIN_FONT_SIZE, at, anchor, 0.0));
    }
    points
}

pub(super) fn port(d: &SchematicDispatcher<'_>, p: &SchematicPort) -> Vec<SvgNode> {
    let at = d.screen(p.center.to_point());
    let mut group = SvgNode::new("g")
        .attr("class", "schematic-port")
        .attr("data-schematic-port-id", p.schematic_port_id.as_str());
    group.push(
        primitives::circle("component-pin", at, d.px(PORT_RADIUS))
            .num("stroke-width", d.px(STROKE_WIDTH)),
    );

    if let Some((text, label_at, anchor)) = pin_label(p) {
        group.push(primitives::text(
            "pin-number",
            &text,
            d.screen(label_at),
            d.px(PIN_FONT_SIZE),
            anchor,
            0.0,
        ));
    }
    vec![group]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::DeterministicTextMeasurer;
    use circuit_svg_core::element::{Extent, Position};

    fn max_x(points: &[Point]) -> f64 {
        points.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max)
    }

    #[test]
    fn wide_name_widens_the_component_extent() {
        let c = SchematicComponent {
            schematic_component_id: "c1".to_string(),
            source_component_id: Some("s1".to_string()),
            center: Position::new(0.0, 0.0),
            size: Extent {
                width: 1.0,
                height: 1.0,
            },
            rotation: 0.0,
        };
        let measurer = DeterministicTextMeasurer::default();
        assert_eq!(max_x(&component_extent(&c, None, &measurer)), 0.5);

        // Ten columns centered on x = 0.
        let named = component_extent(&c, Some("RESISTOR_1"), &measurer);
        assert!((max_x(&named) - 5.0 * FONT_SIZE * 0.6).abs() < 1e-9);
        let top = named.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
        assert!((top - (0.5 + NAME_GAP + FONT_SIZE * 1.2)).abs() < 1e-9);
    }

    #[test]
    fn left_facing_pin_number_extends_left() {
        let p = SchematicPort {
            schematic_port_id: "p1".to_string(),
            schematic_component_id: None,
            center: Position::new(0.0, 0.0),
            facing_direction: Some(FacingDirection::Left),
            pin_number: Some(12),
        };
        let measurer = DeterministicTextMeasurer::default();
        let left = port_extent(&p, &measurer)
            .iter()
            .map(|q| q.x)
            .fold(f64::INFINITY, f64::min);
        assert!((left - (-PIN_LABEL_OFFSET - 2.0 * PIN_FONT_SIZE * 0.6)).abs() < 1e-9);
    }
}
