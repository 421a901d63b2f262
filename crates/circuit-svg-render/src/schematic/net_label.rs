use super::{FONT_SIZE, LABEL_PADDING, STROKE_WIDTH, SchematicDispatcher};
use crate::node::SvgNode;
use crate::primitives;
use crate::text::{TextMeasurer, TextStyle};
use circuit_svg_core::element::{AnchorSide, SchematicNetLabel, TextAnchor};
use circuit_svg_core::geom::{self, Point};

/// Direction the flag body extends from its anchor, as a counter-clockwise angle.
fn body_angle(side: AnchorSide) -> f64 {
    match side {
        AnchorSide::Left => 0.0,
        AnchorSide::Bottom => 90.0,
        AnchorSide::Right => 180.0,
        AnchorSide::Top => 270.0,
    }
}

struct FlagShape {
    arrow: f64,
    body_width: f64,
    half_height: f64,
}

fn flag_shape(label: &SchematicNetLabel, measurer: &dyn TextMeasurer) -> FlagShape {
    let metrics = measurer.measure(&label.text, &TextStyle::sized(FONT_SIZE));
    let height = FONT_SIZE + 2.0 * LABEL_PADDING;
    FlagShape {
        arrow: height / 2.0,
        body_width: metrics.width + 2.0 * LABEL_PADDING,
        half_height: height / 2.0,
    }
}

fn place(label: &SchematicNetLabel, local: Point) -> Point {
    let anchor = label.center.to_point();
    let moved = geom::point(anchor.x + local.x, anchor.y + local.y);
    geom::rotate_about(moved, anchor, body_angle(label.anchor_side))
}

/// Flag outline in real coordinates: the point sits on the anchor, the body extends away from it.
pub(super) fn outline(label: &SchematicNetLabel, measurer: &dyn TextMeasurer) -> [Point; 5] {
    let s = flag_shape(label, measurer);
    let far = s.arrow + s.body_width;
    [
        geom::point(0.0, 0.0),
        geom::point(s.arrow, s.half_height),
        geom::point(far, s.half_height),
        geom::point(far, -s.half_height),
        geom::point(s.arrow, -s.half_height),
    ]
    .map(|p| place(label, p))
}

pub(super) fn net_label(d: &SchematicDispatcher<'_>, label: &SchematicNetLabel) -> Vec<SvgNode> {
    let s = flag_shape(label, d.measurer);
    let outline: Vec<Point> = outline(label, d.measurer)
        .iter()
        .map(|p| d.screen(*p))
        .collect();
    let text_center = d.screen(place(
        label,
        geom::point(s.arrow + s.body_width / 2.0, 0.0),
    ));
    let text_rotation = match label.anchor_side {
        AnchorSide::Left | AnchorSide::Right => 0.0,
        AnchorSide::Top | AnchorSide::Bottom => 90.0,
    };

    let mut group = SvgNode::new("g").attr("class", "net-label");
    if let Some(id) = &label.schematic_net_label_id {
        group.set_attr("data-schematic-net-label-id", id.as_str());
    }
    group.push(
        primitives::polygon("net-label-flag", &outline).num("stroke-width", d.px(STROKE_WIDTH)),
    );
    group.push(primitives::text(
        "net-label-text",
        &label.text,
        text_center,
        d.px(FONT_SIZE),
        TextAnchor::Center,
        text_rotation,
    ));
    vec![group]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::DeterministicTextMeasurer;
    use circuit_svg_core::element::Position;

    fn label(side: AnchorSide) -> SchematicNetLabel {
        SchematicNetLabel {
            schematic_net_label_id: None,
            center: Position::new(1.0, 2.0),
            anchor_side: side,
            text: "VCC".to_string(),
        }
    }

    #[test]
    fn flag_points_at_anchor_and_extends_away() {
        let m = DeterministicTextMeasurer::default();
        let left = outline(&label(AnchorSide::Left), &m);
        assert_eq!(left[0], geom::point(1.0, 2.0));
        assert!(left[2].x > 1.0);

        let right = outline(&label(AnchorSide::Right), &m);
        assert!(right[2].x < 1.0);

        let bottom = outline(&label(AnchorSide::Bottom), &m);
        assert!(bottom[2].y > 2.0);

        let top = outline(&label(AnchorSide::Top), &m);
        assert!(top[2].y < 2.0);
    }

    #[test]
    fn flag_width_follows_text_length() {
        let m = DeterministicTextMeasurer::default();
        let mut long = label(AnchorSide::Left);
        long.text = "VERY_LONG_NET".to_string();
        let short = outline(&label(AnchorSide::Left), &m);
        let long = outline(&long, &m);
        assert!(long[2].x > short[2].x);
    }
}
