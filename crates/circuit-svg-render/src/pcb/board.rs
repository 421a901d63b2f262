use super::{BOARD_STROKE, OUTLINE_STROKE, PcbDispatcher};
use crate::node::SvgNode;
use crate::primitives;
use circuit_svg_core::element::{PcbBoard, PcbComponent};
use circuit_svg_core::geom::{self, Point};

/// The explicit outline when present, otherwise the `width` x `height` rectangle.
pub(super) fn board_outline(board: &PcbBoard) -> Vec<Point> {
    if board.outline.len() >= 3 {
        return board.outline.iter().map(|p| p.to_point()).collect();
    }
    geom::rotated_rect_corners(board.center.to_point(), board.width, board.height, 0.0).to_vec()
}

pub(super) fn board(d: &PcbDispatcher<'_>, board: &PcbBoard) -> SvgNode {
    let outline: Vec<Point> = board_outline(board).into_iter().map(|p| d.screen(p)).collect();
    let mut node =
        primitives::polygon("pcb-board", &outline).num("stroke-width", d.px(BOARD_STROKE));
    if let Some(id) = &board.pcb_board_id {
        node.set_attr("data-pcb-board-id", id.as_str());
    }
    node
}

pub(super) fn component_outline(d: &PcbDispatcher<'_>, c: &PcbComponent) -> SvgNode {
    let corners: Vec<Point> =
        geom::rotated_rect_corners(c.center.to_point(), c.width, c.height, c.rotation)
            .iter()
            .map(|p| d.screen(*p))
            .collect();
    primitives::polygon("pcb-component-outline", &corners)
        .num("stroke-width", d.px(OUTLINE_STROKE))
        .attr("data-pcb-component-id", c.pcb_component_id.as_str())
}
