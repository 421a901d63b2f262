use circuit_svg_core::Theme;

pub(super) fn pcb_css(theme: &Theme) -> String {
    let c = &theme.pcb;
    format!(
        "svg {{ font-family: {font}; }}\
.boundary {{ fill: {bg}; }}\
.pcb-board {{ fill: {board}; stroke: {outline}; }}\
.pcb-pad-top {{ fill: {top}; }}\
.pcb-pad-bottom {{ fill: {bottom}; }}\
.pcb-trace {{ fill: none; stroke-linecap: round; stroke-linejoin: round; }}\
.pcb-trace-top {{ stroke: {top}; }}\
.pcb-trace-bottom {{ stroke: {bottom}; }}\
.pcb-trace:hover {{ stroke-opacity: 0.7; }}\
.pcb-ring {{ fill: {top}; }}\
.pcb-drill {{ fill: {drill}; }}\
.pcb-silkscreen {{ fill: none; stroke-linecap: round; }}\
.pcb-silkscreen-top {{ stroke: {silk_top}; }}\
.pcb-silkscreen-bottom {{ stroke: {silk_bottom}; }}\
.pcb-silkscreen-text.pcb-silkscreen-top {{ fill: {silk_top}; stroke: none; }}\
.pcb-silkscreen-text.pcb-silkscreen-bottom {{ fill: {silk_bottom}; stroke: none; }}\
.pcb-component-outline {{ fill: none; stroke: {component}; }}",
        font = theme.font_family,
        bg = c.background,
        board = c.board,
        outline = c.board_outline,
        top = c.top_copper,
        bottom = c.bottom_copper,
        drill = c.drill,
        silk_top = c.silkscreen_top,
        silk_bottom = c.silkscreen_bottom,
        component = c.component_outline,
    )
}
