use circuit_svg_core::Theme;
use std::fmt::Write as _;

/// The `<style>` block for the schematic view. Class rules carry the theme colors; inline
/// `style` attributes on individual nodes override them.
pub(super) fn schematic_css(theme: &Theme) -> String {
    let c = &theme.schematic;
    let mut css = String::new();
    let _ = write!(
        &mut css,
        "svg {{ font-family: {font}; }}\
.boundary {{ fill: {bg}; }}\
.grid-line {{ stroke: {grid}; }}\
.grid-label {{ fill: {grid_label}; }}\
.chip {{ fill: {body}; stroke: {outline}; }}\
.schematic-component:hover .chip {{ fill-opacity: 0.8; }}\
.component-name {{ fill: {reference}; }}\
.component-pin {{ fill: none; stroke: {pin}; }}\
.pin-number {{ fill: {pin_number}; }}\
.trace-line {{ fill: none; stroke: {wire}; stroke-linecap: round; }}\
.trace:hover .trace-line {{ stroke-opacity: 0.6; }}\
.trace-junction {{ fill: {junction}; }}\
.net-label-flag {{ fill: {bg}; stroke: {net_label}; }}\
.net-label-text {{ fill: {net_label_text}; }}\
.schematic-text {{ fill: {text}; }}\
.schematic-box, .schematic-line {{ fill: none; stroke: {outline}; }}\
.debug-object {{ fill: none; stroke: {debug}; stroke-dasharray: 4 2; }}\
.debug-label {{ fill: {debug}; }}\
.voltage-probe-line {{ stroke: {probe}; }}\
.voltage-probe-head {{ fill: {probe}; }}\
.voltage-probe-text {{ fill: {probe}; }}\
.labeled-point-cross {{ fill: none; stroke: {labeled}; }}\
.labeled-point-dot {{ fill: {labeled}; }}\
.labeled-point-text {{ fill: {labeled}; }}",
        font = theme.font_family,
        bg = c.background,
        grid = c.grid,
        grid_label = c.grid_label,
        body = c.component_body,
        outline = c.component_outline,
        reference = c.reference,
        pin = c.pin,
        pin_number = c.pin_number,
        wire = c.wire,
        junction = c.junction,
        net_label = c.net_label,
        net_label_text = c.net_label_text,
        text = c.text,
        debug = c.debug,
        probe = c.probe,
        labeled = c.labeled_point,
    );
    css
}
