use super::util::{escape_text_into, escape_xml_into};
use crate::node::SvgNode;

/// Serializes a scene tree to SVG markup.
///
/// Attributes are written in insertion order; empty elements are self-closing. No whitespace is
/// inserted between elements, so equal trees always give byte-identical output.
pub fn to_svg_string(root: &SvgNode) -> String {
    let mut out = String::with_capacity(4096);
    write_node(&mut out, root);
    out
}

fn write_node(out: &mut String, node: &SvgNode) {
    out.push('<');
    out.push_str(&node.name);
    for (key, value) in &node.attributes {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        escape_xml_into(out, value);
        out.push('"');
    }

    if node.children.is_empty() && node.value.is_empty() {
        out.push_str("/>");
        return;
    }

    out.push('>');
    escape_text_into(out, &node.value);
    for child in &node.children {
        write_node(out, child);
    }
    out.push_str("</");
    out.push_str(&node.name);
    out.push('>');
}
