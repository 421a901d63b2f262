//! SVG serialization and the formatting helpers every dispatcher shares.

mod util;
mod writer;

pub use util::{
    escape_xml, escape_xml_into, fmt, fmt_into, fmt_path, fmt_path_into, js_number_to_string,
    points_attr, polyline_path,
};
pub use writer::to_svg_string;

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";
