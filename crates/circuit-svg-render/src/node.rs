use crate::svg::fmt;
use indexmap::IndexMap;

/// Generic scene-graph node: tag, ordered attributes, children and optional text.
///
/// Dispatchers produce these in screen coordinates; the compositor nests them under the root and
/// [`crate::svg::to_svg_string`] serializes the tree. Nodes are owned by exactly one parent.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SvgNode {
    pub name: String,
    pub attributes: IndexMap<String, String>,
    pub children: Vec<SvgNode>,
    pub value: String,
}

impl SvgNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Sets a numeric attribute using the shared SVG number format.
    pub fn num(self, key: impl Into<String>, value: f64) -> Self {
        self.attr(key, fmt(value))
    }

    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(key.into(), value.into());
    }

    pub fn child(mut self, child: SvgNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = SvgNode>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn push(&mut self, child: SvgNode) {
        self.children.push(child);
    }

    pub fn text(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}
