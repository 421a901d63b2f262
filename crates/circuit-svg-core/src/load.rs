use crate::element::CircuitElement;
use crate::{Error, Result};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOptions {
    /// When true, the first malformed element fails the whole load.
    pub strict: bool,
}

impl LoadOptions {
    /// Strict loading (malformed elements are returned as errors).
    pub fn strict() -> Self {
        Self { strict: true }
    }

    /// Lenient loading: malformed elements are skipped with a warning.
    pub fn lenient() -> Self {
        Self { strict: false }
    }
}

/// A loaded circuit: the element collection in input order.
///
/// Elements whose `type` is unknown are kept as [`CircuitElement::Unknown`]; renderers skip them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CircuitJson {
    elements: Vec<CircuitElement>,
}

impl CircuitJson {
    pub fn new(elements: Vec<CircuitElement>) -> Self {
        Self { elements }
    }

    pub fn from_json_str(text: &str, options: LoadOptions) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(&value, options)
    }

    pub fn from_value(value: &Value, options: LoadOptions) -> Result<Self> {
        let Some(items) = value.as_array() else {
            return Err(Error::NotAnArray {
                found: json_kind(value),
            });
        };

        let mut elements = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            match load_element(index, item) {
                Ok(element) => elements.push(element),
                Err(err) if options.strict => return Err(err),
                Err(err) => {
                    tracing::warn!(index, error = %err, "skipping malformed circuit element");
                }
            }
        }
        Ok(Self { elements })
    }

    pub fn elements(&self) -> &[CircuitElement] {
        &self.elements
    }

    pub fn into_elements(self) -> Vec<CircuitElement> {
        self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

fn load_element(index: usize, item: &Value) -> Result<CircuitElement> {
    let Some(obj) = item.as_object() else {
        return Err(Error::MalformedElement {
            index,
            element_type: json_kind(item).to_string(),
            message: "element must be a JSON object".to_string(),
        });
    };
    let Some(element_type) = obj.get("type").and_then(Value::as_str) else {
        return Err(Error::MalformedElement {
            index,
            element_type: "<missing>".to_string(),
            message: "element has no string `type` field".to_string(),
        });
    };

    CircuitElement::deserialize(item).map_err(|err| Error::MalformedElement {
        index,
        element_type: element_type.to_string(),
        message: err.to_string(),
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
