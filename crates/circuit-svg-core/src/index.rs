use crate::element::{
    CircuitElement, PcbComponent, SchematicComponent, SchematicPort, SourceComponent,
};
use rustc_hash::FxHashMap;

/// Read-only id lookups over an element collection.
///
/// Cross-element references are resolved by value through this index; elements never point at
/// each other. When an id appears twice, the first element wins.
#[derive(Debug, Default)]
pub struct ElementIndex<'a> {
    source_components: FxHashMap<&'a str, &'a SourceComponent>,
    schematic_components: FxHashMap<&'a str, &'a SchematicComponent>,
    schematic_ports: FxHashMap<&'a str, &'a SchematicPort>,
    pcb_components: FxHashMap<&'a str, &'a PcbComponent>,
}

impl<'a> ElementIndex<'a> {
    pub fn new(elements: &'a [CircuitElement]) -> Self {
        let mut index = Self::default();
        for element in elements {
            match element {
                CircuitElement::SourceComponent(c) => {
                    index
                        .source_components
                        .entry(c.source_component_id.as_str())
                        .or_insert(c);
                }
                CircuitElement::SchematicComponent(c) => {
                    index
                        .schematic_components
                        .entry(c.schematic_component_id.as_str())
                        .or_insert(c);
                }
                CircuitElement::SchematicPort(p) => {
                    index
                        .schematic_ports
                        .entry(p.schematic_port_id.as_str())
                        .or_insert(p);
                }
                CircuitElement::PcbComponent(c) => {
                    index
                        .pcb_components
                        .entry(c.pcb_component_id.as_str())
                        .or_insert(c);
                }
                _ => {}
            }
        }
        index
    }

    pub fn source_component(&self, id: &str) -> Option<&'a SourceComponent> {
        self.source_components.get(id).copied()
    }

    pub fn schematic_component(&self, id: &str) -> Option<&'a SchematicComponent> {
        self.schematic_components.get(id).copied()
    }

    pub fn schematic_port(&self, id: &str) -> Option<&'a SchematicPort> {
        self.schematic_ports.get(id).copied()
    }

    pub fn pcb_component(&self, id: &str) -> Option<&'a PcbComponent> {
        self.pcb_components.get(id).copied()
    }
}
