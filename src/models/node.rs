//! Node record model.

use serde::Serialize;

use super::Category;

/// One authored node of the knowledge graph.
///
/// Records are `'static` and never mutated; everything that renders a node
/// holds a reference to the record rather than a copy of its fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NodeRecord {
    /// Unique identifier (e.g. `R1`, `L_OPP_2`).
    pub id: &'static str,
    /// Classification controlling shape and color.
    pub category: Category,
    /// Primary display text.
    pub label: &'static str,
    /// Secondary display text shown under the label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_label: Option<&'static str>,
    /// Long-form explanation shown in the detail panel.
    pub description: &'static str,
    /// Fixed world position `[x, y, z]`.
    pub position: [f32; 3],
    /// Ids of the nodes this node connects to (outgoing edges only).
    pub connections: &'static [&'static str],
}

impl NodeRecord {
    /// Whether this node has any outgoing links.
    pub fn has_links(&self) -> bool {
        !self.connections.is_empty()
    }
}
