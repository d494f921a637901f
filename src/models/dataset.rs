//! Validated, indexed view over the authored node table.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

use super::{data, Category, NodeRecord};
use crate::error::DataError;

/// A directed edge between two resolved nodes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// Node listing the connection.
    pub source: &'static NodeRecord,
    /// Node the connection points to.
    pub target: &'static NodeRecord,
}

/// Read-only graph built once from a static node table.
///
/// Construction checks id uniqueness and the single-trunk rule, and
/// flattens every node's outgoing connections into one edge list.
/// Connections whose target does not resolve are dropped with a warning.
#[derive(Debug)]
pub struct Dataset {
    nodes: &'static [NodeRecord],
    index: HashMap<&'static str, usize>,
    edges: Vec<Edge>,
    dropped_edges: Vec<(&'static str, &'static str)>,
    trunk: usize,
}

impl Dataset {
    /// Validate `nodes` and build the index and edge list.
    pub fn new(nodes: &'static [NodeRecord]) -> Result<Self, DataError> {
        let mut index = HashMap::with_capacity(nodes.len());
        for (idx, node) in nodes.iter().enumerate() {
            if index.insert(node.id, idx).is_some() {
                return Err(DataError::DuplicateId(node.id.to_string()));
            }
        }

        let trunks: Vec<usize> = nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.category == Category::Trunk)
            .map(|(idx, _)| idx)
            .collect();
        let &[trunk] = trunks.as_slice() else {
            return Err(DataError::TrunkCount(trunks.len()));
        };

        let mut edges = Vec::new();
        let mut dropped_edges = Vec::new();
        for source in nodes {
            for &target_id in source.connections {
                match index.get(target_id) {
                    Some(&target_idx) => edges.push(Edge {
                        source,
                        target: &nodes[target_idx],
                    }),
                    None => {
                        tracing::warn!(
                            "Dropping connection {} -> {}: target not found",
                            source.id,
                            target_id
                        );
                        dropped_edges.push((source.id, target_id));
                    }
                }
            }
        }

        tracing::debug!(
            "Dataset ready: {} nodes, {} edges, {} dropped",
            nodes.len(),
            edges.len(),
            dropped_edges.len()
        );

        Ok(Self {
            nodes,
            index,
            edges,
            dropped_edges,
            trunk,
        })
    }

    /// All nodes, in authored order.
    pub fn nodes(&self) -> &'static [NodeRecord] {
        self.nodes
    }

    /// Look up a node by id.
    pub fn get(&self, id: &str) -> Option<&'static NodeRecord> {
        self.index.get(id).map(|&idx| &self.nodes[idx])
    }

    /// Every resolved edge, grouped by source in authored order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Connections skipped because their target id did not resolve.
    pub fn dropped_edges(&self) -> &[(&'static str, &'static str)] {
        &self.dropped_edges
    }

    /// The single core-problem node.
    pub fn trunk(&self) -> &'static NodeRecord {
        &self.nodes[self.trunk]
    }

    /// Nodes of one category, in authored order.
    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &'static NodeRecord> {
        self.nodes.iter().filter(move |n| n.category == category)
    }

    /// Number of distinct categories present.
    pub fn category_count(&self) -> usize {
        self.nodes
            .iter()
            .map(|n| n.category)
            .collect::<HashSet<_>>()
            .len()
    }
}

static AUTHORED: Lazy<Result<Dataset, DataError>> = Lazy::new(|| Dataset::new(data::NODES));

/// The compiled-in dataset, validated on first access.
pub fn authored() -> Result<&'static Dataset, DataError> {
    AUTHORED.as_ref().map_err(Clone::clone)
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn node(
        id: &'static str,
        category: Category,
        connections: &'static [&'static str],
    ) -> NodeRecord {
        NodeRecord {
            id,
            category,
            label: id,
            sub_label: None,
            description: "",
            position: [0.0, 0.0, 0.0],
            connections,
        }
    }

    #[test]
    fn test_authored_dataset_is_valid() {
        let dataset = authored().unwrap();
        assert_eq!(dataset.nodes().len(), 17);
        assert!(dataset.dropped_edges().is_empty());
        assert_eq!(dataset.trunk().id, "T1");
        assert_eq!(dataset.category_count(), 5);
    }

    #[test]
    fn test_authored_edges_resolve() {
        let dataset = authored().unwrap();
        let expected: usize = dataset.nodes().iter().map(|n| n.connections.len()).sum();
        assert_eq!(dataset.edges().len(), expected);
        for edge in dataset.edges() {
            assert!(dataset.get(edge.target.id).is_some());
            assert!(edge.source.connections.contains(&edge.target.id));
        }
    }

    #[test]
    fn test_trunk_fans_out_to_five_branches() {
        let dataset = authored().unwrap();
        let from_trunk: Vec<&str> = dataset
            .edges()
            .iter()
            .filter(|e| e.source.id == "T1")
            .map(|e| e.target.id)
            .collect();
        assert_eq!(from_trunk, vec!["B1", "B2", "B3", "B4", "B5"]);
        assert!(dataset
            .edges()
            .iter()
            .filter(|e| e.source.id == "T1")
            .all(|e| e.source.category == Category::Trunk));
    }

    #[test]
    fn test_authored_is_a_tree_without_back_edges() {
        let dataset = authored().unwrap();
        let rank = |c: Category| Category::ALL.iter().position(|&x| x == c).unwrap();
        for edge in dataset.edges() {
            assert!(
                rank(edge.source.category) < rank(edge.target.category),
                "{} -> {} points backwards",
                edge.source.id,
                edge.target.id
            );
        }
    }

    #[test]
    fn test_dangling_connection_is_dropped() {
        static NODES: [NodeRecord; 2] = [
            node("T1", Category::Trunk, &["B1", "MISSING"]),
            node("B1", Category::Branch, &[]),
        ];
        let dataset = Dataset::new(&NODES).unwrap();
        assert_eq!(dataset.edges().len(), 1);
        assert_eq!(dataset.edges()[0].target.id, "B1");
        assert_eq!(dataset.dropped_edges(), &[("T1", "MISSING")]);
    }

    #[test]
    fn test_duplicate_id_is_rejected() {
        static NODES: [NodeRecord; 3] = [
            node("T1", Category::Trunk, &[]),
            node("B1", Category::Branch, &[]),
            node("B1", Category::Branch, &[]),
        ];
        let err = Dataset::new(&NODES).unwrap_err();
        assert_eq!(err, DataError::DuplicateId("B1".to_string()));
    }

    #[test]
    fn test_trunk_count_must_be_one() {
        static NONE: [NodeRecord; 1] = [node("B1", Category::Branch, &[])];
        static TWO: [NodeRecord; 2] = [
            node("T1", Category::Trunk, &[]),
            node("T2", Category::Trunk, &[]),
        ];
        assert_eq!(Dataset::new(&NONE).unwrap_err(), DataError::TrunkCount(0));
        assert_eq!(
            Dataset::new(&TWO).unwrap_err(),
            DataError::TrunkCount(2)
        );
    }

    #[test]
    fn test_lookup() {
        let dataset = authored().unwrap();
        let r1 = dataset.get("R1").unwrap();
        assert_eq!(r1.position, [-4.0, -3.0, 2.0]);
        assert!(dataset.get("nope").is_none());
        assert_eq!(dataset.by_category(Category::Root).count(), 5);
        assert_eq!(dataset.by_category(Category::LeafOpportunity).count(), 3);
    }
}
