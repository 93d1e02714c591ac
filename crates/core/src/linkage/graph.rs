//! Adjacency view over the persisted linkage relation.

use std::collections::{HashMap, HashSet};

use crate::types::DbId;

/// A persisted linkage row: `target_id` has the template `source_id`
/// linked to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LinkageEdge {
    pub target_id: DbId,
    pub source_id: DbId,
}

impl LinkageEdge {
    pub fn new(target_id: DbId, source_id: DbId) -> Self {
        Self {
            target_id,
            source_id,
        }
    }
}

/// The whole linkage relation materialized as an adjacency mapping.
///
/// Roots are entities that appear as a target in some edge but never as
/// a source; traversal starts from them. `nodes` counts every entity
/// appearing on either side of any edge, which the cycle detector uses
/// to catch cycles that no root can reach.
#[derive(Debug, Default)]
pub struct LinkageGraph {
    adjacency: HashMap<DbId, Vec<DbId>>,
    roots: Vec<DbId>,
    nodes: HashSet<DbId>,
}

impl LinkageGraph {
    /// Build the graph from edge rows. Pure transform, no deduplication:
    /// the persisted relation is unique per `(target, source)` pair.
    pub fn from_edges(edges: &[LinkageEdge]) -> Self {
        let mut adjacency: HashMap<DbId, Vec<DbId>> = HashMap::new();
        let mut has_parent: HashSet<DbId> = HashSet::new();
        let mut nodes: HashSet<DbId> = HashSet::new();

        for edge in edges {
            adjacency
                .entry(edge.target_id)
                .or_default()
                .push(edge.source_id);
            has_parent.insert(edge.source_id);
            nodes.insert(edge.target_id);
            nodes.insert(edge.source_id);
        }

        let mut roots: Vec<DbId> = adjacency
            .keys()
            .filter(|target| !has_parent.contains(target))
            .copied()
            .collect();
        // Deterministic traversal order regardless of row order.
        roots.sort_unstable();

        Self {
            adjacency,
            roots,
            nodes,
        }
    }

    /// Sources linked to `target`, in edge order. Empty for leaves.
    pub fn sources_of(&self, target: DbId) -> &[DbId] {
        self.adjacency
            .get(&target)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Entities that are linkage targets but never linkage sources.
    pub fn roots(&self) -> &[DbId] {
        &self.roots
    }

    /// Count of distinct entities appearing in any edge.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edges(pairs: &[(DbId, DbId)]) -> Vec<LinkageEdge> {
        pairs
            .iter()
            .map(|&(target, source)| LinkageEdge::new(target, source))
            .collect()
    }

    #[test]
    fn empty_relation_builds_empty_graph() {
        let graph = LinkageGraph::from_edges(&[]);
        assert!(graph.is_empty());
        assert!(graph.roots().is_empty());
        assert_eq!(graph.node_count(), 0);
    }

    #[test]
    fn single_edge_has_one_root() {
        let graph = LinkageGraph::from_edges(&edges(&[(1, 2)]));
        assert_eq!(graph.roots(), &[1]);
        assert_eq!(graph.sources_of(1), &[2]);
        assert_eq!(graph.node_count(), 2);
    }

    #[test]
    fn chain_has_single_root() {
        // 1 -> 2 -> 3: only 1 never appears as a source.
        let graph = LinkageGraph::from_edges(&edges(&[(1, 2), (2, 3)]));
        assert_eq!(graph.roots(), &[1]);
        assert_eq!(graph.sources_of(2), &[3]);
        assert!(graph.sources_of(3).is_empty());
    }

    #[test]
    fn pure_cycle_has_no_roots() {
        let graph = LinkageGraph::from_edges(&edges(&[(1, 2), (2, 1)]));
        assert!(graph.roots().is_empty());
        assert_eq!(graph.node_count(), 2);
    }

    #[test]
    fn roots_are_sorted() {
        let graph = LinkageGraph::from_edges(&edges(&[(9, 3), (4, 3), (7, 5)]));
        assert_eq!(graph.roots(), &[4, 7, 9]);
    }

    #[test]
    fn source_order_follows_edge_order() {
        let graph = LinkageGraph::from_edges(&edges(&[(1, 5), (1, 3), (1, 4)]));
        assert_eq!(graph.sources_of(1), &[5, 3, 4]);
    }
}
