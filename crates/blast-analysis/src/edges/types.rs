//! Edge and edge-set types.

use blast_core::types::collections::FxHashMap;
use blast_core::types::{AccessMode, IdentityId, NodeId, NodeKind, ResourceId};
use petgraph::graph::{DiGraph, NodeIndex};
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;

/// Directed access grant: `from` can reach `to`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub from: IdentityId,
    pub to: ResourceId,
}

impl Edge {
    pub fn new(from: impl Into<IdentityId>, to: impl Into<ResourceId>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Node weight in the access graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphNode {
    pub id: NodeId,
    pub kind: NodeKind,
}

/// One access model's edges plus the bipartite graph built over them.
///
/// Every catalog node is present in the graph, added identities first and
/// then resources, each in catalog order. Comparing `NodeIndex` values
/// therefore compares catalog positions within a side.
#[derive(Debug, Clone)]
pub struct EdgeSet {
    mode: AccessMode,
    edges: Vec<Edge>,
    /// identity → resource, one graph edge per `Edge`.
    pub graph: DiGraph<GraphNode, ()>,
    /// Map from node id → NodeIndex for O(1) lookup.
    pub node_index: FxHashMap<NodeId, NodeIndex>,
}

impl EdgeSet {
    /// Build an edge set over `catalog`. Callers validate `edges` first:
    /// every endpoint must be a catalog id and no pair may repeat.
    pub(crate) fn new(mode: AccessMode, catalog: &Catalog, edges: Vec<Edge>) -> Self {
        let node_count = catalog.identity_count() + catalog.resource_count();
        let mut graph = DiGraph::with_capacity(node_count, edges.len());
        let mut node_index = FxHashMap::default();

        for identity in catalog.identities() {
            let node = GraphNode {
                id: NodeId::from(&identity.id),
                kind: NodeKind::Identity,
            };
            node_index.insert(node.id.clone(), graph.add_node(node));
        }
        for resource in catalog.resources() {
            let node = GraphNode {
                id: NodeId::from(&resource.id),
                kind: NodeKind::Resource,
            };
            node_index.insert(node.id.clone(), graph.add_node(node));
        }

        for edge in &edges {
            let endpoints = (
                node_index.get(edge.from.as_str()),
                node_index.get(edge.to.as_str()),
            );
            if let (Some(&from), Some(&to)) = endpoints {
                graph.add_edge(from, to, ());
            }
        }

        Self {
            mode,
            edges,
            graph,
            node_index,
        }
    }

    /// The access model this set represents.
    pub fn mode(&self) -> AccessMode {
        self.mode
    }

    /// Edges in construction order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Look up a node by id.
    pub fn get_node(&self, id: &str) -> Option<NodeIndex> {
        self.node_index.get(id).copied()
    }

    /// Whether `from` can directly reach `to` in this set.
    pub fn contains(&self, from: &str, to: &str) -> bool {
        match (self.get_node(from), self.get_node(to)) {
            (Some(a), Some(b)) => self.graph.contains_edge(a, b),
            _ => false,
        }
    }

    /// Whether every edge of `self` is also in `other`.
    pub fn is_subset_of(&self, other: &EdgeSet) -> bool {
        self.edges
            .iter()
            .all(|e| other.contains(e.from.as_str(), e.to.as_str()))
    }
}
