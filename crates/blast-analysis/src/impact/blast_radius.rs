//! Blast radius computation via one-hop neighbor lookup.
//!
//! The access graph is bipartite, so the blast radius is a single hop: what
//! an identity's credentials touch directly, or which identities directly
//! hold a resource. There is no transitive closure to compute.

use blast_core::types::NodeId;
use petgraph::graph::NodeIndex;
use petgraph::Direction;

use super::types::Compromise;
use crate::edges::{Edge, EdgeSet, GraphNode};

/// Counterpart nodes directly reachable from `origin` in `edges`.
///
/// - identity origin → resources it reaches (forward)
/// - resource origin → identities reaching it (inverse)
/// - no origin → empty
///
/// The result is duplicate-free and in catalog order. An origin missing from
/// the graph, or whose kind does not match, yields an empty result.
pub fn blast_radius(origin: Option<&Compromise>, edges: &EdgeSet) -> Vec<NodeId> {
    let Some(origin) = origin else {
        return Vec::new();
    };
    let Some(start) = origin_node(origin, edges) else {
        return Vec::new();
    };

    let direction = match origin.origin_kind {
        blast_core::types::NodeKind::Identity => Direction::Outgoing,
        blast_core::types::NodeKind::Resource => Direction::Incoming,
    };

    let mut neighbors: Vec<NodeIndex> = edges.graph.neighbors_directed(start, direction).collect();
    // Graph indices follow catalog order within a side.
    neighbors.sort_unstable();
    neighbors.dedup();

    neighbors
        .into_iter()
        .map(|idx| edges.graph[idx].id.clone())
        .collect()
}

/// Edges on the blast path: those leaving an identity origin or entering a
/// resource origin, in edge-set order.
pub fn blast_edges<'a>(origin: Option<&Compromise>, edges: &'a EdgeSet) -> Vec<&'a Edge> {
    let Some(origin) = origin else {
        return Vec::new();
    };
    if origin_node(origin, edges).is_none() {
        return Vec::new();
    }

    let id = origin.origin_id.as_str();
    edges
        .edges()
        .iter()
        .filter(|e| match origin.origin_kind {
            blast_core::types::NodeKind::Identity => e.from == id,
            blast_core::types::NodeKind::Resource => e.to == id,
        })
        .collect()
}

/// Graph node for `origin`, if present with the expected kind.
fn origin_node(origin: &Compromise, edges: &EdgeSet) -> Option<NodeIndex> {
    let idx = edges.get_node(origin.origin_id.as_str())?;
    let GraphNode { kind, .. } = &edges.graph[idx];
    if *kind != origin.origin_kind {
        tracing::debug!(
            origin = %origin.origin_id,
            expected = %origin.origin_kind,
            actual = %kind,
            "compromise kind does not match catalog node"
        );
        return None;
    }
    Some(idx)
}
