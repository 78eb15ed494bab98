//! Relationship graph projection for force-layout collaborators.

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::domain::foundation::{Influence, Level, StakeholderId, StakeholderRole};
use crate::domain::matrix::color_for_role;
use crate::domain::stakeholder::{Relationship, Stakeholder};

/// Layout constants the network view was tuned with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForceLayoutHints {
    pub link_distance: f64,
    pub charge_strength: f64,
    pub collision_radius: f64,
}

impl Default for ForceLayoutHints {
    fn default() -> Self {
        Self {
            link_distance: 100.0,
            charge_strength: -200.0,
            collision_radius: 30.0,
        }
    }
}

/// A stakeholder as seen by the network view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphNode {
    pub id: StakeholderId,
    pub name: String,
    pub role: StakeholderRole,
    pub power: Level,
    pub interest: Level,
    pub influence: Influence,
    pub color: &'static str,
}

/// A relationship resolved to node indices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphEdge {
    /// Index into [`NetworkGraph::nodes`].
    pub source: usize,
    /// Index into [`NetworkGraph::nodes`].
    pub target: usize,
    pub source_id: StakeholderId,
    pub target_id: StakeholderId,
}

/// Nodes and edges ready for a layout engine.
///
/// # Invariants
///
/// - every edge index is a valid position in `nodes`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NetworkGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

/// Projects stakeholders and relationships into a graph.
///
/// Relationships with an endpoint missing from `stakeholders` are dropped,
/// which guards against stale snapshots.
pub fn build_graph(stakeholders: &[Stakeholder], relationships: &[Relationship]) -> NetworkGraph {
    let nodes: Vec<GraphNode> = stakeholders
        .iter()
        .map(|s| GraphNode {
            id: s.id().clone(),
            name: s.name().to_string(),
            role: s.role(),
            power: s.power(),
            interest: s.interest(),
            influence: s.influence(),
            color: color_for_role(s.role()),
        })
        .collect();

    let index: HashMap<&StakeholderId, usize> =
        nodes.iter().enumerate().map(|(i, n)| (&n.id, i)).collect();

    let edges: Vec<GraphEdge> = relationships
        .iter()
        .filter_map(|r| {
            let source = *index.get(&r.source)?;
            let target = *index.get(&r.target)?;
            Some(GraphEdge {
                source,
                target,
                source_id: r.source.clone(),
                target_id: r.target.clone(),
            })
        })
        .collect();

    if edges.len() < relationships.len() {
        debug!(
            dropped = relationships.len() - edges.len(),
            "Dropped dangling relationships while building graph"
        );
    }

    NetworkGraph { nodes, edges }
}

impl NetworkGraph {
    /// Returns the index of the node with the given id.
    pub fn node_index(&self, id: &StakeholderId) -> Option<usize> {
        self.nodes.iter().position(|n| n.id == *id)
    }

    /// Indices of nodes adjacent to `index`, in edge order.
    pub fn neighbors(&self, index: usize) -> Vec<usize> {
        self.edges
            .iter()
            .filter_map(|e| {
                if e.source == index {
                    Some(e.target)
                } else if e.target == index {
                    Some(e.source)
                } else {
                    None
                }
            })
            .collect()
    }

    /// Number of edge endpoints at `index`.
    pub fn degree(&self, index: usize) -> usize {
        self.neighbors(index).len()
    }

    /// Adjacency list indexed like `nodes`.
    pub fn adjacency(&self) -> Vec<Vec<usize>> {
        let mut adjacency = vec![Vec::new(); self.nodes.len()];
        for edge in &self.edges {
            adjacency[edge.source].push(edge.target);
            if edge.source != edge.target {
                adjacency[edge.target].push(edge.source);
            }
        }
        adjacency
    }

    /// Returns true if no node has any edge.
    pub fn is_disconnected(&self) -> bool {
        self.edges.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::stakeholder::{StakeholderAttributes, StakeholderStore};

    fn attrs(name: &str, role: StakeholderRole) -> StakeholderAttributes {
        StakeholderAttributes::new(name, role, Level::High, Level::Low, Influence::Direct)
    }

    #[test]
    fn nodes_project_stakeholders_one_to_one() {
        let mut store = StakeholderStore::new();
        let a = store.add(attrs("A", StakeholderRole::Regulator), &[]).unwrap();

        let graph = build_graph(store.all(), store.all_relationships());

        assert_eq!(graph.nodes.len(), 1);
        assert_eq!(graph.nodes[0].id, *a.id());
        assert_eq!(graph.nodes[0].role, StakeholderRole::Regulator);
        assert_eq!(graph.nodes[0].color, "#5733FF");
        assert!(graph.is_disconnected());
    }

    #[test]
    fn edges_resolve_to_node_indices() {
        let mut store = StakeholderStore::new();
        let a = store.add(attrs("A", StakeholderRole::Internal), &[]).unwrap();
        let b = store.add(attrs("B", StakeholderRole::External), &[a.id().clone()]).unwrap();

        let graph = build_graph(store.all(), store.all_relationships());

        assert_eq!(graph.edges.len(), 1);
        assert_eq!(graph.edges[0].source, graph.node_index(b.id()).unwrap());
        assert_eq!(graph.edges[0].target, graph.node_index(a.id()).unwrap());
        assert_eq!(graph.neighbors(0), vec![1]);
        assert_eq!(graph.degree(1), 1);
    }

    #[test]
    fn dangling_relationships_are_dropped() {
        let mut store = StakeholderStore::new();
        let a = store.add(attrs("A", StakeholderRole::Internal), &[]).unwrap();
        let stale = vec![
            Relationship::new(a.id().clone(), "deleted".parse().unwrap()),
            Relationship::new("deleted".parse().unwrap(), a.id().clone()),
        ];

        let graph = build_graph(store.all(), &stale);

        assert!(graph.edges.is_empty());
    }

    #[test]
    fn adjacency_is_symmetric() {
        let mut store = StakeholderStore::new();
        let a = store.add(attrs("A", StakeholderRole::Internal), &[]).unwrap();
        let b = store.add(attrs("B", StakeholderRole::Customer), &[a.id().clone()]).unwrap();
        store
            .add(attrs("C", StakeholderRole::Other), &[a.id().clone(), b.id().clone()])
            .unwrap();

        let graph = build_graph(store.all(), store.all_relationships());
        let adjacency = graph.adjacency();

        assert_eq!(adjacency[0], vec![1, 2]);
        assert_eq!(adjacency[1], vec![0, 2]);
        assert_eq!(adjacency[2], vec![0, 1]);
    }

    #[test]
    fn self_loop_appears_once_in_adjacency() {
        let mut store = StakeholderStore::new();
        let a = store.add(attrs("A", StakeholderRole::Internal), &[]).unwrap();
        let loops = vec![Relationship::new(a.id().clone(), a.id().clone())];

        let graph = build_graph(store.all(), &loops);

        assert_eq!(graph.adjacency()[0], vec![0]);
    }

    #[test]
    fn default_layout_hints() {
        let hints = ForceLayoutHints::default();
        assert_eq!(hints.link_distance, 100.0);
        assert_eq!(hints.charge_strength, -200.0);
        assert_eq!(hints.collision_radius, 30.0);
    }
}
