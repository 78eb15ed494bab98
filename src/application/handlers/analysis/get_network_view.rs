//! GetNetworkViewHandler - Query handler for the relationship network.

use serde::Serialize;

use crate::domain::network::{build_graph, ForceLayoutHints, NetworkGraph};
use crate::domain::stakeholder::StakeholderStore;

/// Graph plus the layout constants a force-directed renderer should use.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkView {
    pub graph: NetworkGraph,
    pub layout: ForceLayoutHints,
}

/// Handler for the network view.
#[derive(Debug, Default)]
pub struct GetNetworkViewHandler {
    layout: ForceLayoutHints,
}

impl GetNetworkViewHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_layout(layout: ForceLayoutHints) -> Self {
        Self { layout }
    }

    pub fn handle(&self, store: &StakeholderStore) -> NetworkView {
        NetworkView {
            graph: build_graph(store.all(), store.all_relationships()),
            layout: self.layout,
        }
    }
}
