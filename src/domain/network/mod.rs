//! Network module - relationship graph construction.

mod graph;

pub use graph::{build_graph, ForceLayoutHints, GraphEdge, GraphNode, NetworkGraph};
