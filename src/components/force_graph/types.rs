use crate::topology::GraphNode;

/// An undirected visual link between two node ids.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphLink {
	/// Source node id.
	pub source: String,
	/// Target node id.
	pub target: String,
}

/// Everything the canvas needs to draw one graph.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphData {
	/// Typed nodes in first-seen order.
	pub nodes: Vec<GraphNode>,
	/// Links between nodes, keyed by node id.
	pub links: Vec<GraphLink>,
}
