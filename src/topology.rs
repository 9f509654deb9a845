//! Topology data model: raw edges from the host page, filtering, and
//! derivation of typed graph nodes.

use serde::{Deserialize, Serialize};

/// Topology object the host page exposes on `window`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct TopologyData {
	/// Raw edge list as delivered by the backend template.
	#[serde(default)]
	pub edges: Vec<RawEdge>,
}

/// One edge as delivered externally; endpoints may be missing or empty.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct RawEdge {
	/// Source node id, empty when absent.
	#[serde(default)]
	pub source: String,
	/// Target node id, empty when absent.
	#[serde(default)]
	pub target: String,
	/// Traversal cost; `None` when the backend omitted it.
	#[serde(default)]
	pub cost: Option<f64>,
}

/// A validated topology edge: both endpoints present, cost defaulted.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TopologyEdge {
	/// Source node id.
	pub source: String,
	/// Target node id.
	pub target: String,
	/// Traversal cost (1 when the raw edge carried none).
	pub cost: f64,
}

/// Node kind derived from the id convention: switches are network-fabric
/// elements, hosts are endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
	/// Network-fabric element, drawn as a square.
	Switch,
	/// Endpoint, drawn as a circle.
	Host,
}

/// A graph node with its derived kind. Layout positions are owned by the
/// force simulation, not by this type.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
	/// Node id.
	pub id: String,
	/// Derived kind.
	pub kind: NodeKind,
}

/// Read the topology object the host page exposes under `window.<name>`.
/// Returns `None` when the global is absent or malformed.
pub fn from_page_global(name: &str) -> Option<TopologyData> {
	let window = web_sys::window()?;
	let raw = js_sys::Reflect::get(&window, &wasm_bindgen::JsValue::from_str(name)).ok()?;
	if raw.is_undefined() || raw.is_null() {
		return None;
	}
	serde_wasm_bindgen::from_value(raw).ok()
}

/// Drop edges missing either endpoint and default absent costs to 1.
pub fn filter_edges(raw: &[RawEdge]) -> Vec<TopologyEdge> {
	raw.iter()
		.filter(|e| !e.source.is_empty() && !e.target.is_empty())
		.map(|e| TopologyEdge {
			source: e.source.clone(),
			target: e.target.clone(),
			cost: e.cost.unwrap_or(1.0),
		})
		.collect()
}

/// Derive the deduplicated node list in first-seen order, classifying each
/// id with the injected switch predicate.
pub fn derive_nodes(edges: &[TopologyEdge], is_switch: impl Fn(&str) -> bool) -> Vec<GraphNode> {
	let mut nodes: Vec<GraphNode> = Vec::new();
	for edge in edges {
		for id in [&edge.source, &edge.target] {
			if nodes.iter().any(|n| &n.id == id) {
				continue;
			}
			let kind = if is_switch(id) {
				NodeKind::Switch
			} else {
				NodeKind::Host
			};
			nodes.push(GraphNode {
				id: id.clone(),
				kind,
			});
		}
	}
	nodes
}

/// Pretty-print the filtered edges for the JSON display area.
pub fn edges_pretty(edges: &[TopologyEdge]) -> String {
	serde_json::to_string_pretty(edges).unwrap_or_default()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn raw(source: &str, target: &str, cost: Option<f64>) -> RawEdge {
		RawEdge {
			source: source.to_string(),
			target: target.to_string(),
			cost,
		}
	}

	#[test]
	fn filter_drops_edges_missing_an_endpoint() {
		let edges = filter_edges(&[
			raw("openflow:1", "openflow:2", Some(2.0)),
			raw("", "openflow:2", Some(1.0)),
			raw("openflow:1", "", None),
			raw("host:a", "openflow:1", None),
		]);
		assert_eq!(edges.len(), 2);
		assert_eq!(edges[0].source, "openflow:1");
		assert_eq!(edges[1].source, "host:a");
	}

	#[test]
	fn filter_defaults_missing_cost_to_one() {
		let edges = filter_edges(&[raw("a", "b", None), raw("b", "c", Some(3.5))]);
		assert_eq!(edges[0].cost, 1.0);
		assert_eq!(edges[1].cost, 3.5);
	}

	#[test]
	fn derive_nodes_first_seen_order_no_duplicates() {
		let edges = filter_edges(&[
			raw("openflow:1", "h1", None),
			raw("openflow:1", "openflow:2", None),
			raw("h1", "openflow:2", None),
		]);
		let nodes = derive_nodes(&edges, |id| id.starts_with("openflow:"));
		let ids: Vec<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
		assert_eq!(ids, vec!["openflow:1", "h1", "openflow:2"]);
	}

	#[test]
	fn classification_is_pure_prefix_match() {
		let edges = filter_edges(&[raw("openflow:9", "hostX", None)]);
		let nodes = derive_nodes(&edges, |id| id.starts_with("openflow:"));
		assert_eq!(nodes[0].kind, NodeKind::Switch);
		assert_eq!(nodes[1].kind, NodeKind::Host);

		// a different convention flips the result without code changes
		let nodes = derive_nodes(&edges, |id| id.starts_with("host"));
		assert_eq!(nodes[0].kind, NodeKind::Host);
		assert_eq!(nodes[1].kind, NodeKind::Switch);
	}

	#[test]
	fn pretty_json_contains_projected_fields() {
		let edges = filter_edges(&[raw("a", "b", Some(2.0))]);
		let text = edges_pretty(&edges);
		assert!(text.contains("\"source\": \"a\""));
		assert!(text.contains("\"target\": \"b\""));
		assert!(text.contains("\"cost\": 2.0"));
	}
}
