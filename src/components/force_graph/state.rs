use std::collections::HashMap;
use std::f64::consts::PI;

use force_graph::{EdgeData, ForceGraph, NodeData, SimulationParameters};

use crate::topology::NodeKind;

use super::types::GraphData;

/// Side length of a switch square, in world units.
pub const SWITCH_SIZE: f64 = 34.0;
/// Radius of a host circle, in world units.
pub const HOST_RADIUS: f64 = 18.0;
/// Vertical distance from a node center to its label baseline.
pub const LABEL_OFFSET: f64 = 32.0;
/// Lower bound of the zoom scale.
pub const MIN_ZOOM: f64 = 0.2;
/// Upper bound of the zoom scale.
pub const MAX_ZOOM: f64 = 5.0;

/// Per-node payload carried through the simulation.
#[derive(Clone, Debug)]
pub struct NodeInfo {
	pub id: String,
	pub kind: NodeKind,
}

/// Pan/zoom applied to the whole rendered group.
#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

/// Background-drag bookkeeping.
#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

/// The live simulation for one canvas. Rebuilt wholesale whenever the data
/// or the container dimensions change; never patched incrementally.
pub struct ForceGraphState {
	pub graph: ForceGraph<NodeInfo, ()>,
	pub transform: ViewTransform,
	pub pan: PanState,
	pub width: f64,
	pub height: f64,
	pub animation_running: bool,
}

impl ForceGraphState {
	pub fn new(data: &GraphData, width: f64, height: f64) -> Self {
		let mut graph = ForceGraph::new(SimulationParameters {
			force_charge: 150.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		});
		let mut id_to_idx = HashMap::new();

		// Seed nodes on a circle around the origin; the view transform maps
		// the origin to the container midpoint.
		for (i, node) in data.nodes.iter().enumerate() {
			let angle = (i as f64) * 2.0 * PI / data.nodes.len().max(1) as f64;
			let (x, y) = ((100.0 * angle.cos()) as f32, (100.0 * angle.sin()) as f32);

			let idx = graph.add_node(NodeData {
				x,
				y,
				mass: 10.0,
				is_anchor: false,
				user_data: NodeInfo {
					id: node.id.clone(),
					kind: node.kind,
				},
			});
			id_to_idx.insert(node.id.clone(), idx);
		}

		// Links whose endpoints never appeared in the node list are skipped.
		for link in &data.links {
			if let (Some(&src), Some(&tgt)) =
				(id_to_idx.get(&link.source), id_to_idx.get(&link.target))
			{
				graph.add_edge(src, tgt, EdgeData::default());
			}
		}

		Self {
			graph,
			transform: ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
				k: 1.0,
			},
			pan: PanState::default(),
			width,
			height,
			animation_running: true,
		}
	}

	/// Advance the simulation and pull the layout centroid back toward the
	/// origin so the graph stays anchored at the container midpoint.
	pub fn tick(&mut self, dt: f32) {
		self.graph.update(dt);

		let (mut sx, mut sy, mut count) = (0.0f64, 0.0f64, 0usize);
		self.graph.visit_nodes(|node| {
			sx += node.x() as f64;
			sy += node.y() as f64;
			count += 1;
		});
		if count == 0 {
			return;
		}
		let pull = (dt as f64 * 2.0).min(1.0);
		let (cx, cy) = (sx / count as f64 * pull, sy / count as f64 * pull);
		self.graph.visit_nodes_mut(|node| {
			node.data.x -= cx as f32;
			node.data.y -= cy as f32;
		});
	}

	/// Clamp a zoom factor to the supported scale range.
	pub fn clamp_zoom(k: f64) -> f64 {
		k.clamp(MIN_ZOOM, MAX_ZOOM)
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.transform.x = width / 2.0;
		self.transform.y = height / 2.0;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::force_graph::types::GraphLink;
	use crate::topology::GraphNode;

	fn sample() -> GraphData {
		GraphData {
			nodes: vec![
				GraphNode {
					id: "openflow:1".to_string(),
					kind: NodeKind::Switch,
				},
				GraphNode {
					id: "h1".to_string(),
					kind: NodeKind::Host,
				},
			],
			links: vec![
				GraphLink {
					source: "openflow:1".to_string(),
					target: "h1".to_string(),
				},
				GraphLink {
					source: "openflow:1".to_string(),
					target: "ghost".to_string(),
				},
			],
		}
	}

	#[test]
	fn builds_one_simulation_node_per_graph_node() {
		let state = ForceGraphState::new(&sample(), 800.0, 600.0);
		let mut count = 0;
		state.graph.visit_nodes(|_| count += 1);
		assert_eq!(count, 2);
	}

	#[test]
	fn links_with_unknown_endpoints_are_skipped() {
		let state = ForceGraphState::new(&sample(), 800.0, 600.0);
		let mut edges = 0;
		state.graph.visit_edges(|_, _, _| edges += 1);
		assert_eq!(edges, 1);
	}

	#[test]
	fn transform_starts_at_container_midpoint() {
		let state = ForceGraphState::new(&sample(), 800.0, 600.0);
		assert_eq!(state.transform.x, 400.0);
		assert_eq!(state.transform.y, 300.0);
		assert_eq!(state.transform.k, 1.0);
	}

	#[test]
	fn resize_recenters_the_view() {
		let mut state = ForceGraphState::new(&sample(), 800.0, 600.0);
		state.resize(400.0, 200.0);
		assert_eq!(state.width, 400.0);
		assert_eq!(state.transform.x, 200.0);
		assert_eq!(state.transform.y, 100.0);
	}

	#[test]
	fn zoom_is_clamped_to_documented_bounds() {
		assert_eq!(ForceGraphState::clamp_zoom(0.01), MIN_ZOOM);
		assert_eq!(ForceGraphState::clamp_zoom(50.0), MAX_ZOOM);
		assert_eq!(ForceGraphState::clamp_zoom(1.0), 1.0);
	}

	#[test]
	fn tick_keeps_the_centroid_near_the_origin() {
		let mut state = ForceGraphState::new(&sample(), 800.0, 600.0);
		for _ in 0..120 {
			state.tick(0.016);
		}
		let (mut sx, mut sy, mut n) = (0.0f64, 0.0f64, 0usize);
		state.graph.visit_nodes(|node| {
			sx += node.x() as f64;
			sy += node.y() as f64;
			n += 1;
		});
		assert!((sx / n as f64).abs() < 50.0);
		assert!((sy / n as f64).abs() < 50.0);
	}
}
