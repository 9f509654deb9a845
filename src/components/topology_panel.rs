use leptos::prelude::*;

use crate::components::force_graph::{ForceGraphCanvas, GraphData, GraphLink};
use crate::config::AppConfig;
use crate::topology::{self, TopologyEdge};

/// Topology view: the filtered edges pretty-printed as JSON next to the
/// force-directed graph, with node kinds derived from the configured switch
/// predicate.
#[component]
pub fn TopologyPanel(edges: Vec<TopologyEdge>) -> impl IntoView {
	let config = expect_context::<AppConfig>();
	let nodes = topology::derive_nodes(&edges, |id| config.is_switch(id));
	log::info!("topology: {} edges, {} nodes", edges.len(), nodes.len());

	let pretty = topology::edges_pretty(&edges);
	let data = GraphData {
		nodes,
		links: edges
			.iter()
			.map(|e| GraphLink {
				source: e.source.clone(),
				target: e.target.clone(),
			})
			.collect(),
	};
	let data = Signal::derive(move || data.clone());

	view! {
		<section class="topology-panel">
			<div class="graph-container" style="width: 100%; height: 480px;">
				<ForceGraphCanvas data=data />
			</div>
			<pre class="json-highlight">
				<code class="language-json">{pretty}</code>
			</pre>
		</section>
	}
}
