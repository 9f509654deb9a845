use leptos::prelude::*;

use crate::components::metric_form::MetricForm;
use crate::components::topology_panel::TopologyPanel;
use crate::config::AppConfig;
use crate::topology;

/// Landing page: topology view plus the metric form, both fed from the
/// externally supplied topology global. The topology view is skipped
/// entirely when the global is absent.
#[component]
pub fn Home() -> impl IntoView {
	let config = expect_context::<AppConfig>();
	let topo = topology::from_page_global(&config.topology_global);
	let has_topology = topo.is_some();
	if !has_topology {
		log::warn!(
			"topology global `{}` is absent; topology view disabled",
			config.topology_global
		);
	}
	let edges = topo
		.map(|t| topology::filter_edges(&t.edges))
		.unwrap_or_default();

	view! {
		<main class="netpath">
			<h1>"Network Path Computation"</h1>
			{has_topology.then(|| view! { <TopologyPanel edges=edges.clone() /> })}
			<MetricForm edges=edges />
		</main>
	}
}
