//! Application configuration. Everything the original page pulled from
//! ambient globals is carried here and provided via Leptos context.

/// Page-level configuration shared by all components.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
	/// Compute endpoint receiving the metric/topology payload.
	pub compute_url: String,
	/// Name of the window-scoped variable carrying topology data.
	pub topology_global: String,
	/// Id prefix marking a node as a switch; everything else is a host.
	pub switch_prefix: String,
}

impl Default for AppConfig {
	fn default() -> Self {
		Self {
			compute_url: "http://localhost:8001/compute".to_string(),
			topology_global: "raas_topology_data".to_string(),
			switch_prefix: "openflow:".to_string(),
		}
	}
}

impl AppConfig {
	/// The configured switch predicate.
	pub fn is_switch(&self, id: &str) -> bool {
		id.starts_with(&self.switch_prefix)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_prefix_classifies_openflow_ids() {
		let config = AppConfig::default();
		assert!(config.is_switch("openflow:1"));
		assert!(!config.is_switch("host:1"));
		assert!(!config.is_switch(""));
	}
}
