//! Weight-form domain logic: attribute parsing, the sum-to-one invariant,
//! compute request assembly, and result-view construction.
//!
//! Everything here is DOM-free so it can be unit-tested on the host target;
//! the form component is a thin signal wrapper over these functions.

use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::topology::TopologyEdge;

/// Allowed deviation of the weight sum from 1.
pub const WEIGHT_TOLERANCE: f64 = 0.001;

/// Arrow used when rendering path keys and hop sequences.
pub const PATH_ARROW: &str = " ⟶ ";

/// Path algorithms the compute backend accepts.
pub const ALGORITHMS: &[&str] = &[
	"shortest_path",
	"dijkstra_path",
	"bellman_ford_path",
	"astar_path",
	"bidirectional_dijkstra",
	"all_shortest_paths",
	"all_pairs_dijkstra_path",
	"all_pairs_bellman_ford_path",
];

/// One weight input: attribute name and its current value.
#[derive(Clone, Debug, PartialEq)]
pub struct WeightField {
	/// Attribute name, non-empty.
	pub name: String,
	/// Weight in `[0, 1]`.
	pub value: f64,
}

/// Split a comma-separated attribute list, trimming whitespace and dropping
/// empty tokens and duplicates (first occurrence wins).
pub fn parse_attributes(text: &str) -> Vec<String> {
	let mut attrs: Vec<String> = Vec::new();
	for token in text.split(',') {
		let token = token.trim();
		if token.is_empty() || attrs.iter().any(|a| a == token) {
			continue;
		}
		attrs.push(token.to_string());
	}
	attrs
}

/// The uniform weight for `n` attributes. Zero attributes yield 0 so callers
/// never divide by zero.
pub fn uniform_weight(n: usize) -> f64 {
	if n == 0 { 0.0 } else { 1.0 / n as f64 }
}

/// Build a fresh field set from the attribute list, every field at `1/N`.
/// An empty list clears the form.
pub fn build_weight_fields(text: &str) -> Vec<WeightField> {
	let attrs = parse_attributes(text);
	let value = uniform_weight(attrs.len());
	attrs
		.into_iter()
		.map(|name| WeightField {
			name,
			value,
		})
		.collect()
}

/// Whether the current values satisfy the sum-to-one invariant. An empty
/// field set is trivially balanced: there is nothing to reset.
pub fn weights_balanced(values: &[f64]) -> bool {
	if values.is_empty() {
		return true;
	}
	let sum: f64 = values.iter().sum();
	(sum - 1.0).abs() <= WEIGHT_TOLERANCE
}

/// Apply one edited raw value (unparseable input counts as 0) and enforce
/// the invariant. Returns true when the fields were reset to uniform
/// weights, which is also when the warning should show.
pub fn apply_weight_change(fields: &mut [WeightField], index: usize, raw: &str) -> bool {
	if let Some(field) = fields.get_mut(index) {
		field.value = raw.trim().parse().unwrap_or(0.0);
	}
	let values: Vec<f64> = fields.iter().map(|f| f.value).collect();
	if weights_balanced(&values) {
		return false;
	}
	let reset = uniform_weight(fields.len());
	for field in fields.iter_mut() {
		field.value = reset;
	}
	true
}

/// A topology edge projected into the payload shape the backend expects.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WeightedEdge {
	/// Source node id.
	pub source: String,
	/// Target node id.
	pub target: String,
	/// Edge cost under the backend's `weight` key.
	pub weight: f64,
}

/// The JSON payload POSTed to the compute endpoint.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ComputeRequest {
	/// Attribute name to weight, in field order.
	pub metric: serde_json::Map<String, JsonValue>,
	/// Topology edges with `cost` projected to `weight`.
	pub topo: Vec<WeightedEdge>,
	/// Selected path algorithm, one of [`ALGORITHMS`].
	pub algo: String,
}

/// Package weights, topology, and algorithm choice into a request payload.
pub fn build_request(fields: &[WeightField], edges: &[TopologyEdge], algo: &str) -> ComputeRequest {
	let mut metric = serde_json::Map::new();
	for field in fields {
		let value = serde_json::Number::from_f64(field.value)
			.map(JsonValue::Number)
			.unwrap_or(JsonValue::Null);
		metric.insert(field.name.clone(), value);
	}
	let topo = edges
		.iter()
		.map(|e| WeightedEdge {
			source: e.source.clone(),
			target: e.target.clone(),
			weight: e.cost,
		})
		.collect();
	ComputeRequest {
		metric,
		topo,
		algo: algo.to_string(),
	}
}

/// One rendered result section: a source/target heading and its paths.
#[derive(Clone, Debug, PartialEq)]
pub struct PathGroup {
	/// Result key with underscores replaced by arrows.
	pub heading: String,
	/// One line per path or opaque value.
	pub entries: Vec<String>,
}

/// Structured form of a compute response, ready for display.
#[derive(Clone, Debug, PartialEq)]
pub enum ResultView {
	/// The backend reported an error; render it and nothing else.
	Error(String),
	/// No keys in the response.
	Empty,
	/// One group per result key, in response order.
	Groups(Vec<PathGroup>),
	/// The response was not a JSON object; show its raw text.
	Opaque(String),
}

fn json_text(value: &JsonValue) -> String {
	match value {
		JsonValue::String(s) => s.clone(),
		other => other.to_string(),
	}
}

fn path_text(element: &JsonValue) -> String {
	match element {
		JsonValue::Array(hops) => hops
			.iter()
			.map(json_text)
			.collect::<Vec<_>>()
			.join(PATH_ARROW),
		other => other.to_string(),
	}
}

/// Turn a compute response into its display form. Pure and total: any JSON
/// value maps to exactly one view.
pub fn result_view(response: &JsonValue) -> ResultView {
	let Some(object) = response.as_object() else {
		return ResultView::Opaque(response.to_string());
	};
	if let Some(error) = object.get("error") {
		return ResultView::Error(json_text(error));
	}
	if object.is_empty() {
		return ResultView::Empty;
	}
	let groups = object
		.iter()
		.map(|(key, value)| {
			let entries = match value {
				JsonValue::Array(paths) => paths.iter().map(path_text).collect(),
				other => vec![other.to_string()],
			};
			PathGroup {
				heading: key.replace('_', PATH_ARROW),
				entries,
			}
		})
		.collect();
	ResultView::Groups(groups)
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn parse_attributes_trims_and_drops_empty_tokens() {
		assert_eq!(parse_attributes(" latency, loss ,, "), vec!["latency", "loss"]);
		assert_eq!(parse_attributes(""), Vec::<String>::new());
		assert_eq!(parse_attributes(" , ,"), Vec::<String>::new());
	}

	#[test]
	fn parse_attributes_first_occurrence_wins() {
		assert_eq!(parse_attributes("a, b, a"), vec!["a", "b"]);
	}

	#[test]
	fn build_fields_initializes_uniformly() {
		let fields = build_weight_fields("latency, loss");
		assert_eq!(fields.len(), 2);
		assert!(fields.iter().all(|f| (f.value - 0.5).abs() < 0.01));

		for n in 1..=7 {
			let text = (0..n).map(|i| format!("a{i}")).collect::<Vec<_>>().join(",");
			let fields = build_weight_fields(&text);
			assert_eq!(fields.len(), n);
			let sum: f64 = fields.iter().map(|f| f.value).sum();
			assert!((sum - 1.0).abs() <= WEIGHT_TOLERANCE, "n={n} sum={sum}");
		}
	}

	#[test]
	fn build_fields_empty_list_clears_form() {
		assert!(build_weight_fields("  ,  ").is_empty());
	}

	#[test]
	fn balanced_within_tolerance() {
		assert!(weights_balanced(&[0.5, 0.5]));
		assert!(weights_balanced(&[0.5, 0.4995]));
		assert!(!weights_balanced(&[0.5, 0.498]));
		assert!(!weights_balanced(&[0.8, 0.5]));
		// nothing to validate
		assert!(weights_balanced(&[]));
	}

	#[test]
	fn change_within_tolerance_keeps_values() {
		let mut fields = build_weight_fields("a, b");
		let reset = apply_weight_change(&mut fields, 0, "0.5");
		assert!(!reset);
		assert_eq!(fields[0].value, 0.5);
		assert_eq!(fields[1].value, 0.5);
	}

	#[test]
	fn violating_change_resets_every_field() {
		let mut fields = build_weight_fields("latency, loss");
		let reset = apply_weight_change(&mut fields, 0, "0.80");
		assert!(reset);
		assert!(fields.iter().all(|f| (f.value - 0.5).abs() < 1e-9));
	}

	#[test]
	fn unparseable_input_counts_as_zero() {
		let mut fields = build_weight_fields("a, b");
		let reset = apply_weight_change(&mut fields, 1, "abc");
		assert!(reset);
		assert!(fields.iter().all(|f| (f.value - 0.5).abs() < 1e-9));
	}

	#[test]
	fn empty_field_set_is_a_no_op() {
		let mut fields: Vec<WeightField> = Vec::new();
		assert!(!apply_weight_change(&mut fields, 0, "1.0"));
	}

	#[test]
	fn request_projects_cost_to_weight() {
		let fields = build_weight_fields("latency");
		let edges = vec![TopologyEdge {
			source: "openflow:1".to_string(),
			target: "openflow:2".to_string(),
			cost: 3.0,
		}];
		let request = build_request(&fields, &edges, "dijkstra_path");
		assert_eq!(request.algo, "dijkstra_path");
		assert_eq!(request.topo[0].weight, 3.0);
		assert_eq!(request.metric.get("latency"), Some(&json!(1.0)));

		let body = serde_json::to_value(&request).unwrap();
		assert_eq!(body["topo"][0]["weight"], json!(3.0));
		assert!(body["topo"][0].get("cost").is_none());
	}

	#[test]
	fn metric_preserves_field_order() {
		let fields = build_weight_fields("z, a, m");
		let request = build_request(&fields, &[], "shortest_path");
		let keys: Vec<&String> = request.metric.keys().collect();
		assert_eq!(keys, vec!["z", "a", "m"]);
	}

	#[test]
	fn result_view_error_only() {
		assert_eq!(
			result_view(&json!({ "error": "no path", "a_b": [["a", "b"]] })),
			ResultView::Error("no path".to_string())
		);
	}

	#[test]
	fn result_view_empty_response() {
		assert_eq!(result_view(&json!({})), ResultView::Empty);
	}

	#[test]
	fn result_view_paths_join_with_arrows() {
		let view = result_view(&json!({ "a_b": [["a", "c", "b"]] }));
		let ResultView::Groups(groups) = view else {
			panic!("expected groups");
		};
		assert_eq!(groups.len(), 1);
		assert_eq!(groups[0].heading, "a ⟶ b");
		assert_eq!(groups[0].entries, vec!["a ⟶ c ⟶ b"]);
	}

	#[test]
	fn result_view_opaque_values_render_as_json() {
		let view = result_view(&json!({
			"s1_s2": [{ "error": "unreachable" }],
			"count": 3
		}));
		let ResultView::Groups(groups) = view else {
			panic!("expected groups");
		};
		// response key order is preserved
		assert_eq!(groups[0].heading, "s1 ⟶ s2");
		assert_eq!(groups[0].entries, vec![r#"{"error":"unreachable"}"#]);
		assert_eq!(groups[1].heading, "count");
		assert_eq!(groups[1].entries, vec!["3"]);
	}

	#[test]
	fn result_view_non_object_is_opaque() {
		assert_eq!(
			result_view(&json!([1, 2])),
			ResultView::Opaque("[1,2]".to_string())
		);
	}

	#[test]
	fn algorithms_cover_the_backend_set() {
		assert!(ALGORITHMS.contains(&"dijkstra_path"));
		assert!(ALGORITHMS.contains(&"all_shortest_paths"));
		assert_eq!(ALGORITHMS.len(), 8);
	}
}
