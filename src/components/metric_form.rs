use gloo_net::http::Request;
use leptos::prelude::*;
use serde_json::Value as JsonValue;

use crate::config::AppConfig;
use crate::metric::{self, ALGORITHMS, ComputeRequest, ResultView, WeightField};
use crate::topology::TopologyEdge;

/// Where the current submission stands. Overlapping submits are allowed;
/// the last response to arrive wins.
#[derive(Clone, Debug, PartialEq)]
enum SubmitState {
	Idle,
	Loading,
	Done(ResultView),
	Failed(String),
}

async fn post_compute(url: &str, payload: &ComputeRequest) -> Result<JsonValue, String> {
	let response = Request::post(url)
		.json(payload)
		.map_err(|e| e.to_string())?
		.send()
		.await
		.map_err(|e| e.to_string())?;
	response.json::<JsonValue>().await.map_err(|e| e.to_string())
}

fn outcome_view(outcome: SubmitState) -> AnyView {
	match outcome {
		SubmitState::Idle => ().into_any(),
		SubmitState::Loading => view! {
			<p><em>"Computing shortest paths..."</em></p>
		}
		.into_any(),
		SubmitState::Failed(e) | SubmitState::Done(ResultView::Error(e)) => view! {
			<p class="result-error">{format!("Error: {e}")}</p>
		}
		.into_any(),
		SubmitState::Done(ResultView::Empty) => view! {
			<p><em>"No paths found."</em></p>
		}
		.into_any(),
		SubmitState::Done(ResultView::Opaque(text)) => view! {
			<pre>{text}</pre>
		}
		.into_any(),
		SubmitState::Done(ResultView::Groups(groups)) => view! {
			<div>
				{groups
					.into_iter()
					.map(|group| view! {
						<div class="path-group">
							<b>{group.heading}</b>
							<ul>
								{group
									.entries
									.into_iter()
									.map(|entry| view! { <li>{entry}</li> })
									.collect_view()}
							</ul>
						</div>
					})
					.collect_view()}
			</div>
		}
		.into_any(),
	}
}

/// Metric formulation form: dynamic weight fields over a comma-separated
/// attribute list, a path-algorithm selector, and one-shot submission to the
/// compute endpoint.
#[component]
pub fn MetricForm(edges: Vec<TopologyEdge>) -> impl IntoView {
	let config = expect_context::<AppConfig>();
	let attributes = RwSignal::new(String::new());
	let fields = RwSignal::new(Vec::<WeightField>::new());
	let warning = RwSignal::new(false);
	let algo = RwSignal::new(ALGORITHMS[0].to_string());
	let outcome = RwSignal::new(SubmitState::Idle);

	// Rebuilding replaces all prior fields and hides any standing warning.
	let rebuild = move |ev: web_sys::Event| {
		let text = event_target_value(&ev);
		fields.set(metric::build_weight_fields(&text));
		warning.set(false);
		attributes.set(text);
	};

	let compute_url = config.compute_url.clone();
	let on_submit = move |_| {
		let payload = metric::build_request(
			&fields.get_untracked(),
			&edges,
			&algo.get_untracked(),
		);
		log::info!(
			"computing paths: {} weights, {} edges, algo {}",
			payload.metric.len(),
			payload.topo.len(),
			payload.algo
		);
		outcome.set(SubmitState::Loading);
		let url = compute_url.clone();
		wasm_bindgen_futures::spawn_local(async move {
			match post_compute(&url, &payload).await {
				Ok(value) => outcome.set(SubmitState::Done(metric::result_view(&value))),
				Err(e) => {
					log::warn!("compute request failed: {e}");
					outcome.set(SubmitState::Failed(e));
				}
			}
		});
	};

	view! {
		<section class="metric-section">
			<h2>"Metric Formulation"</h2>
			<label for="attributes">"Metric attributes (comma-separated): "</label>
			<input
				id="attributes"
				type="text"
				placeholder="latency, loss"
				prop:value=attributes
				on:change=rebuild
			/>
			<div class="weights-section">
				{move || {
					fields
						.get()
						.into_iter()
						.enumerate()
						.map(|(i, field)| {
							let name = field.name.clone();
							view! {
								<label>
									{format!("{name}: ")}
									<input
										type="number"
										class="weight-input"
										name=format!("weight_{name}")
										min="0"
										max="1"
										step="0.01"
										prop:value=format!("{:.2}", field.value)
										on:change=move |ev| {
											let raw = event_target_value(&ev);
											fields.update(|fs| {
												warning.set(metric::apply_weight_change(fs, i, &raw));
											});
										}
									/>
								</label>
								<br />
							}
						})
						.collect_view()
				}}
			</div>
			<Show when=move || warning.get()>
				<p class="weight-warning">"Weights must sum to 1; values were reset."</p>
			</Show>
			<label for="algo-select">"Path algorithm: "</label>
			<select id="algo-select" on:change=move |ev| algo.set(event_target_value(&ev))>
				{ALGORITHMS
					.iter()
					.map(|a| view! { <option value=*a>{*a}</option> })
					.collect_view()}
			</select>
			<button on:click=on_submit>"Compute Paths"</button>
			<div class="path-results">{move || outcome_view(outcome.get())}</div>
		</section>
	}
}
