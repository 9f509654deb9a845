use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use crate::topology::NodeKind;

use super::state::{ForceGraphState, HOST_RADIUS, LABEL_OFFSET, SWITCH_SIZE};

/// Draw one full frame: clear, apply the pan/zoom transform to the whole
/// group, then edges below nodes below labels.
pub fn render(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str("#ffffff");
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_edges(state, ctx);
	draw_nodes(state, ctx);
	ctx.restore();
}

fn draw_edges(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	ctx.set_stroke_style_str("#999999");
	ctx.set_line_width(2.0);
	state.graph.visit_edges(|n1, n2, _| {
		ctx.begin_path();
		ctx.move_to(n1.x() as f64, n1.y() as f64);
		ctx.line_to(n2.x() as f64, n2.y() as f64);
		ctx.stroke();
	});
}

fn draw_nodes(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	state.graph.visit_nodes(|node| {
		let (x, y) = (node.x() as f64, node.y() as f64);

		match node.data.user_data.kind {
			NodeKind::Switch => {
				let half = SWITCH_SIZE / 2.0;
				ctx.set_fill_style_str("#d62728");
				ctx.fill_rect(x - half, y - half, SWITCH_SIZE, SWITCH_SIZE);
				ctx.set_stroke_style_str("#222222");
				ctx.set_line_width(2.0);
				ctx.stroke_rect(x - half, y - half, SWITCH_SIZE, SWITCH_SIZE);
			}
			NodeKind::Host => {
				ctx.begin_path();
				let _ = ctx.arc(x, y, HOST_RADIUS, 0.0, 2.0 * PI);
				ctx.set_fill_style_str("#2879d0");
				ctx.fill();
				ctx.set_stroke_style_str("#222222");
				ctx.set_line_width(2.0);
				ctx.stroke();
			}
		}

		ctx.set_fill_style_str("#000000");
		ctx.set_font("12px sans-serif");
		ctx.set_text_align("center");
		let _ = ctx.fill_text(&node.data.user_data.id, x, y + LABEL_OFFSET);
	});
}
