//! Canvas rendering for the ambient background.
//!
//! Painting happens in screen space with no transforms: the mode-dependent
//! background first, then the active entity pools under a single global
//! alpha multiplier derived from the cross-fade. The multiplier is reset to
//! 1.0 once the pools are drawn, every frame.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::AmbientState;

/// Paints one complete frame of the ambient scene.
pub fn render(state: &AmbientState, ctx: &CanvasRenderingContext2d) {
	ctx.clear_rect(0.0, 0.0, state.width, state.height);
	draw_background(state, ctx);

	ctx.set_global_alpha(state.fade.global_alpha());
	draw_particles(state, ctx);
	draw_orbs(state, ctx);
	draw_lasers(state, ctx);
	ctx.set_global_alpha(1.0);
}

fn draw_background(state: &AmbientState, ctx: &CanvasRenderingContext2d) {
	let style = &state.theme.background;
	if style.use_gradient {
		let gradient = ctx.create_linear_gradient(0.0, 0.0, state.width, state.height);
		for (offset, color) in &style.stops {
			gradient
				.add_color_stop(*offset as f32, &color.to_css())
				.unwrap();
		}
		#[allow(deprecated)]
		ctx.set_fill_style(&gradient);
	} else {
		ctx.set_fill_style_str(&style.color.to_css());
	}
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
}

fn draw_particles(state: &AmbientState, ctx: &CanvasRenderingContext2d) {
	let color = &state.theme.particles.color;

	for p in &state.pools.particles {
		ctx.set_fill_style_str(&format!(
			"rgba({}, {}, {}, {})",
			color.r, color.g, color.b, p.opacity
		));

		ctx.begin_path();
		let _ = ctx.arc(p.x, p.y, p.size, 0.0, PI * 2.0);
		ctx.fill();
	}
}

fn draw_orbs(state: &AmbientState, ctx: &CanvasRenderingContext2d) {
	for o in &state.pools.orbs {
		let gradient = ctx
			.create_radial_gradient(o.x, o.y, 0.0, o.x, o.y, o.size)
			.unwrap();

		gradient
			.add_color_stop(0.0, &format!("hsla({}, 80%, 90%, {})", o.hue, o.opacity))
			.unwrap();
		gradient
			.add_color_stop(1.0, &format!("hsla({}, 80%, 90%, 0)", o.hue))
			.unwrap();

		#[allow(deprecated)]
		ctx.set_fill_style(&gradient);
		ctx.begin_path();
		let _ = ctx.arc(o.x, o.y, o.size, 0.0, PI * 2.0);
		ctx.fill();
	}
}

fn draw_lasers(state: &AmbientState, ctx: &CanvasRenderingContext2d) {
	let style = &state.theme.lasers;

	for l in &state.pools.lasers {
		let alpha = l.pulsed_opacity();
		let (edge, mid) = (&style.color, &style.color_mid);

		let gradient = ctx.create_linear_gradient(l.x1, l.y1, l.x2, l.y2);
		gradient
			.add_color_stop(
				0.0,
				&format!("rgba({}, {}, {}, {})", edge.r, edge.g, edge.b, alpha),
			)
			.unwrap();
		gradient
			.add_color_stop(
				0.5,
				&format!("rgba({}, {}, {}, {})", mid.r, mid.g, mid.b, alpha * 1.5),
			)
			.unwrap();
		gradient
			.add_color_stop(
				1.0,
				&format!("rgba({}, {}, {}, {})", edge.r, edge.g, edge.b, alpha),
			)
			.unwrap();

		#[allow(deprecated)]
		ctx.set_stroke_style(&gradient);
		ctx.set_line_width(l.width);
		ctx.set_line_cap("round");
		ctx.begin_path();
		ctx.move_to(l.x1, l.y1);
		ctx.line_to(l.x2, l.y2);
		ctx.stroke();

		// Second stroke with a blur halo to fake light bloom.
		ctx.set_shadow_color(&style.glow_color.to_css());
		ctx.set_shadow_blur(style.glow_blur);
		ctx.stroke();
		ctx.set_shadow_blur(0.0);
	}
}
