//! Leptos component wrapping the ambient background canvas.
//!
//! The component creates a fullscreen canvas and drives the animation via
//! `requestAnimationFrame`: each tick synchronously advances entity physics
//! and the cross-fade, paints the frame, then schedules the next tick, so at
//! most one callback is ever pending. A window resize rebuilds the scene at
//! the new dimensions; unmounting cancels the pending frame and detaches the
//! resize listener before anything else is dropped.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::__reexports::send_wrapper::SendWrapper;
use leptos::prelude::*;
use log::debug;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::render;
use super::state::AmbientState;
use super::theme::Mode;

/// Renders the animated ambient background behind the page content.
///
/// The `mode` signal selects which scene is shown; changes cross-fade
/// between scenes rather than swapping instantly. The canvas always fills
/// the viewport and tracks window resizes.
#[component]
pub fn AmbientBackgroundCanvas(#[prop(into)] mode: Signal<Mode>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<AmbientState>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let frame_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
	let running: Rc<Cell<bool>> = Rc::new(Cell::new(true));

	let (state_init, animate_init, resize_cb_init) =
		(state.clone(), animate.clone(), resize_cb.clone());
	let (frame_id_init, running_init) = (frame_id.clone(), running.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let window: Window = web_sys::window().unwrap();

		let (w, h) = viewport_size(&window);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();

		let seed = js_sys::Math::random() * 1.0e6;
		*state_init.borrow_mut() = Some(AmbientState::new(mode.get_untracked(), w, h, seed));
		debug!("ambient-canvas: mounted at {}x{}", w, h);

		let (state_resize, canvas_resize) = (state_init.clone(), canvas.clone());
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let win: Window = web_sys::window().unwrap();
			let (nw, nh) = viewport_size(&win);
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			if let Some(ref mut s) = *state_resize.borrow_mut() {
				s.resize(nw, nh);
			}
			debug!("ambient-canvas: resized to {}x{}", nw, nh);
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (state_anim, animate_inner) = (state_init.clone(), animate_init.clone());
		let (frame_id_anim, running_anim) = (frame_id_init.clone(), running_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if !running_anim.get() {
				return;
			}
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				s.tick();
				render::render(s, &ctx);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				if let Ok(id) = web_sys::window()
					.unwrap()
					.request_animation_frame(cb.as_ref().unchecked_ref())
				{
					frame_id_anim.set(Some(id));
				}
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
				frame_id_init.set(Some(id));
			}
		}
	});

	// Subscribe to the external display-mode signal; the frame loop itself
	// never reads signals.
	let state_mode = state.clone();
	Effect::new(move |_| {
		let m = mode.get();
		if let Some(ref mut s) = *state_mode.borrow_mut() {
			s.set_mode(m);
		}
	});

	// Unsubscribe and cancel before anything else is torn down; a destroyed
	// canvas must never be painted again. The teardown touches `!Send` `Rc`
	// handles, so it is wrapped in a `SendWrapper` (sound on the single wasm
	// thread) to satisfy `on_cleanup`'s `Send + Sync` bound.
	let cleanup = SendWrapper::new(move || {
		running.set(false);
		if let Some(win) = web_sys::window() {
			if let Some(id) = frame_id.take() {
				let _ = win.cancel_animation_frame(id);
			}
			if let Some(ref cb) = *resize_cb.borrow() {
				let _ =
					win.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}
		animate.borrow_mut().take();
		resize_cb.borrow_mut().take();
		debug!("ambient-canvas: torn down");
	});
	on_cleanup(move || (cleanup.take())());

	view! {
		<canvas
			node_ref=canvas_ref
			class="ambient-background-canvas"
			style="display: block; position: fixed; inset: 0; z-index: -1;"
		/>
	}
}

fn viewport_size(window: &Window) -> (f64, f64) {
	(
		window.inner_width().unwrap().as_f64().unwrap(),
		window.inner_height().unwrap().as_f64().unwrap(),
	)
}
