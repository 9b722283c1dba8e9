//! ambient-canvas: animated particle backdrop for the document workspace UI.
//!
//! This crate provides a WASM-based background component that paints a
//! decorative particle animation behind the page: drifting white specks in
//! dark mode, pastel orbs and pulsing laser streaks in light mode, with a
//! multi-frame cross-fade whenever the display mode flips.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use serde::{Deserialize, Serialize};
use web_sys::Window;

pub mod components;

pub use components::ambient_background::{AmbientBackgroundCanvas, Mode, Theme};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("ambient-canvas: logging initialized");
}

/// localStorage key for persisted UI preferences.
const PREFS_KEY: &str = "ambient-ui-prefs";

/// UI preferences persisted to localStorage as JSON.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct UiPrefs {
	theme: Mode,
}

/// Load persisted preferences, if any. Parse failures are logged and
/// treated as absent so a corrupt entry cannot wedge startup.
fn load_prefs() -> Option<UiPrefs> {
	let window: Window = web_sys::window()?;
	let storage = window.local_storage().ok()??;
	let json = storage.get_item(PREFS_KEY).ok()??;

	match serde_json::from_str::<UiPrefs>(&json) {
		Ok(prefs) => Some(prefs),
		Err(e) => {
			warn!("ambient-canvas: failed to parse stored preferences: {}", e);
			None
		}
	}
}

/// Persist preferences; storage failures (private browsing, quota) are
/// logged and otherwise ignored.
fn save_prefs(prefs: &UiPrefs) {
	let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
		return;
	};
	match serde_json::to_string(prefs) {
		Ok(json) => {
			if storage.set_item(PREFS_KEY, &json).is_err() {
				warn!("ambient-canvas: failed to persist preferences");
			}
		}
		Err(e) => warn!("ambient-canvas: failed to serialize preferences: {}", e),
	}
}

/// Display mode reported by the `prefers-color-scheme` media query,
/// defaulting to dark when the query is unavailable.
fn preferred_mode() -> Mode {
	web_sys::window()
		.and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
		.map(|mql| if mql.matches() { Mode::Dark } else { Mode::Light })
		.unwrap_or(Mode::Dark)
}

/// Initial display mode: the stored preference when present, the system
/// color scheme otherwise.
fn initial_mode() -> Mode {
	load_prefs().map(|p| p.theme).unwrap_or_else(preferred_mode)
}

/// Button flipping the display mode, persisting the choice.
#[component]
pub fn ThemeToggle() -> impl IntoView {
	let mode = use_context::<RwSignal<Mode>>().expect("theme mode context");

	let on_click = move |_| {
		let next = mode.get_untracked().toggled();
		mode.set(next);
		save_prefs(&UiPrefs { theme: next });
		info!("ambient-canvas: switched to {} mode", next.as_str());
	};

	view! {
		<button class="theme-toggle" on:click=on_click>
			{move || match mode.get() {
				Mode::Dark => "☀️",
				Mode::Light => "🌙",
			}}
		</button>
	}
}

/// Main application component.
/// Provides the display-mode signal and renders the animated background
/// behind a minimal overlay.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let mode = RwSignal::new(initial_mode());
	provide_context(mode);

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme=move || mode.get().as_str() />
		<Title text="Document Workspace" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="app-shell">
			<AmbientBackgroundCanvas mode=mode />
			<div class="app-overlay">
				<h1>"Document Workspace"</h1>
				<p class="subtitle">"Upload, analyze, and revisit your documents."</p>
				<ThemeToggle />
			</div>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn preferences_round_trip_through_json() {
		let prefs = UiPrefs { theme: Mode::Light };
		let json = serde_json::to_string(&prefs).unwrap();
		assert_eq!(json, r#"{"theme":"light"}"#);
		assert_eq!(serde_json::from_str::<UiPrefs>(&json).unwrap(), prefs);
	}

	#[test]
	fn unknown_theme_values_fail_to_parse() {
		assert!(serde_json::from_str::<UiPrefs>(r#"{"theme":"sepia"}"#).is_err());
	}
}
