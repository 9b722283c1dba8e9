//! Renderer-owned animation state.
//!
//! One [`AmbientState`] is created when the component mounts and mutated
//! only by the frame loop and the resize/mode-change handlers, all of which
//! run on the same logical browser thread. Outside code never touches the
//! entity pools directly.

use super::particles::{ParticlePools, UniformSource};
use super::theme::{Mode, Theme};
use super::transition::CrossFade;

/// Complete state of one ambient background instance: entity pools, the
/// cross-fade machine, the active theme, and the viewport dimensions.
pub struct AmbientState {
	pub pools: ParticlePools,
	pub fade: CrossFade,
	pub theme: Theme,
	pub width: f64,
	pub height: f64,
	mode: Mode,
	rng: UniformSource,
}

impl AmbientState {
	pub fn new(mode: Mode, width: f64, height: f64, seed: f64) -> Self {
		let theme = Theme::for_mode(mode);
		let mut rng = UniformSource::new(seed);
		let mut pools = ParticlePools::new();
		pools.initialize(&theme, width, height, &mut rng);
		Self {
			pools,
			fade: CrossFade::idle(mode),
			theme,
			width,
			height,
			mode,
			rng,
		}
	}

	/// Mode the active pools were built for.
	pub fn mode(&self) -> Mode {
		self.mode
	}

	/// The most recently requested display mode: the transition target while
	/// a cross-fade is in flight, the pool mode otherwise.
	pub fn observed_mode(&self) -> Mode {
		if self.fade.is_active() {
			self.fade.target()
		} else {
			self.mode
		}
	}

	/// Reacts to the external display-mode signal.
	///
	/// A change while a cross-fade is already active restarts the fade
	/// toward the new target rather than queueing behind the old one.
	pub fn set_mode(&mut self, mode: Mode) {
		if mode == self.observed_mode() {
			return;
		}
		self.fade.begin(mode);
	}

	/// Advances entities and the cross-fade by one frame, swapping the
	/// pools to the target mode on the tick the fade-out completes.
	pub fn tick(&mut self) {
		self.pools.update(self.width, self.height);
		if self.fade.tick() {
			self.rebuild_for(self.fade.target());
		}
	}

	/// Adopts new viewport dimensions, discarding all entities and any
	/// in-flight transition, and rebuilds the pools for the current mode.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		let mode = self.observed_mode();
		self.fade.cancel(mode);
		self.rebuild_for(mode);
	}

	fn rebuild_for(&mut self, mode: Mode) {
		self.mode = mode;
		self.theme = Theme::for_mode(mode);
		self.pools
			.initialize(&self.theme, self.width, self.height, &mut self.rng);
	}
}
