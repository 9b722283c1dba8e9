//! Cross-fade transition between display modes.
//!
//! A mode switch never swaps scenes instantly: the frame loop advances a
//! progress scalar a fixed step per frame, the pools are rebuilt for the new
//! mode once the fade-out completes, and the new scene fades back in. The
//! fade toward light mode uses a smaller step; its denser visual field needs
//! the slower cross-fade to avoid a visible pop.

use super::theme::Mode;

/// Lifecycle of a cross-fade.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FadePhase {
	Idle,
	FadingOut,
	FadingIn,
}

/// Per-frame progress step when fading toward dark mode.
const DARK_FADE_STEP: f64 = 0.02;
/// Per-frame progress step when fading toward light mode.
const LIGHT_FADE_STEP: f64 = 0.012;

/// Multi-frame cross-fade driven by the frame loop.
///
/// At most one cross-fade is active at a time. Requesting a new target while
/// one is in flight restarts the fade toward the new target from scratch.
#[derive(Clone, Debug)]
pub struct CrossFade {
	phase: FadePhase,
	progress: f64,
	target: Mode,
}

impl CrossFade {
	/// An idle machine settled on `mode`.
	pub fn idle(mode: Mode) -> Self {
		Self {
			phase: FadePhase::Idle,
			progress: 0.0,
			target: mode,
		}
	}

	/// Starts (or restarts) a fade toward `target`.
	pub fn begin(&mut self, target: Mode) {
		self.phase = FadePhase::FadingOut;
		self.progress = 0.0;
		self.target = target;
	}

	/// Drops any in-flight fade, settling on `mode`.
	pub fn cancel(&mut self, mode: Mode) {
		self.phase = FadePhase::Idle;
		self.progress = 0.0;
		self.target = mode;
	}

	pub fn phase(&self) -> FadePhase {
		self.phase
	}

	pub fn target(&self) -> Mode {
		self.target
	}

	pub fn is_active(&self) -> bool {
		self.phase != FadePhase::Idle
	}

	fn step(&self) -> f64 {
		match self.target {
			Mode::Dark => DARK_FADE_STEP,
			Mode::Light => LIGHT_FADE_STEP,
		}
	}

	/// Advances the fade by one frame.
	///
	/// Returns `true` on the single tick where the fade-out has completed
	/// and the caller must swap the pools to the target mode.
	pub fn tick(&mut self) -> bool {
		match self.phase {
			FadePhase::Idle => false,
			FadePhase::FadingOut => {
				self.progress += self.step();
				if self.progress >= 1.0 {
					self.progress = 1.0;
					self.phase = FadePhase::FadingIn;
					true
				} else {
					false
				}
			}
			FadePhase::FadingIn => {
				self.progress -= self.step();
				if self.progress <= 0.0 {
					self.progress = 0.0;
					self.phase = FadePhase::Idle;
				}
				false
			}
		}
	}

	/// Frame-global alpha multiplier for entity drawing.
	///
	/// While a fade is active this is a tent function of progress, dipping
	/// to zero at the halfway point; exactly 1.0 when idle.
	pub fn global_alpha(&self) -> f64 {
		match self.phase {
			FadePhase::Idle => 1.0,
			FadePhase::FadingOut | FadePhase::FadingIn => {
				if self.progress < 0.5 {
					1.0 - self.progress * 2.0
				} else {
					(self.progress - 0.5) * 2.0
				}
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn fading_toward_dark_swaps_after_fifty_ticks() {
		let mut fade = CrossFade::idle(Mode::Light);
		fade.begin(Mode::Dark);
		for _ in 0..49 {
			assert!(!fade.tick());
		}
		assert!(fade.tick(), "swap expected on the 50th tick");
		assert_eq!(fade.phase(), FadePhase::FadingIn);
	}

	#[test]
	fn fading_toward_light_swaps_after_eighty_four_ticks() {
		let mut fade = CrossFade::idle(Mode::Dark);
		fade.begin(Mode::Light);
		for _ in 0..83 {
			assert!(!fade.tick());
		}
		assert!(fade.tick(), "swap expected on the 84th tick");
	}

	#[test]
	fn full_cycle_returns_to_idle_at_full_alpha() {
		let mut fade = CrossFade::idle(Mode::Dark);
		fade.begin(Mode::Light);
		let mut swaps = 0;
		for _ in 0..1_000 {
			if fade.tick() {
				swaps += 1;
			}
			if !fade.is_active() {
				break;
			}
		}
		assert_eq!(swaps, 1);
		assert_eq!(fade.phase(), FadePhase::Idle);
		assert_eq!(fade.global_alpha(), 1.0);
	}

	#[test]
	fn alpha_dips_to_zero_at_the_halfway_point() {
		let mut fade = CrossFade::idle(Mode::Light);
		fade.begin(Mode::Dark);
		// 25 ticks of 0.02 puts progress at 0.5.
		for _ in 0..25 {
			fade.tick();
		}
		assert!(fade.global_alpha().abs() < 1e-9);

		// A quarter of the way in, alpha is one half.
		let mut fade = CrossFade::idle(Mode::Light);
		fade.begin(Mode::Dark);
		for _ in 0..12 {
			fade.tick();
		}
		assert!((fade.global_alpha() - (1.0 - 0.24 * 2.0)).abs() < 1e-9);
	}

	#[test]
	fn retargeting_restarts_the_fade() {
		let mut fade = CrossFade::idle(Mode::Dark);
		fade.begin(Mode::Light);
		for _ in 0..40 {
			fade.tick();
		}
		fade.begin(Mode::Dark);
		assert_eq!(fade.phase(), FadePhase::FadingOut);
		assert_eq!(fade.target(), Mode::Dark);
		assert_eq!(fade.global_alpha(), 1.0);
	}

	#[test]
	fn idle_machine_does_not_advance() {
		let mut fade = CrossFade::idle(Mode::Dark);
		assert!(!fade.tick());
		assert_eq!(fade.phase(), FadePhase::Idle);
		assert_eq!(fade.global_alpha(), 1.0);
	}
}
