//! Entity pools for the ambient scenes.
//!
//! Three entity kinds exist: white specks (dark scene), pastel orbs and
//! laser streaks (light scene). Exactly one scene's pools are populated at
//! a time; everything is rebuilt wholesale on a mode swap or resize. All
//! state here is pure data advanced by `update` once per frame.

use super::theme::{LaserStyle, OrbStyle, ParticleStyle, Theme};

/// Cheap sine-hash uniform sampler in [0, 1).
///
/// Deterministic for a given seed, which keeps pool construction testable;
/// the component layer seeds it from `js_sys::Math::random()` so every
/// mounted instance gets a fresh look.
#[derive(Clone, Debug)]
pub struct UniformSource {
	cursor: f64,
}

impl UniformSource {
	pub fn new(seed: f64) -> Self {
		Self { cursor: seed }
	}

	fn next(&mut self) -> f64 {
		self.cursor += 1.0;
		let x = (self.cursor * 12.9898 + self.cursor * 78.233).sin() * 43758.5453;
		x - x.floor()
	}

	/// Uniform in [min, max).
	fn range(&mut self, min: f64, max: f64) -> f64 {
		min + self.next() * (max - min)
	}

	/// Uniform in [-spread, spread).
	fn spread(&mut self, spread: f64) -> f64 {
		self.range(-spread, spread)
	}
}

/// Mirror-reflects `pos` back inside [0, max], flipping `vel` on a bounce.
fn reflect(pos: &mut f64, vel: &mut f64, max: f64) {
	if *pos < 0.0 {
		*pos = -*pos;
		*vel = -*vel;
	} else if *pos > max {
		*pos = 2.0 * max - *pos;
		*vel = -*vel;
	}
}

/// A small white speck drifting across the dark scene.
#[derive(Clone, Debug)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub size: f64,
	pub vx: f64,
	pub vy: f64,
	pub opacity: f64,
}

impl Particle {
	fn spawn(style: &ParticleStyle, width: f64, height: f64, rng: &mut UniformSource) -> Self {
		Self {
			x: rng.range(0.0, width),
			y: rng.range(0.0, height),
			size: rng.range(style.size_min, style.size_max),
			vx: rng.spread(style.speed),
			vy: rng.spread(style.speed),
			opacity: rng.range(style.opacity_min, style.opacity_max),
		}
	}

	fn update(&mut self, width: f64, height: f64) {
		self.x += self.vx;
		self.y += self.vy;
		reflect(&mut self.x, &mut self.vx, width);
		reflect(&mut self.y, &mut self.vy, height);
	}
}

/// A soft gradient orb in the light scene.
///
/// Wraps toroidally: once the center is more than one radius past an edge
/// it re-enters from the opposite edge, offset by the radius.
#[derive(Clone, Debug)]
pub struct Orb {
	pub x: f64,
	pub y: f64,
	pub size: f64,
	pub vx: f64,
	pub vy: f64,
	pub opacity: f64,
	pub hue: f64,
}

impl Orb {
	fn spawn(style: &OrbStyle, width: f64, height: f64, rng: &mut UniformSource) -> Self {
		Self {
			x: rng.range(0.0, width),
			y: rng.range(0.0, height),
			size: rng.range(style.size_min, style.size_max),
			vx: rng.spread(style.speed),
			vy: rng.spread(style.speed),
			opacity: rng.range(style.opacity_min, style.opacity_max),
			hue: rng.range(style.hue_min, style.hue_max),
		}
	}

	fn update(&mut self, width: f64, height: f64) {
		self.x += self.vx;
		self.y += self.vy;

		if self.x > width + self.size {
			self.x = -self.size;
		} else if self.x < -self.size {
			self.x = width + self.size;
		}
		if self.y > height + self.size {
			self.y = -self.size;
		} else if self.y < -self.size {
			self.y = height + self.size;
		}
	}
}

/// A pulsing laser streak whose endpoints wander independently.
#[derive(Clone, Debug)]
pub struct LaserLine {
	pub x1: f64,
	pub y1: f64,
	pub x2: f64,
	pub y2: f64,
	pub vx1: f64,
	pub vy1: f64,
	pub vx2: f64,
	pub vy2: f64,
	pub width: f64,
	pub opacity: f64,
	pub phase: f64,
	pub pulse_speed: f64,
}

impl LaserLine {
	fn spawn(style: &LaserStyle, width: f64, height: f64, rng: &mut UniformSource) -> Self {
		Self {
			x1: rng.range(0.0, width),
			y1: rng.range(0.0, height),
			x2: rng.range(0.0, width),
			y2: rng.range(0.0, height),
			vx1: rng.spread(style.speed),
			vy1: rng.spread(style.speed),
			vx2: rng.spread(style.speed),
			vy2: rng.spread(style.speed),
			width: rng.range(style.width_min, style.width_max),
			opacity: rng.range(style.opacity_min, style.opacity_max),
			phase: 0.0,
			pulse_speed: rng.range(style.pulse_speed_min, style.pulse_speed_max),
		}
	}

	fn update(&mut self, width: f64, height: f64) {
		self.x1 += self.vx1;
		self.y1 += self.vy1;
		self.x2 += self.vx2;
		self.y2 += self.vy2;
		self.phase += self.pulse_speed;

		reflect(&mut self.x1, &mut self.vx1, width);
		reflect(&mut self.y1, &mut self.vy1, height);
		reflect(&mut self.x2, &mut self.vx2, width);
		reflect(&mut self.y2, &mut self.vy2, height);
	}

	/// Base opacity modulated by the sinusoidal pulse.
	pub fn pulsed_opacity(&self) -> f64 {
		self.opacity * (0.5 + 0.5 * self.phase.sin())
	}
}

/// Holds the active entity set for the current display mode.
#[derive(Clone, Debug, Default)]
pub struct ParticlePools {
	pub particles: Vec<Particle>,
	pub orbs: Vec<Orb>,
	pub lasers: Vec<LaserLine>,
}

impl ParticlePools {
	pub fn new() -> Self {
		Self::default()
	}

	/// Discards all entities and repopulates the pools for `theme`.
	///
	/// Calling this twice with the same arguments yields a visually
	/// equivalent, re-randomized set.
	pub fn initialize(&mut self, theme: &Theme, width: f64, height: f64, rng: &mut UniformSource) {
		self.particles.clear();
		self.orbs.clear();
		self.lasers.clear();

		for _ in 0..theme.particles.count {
			self.particles
				.push(Particle::spawn(&theme.particles, width, height, rng));
		}
		for _ in 0..theme.orbs.count {
			self.orbs.push(Orb::spawn(&theme.orbs, width, height, rng));
		}
		for _ in 0..theme.lasers.count {
			self.lasers
				.push(LaserLine::spawn(&theme.lasers, width, height, rng));
		}
	}

	/// Advances every active entity by one frame tick.
	pub fn update(&mut self, width: f64, height: f64) {
		for p in &mut self.particles {
			p.update(width, height);
		}
		for o in &mut self.orbs {
			o.update(width, height);
		}
		for l in &mut self.lasers {
			l.update(width, height);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::ambient_background::theme::Mode;

	const W: f64 = 1280.0;
	const H: f64 = 720.0;

	fn pools_for(mode: Mode, seed: f64) -> ParticlePools {
		let theme = Theme::for_mode(mode);
		let mut rng = UniformSource::new(seed);
		let mut pools = ParticlePools::new();
		pools.initialize(&theme, W, H, &mut rng);
		pools
	}

	#[test]
	fn dark_pools_hold_exactly_twenty_specks() {
		let pools = pools_for(Mode::Dark, 7.0);
		assert_eq!(pools.particles.len(), 20);
		assert_eq!(pools.orbs.len(), 0);
		assert_eq!(pools.lasers.len(), 0);
	}

	#[test]
	fn light_pools_hold_orbs_and_lasers() {
		let pools = pools_for(Mode::Light, 7.0);
		assert_eq!(pools.particles.len(), 0);
		assert_eq!(pools.orbs.len(), 8);
		assert_eq!(pools.lasers.len(), 12);
	}

	#[test]
	fn initialize_replaces_the_previous_scene() {
		let mut rng = UniformSource::new(11.0);
		let mut pools = ParticlePools::new();
		pools.initialize(&Theme::dark(), W, H, &mut rng);
		pools.initialize(&Theme::light(), W, H, &mut rng);
		assert_eq!(pools.particles.len(), 0);
		assert_eq!(pools.orbs.len(), 8);
		assert_eq!(pools.lasers.len(), 12);
	}

	#[test]
	fn spawned_attributes_stay_in_documented_ranges() {
		for seed in [1.0, 42.0, 9001.0] {
			let pools = pools_for(Mode::Dark, seed);
			for p in &pools.particles {
				assert!((1.0..3.0).contains(&p.size));
				assert!((-0.5..0.5).contains(&p.vx));
				assert!((-0.5..0.5).contains(&p.vy));
				assert!((0.3..0.8).contains(&p.opacity));
			}

			let pools = pools_for(Mode::Light, seed);
			for o in &pools.orbs {
				assert!((40.0..120.0).contains(&o.size));
				assert!((-0.25..0.25).contains(&o.vx));
				assert!((0.05..0.15).contains(&o.opacity));
				assert!((320.0..350.0).contains(&o.hue));
			}
			for l in &pools.lasers {
				assert!((-1.0..1.0).contains(&l.vx1));
				assert!((-1.0..1.0).contains(&l.vy2));
				assert!((1.0..4.0).contains(&l.width));
				assert!((0.1..0.4).contains(&l.opacity));
				assert!((0.02..0.07).contains(&l.pulse_speed));
				assert_eq!(l.phase, 0.0);
			}
		}
	}

	#[test]
	fn specks_never_leave_the_viewport() {
		let mut pools = pools_for(Mode::Dark, 3.0);
		for _ in 0..10_000 {
			pools.update(W, H);
			for p in &pools.particles {
				assert!((0.0..=W).contains(&p.x), "x out of bounds: {}", p.x);
				assert!((0.0..=H).contains(&p.y), "y out of bounds: {}", p.y);
			}
		}
	}

	#[test]
	fn laser_endpoints_never_leave_the_viewport() {
		let mut pools = pools_for(Mode::Light, 3.0);
		for _ in 0..10_000 {
			pools.update(W, H);
			for l in &pools.lasers {
				for coord in [l.x1, l.x2] {
					assert!((0.0..=W).contains(&coord));
				}
				for coord in [l.y1, l.y2] {
					assert!((0.0..=H).contains(&coord));
				}
			}
		}
	}

	#[test]
	fn orbs_wrap_to_the_opposite_edge() {
		let mut orb = Orb {
			x: W + 50.0 + 0.5,
			y: H / 2.0,
			size: 50.0,
			vx: 0.2,
			vy: 0.0,
			opacity: 0.1,
			hue: 330.0,
		};
		orb.update(W, H);
		assert_eq!(orb.x, -50.0);

		// And back out the left side.
		orb.vx = -0.2;
		orb.x = -50.0 - 0.5;
		orb.update(W, H);
		assert_eq!(orb.x, W + 50.0);
	}

	#[test]
	fn orbs_stay_near_the_viewport_after_wrapping() {
		let mut pools = pools_for(Mode::Light, 5.0);
		for _ in 0..10_000 {
			pools.update(W, H);
			for o in &pools.orbs {
				assert!(o.x >= -o.size - 0.25 && o.x <= W + o.size + 0.25);
				assert!(o.y >= -o.size - 0.25 && o.y <= H + o.size + 0.25);
			}
		}
	}

	#[test]
	fn laser_phase_accumulates_per_tick() {
		let mut pools = pools_for(Mode::Light, 13.0);
		let speeds: Vec<f64> = pools.lasers.iter().map(|l| l.pulse_speed).collect();
		for _ in 0..100 {
			pools.update(W, H);
		}
		for (l, speed) in pools.lasers.iter().zip(&speeds) {
			assert!((l.phase - 100.0 * speed).abs() < 1e-9);
		}
	}
}
