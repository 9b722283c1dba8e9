//! Visual styling for the ambient background.
//!
//! Each display mode carries a complete [`Theme`]: a background fill plus the
//! ranges every entity attribute is drawn from at pool initialization. The
//! pools sample concrete values; nothing here touches the canvas.

use serde::{Deserialize, Serialize};

/// Display mode selecting which scene the background renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
	/// Deep slate background with drifting white specks.
	Dark,
	/// Pastel pink gradient with soft orbs and pulsing laser streaks.
	Light,
}

impl Mode {
	/// The opposite mode.
	pub fn toggled(self) -> Self {
		match self {
			Mode::Dark => Mode::Light,
			Mode::Light => Mode::Dark,
		}
	}

	/// Lowercase name, suitable for `data-theme` attributes.
	pub fn as_str(self) -> &'static str {
		match self {
			Mode::Dark => "dark",
			Mode::Light => "light",
		}
	}
}

/// RGBA color representation.
#[derive(Clone, Copy, Debug)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Background fill configuration.
#[derive(Clone, Debug)]
pub struct BackgroundStyle {
	/// Solid fill used when `use_gradient` is false.
	pub color: Color,
	/// Diagonal gradient stops as (offset, color) pairs.
	pub stops: Vec<(f64, Color)>,
	/// Whether to paint the diagonal gradient instead of the solid fill.
	pub use_gradient: bool,
}

/// Style ranges for the dark-scene specks.
#[derive(Clone, Debug)]
pub struct ParticleStyle {
	/// Number of specks in the pool.
	pub count: usize,
	/// Fill color; opacity is per-particle.
	pub color: Color,
	pub size_min: f64,
	pub size_max: f64,
	/// Velocity components are drawn from [-speed, speed).
	pub speed: f64,
	pub opacity_min: f64,
	pub opacity_max: f64,
}

/// Style ranges for the light-scene orbs.
#[derive(Clone, Debug)]
pub struct OrbStyle {
	pub count: usize,
	pub size_min: f64,
	pub size_max: f64,
	/// Velocity components are drawn from [-speed, speed).
	pub speed: f64,
	pub opacity_min: f64,
	pub opacity_max: f64,
	/// Hue range in degrees (pinkish band).
	pub hue_min: f64,
	pub hue_max: f64,
}

/// Style ranges for the light-scene laser streaks.
#[derive(Clone, Debug)]
pub struct LaserStyle {
	pub count: usize,
	/// Gradient color at both endpoints.
	pub color: Color,
	/// Brighter gradient color at the midpoint.
	pub color_mid: Color,
	/// Shadow color for the bloom pass.
	pub glow_color: Color,
	/// Shadow blur radius for the bloom pass, in pixels.
	pub glow_blur: f64,
	/// Endpoint velocity components are drawn from [-speed, speed).
	pub speed: f64,
	pub width_min: f64,
	pub width_max: f64,
	pub opacity_min: f64,
	pub opacity_max: f64,
	pub pulse_speed_min: f64,
	pub pulse_speed_max: f64,
}

/// Complete visual theme for one display mode.
#[derive(Clone, Debug)]
pub struct Theme {
	pub mode: Mode,
	pub background: BackgroundStyle,
	pub particles: ParticleStyle,
	pub orbs: OrbStyle,
	pub lasers: LaserStyle,
}

impl Theme {
	/// Night scene: solid deep slate behind small drifting white specks.
	pub fn dark() -> Self {
		Self {
			mode: Mode::Dark,
			background: BackgroundStyle {
				color: Color::rgb(15, 23, 42),
				stops: Vec::new(),
				use_gradient: false,
			},
			particles: ParticleStyle {
				count: 20,
				color: Color::rgb(255, 255, 255),
				size_min: 1.0,
				size_max: 3.0,
				speed: 0.5,
				opacity_min: 0.3,
				opacity_max: 0.8,
			},
			orbs: OrbStyle {
				count: 0,
				size_min: 0.0,
				size_max: 0.0,
				speed: 0.0,
				opacity_min: 0.0,
				opacity_max: 0.0,
				hue_min: 0.0,
				hue_max: 0.0,
			},
			lasers: LaserStyle {
				count: 0,
				color: Color::rgba(0, 0, 0, 0.0),
				color_mid: Color::rgba(0, 0, 0, 0.0),
				glow_color: Color::rgba(0, 0, 0, 0.0),
				glow_blur: 0.0,
				speed: 0.0,
				width_min: 0.0,
				width_max: 0.0,
				opacity_min: 0.0,
				opacity_max: 0.0,
				pulse_speed_min: 0.0,
				pulse_speed_max: 0.0,
			},
		}
	}

	/// Day scene: soft pink pastel gradient behind gradient orbs and
	/// pulsing laser streaks.
	pub fn light() -> Self {
		Self {
			mode: Mode::Light,
			background: BackgroundStyle {
				color: Color::rgb(251, 239, 251),
				stops: vec![
					(0.0, Color::rgb(251, 239, 251)),
					(0.3, Color::rgb(248, 225, 244)),
					(0.7, Color::rgb(247, 230, 248)),
					(1.0, Color::rgb(251, 239, 251)),
				],
				use_gradient: true,
			},
			particles: ParticleStyle {
				count: 0,
				color: Color::rgba(0, 0, 0, 0.0),
				size_min: 0.0,
				size_max: 0.0,
				speed: 0.0,
				opacity_min: 0.0,
				opacity_max: 0.0,
			},
			orbs: OrbStyle {
				count: 8,
				size_min: 40.0,
				size_max: 120.0,
				speed: 0.25,
				opacity_min: 0.05,
				opacity_max: 0.15,
				hue_min: 320.0,
				hue_max: 350.0,
			},
			lasers: LaserStyle {
				count: 12,
				color: Color::rgb(255, 182, 193),
				color_mid: Color::rgb(255, 192, 203),
				glow_color: Color::rgba(255, 182, 193, 0.8),
				glow_blur: 10.0,
				speed: 1.0,
				width_min: 1.0,
				width_max: 4.0,
				opacity_min: 0.1,
				opacity_max: 0.4,
				pulse_speed_min: 0.02,
				pulse_speed_max: 0.07,
			},
		}
	}

	/// Theme for a display mode.
	pub fn for_mode(mode: Mode) -> Self {
		match mode {
			Mode::Dark => Self::dark(),
			Mode::Light => Self::light(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn mode_toggles_between_the_two_scenes() {
		assert_eq!(Mode::Dark.toggled(), Mode::Light);
		assert_eq!(Mode::Light.toggled(), Mode::Dark);
	}

	#[test]
	fn css_colors_format_hex_or_rgba() {
		assert_eq!(Color::rgb(15, 23, 42).to_css(), "#0f172a");
		assert_eq!(
			Color::rgba(255, 182, 193, 0.8).to_css(),
			"rgba(255, 182, 193, 0.8)"
		);
	}

	#[test]
	fn light_background_has_four_gradient_stops() {
		let theme = Theme::light();
		assert!(theme.background.use_gradient);
		assert_eq!(theme.background.stops.len(), 4);
		assert_eq!(theme.background.stops[0].0, 0.0);
		assert_eq!(theme.background.stops[3].0, 1.0);
	}
}
