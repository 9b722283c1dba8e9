//! Ambient animated background component.
//!
//! Paints a decorative particle animation on a fullscreen canvas behind the
//! page content:
//! - Dark mode: small white specks drifting over a deep slate background
//! - Light mode: soft pastel orbs and pulsing laser streaks over a pink
//!   gradient
//! - Mode switches cross-fade between the two scenes over many frames
//!
//! The component owns all animation state with an explicit lifecycle: the
//! pools are created on mount, rebuilt on resize or mode swap, and the frame
//! loop is cancelled on unmount.
//!
//! # Example
//!
//! ```ignore
//! use ambient_canvas::{AmbientBackgroundCanvas, Mode};
//!
//! let mode = RwSignal::new(Mode::Dark);
//!
//! view! { <AmbientBackgroundCanvas mode=mode /> }
//! ```

mod component;
mod particles;
mod render;
mod state;
pub mod theme;
mod transition;

pub use component::AmbientBackgroundCanvas;
pub use theme::{Mode, Theme};
pub use transition::FadePhase;
