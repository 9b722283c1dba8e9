//! UI components.

pub mod ambient_background;
