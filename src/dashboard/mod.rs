//! Dashboard
//!
//! The reactive part of the dashboard: slider definitions, the four fixed
//! chart series and the [`ViewController`] that turns parameter changes into
//! a fresh [`Figure`](crate::chart::Figure).
//!
//! ## Flow
//!
//! 1. A viewer gets its own controller, seeded with the benchmark parameters
//! 2. Every slider change calls [`ViewController::update`]
//! 3. The returned figure replaces the displayed one

mod controller;
mod controls;
mod series;

pub use controller::{ViewController, TRANSITION_DURATION_MS};
pub use controls::{ControlError, Controls, Mark, Parameter, SliderSpec};
pub use series::Series;
