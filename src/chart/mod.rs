//! Chart Description
//!
//! Renderer-agnostic chart types. A [`Figure`] serializes to the JSON shape
//! Plotly.js accepts directly (`{"data": [...], "layout": {...}}`), so the
//! dashboard page can hand it to `Plotly.react` unchanged.

mod axis;
mod figure;

pub use axis::CapitalAxis;
pub use figure::{AxisTitle, ChartError, Figure, Layout, LineStyle, Text, Trace, Transition};
