//! # Solow Dashboard
//!
//! An interactive web dashboard for the Solow growth model. Five sliders
//! (savings rate, depreciation rate, population growth, output elasticity,
//! productivity) drive a chart that compares the savings curve and the
//! depreciation line of the current parameters against a fixed benchmark.
//!
//! ## Modules
//!
//! - [`model`]: Solow model parameters and closed-form curves
//! - [`chart`]: Plotly-compatible figure description and CSV export
//! - [`dashboard`]: Slider controls, chart series and the view controller
//! - [`session`]: Per-viewer dashboard state
//! - [`api`]: HTTP server with Axum
//! - [`websocket`]: Reactive updates over WebSocket
//!
//! ## Quick Start
//!
//! ```rust
//! use solow_dashboard::dashboard::ViewController;
//! use solow_dashboard::model::SolowParams;
//!
//! let mut controller = ViewController::new(SolowParams::default());
//!
//! // Initial chart: benchmark and current curves coincide
//! let figure = controller.figure();
//! assert_eq!(figure.data.len(), 4);
//!
//! // Move the sliders
//! let figure = controller.update(0.5, 0.2, 0.09, 0.7, 9.0);
//! assert_eq!(figure.layout.transition.map(|t| t.duration), Some(1000));
//! assert!((controller.current().savings(10.0) - 2.256).abs() < 1e-3);
//! ```

pub mod api;
pub mod chart;
pub mod config;
pub mod dashboard;
pub mod logging;
pub mod model;
pub mod session;
pub mod websocket;

// Re-export top-level types for convenience
pub use model::{Solow, SolowParams};

pub use chart::{CapitalAxis, ChartError, Figure, Layout, LineStyle, Trace};

pub use dashboard::{ControlError, Controls, Series, SliderSpec, ViewController};

pub use session::{SessionConfig, SessionError, SessionStore};

pub use api::{build_router, serve, ApiError, AppState};

pub use websocket::{websocket_handler, ClientMessage, ServerMessage};

pub use config::{Config, ConfigError, LoggingConfig, ServerConfig, SessionsConfig};
