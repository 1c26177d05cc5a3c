//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};

use crate::chart::Figure;
use crate::dashboard::{Mark, SliderSpec};
use crate::model::SolowParams;
use crate::session::SessionSnapshot;

// ============================================
// SESSION DTOs
// ============================================

/// Parameter update request; all five values are required
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct UpdateRequest {
    /// Savings rate
    pub s: f64,
    /// Depreciation rate
    pub delta: f64,
    /// Population growth rate
    pub n: f64,
    /// Output elasticity of capital
    pub alpha: f64,
    /// Productivity
    pub z: f64,
}

impl From<UpdateRequest> for SolowParams {
    fn from(req: UpdateRequest) -> Self {
        SolowParams::new(req.s, req.delta, req.n, req.alpha, req.z)
    }
}

/// Session state with its rendered chart
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    pub session_id: String,
    pub params: SolowParams,
    pub figure: Figure,
}

impl From<SessionSnapshot> for SessionResponse {
    fn from(snapshot: SessionSnapshot) -> Self {
        Self {
            session_id: snapshot.id,
            params: snapshot.params,
            figure: snapshot.figure,
        }
    }
}

// ============================================
// CONTROL DTOs
// ============================================

/// Slider definition with its marks
#[derive(Debug, Serialize)]
pub struct ControlResponse {
    #[serde(flatten)]
    pub spec: SliderSpec,
    pub marks: Vec<Mark>,
}

impl From<&SliderSpec> for ControlResponse {
    fn from(spec: &SliderSpec) -> Self {
        Self {
            spec: *spec,
            marks: spec.marks(),
        }
    }
}

/// All dashboard controls in page order
#[derive(Debug, Serialize)]
pub struct ControlListResponse {
    pub controls: Vec<ControlResponse>,
}

/// Benchmark parameters
#[derive(Debug, Serialize)]
pub struct BenchmarkResponse {
    pub params: SolowParams,
}

// ============================================
// EXPORT DTOs
// ============================================

/// Export query parameters
#[derive(Debug, Deserialize)]
pub struct ExportParams {
    /// csv or json
    #[serde(default = "default_export_format")]
    pub format: String,
}

fn default_export_format() -> String {
    "csv".to_string()
}

// ============================================
// HEALTH DTOs
// ============================================

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// "healthy"
    pub status: String,
    /// Number of live sessions
    pub sessions: usize,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Crate version
    pub version: String,
}
