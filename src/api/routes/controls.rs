//! Control Routes
//!
//! - GET /api/v1/controls - Slider definitions
//! - GET /api/v1/benchmark - Benchmark parameters

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{BenchmarkResponse, ControlListResponse, ControlResponse};
use crate::api::state::AppState;
use crate::dashboard::Controls;

/// GET /api/v1/controls
pub async fn list_controls() -> Json<ControlListResponse> {
    Json(ControlListResponse {
        controls: Controls::sliders().iter().map(ControlResponse::from).collect(),
    })
}

/// GET /api/v1/benchmark
pub async fn get_benchmark(State(state): State<Arc<AppState>>) -> Json<BenchmarkResponse> {
    Json(BenchmarkResponse {
        params: *state.sessions.benchmark(),
    })
}
