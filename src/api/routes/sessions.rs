//! Session Routes
//!
//! - POST /api/v1/sessions - Open a session, returns the initial chart
//! - GET /api/v1/sessions/:id - Current parameters and chart
//! - POST /api/v1/sessions/:id/update - Apply slider values, returns the new chart
//! - DELETE /api/v1/sessions/:id - Close a session

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::api::dto::{SessionResponse, UpdateRequest};
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::dashboard::Controls;
use crate::model::SolowParams;

/// POST /api/v1/sessions
pub async fn create_session(
    State(state): State<Arc<AppState>>,
) -> ApiResult<(StatusCode, Json<SessionResponse>)> {
    let snapshot = state.sessions.create().await?;
    Ok((StatusCode::CREATED, Json(snapshot.into())))
}

/// GET /api/v1/sessions/:id
pub async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<SessionResponse>> {
    let snapshot = state.sessions.figure(&id).await?;
    Ok(Json(snapshot.into()))
}

/// POST /api/v1/sessions/:id/update
///
/// Values must lie within the slider ranges.
pub async fn update_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateRequest>,
) -> ApiResult<Json<SessionResponse>> {
    let params = SolowParams::from(req);
    Controls::check(&params)?;

    let snapshot = state.sessions.update(&id, params).await?;
    tracing::debug!(session_id = %id, "Session updated");
    Ok(Json(snapshot.into()))
}

/// DELETE /api/v1/sessions/:id
pub async fn delete_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.sessions.remove(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
