//! Export Routes
//!
//! Curve download for offline analysis.
//!
//! - GET /api/v1/sessions/:id/export?format=csv|json

use axum::{
    body::Body,
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use std::sync::Arc;

use crate::api::dto::ExportParams;
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::chart::Figure;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    fn parse(s: &str) -> ApiResult<Self> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            other => Err(ApiError::Validation(format!(
                "Unsupported export format '{}', expected csv or json",
                other
            ))),
        }
    }

    fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv",
            ExportFormat::Json => "application/json",
        }
    }

    fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    fn render(&self, figure: &Figure) -> ApiResult<String> {
        match self {
            ExportFormat::Csv => Ok(figure.to_csv()?),
            ExportFormat::Json => serde_json::to_string_pretty(figure)
                .map_err(|e| ApiError::Internal(format!("Failed to serialize figure: {}", e))),
        }
    }
}

/// GET /api/v1/sessions/:id/export
///
/// Export the session's current curves as an attachment.
pub async fn export_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(params): Query<ExportParams>,
) -> ApiResult<Response> {
    let format = ExportFormat::parse(&params.format)?;
    let snapshot = state.sessions.figure(&id).await?;
    let body = format.render(&snapshot.figure)?;

    let filename = format!(
        "solow_{}.{}",
        Utc::now().format("%Y%m%d_%H%M%S"),
        format.extension()
    );

    tracing::info!(session_id = %id, format = format.extension(), "Exported curves");

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, format.content_type().to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        Body::from(body),
    )
        .into_response())
}
