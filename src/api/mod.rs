//! Solow Dashboard HTTP API
//!
//! HTTP layer for the dashboard, built with Axum.
//!
//! # Endpoints
//!
//! ## Page
//! - `GET /` - Interactive dashboard page
//!
//! ## Controls
//! - `GET /api/v1/controls` - Slider definitions with marks
//! - `GET /api/v1/benchmark` - Benchmark parameters
//!
//! ## Sessions
//! - `POST /api/v1/sessions` - Open a viewer session
//! - `GET /api/v1/sessions/:id` - Current parameters and chart
//! - `POST /api/v1/sessions/:id/update` - Apply slider values
//! - `DELETE /api/v1/sessions/:id` - Close a session
//! - `GET /api/v1/sessions/:id/export` - Download curves (csv or json)
//!
//! ## Health
//! - `GET /health/live` - Liveness check
//! - `GET /health/ready` - Readiness check
//! - `GET /health` - Full health status
//!
//! ## WebSocket
//! - `GET /ws` - Reactive updates over a single connection
//!
//! # Example
//!
//! ```rust,ignore
//! use solow_dashboard::api::{serve, AppState};
//! use solow_dashboard::config::Config;
//! use solow_dashboard::session::SessionStore;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let sessions = Arc::new(SessionStore::new(
//!         config.benchmark,
//!         config.sessions.to_session_config(),
//!     ));
//!
//!     let state = AppState::new(sessions, config.server.clone());
//!     serve(state, &config.server).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use crate::websocket::websocket_handler;

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // Control routes
        .route("/controls", get(routes::controls::list_controls))
        .route("/benchmark", get(routes::controls::get_benchmark))
        // Session routes
        .route("/sessions", post(routes::sessions::create_session))
        .route(
            "/sessions/:id",
            get(routes::sessions::get_session).delete(routes::sessions::delete_session),
        )
        .route("/sessions/:id/update", post(routes::sessions::update_session))
        .route("/sessions/:id/export", get(routes::export::export_session));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let cors = cors_layer(&state.config);
    let timeout = Duration::from_secs(state.config.request_timeout_secs);

    // Create shared state
    let shared_state = Arc::new(state);

    Router::new()
        .route("/", get(routes::page::index))
        .route("/ws", get(websocket_handler))
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TimeoutLayer::new(timeout))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(shared_state)
}

/// Permissive CORS unless explicit origins are configured
fn cors_layer(config: &ServerConfig) -> CorsLayer {
    if config.cors_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Start the API server
pub async fn serve(state: AppState, config: &ServerConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Solow dashboard listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Solow dashboard shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::dto::SessionResponse;
    use crate::model::SolowParams;
    use crate::session::{SessionConfig, SessionStore};
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        response::Response,
    };
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        create_test_app_with(SessionConfig::default())
    }

    fn create_test_app_with(config: SessionConfig) -> Router {
        let sessions = Arc::new(SessionStore::new(SolowParams::default(), config));
        build_router(AppState::new(sessions, ServerConfig::default()))
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<&str>) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header("Content-Type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        app.clone().oneshot(builder.body(body).unwrap()).await.unwrap()
    }

    async fn open_session(app: &Router) -> SessionResponse {
        let response = send(app, "POST", "/api/v1/sessions", None).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        serde_json::from_value(body_json(response).await).unwrap()
    }

    #[tokio::test]
    async fn test_health_live() {
        let app = create_test_app();
        let response = send(&app, "GET", "/health/live", None).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full() {
        let app = create_test_app();
        open_session(&app).await;

        let response = send(&app, "GET", "/health", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["sessions"], 1);
    }

    #[tokio::test]
    async fn test_readiness_when_full() {
        let app = create_test_app_with(SessionConfig {
            max_sessions: 1,
            ..Default::default()
        });
        assert_eq!(
            send(&app, "GET", "/health/ready", None).await.status(),
            StatusCode::OK
        );
        open_session(&app).await;
        assert_eq!(
            send(&app, "GET", "/health/ready", None).await.status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            send(&app, "POST", "/api/v1/sessions", None).await.status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[tokio::test]
    async fn test_index_page() {
        let app = create_test_app();
        let response = send(&app, "GET", "/", None).await;
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("Solow Model"));
        assert!(html.contains("Solow App"));
    }

    #[tokio::test]
    async fn test_controls() {
        let app = create_test_app();
        let response = send(&app, "GET", "/api/v1/controls", None).await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        let controls = json["controls"].as_array().unwrap();
        assert_eq!(controls.len(), 5);
        assert_eq!(controls[0]["id"], "s-slider");
        assert_eq!(controls[0]["parameter"], "s");
        assert_eq!(controls[4]["default"], 2.0);
        assert_eq!(controls[4]["marks"][8]["label"], "9");
    }

    #[tokio::test]
    async fn test_benchmark() {
        let app = create_test_app();
        let json = body_json(send(&app, "GET", "/api/v1/benchmark", None).await).await;
        assert_eq!(json["params"]["delta"], 0.1);
    }

    #[tokio::test]
    async fn test_create_session_returns_initial_figure() {
        let app = create_test_app();
        let session = open_session(&app).await;

        assert_eq!(session.params, SolowParams::default());
        assert_eq!(session.figure.data.len(), 4);
        assert_eq!(session.figure.layout.title.text, "Simulations");
        assert!(session.figure.layout.transition.is_none());
    }

    #[tokio::test]
    async fn test_update_session() {
        let app = create_test_app();
        let session = open_session(&app).await;

        let uri = format!("/api/v1/sessions/{}/update", session.session_id);
        let response = send(
            &app,
            "POST",
            &uri,
            Some(r#"{"s": 0.5, "delta": 0.2, "n": 0.09, "alpha": 0.7, "z": 9}"#),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let updated: SessionResponse = serde_json::from_value(body_json(response).await).unwrap();
        assert_eq!(updated.params, SolowParams::new(0.5, 0.2, 0.09, 0.7, 9.0));
        assert_eq!(updated.figure.layout.transition.unwrap().duration, 1000);

        let savings = updated.figure.trace("Savings").unwrap();
        assert!((savings.y[9] - 2.256).abs() < 1e-3);

        let benchmark = updated.figure.trace("Savings benchmark").unwrap();
        assert_eq!(benchmark, &session.figure.data[0]);
    }

    #[tokio::test]
    async fn test_update_does_not_leak_between_sessions() {
        let app = create_test_app();
        let a = open_session(&app).await;
        let b = open_session(&app).await;

        let uri = format!("/api/v1/sessions/{}/update", a.session_id);
        let body = r#"{"s": 0.9, "delta": 0.9, "n": 0.01, "alpha": 0.9, "z": 1}"#;
        assert_eq!(
            send(&app, "POST", &uri, Some(body)).await.status(),
            StatusCode::OK
        );

        let uri = format!("/api/v1/sessions/{}", b.session_id);
        let other: SessionResponse =
            serde_json::from_value(body_json(send(&app, "GET", &uri, None).await).await).unwrap();
        assert_eq!(other.params, SolowParams::default());
    }

    #[tokio::test]
    async fn test_update_out_of_range() {
        let app = create_test_app();
        let session = open_session(&app).await;

        let uri = format!("/api/v1/sessions/{}/update", session.session_id);
        let response = send(
            &app,
            "POST",
            &uri,
            Some(r#"{"s": 1.5, "delta": 0.2, "n": 0.09, "alpha": 0.7, "z": 9}"#),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_update_invalid_json() {
        let app = create_test_app();
        let session = open_session(&app).await;

        let uri = format!("/api/v1/sessions/{}/update", session.session_id);
        let response = send(&app, "POST", &uri, Some("not json")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_session() {
        let app = create_test_app();
        let response = send(&app, "GET", "/api/v1/sessions/missing", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "SESSION_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_delete_session() {
        let app = create_test_app();
        let session = open_session(&app).await;
        let uri = format!("/api/v1/sessions/{}", session.session_id);

        assert_eq!(
            send(&app, "DELETE", &uri, None).await.status(),
            StatusCode::NO_CONTENT
        );
        assert_eq!(
            send(&app, "GET", &uri, None).await.status(),
            StatusCode::NOT_FOUND
        );
    }

    #[tokio::test]
    async fn test_export_csv() {
        let app = create_test_app();
        let session = open_session(&app).await;

        let uri = format!("/api/v1/sessions/{}/export?format=csv", session.session_id);
        let response = send(&app, "GET", &uri, None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["content-type"], "text/csv");
        assert!(response.headers()["content-disposition"]
            .to_str()
            .unwrap()
            .starts_with("attachment"));

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let csv = String::from_utf8(bytes.to_vec()).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("k,Savings benchmark,Depreciation benchmark,Savings,Depreciation")
        );
        assert_eq!(lines.count(), 100);
    }

    #[tokio::test]
    async fn test_export_json() {
        let app = create_test_app();
        let session = open_session(&app).await;

        let uri = format!("/api/v1/sessions/{}/export?format=json", session.session_id);
        let response = send(&app, "GET", &uri, None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["content-type"], "application/json");
        assert!(response.headers()["content-disposition"]
            .to_str()
            .unwrap()
            .ends_with(".json\""));

        let json = body_json(response).await;
        assert_eq!(json["data"].as_array().unwrap().len(), 4);
        assert_eq!(json["layout"]["title"]["text"], "Simulations");
        assert_eq!(json["data"][3]["name"], "Depreciation");
    }

    #[tokio::test]
    async fn test_swept_session_is_replaced_by_a_new_one() {
        let sessions = Arc::new(SessionStore::new(
            SolowParams::default(),
            SessionConfig {
                idle_timeout: Duration::from_secs(1),
                ..Default::default()
            },
        ));
        let app = build_router(AppState::new(Arc::clone(&sessions), ServerConfig::default()));
        let stale = open_session(&app).await;
        assert_eq!(
            sessions
                .evict_idle(chrono::Utc::now() + chrono::Duration::seconds(60))
                .await,
            1
        );

        let body = r#"{"s": 0.5, "delta": 0.2, "n": 0.09, "alpha": 0.7, "z": 9}"#;
        let uri = format!("/api/v1/sessions/{}/update", stale.session_id);
        let response = send(&app, "POST", &uri, Some(body)).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"]["code"], "SESSION_NOT_FOUND");

        let fresh = open_session(&app).await;
        assert_ne!(fresh.session_id, stale.session_id);
        let uri = format!("/api/v1/sessions/{}/update", fresh.session_id);
        let response = send(&app, "POST", &uri, Some(body)).await;
        assert_eq!(response.status(), StatusCode::OK);
        let updated: SessionResponse = serde_json::from_value(body_json(response).await).unwrap();
        assert_eq!(updated.params, SolowParams::new(0.5, 0.2, 0.09, 0.7, 9.0));
    }

    #[tokio::test]
    async fn test_index_page_reopens_missing_session() {
        let app = create_test_app();
        let bytes = to_bytes(send(&app, "GET", "/", None).await.into_body(), usize::MAX)
            .await
            .unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("error.status = response.status"));
        assert!(html.contains("e.status !== 404"));
        assert!(html.contains("await openSession();"));
    }

    #[tokio::test]
    async fn test_export_unknown_format() {
        let app = create_test_app();
        let session = open_session(&app).await;

        let uri = format!("/api/v1/sessions/{}/export?format=xml", session.session_id);
        assert_eq!(
            send(&app, "GET", &uri, None).await.status(),
            StatusCode::BAD_REQUEST
        );
    }
}
