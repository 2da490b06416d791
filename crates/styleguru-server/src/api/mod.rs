mod recommendations;

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use styleguru_catalog::{Catalog, CatalogError};
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::middleware::request_id;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn Catalog>,
}

/// Wire-level error envelope: `{ "error": "<message>" }`.
///
/// The front-end surfaces the `error` string directly, so validation messages
/// are written for end users and the internal variant never carries detail.
#[derive(Debug, Serialize)]
pub struct ApiError {
    error: String,
    #[serde(skip)]
    status: StatusCode,
}

#[derive(Debug, Serialize)]
struct HealthData {
    status: &'static str,
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            status: StatusCode::BAD_REQUEST,
        }
    }

    pub fn internal() -> Self {
        Self {
            error: "An unexpected internal server error occurred.".to_string(),
            status: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status, Json(self)).into_response()
    }
}

pub(super) fn map_catalog_error(request_id: &str, error: &CatalogError) -> ApiError {
    tracing::error!(request_id, error = %error, "recommendation lookup failed");
    ApiError::internal()
}

fn build_cors(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring unparseable allowed origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}

pub fn build_app(state: AppState, allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route(
            "/api/outfit-suggestions",
            post(recommendations::outfit_suggestions),
        )
        .route(
            "/api/eyewear-recommendations",
            post(recommendations::eyewear_recommendations),
        )
        .route(
            "/api/accessories-suggestions",
            post(recommendations::accessory_suggestions),
        )
        .route(
            "/api/product-suggestions",
            post(recommendations::product_suggestions),
        )
        .route("/api/diet-plan", post(recommendations::diet_plan))
        .route("/api/care-routine", post(recommendations::care_routine))
        .route("/api/workout-plan", post(recommendations::workout_plan))
        .layer(
            ServiceBuilder::new()
                .layer(build_cors(allowed_origins))
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health() -> Json<HealthData> {
    Json(HealthData { status: "ok" })
}
