// HTTP request handlers
use crate::application::page_service::PageError;
use crate::application::stats_repository::SourceError;
use crate::domain::downloads::{CountRecord, NamedSeries};
use crate::infrastructure::json_response::{accepts_brotli, json_response};
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/ppa", get(ppa_page))
        .route("/packages/:name", get(package_page))
        .route("/packages/:name/versions/:version", get(version_page))
        .route("/charts/daily", post(shape_daily))
        .route("/charts/grouped", post(shape_grouped))
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Archive overview: package list and daily downloads
pub async fn ppa_page(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    let result = state.page_service.ppa_page().await;
    respond(result, accepts_brotli(&headers)).await
}

pub async fn package_page(
    Path(name): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    let result = state.page_service.package_page(&name).await;
    respond(result, accepts_brotli(&headers)).await
}

pub async fn version_page(
    Path((name, version)): Path<(String, String)>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    let result = state.page_service.version_page(&name, &version).await;
    respond(result, accepts_brotli(&headers)).await
}

/// Shape raw daily records into a single plotted series
pub async fn shape_daily(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    Json(records): Json<Vec<CountRecord>>,
) -> Response {
    let result = state.shaper.shape_single(&records).map_err(PageError::from);
    respond(result, accepts_brotli(&headers)).await
}

/// Shape named record groups into aligned series on one time axis
pub async fn shape_grouped(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    Json(groups): Json<Vec<NamedSeries>>,
) -> Response {
    let result = state.shaper.shape_grouped(&groups).map_err(PageError::from);
    respond(result, accepts_brotli(&headers)).await
}

async fn respond<T: Serialize>(result: Result<T, PageError>, compress: bool) -> Response {
    let response = match result {
        Ok(data) => json_response(StatusCode::OK, &data, compress).await,
        Err(e) => {
            let status = error_status(&e);
            if status.is_server_error() {
                tracing::error!("Page request failed: {}", e);
            } else {
                tracing::warn!("Page request rejected: {}", e);
            }
            let body = ErrorBody {
                error: e.to_string(),
            };
            json_response(status, &body, compress).await
        }
    };

    match response {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

fn error_status(error: &PageError) -> StatusCode {
    match error {
        PageError::Source(SourceError::NotFound { .. }) => StatusCode::NOT_FOUND,
        PageError::Source(_) => StatusCode::BAD_GATEWAY,
        PageError::Date(_) => StatusCode::UNPROCESSABLE_ENTITY,
    }
}
