//! Log endpoints
//!
//! ```text
//! POST   /api/v1/logs       {"recipeId":"1","dateOfEvent":"2021-01-01","notes":"delicious","rating":5}
//! GET    /api/v1/logs
//! GET    /api/v1/logs/{id}
//! PUT    /api/v1/logs/{id}
//! DELETE /api/v1/logs/{id}
//! ```

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::db::repos::{Log, LogFields, LogRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{ApiJson, ValidId};
use crate::http::server::AppState;
use crate::models::{Rating, RecordId};

/// Create/replace log request
///
/// `recipeId` may be a string or an integer; `rating` may be a number or a
/// numeric string.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogRequest {
    pub recipe_id: RecordId,
    pub date_of_event: NaiveDate,
    #[serde(default)]
    pub notes: String,
    pub rating: Rating,
}

impl From<LogRequest> for LogFields {
    fn from(req: LogRequest) -> Self {
        Self {
            recipe_id: req.recipe_id,
            date_of_event: req.date_of_event,
            notes: req.notes,
            rating: req.rating,
        }
    }
}

/// Log response
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LogResponse {
    pub id: String,
    pub recipe_id: String,
    pub date_of_event: String,
    pub notes: String,
    pub rating: String,
}

impl From<Log> for LogResponse {
    fn from(l: Log) -> Self {
        Self {
            id: l.id.to_string(),
            recipe_id: l.recipe_id.to_string(),
            date_of_event: l.date_of_event.format("%Y-%m-%d").to_string(),
            notes: l.notes,
            rating: l.rating,
        }
    }
}

/// GET /logs - list all logs
#[instrument(skip(state))]
async fn list_logs(State(state): State<Arc<AppState>>) -> Result<Json<Vec<LogResponse>>, ApiError> {
    let logs = LogRepo::new(&state.pool).find_all().await?;
    Ok(Json(logs.into_iter().map(LogResponse::from).collect()))
}

/// POST /logs - record cooking a recipe
#[instrument(skip(state, req), fields(recipe_id = %req.recipe_id))]
async fn create_log(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<LogRequest>,
) -> Result<(StatusCode, Json<LogResponse>), ApiError> {
    let log = LogRepo::new(&state.pool)
        .insert(&LogFields::from(req))
        .await?;

    tracing::info!(id = log.id, "log created");
    Ok((StatusCode::CREATED, Json(LogResponse::from(log))))
}

/// GET /logs/{id} - get a single log
#[instrument(skip(state), fields(id = %id))]
async fn get_log(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<LogResponse>, ApiError> {
    let log = LogRepo::new(&state.pool)
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("log", id))?;

    Ok(Json(LogResponse::from(log)))
}

/// PUT /logs/{id} - replace every field except the id
#[instrument(skip(state, req), fields(id = %id))]
async fn update_log(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
    ApiJson(req): ApiJson<LogRequest>,
) -> Result<Json<LogResponse>, ApiError> {
    let log = LogRepo::new(&state.pool)
        .update(id, &LogFields::from(req))
        .await?
        .ok_or_else(|| ApiError::not_found("log", id))?;

    Ok(Json(LogResponse::from(log)))
}

/// DELETE /logs/{id} - delete a log, returning it
#[instrument(skip(state), fields(id = %id))]
async fn delete_log(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<LogResponse>, ApiError> {
    let log = LogRepo::new(&state.pool)
        .delete(id)
        .await?
        .ok_or_else(|| ApiError::not_found("log", id))?;

    Ok(Json(LogResponse::from(log)))
}

/// Log routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/logs", get(list_logs).post(create_log))
        .route(
            "/logs/{id}",
            get(get_log).put(update_log).delete(delete_log),
        )
}
