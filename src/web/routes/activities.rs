use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use sqlx::SqlitePool;
use tracing::warn;

use crate::services::activity_service::{self, ActivityDetailView, ActivitySummaryView};
use crate::services::error::ServiceError;

fn activity_not_found() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Activity not found" })),
    )
}

fn internal_error() -> (StatusCode, Json<Value>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "internal error" })),
    )
}

pub async fn list_activities_handler(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<ActivitySummaryView>>, (StatusCode, Json<Value>)> {
    activity_service::list_activities(&pool)
        .await
        .map(Json)
        .map_err(|e| {
            warn!("activity list failed: {}", e);
            internal_error()
        })
}

pub async fn activity_detail_handler(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<Json<ActivityDetailView>, (StatusCode, Json<Value>)> {
    match activity_service::load_activity_detail(&pool, id).await {
        Ok(view) => Ok(Json(view)),
        Err(ServiceError::NotFound { .. }) => Err(activity_not_found()),
        Err(e) => {
            warn!(activity_id = id, "activity detail failed: {}", e);
            Err(internal_error())
        }
    }
}

pub async fn delete_activity_handler(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<StatusCode, (StatusCode, Json<Value>)> {
    match activity_service::delete_activity(&pool, id).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(ServiceError::NotFound { .. }) => Err(activity_not_found()),
        Err(e) => {
            warn!(activity_id = id, "activity delete failed: {}", e);
            Err(internal_error())
        }
    }
}
