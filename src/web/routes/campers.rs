use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use sqlx::SqlitePool;
use tracing::warn;

use crate::services::camper_service::{self, CamperBody, CamperDetailView, CamperSummaryView};
use crate::services::error::ServiceError;

fn validation_failed() -> (StatusCode, Json<Value>) {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "errors": ["validation errors"] })),
    )
}

fn camper_not_found() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Camper not found" })),
    )
}

fn internal_error() -> (StatusCode, Json<Value>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "internal error" })),
    )
}

pub async fn list_campers_handler(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<CamperSummaryView>>, (StatusCode, Json<Value>)> {
    camper_service::list_campers(&pool).await.map(Json).map_err(|e| {
        warn!("camper list failed: {}", e);
        internal_error()
    })
}

pub async fn create_camper_handler(
    State(pool): State<SqlitePool>,
    body: Result<Json<CamperBody>, JsonRejection>,
) -> Result<(StatusCode, Json<CamperDetailView>), (StatusCode, Json<Value>)> {
    let Ok(Json(body)) = body else {
        return Err(validation_failed());
    };

    match camper_service::create_camper(&pool, body).await {
        Ok(view) => Ok((StatusCode::CREATED, Json(view))),
        Err(e) => {
            warn!("camper create rejected: {}", e);
            Err(validation_failed())
        }
    }
}

pub async fn camper_detail_handler(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<Json<CamperDetailView>, (StatusCode, Json<Value>)> {
    match camper_service::load_camper_detail(&pool, id).await {
        Ok(view) => Ok(Json(view)),
        Err(ServiceError::NotFound { .. }) => Err(camper_not_found()),
        Err(e) => {
            warn!(camper_id = id, "camper detail failed: {}", e);
            Err(internal_error())
        }
    }
}

pub async fn update_camper_handler(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
    body: Result<Json<CamperBody>, JsonRejection>,
) -> Result<(StatusCode, Json<CamperDetailView>), (StatusCode, Json<Value>)> {
    // A missing camper and an invalid payload are deliberately
    // indistinguishable here: both answer with the not-found body.
    let Ok(Json(body)) = body else {
        return Err(camper_not_found());
    };

    match camper_service::update_camper(&pool, id, body).await {
        Ok(view) => Ok((StatusCode::ACCEPTED, Json(view))),
        Err(e) => {
            warn!(camper_id = id, "camper update failed: {}", e);
            Err(camper_not_found())
        }
    }
}
