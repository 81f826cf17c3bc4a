use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use sqlx::SqlitePool;
use tracing::warn;

use crate::services::signup_service::{self, SignupBody, SignupDetailView};

fn validation_failed() -> (StatusCode, Json<Value>) {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "errors": ["validation errors"] })),
    )
}

pub async fn list_signups_handler(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<SignupDetailView>>, (StatusCode, Json<Value>)> {
    signup_service::list_signups(&pool).await.map(Json).map_err(|e| {
        warn!("signup list failed: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "internal error" })),
        )
    })
}

pub async fn create_signup_handler(
    State(pool): State<SqlitePool>,
    body: Result<Json<SignupBody>, JsonRejection>,
) -> Result<(StatusCode, Json<SignupDetailView>), (StatusCode, Json<Value>)> {
    let Ok(Json(body)) = body else {
        return Err(validation_failed());
    };

    match signup_service::create_signup(&pool, body).await {
        Ok(view) => Ok((StatusCode::CREATED, Json(view))),
        Err(e) => {
            warn!("signup create rejected: {}", e);
            Err(validation_failed())
        }
    }
}
