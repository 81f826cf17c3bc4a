use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::database::signup_repo;
use crate::models::SignupWithRelationsRow;
use crate::services::activity_service::ActivitySummaryView;
use crate::services::camper_service::CamperSummaryView;
use crate::services::error::ServiceError;

const MIN_HOUR: i64 = 0;
const MAX_HOUR: i64 = 23;

#[derive(Debug, Deserialize)]
pub struct SignupBody {
    pub camper_id: Option<i64>,
    pub activity_id: Option<i64>,
    pub time: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SignupDetailView {
    pub id: i64,
    pub time: i64,
    pub camper_id: i64,
    pub activity_id: i64,
    pub camper: CamperSummaryView,
    pub activity: ActivitySummaryView,
}

fn detail_view(row: SignupWithRelationsRow) -> SignupDetailView {
    SignupDetailView {
        id: row.id,
        time: row.time,
        camper_id: row.camper_id,
        activity_id: row.activity_id,
        camper: CamperSummaryView {
            id: row.camper_id,
            name: row.camper_name,
            age: row.camper_age,
        },
        activity: ActivitySummaryView {
            id: row.activity_id,
            name: row.activity_name,
            difficulty: row.activity_difficulty,
        },
    }
}

fn validate_fields(body: &SignupBody) -> Result<(i64, i64, i64), ServiceError> {
    let time = body
        .time
        .ok_or_else(|| ServiceError::validation("time", "is required"))?;
    if !(MIN_HOUR..=MAX_HOUR).contains(&time) {
        return Err(ServiceError::validation(
            "time",
            format!("must be an hour between {} and {}", MIN_HOUR, MAX_HOUR),
        ));
    }
    let camper_id = body
        .camper_id
        .ok_or_else(|| ServiceError::validation("camper_id", "is required"))?;
    let activity_id = body
        .activity_id
        .ok_or_else(|| ServiceError::validation("activity_id", "is required"))?;
    Ok((time, camper_id, activity_id))
}

pub async fn list_signups(pool: &SqlitePool) -> Result<Vec<SignupDetailView>, ServiceError> {
    let rows = signup_repo::list_signups(pool).await?;
    Ok(rows.into_iter().map(detail_view).collect())
}

/// Dangling camper or activity references are not pre-checked; the insert
/// fails on the foreign-key constraint and surfaces as `Constraint`.
pub async fn create_signup(
    pool: &SqlitePool,
    body: SignupBody,
) -> Result<SignupDetailView, ServiceError> {
    let (time, camper_id, activity_id) = validate_fields(&body)?;

    let id = signup_repo::insert_signup(pool, time, camper_id, activity_id)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db) => ServiceError::Constraint {
                detail: db.message().to_string(),
            },
            other => ServiceError::Database(other),
        })?;

    let row = signup_repo::get_signup(pool, id)
        .await?
        .ok_or(ServiceError::Database(sqlx::Error::RowNotFound))?;
    Ok(detail_view(row))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(camper_id: Option<i64>, activity_id: Option<i64>, time: Option<i64>) -> SignupBody {
        SignupBody {
            camper_id,
            activity_id,
            time,
        }
    }

    #[test]
    fn accepts_hours_at_the_boundaries() {
        for time in [0, 12, 23] {
            assert!(validate_fields(&body(Some(1), Some(1), Some(time))).is_ok());
        }
    }

    #[test]
    fn rejects_hours_outside_the_day() {
        for time in [-1, 24, 100] {
            assert!(validate_fields(&body(Some(1), Some(1), Some(time))).is_err());
        }
    }

    #[test]
    fn rejects_missing_fields() {
        assert!(validate_fields(&body(None, Some(1), Some(10))).is_err());
        assert!(validate_fields(&body(Some(1), None, Some(10))).is_err());
        assert!(validate_fields(&body(Some(1), Some(1), None)).is_err());
    }
}
