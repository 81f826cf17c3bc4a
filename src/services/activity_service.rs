use serde::Serialize;
use sqlx::SqlitePool;

use crate::database::activity_repo;
use crate::models::{ActivityRow, SignupWithCamperRow};
use crate::services::camper_service::CamperSummaryView;
use crate::services::error::{Entity, ServiceError};

#[derive(Debug, Clone, Serialize)]
pub struct ActivitySummaryView {
    pub id: i64,
    pub name: String,
    pub difficulty: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ActivitySignupView {
    pub id: i64,
    pub time: i64,
    pub camper_id: i64,
    pub activity_id: i64,
    pub camper: CamperSummaryView,
}

#[derive(Debug, Clone, Serialize)]
pub struct ActivityDetailView {
    pub id: i64,
    pub name: String,
    pub difficulty: i64,
    pub signups: Vec<ActivitySignupView>,
}

fn summary_view(row: ActivityRow) -> ActivitySummaryView {
    ActivitySummaryView {
        id: row.id,
        name: row.name,
        difficulty: row.difficulty,
    }
}

fn signup_view(row: SignupWithCamperRow) -> ActivitySignupView {
    ActivitySignupView {
        id: row.id,
        time: row.time,
        camper_id: row.camper_id,
        activity_id: row.activity_id,
        camper: CamperSummaryView {
            id: row.camper_id,
            name: row.camper_name,
            age: row.camper_age,
        },
    }
}

pub async fn list_activities(pool: &SqlitePool) -> Result<Vec<ActivitySummaryView>, ServiceError> {
    let rows = activity_repo::list_activities(pool).await?;
    Ok(rows.into_iter().map(summary_view).collect())
}

pub async fn load_activity_detail(
    pool: &SqlitePool,
    id: i64,
) -> Result<ActivityDetailView, ServiceError> {
    let activity = activity_repo::get_activity(pool, id)
        .await?
        .ok_or_else(|| ServiceError::not_found(Entity::Activity, id))?;

    let signups = activity_repo::list_signups_for_activity(pool, id).await?;

    Ok(ActivityDetailView {
        id: activity.id,
        name: activity.name,
        difficulty: activity.difficulty,
        signups: signups.into_iter().map(signup_view).collect(),
    })
}

/// Removes the activity and, through the schema's cascade, its signups.
pub async fn delete_activity(pool: &SqlitePool, id: i64) -> Result<(), ServiceError> {
    let deleted = activity_repo::delete_activity(pool, id).await?;
    if deleted == 0 {
        return Err(ServiceError::not_found(Entity::Activity, id));
    }
    Ok(())
}
