use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::database::camper_repo;
use crate::models::{CamperRow, SignupWithActivityRow};
use crate::services::activity_service::ActivitySummaryView;
use crate::services::error::{Entity, ServiceError};

const MIN_AGE: i64 = 8;
const MAX_AGE: i64 = 18;

/// Body for camper create and update. Every field is optional at the parse
/// stage; presence is a validation concern, not a deserialization one.
#[derive(Debug, Deserialize)]
pub struct CamperBody {
    pub name: Option<String>,
    pub age: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CamperSummaryView {
    pub id: i64,
    pub name: String,
    pub age: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CamperSignupView {
    pub id: i64,
    pub time: i64,
    pub camper_id: i64,
    pub activity_id: i64,
    pub activity: ActivitySummaryView,
}

#[derive(Debug, Clone, Serialize)]
pub struct CamperDetailView {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub signups: Vec<CamperSignupView>,
}

fn summary_view(row: CamperRow) -> CamperSummaryView {
    CamperSummaryView {
        id: row.id,
        name: row.name,
        age: row.age,
    }
}

fn signup_view(row: SignupWithActivityRow) -> CamperSignupView {
    CamperSignupView {
        id: row.id,
        time: row.time,
        camper_id: row.camper_id,
        activity_id: row.activity_id,
        activity: ActivitySummaryView {
            id: row.activity_id,
            name: row.activity_name,
            difficulty: row.activity_difficulty,
        },
    }
}

fn validate_fields(body: &CamperBody) -> Result<(&str, i64), ServiceError> {
    let name = body
        .name
        .as_deref()
        .ok_or_else(|| ServiceError::validation("name", "is required"))?;
    if name.trim().is_empty() {
        return Err(ServiceError::validation("name", "must not be empty"));
    }
    let age = body
        .age
        .ok_or_else(|| ServiceError::validation("age", "is required"))?;
    if !(MIN_AGE..=MAX_AGE).contains(&age) {
        return Err(ServiceError::validation(
            "age",
            format!("must be between {} and {}", MIN_AGE, MAX_AGE),
        ));
    }
    Ok((name, age))
}

pub async fn list_campers(pool: &SqlitePool) -> Result<Vec<CamperSummaryView>, ServiceError> {
    let rows = camper_repo::list_campers(pool).await?;
    Ok(rows.into_iter().map(summary_view).collect())
}

pub async fn load_camper_detail(
    pool: &SqlitePool,
    id: i64,
) -> Result<CamperDetailView, ServiceError> {
    let camper = camper_repo::get_camper(pool, id)
        .await?
        .ok_or_else(|| ServiceError::not_found(Entity::Camper, id))?;

    let signups = camper_repo::list_signups_for_camper(pool, id).await?;

    Ok(CamperDetailView {
        id: camper.id,
        name: camper.name,
        age: camper.age,
        signups: signups.into_iter().map(signup_view).collect(),
    })
}

pub async fn create_camper(
    pool: &SqlitePool,
    body: CamperBody,
) -> Result<CamperDetailView, ServiceError> {
    let (name, age) = validate_fields(&body)?;
    let id = camper_repo::insert_camper(pool, name, age).await?;
    load_camper_detail(pool, id).await
}

/// Full replacement of both fields. The camper must already exist.
pub async fn update_camper(
    pool: &SqlitePool,
    id: i64,
    body: CamperBody,
) -> Result<CamperDetailView, ServiceError> {
    camper_repo::get_camper(pool, id)
        .await?
        .ok_or_else(|| ServiceError::not_found(Entity::Camper, id))?;

    let (name, age) = validate_fields(&body)?;
    camper_repo::update_camper(pool, id, name, age).await?;
    load_camper_detail(pool, id).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(name: Option<&str>, age: Option<i64>) -> CamperBody {
        CamperBody {
            name: name.map(|n| n.to_string()),
            age,
        }
    }

    #[test]
    fn accepts_ages_at_the_boundaries() {
        for age in [8, 12, 18] {
            assert!(validate_fields(&body(Some("Max"), Some(age))).is_ok());
        }
    }

    #[test]
    fn rejects_ages_outside_the_range() {
        for age in [-1, 0, 7, 19, 120] {
            assert!(validate_fields(&body(Some("Max"), Some(age))).is_err());
        }
    }

    #[test]
    fn rejects_missing_or_blank_name() {
        assert!(validate_fields(&body(None, Some(12))).is_err());
        assert!(validate_fields(&body(Some(""), Some(12))).is_err());
        assert!(validate_fields(&body(Some("   "), Some(12))).is_err());
    }

    #[test]
    fn rejects_missing_age() {
        assert!(validate_fields(&body(Some("Max"), None)).is_err());
    }
}
