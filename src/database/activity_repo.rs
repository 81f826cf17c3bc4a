use sqlx::SqlitePool;

use crate::models::{ActivityRow, SignupWithCamperRow};

const SQL_LIST_ACTIVITIES: &str = r#"
SELECT
  id,
  name,
  difficulty
FROM activities
ORDER BY id ASC
"#;

pub async fn list_activities(pool: &SqlitePool) -> sqlx::Result<Vec<ActivityRow>> {
    sqlx::query_as::<_, ActivityRow>(SQL_LIST_ACTIVITIES)
        .fetch_all(pool)
        .await
}

const SQL_GET_ACTIVITY: &str = r#"
SELECT
  id,
  name,
  difficulty
FROM activities
WHERE id = ?
LIMIT 1
"#;

pub async fn get_activity(pool: &SqlitePool, id: i64) -> sqlx::Result<Option<ActivityRow>> {
    sqlx::query_as::<_, ActivityRow>(SQL_GET_ACTIVITY)
        .bind(id)
        .fetch_optional(pool)
        .await
}

const SQL_INSERT_ACTIVITY: &str = r#"
INSERT INTO activities (name, difficulty) VALUES (?, ?)
"#;

pub async fn insert_activity(pool: &SqlitePool, name: &str, difficulty: i64) -> sqlx::Result<i64> {
    let res = sqlx::query(SQL_INSERT_ACTIVITY)
        .bind(name)
        .bind(difficulty)
        .execute(pool)
        .await?;
    Ok(res.last_insert_rowid())
}

const SQL_DELETE_ACTIVITY: &str = r#"
DELETE FROM activities
WHERE id = ?
"#;

/// Deleting an activity cascades to its signups via the schema's foreign keys.
pub async fn delete_activity(pool: &SqlitePool, id: i64) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_DELETE_ACTIVITY)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}

const SQL_LIST_SIGNUPS_FOR_ACTIVITY: &str = r#"
SELECT
  s.id,
  s.time,
  s.camper_id,
  s.activity_id,
  c.name AS camper_name,
  c.age AS camper_age
FROM signups s
JOIN campers c ON c.id = s.camper_id
WHERE s.activity_id = ?
ORDER BY s.id ASC
"#;

pub async fn list_signups_for_activity(
    pool: &SqlitePool,
    activity_id: i64,
) -> sqlx::Result<Vec<SignupWithCamperRow>> {
    sqlx::query_as::<_, SignupWithCamperRow>(SQL_LIST_SIGNUPS_FOR_ACTIVITY)
        .bind(activity_id)
        .fetch_all(pool)
        .await
}
