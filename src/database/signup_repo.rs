use sqlx::SqlitePool;

use crate::models::SignupWithRelationsRow;

const SQL_LIST_SIGNUPS: &str = r#"
SELECT
  s.id,
  s.time,
  s.camper_id,
  s.activity_id,
  c.name AS camper_name,
  c.age AS camper_age,
  a.name AS activity_name,
  a.difficulty AS activity_difficulty
FROM signups s
JOIN campers c ON c.id = s.camper_id
JOIN activities a ON a.id = s.activity_id
ORDER BY s.id ASC
"#;

pub async fn list_signups(pool: &SqlitePool) -> sqlx::Result<Vec<SignupWithRelationsRow>> {
    sqlx::query_as::<_, SignupWithRelationsRow>(SQL_LIST_SIGNUPS)
        .fetch_all(pool)
        .await
}

const SQL_GET_SIGNUP: &str = r#"
SELECT
  s.id,
  s.time,
  s.camper_id,
  s.activity_id,
  c.name AS camper_name,
  c.age AS camper_age,
  a.name AS activity_name,
  a.difficulty AS activity_difficulty
FROM signups s
JOIN campers c ON c.id = s.camper_id
JOIN activities a ON a.id = s.activity_id
WHERE s.id = ?
LIMIT 1
"#;

pub async fn get_signup(pool: &SqlitePool, id: i64) -> sqlx::Result<Option<SignupWithRelationsRow>> {
    sqlx::query_as::<_, SignupWithRelationsRow>(SQL_GET_SIGNUP)
        .bind(id)
        .fetch_optional(pool)
        .await
}

const SQL_INSERT_SIGNUP: &str = r#"
INSERT INTO signups (time, camper_id, activity_id) VALUES (?, ?, ?)
"#;

/// Fails with a foreign-key violation when `camper_id` or `activity_id` do not
/// reference existing rows.
pub async fn insert_signup(
    pool: &SqlitePool,
    time: i64,
    camper_id: i64,
    activity_id: i64,
) -> sqlx::Result<i64> {
    let res = sqlx::query(SQL_INSERT_SIGNUP)
        .bind(time)
        .bind(camper_id)
        .bind(activity_id)
        .execute(pool)
        .await?;
    Ok(res.last_insert_rowid())
}
