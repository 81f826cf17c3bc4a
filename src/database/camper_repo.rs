use sqlx::SqlitePool;

use crate::models::{CamperRow, SignupWithActivityRow};

const SQL_LIST_CAMPERS: &str = r#"
SELECT
  id,
  name,
  age
FROM campers
ORDER BY id ASC
"#;

pub async fn list_campers(pool: &SqlitePool) -> sqlx::Result<Vec<CamperRow>> {
    sqlx::query_as::<_, CamperRow>(SQL_LIST_CAMPERS)
        .fetch_all(pool)
        .await
}

const SQL_GET_CAMPER: &str = r#"
SELECT
  id,
  name,
  age
FROM campers
WHERE id = ?
LIMIT 1
"#;

pub async fn get_camper(pool: &SqlitePool, id: i64) -> sqlx::Result<Option<CamperRow>> {
    sqlx::query_as::<_, CamperRow>(SQL_GET_CAMPER)
        .bind(id)
        .fetch_optional(pool)
        .await
}

const SQL_INSERT_CAMPER: &str = r#"
INSERT INTO campers (name, age) VALUES (?, ?)
"#;

pub async fn insert_camper(pool: &SqlitePool, name: &str, age: i64) -> sqlx::Result<i64> {
    let res = sqlx::query(SQL_INSERT_CAMPER)
        .bind(name)
        .bind(age)
        .execute(pool)
        .await?;
    Ok(res.last_insert_rowid())
}

const SQL_UPDATE_CAMPER: &str = r#"
UPDATE campers
SET name = ?, age = ?
WHERE id = ?
"#;

pub async fn update_camper(
    pool: &SqlitePool,
    id: i64,
    name: &str,
    age: i64,
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_UPDATE_CAMPER)
        .bind(name)
        .bind(age)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}

const SQL_LIST_SIGNUPS_FOR_CAMPER: &str = r#"
SELECT
  s.id,
  s.time,
  s.camper_id,
  s.activity_id,
  a.name AS activity_name,
  a.difficulty AS activity_difficulty
FROM signups s
JOIN activities a ON a.id = s.activity_id
WHERE s.camper_id = ?
ORDER BY s.id ASC
"#;

pub async fn list_signups_for_camper(
    pool: &SqlitePool,
    camper_id: i64,
) -> sqlx::Result<Vec<SignupWithActivityRow>> {
    sqlx::query_as::<_, SignupWithActivityRow>(SQL_LIST_SIGNUPS_FOR_CAMPER)
        .bind(camper_id)
        .fetch_all(pool)
        .await
}
