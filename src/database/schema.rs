use sqlx::SqlitePool;

const SQL_CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS campers (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  name TEXT NOT NULL,
  age INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS activities (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  name TEXT NOT NULL,
  difficulty INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS signups (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  time INTEGER NOT NULL,
  camper_id INTEGER NOT NULL REFERENCES campers(id) ON DELETE CASCADE,
  activity_id INTEGER NOT NULL REFERENCES activities(id) ON DELETE CASCADE
);

CREATE INDEX IF NOT EXISTS idx_signups_camper_id ON signups (camper_id);
CREATE INDEX IF NOT EXISTS idx_signups_activity_id ON signups (activity_id);
"#;

/// Creates the three tables if they are missing. Idempotent, runs on every
/// startup. Cascade deletes require `foreign_keys` to be enabled on the
/// connection options.
pub async fn ensure_schema(pool: &SqlitePool) -> sqlx::Result<()> {
    sqlx::raw_sql(SQL_CREATE_TABLES).execute(pool).await?;
    Ok(())
}
