/// Signup joined with its activity, for camper detail views.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SignupWithActivityRow {
    pub id: i64,
    pub time: i64,
    pub camper_id: i64,
    pub activity_id: i64,
    pub activity_name: String,
    pub activity_difficulty: i64,
}

/// Signup joined with its camper, for activity detail views.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SignupWithCamperRow {
    pub id: i64,
    pub time: i64,
    pub camper_id: i64,
    pub activity_id: i64,
    pub camper_name: String,
    pub camper_age: i64,
}

/// Signup joined with both sides, for the signup resource itself.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SignupWithRelationsRow {
    pub id: i64,
    pub time: i64,
    pub camper_id: i64,
    pub activity_id: i64,
    pub camper_name: String,
    pub camper_age: i64,
    pub activity_name: String,
    pub activity_difficulty: i64,
}
