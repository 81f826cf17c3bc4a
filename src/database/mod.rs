pub mod activity_repo;
pub mod camper_repo;
pub mod schema;
pub mod signup_repo;
