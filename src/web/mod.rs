pub mod routes;

use axum::{routing::get, Router};
use sqlx::SqlitePool;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use self::routes::{activities, campers, signups};

/// Assembles the full application router. Shared by `main` and the
/// integration tests so both exercise the same routing table.
pub fn app(pool: SqlitePool) -> Router {
    Router::new()
        .route("/", get(|| async { "" }))
        .route(
            "/campers",
            get(campers::list_campers_handler).post(campers::create_camper_handler),
        )
        .route(
            "/campers/:id",
            get(campers::camper_detail_handler).patch(campers::update_camper_handler),
        )
        .route("/activities", get(activities::list_activities_handler))
        .route(
            "/activities/:id",
            get(activities::activity_detail_handler).delete(activities::delete_activity_handler),
        )
        .route(
            "/signups",
            get(signups::list_signups_handler).post(signups::create_signup_handler),
        )
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(pool)
}
