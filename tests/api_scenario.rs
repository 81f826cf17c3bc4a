//! End-to-end walk across all three resources on one database.

mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn full_signup_flow() {
    let (app, pool) = common::test_app().await;

    // Root route answers with an empty 200.
    let (status, body) = common::send(&app, "GET", "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Null);

    // A valid camper is created...
    let (status, body) =
        common::send_json(&app, "POST", "/campers", json!({ "name": "Max", "age": 12 })).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "Max");
    assert_eq!(body["age"], 12);
    let camper_id = body["id"].as_i64().unwrap();

    // ...an under-age one is not.
    let (status, body) =
        common::send_json(&app, "POST", "/campers", json!({ "name": "Max", "age": 5 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "errors": ["validation errors"] }));

    // Unknown ids answer with the entity-specific message.
    let (status, body) = common::send(&app, "GET", "/campers/424242").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Camper not found" }));

    // A signup against existing records nests both sides.
    let activity_id = common::seed_activity(&pool, "Archery", 3).await;
    let (status, body) = common::send_json(
        &app,
        "POST",
        "/signups",
        json!({ "camper_id": camper_id, "activity_id": activity_id, "time": 10 }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["camper"]["name"], "Max");
    assert_eq!(body["activity"]["name"], "Archery");

    // An out-of-day hour is rejected.
    let (status, _) = common::send_json(
        &app,
        "POST",
        "/signups",
        json!({ "camper_id": camper_id, "activity_id": activity_id, "time": 25 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Deleting the activity empties it out of the store, signups included.
    let (status, body) =
        common::send(&app, "DELETE", &format!("/activities/{}", activity_id)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = common::send(&app, "GET", &format!("/activities/{}", activity_id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = common::send(&app, "GET", &format!("/campers/{}", camper_id)).await;
    assert_eq!(body["signups"], json!([]));
}
