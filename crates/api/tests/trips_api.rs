//! HTTP-level integration tests for the trips resource.
//!
//! Covers the open create/update behaviour, id handling, read-path
//! normalization, the filter query parameters, and facet derivation.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json, put_json};
use sqlx::PgPool;

fn everest() -> serde_json::Value {
    serde_json::json!({
        "destination": "Everest",
        "startDate": "2024-03-01",
        "endDate": "2024-03-14",
        "price": 1800.0,
        "fullPrice": 2400.0,
        "capacity": 12,
        "weekNumber": 1,
        "difficulty": "Difficult"
    })
}

fn kilimanjaro() -> serde_json::Value {
    serde_json::json!({
        "destination": "Kilimanjaro",
        "startDate": "2024-03-15",
        "endDate": "2024-03-25",
        "weekNumber": 2,
        "difficulty": "Easy"
    })
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_requires_no_session(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(app, "/api/trips", everest()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["id"].is_number());
    assert_eq!(json["destination"], "Everest");
    assert_eq!(json["weekNumber"], 1);
    // Arrays default to empty, never absent.
    assert!(json["hotels"].as_array().unwrap().is_empty());
    assert!(json["bookings"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_accepts_date_only_strings_and_round_trips_them(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(app.clone(), "/api/trips", everest()).await;
    let id = body_json(response).await["id"].as_i64().unwrap();

    let response = get(app, &format!("/api/trips/{id}")).await;
    let json = body_json(response).await;
    assert_eq!(json["startDate"], "2024-03-01T00:00:00Z");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_defaults_week_number_to_zero(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "destination": "Patagonia",
        "startDate": "2024-11-01",
        "endDate": "2024-11-12"
    });
    let response = post_json(app, "/api/trips", body).await;
    let json = body_json(response).await;
    assert_eq!(json["weekNumber"], 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_with_malformed_id_is_400(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/api/trips/not-a-number").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid trip id");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_unknown_id_is_404(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/api/trips/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn legacy_row_is_served_normalized(pool: PgPool) {
    let app = common::build_test_app(pool.clone());

    let id: i64 = sqlx::query_scalar(
        "INSERT INTO trips (destination, start_date, end_date)
         VALUES ('Old Patagonia', '2019-11-01T00:00:00Z', '2019-11-12T00:00:00Z')
         RETURNING id",
    )
    .fetch_one(&pool)
    .await
    .unwrap();

    let response = get(app, &format!("/api/trips/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["weekNumber"], 0);
    assert!(json["hotels"].as_array().unwrap().is_empty());
    assert!(json["itinerary"].as_array().unwrap().is_empty());
    assert!(json["images"].as_array().unwrap().is_empty());
    assert!(json["bookings"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_requires_no_session_and_reports_modified_count(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(app.clone(), "/api/trips", everest()).await;
    let id = body_json(response).await["id"].as_i64().unwrap();

    let patch = serde_json::json!({ "capacity": 0 });
    let response = put_json(app.clone(), &format!("/api/trips/{id}"), patch).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["modifiedCount"], 1);

    let response = get(app, &format!("/api/trips/{id}")).await;
    let json = body_json(response).await;
    assert_eq!(json["capacity"], 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_of_unknown_id_is_404(pool: PgPool) {
    let app = common::build_test_app(pool);

    let patch = serde_json::json!({ "capacity": 5 });
    let response = put_json(app, "/api/trips/999999", patch).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_replaces_array_fields_wholesale(pool: PgPool) {
    let app = common::build_test_app(pool);

    let mut body = everest();
    body["hotels"] = serde_json::json!([
        { "name": "Lukla Lodge", "nights": 2 },
        { "name": "Namche Inn", "nights": 3 }
    ]);
    let response = post_json(app.clone(), "/api/trips", body).await;
    let id = body_json(response).await["id"].as_i64().unwrap();

    let patch = serde_json::json!({
        "hotels": [ { "name": "Base Camp Lodge", "nights": 5 } ]
    });
    put_json(app.clone(), &format!("/api/trips/{id}"), patch).await;

    let response = get(app, &format!("/api/trips/{id}")).await;
    let json = body_json(response).await;
    let hotels = json["hotels"].as_array().unwrap();
    assert_eq!(hotels.len(), 1);
    assert_eq!(hotels[0]["name"], "Base Camp Lodge");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn search_filter_matches_destination_substring(pool: PgPool) {
    let app = common::build_test_app(pool);
    post_json(app.clone(), "/api/trips", everest()).await;
    post_json(app.clone(), "/api/trips", kilimanjaro()).await;

    let response = get(app, "/api/trips?search=ever").await;
    let json = body_json(response).await;
    let trips = json.as_array().unwrap();
    assert_eq!(trips.len(), 1);
    assert_eq!(trips[0]["destination"], "Everest");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn month_filter_matches_both_march_departures(pool: PgPool) {
    let app = common::build_test_app(pool);
    post_json(app.clone(), "/api/trips", everest()).await;
    post_json(app.clone(), "/api/trips", kilimanjaro()).await;

    let response = get(app, "/api/trips?month=3").await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn difficulty_filter_is_exact(pool: PgPool) {
    let app = common::build_test_app(pool);
    post_json(app.clone(), "/api/trips", everest()).await;
    post_json(app.clone(), "/api/trips", kilimanjaro()).await;

    let response = get(app, "/api/trips?difficulty=Easy").await;
    let json = body_json(response).await;
    let trips = json.as_array().unwrap();
    assert_eq!(trips.len(), 1);
    assert_eq!(trips[0]["destination"], "Kilimanjaro");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unfiltered_list_returns_everything(pool: PgPool) {
    let app = common::build_test_app(pool);
    post_json(app.clone(), "/api/trips", everest()).await;
    post_json(app.clone(), "/api/trips", kilimanjaro()).await;

    let response = get(app, "/api/trips").await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn facets_reflect_the_collection(pool: PgPool) {
    let app = common::build_test_app(pool);
    post_json(app.clone(), "/api/trips", everest()).await;
    post_json(app.clone(), "/api/trips", kilimanjaro()).await;

    let response = get(app, "/api/trips/facets").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["months"], serde_json::json!([3]));
    assert_eq!(json["weeks"], serde_json::json!([1, 2]));
    assert_eq!(
        json["difficulties"],
        serde_json::json!(["Difficult", "Easy"])
    );
}
