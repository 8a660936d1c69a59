// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Weekday listing tests.

use axum::http::StatusCode;
use chrono::{TimeZone, Utc};
use tower::ServiceExt;

mod common;
use common::{authed_get, body_json, create_test_app, create_test_jwt, seed_user, test_user};

/// Seeds users registered on Sunday, Monday and Saturday (UTC).
/// Returns the bearer token of the Monday user.
async fn seeded_app() -> (axum::Router, String) {
    let (app, state) = create_test_app();

    // 2024-01-07 Sunday, 2024-01-08 Monday, 2024-01-13 Saturday
    seed_user(
        &state,
        test_user("Sunny", 0.0, 0.0, Utc.with_ymd_and_hms(2024, 1, 7, 9, 0, 0).unwrap()),
    )
    .await;
    let monday = seed_user(
        &state,
        test_user("Monty", 0.0, 0.0, Utc.with_ymd_and_hms(2024, 1, 8, 9, 0, 0).unwrap()),
    )
    .await;
    seed_user(
        &state,
        test_user("Sadie", 0.0, 0.0, Utc.with_ymd_and_hms(2024, 1, 13, 23, 59, 59).unwrap()),
    )
    .await;
    seed_user(
        &state,
        test_user("Sol", 0.0, 0.0, Utc.with_ymd_and_hms(2024, 1, 14, 0, 0, 0).unwrap()),
    )
    .await;

    let token = create_test_jwt(monday.id, &state.config.jwt_signing_key);
    (app, token)
}

#[tokio::test]
async fn test_weekend_listing() {
    let (app, token) = seeded_app().await;

    let response = app
        .oneshot(authed_get("/user-listing?week_number=0,6", &token))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status_code"], 200);
    assert_eq!(body["message"], "Success");

    let data = body["data"].as_object().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(
        data["sunday"],
        serde_json::json!([
            { "name": "Sunny", "email": "sunny@example.com" },
            { "name": "Sol", "email": "sol@example.com" }
        ])
    );
    assert_eq!(
        data["saturday"],
        serde_json::json!([{ "name": "Sadie", "email": "sadie@example.com" }])
    );
    assert!(!body.to_string().contains("Monty"));
}

#[tokio::test]
async fn test_requested_day_with_no_users() {
    let (app, token) = seeded_app().await;

    let response = app
        .oneshot(authed_get("/user-listing?week_number=3", &token))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"], serde_json::json!({ "wednesday": [] }));
}

#[tokio::test]
async fn test_listing_omits_private_fields() {
    let (app, token) = seeded_app().await;

    let response = app
        .oneshot(authed_get("/user-listing?week_number=1", &token))
        .await
        .unwrap();
    let body = body_json(response).await;

    let monday = body["data"]["monday"].as_array().unwrap();
    assert_eq!(monday.len(), 1);
    let entry = monday[0].as_object().unwrap();
    assert_eq!(entry.len(), 2);
    assert!(entry.contains_key("name"));
    assert!(entry.contains_key("email"));
}

#[tokio::test]
async fn test_missing_week_number() {
    let (app, token) = seeded_app().await;

    for uri in ["/user-listing", "/user-listing?week_number="] {
        let response = app.clone().oneshot(authed_get(uri, &token)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(body_json(response).await["message"], "week_number is required");
    }
}

#[tokio::test]
async fn test_out_of_range_week_number_rejected() {
    let (app, token) = seeded_app().await;

    for uri in [
        "/user-listing?week_number=7",
        "/user-listing?week_number=0,9",
        "/user-listing?week_number=sunday",
    ] {
        let response = app.clone().oneshot(authed_get(uri, &token)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", uri);
    }
}

#[tokio::test]
async fn test_repeated_week_number_key_uses_error_envelope() {
    let (app, token) = seeded_app().await;

    let response = app
        .oneshot(authed_get("/user-listing?week_number=0&week_number=6", &token))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["status_code"], 400);
    assert_eq!(
        body["message"],
        "week_number must be a comma-separated list of integers between 0 and 6"
    );
}
