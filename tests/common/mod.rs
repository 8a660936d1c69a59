// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::body::Body;
use axum::http::{header, Request, Response};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use user_directory::config::Config;
use user_directory::db::{FirestoreDb, MemoryStore, UserStore};
use user_directory::middleware::auth::create_jwt;
use user_directory::models::{User, UserStatus};
use user_directory::routes::create_router;
use user_directory::AppState;
use uuid::Uuid;

/// Check if emulator is available via environment variable.
#[allow(dead_code)]
pub fn emulator_available() -> bool {
    std::env::var("FIRESTORE_EMULATOR_HOST").is_ok()
}

/// Skip test with message if emulator not available.
#[macro_export]
macro_rules! require_emulator {
    () => {
        if !crate::common::emulator_available() {
            eprintln!("⚠️  Skipping: FIRESTORE_EMULATOR_HOST not set");
            return;
        }
    };
}

/// Create a test database connection.
#[allow(dead_code)]
pub async fn test_db() -> FirestoreDb {
    FirestoreDb::new("test-project")
        .await
        .expect("Failed to connect to Firestore emulator")
}

/// Create a test app backed by an empty in-memory store.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    create_test_app_with_store(Arc::new(MemoryStore::new()))
}

/// Create a test app over the given store.
#[allow(dead_code)]
pub fn create_test_app_with_store(store: Arc<dyn UserStore>) -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState {
        config: Config::test_default(),
        store,
    });
    (create_router(state.clone()), state)
}

/// Create a valid bearer token for a user.
#[allow(dead_code)]
pub fn create_test_jwt(user_id: Uuid, signing_key: &[u8]) -> String {
    create_jwt(user_id, signing_key).expect("sign test token")
}

/// Build a user registered at a given time.
#[allow(dead_code)]
pub fn test_user(name: &str, lat: f64, lon: f64, register_at: DateTime<Utc>) -> User {
    User {
        id: Uuid::new_v4(),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        password_hash: "$2b$10$notarealhashnotarealhashnotarealhashnotarealhash".to_string(),
        address: "1 Test Rd".to_string(),
        latitude: lat,
        longitude: lon,
        status: UserStatus::Active,
        register_at,
    }
}

/// Insert a user directly into the store.
#[allow(dead_code)]
pub async fn seed_user(state: &AppState, user: User) -> User {
    state.store.create_user(&user).await.expect("seed user");
    user
}

/// GET request with a bearer token.
#[allow(dead_code)]
pub fn authed_get(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

/// POST a JSON body to `/create-user`.
#[allow(dead_code)]
pub fn create_user_request(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/create-user")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("body is JSON")
}
