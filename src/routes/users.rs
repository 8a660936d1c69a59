// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User routes: account creation, bulk status toggle, distance and
//! weekday listing.

use crate::error::{AppError, Result};
use crate::middleware::auth::{create_jwt, AuthUser};
use crate::models::{PublicUser, User, UserStatus, UserSummary};
use crate::services::distance::{distance_km, format_km};
use crate::services::weekday::WeekNumberError;
use crate::services::{group_by_weekday, hash_password, parse_week_numbers};
use crate::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    routing::{get, post, put},
    Extension, Json, Router,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::{Arc, LazyLock};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use uuid::Uuid;

/// Minimum password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 6;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Routes that need no authentication.
pub fn public_routes() -> Router<Arc<AppState>> {
    Router::new().route("/create-user", post(create_user))
}

/// Routes behind the bearer token middleware (applied in routes/mod.rs).
pub fn protected_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/toggle-status", put(toggle_status))
        .route("/get-distance", get(get_distance))
        .route("/user-listing", get(user_listing))
}

/// Plain acknowledgement.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct MessageResponse {
    pub status_code: u16,
    pub message: String,
}

// ─── Account Creation ────────────────────────────────────────

/// Account creation body. Every field is optional here so that a missing
/// one can be reported with the API's own message.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Fields of a create request once presence has been checked.
struct NewUser {
    name: String,
    email: String,
    password: String,
    address: String,
    latitude: f64,
    longitude: f64,
}

impl CreateUserRequest {
    /// Check presence, email format and password length, in that order.
    /// The email comes back trimmed and lowercased.
    fn validate(self) -> Result<NewUser> {
        fn present(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.trim().is_empty())
        }

        let (Some(name), Some(email), Some(password), Some(address), Some(latitude), Some(longitude)) = (
            present(self.name),
            present(self.email),
            self.password.filter(|p| !p.is_empty()),
            present(self.address),
            self.latitude,
            self.longitude,
        ) else {
            return Err(AppError::BadRequest("All fields are required".into()));
        };

        let email = email.trim().to_lowercase();
        if !EMAIL_RE.is_match(&email) {
            return Err(AppError::BadRequest("Invalid email format".into()));
        }

        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AppError::BadRequest(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LEN
            )));
        }

        Ok(NewUser {
            name,
            email,
            password,
            address,
            latitude,
            longitude,
        })
    }
}

/// Created user plus its bearer token.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
pub struct CreatedUser {
    #[serde(flatten)]
    pub user: PublicUser,
    pub token: String,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CreateUserResponse {
    pub status_code: u16,
    pub message: String,
    pub data: CreatedUser,
}

/// Create an account and return it with a one-day token.
async fn create_user(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateUserResponse>)> {
    let Json(payload) = payload.map_err(|e| {
        tracing::debug!(error = %e, "Unreadable create-user body");
        AppError::BadRequest("All fields are required".into())
    })?;
    let new_user = payload.validate()?;

    if state.store.find_user_by_email(&new_user.email).await?.is_some() {
        tracing::info!("Rejected registration for an existing email");
        return Err(AppError::EmailTaken);
    }

    let password = new_user.password;
    let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(anyhow::Error::from)??;

    let user = User {
        id: Uuid::new_v4(),
        name: new_user.name,
        email: new_user.email,
        password_hash,
        address: new_user.address,
        latitude: new_user.latitude,
        longitude: new_user.longitude,
        status: UserStatus::Active,
        register_at: chrono::Utc::now(),
    };

    state.store.create_user(&user).await?;
    let token = create_jwt(user.id, &state.config.jwt_signing_key)?;

    tracing::info!(user_id = %user.id, "User created");

    Ok((
        StatusCode::CREATED,
        Json(CreateUserResponse {
            status_code: StatusCode::CREATED.as_u16(),
            message: "User created".to_string(),
            data: CreatedUser {
                user: PublicUser::from(&user),
                token,
            },
        }),
    ))
}

// ─── Status Toggle ───────────────────────────────────────────

/// Flip every user's status between active and inactive.
async fn toggle_status(
    State(state): State<Arc<AppState>>,
    Extension(caller): Extension<AuthUser>,
) -> Result<Json<MessageResponse>> {
    let count = state.store.toggle_all_statuses().await?;

    tracing::info!(caller = %caller.user_id, count, "Toggled all user statuses");

    Ok(Json(MessageResponse {
        status_code: StatusCode::OK.as_u16(),
        message: "All user statuses toggled".to_string(),
    }))
}

// ─── Distance ────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct DistanceQuery {
    destination_latitude: Option<String>,
    destination_longitude: Option<String>,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DistanceResponse {
    pub status_code: u16,
    pub message: String,
    pub distance: String,
}

/// Distance from the caller's stored location to the query destination.
async fn get_distance(
    State(state): State<Arc<AppState>>,
    Extension(caller): Extension<AuthUser>,
    query: std::result::Result<Query<DistanceQuery>, QueryRejection>,
) -> Result<Json<DistanceResponse>> {
    let required = || {
        AppError::BadRequest("Destination latitude and longitude required".into())
    };
    let Query(query) = query.map_err(|e| {
        tracing::debug!(error = %e, "Unreadable get-distance query");
        required()
    })?;
    let lat = query
        .destination_latitude
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(required)?;
    let lon = query
        .destination_longitude
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(required)?;

    let (Ok(dest_lat), Ok(dest_lon)) = (lat.trim().parse::<f64>(), lon.trim().parse::<f64>())
    else {
        return Err(AppError::BadRequest(
            "Destination latitude and longitude must be numeric".into(),
        ));
    };

    let origin = state
        .store
        .get_user(caller.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;

    let km = distance_km(origin.latitude, origin.longitude, dest_lat, dest_lon);

    Ok(Json(DistanceResponse {
        status_code: StatusCode::OK.as_u16(),
        message: "Success".to_string(),
        distance: format_km(km),
    }))
}

// ─── Weekday Listing ─────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct ListingQuery {
    week_number: Option<String>,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct UserListingResponse {
    pub status_code: u16,
    pub message: String,
    pub data: BTreeMap<&'static str, Vec<UserSummary>>,
}

/// Users grouped by the weekday they registered on.
async fn user_listing(
    State(state): State<Arc<AppState>>,
    query: std::result::Result<Query<ListingQuery>, QueryRejection>,
) -> Result<Json<UserListingResponse>> {
    let Query(query) = query.map_err(|e| {
        tracing::debug!(error = %e, "Unreadable user-listing query");
        AppError::BadRequest(WeekNumberError::Invalid(e.body_text()).to_string())
    })?;
    let days = parse_week_numbers(query.week_number.as_deref().unwrap_or_default())
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let users = state.store.list_users().await?;

    Ok(Json(UserListingResponse {
        status_code: StatusCode::OK.as_u16(),
        message: "Success".to_string(),
        data: group_by_weekday(&users, &days),
    }))
}
