// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! User Directory: a small user-management REST API.
//!
//! Accounts are stored in Firestore and authenticated with bearer JWTs.
//! Besides account creation the API can flip every account's status,
//! measure the distance from the caller to a point, and list users by the
//! weekday they registered on.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::UserStore;
use std::sync::Arc;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn UserStore>,
}
