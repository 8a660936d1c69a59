// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Process-local user store.
//!
//! Keeps users in creation order behind a single lock, so the email check
//! and insert, and the bulk toggle, are each one critical section.

use super::UserStore;
use crate::error::AppError;
use crate::models::User;
use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-memory user store.
#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<Vec<User>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn get_user(&self, id: Uuid) -> Result<Option<User>, AppError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn create_user(&self, user: &User) -> Result<(), AppError> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.email == user.email) {
            return Err(AppError::EmailTaken);
        }
        users.push(user.clone());
        Ok(())
    }

    async fn toggle_all_statuses(&self) -> Result<usize, AppError> {
        let mut users = self.users.write().await;
        for user in users.iter_mut() {
            user.status = user.status.toggled();
        }
        Ok(users.len())
    }

    async fn list_users(&self) -> Result<Vec<User>, AppError> {
        Ok(self.users.read().await.clone())
    }
}
