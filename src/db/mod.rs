//! Database layer (Firestore, plus an in-memory store for development and tests).

pub mod firestore;
pub mod memory;

pub use firestore::FirestoreDb;
pub use memory::MemoryStore;

use crate::error::AppError;
use crate::models::User;
use async_trait::async_trait;
use uuid::Uuid;

/// Collection names as constants.
pub mod collections {
    pub const USERS: &str = "users";
    /// Email uniqueness index (document ID = encoded email)
    pub const USER_EMAILS: &str = "user_emails";
}

/// Persistence operations the handlers need.
///
/// Emails passed in are expected to be normalized already.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Get a user by ID.
    async fn get_user(&self, id: Uuid) -> Result<Option<User>, AppError>;

    /// Find the user owning an email address.
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// Persist a new user.
    ///
    /// Returns [`AppError::EmailTaken`] if the email is already registered,
    /// even when the conflicting write raced this one.
    async fn create_user(&self, user: &User) -> Result<(), AppError>;

    /// Flip every user's status in one atomic write.
    async fn toggle_all_statuses(&self) -> Result<usize, AppError>;

    /// All users, in store iteration order.
    async fn list_users(&self) -> Result<Vec<User>, AppError>;
}
