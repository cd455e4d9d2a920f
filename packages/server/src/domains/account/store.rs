//! Storage interface for user records.
//!
//! The service talks to storage through the `UserStore` trait so the backend
//! can be swapped for a test double. The production implementation is
//! `MongoUserStore` in `mongo.rs`.

use async_trait::async_trait;
use thiserror::Error;

use crate::domains::account::models::User;

/// Storage-layer failures.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A unique index rejected the write (duplicate email or username).
    #[error("duplicate key")]
    DuplicateKey,

    /// The backend could not be reached or the operation failed outright.
    #[error("storage unavailable: {0}")]
    Unavailable(#[source] anyhow::Error),
}

/// Outcome of the guarded event push.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushOutcome {
    /// The event was appended to `registered_events`.
    Added,
    /// The user exists but the event was already present.
    AlreadyRegistered,
    /// No record matches the username.
    UserNotFound,
}

/// Persistence operations for user records.
///
/// Uniqueness and duplicate-event checks live behind this trait so they are
/// atomic at the storage layer rather than check-then-act in the service:
/// `insert_user` surfaces `StoreError::DuplicateKey`, and
/// `push_event_if_absent` is a single membership-guarded update.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Look a user up by email OR username.
    async fn find_by_identifier(&self, identifier: &str) -> Result<Option<User>, StoreError>;

    /// Look a user up by username only.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError>;

    /// Insert a new record. Fails with `DuplicateKey` if the email or
    /// username is already taken.
    async fn insert_user(&self, user: &User) -> Result<(), StoreError>;

    /// Append `event` to the user's `registered_events` unless it is already
    /// present. Must be atomic per user.
    async fn push_event_if_absent(
        &self,
        username: &str,
        event: &str,
    ) -> Result<PushOutcome, StoreError>;

    /// Connectivity probe for health reporting.
    async fn ping(&self) -> Result<(), StoreError>;
}
