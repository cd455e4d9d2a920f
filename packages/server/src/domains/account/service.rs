//! Account & Registration Service - all user state transitions.
//!
//! Stateless between calls: every operation is a validation pass followed by
//! a single round trip to the injected `UserStore`.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domains::account::error::AccountError;
use crate::domains::account::models::{User, UserProfile};
use crate::domains::account::store::{PushOutcome, StoreError, UserStore};

pub struct AccountService {
    store: Arc<dyn UserStore>,
}

impl AccountService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// Create a new user record.
    ///
    /// All fields are trimmed and required. Uniqueness of email and username
    /// is enforced by the store's insert, not by a pre-check, so two
    /// concurrent registrations cannot both succeed.
    pub async fn register(
        &self,
        email: &str,
        username: &str,
        password: &str,
    ) -> Result<(), AccountError> {
        let email = email.trim();
        let username = username.trim();
        let password = password.trim();

        if email.is_empty() || username.is_empty() || password.is_empty() {
            return Err(AccountError::Validation(AccountError::ALL_FIELDS_REQUIRED));
        }

        let user = User::new(
            email.to_string(),
            username.to_string(),
            // Stored verbatim. Known defect of the current system: no
            // hashing, no salting.
            password.to_string(),
        );

        self.store.insert_user(&user).await.map_err(|e| match e {
            StoreError::DuplicateKey => AccountError::UserExists,
            other => AccountError::Storage(other),
        })?;

        info!(username, "User registered");
        Ok(())
    }

    /// Authenticate by email or username.
    ///
    /// Returns the stored username on success. Password comparison is
    /// byte-exact against the stored value.
    pub async fn login(&self, identifier: &str, password: &str) -> Result<String, AccountError> {
        let identifier = identifier.trim();
        let password = password.trim();

        if identifier.is_empty() || password.is_empty() {
            return Err(AccountError::Validation(AccountError::ALL_FIELDS_REQUIRED));
        }

        let user = self
            .store
            .find_by_identifier(identifier)
            .await
            .map_err(AccountError::Storage)?
            .ok_or(AccountError::InvalidCredentials)?;

        if user.password != password {
            debug!(identifier, "Password mismatch");
            return Err(AccountError::InvalidCredentials);
        }

        info!(username = %user.username, "Login successful");
        Ok(user.username)
    }

    /// Sign a user up for an event.
    ///
    /// The event name is not validated against the catalog; any non-empty
    /// string is accepted. The duplicate check happens inside the store's
    /// guarded push, so concurrent signups for the same event cannot both
    /// append.
    pub async fn register_for_event(
        &self,
        username: &str,
        event: &str,
    ) -> Result<String, AccountError> {
        let username = username.trim();
        let event = event.trim();

        if username.is_empty() || event.is_empty() {
            return Err(AccountError::Validation(AccountError::MISSING_DATA));
        }

        let outcome = self
            .store
            .push_event_if_absent(username, event)
            .await
            .map_err(AccountError::Storage)?;

        match outcome {
            PushOutcome::Added => {
                info!(username, event, "Event registration recorded");
                Ok(event.to_string())
            }
            PushOutcome::AlreadyRegistered => Err(AccountError::AlreadyRegistered),
            PushOutcome::UserNotFound => Err(AccountError::UserNotFound),
        }
    }

    /// Fetch a user's profile, without the password field.
    pub async fn get_profile(&self, username: &str) -> Result<UserProfile, AccountError> {
        let username = username.trim();

        let user = self
            .store
            .find_by_username(username)
            .await
            .map_err(AccountError::Storage)?
            .ok_or(AccountError::UserNotFound)?;

        Ok(UserProfile::from(user))
    }

    /// Storage connectivity probe for health reporting.
    pub async fn storage_ok(&self) -> Result<(), StoreError> {
        self.store.ping().await
    }
}
