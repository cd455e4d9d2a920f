//! Shared test infrastructure: an in-memory `UserStore` double.
//!
//! The double enforces the same atomicity guarantees as the MongoDB store
//! (uniqueness checked under the insert, membership-guarded event push), so
//! service behavior under races can be asserted without a live database.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use eventflow_core::domains::account::{
    AccountService, PushOutcome, StoreError, User, UserStore,
};

#[derive(Default)]
pub struct InMemoryUserStore {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Number of persisted records.
    pub fn user_count(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    /// The `registered_events` list for a user, if the user exists.
    pub fn events_for(&self, username: &str) -> Option<Vec<String>> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.username == username)
            .map(|u| u.registered_events.clone())
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_identifier(&self, identifier: &str) -> Result<Option<User>, StoreError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == identifier || u.username == identifier)
            .cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn insert_user(&self, user: &User) -> Result<(), StoreError> {
        // Check and insert under one lock, mirroring the unique-index
        // guarantee of the real store.
        let mut users = self.users.lock().unwrap();
        if users
            .iter()
            .any(|u| u.email == user.email || u.username == user.username)
        {
            return Err(StoreError::DuplicateKey);
        }
        users.push(user.clone());
        Ok(())
    }

    async fn push_event_if_absent(
        &self,
        username: &str,
        event: &str,
    ) -> Result<PushOutcome, StoreError> {
        let mut users = self.users.lock().unwrap();
        match users.iter_mut().find(|u| u.username == username) {
            None => Ok(PushOutcome::UserNotFound),
            Some(user) if user.registered_events.iter().any(|e| e == event) => {
                Ok(PushOutcome::AlreadyRegistered)
            }
            Some(user) => {
                user.registered_events.push(event.to_string());
                Ok(PushOutcome::Added)
            }
        }
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// An account service wired to a fresh in-memory store. Returns the store
/// handle too so tests can inspect persisted state directly.
pub fn account_service() -> (AccountService, Arc<InMemoryUserStore>) {
    let store = InMemoryUserStore::new();
    let service = AccountService::new(store.clone());
    (service, store)
}
