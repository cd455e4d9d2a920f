//! MongoDB-backed `UserStore`.

use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::IndexOptions;
use mongodb::{Client, Collection, Database, IndexModel};
use tracing::info;

use crate::domains::account::models::User;
use crate::domains::account::store::{PushOutcome, StoreError, UserStore};

/// Database and collection names from the original deployment.
const DB_NAME: &str = "users";
const COLLECTION_NAME: &str = "user";

/// MongoDB code for a unique-index violation.
const DUPLICATE_KEY_CODE: i32 = 11000;

pub struct MongoUserStore {
    db: Database,
    users: Collection<User>,
}

impl MongoUserStore {
    pub fn new(client: &Client) -> Self {
        let db = client.database(DB_NAME);
        let users = db.collection::<User>(COLLECTION_NAME);
        Self { db, users }
    }

    /// Create the unique indexes on `email` and `username`.
    ///
    /// Run once at startup. With these in place a concurrent duplicate
    /// registration loses at the insert instead of slipping past an
    /// existence check.
    pub async fn ensure_indexes(&self) -> Result<(), StoreError> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        self.users
            .create_indexes([email_index, username_index])
            .await
            .map_err(map_mongo_err)?;

        info!("Unique indexes on email and username are in place");
        Ok(())
    }
}

#[async_trait]
impl UserStore for MongoUserStore {
    async fn find_by_identifier(&self, identifier: &str) -> Result<Option<User>, StoreError> {
        self.users
            .find_one(doc! {
                "$or": [
                    { "email": identifier },
                    { "username": identifier },
                ]
            })
            .await
            .map_err(map_mongo_err)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        self.users
            .find_one(doc! { "username": username })
            .await
            .map_err(map_mongo_err)
    }

    async fn insert_user(&self, user: &User) -> Result<(), StoreError> {
        self.users
            .insert_one(user)
            .await
            .map(|_| ())
            .map_err(map_mongo_err)
    }

    async fn push_event_if_absent(
        &self,
        username: &str,
        event: &str,
    ) -> Result<PushOutcome, StoreError> {
        // Membership-guarded update: matches only when the event is absent,
        // so the check and the push are one atomic operation.
        let result = self
            .users
            .update_one(
                doc! {
                    "username": username,
                    "registered_events": { "$ne": event },
                },
                doc! { "$push": { "registered_events": event } },
            )
            .await
            .map_err(map_mongo_err)?;

        if result.modified_count == 1 {
            return Ok(PushOutcome::Added);
        }

        // Nothing matched: either the user does not exist or the event is
        // already in the list. One lookup tells them apart.
        match self.find_by_username(username).await? {
            Some(_) => Ok(PushOutcome::AlreadyRegistered),
            None => Ok(PushOutcome::UserNotFound),
        }
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.db
            .run_command(doc! { "ping": 1 })
            .await
            .map(|_| ())
            .map_err(map_mongo_err)
    }
}

fn map_mongo_err(err: mongodb::error::Error) -> StoreError {
    if is_duplicate_key(&err) {
        StoreError::DuplicateKey
    } else {
        StoreError::Unavailable(err.into())
    }
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    match *err.kind {
        ErrorKind::Write(WriteFailure::WriteError(ref write_err)) => {
            write_err.code == DUPLICATE_KEY_CODE
        }
        ErrorKind::Command(ref command_err) => command_err.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}
