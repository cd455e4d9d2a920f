use serde::{Deserialize, Serialize};

/// User record - MongoDB persistence layer
///
/// `email` and `username` are each unique across the collection (enforced by
/// unique indexes, see `MongoUserStore::ensure_indexes`). The password is
/// stored verbatim; there is no hashing in the current system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    pub username: String,
    pub password: String,

    /// Events the user has signed up for, in signup order. Append-only:
    /// no removal path exists anywhere in the system.
    #[serde(default)]
    pub registered_events: Vec<String>,
}

impl User {
    /// Create a fresh record with no event signups.
    pub fn new(email: String, username: String, password: String) -> Self {
        Self {
            email,
            username,
            password,
            registered_events: Vec::new(),
        }
    }
}

/// Public representation of a user (for profile responses).
///
/// Deliberately has no `password` field, so the secret cannot leak through
/// serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub email: String,
    pub username: String,
    pub registered_events: Vec<String>,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            email: user.email,
            username: user.username,
            registered_events: user.registered_events,
        }
    }
}
