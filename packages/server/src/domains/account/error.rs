use thiserror::Error;

use crate::domains::account::store::StoreError;

/// Account & registration failures, recovered at the request boundary.
///
/// The display strings are the user-visible messages; they match the wording
/// the front end already expects.
#[derive(Debug, Error)]
pub enum AccountError {
    /// A required field was missing or empty after trimming.
    #[error("{0}")]
    Validation(&'static str),

    /// Another record already holds this email or username.
    #[error("User already exists")]
    UserExists,

    /// Unknown identifier or wrong password; the two cases are deliberately
    /// indistinguishable to the caller.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// No record matches the username.
    #[error("User not found")]
    UserNotFound,

    /// The user already signed up for this event.
    #[error("Already registered for this event")]
    AlreadyRegistered,

    /// The storage backend failed; nothing the caller sent was at fault.
    #[error("Storage unavailable")]
    Storage(#[source] StoreError),
}

impl AccountError {
    pub const ALL_FIELDS_REQUIRED: &'static str = "All fields required";
    pub const MISSING_DATA: &'static str = "Missing data";
}
