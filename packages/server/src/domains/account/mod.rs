//! Account domain - user registration, login, event signup, profiles.
//!
//! `AccountService` holds the business rules; persistence goes through the
//! `UserStore` trait (MongoDB in production, in-memory double in tests).

pub mod error;
pub mod models;
pub mod mongo;
pub mod service;
pub mod store;

// Re-export commonly used types
pub use error::AccountError;
pub use models::{User, UserProfile};
pub use mongo::MongoUserStore;
pub use service::AccountService;
pub use store::{PushOutcome, StoreError, UserStore};
