// HTTP routes
pub mod account;
pub mod events;
pub mod health;

pub use account::*;
pub use events::*;
pub use health::*;
