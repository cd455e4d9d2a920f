// EventFlow API Core
//
// Backend for the EventFlow front end: user signup/login, the static event
// catalog, event registration, and profile lookup. All state lives in
// MongoDB; the service layer itself is stateless between requests.

pub mod config;
pub mod domains;
pub mod server;

pub use config::*;
