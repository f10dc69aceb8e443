//! HTTP protocol
//!
//! Request/response messages and the endpoint handler.

pub mod handlers;
pub mod messages;

pub use handlers::{AppState, handle_verify};
pub use messages::VerifyRequest;
