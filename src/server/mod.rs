//! Server core functionality
//!
//! Router construction, listener binding and the serve loop.

pub mod core;

pub use self::core::{Server, build_state, router};
