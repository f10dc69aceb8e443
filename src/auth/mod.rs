//! Authentication system
//!
//! Site table, secret resolution and credential verification.

pub mod digest;
pub mod results;
pub mod secrets;
pub mod sites;
pub mod validator;

pub use results::VerificationResult;
pub use secrets::{EnvSecrets, MapSecrets, SecretSource};
pub use sites::{SiteEntry, SiteTable};
pub use validator::Verifier;
