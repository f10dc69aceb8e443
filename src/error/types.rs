//! Error types
//!
//! Defines the verification error taxonomy shared by the verifier and the HTTP layer.

use std::fmt;

/// Failure classes of a verification attempt.
///
/// The carried string is a server-side detail (which reference was missing,
/// which key was unknown). It is written to the log and never sent to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyError {
    /// Missing or invalid input, or an unknown site key
    BadRequest(String),
    /// The resolved site has no usable secret configured
    ServerMisconfiguration(String),
    /// The secret does not match
    InvalidCredential(String),
    /// Anything unexpected: malformed body, failing secret source
    InternalError(String),
}

impl VerifyError {
    /// Short, stable name of the failure class, used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            VerifyError::BadRequest(_) => "bad_request",
            VerifyError::ServerMisconfiguration(_) => "server_misconfiguration",
            VerifyError::InvalidCredential(_) => "invalid_credential",
            VerifyError::InternalError(_) => "internal_error",
        }
    }

    /// True for failures caused by server state rather than by the caller.
    pub fn is_server_side(&self) -> bool {
        matches!(
            self,
            VerifyError::ServerMisconfiguration(_) | VerifyError::InternalError(_)
        )
    }
}

impl fmt::Display for VerifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerifyError::BadRequest(s) => write!(f, "Bad request: {}", s),
            VerifyError::ServerMisconfiguration(s) => write!(f, "Server misconfiguration: {}", s),
            VerifyError::InvalidCredential(s) => write!(f, "Invalid credential: {}", s),
            VerifyError::InternalError(s) => write!(f, "Internal error: {}", s),
        }
    }
}

impl std::error::Error for VerifyError {}

/// Errors that stop the server from starting
#[derive(Debug)]
pub enum StartupError {
    Config(config::ConfigError),
    Bind(String, std::io::Error),
    Serve(std::io::Error),
}

impl fmt::Display for StartupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartupError::Config(e) => write!(f, "Configuration error: {}", e),
            StartupError::Bind(addr, e) => write!(f, "Failed to bind to {}: {}", addr, e),
            StartupError::Serve(e) => write!(f, "Server error: {}", e),
        }
    }
}

impl std::error::Error for StartupError {}

impl From<config::ConfigError> for StartupError {
    fn from(error: config::ConfigError) -> Self {
        StartupError::Config(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_side_classes() {
        assert!(VerifyError::ServerMisconfiguration("x".into()).is_server_side());
        assert!(VerifyError::InternalError("x".into()).is_server_side());
        assert!(!VerifyError::BadRequest("x".into()).is_server_side());
        assert!(!VerifyError::InvalidCredential("x".into()).is_server_side());
    }

    #[test]
    fn test_display_carries_detail() {
        let err = VerifyError::ServerMisconfiguration("BAIDU_HASH is not set".into());
        assert_eq!(err.to_string(), "Server misconfiguration: BAIDU_HASH is not set");
        assert_eq!(err.kind(), "server_misconfiguration");
    }
}
