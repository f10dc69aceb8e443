//! Error handlers
//!
//! Logs verification failures and maps them to HTTP status codes.

use crate::config::StatusPolicy;
use crate::error::types::VerifyError;
use crate::middleware::logging::loggable_key;
use axum::http::StatusCode;
use log::{error, warn};

/// Log a verification failure for server-side diagnostics.
pub fn handle_error(site_key: &str, err: &VerifyError) {
    let site_key = loggable_key(site_key);
    if err.is_server_side() {
        error!("Verification for site {:?} failed [{}]: {}", site_key, err.kind(), err);
    } else {
        warn!("Verification for site {:?} rejected [{}]: {}", site_key, err.kind(), err);
    }
}

/// Convert an error to the HTTP status code dictated by the deployment policy
pub fn error_to_status(err: &VerifyError, policy: StatusPolicy) -> StatusCode {
    match policy {
        StatusPolicy::Uniform => StatusCode::OK,
        StatusPolicy::Detailed => match err {
            VerifyError::BadRequest(_) => StatusCode::BAD_REQUEST,
            VerifyError::InvalidCredential(_) => StatusCode::OK,
            VerifyError::ServerMisconfiguration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            VerifyError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_policy_is_always_ok() {
        let errors = [
            VerifyError::BadRequest("a".into()),
            VerifyError::ServerMisconfiguration("b".into()),
            VerifyError::InvalidCredential("c".into()),
            VerifyError::InternalError("d".into()),
        ];
        for err in &errors {
            assert_eq!(error_to_status(err, StatusPolicy::Uniform), StatusCode::OK);
        }
    }

    #[test]
    fn test_detailed_policy() {
        assert_eq!(
            error_to_status(&VerifyError::BadRequest("a".into()), StatusPolicy::Detailed),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            error_to_status(
                &VerifyError::ServerMisconfiguration("b".into()),
                StatusPolicy::Detailed
            ),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            error_to_status(&VerifyError::InvalidCredential("c".into()), StatusPolicy::Detailed),
            StatusCode::OK
        );
        assert_eq!(
            error_to_status(&VerifyError::InternalError("d".into()), StatusPolicy::Detailed),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
