//! HTTP handler for the verification endpoint.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use std::sync::Arc;

use crate::auth::{VerificationResult, Verifier};
use crate::config::StatusPolicy;
use crate::error::VerifyError;
use crate::error::handlers::{error_to_status, handle_error};
use crate::middleware::logging::{log_granted, log_request};
use crate::protocol::messages::VerifyRequest;

/// Shared, read-only state handed to every request.
#[derive(Clone)]
pub struct AppState {
    pub verifier: Arc<Verifier>,
    pub policy: StatusPolicy,
}

impl AppState {
    pub fn new(verifier: Verifier, policy: StatusPolicy) -> Self {
        Self {
            verifier: Arc::new(verifier),
            policy,
        }
    }
}

/// `POST /api/verify`
///
/// Success is `200 {"success":true,"targetUrl":...}`. Every failure has the
/// body `{"success":false}`; only the status code may differ, and only under
/// [`StatusPolicy::Detailed`].
///
/// The body is parsed as JSON whatever its `Content-Type`; browsers posting a
/// string body send `text/plain`.
pub async fn handle_verify(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> (StatusCode, Json<VerificationResult>) {
    let request = match parse_request(body) {
        Ok(request) => request,
        Err(err) => return deny("", &err, state.policy),
    };

    log_request(request.site_key());

    match state.verifier.check(request.site_key(), request.password()) {
        Ok(result) => {
            log_granted(request.site_key());
            (StatusCode::OK, Json(result))
        }
        Err(e) => deny(request.site_key(), &e, state.policy),
    }
}

fn parse_request(body: Result<Bytes, BytesRejection>) -> Result<VerifyRequest, VerifyError> {
    let bytes = body.map_err(|rejection| {
        VerifyError::InternalError(format!("unreadable request body: {}", rejection.body_text()))
    })?;
    serde_json::from_slice(&bytes)
        .map_err(|e| VerifyError::InternalError(format!("malformed request body: {}", e)))
}

fn deny(
    site_key: &str,
    err: &VerifyError,
    policy: StatusPolicy,
) -> (StatusCode, Json<VerificationResult>) {
    handle_error(site_key, err);
    (
        error_to_status(err, policy),
        Json(VerificationResult::denied()),
    )
}
