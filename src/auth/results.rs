//! Verification result types

use serde::Serialize;

/// Outcome of a verification, as returned to the caller.
///
/// `target_url` is only present on success, and is empty when the site has
/// no redirect configured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_url: Option<String>,
}

impl VerificationResult {
    pub fn granted(target_url: String) -> Self {
        Self {
            success: true,
            target_url: Some(target_url),
        }
    }

    pub fn denied() -> Self {
        Self {
            success: false,
            target_url: None,
        }
    }
}
