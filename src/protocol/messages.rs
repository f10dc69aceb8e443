//! Wire messages
//!
//! JSON body accepted by the verification endpoint. The response body is
//! [`crate::auth::VerificationResult`].

use serde::Deserialize;
use std::fmt;

/// `{ "siteKey": string, "password": string }`
///
/// Absent and `null` fields are read as empty strings so that they fail
/// input validation like any other empty value.
#[derive(Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct VerifyRequest {
    #[serde(default)]
    site_key: Option<String>,
    #[serde(default)]
    password: Option<String>,
}

impl VerifyRequest {
    pub fn new(site_key: &str, password: &str) -> Self {
        Self {
            site_key: Some(site_key.to_string()),
            password: Some(password.to_string()),
        }
    }

    pub fn site_key(&self) -> &str {
        self.site_key.as_deref().unwrap_or_default()
    }

    pub fn password(&self) -> &str {
        self.password.as_deref().unwrap_or_default()
    }
}

// Never print the password.
impl fmt::Debug for VerifyRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VerifyRequest")
            .field("site_key", &self.site_key)
            .field("password", &"<redacted>")
            .finish()
    }
}
