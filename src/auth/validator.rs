//! Credential verifier
//!
//! Resolves a site key to its configured secret and checks a candidate
//! password against it. Each call is independent; the only inputs are the
//! request, the site table and the current contents of the secret source.

use super::digest::{decode_sha256_hex, digest_matches, plaintext_matches};
use super::results::VerificationResult;
use super::secrets::SecretSource;
use super::sites::{SiteEntry, SiteTable};
use crate::config::CompareMode;
use crate::error::VerifyError;
use crate::error::handlers::handle_error;
use std::sync::Arc;

/// Input must be present and bounded. No trimming: `" "` is a valid password.
fn is_valid_input(input: &str, max_length: usize) -> bool {
    !input.is_empty() && input.len() <= max_length
}

pub struct Verifier {
    sites: SiteTable,
    secrets: Arc<dyn SecretSource>,
    mode: CompareMode,
    max_input_length: usize,
}

impl Verifier {
    pub fn new(
        sites: SiteTable,
        secrets: Arc<dyn SecretSource>,
        mode: CompareMode,
        max_input_length: usize,
    ) -> Self {
        Self {
            sites,
            secrets,
            mode,
            max_input_length,
        }
    }

    pub fn sites(&self) -> &SiteTable {
        &self.sites
    }

    /// Verify and collapse every failure into `success: false`.
    ///
    /// Failures are logged with their detail before being discarded.
    pub fn verify(&self, site_key: &str, password: &str) -> VerificationResult {
        match self.check(site_key, password) {
            Ok(result) => result,
            Err(e) => {
                handle_error(site_key, &e);
                VerificationResult::denied()
            }
        }
    }

    /// Verify, keeping the failure class for the transport layer.
    pub fn check(&self, site_key: &str, password: &str) -> Result<VerificationResult, VerifyError> {
        if !is_valid_input(site_key, self.max_input_length) {
            return Err(VerifyError::BadRequest("missing or oversized site key".into()));
        }
        if !is_valid_input(password, self.max_input_length) {
            return Err(VerifyError::BadRequest("missing or oversized password".into()));
        }

        let site = self
            .sites
            .get(site_key)
            .ok_or_else(|| VerifyError::BadRequest("unknown site key".into()))?;

        let stored = self
            .secrets
            .resolve(&site.credential_ref)?
            .filter(|s| !s.is_empty())
            .ok_or_else(|| {
                VerifyError::ServerMisconfiguration(format!("{} is not set", site.credential_ref))
            })?;

        if !self.matches(site, password, &stored)? {
            return Err(VerifyError::InvalidCredential(format!(
                "wrong password for site {}",
                site.key
            )));
        }

        Ok(VerificationResult::granted(self.resolve_target(site)?))
    }

    fn matches(&self, site: &SiteEntry, password: &str, stored: &str) -> Result<bool, VerifyError> {
        match self.mode {
            CompareMode::Hashed => {
                let expected = decode_sha256_hex(stored).ok_or_else(|| {
                    VerifyError::ServerMisconfiguration(format!(
                        "{} is not a hex SHA-256 digest",
                        site.credential_ref
                    ))
                })?;
                Ok(digest_matches(password, &expected))
            }
            CompareMode::Plaintext => Ok(plaintext_matches(password, stored)),
        }
    }

    fn resolve_target(&self, site: &SiteEntry) -> Result<String, VerifyError> {
        match &site.target_ref {
            Some(reference) => Ok(self.secrets.resolve(reference)?.unwrap_or_default()),
            None => Ok(String::new()),
        }
    }
}
