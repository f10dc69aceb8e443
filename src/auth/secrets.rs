//! Secret sources
//!
//! Resolves configuration references (such as `BAIDU_HASH`) to their current
//! values. Sources are consulted on every request and never cache.

use crate::error::VerifyError;
use std::collections::HashMap;
use std::env::{self, VarError};
use std::sync::RwLock;

/// Read-only lookup of configuration values by reference name.
pub trait SecretSource: Send + Sync {
    /// Returns `Ok(None)` when the reference is not set.
    fn resolve(&self, reference: &str) -> Result<Option<String>, VerifyError>;
}

/// Secrets taken from the process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSecrets;

impl SecretSource for EnvSecrets {
    fn resolve(&self, reference: &str) -> Result<Option<String>, VerifyError> {
        match env::var(reference) {
            Ok(value) => Ok(Some(value)),
            Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(_)) => Err(VerifyError::InternalError(format!(
                "{} is not valid unicode",
                reference
            ))),
        }
    }
}

/// Secrets held in memory, for embedding and tests
#[derive(Debug, Default)]
pub struct MapSecrets {
    values: RwLock<HashMap<String, String>>,
}

impl MapSecrets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or replace a value; later lookups see the change.
    pub fn set(&self, reference: &str, value: &str) {
        if let Ok(mut values) = self.values.write() {
            values.insert(reference.to_string(), value.to_string());
        }
    }

    pub fn remove(&self, reference: &str) {
        if let Ok(mut values) = self.values.write() {
            values.remove(reference);
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapSecrets {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let values = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            values: RwLock::new(values),
        }
    }
}

impl SecretSource for MapSecrets {
    fn resolve(&self, reference: &str) -> Result<Option<String>, VerifyError> {
        let values = self
            .values
            .read()
            .map_err(|_| VerifyError::InternalError("secret map lock poisoned".into()))?;
        Ok(values.get(reference).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_missing_reference() {
        let value = EnvSecrets
            .resolve("SITE_GATE_TEST_REFERENCE_THAT_IS_NEVER_SET")
            .unwrap();
        assert_eq!(value, None);
    }

    #[test]
    fn test_map_sees_updates() {
        let secrets: MapSecrets = [("A_HASH", "one")].into_iter().collect();
        assert_eq!(secrets.resolve("A_HASH").unwrap().as_deref(), Some("one"));

        secrets.set("A_HASH", "two");
        assert_eq!(secrets.resolve("A_HASH").unwrap().as_deref(), Some("two"));

        secrets.remove("A_HASH");
        assert_eq!(secrets.resolve("A_HASH").unwrap(), None);
    }
}
