use serde::Serialize;
use std::env;
use std::fmt;
use thiserror::Error;

pub const API_KEY: &str = "PORKBUN_API_KEY";
pub const SECRET_KEY: &str = "PORKBUN_SECRET_KEY";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CredentialError {
    #[error("Missing credential: {0}")]
    Missing(String),

    #[error("Credential source error: {0}")]
    Source(String),
}

/// Source of the API key pair.
#[cfg_attr(test, mockall::automock)]
pub trait CredentialManager: Send + Sync {
    fn get(&self, key: &str) -> Result<String, CredentialError>;
}

/// Reads credentials from process environment variables.
#[derive(Debug, Default)]
pub struct EnvCredentialManager;

impl CredentialManager for EnvCredentialManager {
    fn get(&self, key: &str) -> Result<String, CredentialError> {
        match env::var(key) {
            Ok(value) if !value.is_empty() => Ok(value),
            Ok(_) | Err(env::VarError::NotPresent) => {
                Err(CredentialError::Missing(key.to_string()))
            }
            Err(e) => Err(CredentialError::Source(format!("{key}: {e}"))),
        }
    }
}

/// API key pair sent with every request as `apikey` / `secretapikey`.
#[derive(Clone, Serialize, PartialEq, Eq)]
pub struct Credentials {
    #[serde(rename = "apikey")]
    api_key: String,
    #[serde(rename = "secretapikey")]
    secret_key: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            secret_key: secret_key.into(),
        }
    }

    pub fn load(manager: &dyn CredentialManager) -> Result<Self, CredentialError> {
        Ok(Self::new(manager.get(API_KEY)?, manager.get(SECRET_KEY)?))
    }

    pub fn from_env() -> Result<Self, CredentialError> {
        Self::load(&EnvCredentialManager)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"<redacted>")
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use mockall::predicate::*;

    #[test]
    fn test_load_from_manager() {
        let mut manager = MockCredentialManager::new();
        manager
            .expect_get()
            .with(eq(API_KEY))
            .times(1)
            .returning(|_| Ok("pk1_abc".to_string()));
        manager
            .expect_get()
            .with(eq(SECRET_KEY))
            .times(1)
            .returning(|_| Ok("sk1_def".to_string()));

        let creds = Credentials::load(&manager).unwrap();
        assert_eq!(creds, Credentials::new("pk1_abc", "sk1_def"));
    }

    #[test]
    fn test_load_stops_at_first_missing_key() {
        let mut manager = MockCredentialManager::new();
        manager
            .expect_get()
            .with(eq(API_KEY))
            .times(1)
            .returning(|key| Err(CredentialError::Missing(key.to_string())));
        manager.expect_get().with(eq(SECRET_KEY)).never();

        assert_matches!(
            Credentials::load(&manager),
            Err(CredentialError::Missing(key)) if key == API_KEY
        );
    }

    #[test]
    fn test_serializes_wire_field_names() {
        let body = serde_json::to_value(Credentials::new("key", "secret")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "apikey": "key", "secretapikey": "secret" })
        );
    }

    #[test]
    fn test_debug_is_redacted() {
        let debug = format!("{:?}", Credentials::new("pk1_visible", "sk1_visible"));
        assert!(!debug.contains("pk1_visible"));
        assert!(!debug.contains("sk1_visible"));
        assert!(debug.contains("<redacted>"));
    }
}
