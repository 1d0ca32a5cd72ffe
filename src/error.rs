use thiserror::Error;

use crate::auth::CredentialError;
use crate::core::ValidationError;

#[derive(Error, Debug)]
pub enum Error {
    /// Rejected client-side; no request was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The credential check at construction was answered with an error status.
    #[error("Connection refused: {0}")]
    ConnectionRefused(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("Could not determine public IP: {0}")]
    IpDiscovery(String),

    #[error(transparent)]
    Credential(#[from] CredentialError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RecordType;
    use assert_matches::assert_matches;

    #[test]
    fn test_validation_error_converts() {
        let err: Error = ValidationError::PriorityNotSupported {
            record_type: RecordType::CNAME,
            allowed: RecordType::WITH_PRIORITY,
        }
        .into();
        assert_matches!(err, Error::Validation(ValidationError::PriorityNotSupported { .. }));
        assert!(err.to_string().contains("CNAME"));
    }

    #[test]
    fn test_connection_refused_carries_message() {
        let err = Error::ConnectionRefused("Invalid API key".to_string());
        assert_eq!(err.to_string(), "Connection refused: Invalid API key");
    }

    #[test]
    fn test_credential_error_converts() {
        let err: Error = CredentialError::Missing("PORKBUN_API_KEY".into()).into();
        assert_eq!(err.to_string(), "Missing credential: PORKBUN_API_KEY");
    }
}
