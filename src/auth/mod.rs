pub mod credentials;

pub use credentials::{CredentialError, CredentialManager, Credentials, EnvCredentialManager};
