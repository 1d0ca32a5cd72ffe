//! Client for the Porkbun registrar JSON API: domains, DNS records, URL
//! forwarding, DNSSEC, SSL bundles and dynamic DNS.

pub mod auth;
pub mod config;
pub mod core;
pub mod error;
pub mod porkbun;

pub use auth::Credentials;
pub use crate::core::{RecordType, ValidationError};
pub use error::{Error, Result};
pub use porkbun::{
    DnsRecord, DnssecRecord, ForwardType, PorkbunClient, PorkbunConfig, RecordContent, UrlForward,
};
