//! Porkbun registrar API client

pub mod client;
mod ddns;
mod forwarding;
mod records;
pub mod types;


pub use client::{BASE_URL, BASE_URL_IPV4, PorkbunClient, PorkbunConfig};
pub use types::{DEFAULT_TTL, DnsRecord, DnssecRecord, ForwardType, RecordContent, UrlForward};
