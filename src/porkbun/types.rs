//! Request bodies. The registrar expects every scalar as a string: numbers in
//! decimal and booleans as `"yes"` / `"no"`.

use serde::Serialize;

use crate::auth::Credentials;
use crate::core::RecordType;
use crate::core::validation::effective_priority;

pub const DEFAULT_TTL: u32 = 600;

pub(crate) fn yes_no(flag: bool) -> String {
    let s = if flag { "yes" } else { "no" };
    s.to_string()
}

/// Credentials and payload merged into one JSON object.
#[derive(Serialize)]
pub(crate) struct Authenticated<'a, P: Serialize> {
    #[serde(flatten)]
    pub credentials: &'a Credentials,
    #[serde(flatten)]
    pub payload: &'a P,
}

#[derive(Serialize)]
pub(crate) struct Empty {}

#[derive(Serialize, Debug, PartialEq)]
pub(crate) struct ListDomainsRequest {
    pub start: String,
    #[serde(rename = "includeLabels")]
    pub include_labels: String,
}

#[derive(Serialize, Debug, PartialEq)]
pub(crate) struct NameServersRequest {
    pub ns: Vec<String>,
}

/// A DNS record as the caller describes it for create and edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsRecord {
    /// Subdomain; empty for the root, `*` for a wildcard.
    pub name: String,
    /// Any case; checked against the allowed types before sending.
    pub record_type: String,
    pub content: String,
    pub ttl: u32,
    pub prio: Option<u32>,
}

impl DnsRecord {
    pub fn new(
        name: impl Into<String>,
        record_type: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            record_type: record_type.into(),
            content: content.into(),
            ttl: DEFAULT_TTL,
            prio: None,
        }
    }

    pub fn with_ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn with_prio(mut self, prio: u32) -> Self {
        self.prio = Some(prio);
        self
    }
}

#[derive(Serialize, Debug, PartialEq)]
pub(crate) struct RecordRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub content: String,
    pub ttl: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prio: Option<String>,
}

impl RecordRequest {
    pub fn new(record: &DnsRecord, record_type: RecordType) -> Self {
        Self {
            name: record.name.clone(),
            record_type: record_type.to_string(),
            content: record.content.clone(),
            ttl: record.ttl.to_string(),
            prio: effective_priority(record.prio).map(|p| p.to_string()),
        }
    }
}

/// New content for the by-name-type edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordContent {
    pub content: String,
    pub ttl: u32,
    pub prio: Option<u32>,
}

impl RecordContent {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ttl: DEFAULT_TTL,
            prio: None,
        }
    }

    pub fn with_ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn with_prio(mut self, prio: u32) -> Self {
        self.prio = Some(prio);
        self
    }
}

#[derive(Serialize, Debug, PartialEq)]
pub(crate) struct ContentRequest {
    pub content: String,
    pub ttl: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prio: Option<String>,
}

impl From<&RecordContent> for ContentRequest {
    fn from(c: &RecordContent) -> Self {
        Self {
            content: c.content.clone(),
            ttl: c.ttl.to_string(),
            prio: effective_priority(c.prio).map(|p| p.to_string()),
        }
    }
}

#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ForwardType {
    #[default]
    Temporary,
    Permanent,
}

/// URL forward definition. Defaults: temporary, root subdomain, path not
/// included, wildcard on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlForward {
    pub location: String,
    pub forward_type: ForwardType,
    pub subdomain: String,
    pub include_path: bool,
    pub wildcard: bool,
}

impl UrlForward {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            forward_type: ForwardType::default(),
            subdomain: String::new(),
            include_path: false,
            wildcard: true,
        }
    }
}

#[derive(Serialize, Debug, PartialEq)]
pub(crate) struct UrlForwardRequest {
    pub subdomain: String,
    pub location: String,
    #[serde(rename = "type")]
    pub forward_type: ForwardType,
    #[serde(rename = "includePath")]
    pub include_path: String,
    pub wildcard: String,
}

impl From<&UrlForward> for UrlForwardRequest {
    fn from(f: &UrlForward) -> Self {
        Self {
            subdomain: f.subdomain.clone(),
            location: f.location.clone(),
            forward_type: f.forward_type,
            include_path: yes_no(f.include_path),
            wildcard: yes_no(f.wildcard),
        }
    }
}

/// DNSSEC record fields; anything left `None` is not sent.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DnssecRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digest_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digest: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_sig_life: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_data_flags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_data_protocol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_data_algo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_data_pub_key: Option<String>,
}
