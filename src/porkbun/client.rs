use log::{debug, warn};
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

use crate::auth::Credentials;
use crate::core::DefaultDomain;
use crate::core::domain::scoped_path;
use crate::error::{Error, Result};
use crate::porkbun::types::*;

pub const BASE_URL: &str = "https://api.porkbun.com/api/json/v3";
pub const BASE_URL_IPV4: &str = "https://api-ipv4.porkbun.com/api/json/v3";

/// Status value the registrar puts in failed responses.
pub const STATUS_ERROR: &str = "ERROR";

#[derive(Debug, Clone)]
pub struct PorkbunConfig {
    pub api_url: String,
    /// Host that only answers over IPv4; used to learn the caller's v4 address.
    pub ipv4_api_url: String,
    /// Used by domain-scoped calls that don't name a domain.
    pub domain: Option<String>,
    /// Ping once during construction and fail if the keys are rejected.
    pub check_credentials: bool,
    /// Request timeout; `None` leaves reqwest's default (no timeout).
    pub timeout: Option<Duration>,
}

impl Default for PorkbunConfig {
    fn default() -> Self {
        Self {
            api_url: BASE_URL.to_string(),
            ipv4_api_url: BASE_URL_IPV4.to_string(),
            domain: None,
            check_credentials: true,
            timeout: None,
        }
    }
}

impl PorkbunConfig {
    pub fn with_domain(domain: impl Into<String>) -> Self {
        Self {
            domain: Some(domain.into()),
            ..Self::default()
        }
    }
}

/// Client for the Porkbun JSON API. Every endpoint is a POST whose body
/// carries the key pair.
#[derive(Debug)]
pub struct PorkbunClient {
    config: PorkbunConfig,
    client: Client,
    credentials: Credentials,
    domain: DefaultDomain,
}

impl PorkbunClient {
    pub async fn new(config: PorkbunConfig, credentials: Credentials) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        let domain = DefaultDomain::new(config.domain.clone());

        let porkbun = Self {
            config,
            client,
            credentials,
            domain,
        };

        if porkbun.config.check_credentials {
            porkbun.check_credentials().await?;
        }
        Ok(porkbun)
    }

    async fn check_credentials(&self) -> Result<()> {
        let response = self.ping().await?;
        if response["status"] == STATUS_ERROR {
            let message = response["message"].as_str().unwrap_or_default().to_string();
            warn!("Porkbun rejected the API credentials: {}", message);
            return Err(Error::ConnectionRefused(message));
        }
        Ok(())
    }

    pub fn default_domain(&self) -> Option<&str> {
        self.domain.get()
    }

    /// The domain a call with `domain` would target.
    pub fn resolve_domain<'a>(&'a self, domain: Option<&'a str>) -> Option<&'a str> {
        self.domain.resolve(domain)
    }

    /// Builds `action/{domain}[/rest...]`, filling in the default domain when
    /// the caller passes `None` or an empty string.
    pub(crate) fn scoped(&self, action: &str, domain: Option<&str>, rest: &[&str]) -> String {
        scoped_path(action, self.resolve_domain(domain), rest)
    }

    pub(crate) async fn post<P: Serialize>(&self, endpoint: &str, payload: &P) -> Result<Value> {
        self.post_to(&self.config.api_url, endpoint, payload).await
    }

    async fn post_to<P: Serialize>(
        &self,
        base_url: &str,
        endpoint: &str,
        payload: &P,
    ) -> Result<Value> {
        let url = format!("{}/{}", base_url.trim_end_matches('/'), endpoint);
        debug!("[porkbun] POST {}", url);

        let body = Authenticated {
            credentials: &self.credentials,
            payload,
        };
        let response = self.client.post(&url).json(&body).send().await?;
        debug!("[porkbun] {} -> {}", endpoint, response.status());

        Ok(response.json().await?)
    }

    /// Returns the API status and the caller's public IP (`yourIp`).
    pub async fn ping(&self) -> Result<Value> {
        self.post("ping", &Empty {}).await
    }

    /// Ping through the IPv4-only host, so `yourIp` is always an IPv4 address.
    pub async fn ping_ipv4(&self) -> Result<Value> {
        self.post_to(&self.config.ipv4_api_url, "ping", &Empty {}).await
    }

    pub async fn get_domain_pricing(&self) -> Result<Value> {
        self.post("pricing/get", &Empty {}).await
    }

    /// Lists account domains in pages of 1000 starting at `start`.
    pub async fn list_domains(&self, start: u32, include_labels: bool) -> Result<Value> {
        let req = ListDomainsRequest {
            start: start.to_string(),
            include_labels: yes_no(include_labels),
        };
        self.post("domain/listAll", &req).await
    }

    pub async fn check_domain_availability(&self, domain: Option<&str>) -> Result<Value> {
        let path = self.scoped("domain/checkDomain", domain, &[]);
        self.post(&path, &Empty {}).await
    }

    pub async fn get_name_servers(&self, domain: Option<&str>) -> Result<Value> {
        let path = self.scoped("domain/getNs", domain, &[]);
        self.post(&path, &Empty {}).await
    }

    pub async fn update_name_servers<I, S>(
        &self,
        domain: Option<&str>,
        name_servers: I,
    ) -> Result<Value>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let req = NameServersRequest {
            ns: name_servers.into_iter().map(Into::into).collect(),
        };
        let path = self.scoped("domain/updateNs", domain, &[]);
        self.post(&path, &req).await
    }

    pub async fn retrieve_ssl_bundle(&self, domain: Option<&str>) -> Result<Value> {
        let path = self.scoped("ssl/retrieve", domain, &[]);
        self.post(&path, &Empty {}).await
    }
}
