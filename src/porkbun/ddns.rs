use log::info;
use serde_json::Value;

use crate::core::RecordType;
use crate::error::{Error, Result};
use crate::porkbun::client::PorkbunClient;
use crate::porkbun::types::RecordContent;

impl PorkbunClient {
    /// Points the A or AAAA record of `subdomain` at `ip`, or at the caller's
    /// public address when `ip` is `None`. With `ipv4_only` the address is
    /// discovered through the IPv4-only host.
    pub async fn ddns_update(
        &self,
        domain: Option<&str>,
        subdomain: &str,
        ip: Option<&str>,
        ipv4_only: bool,
    ) -> Result<Value> {
        let ip = match ip {
            Some(ip) if !ip.is_empty() => ip.to_string(),
            _ => self.public_ip(ipv4_only).await?,
        };
        let record_type = RecordType::for_address(&ip);

        info!(
            "Updating {} record for '{}' on {} to {}",
            record_type,
            subdomain,
            self.resolve_domain(domain).unwrap_or("<no domain>"),
            ip
        );
        self.edit_dns_record_by_name_type(
            domain,
            record_type.as_str(),
            subdomain,
            &RecordContent::new(ip),
        )
        .await
    }

    async fn public_ip(&self, ipv4_only: bool) -> Result<String> {
        let response = if ipv4_only {
            self.ping_ipv4().await?
        } else {
            self.ping().await?
        };

        match response["yourIp"].as_str() {
            Some(ip) if !ip.is_empty() => Ok(ip.to_string()),
            _ => Err(Error::IpDiscovery(
                response["message"]
                    .as_str()
                    .unwrap_or("ping response has no yourIp field")
                    .to_string(),
            )),
        }
    }
}
