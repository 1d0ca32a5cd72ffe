use serde_json::Value;
use std::fmt::Display;

use crate::error::Result;
use crate::porkbun::client::PorkbunClient;
use crate::porkbun::types::*;

impl PorkbunClient {
    pub async fn add_url_forwarding(
        &self,
        domain: Option<&str>,
        forward: &UrlForward,
    ) -> Result<Value> {
        let req = UrlForwardRequest::from(forward);
        let path = self.scoped("domain/addUrlForward", domain, &[]);
        self.post(&path, &req).await
    }

    pub async fn get_url_forwarding(&self, domain: Option<&str>) -> Result<Value> {
        let path = self.scoped("domain/getUrlForwarding", domain, &[]);
        self.post(&path, &Empty {}).await
    }

    pub async fn delete_url_forwarding(
        &self,
        domain: Option<&str>,
        record_id: impl Display,
    ) -> Result<Value> {
        let id = record_id.to_string();
        let path = self.scoped("domain/deleteUrlForward", domain, &[id.as_str()]);
        self.post(&path, &Empty {}).await
    }
}
