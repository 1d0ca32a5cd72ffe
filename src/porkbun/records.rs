use serde_json::Value;
use std::fmt::Display;

use crate::core::validate_record_type;
use crate::error::Result;
use crate::porkbun::client::PorkbunClient;
use crate::porkbun::types::*;

impl PorkbunClient {
    pub async fn create_dns_record(
        &self,
        domain: Option<&str>,
        record: &DnsRecord,
    ) -> Result<Value> {
        let record_type = validate_record_type(&record.record_type, record.prio)?;
        let req = RecordRequest::new(record, record_type);
        let path = self.scoped("dns/create", domain, &[]);
        self.post(&path, &req).await
    }

    /// All records for the domain, or the single record `record_id`.
    pub async fn get_dns_records(
        &self,
        domain: Option<&str>,
        record_id: Option<&str>,
    ) -> Result<Value> {
        let path = self.scoped("dns/retrieve", domain, &[record_id.unwrap_or_default()]);
        self.post(&path, &Empty {}).await
    }

    pub async fn edit_dns_record(
        &self,
        domain: Option<&str>,
        record_id: impl Display,
        record: &DnsRecord,
    ) -> Result<Value> {
        let record_type = validate_record_type(&record.record_type, record.prio)?;
        let req = RecordRequest::new(record, record_type);
        let id = record_id.to_string();
        let path = self.scoped("dns/edit", domain, &[id.as_str()]);
        self.post(&path, &req).await
    }

    pub async fn delete_dns_record(
        &self,
        domain: Option<&str>,
        record_id: impl Display,
    ) -> Result<Value> {
        let id = record_id.to_string();
        let path = self.scoped("dns/delete", domain, &[id.as_str()]);
        self.post(&path, &Empty {}).await
    }

    pub async fn get_dns_records_by_name_type(
        &self,
        domain: Option<&str>,
        record_type: &str,
        subdomain: &str,
    ) -> Result<Value> {
        let record_type = validate_record_type(record_type, None)?;
        let path = self.scoped(
            "dns/retrieveByNameType",
            domain,
            &[record_type.as_str(), subdomain],
        );
        self.post(&path, &Empty {}).await
    }

    /// Rewrites every record matching the type and subdomain.
    pub async fn edit_dns_record_by_name_type(
        &self,
        domain: Option<&str>,
        record_type: &str,
        subdomain: &str,
        content: &RecordContent,
    ) -> Result<Value> {
        let record_type = validate_record_type(record_type, content.prio)?;
        let req = ContentRequest::from(content);
        let path = self.scoped(
            "dns/editByNameType",
            domain,
            &[record_type.as_str(), subdomain],
        );
        self.post(&path, &req).await
    }

    pub async fn delete_dns_record_by_name_type(
        &self,
        domain: Option<&str>,
        record_type: &str,
        subdomain: &str,
    ) -> Result<Value> {
        let record_type = validate_record_type(record_type, None)?;
        let path = self.scoped(
            "dns/deleteByNameType",
            domain,
            &[record_type.as_str(), subdomain],
        );
        self.post(&path, &Empty {}).await
    }

    pub async fn create_dnssec_record(
        &self,
        domain: Option<&str>,
        record: &DnssecRecord,
    ) -> Result<Value> {
        let path = self.scoped("dns/createDnssecRecord", domain, &[]);
        self.post(&path, record).await
    }

    pub async fn get_dnssec_records(&self, domain: Option<&str>) -> Result<Value> {
        let path = self.scoped("dns/getDnssecRecords", domain, &[]);
        self.post(&path, &Empty {}).await
    }

    pub async fn delete_dnssec_record(
        &self,
        domain: Option<&str>,
        key_tag: impl Display,
    ) -> Result<Value> {
        let key_tag = key_tag.to_string();
        let path = self.scoped("dns/deleteDnssecRecord", domain, &[key_tag.as_str()]);
        self.post(&path, &Empty {}).await
    }
}
