use std::env;

use crate::porkbun::PorkbunConfig;

/// Settings for the `porkbun-ddns` binary. Credentials are read separately
/// through `auth::EnvCredentialManager`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub domain: String,
    pub subdomain: String,
    pub ip: Option<String>,
    pub ipv4_only: bool,
    pub check_credentials: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        Self::from_vars(|key| env::var(key))
    }

    pub fn from_vars<F>(var: F) -> Result<Self, env::VarError>
    where
        F: Fn(&str) -> Result<String, env::VarError>,
    {
        Ok(Config {
            domain: var("PORKBUN_DOMAIN")?,
            subdomain: var("DDNS_SUBDOMAIN").unwrap_or_default(),
            ip: var("DDNS_IP").ok().filter(|ip| !ip.is_empty()),
            ipv4_only: parse_flag(var("DDNS_IPV4_ONLY").ok(), true),
            check_credentials: parse_flag(var("PORKBUN_CHECK_CREDENTIALS").ok(), true),
        })
    }

    pub fn porkbun_config(&self) -> PorkbunConfig {
        PorkbunConfig {
            check_credentials: self.check_credentials,
            ..PorkbunConfig::with_domain(self.domain.clone())
        }
    }
}

fn parse_flag(value: Option<String>, default: bool) -> bool {
    match value.as_deref().map(str::trim) {
        Some(v) if v.eq_ignore_ascii_case("true") || v == "1" || v.eq_ignore_ascii_case("yes") => {
            true
        }
        Some(v) if v.eq_ignore_ascii_case("false") || v == "0" || v.eq_ignore_ascii_case("no") => {
            false
        }
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Result<String, env::VarError> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned().ok_or(env::VarError::NotPresent)
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_vars(vars(&[("PORKBUN_DOMAIN", "example.com")])).unwrap();
        assert_eq!(
            config,
            Config {
                domain: "example.com".into(),
                subdomain: String::new(),
                ip: None,
                ipv4_only: true,
                check_credentials: true,
            }
        );
    }

    #[test]
    fn test_missing_domain() {
        assert!(Config::from_vars(vars(&[])).is_err());
    }

    #[test]
    fn test_all_values() {
        let config = Config::from_vars(vars(&[
            ("PORKBUN_DOMAIN", "example.com"),
            ("DDNS_SUBDOMAIN", "home"),
            ("DDNS_IP", "203.0.113.9"),
            ("DDNS_IPV4_ONLY", "no"),
            ("PORKBUN_CHECK_CREDENTIALS", "0"),
        ]))
        .unwrap();
        assert_eq!(config.subdomain, "home");
        assert_eq!(config.ip.as_deref(), Some("203.0.113.9"));
        assert!(!config.ipv4_only);
        assert!(!config.check_credentials);

        let porkbun = config.porkbun_config();
        assert_eq!(porkbun.domain.as_deref(), Some("example.com"));
        assert!(!porkbun.check_credentials);
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag(Some("TRUE".into()), false));
        assert!(!parse_flag(Some("no".into()), true));
        assert!(parse_flag(Some("garbage".into()), true));
        assert!(!parse_flag(None, false));
    }
}
