//! Default-domain resolution shared by every domain-scoped operation.

/// The domain a client falls back to when a call does not name one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefaultDomain(Option<String>);

impl DefaultDomain {
    pub fn new(domain: Option<String>) -> Self {
        Self(domain.filter(|d| !d.is_empty()))
    }

    pub fn get(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// Explicit non-empty domain wins, then the stored default, then nothing.
    pub fn resolve<'a>(&'a self, explicit: Option<&'a str>) -> Option<&'a str> {
        match explicit {
            Some(domain) if !domain.is_empty() => Some(domain),
            _ => self.get(),
        }
    }
}

impl From<Option<String>> for DefaultDomain {
    fn from(domain: Option<String>) -> Self {
        Self::new(domain)
    }
}

/// Joins an action with the resolved domain and any trailing segments.
/// Empty trailing segments are skipped; a missing domain leaves an empty
/// segment so the registrar reports the error.
pub fn scoped_path(action: &str, domain: Option<&str>, rest: &[&str]) -> String {
    let mut path = format!("{}/{}", action, domain.unwrap_or_default());
    for segment in rest.iter().filter(|s| !s.is_empty()) {
        path.push('/');
        path.push_str(segment);
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_domain_overrides_default() {
        let default = DefaultDomain::new(Some("default.com".into()));
        assert_eq!(default.resolve(Some("other.com")), Some("other.com"));
    }

    #[test]
    fn test_missing_domain_uses_default() {
        let default = DefaultDomain::new(Some("default.com".into()));
        assert_eq!(default.resolve(None), Some("default.com"));
        assert_eq!(default.resolve(Some("")), Some("default.com"));
    }

    #[test]
    fn test_no_default_passes_through() {
        let default = DefaultDomain::default();
        assert_eq!(default.resolve(None), None);
        assert_eq!(default.resolve(Some("")), None);
        assert_eq!(default.resolve(Some("x.org")), Some("x.org"));
    }

    #[test]
    fn test_empty_default_is_no_default() {
        assert_eq!(DefaultDomain::new(Some(String::new())).get(), None);
    }

    #[test]
    fn test_scoped_path() {
        assert_eq!(
            scoped_path("dns/create", Some("example.com"), &[]),
            "dns/create/example.com"
        );
        assert_eq!(
            scoped_path("dns/edit", Some("example.com"), &["123"]),
            "dns/edit/example.com/123"
        );
        assert_eq!(
            scoped_path("dns/retrieveByNameType", Some("example.com"), &["A", ""]),
            "dns/retrieveByNameType/example.com/A"
        );
        assert_eq!(scoped_path("ssl/retrieve", None, &[]), "ssl/retrieve/");
    }
}
