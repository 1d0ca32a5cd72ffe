use std::fmt;
use std::str::FromStr;

/// DNS record types accepted by the registrar.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    MX,
    CNAME,
    ALIAS,
    TXT,
    NS,
    AAAA,
    SRV,
    TLSA,
    CAA,
    SVCB,
    HTTPS,
}

impl RecordType {
    /// Every type the registrar will store.
    pub const ALL: &'static [RecordType] = &[
        RecordType::A,
        RecordType::MX,
        RecordType::CNAME,
        RecordType::ALIAS,
        RecordType::TXT,
        RecordType::NS,
        RecordType::AAAA,
        RecordType::SRV,
        RecordType::TLSA,
        RecordType::CAA,
        RecordType::SVCB,
        RecordType::HTTPS,
    ];

    /// Types that carry a `prio` field.
    pub const WITH_PRIORITY: &'static [RecordType] = &[RecordType::SRV, RecordType::MX];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::MX => "MX",
            RecordType::CNAME => "CNAME",
            RecordType::ALIAS => "ALIAS",
            RecordType::TXT => "TXT",
            RecordType::NS => "NS",
            RecordType::AAAA => "AAAA",
            RecordType::SRV => "SRV",
            RecordType::TLSA => "TLSA",
            RecordType::CAA => "CAA",
            RecordType::SVCB => "SVCB",
            RecordType::HTTPS => "HTTPS",
        }
    }

    pub fn supports_priority(&self) -> bool {
        Self::WITH_PRIORITY.contains(self)
    }

    /// Address record type for an IP literal: AAAA if it contains a colon.
    pub fn for_address(ip: &str) -> Self {
        if ip.contains(':') {
            RecordType::AAAA
        } else {
            RecordType::A
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive lookup. Unknown names return `Err(())`; callers that need a
/// descriptive error go through `validate_record_type`.
impl FromStr for RecordType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        RecordType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == upper)
            .ok_or(())
    }
}

/// Renders a list of types the way error messages show them: `A, MX, ...`.
pub fn join_types(types: &[RecordType]) -> String {
    types
        .iter()
        .map(RecordType::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
