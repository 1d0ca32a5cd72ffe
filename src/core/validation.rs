use thiserror::Error;

use crate::core::record::{RecordType, join_types};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid record type '{record_type}'. Allowed types: {}", join_types(.allowed))]
    RecordTypeInvalid {
        record_type: String,
        allowed: &'static [RecordType],
    },

    #[error(
        "Record type '{record_type}' does not support a priority. Types with priority: {}",
        join_types(.allowed)
    )]
    PriorityNotSupported {
        record_type: RecordType,
        allowed: &'static [RecordType],
    },
}

/// Checks a record type (any case) and an optional priority before a request
/// is built. A priority of zero counts as absent.
pub fn validate_record_type(
    record_type: &str,
    prio: Option<u32>,
) -> Result<RecordType, ValidationError> {
    let parsed: RecordType = record_type.parse().map_err(|_| ValidationError::RecordTypeInvalid {
        record_type: record_type.to_ascii_uppercase(),
        allowed: RecordType::ALL,
    })?;

    if effective_priority(prio).is_some() && !parsed.supports_priority() {
        return Err(ValidationError::PriorityNotSupported {
            record_type: parsed,
            allowed: RecordType::WITH_PRIORITY,
        });
    }

    Ok(parsed)
}

/// `Some(0)` is treated the same as `None`.
pub fn effective_priority(prio: Option<u32>) -> Option<u32> {
    prio.filter(|p| *p != 0)
}
