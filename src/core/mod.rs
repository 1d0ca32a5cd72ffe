pub mod domain;
pub mod record;
pub mod validation;

pub use domain::DefaultDomain;
pub use record::RecordType;
pub use validation::{ValidationError, validate_record_type};
