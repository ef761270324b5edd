pub mod error;
pub mod services;
pub mod validation;

pub use error::{DomainError, ErrorCode, ErrorKind};
pub use validation::{FieldViolation, Validate, ValidationErrors};
