use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// A single field-level constraint violation reported while binding a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

/// Outcome of request binding when one or more fields are rejected.
///
/// Violations keep the order in which they were reported.
#[derive(Error, Debug, Clone, Default, PartialEq, Eq)]
#[error("request validation failed with {} violation(s)", .violations.len())]
pub struct ValidationErrors {
    violations: Vec<FieldViolation>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.violations.push(FieldViolation {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    pub fn first(&self) -> Option<&FieldViolation> {
        self.violations.first()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

/// Turns an unchecked request payload into a validated domain input.
pub trait Validate {
    type Valid;

    fn validate(self) -> Result<Self::Valid, ValidationErrors>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn violations_keep_reporting_order() {
        let mut errors = ValidationErrors::new();
        errors.add("productName", "must not be blank");
        errors.add("price", "must not be null");

        let fields: Vec<_> = errors.violations().iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, ["productName", "price"]);
        assert_eq!(errors.first().map(|v| v.field.as_str()), Some("productName"));
        assert_eq!(
            errors.to_string(),
            "request validation failed with 2 violation(s)"
        );
    }

    #[test]
    fn empty_errors_are_ok() {
        assert!(ValidationErrors::new().into_result().is_ok());
        assert!(ValidationErrors::single("price", "must not be null")
            .into_result()
            .is_err());
    }
}
