use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use orders_core::{
    DomainError, ErrorCode, ErrorKind, ValidationErrors,
    domain::common::error::INTERNAL_SERVER_ERROR_MESSAGE,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::http::server::status::status_for;

/// Canonical error body returned for every failed request.
///
/// Absent fields are left out of the JSON instead of being written as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEnvelope {
    #[schema(example = 404)]
    status: u16,
    error_code: ErrorCode,
    #[schema(example = "Order not found with id: Order with id: 999")]
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_type: Option<ErrorKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "/api/orders/999")]
    path: Option<String>,
    #[schema(value_type = String, format = DateTime)]
    timestamp: DateTime<Utc>,
}

impl ErrorEnvelope {
    fn new(
        status: StatusCode,
        error_code: ErrorCode,
        message: String,
        error_type: Option<ErrorKind>,
        path: Option<String>,
    ) -> Self {
        Self {
            status: status.as_u16(),
            error_code,
            message,
            error_type,
            path,
            timestamp: Utc::now(),
        }
    }

    /// Envelope for a classified domain failure. Code, kind and message are
    /// copied as is; the cause is not.
    pub fn from_domain(error: &DomainError, path: Option<String>) -> Self {
        Self::new(
            status_for(error.kind()),
            error.code(),
            error.message().to_owned(),
            Some(error.kind()),
            path,
        )
    }

    /// Envelope for a request the binder rejected.
    ///
    /// Only the first violation is reported, in the order the binder produced
    /// them.
    pub fn from_violations(errors: &ValidationErrors, path: Option<String>) -> Self {
        let message = errors
            .first()
            .map(|violation| format!("{}: {}", violation.field, violation.message))
            .unwrap_or_else(|| "Validation failed".to_owned());

        Self::new(
            StatusCode::BAD_REQUEST,
            ErrorCode::ValidationFailed,
            message,
            Some(ErrorKind::Validation),
            path,
        )
    }

    /// Envelope for a failure nobody classified. Nothing about the failure
    /// itself is disclosed.
    pub fn unclassified(path: Option<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorCode::InternalServerError,
            INTERNAL_SERVER_ERROR_MESSAGE.to_owned(),
            Some(ErrorKind::System),
            path,
        )
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn error_code(&self) -> ErrorCode {
        self.error_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn error_type(&self) -> Option<ErrorKind> {
        self.error_type
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use serde_json::{Value, json};

    use super::*;

    fn without_timestamp(envelope: &ErrorEnvelope) -> Value {
        let mut value = serde_json::to_value(envelope).unwrap();
        value.as_object_mut().unwrap().remove("timestamp");
        value
    }

    #[test]
    fn not_found_domain_error_becomes_a_404() {
        let error = DomainError::not_found("Order", 999);

        let envelope = ErrorEnvelope::from_domain(&error, Some("/api/orders/999".into()));

        assert_eq!(
            without_timestamp(&envelope),
            json!({
                "status": 404,
                "errorCode": "ORDER_NOT_FOUND",
                "message": "Order not found with id: Order with id: 999",
                "errorType": "BUSINESS",
                "path": "/api/orders/999"
            })
        );
    }

    #[test]
    fn validation_domain_error_becomes_a_400() {
        let error = DomainError::validation("price", "must not be null");

        let envelope = ErrorEnvelope::from_domain(&error, None);

        assert_eq!(envelope.status(), StatusCode::BAD_REQUEST);
        assert_eq!(envelope.error_type(), Some(ErrorKind::Validation));
        assert!(envelope.message().contains("price"));
        assert!(envelope.message().contains("must not be null"));
    }

    #[test]
    fn building_twice_differs_only_by_timestamp() {
        let error = DomainError::not_found("Order", 1);

        let first = ErrorEnvelope::from_domain(&error, Some("/api/orders/1".into()));
        let second = ErrorEnvelope::from_domain(&error, Some("/api/orders/1".into()));

        assert_eq!(without_timestamp(&first), without_timestamp(&second));
        assert!(first.timestamp() <= second.timestamp());
    }

    #[test]
    fn system_domain_error_hides_its_cause() {
        let error = DomainError::database(io::Error::other("password authentication failed"));

        let envelope = ErrorEnvelope::from_domain(&error, None);
        let body = serde_json::to_string(&envelope).unwrap();

        assert_eq!(envelope.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(envelope.error_code(), ErrorCode::DatabaseError);
        assert!(!body.contains("password authentication failed"));
    }

    #[test]
    fn first_violation_is_reported() {
        let mut errors = ValidationErrors::new();
        errors.add("price", "must not be null");
        errors.add("productName", "must not be blank");

        let envelope = ErrorEnvelope::from_violations(&errors, Some("/api/orders".into()));

        assert_eq!(
            without_timestamp(&envelope),
            json!({
                "status": 400,
                "errorCode": "VALIDATION_FAILED",
                "message": "price: must not be null",
                "errorType": "VALIDATION",
                "path": "/api/orders"
            })
        );
    }

    #[test]
    fn empty_violation_list_uses_the_generic_message() {
        let envelope = ErrorEnvelope::from_violations(&ValidationErrors::new(), None);

        assert_eq!(envelope.message(), "Validation failed");
        assert_eq!(envelope.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn unclassified_uses_the_generic_message() {
        let envelope = ErrorEnvelope::unclassified(Some("/api/orders".into()));

        assert_eq!(envelope.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(envelope.error_code(), ErrorCode::InternalServerError);
        assert_eq!(envelope.error_type(), Some(ErrorKind::System));
        assert_eq!(envelope.message(), INTERNAL_SERVER_ERROR_MESSAGE);
    }

    #[test]
    fn absent_fields_are_omitted_not_null() {
        let envelope = ErrorEnvelope::unclassified(None);

        let value = serde_json::to_value(&envelope).unwrap();
        let object = value.as_object().unwrap();

        assert!(!object.contains_key("path"));
        assert!(object.values().all(|v| !v.is_null()));
        assert!(object["timestamp"].is_string());
    }
}
