use std::error::Error as StdError;

use axum::{
    extract::{
        path::ErrorKind as PathErrorKind,
        rejection::{JsonRejection, PathRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use chrono::{SecondsFormat, Utc};
use orders_core::{
    DomainError, ErrorCode, ErrorKind, ValidationErrors,
    domain::common::error::INTERNAL_SERVER_ERROR_MESSAGE,
};
use serde_json::json;
use thiserror::Error;

use crate::http::server::{envelope::ErrorEnvelope, middleware::current_path};

pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Every failure that can leave a handler.
///
/// The variant is the handling path: a classified domain failure, a request the
/// binder rejected, or anything else. Responses are always an [`ErrorEnvelope`].
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error("unclassified failure: {0}")]
    Unclassified(BoxError),
}

impl ApiError {
    /// Picks the handling path of an arbitrary failure. First match wins:
    /// domain errors, then binding violations, then everything else.
    pub fn classify(failure: BoxError) -> Self {
        let failure = match failure.downcast::<DomainError>() {
            Ok(domain) => return ApiError::Domain(*domain),
            Err(other) => other,
        };
        match failure.downcast::<ValidationErrors>() {
            Ok(violations) => ApiError::Validation(*violations),
            Err(other) => ApiError::Unclassified(other),
        }
    }

    pub fn unclassified(failure: impl StdError + Send + Sync + 'static) -> Self {
        ApiError::Unclassified(Box::new(failure))
    }

    /// Builds the envelope of this failure. Never fails.
    pub fn to_envelope(&self, path: Option<String>) -> ErrorEnvelope {
        match self {
            ApiError::Domain(error) => ErrorEnvelope::from_domain(error, path),
            ApiError::Validation(violations) => ErrorEnvelope::from_violations(violations, path),
            ApiError::Unclassified(_) => ErrorEnvelope::unclassified(path),
        }
    }

    fn log(&self, path: Option<&str>) {
        match self {
            ApiError::Domain(error) => match error.kind() {
                ErrorKind::Business | ErrorKind::Validation => tracing::warn!(
                    path,
                    error_code = %error.code(),
                    error_type = %error.kind(),
                    "Business exception occurred: {}",
                    error.message()
                ),
                ErrorKind::System => tracing::error!(
                    path,
                    error_code = %error.code(),
                    cause = ?error.cause(),
                    "System error occurred: {}",
                    error.message()
                ),
            },
            ApiError::Validation(violations) => tracing::warn!(
                path,
                violations = ?violations.violations(),
                "Validation exception occurred"
            ),
            ApiError::Unclassified(failure) => tracing::error!(
                path,
                error = %failure,
                detail = ?failure,
                "Unexpected error occurred"
            ),
        }
    }
}

impl From<BoxError> for ApiError {
    fn from(failure: BoxError) -> Self {
        ApiError::classify(failure)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(ValidationErrors::single("body", rejection.body_text()))
    }
}

/// Name of the path parameter a rejection is about, when axum reports one.
pub(crate) fn rejected_path_param(rejection: &PathRejection) -> Option<String> {
    let PathRejection::FailedToDeserializePathParams(failure) = rejection else {
        return None;
    };
    match failure.kind() {
        PathErrorKind::ParseErrorAtKey { key, .. }
        | PathErrorKind::InvalidUtf8InPathParam { key }
        | PathErrorKind::DeserializeError { key, .. } => Some(key.clone()),
        _ => None,
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        let field = rejected_path_param(&rejection).unwrap_or_else(|| "path".to_owned());
        ApiError::Validation(ValidationErrors::single(field, rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let path = current_path();
        self.log(path.as_deref());
        render(self.to_envelope(path))
    }
}

/// Generic `500` envelope built without the envelope's serializer.
fn fallback_body(path: Option<&str>) -> String {
    let mut body = json!({
        "status": 500,
        "errorCode": ErrorCode::InternalServerError.as_str(),
        "message": INTERNAL_SERVER_ERROR_MESSAGE,
        "errorType": ErrorKind::System.as_str(),
        "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::AutoSi, true),
    });
    if let Some(path) = path {
        body["path"] = path.into();
    }
    body.to_string()
}

/// Serializes an envelope as the response body.
///
/// Falls back to a generic `500` envelope if serialization fails, so a
/// well-formed error body is always produced.
pub(crate) fn render(envelope: ErrorEnvelope) -> Response {
    let json = [(header::CONTENT_TYPE, "application/json")];
    match serde_json::to_vec(&envelope) {
        Ok(body) => (envelope.status(), json, body).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "failed to serialize error envelope");
            let body = fallback_body(envelope.path());
            (StatusCode::INTERNAL_SERVER_ERROR, json, body).into_response()
        }
    }
}
