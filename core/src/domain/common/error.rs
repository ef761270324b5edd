use std::{error::Error as StdError, fmt, sync::Arc};

use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

pub const INTERNAL_SERVER_ERROR_MESSAGE: &str =
    "An internal server error occurred. Please try again later.";
pub const DATABASE_ERROR_MESSAGE: &str = "Database operation failed. Please contact support.";
pub const NETWORK_ERROR_MESSAGE: &str = "Network operation failed. Please check your connection.";

/// Classification of a [`DomainError`], surfaced to clients as `errorType`.
///
/// The set is closed: every kind owns exactly one transport status class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// Expected domain-rule violation, e.g. a missing order.
    Business,
    /// Malformed or incomplete input.
    Validation,
    /// Infrastructure faults and programming defects.
    System,
}

impl ErrorKind {
    /// HTTP status class of the kind.
    ///
    /// Every business condition resolves to 404, including duplicates and
    /// invalid statuses. Clients rely on this mapping, so it is kept as is.
    pub const fn status_code(self) -> u16 {
        match self {
            ErrorKind::Business => 404,
            ErrorKind::Validation => 400,
            ErrorKind::System => 500,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Business => "BUSINESS",
            ErrorKind::Validation => "VALIDATION",
            ErrorKind::System => "SYSTEM",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stable machine-readable error codes, serialized as `errorCode`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    OrderNotFound,
    InvalidOrderStatus,
    DuplicateOrder,
    OrderProcessingError,
    ValidationFailed,
    InvalidInput,
    MissingRequiredField,
    InternalServerError,
    DatabaseError,
    NetworkError,
}

impl ErrorCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::OrderNotFound => "ORDER_NOT_FOUND",
            ErrorCode::InvalidOrderStatus => "INVALID_ORDER_STATUS",
            ErrorCode::DuplicateOrder => "DUPLICATE_ORDER",
            ErrorCode::OrderProcessingError => "ORDER_PROCESSING_ERROR",
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::InvalidInput => "INVALID_INPUT",
            ErrorCode::MissingRequiredField => "MISSING_REQUIRED_FIELD",
            ErrorCode::InternalServerError => "INTERNAL_SERVER_ERROR",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::NetworkError => "NETWORK_ERROR",
        }
    }

    /// Kind a code is raised with by the convenience constructors.
    pub const fn default_kind(self) -> ErrorKind {
        match self {
            ErrorCode::OrderNotFound
            | ErrorCode::InvalidOrderStatus
            | ErrorCode::DuplicateOrder
            | ErrorCode::OrderProcessingError => ErrorKind::Business,
            ErrorCode::ValidationFailed
            | ErrorCode::InvalidInput
            | ErrorCode::MissingRequiredField => ErrorKind::Validation,
            ErrorCode::InternalServerError | ErrorCode::DatabaseError | ErrorCode::NetworkError => {
                ErrorKind::System
            }
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub type ErrorCause = Arc<dyn StdError + Send + Sync + 'static>;

/// An expected, classified failure raised by domain logic.
///
/// `code` and `kind` are fixed at construction. The optional `cause` is kept
/// for diagnostics and is never part of the client-facing message.
#[derive(Error, Debug, Clone)]
#[error("{message}")]
pub struct DomainError {
    code: ErrorCode,
    kind: ErrorKind,
    message: String,
    #[source]
    cause: Option<ErrorCause>,
}

impl DomainError {
    pub fn new(code: ErrorCode, kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            code,
            kind,
            message: message.into(),
            cause: None,
        }
    }

    /// Attaches the underlying failure for diagnostics.
    pub fn with_cause(mut self, cause: impl StdError + Send + Sync + 'static) -> Self {
        self.cause = Some(Arc::new(cause));
        self
    }

    fn of(code: ErrorCode, message: String) -> Self {
        Self::new(code, code.default_kind(), message)
    }

    pub fn not_found(resource: &str, id: impl fmt::Display) -> Self {
        let subject = format!("{resource} with id: {id}");
        Self::of(
            ErrorCode::OrderNotFound,
            format!("Order not found with id: {subject}"),
        )
    }

    /// Request for a path no route serves.
    pub fn route_not_found(path: &str) -> Self {
        Self::of(
            ErrorCode::OrderNotFound,
            format!("No resource found at: {path}"),
        )
    }

    pub fn validation(field: &str, constraint: &str) -> Self {
        Self::of(
            ErrorCode::ValidationFailed,
            format!("Validation failed: {field} {constraint}"),
        )
    }

    pub fn invalid_order_status(status: &str) -> Self {
        Self::of(
            ErrorCode::InvalidOrderStatus,
            format!("Invalid order status: {status}"),
        )
    }

    pub fn duplicate_order(id: impl fmt::Display) -> Self {
        Self::of(
            ErrorCode::DuplicateOrder,
            format!("Order already exists with id: {id}"),
        )
    }

    pub fn order_processing(detail: &str) -> Self {
        Self::of(
            ErrorCode::OrderProcessingError,
            format!("Error processing order: {detail}"),
        )
    }

    pub fn invalid_input(detail: &str) -> Self {
        Self::of(
            ErrorCode::InvalidInput,
            format!("Invalid input provided: {detail}"),
        )
    }

    pub fn missing_required_field(field: &str) -> Self {
        Self::of(
            ErrorCode::MissingRequiredField,
            format!("Required field is missing: {field}"),
        )
    }

    pub fn internal(cause: impl StdError + Send + Sync + 'static) -> Self {
        Self::of(
            ErrorCode::InternalServerError,
            INTERNAL_SERVER_ERROR_MESSAGE.to_owned(),
        )
        .with_cause(cause)
    }

    pub fn database(cause: impl StdError + Send + Sync + 'static) -> Self {
        Self::of(ErrorCode::DatabaseError, DATABASE_ERROR_MESSAGE.to_owned()).with_cause(cause)
    }

    pub fn network(cause: impl StdError + Send + Sync + 'static) -> Self {
        Self::of(ErrorCode::NetworkError, NETWORK_ERROR_MESSAGE.to_owned()).with_cause(cause)
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.cause.as_deref()
    }
}
